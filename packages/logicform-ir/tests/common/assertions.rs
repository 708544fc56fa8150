//! Custom assertions for conversion results

use logicform_ir::{convert, ErrorKind, OperationRecord};
use pretty_assertions::assert_eq;

/// Assert the canonical logical form of `records`
pub fn assert_converts_to(records: &[OperationRecord], expected: &str) {
    match convert(records) {
        Ok(actual) => assert_eq!(actual, expected),
        Err(err) => panic!("Expected '{}', conversion failed: {}", expected, err),
    }
}

/// Assert that conversion fails with `kind`
pub fn assert_fails_with(records: &[OperationRecord], kind: ErrorKind) {
    match convert(records) {
        Ok(actual) => panic!("Expected {} error, converted to '{}'", kind, actual),
        Err(err) => assert_eq!(err.kind, kind, "unexpected error: {}", err),
    }
}

/// Assert that `haystack` contains `needle` verbatim
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected to find '{}' in '{}'",
        needle,
        haystack
    );
}
