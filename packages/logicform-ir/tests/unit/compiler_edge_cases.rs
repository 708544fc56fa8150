//! Compiler edge cases
//!
//! Unusual argument text, dependency shapes and record orders.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use logicform_ir::features::compiler::OperationCompiler;
use logicform_ir::features::expression::NodeKind;
use logicform_ir::ErrorKind;

// ═══════════════════════════════════════════════════════════════════════════
// Argument shapes
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_placeholder_ids_never_alias() {
    let records = ProgramBuilder::new()
        .select("rock (-)")
        .select("rock (-)")
        .op("and", "", &[0, 1])
        .build();
    assert_converts_to(&records, "object(rock, $X) and object(rock, $Y)");
}

#[test]
fn test_synthetic_id_does_not_collide_with_explicit_zero() {
    let records = ProgramBuilder::new()
        .select("sky")
        .select("cloud (0)")
        .op("and", "", &[0, 1])
        .build();
    assert_converts_to(&records, "object(sky, $X) and object(cloud, $Y)");
}

#[test]
fn test_same_explicit_id_reuses_variable() {
    let records = ProgramBuilder::new()
        .select("man (5)")
        .relate("_,holding,o (6)", 0)
        .relate("_,near,s (5)", 1)
        .build();
    // the relate target `5` is the already selected man
    assert_converts_to(
        &records,
        "near($X, $Y) and holding($X, $Y) and object(man, $X)",
    );
}

#[test]
fn test_hyphenated_and_multiword_names() {
    let records = ProgramBuilder::new()
        .select("t-shirt (2)")
        .relate("baseball bat,near,s (3)", 0)
        .build();
    assert_converts_to(
        &records,
        "near($Y, $X) and object(baseball_bat, $Y) and object(t-shirt, $X)",
    );
}

#[test]
fn test_group_selection_binds_list_variable() {
    let records = ProgramBuilder::new()
        .select("chairs (4,5,6)")
        .op("exist", "?", &[0])
        .build();
    assert_converts_to(&records, "exists(list($X)) and object(chairs, list($X))");
}

#[test]
fn test_unmatched_select_argument() {
    let records = ProgramBuilder::new().select("man's hat (3)").build();
    assert_fails_with(&records, ErrorKind::Lookup);
}

#[test]
fn test_malformed_direction_field() {
    let records = ProgramBuilder::new()
        .select("dog (1)")
        .relate("_,near,x (2)", 0)
        .build();
    assert_fails_with(&records, ErrorKind::Lookup);
}

// ═══════════════════════════════════════════════════════════════════════════
// Dependency shapes
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_relate_requires_single_dependency() {
    let records = ProgramBuilder::new()
        .select("dog (1)")
        .select("cat (2)")
        .op("relate", "_,near,s (3)", &[0, 1])
        .build();
    assert_fails_with(&records, ErrorKind::Arity);
}

#[test]
fn test_query_without_dependency() {
    let records = ProgramBuilder::new()
        .select("dog (1)")
        .op("query", "name", &[])
        .build();
    assert_fails_with(&records, ErrorKind::Arity);
}

#[test]
fn test_self_reference_is_rejected() {
    let records = ProgramBuilder::new()
        .select("dog (1)")
        .op("exist", "?", &[1])
        .build();
    assert_fails_with(&records, ErrorKind::Lookup);
}

#[test]
fn test_single_operand_comparison_needs_one_variable() {
    let records = ProgramBuilder::new()
        .select("dog (1)")
        .relate("_,near,s (2)", 0)
        .op("same", "color", &[1])
        .build();
    assert_fails_with(&records, ErrorKind::Arity);
}

#[test]
fn test_and_of_or_renders_nested_disjunction() {
    let records = ProgramBuilder::new()
        .select("dog (1)")
        .op("exist", "?", &[0])
        .select("cat (2)")
        .op("exist", "?", &[2])
        .op("or", "", &[1, 3])
        .select("bird (3)")
        .op("exist", "?", &[5])
        .op("and", "", &[4, 6])
        .build();
    assert_converts_to(
        &records,
        "Or(exists($X),exists($Y)) and exists($X) and object(dog, $X) and exists($Y) \
         and object(cat, $Y) and exists($Z) and object(bird, $Z)",
    );
}

#[test]
fn test_or_of_ands_lists_nested_conjunction_text() {
    // a nested `and` renders as its joined members, a distinct identity, so
    // each branch lists it before the members themselves
    let records = ProgramBuilder::new()
        .select("man (1)")
        .op("exist", "?", &[0])
        .select("dog (2)")
        .op("exist", "?", &[2])
        .op("and", "", &[1, 3])
        .select("cat (3)")
        .op("exist", "?", &[5])
        .op("and", "", &[1, 6])
        .op("or", "", &[4, 7])
        .build();
    assert_converts_to(
        &records,
        "exists($X) and exists($Y) and exists($X) and object(man, $X) \
         and exists($Y) and object(dog, $Y) \
         or exists($X) and exists($Z) and exists($X) and object(man, $X) \
         and exists($Z) and object(cat, $Z)",
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Run inspection
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_keeps_one_result_per_record() {
    let records = sitting_on_bench();
    let run = OperationCompiler::default().build(&records).unwrap();

    assert_eq!(run.results().len(), records.len());
    // select, pose filter, relation
    assert_eq!(run.graph().len(), 3);
    let root = run.root().unwrap();
    assert!(matches!(run.graph().node(root).kind, NodeKind::Relation { .. }));
}

#[test]
fn test_long_program_converts_iteratively() {
    let mut builder = ProgramBuilder::new().select("wall (1)");
    for i in 0..5_000 {
        let dep = builder.next_index() - 1;
        builder = builder.filter("", &format!("v{}", i), dep);
    }
    let out = logicform_ir::convert(&builder.build()).unwrap();
    assert!(out.starts_with("is(v4999, $X) and is(v4998, $X)"));
    assert!(out.ends_with("is(v0, $X) and object(wall, $X)"));
}
