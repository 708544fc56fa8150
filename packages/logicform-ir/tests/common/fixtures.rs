//! Canned question programs

use super::ProgramBuilder;
use logicform_ir::OperationRecord;

/// "Is the chair on top of the table?", relating in object mode
///
/// Object mode orders the chair first: `on_top_of($X, $Y)`. With `s(1)` the
/// table becomes the subject instead.
pub fn chair_on_table_object_mode() -> Vec<OperationRecord> {
    ProgramBuilder::new()
        .select("chair(0)")
        .select("table(1)")
        .relate("_,on_top_of, o(1)", 0)
        .op("and", "", &[2, 1])
        .build()
}

/// "Who is sitting on top of the bench?"
pub fn sitting_on_bench() -> Vec<OperationRecord> {
    ProgramBuilder::new()
        .select("bench (4)")
        .relate("_,sitting on top of,s (9)", 0)
        .build()
}

/// "Does the cup have the same color as the plate?"
pub fn same_color_as_plate() -> Vec<OperationRecord> {
    ProgramBuilder::new()
        .select("plate (3)")
        .relate("cup,same color,s (8)", 0)
        .op("exist", "?", &[1])
        .build()
}

/// Two attribute filters over one object, joined back together
pub fn diamond() -> Vec<OperationRecord> {
    ProgramBuilder::new()
        .select("table (1)")
        .filter("color", "brown", 0)
        .filter("material", "wood", 0)
        .op("and", "", &[1, 2])
        .build()
}

/// A realistic longer question touching most operations
///
/// "Is the man to the left of the bike wearing a hat or a helmet?"
pub fn man_left_of_bike() -> Vec<OperationRecord> {
    ProgramBuilder::new()
        .select("bike (10)")
        .relate("man,to the left of,s (11)", 0)
        .relate("_,wearing,o (12)", 1)
        .op("choose name", "hat|helmet", &[2])
        .build()
}

/// Every keyword in the catalog of operations, in one valid program each
pub fn one_program_per_operation() -> Vec<(&'static str, Vec<OperationRecord>)> {
    vec![
        ("select", ProgramBuilder::new().select("dog (1)").build()),
        (
            "filter",
            ProgramBuilder::new().select("dog (1)").filter("", "old", 0).build(),
        ),
        (
            "exist",
            ProgramBuilder::new()
                .select("dog (1)")
                .op("exist", "?", &[0])
                .build(),
        ),
        (
            "or",
            ProgramBuilder::new()
                .select("dog (1)")
                .select("cat (2)")
                .op("or", "", &[0, 1])
                .build(),
        ),
        (
            "and",
            ProgramBuilder::new()
                .select("dog (1)")
                .select("cat (2)")
                .op("and", "", &[0, 1])
                .build(),
        ),
        (
            "relate",
            ProgramBuilder::new()
                .select("dog (1)")
                .relate("_,near,s (2)", 0)
                .build(),
        ),
        (
            "verify",
            ProgramBuilder::new()
                .select("dog (1)")
                .op("verify color", "black", &[0])
                .build(),
        ),
        ("query", ProgramBuilder::new().select("dog (1)").query("name", 0).build()),
        (
            "choose",
            ProgramBuilder::new()
                .select("dog (1)")
                .op("choose size", "small|large", &[0])
                .build(),
        ),
        (
            "different",
            ProgramBuilder::new()
                .select("dog (1)")
                .select("cat (2)")
                .op("different color", "", &[0, 1])
                .build(),
        ),
        (
            "same",
            ProgramBuilder::new()
                .select("dog (1)")
                .select("cat (2)")
                .op("same", "color", &[0, 1])
                .build(),
        ),
        (
            "common",
            ProgramBuilder::new()
                .select("dog (1)")
                .select("cat (2)")
                .op("common", "", &[0, 1])
                .build(),
        ),
    ]
}
