use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Rust";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"borrow of moved value: `(\w+)`",
        title: "Borrow of Moved Value",
        category: CATEGORY,
        explanation: "Ownership of the value moved elsewhere, so it can no longer be used here (E0382).",
        fix: "Borrow `$1` instead of moving it (`&$1`), clone it, or restructure so the move happens last.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"cannot borrow `([^`]+)` as mutable",
        title: "Conflicting Mutable Borrow",
        category: CATEGORY,
        explanation: "A mutable borrow overlaps with another borrow of the same value (E0499/E0502).",
        fix: "Shorten the other borrow of `$1` so it ends before the mutable one, or split the data.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"error\[E0308\]: mismatched types",
        title: "Rust Mismatched Types",
        category: CATEGORY,
        explanation: "An expression has a different type than its context requires.",
        fix: "Read the `expected`/`found` notes and convert the value (`.into()`, `as`, `&`, `.to_string()`).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"error\[E0432\]: unresolved import `([^`]+)`",
        title: "Unresolved Import",
        category: CATEGORY,
        explanation: "A `use` path does not point to an existing item.",
        fix: "Check the path of `$1`, the crate's feature flags, and whether the module is declared with `mod`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"use of undeclared crate or module `(\w+)`",
        title: "Undeclared Crate",
        category: CATEGORY,
        explanation: "The crate is not listed in Cargo.toml, or the module is not in scope.",
        fix: "Add the dependency with `cargo add $1`, or import the module with `use`.",
        auto_fix_cmd: Some("cargo add $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"cannot find value `(\w+)` in this scope",
        title: "Value Not in Scope",
        category: CATEGORY,
        explanation: "The identifier is not declared or imported here (E0425).",
        fix: "Declare `$1` or bring it into scope with `use`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"does not live long enough",
        title: "Value Does Not Live Long Enough",
        category: CATEGORY,
        explanation: "A reference outlives the value it points to (E0597).",
        fix: "Move the value to an outer scope, return an owned value, or clone it.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"the trait bound `(.+?)` is not satisfied",
        title: "Trait Bound Not Satisfied",
        category: CATEGORY,
        explanation: "A generic function or method requires a trait implementation that the type lacks (E0277).",
        fix: "Implement or derive the trait so that `$1` holds, or use a type that already does.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"called `Option::unwrap\(\)` on a `None` value",
        title: "Unwrap on None",
        category: CATEGORY,
        explanation: "The program panicked because an Option it assumed was Some held None.",
        fix: "Handle the None case with `match`, `if let`, `?` or `unwrap_or`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"called `Result::unwrap\(\)` on an `Err` value",
        title: "Unwrap on Err",
        category: CATEGORY,
        explanation: "The program panicked because a Result it assumed was Ok held an error.",
        fix: "Propagate the error with `?` or handle it with `match`. The error value is printed after this message.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"index out of bounds: the len is (\d+) but the index is (\d+)",
        title: "Rust Index Out of Bounds",
        category: CATEGORY,
        explanation: "A slice or Vec was indexed past its length.",
        fix: "The length is $1 but index $2 was used. Use `.get($2)` or check the bounds first.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"unused variable: `(\w+)`",
        title: "Rust Unused Variable",
        category: CATEGORY,
        explanation: "A binding is never read.",
        fix: "Remove `$1`, or rename it to `_$1` if it is intentionally unused.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
];
