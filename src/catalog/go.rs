use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Go";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r#""([^"]+)" imported (?:and|but) not used"#,
        title: "Go Unused Import",
        category: CATEGORY,
        explanation: "Go refuses to compile with unused imports.",
        fix: "Remove the import of \"$1\", or run goimports to clean imports up.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"declared (?:and|but) not used",
        title: "Go Unused Variable",
        category: CATEGORY,
        explanation: "Go refuses to compile with unused local variables.",
        fix: "Use the variable or assign it to `_`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"invalid memory address or nil pointer dereference",
        title: "Go Nil Pointer Dereference",
        category: CATEGORY,
        explanation: "A nil pointer, map or interface was dereferenced.",
        fix: "Check the value for nil before use. An ignored error return often leaves the other result nil.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"no required module provides package ([^\s;]+)",
        title: "Go Missing Module",
        category: CATEGORY,
        explanation: "The package is imported but no module in go.mod provides it.",
        fix: "Fetch it with `go get $1`, then run `go mod tidy`.",
        auto_fix_cmd: Some("go get $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"all goroutines are asleep - deadlock!",
        title: "Go Deadlock",
        category: CATEGORY,
        explanation: "Every goroutine is blocked, usually on a channel that nobody sends to or receives from.",
        fix: "Check unbuffered channel operations and make sure every send has a receiver (and the reverse).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"concurrent map (?:writes|read and map write)",
        title: "Go Concurrent Map Access",
        category: CATEGORY,
        explanation: "A map was written from several goroutines without synchronization.",
        fix: "Guard the map with a sync.Mutex or use sync.Map. Run tests with -race.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"index out of range \[(\d+)\] with length (\d+)",
        title: "Go Index Out of Range",
        category: CATEGORY,
        explanation: "A slice or array was indexed past its length.",
        fix: "Index $1 is invalid for length $2. Check the bounds before indexing.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
