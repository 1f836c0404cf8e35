use std::collections::HashSet;
use proptest::prelude::*;
use errlens::helpers::placeholder;
use crate::common::{builtin_matcher, titles};

const KNOWN_LINES: &[&str] = &[
    "Error: Cannot find module 'express'",
    "TypeError: Cannot read properties of undefined (reading 'map')",
    "    at UserList (/app/components/UserList.tsx:12:18)",
    "Error: listen EADDRINUSE: address already in use :::3000",
    "Error: connect ECONNREFUSED 127.0.0.1:5432",
    "npm ERR! code ERESOLVE",
    "fatal: not a git repository (or any of the parent directories): .git",
    "ModuleNotFoundError: No module named 'requests'",
    "bash: cargo: command not found",
];

fn error_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(KNOWN_LINES).prop_map(String::from),
            "[a-zA-Z0-9 :'./()_-]{0,60}",
        ],
        0..12,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn titles_are_never_repeated(input in error_text()) {
        let results = builtin_matcher().analyze(&input);
        let mut seen = HashSet::new();
        for result in &results {
            prop_assert!(seen.insert(result.title()), "repeated title {}", result.title());
        }
    }

    #[test]
    fn analysis_is_deterministic(input in error_text()) {
        let matcher = builtin_matcher();
        prop_assert_eq!(titles(&matcher.analyze(&input)), titles(&matcher.analyze(&input)));
    }

    #[test]
    fn repeating_input_adds_nothing(input in error_text()) {
        let matcher = builtin_matcher();
        let once = matcher.analyze(&input);
        let twice = matcher.analyze(&format!("{}\n{}", input, input));
        prop_assert_eq!(titles(&once), titles(&twice));
        for (a, b) in once.iter().zip(&twice) {
            prop_assert_eq!(a.line_number, b.line_number);
        }
    }

    #[test]
    fn absent_auto_fix_stays_absent(input in error_text()) {
        for result in builtin_matcher().analyze(&input) {
            prop_assert_eq!(result.entry.auto_fix_cmd.is_none(), result.auto_fix_cmd().is_none());
            if let Some(cmd) = result.auto_fix_cmd() {
                prop_assert!(!cmd.is_empty());
            }
        }
    }

    #[test]
    fn results_point_at_their_lines(input in error_text()) {
        let lines: Vec<&str> = input.split('\n').collect();
        let results = builtin_matcher().analyze(&input);
        let mut last_line = 0;
        for result in &results {
            prop_assert_eq!(lines[result.line_number - 1].trim(), result.matched_line.as_str());
            prop_assert!(result.line_number >= last_line);
            last_line = result.line_number;
        }
    }

    #[test]
    fn templates_without_dollar_are_untouched(template in "[^$]{0,80}", groups in prop::collection::vec("[a-z]{0,8}", 0..4)) {
        prop_assert_eq!(placeholder::substitute(&template, &groups), template);
    }
}
