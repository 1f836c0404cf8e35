use errlens::structs::stack_location::StackLocation;
use crate::common::{builtin_matcher, titles, TYPE_ERROR_TRACE};

#[test]
fn test_missing_module_has_auto_fix() {
    let results = builtin_matcher().analyze("Error: Cannot find module 'express'");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.title(), "Module Not Found");
    assert_eq!(result.category(), "Node.js");
    assert_eq!(result.groups, vec!["express".to_string()]);
    assert_eq!(result.auto_fix_cmd().as_deref(), Some("npm install express"));
}

#[test]
fn test_type_error_trace_points_at_user_code() {
    let matcher = builtin_matcher();
    let results = matcher.analyze(TYPE_ERROR_TRACE);

    assert_eq!(titles(&results), vec!["Cannot Read Property of Undefined"]);
    assert_eq!(results[0].line_number, 1);
    assert_eq!(
        matcher.extract_location(TYPE_ERROR_TRACE),
        Some(StackLocation {
            file: "/app/components/UserList.tsx".to_string(),
            line: 12,
            column: 18,
        })
    );
}

#[test]
fn test_dependency_frame_alone_gives_no_location() {
    let trace = "Error: boom\n    at Layer.handle (/srv/node_modules/express/lib/router/layer.js:95:5)";
    assert_eq!(builtin_matcher().extract_location(trace), None);
}

#[test]
fn test_empty_input() {
    let matcher = builtin_matcher();
    assert!(matcher.analyze("").is_empty());
    assert_eq!(matcher.extract_location(""), None);
}

#[test]
fn test_two_errors_on_two_lines() {
    let input = "Error: Cannot find module 'dotenv'\nTypeError: Cannot read properties of null (reading 'id')";
    let results = builtin_matcher().analyze(input);

    assert_eq!(titles(&results), vec!["Module Not Found", "Cannot Read Property of Undefined"]);
    assert_eq!(results[0].line_number, 1);
    assert_eq!(results[1].line_number, 2);
    assert_eq!(results[1].groups, vec!["null".to_string()]);
}

#[test]
fn test_port_specific_entry_is_reported_first() {
    let results = builtin_matcher().analyze("Error: connect ECONNREFUSED 127.0.0.1:5432");
    assert_eq!(titles(&results), vec!["PostgreSQL Connection Refused", "Connection Refused"]);
}

#[test]
fn test_unrecognized_text_is_not_an_error() {
    let matcher = builtin_matcher();
    let report = matcher.analyze_report("everything is fine, nothing to see", None);
    assert!(report.is_empty());
    assert_eq!(report.match_count, 0);
}
