use serde_json::Value;
use crate::common::{builtin_matcher, TYPE_ERROR_TRACE};

#[test]
fn test_report_json_shape() {
    let report = builtin_matcher().analyze_report("Error: Cannot find module 'express'", None);
    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["matchCount"], 1);
    assert!(json["sourceLocation"].is_null());

    let entry = &json["matches"][0];
    assert_eq!(entry["title"], "Module Not Found");
    assert_eq!(entry["category"], "Node.js");
    assert_eq!(entry["severity"], "error");
    assert_eq!(entry["autoFixCmd"], "npm install express");
    assert_eq!(entry["matchedLine"], "Error: Cannot find module 'express'");
    assert_eq!(entry["lineNumber"], 1);
    assert!(entry["fix"].as_str().unwrap().contains("express"));
    assert!(entry["explanation"].is_string());
}

#[test]
fn test_absent_auto_fix_serializes_as_null() {
    let report = builtin_matcher().analyze_report(TYPE_ERROR_TRACE, None);
    let json: Value = serde_json::to_value(&report).unwrap();

    let entry = &json["matches"][0];
    assert!(entry.get("autoFixCmd").is_some());
    assert!(entry["autoFixCmd"].is_null());
    assert_eq!(json["sourceLocation"]["file"], "/app/components/UserList.tsx");
    assert_eq!(json["sourceLocation"]["line"], 12);
    assert_eq!(json["sourceLocation"]["column"], 18);
}

#[test]
fn test_report_round_trips_through_json() {
    let report = builtin_matcher().analyze_report(TYPE_ERROR_TRACE, None);
    let parsed: errlens::structs::analysis_report::AnalysisReport =
        serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(parsed, report);
}
