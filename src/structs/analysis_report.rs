use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::structs::match_result::MatchResult;
use crate::structs::stack_location::StackLocation;

/// JSON document produced by `--json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub match_count: usize,
    pub matches: Vec<MatchReport>,
    pub source_location: Option<StackLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub title: String,
    pub category: String,
    pub severity: Severity,
    pub explanation: String,
    pub fix: String,
    pub auto_fix_cmd: Option<String>,
    pub matched_line: String,
    pub line_number: usize,
}

impl From<&MatchResult<'_>> for MatchReport {
    fn from(result: &MatchResult<'_>) -> Self {
        Self {
            title: result.title().to_string(),
            category: result.category().to_string(),
            severity: result.severity(),
            explanation: result.explanation().to_string(),
            fix: result.fix(),
            auto_fix_cmd: result.auto_fix_cmd(),
            matched_line: result.matched_line.clone(),
            line_number: result.line_number,
        }
    }
}

impl AnalysisReport {
    pub fn new(results: &[MatchResult<'_>], source_location: Option<StackLocation>) -> Self {
        let matches: Vec<MatchReport> = results.iter().map(MatchReport::from).collect();
        Self {
            match_count: matches.len(),
            matches,
            source_location,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
