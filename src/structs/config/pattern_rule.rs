use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::errors::{ErrlensError, ErrlensResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::pattern_entry::PatternEntry;

/// A user-defined catalog entry from the `[[patterns]]` config table.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PatternRule {
    pub pattern: String,
    pub title: String,
    #[serde(default = "PatternRule::default_category")]
    pub category: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub fix: String,
    #[serde(default)]
    pub auto_fix_cmd: Option<String>,
    #[serde(default = "ConfigHelper::default_severity")]
    pub severity: String,
}

impl PatternRule {
    fn default_category() -> String {
        "Custom".to_string()
    }

    pub fn to_entry(&self) -> ErrlensResult<PatternEntry> {
        let severity: Severity = self.severity.parse().map_err(|reason: String| {
            ErrlensError::config_error(
                &format!("pattern '{}': {}", self.title, reason),
                Some("patterns.severity"),
                Some("Use one of: error, warning, info"),
            )
        })?;

        // An empty auto-fix in config means "none", not an empty command.
        let auto_fix_cmd = self.auto_fix_cmd.as_deref().filter(|cmd| !cmd.trim().is_empty());

        PatternEntry::build(
            &self.pattern,
            &self.title,
            &self.category,
            &self.explanation,
            &self.fix,
            auto_fix_cmd,
            severity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(severity: &str, auto_fix_cmd: Option<&str>) -> PatternRule {
        PatternRule {
            pattern: r"billing-service timed out after (\d+)ms".to_string(),
            title: "Billing Timeout".to_string(),
            category: "Internal".to_string(),
            explanation: "The billing service is slow.".to_string(),
            fix: "Raise the timeout above $1ms".to_string(),
            auto_fix_cmd: auto_fix_cmd.map(ToString::to_string),
            severity: severity.to_string(),
        }
    }

    #[test]
    fn test_rule_compiles_to_entry() {
        let entry = rule("warning", None).to_entry().unwrap();
        assert_eq!(entry.severity, Severity::Warning);
        assert_eq!(entry.capture_group_count(), 1);
        assert!(entry.auto_fix_cmd.is_none());
    }

    #[test]
    fn test_unknown_severity_is_config_error() {
        let err = rule("fatal", None).to_entry().unwrap_err();
        assert!(matches!(err, ErrlensError::ConfigurationError { .. }));
    }

    #[test]
    fn test_blank_auto_fix_becomes_none() {
        let entry = rule("info", Some("  ")).to_entry().unwrap();
        assert!(!entry.has_auto_fix());
    }
}
