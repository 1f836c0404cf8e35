use regex::{Regex, RegexBuilder};
use crate::config::constants::PATTERN_SIZE_LIMIT;
use crate::enums::severity::Severity;
use crate::errors::{ErrlensError, ErrlensResult};
use crate::helpers::placeholder;
use crate::structs::pattern_def::PatternDef;

/// A compiled catalog entry. Built once, then only ever shared by reference.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub regex: Regex,
    pub title: String,
    pub category: String,
    pub explanation: String,
    pub fix: String,
    pub auto_fix_cmd: Option<String>,
    pub severity: Severity,
}

impl PatternEntry {
    pub fn compile(def: &PatternDef) -> ErrlensResult<Self> {
        Self::build(
            def.pattern,
            def.title,
            def.category,
            def.explanation,
            def.fix,
            def.auto_fix_cmd,
            def.severity,
        )
    }

    pub fn build(
        pattern: &str,
        title: &str,
        category: &str,
        explanation: &str,
        fix: &str,
        auto_fix_cmd: Option<&str>,
        severity: Severity,
    ) -> ErrlensResult<Self> {
        if title.trim().is_empty() {
            return Err(ErrlensError::invalid_entry(pattern, "title must not be empty"));
        }
        if pattern.is_empty() {
            return Err(ErrlensError::invalid_entry(title, "pattern must not be empty"));
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| ErrlensError::invalid_pattern(title, pattern, &e.to_string()))?;

        Ok(Self {
            regex,
            title: title.to_string(),
            category: category.to_string(),
            explanation: explanation.to_string(),
            fix: fix.to_string(),
            auto_fix_cmd: auto_fix_cmd.map(ToString::to_string),
            severity,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of capturing groups, not counting the implicit whole-match group.
    pub fn capture_group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Highest `$N` referenced by `fix` or `auto_fix_cmd`.
    pub fn highest_placeholder(&self) -> usize {
        let in_fix = placeholder::highest_index(&self.fix);
        let in_cmd = self.auto_fix_cmd.as_deref().map_or(0, placeholder::highest_index);
        in_fix.max(in_cmd)
    }

    pub fn has_auto_fix(&self) -> bool {
        self.auto_fix_cmd.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiles_case_insensitive() {
        let entry = PatternEntry::build(r"cannot find module '([^']+)'", "Module", "Node.js", "", "npm i $1", Some("npm i $1"), Severity::Error).unwrap();
        assert!(entry.regex.is_match("CANNOT FIND MODULE 'x'"));
        assert_eq!(entry.capture_group_count(), 1);
        assert_eq!(entry.highest_placeholder(), 1);
        assert!(entry.has_auto_fix());
    }

    #[test]
    fn test_invalid_regex_is_reported_with_title() {
        let err = PatternEntry::build(r"unclosed (group", "Broken", "Test", "", "", None, Severity::Info).unwrap_err();
        match err {
            ErrlensError::InvalidPattern { title, pattern, .. } => {
                assert_eq!(title, "Broken");
                assert_eq!(pattern, "unclosed (group");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = PatternEntry::build("x", "  ", "Test", "", "", None, Severity::Info).unwrap_err();
        assert!(matches!(err, ErrlensError::InvalidEntry { .. }));
    }

    #[test]
    fn test_non_capturing_groups_not_counted() {
        let entry = PatternEntry::build(r"(?:a|b)(c)", "T", "Test", "", "", None, Severity::Info).unwrap();
        assert_eq!(entry.capture_group_count(), 1);
    }
}
