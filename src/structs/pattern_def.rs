use crate::enums::severity::Severity;

/// A catalog entry as written in source: plain data, compiled at startup.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub pattern: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub explanation: &'static str,
    pub fix: &'static str,
    pub auto_fix_cmd: Option<&'static str>,
    pub severity: Severity,
}
