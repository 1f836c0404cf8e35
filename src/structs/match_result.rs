use crate::enums::severity::Severity;
use crate::helpers::placeholder;
use crate::structs::pattern_entry::PatternEntry;

/// One accepted pairing of an input line with a catalog entry.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub entry: &'a PatternEntry,
    /// The trimmed input line that triggered the match.
    pub matched_line: String,
    /// 1-based.
    pub line_number: usize,
    /// Captured substrings in group order. A group that did not take part in
    /// the match is recorded as an empty string so positions stay stable.
    pub groups: Vec<String>,
}

impl<'a> MatchResult<'a> {
    pub fn title(&self) -> &'a str {
        &self.entry.title
    }

    pub fn category(&self) -> &'a str {
        &self.entry.category
    }

    pub const fn severity(&self) -> Severity {
        self.entry.severity
    }

    pub fn explanation(&self) -> &'a str {
        &self.entry.explanation
    }

    pub fn fix(&self) -> String {
        placeholder::substitute(&self.entry.fix, &self.groups)
    }

    /// `None` when the entry defines no auto-fix; never an empty string.
    pub fn auto_fix_cmd(&self) -> Option<String> {
        self.entry
            .auto_fix_cmd
            .as_deref()
            .map(|template| placeholder::substitute(template, &self.groups))
    }
}
