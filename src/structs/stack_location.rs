use std::fmt;
use serde::{Deserialize, Serialize};

/// Best-guess source position pulled from a stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for StackLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
