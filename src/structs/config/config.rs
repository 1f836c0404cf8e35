use serde::{Deserialize, Serialize};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::pattern_rule::PatternRule;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    /// User-defined signatures, matched after the built-in catalog.
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}
