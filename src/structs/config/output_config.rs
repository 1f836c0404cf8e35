use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_color")]
    pub color: bool,

    #[serde(default = "ConfigHelper::default_format")]
    pub format: OutputFormat,

    #[serde(default = "ConfigHelper::default_show_location")]
    pub show_location: bool,

    #[serde(default)]
    pub max_matches: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ConfigHelper::default_color(),
            format: ConfigHelper::default_format(),
            show_location: ConfigHelper::default_show_location(),
            max_matches: None,
        }
    }
}
