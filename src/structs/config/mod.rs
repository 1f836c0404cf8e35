pub mod config;
pub mod output_config;
pub mod pattern_rule;
