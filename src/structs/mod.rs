pub mod analysis_report;
pub mod catalog_stats;
pub mod category_stats;
pub mod cli;
pub mod config;
pub mod match_result;
pub mod pattern_def;
pub mod pattern_entry;
pub mod stack_location;
