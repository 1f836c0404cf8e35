pub mod input_reader;
pub mod location_extractor;
pub mod matcher;
pub mod pattern_catalog;
