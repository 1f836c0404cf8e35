pub mod severity;
pub mod output_format;
pub mod input_source;
