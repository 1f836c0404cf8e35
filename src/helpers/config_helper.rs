use crate::enums::output_format::OutputFormat;

pub struct ConfigHelper;

impl ConfigHelper {
    pub const fn default_color() -> bool {
        true
    }

    pub const fn default_format() -> OutputFormat {
        OutputFormat::Text
    }

    pub const fn default_show_location() -> bool {
        true
    }

    pub fn default_severity() -> String {
        "error".to_string()
    }
}
