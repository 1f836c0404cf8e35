pub const CONFIG_DIR_NAME: &str = "errlens";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_ENV: &str = "ERRLENS_CONFIG";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Upper bound on a single compiled pattern, in bytes.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Frames whose path contains one of these belong to dependencies or the
/// runtime itself, never to the user's code.
pub const DEPENDENCY_DIR_MARKER: &str = "node_modules";
pub const INTERNAL_RUNTIME_MARKER: &str = "node:internal";
pub const EXCLUDED_PATH_MARKERS: &[&str] = &[DEPENDENCY_DIR_MARKER, INTERNAL_RUNTIME_MARKER];

/// Stack frame recognizers, tried in this order on every line.
pub const FRAME_WITH_DESCRIPTION: &str = r"\bat\s+.+?\s+\((.+?):(\d+):(\d+)\)";
pub const FRAME_BARE_AT: &str = r"\bat\s+(\S+?):(\d+):(\d+)";
pub const FRAME_BARE_PATH: &str = r#"([^\s()'"]+\.[A-Za-z0-9]+):(\d+):(\d+)"#;

pub const SEPARATOR_WIDTH: usize = 60;
