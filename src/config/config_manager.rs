use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ErrlensError, ErrlensResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    /// `~/errlens/config.toml`, or `None` when the home directory is unknown.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config from `explicit` when given, else from the default
    /// location. A missing default file yields the default config; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> ErrlensResult<Config> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ErrlensError::config_file_error(&path.display().to_string(), "file does not exist"));
                }
                Self::load_from(path)
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    log::debug!("📋 No config file found, using defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> ErrlensResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ErrlensError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ErrlensError::config_file_error(&path.display().to_string(), e.message()))?;

        if let Err(errors) = Self::validate_config(&config) {
            return Err(ErrlensError::config_error(
                &errors.join("; "),
                Some("patterns"),
                Some("Fix the listed [[patterns]] entries in your config file"),
            ));
        }

        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> ErrlensResult<()> {
        let sample_config = r#"# errlens configuration

[output]
# ANSI colors in text output (NO_COLOR and --no-color also disable them)
color = true

# Default output format: "text" or "json"
format = "text"

# Print the best-guess source location extracted from stack frames
show_location = true

# Report at most this many matches (remove to report all)
# max_matches = 10

# Custom patterns are matched after the built-in catalog.
# Titles must be unique across the built-in catalog and this file.
# `fix` and `auto_fix_cmd` may reference capture groups as $1, $2, ...
#
# [[patterns]]
# pattern = "billing-service timed out after (\\d+)ms"
# title = "Billing Service Timeout"
# category = "Internal"
# explanation = "The billing service did not answer in time."
# fix = "Raise BILLING_TIMEOUT_MS above $1 or check the billing dashboard."
# auto_fix_cmd = "kubectl rollout restart deploy/billing"
# severity = "warning"
"#;
        if path.exists() {
            return Err(ErrlensError::config_file_error(
                &path.display().to_string(),
                "a config file already exists here; remove it first to regenerate",
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| ErrlensError::config_file_error(&dir.display().to_string(), &e.to_string()))?;
        }
        fs::write(path, sample_config)
            .map_err(|e| ErrlensError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for rule in &config.patterns {
            if rule.title.trim().is_empty() {
                errors.push(format!("Pattern '{}' has an empty title", rule.pattern));
            }
            if rule.pattern.is_empty() {
                errors.push(format!("Pattern '{}' has an empty regular expression", rule.title));
            }
            if rule.severity.parse::<crate::enums::severity::Severity>().is_err() {
                errors.push(format!("Pattern '{}' has unknown severity '{}'", rule.title, rule.severity));
            }
        }

        let mut titles = HashSet::new();
        for rule in &config.patterns {
            if !titles.insert(&rule.title) {
                errors.push(format!("Duplicate pattern title: {}", rule.title));
            }
        }

        if config.output.max_matches == Some(0) {
            errors.push("output.max_matches must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::output_format::OutputFormat;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[output]
color = false
format = "json"
max_matches = 3

[[patterns]]
pattern = "quota exceeded for (\\w+)"
title = "Quota Exceeded"
fix = "Raise the quota for $1"
severity = "warning"
"#,
        );
        let config = ConfigManager::load(Some(file.path())).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.max_matches, Some(3));
        assert!(config.output.show_location);
        assert_eq!(config.patterns.len(), 1);
        assert_eq!(config.patterns[0].category, "Custom");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = write_config("");
        let config = ConfigManager::load(Some(file.path())).unwrap();
        assert!(config.output.color);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigManager::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ErrlensError::ConfigurationFileError { .. }));
    }

    #[test]
    fn test_bad_toml_is_error() {
        let file = write_config("[output\ncolor = ");
        let err = ConfigManager::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ErrlensError::ConfigurationFileError { .. }));
    }

    #[test]
    fn test_duplicate_and_bad_severity_rejected() {
        let file = write_config(
            r#"
[[patterns]]
pattern = "a"
title = "Same"

[[patterns]]
pattern = "b"
title = "Same"
severity = "fatal"
"#,
        );
        let err = ConfigManager::load(Some(file.path())).unwrap_err();
        let msg = err.user_message();
        assert!(msg.contains("Duplicate pattern title: Same"));
        assert!(msg.contains("unknown severity 'fatal'"));
    }

    #[test]
    fn test_sample_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errlens").join("config.toml");
        ConfigManager::create_sample_config(&path).unwrap();
        let config = ConfigManager::load(Some(&path)).unwrap();
        assert!(config.output.color);
        assert!(config.patterns.is_empty());

        let err = ConfigManager::create_sample_config(&path).unwrap_err();
        assert!(matches!(err, ErrlensError::ConfigurationFileError { .. }));
    }
}
