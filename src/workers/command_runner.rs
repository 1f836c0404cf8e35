use std::borrow::Cow;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::time::Instant;
use clap::CommandFactory;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::NO_COLOR_ENV;
use crate::enums::input_source::InputSource;
use crate::enums::output_format::OutputFormat;
use crate::errors::{ErrlensError, ErrlensResult};
use crate::logger::report_printer::ReportPrinter;
use crate::services::input_reader::InputReader;
use crate::services::matcher::Matcher;
use crate::services::pattern_catalog::PatternCatalog;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub fn run_command(&mut self, cli: &Cli) -> ErrlensResult<()> {
        self.start_time = Some(Instant::now());

        let result = if cli.init {
            self.init_command(cli)
        } else {
            self.dispatch(cli)
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.3}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, cli: &Cli) -> ErrlensResult<()> {
        log::info!("🚀 Initializing errlens configuration...");

        let path = cli
            .config
            .clone()
            .or_else(ConfigManager::default_config_path)
            .ok_or_else(|| ErrlensError::system_error("locating the config directory", "home directory is unknown"))?;

        ConfigManager::create_sample_config(&path)?;
        println!("✅ Created {}", path.display());
        println!("📝 Edit it to change output defaults or add your own [[patterns]].");
        Ok(())
    }

    fn dispatch(&self, cli: &Cli) -> ErrlensResult<()> {
        let config = ConfigManager::load(cli.config.as_deref())?;
        let catalog = Self::build_catalog(&config)?;
        let printer = ReportPrinter::new(Self::color_enabled(
            cli.no_color,
            std::env::var_os(NO_COLOR_ENV),
            config.output.color,
        ));
        let json = Self::wants_json(cli, &config);

        if cli.list {
            printer.print_list(&catalog, cli.category.as_deref());
            return Ok(());
        }

        if cli.stats {
            let stats = catalog.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                printer.print_stats(&stats);
            }
            return Ok(());
        }

        self.analyze_command(cli, &config, &catalog, &printer, json)
    }

    fn analyze_command(
        &self,
        cli: &Cli,
        config: &Config,
        catalog: &PatternCatalog,
        printer: &ReportPrinter,
        json: bool,
    ) -> ErrlensResult<()> {
        let stdin = io::stdin();
        let is_terminal = stdin.is_terminal();
        let (source, text) = InputReader::acquire(&cli.text, stdin.lock(), is_terminal)?;

        if source == InputSource::None {
            Cli::command().print_help()?;
            return Ok(());
        }

        log::info!("🔍 Analyzing {} ({} bytes)", source.label(), text.len());

        let matcher = Matcher::new(catalog)?;
        let report = matcher.analyze_report(&text, config.output.max_matches);

        if json {
            println!("{}", report.to_json()?);
        } else {
            printer.print_report(&report, config.output.show_location);
        }
        Ok(())
    }

    /// The shared built-in catalog, or a private copy when the config adds entries.
    fn build_catalog(config: &Config) -> ErrlensResult<Cow<'static, PatternCatalog>> {
        let builtin = PatternCatalog::builtin()?;
        if config.patterns.is_empty() {
            Ok(Cow::Borrowed(builtin))
        } else {
            Ok(Cow::Owned(builtin.extended_with(&config.patterns)?))
        }
    }

    /// `NO_COLOR` disables color when set to any non-empty value.
    fn color_enabled(no_color_flag: bool, no_color_env: Option<OsString>, config_color: bool) -> bool {
        let env_disabled = no_color_env.is_some_and(|value| !value.is_empty());
        !no_color_flag && !env_disabled && config_color
    }

    fn wants_json(cli: &Cli, config: &Config) -> bool {
        cli.json || config.output.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::pattern_rule::PatternRule;

    #[test]
    fn test_color_switches() {
        assert!(CommandRunner::color_enabled(false, None, true));
        assert!(!CommandRunner::color_enabled(true, None, true));
        assert!(!CommandRunner::color_enabled(false, None, false));
        assert!(!CommandRunner::color_enabled(false, Some(OsString::from("1")), true));
        assert!(CommandRunner::color_enabled(false, Some(OsString::new()), true));
    }

    #[test]
    fn test_json_from_flag_or_config() {
        let mut config = Config::default();
        let mut cli = Cli::default();
        assert!(!CommandRunner::wants_json(&cli, &config));

        cli.json = true;
        assert!(CommandRunner::wants_json(&cli, &config));

        cli.json = false;
        config.output.format = OutputFormat::Json;
        assert!(CommandRunner::wants_json(&cli, &config));
    }

    #[test]
    fn test_catalog_is_borrowed_without_custom_patterns() {
        let catalog = CommandRunner::build_catalog(&Config::default()).unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
    }

    #[test]
    fn test_catalog_is_extended_with_custom_patterns() {
        let mut config = Config::default();
        config.patterns.push(PatternRule {
            pattern: "flux capacitor overloaded".to_string(),
            title: "Flux Overload".to_string(),
            category: "Custom".to_string(),
            explanation: String::new(),
            fix: "Reduce speed below 88mph".to_string(),
            auto_fix_cmd: None,
            severity: "info".to_string(),
        });
        let catalog = CommandRunner::build_catalog(&config).unwrap();
        assert!(matches!(catalog, Cow::Owned(_)));
        assert!(catalog.find("Flux Overload").is_some());
    }

    #[test]
    fn test_list_and_stats_run_without_input() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[output]\ncolor = false\n").unwrap();

        let mut cli = Cli { list: true, config: Some(config_path.clone()), ..Cli::default() };
        assert!(CommandRunner::new().run_command(&cli).is_ok());

        cli.list = false;
        cli.stats = true;
        assert!(CommandRunner::new().run_command(&cli).is_ok());
    }

    #[test]
    fn test_init_writes_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");
        let cli = Cli { init: true, config: Some(config_path.clone()), ..Cli::default() };

        CommandRunner::new().run_command(&cli).unwrap();
        assert!(config_path.exists());
        assert!(CommandRunner::new().run_command(&cli).is_err());
    }

    #[test]
    fn test_arguments_are_analyzed() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();
        let cli = Cli {
            text: vec!["Cannot find module 'express'".to_string()],
            config: Some(config_path),
            ..Cli::default()
        };
        assert!(CommandRunner::new().run_command(&cli).is_ok());
    }
}
