use std::path::PathBuf;
use clap::Parser;
use crate::config::constants::CONFIG_ENV;

#[derive(Parser, Debug, Default)]
#[clap(name = "errlens", version)]
#[clap(about = "Explains error messages and stack traces and suggests a fix", long_about = None)]
#[clap(after_help = "Examples:\n  errlens \"Cannot find module 'express'\"\n  npm run build 2>&1 | errlens\n  errlens --json < crash.log")]
pub struct Cli {
    /// Error text to analyze. Read from stdin when omitted and input is piped.
    pub text: Vec<String>,

    /// Print the analysis as JSON
    #[clap(long)]
    pub json: bool,

    /// List every known error pattern
    #[clap(long, conflicts_with = "stats")]
    pub list: bool,

    /// Only list patterns from this category (with --list)
    #[clap(long, requires = "list")]
    pub category: Option<String>,

    /// Show catalog statistics
    #[clap(long)]
    pub stats: bool,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,

    /// Write a sample configuration file and exit
    #[clap(long)]
    pub init: bool,

    /// Path to the configuration file
    #[clap(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,
}
