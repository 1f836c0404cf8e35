use std::process::ExitCode;
use clap::Parser;
use env_logger::{Builder, Env};
use errlens::config::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use errlens::errors::ErrorHandler;
use errlens::structs::cli::Cli;
use errlens::workers::command_runner::CommandRunner;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    match CommandRunner::new().run_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
