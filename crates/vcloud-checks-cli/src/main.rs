//! vcloud-checks CLI - structural validation of vCloud Director documents
//!
//! Entry point for the `vcloud-checks` binary: validates JSON and YAML
//! documents, prints the constraint tables and inspects configuration.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    let cli = Cli::parse_args();

    // Configuration problems are reported after logging is up
    let config = Config::load_with_file(cli.config.as_deref());

    let use_color = cli.use_color() && config.as_ref().map_or(true, |c| c.output.color);
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, config.as_ref().ok()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = config.and_then(|config| run(cli, config, use_color));

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli
        .output
        .or_else(|| OutputFormat::from_config(&config.output.format))
        .unwrap_or(OutputFormat::Human);
    let mut output = OutputWriter::new(format, use_color, cli.quiet, config.output.progress);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Tables(args) => handlers::handle_tables(args, &config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: Option<&Config>) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Explicit -v flags win over the configuration file level
    if let Some(config) = config {
        let level = logging_config.level.clone();
        logging_config.merge_with_file(&config.logging);
        if cli.verbose > 0 {
            logging_config.level = level;
        }
    }
    logging_config.merge_with_env();

    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["vcloud-checks", "-vv", "validate", "vapp.json"]);
        assert_eq!(cli.verbosity_level(), 2);
        assert_eq!(cli.output, None);

        let cli = Cli::parse_from(["vcloud-checks", "--output", "json-pretty", "tables"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));

        let cli = Cli::parse_from(["vcloud-checks", "--quiet", "config", "show"]);
        assert_eq!(cli.verbosity_level(), 0);
    }
}
