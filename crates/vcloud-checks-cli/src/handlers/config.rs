//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Paths => handle_config_paths(output),
    }
}

/// Print the effective configuration
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let rendered = render(config, args.format)?;
    output.writeln(rendered.trim_end())
}

/// List the default configuration locations, marking the ones that exist
fn handle_config_paths(output: &mut OutputWriter) -> Result<()> {
    for path in Config::default_config_paths() {
        let marker = if path.exists() { "*" } else { " " };
        output.writeln(&format!("{} {}", marker, path.display()))?;
    }
    Ok(())
}

fn render(config: &Config, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}
