//! Constraint tables command handler

use super::load_tables;
use crate::cli::{OutputFormat, TablesArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use tracing::instrument;

/// Handle the tables command
#[instrument(skip_all, fields(name = ?args.name))]
pub fn handle_tables(args: TablesArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let path = args.tables.as_deref().or(config.validation.tables.as_deref());
    let tables = load_tables(path)?;

    if let Some(name) = &args.name {
        let set = tables
            .enumeration(name)
            .ok_or_else(|| Error::UnknownTable { name: name.clone() })?;
        return match output.format() {
            OutputFormat::Human => {
                for value in set.admissible() {
                    output.writeln(&value)?;
                }
                Ok(())
            }
            _ => output.data(set),
        };
    }

    match output.format() {
        OutputFormat::Human => {
            output.info(&format!(
                "Tables: {}",
                path.map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string())
            ))?;
            output.writeln(&format!("identifierNamespace: {}", tables.identifier_namespace))?;
            output.section("Enumerations")?;
            let rows = tables
                .enumerations()
                .iter()
                .map(|set| vec![set.name().to_string(), set.admissible().join(", ")])
                .collect();
            output.table(&["Table", "Values"], rows)
        }
        _ => output.data(&tables),
    }
}
