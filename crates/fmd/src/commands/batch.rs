//! `fmd batch` command implementation.
//!
//! Reads a JSON array of label/hint node texts and writes a JSON array with
//! the converted HTML of each node, in the same order.

use std::path::PathBuf;

use clap::Args;
use fmd_config::{CliSettings, Config};
use rayon::prelude::*;
use serde_json::Value;

use super::io::{read_input, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the batch command.
#[derive(Args)]
pub(crate) struct BatchArgs {
    /// JSON input file (default: read from stdin).
    input: Option<PathBuf>,

    /// Output file (default: write to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum input size in bytes (overrides config).
    #[arg(long, env = "FMD_MAX_INPUT_BYTES")]
    max_input_bytes: Option<u64>,

    /// Path to configuration file (default: auto-discover fmd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BatchArgs {
    /// Execute the batch command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON array of strings, or if
    /// configuration, reading or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            max_input_bytes: self.max_input_bytes,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = read_input(self.input.as_deref(), config.input.max_bytes)?;
        let nodes = parse_nodes(&input)?;
        let rendered = render_nodes(&nodes);
        tracing::info!(nodes = rendered.len(), "Rendered batch");

        let mut json = serde_json::to_string(&rendered)?;
        if config.output.trailing_newline {
            json.push('\n');
        }
        write_output(self.output.as_deref(), &json)?;

        if let Some(path) = &self.output {
            Output::new().success(&format!(
                "Wrote {} nodes to {}",
                rendered.len(),
                path.display()
            ));
        }
        Ok(())
    }
}

/// Parse a JSON array whose entries must all be strings.
fn parse_nodes(input: &str) -> Result<Vec<String>, CliError> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Array(entries) = value else {
        return Err(CliError::Validation(
            "batch input must be a JSON array of strings".to_owned(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(text) => Ok(text),
            other => Err(CliError::Validation(format!(
                "node {index} is not a string: {other}"
            ))),
        })
        .collect()
}

/// Convert every node; order is preserved.
fn render_nodes(nodes: &[String]) -> Vec<String> {
    nodes
        .par_iter()
        .map(|text| fmd_renderer::to_html(text))
        .collect()
}
