//! `fmd render` command implementation.

use std::path::PathBuf;

use clap::Args;
use fmd_config::{CliSettings, Config, OutputFormat};
use serde::Serialize;

use super::io::{read_input, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: read from stdin).
    input: Option<PathBuf>,

    /// Output file (default: write to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: html or json (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,

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

/// JSON envelope for `--format json`.
#[derive(Serialize)]
struct RenderedText<'a> {
    html: &'a str,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading input or writing output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            max_input_bytes: self.max_input_bytes,
            format: self.format,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let text = read_input(self.input.as_deref(), config.input.max_bytes)?;
        let html = fmd_renderer::to_html(&text);
        tracing::info!(
            input_len = text.len(),
            output_len = html.len(),
            format = %config.output.format,
            "Rendered text"
        );

        let rendered = format_rendered(
            &html,
            config.output.format,
            config.output.trailing_newline,
        )?;
        write_output(self.output.as_deref(), &rendered)?;

        if let Some(path) = &self.output {
            Output::new().success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

/// Encode rendered HTML for output.
fn format_rendered(
    html: &str,
    format: OutputFormat,
    trailing_newline: bool,
) -> Result<String, CliError> {
    let mut rendered = match format {
        OutputFormat::Html => html.to_owned(),
        OutputFormat::Json => serde_json::to_string(&RenderedText { html })?,
    };
    if trailing_newline {
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_html() {
        assert_eq!(
            format_rendered("<em>x</em>", OutputFormat::Html, true).unwrap(),
            "<em>x</em>\n"
        );
    }

    #[test]
    fn test_format_html_without_newline() {
        assert_eq!(
            format_rendered("<em>x</em>", OutputFormat::Html, false).unwrap(),
            "<em>x</em>"
        );
    }

    #[test]
    fn test_format_json() {
        assert_eq!(
            format_rendered(r#"<a href="u">l</a>"#, OutputFormat::Json, false).unwrap(),
            r#"{"html":"<a href=\"u\">l</a>"}"#
        );
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("label.md");
        let output = dir.path().join("label.html");
        let config = dir.path().join("fmd.toml");
        std::fs::write(&input, "# Hi\n*there*").unwrap();
        std::fs::write(&config, "[output]\ntrailing_newline = false\n").unwrap();

        let args = RenderArgs {
            input: Some(input),
            output: Some(output.clone()),
            format: None,
            max_input_bytes: None,
            config: Some(config),
            verbose: false,
        };
        args.execute().unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<h1>Hi</h1><em>there</em>"
        );
    }

    #[test]
    fn test_execute_rejects_oversized_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("label.md");
        let config = dir.path().join("fmd.toml");
        std::fs::write(&input, "0123456789").unwrap();
        std::fs::write(&config, "").unwrap();

        let args = RenderArgs {
            input: Some(input),
            output: Some(dir.path().join("out.html")),
            format: None,
            max_input_bytes: Some(4),
            config: Some(config),
            verbose: false,
        };
        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }
}
