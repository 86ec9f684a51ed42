//! `mdreport html` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdreport_config::{CliSettings, Config};
use mdreport_report::ReportBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the html command.
#[derive(Args)]
pub(crate) struct HtmlArgs {
    /// Path to configuration file (default: auto-discover mdreport.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown input file (overrides config).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// HTML output file (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl HtmlArgs {
    /// Execute the html command: convert and write the document, no PDF.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            input: self.input,
            html: self.output,
            pdf_enabled: Some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let summary = ReportBuilder::from_config(&config)?.build()?;

        output.success(&format!(
            "HTML generated: {}",
            summary.html_path.display()
        ));
        if summary.diagrams > 0 {
            output.info(&format!("Diagrams replaced: {}", summary.diagrams));
        }
        Ok(())
    }
}
