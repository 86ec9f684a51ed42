//! `mdreport build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdreport_config::{CliSettings, Config};
use mdreport_report::{PdfOutcome, ReportBuilder, ReportSummary};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover mdreport.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown input file (overrides config).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// HTML output file (overrides config).
    #[arg(long)]
    html: Option<PathBuf>,

    /// PDF output file (overrides config).
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Stylesheet for the HTML link and the PDF renderer (overrides config).
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Document title (overrides config).
    #[arg(short, long)]
    title: Option<String>,

    /// Only write the HTML document.
    #[arg(long)]
    no_pdf: bool,

    /// Enable verbose output (pipeline stages and renderer commands).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// A failed PDF step is reported but does not fail the command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the markdown cannot be read,
    /// or the HTML cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            input: self.input,
            html: self.html,
            pdf: self.pdf,
            stylesheet: self.stylesheet,
            title: self.title,
            pdf_enabled: self.no_pdf.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let summary = ReportBuilder::from_config(&config)?.build()?;
        report(&output, &summary);

        Ok(())
    }
}

/// One console line of the build report.
#[derive(Debug, PartialEq, Eq)]
enum ReportLine {
    Success(String),
    Info(String),
    Warning(String),
}

/// Lines describing a finished build, in print order.
fn report_lines(summary: &ReportSummary) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::Success(format!(
        "HTML generated: {}",
        summary.html_path.display()
    ))];

    match &summary.pdf {
        PdfOutcome::Generated { path, size_bytes } => {
            lines.push(ReportLine::Success(format!(
                "PDF generated: {}",
                path.display()
            )));
            lines.push(ReportLine::Info(format!(
                "Size: {}",
                format_size_kb(*size_bytes)
            )));
        }
        PdfOutcome::Failed(message) => {
            lines.push(ReportLine::Warning(format!(
                "PDF generation error: {message}"
            )));
        }
        PdfOutcome::Skipped => {}
    }
    lines
}

/// Print the build messages.
fn report(output: &Output, summary: &ReportSummary) {
    for line in report_lines(summary) {
        match line {
            ReportLine::Success(msg) => output.success(&msg),
            ReportLine::Info(msg) => output.info(&msg),
            ReportLine::Warning(msg) => output.warning(&msg),
        }
    }
}

/// Format a byte count as whole kilobytes.
#[allow(clippy::cast_precision_loss)]
fn format_size_kb(size_bytes: u64) -> String {
    format!("{:.0} KB", size_bytes as f64 / 1024.0)
}
