//! PDF rendering through an external HTML-to-PDF renderer.

use std::path::{Path, PathBuf};
use std::process::Command;

use mdreport_config::DEFAULT_PDF_COMMAND;

/// Error returned by a PDF renderer.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("renderer produced no file at {}", .0.display())]
    MissingOutput(PathBuf),
}

/// Inputs and output of one PDF rendering.
#[derive(Debug, Clone, Copy)]
pub struct PdfJob<'a> {
    /// HTML document to render.
    pub html: &'a Path,
    /// Stylesheet applied on top of the document's own.
    pub stylesheet: &'a Path,
    /// Base directory for resolving relative URLs (images, CSS).
    pub base_dir: &'a Path,
    /// Destination PDF.
    pub output: &'a Path,
}

/// Renders an HTML file to PDF.
pub trait PdfRenderer {
    /// Render `job.html` into `job.output`.
    fn render(&self, job: &PdfJob<'_>) -> Result<(), PdfError>;
}

/// Renderer that runs the `weasyprint` command line tool.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    command: String,
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new(DEFAULT_PDF_COMMAND)
    }
}

impl WeasyPrint {
    /// Create a renderer that runs `command`.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn command(&self, job: &PdfJob<'_>) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.arg("--base-url")
            .arg(job.base_dir)
            .arg("--stylesheet")
            .arg(job.stylesheet)
            .arg(job.html)
            .arg(job.output);
        cmd
    }
}

impl PdfRenderer for WeasyPrint {
    fn render(&self, job: &PdfJob<'_>) -> Result<(), PdfError> {
        tracing::debug!(command = %self.command, html = %job.html.display(), "Running PDF renderer");

        let output = self
            .command(job)
            .output()
            .map_err(|source| PdfError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PdfError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        if !job.output.exists() {
            return Err(PdfError::MissingOutput(job.output.to_path_buf()));
        }

        Ok(())
    }
}
