//! Report builder: markdown in, HTML and (best effort) PDF out.

use std::path::{Path, PathBuf};

use mdreport_config::Config;
use mdreport_diagrams::{DiagramLanguage, DiagramReplacer};
use mdreport_markdown::{FrontMatter, MarkdownConverter};

use crate::document::HtmlDocument;
use crate::pdf::{PdfJob, PdfRenderer, WeasyPrint};

/// Error that aborts a build.
///
/// PDF failures are not build errors; see [`PdfOutcome::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown diagram language: {0}")]
    UnknownDiagramLanguage(String),
}

/// Files read and written by a build.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Markdown source.
    pub markdown: PathBuf,
    /// HTML document destination.
    pub html: PathBuf,
    /// PDF destination.
    pub pdf: PathBuf,
    /// Stylesheet handed to the PDF renderer.
    pub stylesheet: PathBuf,
    /// Base directory for resolving relative URLs while rendering the PDF.
    pub base_dir: PathBuf,
}

/// What happened to the PDF step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfOutcome {
    /// PDF written.
    Generated { path: PathBuf, size_bytes: u64 },
    /// Renderer failed; the message is the diagnostic to show.
    Failed(String),
    /// PDF generation disabled.
    Skipped,
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Written HTML document.
    pub html_path: PathBuf,
    /// Number of diagram fences replaced.
    pub diagrams: usize,
    /// PDF step result.
    pub pdf: PdfOutcome,
}

/// Runs the whole conversion for one markdown file.
///
/// Steps: read markdown, replace diagrams, convert, wrap in an
/// [`HtmlDocument`], write HTML, then render the PDF if a renderer is set.
/// Every step before the PDF is fatal on error. The PDF step never is.
pub struct ReportBuilder {
    paths: ReportPaths,
    replacer: DiagramReplacer,
    converter: MarkdownConverter,
    document: HtmlDocument,
    renderer: Option<Box<dyn PdfRenderer>>,
}

impl ReportBuilder {
    /// Create a builder with default conversion settings and the
    /// `weasyprint` renderer.
    #[must_use]
    pub fn new(paths: ReportPaths) -> Self {
        Self {
            paths,
            replacer: DiagramReplacer::new(),
            converter: MarkdownConverter::new(),
            document: HtmlDocument::default(),
            renderer: Some(Box::new(WeasyPrint::default())),
        }
    }

    /// Create a builder from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::UnknownDiagramLanguage` if a configured diagram
    /// language is not recognised.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        let languages = config
            .diagrams
            .languages
            .iter()
            .map(|name| {
                DiagramLanguage::parse(name.trim())
                    .ok_or_else(|| BuildError::UnknownDiagramLanguage(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let paths = ReportPaths {
            markdown: config.input_resolved.markdown.clone(),
            html: config.output_resolved.html.clone(),
            pdf: config.output_resolved.pdf.clone(),
            stylesheet: config.output_resolved.stylesheet.clone(),
            base_dir: config.pdf.base_dir.clone(),
        };

        let builder = Self::new(paths)
            .with_replacer(
                DiagramReplacer::new()
                    .languages(languages)
                    .image_dir(config.diagrams.image_dir.clone()),
            )
            .with_converter(MarkdownConverter::new().with_front_matter(FrontMatter {
                date: config.document.date.clone(),
                abstract_text: config.document.abstract_text.clone(),
            }))
            .with_document(HtmlDocument::new(
                config.document.title.clone(),
                config.output_resolved.stylesheet_href.clone(),
            ));

        Ok(if config.pdf.enabled {
            builder.with_renderer(WeasyPrint::new(config.pdf.command.clone()))
        } else {
            builder.without_pdf()
        })
    }

    /// Set the diagram replacer.
    #[must_use]
    pub fn with_replacer(mut self, replacer: DiagramReplacer) -> Self {
        self.replacer = replacer;
        self
    }

    /// Set the markdown converter.
    #[must_use]
    pub fn with_converter(mut self, converter: MarkdownConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Set the HTML document shell.
    #[must_use]
    pub fn with_document(mut self, document: HtmlDocument) -> Self {
        self.document = document;
        self
    }

    /// Set the PDF renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl PdfRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Skip the PDF step.
    #[must_use]
    pub fn without_pdf(mut self) -> Self {
        self.renderer = None;
        self
    }

    /// Run the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the markdown cannot be read or the HTML cannot be
    /// written. PDF failures are reported in [`ReportSummary::pdf`].
    pub fn build(&self) -> Result<ReportSummary, BuildError> {
        let markdown = std::fs::read_to_string(&self.paths.markdown).map_err(|source| {
            BuildError::Read {
                path: self.paths.markdown.clone(),
                source,
            }
        })?;

        let replaced = self.replacer.replace(&markdown);
        let fragment = self.converter.convert(&replaced.markdown);
        let html = self.document.render(&fragment);

        write_file(&self.paths.html, &html)?;
        tracing::info!(
            path = %self.paths.html.display(),
            diagrams = replaced.count,
            "HTML generated"
        );

        let pdf = match &self.renderer {
            Some(renderer) => self.render_pdf(renderer.as_ref()),
            None => PdfOutcome::Skipped,
        };

        Ok(ReportSummary {
            html_path: self.paths.html.clone(),
            diagrams: replaced.count,
            pdf,
        })
    }

    /// Render the PDF, turning any failure into a diagnostic.
    fn render_pdf(&self, renderer: &dyn PdfRenderer) -> PdfOutcome {
        let job = PdfJob {
            html: &self.paths.html,
            stylesheet: &self.paths.stylesheet,
            base_dir: &self.paths.base_dir,
            output: &self.paths.pdf,
        };

        let result = renderer
            .render(&job)
            .map_err(|e| e.to_string())
            .and_then(|()| {
                std::fs::metadata(&self.paths.pdf)
                    .map(|meta| meta.len())
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(size_bytes) => {
                tracing::info!(path = %self.paths.pdf.display(), size_bytes, "PDF generated");
                PdfOutcome::Generated {
                    path: self.paths.pdf.clone(),
                    size_bytes,
                }
            }
            Err(message) => {
                tracing::warn!(error = %message, "PDF generation failed");
                PdfOutcome::Failed(message)
            }
        }
    }
}

/// Write `content` to `path`, creating missing parent directories.
fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    let to_error = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, content).map_err(to_error)
}
