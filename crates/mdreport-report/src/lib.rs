//! HTML document assembly and PDF rendering for mdreport.
//!
//! [`ReportBuilder`] ties the pipeline together: diagram replacement,
//! markdown conversion, the [`HtmlDocument`] shell, and a [`PdfRenderer`]
//! that turns the written HTML into a PDF.

mod builder;
mod document;
mod pdf;

pub use builder::{BuildError, PdfOutcome, ReportBuilder, ReportPaths, ReportSummary};
pub use document::HtmlDocument;
pub use pdf::{PdfError, PdfJob, PdfRenderer, WeasyPrint};
