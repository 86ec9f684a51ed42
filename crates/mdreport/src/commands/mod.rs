//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod html;

pub(crate) use build::BuildArgs;
pub(crate) use html::HtmlArgs;
