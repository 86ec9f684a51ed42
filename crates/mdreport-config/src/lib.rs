//! Configuration management for mdreport.
//!
//! Parses `mdreport.toml` with serde and discovers it in the current
//! directory or its parents. Every value has a default, so a missing file
//! yields a working configuration rooted at the current directory.
//!
//! CLI settings are applied after loading via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` expands to the value of VAR, errors if unset
//! - `${VAR:-default}` expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `document.title`
//! - `document.date`
//! - `document.abstract`
//! - `pdf.command`

mod expand;

use mdreport_diagrams::DEFAULT_IMAGE_DIR;
use mdreport_markdown::{DEFAULT_ABSTRACT, DEFAULT_DATE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdreport.toml";

const DEFAULT_MARKDOWN: &str = "VALUE_PROPOSITION.md";
const DEFAULT_HTML: &str = "academic-output.html";
const DEFAULT_PDF: &str = "Psych_Intake_Brief_Technical_Documentation.pdf";

/// Default stylesheet, both the `<link>` href and the renderer stylesheet.
pub const DEFAULT_STYLESHEET: &str = "academic-style.css";
/// Default document title.
pub const DEFAULT_TITLE: &str = "Structured Harnesses for Clinical AI";
/// Default PDF renderer executable.
pub const DEFAULT_PDF_COMMAND: &str = "weasyprint";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown input path.
    pub input: Option<PathBuf>,
    /// Override HTML output path.
    pub html: Option<PathBuf>,
    /// Override PDF output path.
    pub pdf: Option<PathBuf>,
    /// Override stylesheet (both the link href and the renderer path).
    pub stylesheet: Option<PathBuf>,
    /// Override document title.
    pub title: Option<String>,
    /// Override PDF generation flag.
    pub pdf_enabled: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input paths as written in TOML.
    input: InputConfigRaw,
    /// Output paths as written in TOML.
    output: OutputConfigRaw,
    /// Document text.
    pub document: DocumentConfig,
    /// Diagram replacement settings.
    pub diagrams: DiagramsConfig,
    /// PDF renderer settings.
    pub pdf: PdfConfig,

    /// Resolved input paths (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved output paths (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw input configuration (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    markdown: Option<String>,
}

/// Raw output configuration (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    html: Option<String>,
    pdf: Option<String>,
    stylesheet: Option<String>,
}

/// Resolved input configuration.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// Markdown source file.
    pub markdown: PathBuf,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// HTML document path.
    pub html: PathBuf,
    /// PDF path.
    pub pdf: PathBuf,
    /// Stylesheet path handed to the PDF renderer.
    pub stylesheet: PathBuf,
    /// Stylesheet reference written into the HTML `<link>` as-is.
    pub stylesheet_href: String,
}

/// Document text configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// HTML `<title>`.
    pub title: String,
    /// Meta line under the heading.
    pub date: String,
    /// Abstract prose.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            date: DEFAULT_DATE.to_owned(),
            abstract_text: DEFAULT_ABSTRACT.to_owned(),
        }
    }
}

/// Diagram replacement configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DiagramsConfig {
    /// Fence languages replaced by figures.
    pub languages: Vec<String>,
    /// Directory the figure image paths point into.
    pub image_dir: String,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            languages: vec!["mermaid".to_owned()],
            image_dir: DEFAULT_IMAGE_DIR.to_owned(),
        }
    }
}

/// PDF renderer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Whether to attempt PDF generation.
    pub enabled: bool,
    /// Renderer executable.
    pub command: String,
    /// Base URL for resolving relative resources, relative to the config
    /// directory. Defaults to the config directory itself.
    base_url: Option<String>,
    /// Resolved base URL (set after loading).
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: DEFAULT_PDF_COMMAND.to_owned(),
            base_url: None,
            base_dir: PathBuf::from("."),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`document.title`").
        field: String,
        /// Error message (e.g., "${`REPORT_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `mdreport.toml` in the current directory and its parents, falling
    /// back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input) = &settings.input {
            self.input_resolved.markdown.clone_from(input);
        }
        if let Some(html) = &settings.html {
            self.output_resolved.html.clone_from(html);
        }
        if let Some(pdf) = &settings.pdf {
            self.output_resolved.pdf.clone_from(pdf);
        }
        if let Some(stylesheet) = &settings.stylesheet {
            self.output_resolved.stylesheet.clone_from(stylesheet);
            self.output_resolved.stylesheet_href = stylesheet.display().to_string();
        }
        if let Some(title) = &settings.title {
            self.document.title.clone_from(title);
        }
        if let Some(enabled) = settings.pdf_enabled {
            self.pdf.enabled = enabled;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.document.title, "document.title")?;

        if self.diagrams.languages.is_empty() {
            return Err(ConfigError::Validation(
                "diagrams.languages must list at least one language".to_owned(),
            ));
        }
        for language in &self.diagrams.languages {
            require_non_empty(language, "diagrams.languages")?;
        }

        if self.pdf.enabled {
            require_non_empty(&self.pdf.command, "pdf.command")?;
        }

        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            document: DocumentConfig::default(),
            diagrams: DiagramsConfig::default(),
            pdf: PdfConfig::default(),
            input_resolved: InputConfig::default(),
            output_resolved: OutputConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.document.title = expand::expand_env(&self.document.title, "document.title")?;
        self.document.date = expand::expand_env(&self.document.date, "document.date")?;
        self.document.abstract_text =
            expand::expand_env(&self.document.abstract_text, "document.abstract")?;
        self.pdf.command = expand::expand_env(&self.pdf.command, "pdf.command")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.input_resolved = InputConfig {
            markdown: resolve(self.input.markdown.as_deref(), DEFAULT_MARKDOWN),
        };

        let stylesheet_href = self
            .output
            .stylesheet
            .clone()
            .unwrap_or_else(|| DEFAULT_STYLESHEET.to_owned());
        self.output_resolved = OutputConfig {
            html: resolve(self.output.html.as_deref(), DEFAULT_HTML),
            pdf: resolve(self.output.pdf.as_deref(), DEFAULT_PDF),
            stylesheet: config_dir.join(&stylesheet_href),
            stylesheet_href,
        };

        self.pdf.base_dir = resolve(self.pdf.base_url.as_deref(), ".");
    }
}
