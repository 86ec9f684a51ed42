//! Diagram languages recognised in code fence info strings.

/// Supported diagram languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramLanguage {
    Mermaid,
    PlantUml,
    C4PlantUml,
    GraphViz,
    Ditaa,
    Nomnoml,
    Svgbob,
    WaveDrom,
    Vega,
    VegaLite,
}

impl DiagramLanguage {
    /// Parse language from code fence info string.
    ///
    /// Accepts both direct names (`mermaid`) and `kroki-` prefixed names
    /// (`kroki-mermaid`). Returns None for anything that is not a diagram.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lang = s.strip_prefix("kroki-").unwrap_or(s);

        match lang {
            "mermaid" => Some(Self::Mermaid),
            "plantuml" => Some(Self::PlantUml),
            "c4plantuml" => Some(Self::C4PlantUml),
            "graphviz" | "dot" => Some(Self::GraphViz),
            "ditaa" => Some(Self::Ditaa),
            "nomnoml" => Some(Self::Nomnoml),
            "svgbob" => Some(Self::Svgbob),
            "wavedrom" => Some(Self::WaveDrom),
            "vega" => Some(Self::Vega),
            "vegalite" => Some(Self::VegaLite),
            _ => None,
        }
    }

    /// Fence tags that select this language.
    ///
    /// `GraphViz` has the `dot` alias; every tag also has a `kroki-` form.
    #[must_use]
    pub fn fence_tags(self) -> Vec<String> {
        let names: &[&str] = match self {
            Self::Mermaid => &["mermaid"],
            Self::PlantUml => &["plantuml"],
            Self::C4PlantUml => &["c4plantuml"],
            Self::GraphViz => &["graphviz", "dot"],
            Self::Ditaa => &["ditaa"],
            Self::Nomnoml => &["nomnoml"],
            Self::Svgbob => &["svgbob"],
            Self::WaveDrom => &["wavedrom"],
            Self::Vega => &["vega"],
            Self::VegaLite => &["vegalite"],
        };
        names
            .iter()
            .flat_map(|name| [(*name).to_owned(), format!("kroki-{name}")])
            .collect()
    }
}
