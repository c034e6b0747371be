use crate::error::PipelineError;
use dossier_render_core::ThemeConfig;
use log::debug;
use std::fs;
use std::path::Path;

/// Settings shared by every report a [`ReportGenerator`](crate::ReportGenerator) produces.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub theme: ThemeConfig,
    /// Artifact file extension, without the dot.
    pub extension: String,
    /// Written to the PDF `Producer` entry.
    pub producer: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            extension: "pdf".to_string(),
            producer: format!("dossier {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GeneratorConfig {
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    /// Loads a JSON theme from `path`; omitted keys keep their defaults.
    pub fn from_theme_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        debug!("Loading theme from {}", path.display());
        let json = fs::read_to_string(path)?;
        let theme = ThemeConfig::from_json(&json)?;
        Ok(Self::default().with_theme(theme))
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }
}
