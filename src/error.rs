use dossier_layout::LayoutError;
use dossier_render_core::RenderError;
use thiserror::Error;

/// Errors of the report generation pipeline.
///
/// Parsing and document assembly cannot fail; layout only fails on an
/// internal defect. Rendering is the one stage expected to fail at runtime.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
