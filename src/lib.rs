//! Forensic analysis reports: sectioned text and case metadata in,
//! paginated PDF out.
//!
//! ```ignore
//! use dossier::{CaseMetadata, GenerationRequest, ReportGenerationController};
//!
//! let controller = ReportGenerationController::default();
//! let outcome = controller
//!     .request_generation(GenerationRequest::new(text, metadata))
//!     .await;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::GeneratorConfig;
pub use error::PipelineError;
pub use pipeline::{
    ControllerSnapshot, GenerationRequest, GenerationState, ReportArtifact, ReportBackend,
    ReportGenerationController, ReportGenerator, RequestOutcome, file_name,
};

pub use dossier_core::{DocumentModelBuilder, TextSectionParser};
pub use dossier_layout::{LaidOutDocument, LayoutConfig, PageLayoutEngine};
pub use dossier_render_core::{ChromeText, RenderError, ThemeConfig};
pub use dossier_types::{Block, CaseMetadata, ReportDocument};
