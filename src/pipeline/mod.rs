//! Report generation: the synchronous pipeline and its async controller.
//!
//! - [`ReportGenerator`]: parse, build, lay out and render one report
//! - [`ReportGenerationController`]: runs requests off the async executor and
//!   tracks the session's [`GenerationState`]
//! - [`ReportArtifact`]: the rendered bytes with their suggested file name

mod artifact;
mod controller;
mod generator;

pub use artifact::{ReportArtifact, file_name, file_name_with_fallback};
pub use controller::{ControllerSnapshot, GenerationState, ReportGenerationController, RequestOutcome};
pub use generator::{GenerationRequest, ReportBackend, ReportGenerator};
