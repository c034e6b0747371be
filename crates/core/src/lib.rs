//! # dossier-core
//!
//! Platform-agnostic front half of the report pipeline:
//! - **parser**: splits free-form analysis text into heading and paragraph blocks
//! - **builder**: packages case metadata and blocks into a [`ReportDocument`]
//!
//! Nothing in this crate performs I/O or can fail. Degenerate input resolves
//! to best-effort blocks.

pub use dossier_types as types;

pub mod builder;
pub mod parser;

pub use builder::DocumentModelBuilder;
pub use parser::{HEADING_DELIMITER, TextSectionParser, parse};
pub use types::{Block, CaseMetadata, ReportDocument};
