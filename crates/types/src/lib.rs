//! Foundation types shared by every stage of the report pipeline.
//!
//! - [`Block`]: a typed unit of report content (heading or paragraph)
//! - [`CaseMetadata`]: the read-only case snapshot taken at request time
//! - [`ReportDocument`]: metadata plus the ordered block sequence
//! - [`Color`]: an RGB color used by the theme

pub mod color;
pub mod document;
pub mod metadata;

pub use color::Color;
pub use document::{Block, ReportDocument};
pub use metadata::CaseMetadata;
