//! Core rendering abstractions for report generation.
//!
//! This crate provides what every rendering backend shares:
//! - `DocumentRenderer` trait for abstracting the page-writing primitives
//! - `ThemeConfig` with its palette, font set and configurable chrome text
//! - The process-wide `FontRegistry` that theme font names resolve against
//! - Error types for rendering operations

mod error;
pub mod fonts;
pub mod theme;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use fonts::{FontFace, FontRegistry};
pub use theme::{ChromeText, FontSet, Palette, ResolvedFonts, ThemeConfig};
pub use traits::DocumentRenderer;
