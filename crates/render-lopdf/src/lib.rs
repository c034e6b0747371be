//! Streaming PDF renderer for laid-out case reports, built on lopdf.
//!
//! Page objects are written to the output as soon as each page is drawn;
//! only the page tree, catalog and document info are deferred to the end.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{PageContext, estimate_text_width, fit_text, to_win_ansi};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;

use dossier_layout::LaidOutDocument;
use dossier_render_core::{DocumentRenderer, RenderError, ThemeConfig};
use log::debug;
use std::io::Cursor;

/// Renders `document` with `theme` into an in-memory PDF.
pub fn render(document: &LaidOutDocument, theme: &ThemeConfig) -> Result<Vec<u8>, RenderError> {
    let renderer = LopdfRenderer::new(theme)?;
    let bytes = renderer
        .render_document(Cursor::new(Vec::new()), document)?
        .into_inner();
    debug!(
        "Rendered case '{}': {} pages, {} bytes",
        document.metadata().case_id,
        document.page_count(),
        bytes.len()
    );
    Ok(bytes)
}
