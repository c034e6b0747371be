use crate::error::RenderError;
use dossier_layout::{LaidOutDocument, Page};
use dossier_types::CaseMetadata;
use lopdf::ObjectId;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W, metadata: &CaseMetadata) -> Result<(), RenderError>;

    /// Draws one page, chrome included, and returns the page object id.
    fn render_page(&mut self, page: &Page, metadata: &CaseMetadata) -> Result<ObjectId, RenderError>;

    fn finish(self) -> Result<W, RenderError>
    where
        Self: Sized;

    /// Renders every page of `document` in order and returns the writer.
    fn render_document(mut self, writer: W, document: &LaidOutDocument) -> Result<W, RenderError>
    where
        Self: Sized,
    {
        self.begin_document(writer, document.metadata())?;
        for page in document.pages() {
            self.render_page(page, document.metadata())?;
        }
        self.finish()
    }
}
