//! Assembles a [`ReportDocument`] from case metadata and parsed blocks.

use crate::parser::TextSectionParser;
use dossier_types::{Block, CaseMetadata, ReportDocument};
use log::debug;

/// Packages metadata and blocks without transforming either.
///
/// The title is kept optional here; the fallback title is a rendering
/// concern, so a document still records whether a title was supplied.
#[derive(Debug, Clone)]
pub struct DocumentModelBuilder {
    metadata: CaseMetadata,
    blocks: Vec<Block>,
    parser: TextSectionParser,
}

impl DocumentModelBuilder {
    pub fn new(metadata: CaseMetadata) -> Self {
        Self {
            metadata,
            blocks: Vec::new(),
            parser: TextSectionParser::default(),
        }
    }

    pub fn with_parser(mut self, parser: TextSectionParser) -> Self {
        self.parser = parser;
        self
    }

    /// Appends already-parsed blocks.
    pub fn blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    /// Parses `text` and appends the resulting blocks.
    pub fn text(mut self, text: &str) -> Self {
        let parsed = self.parser.parse(text);
        self.blocks.extend(parsed);
        self
    }

    pub fn build(self) -> ReportDocument {
        debug!(
            "Built report document for case '{}': {} blocks, {} evidence items",
            self.metadata.case_id,
            self.blocks.len(),
            self.metadata.evidence_count
        );
        ReportDocument::new(self.metadata, self.blocks)
    }
}

/// Shorthand for `DocumentModelBuilder::new(metadata).blocks(blocks).build()`.
pub fn build(metadata: CaseMetadata, blocks: Vec<Block>) -> ReportDocument {
    DocumentModelBuilder::new(metadata).blocks(blocks).build()
}
