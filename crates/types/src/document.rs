use crate::metadata::CaseMetadata;
use serde::{Deserialize, Serialize};

/// A typed unit of report content. Order within a document is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "text")]
pub enum Block {
    Heading(String),
    Paragraph(String),
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Block::Heading(text) | Block::Paragraph(text) => text,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }
}

/// Case metadata plus the ordered content blocks of one report.
///
/// Built once per generation request and never mutated afterwards; new input
/// means a new document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    metadata: CaseMetadata,
    blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn new(metadata: CaseMetadata, blocks: Vec<Block>) -> Self {
        Self { metadata, blocks }
    }

    pub fn metadata(&self) -> &CaseMetadata {
        &self.metadata
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .filter(|block| block.is_heading())
            .map(Block::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_serializes_as_tagged_variant() {
        let json = serde_json::to_value(Block::heading("Summary")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Heading", "text": "Summary" }));
    }

    #[test]
    fn headings_iterates_in_source_order() {
        let meta = CaseMetadata::new(
            "C-1",
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
        );
        let doc = ReportDocument::new(
            meta,
            vec![
                Block::heading("A"),
                Block::paragraph("body"),
                Block::heading("B"),
            ],
        );
        assert_eq!(doc.headings().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(!doc.is_empty());
    }
}
