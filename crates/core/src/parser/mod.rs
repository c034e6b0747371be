//! Splits free-form analysis text into an ordered sequence of [`Block`]s.
//!
//! The only markup understood is the heading delimiter: a line that contains
//! `**` anywhere becomes a heading with the delimiters stripped. Every other
//! non-blank line is a paragraph. Detection is by marker presence, not by a
//! matched pair, so `**Summary` (unterminated) is still a heading and a line
//! made only of markers is a heading with empty text.

use dossier_types::Block;
use log::trace;

/// The marker that introduces (and usually closes) a heading.
pub const HEADING_DELIMITER: &str = "**";

/// Parses `text` with the default heading delimiter.
pub fn parse(text: &str) -> Vec<Block> {
    TextSectionParser::default().parse(text)
}

/// A pure, total text-to-blocks parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSectionParser {
    delimiter: &'static str,
}

impl Default for TextSectionParser {
    fn default() -> Self {
        Self {
            delimiter: HEADING_DELIMITER,
        }
    }
}

impl TextSectionParser {
    /// A parser using a custom heading delimiter. An empty delimiter disables
    /// heading detection entirely.
    pub fn with_delimiter(delimiter: &'static str) -> Self {
        Self { delimiter }
    }

    /// Parses `text` into blocks, preserving source order.
    ///
    /// Blank input yields an empty vector. Never fails: anything that is not
    /// recognisably a heading degrades to a paragraph.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let blocks: Vec<Block> = self
            .sections(text)
            .into_iter()
            .flat_map(str::lines)
            .filter_map(|line| self.classify(line))
            .collect();

        trace!(
            "Parsed {} bytes of analysis text into {} blocks",
            text.len(),
            blocks.len()
        );
        blocks
    }

    /// Splits `text` into segments, each starting at a line that begins with
    /// the delimiter and running up to (not including) the next such line.
    /// Any text before the first heading line forms a leading segment.
    pub fn sections<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sections = Vec::new();
        let mut start = 0;
        let mut offset = 0;

        for line in text.split_inclusive('\n') {
            if offset > start && self.starts_section(line) {
                sections.push(&text[start..offset]);
                start = offset;
            }
            offset += line.len();
        }
        if start < text.len() {
            sections.push(&text[start..]);
        }
        sections
    }

    fn starts_section(&self, line: &str) -> bool {
        !self.delimiter.is_empty() && line.trim_start().starts_with(self.delimiter)
    }

    fn classify(&self, line: &str) -> Option<Block> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if !self.delimiter.is_empty() && trimmed.contains(self.delimiter) {
            let heading = trimmed.replace(self.delimiter, "");
            return Some(Block::Heading(heading.trim().to_string()));
        }

        Some(Block::Paragraph(trimmed.to_string()))
    }
}
