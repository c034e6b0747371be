//! Approximate text metrics used to estimate block heights.
//!
//! There is no shaping here: every glyph is assumed to be `glyph_width_em`
//! wide. The renderer wraps with the same metrics, so what is drawn matches
//! what the layout engine budgeted for.

use serde::{Deserialize, Serialize};

/// Type metrics for one kind of block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextMetrics {
    /// Font size in points.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    pub space_before: f32,
    pub space_after: f32,
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width_em: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::body()
    }
}

impl TextMetrics {
    pub fn body() -> Self {
        Self {
            font_size: 10.5,
            line_height: 1.45,
            space_before: 0.0,
            space_after: 8.0,
            glyph_width_em: 0.5,
        }
    }

    pub fn heading() -> Self {
        Self {
            font_size: 14.0,
            line_height: 1.3,
            space_before: 10.0,
            space_after: 6.0,
            glyph_width_em: 0.56,
        }
    }

    pub fn line_advance(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// How many glyphs fit on one line of `width` points (at least one).
    pub fn chars_per_line(&self, width: f32) -> usize {
        let glyph = self.font_size * self.glyph_width_em;
        if glyph <= 0.0 || !width.is_finite() {
            return usize::MAX;
        }
        ((width / glyph).floor() as usize).max(1)
    }

    /// Greedily wraps `text` on whitespace into lines no longer than
    /// [`chars_per_line`](Self::chars_per_line). Words longer than a line are
    /// split at character boundaries. Always returns at least one line.
    pub fn wrap(&self, text: &str, width: f32) -> Vec<String> {
        let max = self.chars_per_line(width);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(max).peekable();
                while let Some(chunk) = chunks.next() {
                    let piece: String = chunk.iter().collect();
                    if chunks.peek().is_some() {
                        lines.push(piece);
                    } else {
                        current_len = chunk.len();
                        current = piece;
                    }
                }
                continue;
            }

            if current_len > 0 && current_len + 1 + word_len > max {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }

        if current_len > 0 || lines.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Vertical space taken by `line_count` lines including surrounding spacing.
    pub fn height_for_lines(&self, line_count: usize) -> f32 {
        self.space_before + line_count.max(1) as f32 * self.line_advance() + self.space_after
    }

    pub fn estimate_height(&self, text: &str, width: f32) -> f32 {
        self.height_for_lines(self.wrap(text, width).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> TextMetrics {
        // 10pt glyphs on a 50pt line: five characters per line.
        TextMetrics {
            font_size: 10.0,
            line_height: 1.0,
            space_before: 0.0,
            space_after: 0.0,
            glyph_width_em: 1.0,
        }
    }

    #[test]
    fn wraps_on_whitespace() {
        assert_eq!(narrow().wrap("ab cd ef", 50.0), vec!["ab cd", "ef"]);
    }

    #[test]
    fn hard_splits_long_words() {
        assert_eq!(
            narrow().wrap("x abcdefghijkl y", 50.0),
            vec!["x", "abcde", "fghij", "kl y"]
        );
    }

    #[test]
    fn empty_text_still_occupies_one_line() {
        assert_eq!(narrow().wrap("", 50.0), vec![String::new()]);
        assert_eq!(narrow().height_for_lines(0), 10.0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(narrow().wrap("ééééé ü", 50.0), vec!["ééééé", "ü"]);
    }

    #[test]
    fn heading_costs_more_than_paragraph_of_same_length() {
        let text = "The suspect device contained three deleted archives recovered intact.";
        let width = 495.28;
        assert!(
            TextMetrics::heading().estimate_height(text, width)
                > TextMetrics::body().estimate_height(text, width)
        );
    }
}
