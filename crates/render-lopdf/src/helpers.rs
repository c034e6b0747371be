//! Drawing primitives over a `lopdf` content stream.
//!
//! Coordinates passed in are layout coordinates (origin top-left, y grows
//! downwards); [`PageContext`] flips them into PDF space.

use dossier_render_core::utils::flip_y;
use dossier_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Baseline offset below the top of a line box, as a fraction of font size.
const BASELINE_RATIO: f32 = 0.8;

/// Average glyph advance used to estimate rendered text widths.
pub const AVERAGE_GLYPH_EM: f32 = 0.5;

pub struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_key: String,
    font_size: f32,
    fill_color: Option<Color>,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_font(&mut self, font_key: &str, font_size: f32) {
        if self.state.font_key != font_key || self.state.font_size != font_size {
            self.push(
                "Tf",
                vec![Object::Name(font_key.as_bytes().to_vec()), font_size.into()],
            );
            self.state.font_key = font_key.to_string();
            self.state.font_size = font_size;
        }
    }

    /// Fills a rectangle whose top-left corner is at (`x`, `y`).
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill_color(color);
        let pdf_y = flip_y(y + height, self.page_height);
        self.push("re", vec![x.into(), pdf_y.into(), width.into(), height.into()]);
        self.push("f", vec![]);
    }

    /// Strokes a horizontal rule at layout height `y`.
    pub fn horizontal_rule(&mut self, x: f32, y: f32, width: f32, line_width: f32, color: Color) {
        let [r, g, b] = color.to_unit_rgb();
        let pdf_y = flip_y(y, self.page_height);
        self.push("w", vec![line_width.into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.push("m", vec![x.into(), pdf_y.into()]);
        self.push("l", vec![(x + width).into(), pdf_y.into()]);
        self.push("S", vec![]);
    }

    /// Draws one line of text whose line box starts at layout height `top`.
    pub fn text(&mut self, x: f32, top: f32, font_key: &str, font_size: f32, color: Color, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(font_key, font_size);
        self.set_fill_color(color);
        let pdf_y = flip_y(top + font_size * BASELINE_RATIO, self.page_height);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Draws text so that it ends at `right`.
    pub fn text_right(&mut self, right: f32, top: f32, font_key: &str, font_size: f32, color: Color, text: &str) {
        let x = right - estimate_text_width(text, font_size);
        self.text(x, top, font_key, font_size, color, text);
    }
}

pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVERAGE_GLYPH_EM
}

/// Shortens `text` with a trailing "..." so its estimated width fits `max_width`.
pub fn fit_text(text: &str, font_size: f32, max_width: f32) -> String {
    if estimate_text_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let max_chars = (max_width / (font_size * AVERAGE_GLYPH_EM)).floor() as usize;
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept.trim_end())
}

/// Encodes `s` for a WinAnsi (cp1252) font. Typographic punctuation common in
/// generated text maps to its cp1252 slot; anything else unrepresentable,
/// including control characters, becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            '\t' => b' ',
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => b'?',
            c if (c as u32) <= 0xff => c as u8,
            _ => b'?',
        })
        .collect()
}
