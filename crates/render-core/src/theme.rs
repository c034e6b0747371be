//! Report theme: colors, fonts, page geometry and the fixed chrome text.
//!
//! All fields are optional when deserializing; anything left out keeps its
//! default. Keys are camelCase.

use crate::error::RenderError;
use crate::fonts::{FontFace, FontRegistry};
use dossier_layout::{ContentBudget, LayoutConfig, LayoutError};
use dossier_types::Color;
use serde::{Deserialize, Serialize};

pub const FALLBACK_TITLE: &str = "Forensic Analysis Report";
pub const SUBTITLE: &str = "AI-Assisted Digital Forensics Analysis";
pub const CLASSIFICATION_BADGE: &str = "CONFIDENTIAL";
pub const CASE_INFO_HEADING: &str = "Case Information";
pub const CASE_ID_LABEL: &str = "Case ID";
pub const DATE_LABEL: &str = "Generated";
pub const TIME_LABEL: &str = "Time";
pub const STATISTICS_LABEL: &str = "Evidence Items Analyzed";
pub const DISCLAIMER: &str = "This report contains AI-generated analysis and must be verified by a qualified forensic examiner.";
/// `{page}` and `{total}` are substituted per page.
pub const PAGE_MARKER: &str = "Page {page} of {total}";

/// Fixed, non-content text drawn as page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChromeText {
    /// Used when the case has no title.
    pub fallback_title: String,
    pub subtitle: String,
    pub classification_badge: String,
    pub case_info_heading: String,
    pub case_id_label: String,
    pub date_label: String,
    pub time_label: String,
    pub statistics_label: String,
    pub disclaimer: String,
    pub page_marker: String,
}

impl Default for ChromeText {
    fn default() -> Self {
        Self {
            fallback_title: FALLBACK_TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            classification_badge: CLASSIFICATION_BADGE.to_string(),
            case_info_heading: CASE_INFO_HEADING.to_string(),
            case_id_label: CASE_ID_LABEL.to_string(),
            date_label: DATE_LABEL.to_string(),
            time_label: TIME_LABEL.to_string(),
            statistics_label: STATISTICS_LABEL.to_string(),
            disclaimer: DISCLAIMER.to_string(),
            page_marker: PAGE_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub accent: Color,
    pub banner_background: Color,
    pub banner_text: Color,
    pub badge_background: Color,
    pub badge_text: Color,
    pub panel_background: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    pub rule: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x25, 0x63, 0xeb),
            banner_background: Color::rgb(0x0f, 0x17, 0x2a),
            banner_text: Color::WHITE,
            badge_background: Color::rgb(0xdc, 0x26, 0x26),
            badge_text: Color::WHITE,
            panel_background: Color::rgb(0xf1, 0xf5, 0xf9),
            heading: Color::rgb(0x1e, 0x3a, 0x8a),
            body: Color::rgb(0x1f, 0x29, 0x37),
            muted: Color::rgb(0x6b, 0x72, 0x80),
            rule: Color::rgb(0xcb, 0xd5, 0xe1),
        }
    }
}

/// Font names, resolved through the process-wide [`FontRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSet {
    pub regular: String,
    pub bold: String,
    pub heading: String,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            regular: "Helvetica".to_string(),
            bold: "Helvetica-Bold".to_string(),
            heading: "Helvetica-Bold".to_string(),
        }
    }
}

/// Fonts of a [`FontSet`] after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub regular: FontFace,
    pub bold: FontFace,
    pub heading: FontFace,
}

impl FontSet {
    pub fn resolve(&self, registry: &FontRegistry) -> Result<ResolvedFonts, RenderError> {
        Ok(ResolvedFonts {
            regular: registry.resolve(&self.regular)?.clone(),
            bold: registry.resolve(&self.bold)?.clone(),
            heading: registry.resolve(&self.heading)?.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub fonts: FontSet,
    pub chrome: ChromeText,
    pub layout: LayoutConfig,
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The content budget this theme's page geometry allows.
    pub fn budget(&self) -> Result<ContentBudget, LayoutError> {
        ContentBudget::from_config(&self.layout)
    }
}
