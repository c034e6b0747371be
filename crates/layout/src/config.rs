use crate::LayoutError;
use crate::metrics::TextMetrics;
use serde::{Deserialize, Serialize};

/// Page geometry and chrome heights, in PDF points.
///
/// Every page reserves `header_height` and `footer_height` for the running
/// chrome. The first page additionally reserves the banner and case-info
/// block, plus the statistics block when the case has evidence.
///
/// Defaults to A4 portrait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_horizontal: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub header_height: f32,
    pub footer_height: f32,
    pub banner_height: f32,
    pub case_info_height: f32,
    pub statistics_height: f32,
    pub body: TextMetrics,
    pub heading: TextMetrics,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin_horizontal: 50.0,
            margin_top: 36.0,
            margin_bottom: 36.0,
            header_height: 28.0,
            footer_height: 40.0,
            banner_height: 84.0,
            case_info_height: 70.0,
            statistics_height: 46.0,
            body: TextMetrics::body(),
            heading: TextMetrics::heading(),
        }
    }
}

impl LayoutConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin_horizontal
    }

    /// Height of the body region on a page with only the running chrome.
    pub fn body_height(&self) -> f32 {
        self.page_height
            - self.margin_top
            - self.margin_bottom
            - self.header_height
            - self.footer_height
    }

    /// Y offset (from the top edge) where body content starts on a
    /// continuation page.
    pub fn body_top(&self) -> f32 {
        self.margin_top + self.header_height
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("body.fontSize", self.body.font_size),
            ("heading.fontSize", self.heading.font_size),
            ("body.lineHeight", self.body.line_height),
            ("heading.lineHeight", self.heading.line_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidBudget(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        let non_negative = [
            ("marginHorizontal", self.margin_horizontal),
            ("marginTop", self.margin_top),
            ("marginBottom", self.margin_bottom),
            ("headerHeight", self.header_height),
            ("footerHeight", self.footer_height),
            ("bannerHeight", self.banner_height),
            ("caseInfoHeight", self.case_info_height),
            ("statisticsHeight", self.statistics_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidBudget(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        if self.content_width() <= 0.0 {
            return Err(LayoutError::InvalidBudget(format!(
                "horizontal margins leave no content width on a {}pt wide page",
                self.page_width
            )));
        }
        if self.body_height() <= 0.0 {
            return Err(LayoutError::InvalidBudget(format!(
                "margins and chrome leave no body height on a {}pt tall page",
                self.page_height
            )));
        }
        Ok(())
    }
}
