use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::metrics::TextMetrics;
use dossier_types::Block;

/// Vertical capacity of a page's body region and the metrics used to
/// estimate how much of it each block consumes.
///
/// Continuation pages get the full `body_height`. The first page loses the
/// banner and case-info block, and the statistics block when present; those
/// are charged exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBudget {
    pub body_height: f32,
    pub first_page_chrome: f32,
    pub statistics_chrome: f32,
    pub content_width: f32,
    pub body: TextMetrics,
    pub heading: TextMetrics,
}

impl ContentBudget {
    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            body_height: config.body_height(),
            first_page_chrome: config.banner_height + config.case_info_height,
            statistics_chrome: config.statistics_height,
            content_width: config.content_width(),
            body: config.body,
            heading: config.heading,
        })
    }

    /// Remaining capacity on page 1 once the fixed first-page chrome is placed.
    /// May be zero or negative for very large chrome; the engine still places
    /// one block there to guarantee progress.
    pub fn first_page_capacity(&self, with_statistics: bool) -> f32 {
        let statistics = if with_statistics {
            self.statistics_chrome
        } else {
            0.0
        };
        self.body_height - self.first_page_chrome - statistics
    }

    pub fn continuation_capacity(&self) -> f32 {
        self.body_height
    }

    pub fn metrics_for(&self, block: &Block) -> &TextMetrics {
        match block {
            Block::Heading(_) => &self.heading,
            Block::Paragraph(_) => &self.body,
        }
    }

    /// Wrapped lines of `block` as they will be drawn.
    pub fn wrap(&self, block: &Block) -> Vec<String> {
        self.metrics_for(block).wrap(block.text(), self.content_width)
    }

    /// Estimated vertical space `block` takes, including its spacing.
    pub fn estimate(&self, block: &Block) -> f32 {
        self.metrics_for(block)
            .estimate_height(block.text(), self.content_width)
    }
}
