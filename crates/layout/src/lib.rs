use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Layout invariant violated: {0}")]
    InvariantViolation(String),
    #[error("Invalid content budget: {0}")]
    InvalidBudget(String),
}

pub mod budget;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod page;

pub use self::budget::ContentBudget;
pub use self::config::LayoutConfig;
pub use self::engine::{PageLayoutEngine, layout};
pub use self::metrics::TextMetrics;
pub use self::page::{FooterChrome, HeaderChrome, LaidOutDocument, Page, StatisticsBlock};

#[cfg(test)]
mod test_utils;
