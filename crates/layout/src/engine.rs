//! Greedy pagination of a [`ReportDocument`].
//!
//! Blocks are appended to the current page until the next one would overflow
//! the remaining budget; then the page is sealed and a new one opened. Blocks
//! are never split. A block that does not fit even on an empty page is placed
//! alone so layout always makes progress. Page totals are filled in only
//! after every page is sealed.

use crate::LayoutError;
use crate::budget::ContentBudget;
use crate::page::{FooterChrome, HeaderChrome, LaidOutDocument, Page, StatisticsBlock};
use dossier_types::{Block, ReportDocument};
use log::{debug, error, trace, warn};

/// Tolerance for floating point accumulation when testing fit.
const EPSILON: f32 = 0.01;

/// Lays `doc` out against `budget`. See [`PageLayoutEngine::layout`].
pub fn layout(doc: &ReportDocument, budget: &ContentBudget) -> Result<LaidOutDocument, LayoutError> {
    PageLayoutEngine::new(*budget).layout(doc)
}

#[derive(Debug, Clone, Copy)]
pub struct PageLayoutEngine {
    budget: ContentBudget,
}

/// A page whose body is still being filled.
struct OpenPage {
    body: Vec<Block>,
    used: f32,
    capacity: f32,
}

impl OpenPage {
    fn new(capacity: f32) -> Self {
        Self {
            body: Vec::new(),
            used: 0.0,
            capacity,
        }
    }

    fn fits(&self, height: f32) -> bool {
        height <= (self.capacity - self.used) + EPSILON
    }
}

impl PageLayoutEngine {
    pub fn new(budget: ContentBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> &ContentBudget {
        &self.budget
    }

    /// Paginates `doc`. Always yields at least one page; page 1 carries the
    /// banner chrome and, if the case has evidence, the statistics block.
    ///
    /// The only error is [`LayoutError::InvariantViolation`], which means the
    /// engine itself is broken.
    pub fn layout(&self, doc: &ReportDocument) -> Result<LaidOutDocument, LayoutError> {
        let metadata = doc.metadata();
        let statistics = metadata.has_evidence().then_some(StatisticsBlock {
            evidence_count: metadata.evidence_count,
        });

        let bodies = self.fill_pages(doc.blocks(), statistics.is_some());

        let total_pages = bodies.len();
        let pages: Vec<Page> = bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| {
                let index = i + 1;
                let header = if index == 1 {
                    HeaderChrome::Banner { statistics }
                } else {
                    HeaderChrome::Running
                };
                Page {
                    index,
                    total_pages,
                    header,
                    footer: FooterChrome {
                        page_number: index,
                        total_pages,
                    },
                    body,
                }
            })
            .collect();

        verify_coverage(doc.blocks(), &pages)?;

        debug!(
            "Laid out case '{}': {} blocks over {} pages",
            metadata.case_id,
            doc.blocks().len(),
            total_pages
        );
        Ok(LaidOutDocument::new(metadata.clone(), pages))
    }

    /// First pass: distribute blocks into page bodies.
    fn fill_pages(&self, blocks: &[Block], with_statistics: bool) -> Vec<Vec<Block>> {
        let mut sealed = Vec::new();
        let mut page = OpenPage::new(self.budget.first_page_capacity(with_statistics));

        for block in blocks {
            let height = self.budget.estimate(block);

            if !page.body.is_empty() && !page.fits(height) {
                trace!(
                    "Sealing page {} at {:.1}/{:.1}pt",
                    sealed.len() + 1,
                    page.used,
                    page.capacity
                );
                let full = std::mem::replace(
                    &mut page,
                    OpenPage::new(self.budget.continuation_capacity()),
                );
                sealed.push(full.body);
            }

            if page.body.is_empty() && !page.fits(height) {
                warn!(
                    "Block of {:.1}pt exceeds the {:.1}pt available on page {}; placing it alone",
                    height,
                    page.capacity,
                    sealed.len() + 1
                );
            }

            page.used += height;
            page.body.push(block.clone());
        }

        sealed.push(page.body);
        sealed
    }
}

/// Checks that pagination neither dropped, duplicated nor reordered blocks,
/// that numbering is consistent, and that only an empty document produces an
/// empty page.
fn verify_coverage(blocks: &[Block], pages: &[Page]) -> Result<(), LayoutError> {
    let violation = |message: String| {
        error!("Layout invariant violated: {}", message);
        Err(LayoutError::InvariantViolation(message))
    };

    if pages.is_empty() {
        return violation("layout produced zero pages".to_string());
    }

    let placed = pages.iter().flat_map(|page| page.body.iter());
    if !placed.eq(blocks.iter()) {
        let placed_count: usize = pages.iter().map(|page| page.body.len()).sum();
        return violation(format!(
            "page bodies hold {} blocks but the document has {}, or their order differs",
            placed_count,
            blocks.len()
        ));
    }

    for (i, page) in pages.iter().enumerate() {
        if page.index != i + 1 || page.total_pages != pages.len() {
            return violation(format!(
                "page at position {} is numbered {} of {}",
                i + 1,
                page.index,
                page.total_pages
            ));
        }
        if page.body.is_empty() && !blocks.is_empty() {
            return violation(format!("page {} has an empty body", page.index));
        }
    }
    Ok(())
}
