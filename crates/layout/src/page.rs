use dossier_types::{Block, CaseMetadata};

/// Evidence statistics shown on the first page. Only present when the case
/// has at least one evidence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsBlock {
    pub evidence_count: u32,
}

/// Header chrome of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderChrome {
    /// First page: accent bar, title banner, confidentiality badge and the
    /// case-information block, optionally followed by evidence statistics.
    Banner { statistics: Option<StatisticsBlock> },
    /// Continuation pages: accent bar and a thin running header.
    Running,
}

impl HeaderChrome {
    pub fn statistics(&self) -> Option<StatisticsBlock> {
        match self {
            HeaderChrome::Banner { statistics } => *statistics,
            HeaderChrome::Running => None,
        }
    }
}

/// Footer chrome: fixed disclaimer plus the "page X of Y" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterChrome {
    pub page_number: usize,
    pub total_pages: usize,
}

/// One laid-out page. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub total_pages: usize,
    pub header: HeaderChrome,
    pub footer: FooterChrome,
    pub body: Vec<Block>,
}

impl Page {
    pub fn is_first(&self) -> bool {
        self.index == 1
    }
}

/// The paginated form of a report document.
///
/// Concatenating every page body in page order reproduces the document's
/// blocks exactly. Only [`layout`](crate::layout) constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutDocument {
    metadata: CaseMetadata,
    pages: Vec<Page>,
}

impl LaidOutDocument {
    pub(crate) fn new(metadata: CaseMetadata, pages: Vec<Page>) -> Self {
        Self { metadata, pages }
    }

    pub fn metadata(&self) -> &CaseMetadata {
        &self.metadata
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All placed blocks, in page order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.pages.iter().flat_map(|page| page.body.iter())
    }
}
