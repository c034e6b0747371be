use crate::budget::ContentBudget;
use crate::metrics::TextMetrics;
use chrono::{NaiveDate, NaiveTime};
use dossier_types::{Block, CaseMetadata};

pub fn metadata(evidence_count: u32) -> CaseMetadata {
    CaseMetadata::new(
        "C-TEST",
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    )
    .with_evidence_count(evidence_count)
}

/// A budget in abstract units: one line is one unit, a line holds 100 glyphs,
/// continuation pages hold 50 lines, page 1 loses 10 to the banner and 10 more
/// to the statistics block.
pub fn tight_budget() -> ContentBudget {
    let unit = TextMetrics {
        font_size: 1.0,
        line_height: 1.0,
        space_before: 0.0,
        space_after: 0.0,
        glyph_width_em: 1.0,
    };
    ContentBudget {
        body_height: 50.0,
        first_page_chrome: 10.0,
        statistics_chrome: 10.0,
        content_width: 100.0,
        body: unit,
        heading: unit,
    }
}

/// A paragraph that wraps to exactly `lines` lines under [`tight_budget`],
/// tagged with `id` so blocks stay distinguishable.
pub fn paragraph_of_lines(id: usize, lines: usize) -> Block {
    let mut words = vec![format!("{:x>100}", id)];
    words.extend((1..lines).map(|_| "x".repeat(100)));
    Block::Paragraph(words.join(" "))
}
