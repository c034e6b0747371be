use chrono::{NaiveDate, NaiveTime};
use dossier::{CaseMetadata, GenerationRequest};

pub const SAMPLE_ANALYSIS: &str = "**Summary**\nFindings are conclusive.\n**Details**\nSee appendix.";

pub fn metadata(case_id: &str, evidence_count: u32) -> CaseMetadata {
    CaseMetadata::new(
        case_id,
        NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
        NaiveTime::from_hms_opt(16, 42, 7).unwrap(),
    )
    .with_title("Workstation Intrusion")
    .with_evidence_count(evidence_count)
}

pub fn request(text: &str) -> GenerationRequest {
    GenerationRequest::new(text, metadata("C-2024-117", 4))
}

/// An analysis long enough to need several pages: `sections` headings, each
/// followed by a multi-line paragraph.
pub fn long_analysis(sections: usize) -> String {
    (1..=sections)
        .map(|i| {
            format!(
                "**Finding {}**\nArtifact {} was recovered from unallocated space and its hash matched \
                 a known sample. The timeline places its creation shortly before the first outbound \
                 connection, and registry entries show it was configured to run at logon. Browser \
                 history and prefetch records from the same hour corroborate manual execution.",
                i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
