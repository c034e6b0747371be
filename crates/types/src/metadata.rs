use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Read-only snapshot of the case a report is generated for.
///
/// The generation date and time are supplied by the caller rather than read
/// from the clock, so the same metadata always renders the same artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseMetadata {
    /// Case title. `None` means no title was supplied; a fallback is
    /// substituted when the report is rendered.
    #[serde(default)]
    pub title: Option<String>,
    pub case_id: String,
    pub generated_date: NaiveDate,
    pub generated_time: NaiveTime,
    /// Number of evidence items attached to the case when the request was made.
    #[serde(default)]
    pub evidence_count: u32,
}

impl CaseMetadata {
    pub fn new(case_id: impl Into<String>, generated_date: NaiveDate, generated_time: NaiveTime) -> Self {
        Self {
            title: None,
            case_id: case_id.into(),
            generated_date,
            generated_time,
            evidence_count: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_evidence_count(mut self, evidence_count: u32) -> Self {
        self.evidence_count = evidence_count;
        self
    }

    /// The supplied title, or `fallback` when none was given (or it is blank).
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title,
            _ => fallback,
        }
    }

    /// Whether the evidence statistics block belongs on the first page.
    pub fn has_evidence(&self) -> bool {
        self.evidence_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaseMetadata {
        CaseMetadata::new(
            "C-1042",
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
        )
    }

    #[test]
    fn display_title_falls_back_when_missing_or_blank() {
        assert_eq!(sample().display_title("Untitled"), "Untitled");
        assert_eq!(sample().with_title("   ").display_title("Untitled"), "Untitled");
        assert_eq!(sample().with_title("Break-in").display_title("Untitled"), "Break-in");
    }

    #[test]
    fn evidence_flag_tracks_count() {
        assert!(!sample().has_evidence());
        assert!(sample().with_evidence_count(3).has_evidence());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let meta: CaseMetadata = serde_json::from_str(
            r#"{"caseId":"C-1042","generatedDate":"2024-03-09","generatedTime":"14:05:00"}"#,
        )
        .unwrap();
        assert_eq!(meta, sample());
    }
}
