use dossier_render_core::theme::FALLBACK_TITLE;
use dossier_types::CaseMetadata;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A rendered report, ready for download or preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ReportArtifact {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, &self.bytes)
    }

    /// Writes the artifact into `dir` under its suggested file name.
    pub fn write_into_dir(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }
}

/// Suggested file name: `report_<title>_<caseId>_<YYYY-MM-DD>.<extension>`.
///
/// Title and case id have every character outside `[A-Za-z0-9]` replaced by
/// `_`, so the same inputs on the same day always give the same safe name.
pub fn file_name(metadata: &CaseMetadata, extension: &str) -> String {
    file_name_with_fallback(metadata, FALLBACK_TITLE, extension)
}

/// Like [`file_name`], with the title used when the case has none.
pub fn file_name_with_fallback(metadata: &CaseMetadata, fallback_title: &str, extension: &str) -> String {
    format!(
        "report_{}_{}_{}.{}",
        sanitize(metadata.display_title(fallback_title)),
        sanitize(&metadata.case_id),
        metadata.generated_date.format("%Y-%m-%d"),
        extension
    )
}

fn sanitize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
