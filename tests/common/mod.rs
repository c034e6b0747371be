#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use dossier::{GenerationRequest, GeneratorConfig, PipelineError, ReportArtifact, ReportGenerator};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_artifact(artifact: &ReportArtifact) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(artifact.bytes.clone())
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text drawn on one page, 1-based.
    pub fn page_text(&self, page: u32) -> String {
        pdf_assertions::extract_page_text(&self.doc, page)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs the synchronous pipeline with the default configuration.
pub fn generate(request: &GenerationRequest) -> Result<(ReportArtifact, GeneratedPdf), Box<dyn std::error::Error>> {
    generate_with(GeneratorConfig::default(), request)
}

pub fn generate_with(
    config: GeneratorConfig,
    request: &GenerationRequest,
) -> Result<(ReportArtifact, GeneratedPdf), Box<dyn std::error::Error>> {
    let artifact = ReportGenerator::new(config).generate(request)?;
    let pdf = GeneratedPdf::from_artifact(&artifact)?;
    Ok((artifact, pdf))
}

pub fn generate_err(config: GeneratorConfig, request: &GenerationRequest) -> Option<PipelineError> {
    ReportGenerator::new(config).generate(request).err()
}
