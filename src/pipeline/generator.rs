use super::artifact::{ReportArtifact, file_name_with_fallback};
use crate::config::GeneratorConfig;
use crate::error::PipelineError;
use dossier_core::{DocumentModelBuilder, TextSectionParser};
use dossier_layout::{LaidOutDocument, PageLayoutEngine};
use dossier_render_core::DocumentRenderer;
use dossier_render_lopdf::LopdfRenderer;
use dossier_types::{CaseMetadata, ReportDocument};
use log::{debug, info};
use std::io::Cursor;
use std::time::Instant;

/// One report to generate: the analysis text and the case it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub metadata: CaseMetadata,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>, metadata: CaseMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Blank text has nothing to report.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Something that turns a request into an artifact synchronously.
///
/// The controller runs backends on the blocking thread pool, so an
/// implementation may take as long as it needs.
pub trait ReportBackend: Send + Sync + 'static {
    fn generate(&self, request: &GenerationRequest) -> Result<ReportArtifact, PipelineError>;
}

/// The synchronous pipeline: parse, build, lay out, render.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: GeneratorConfig,
    parser: TextSectionParser,
}

impl ReportGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            parser: TextSectionParser::default(),
        }
    }

    pub fn with_parser(mut self, parser: TextSectionParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn build_document(&self, request: &GenerationRequest) -> ReportDocument {
        DocumentModelBuilder::new(request.metadata.clone())
            .with_parser(self.parser)
            .text(&request.text)
            .build()
    }

    pub fn layout(&self, document: &ReportDocument) -> Result<LaidOutDocument, PipelineError> {
        let budget = self.config.theme.budget()?;
        Ok(PageLayoutEngine::new(budget).layout(document)?)
    }

    pub fn render(&self, laid_out: &LaidOutDocument) -> Result<Vec<u8>, PipelineError> {
        let renderer = LopdfRenderer::new(&self.config.theme)?.with_producer(self.config.producer.as_str());
        let writer = renderer.render_document(Cursor::new(Vec::new()), laid_out)?;
        Ok(writer.into_inner())
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<ReportArtifact, PipelineError> {
        let total_start = Instant::now();
        info!("Generating report for case '{}'", request.metadata.case_id);

        let document = self.build_document(request);

        let layout_start = Instant::now();
        let laid_out = self.layout(&document)?;
        debug!(
            "Laid out {} blocks on {} pages in {:.2?}",
            document.blocks().len(),
            laid_out.page_count(),
            layout_start.elapsed()
        );

        let render_start = Instant::now();
        let bytes = self.render(&laid_out)?;
        debug!("Rendered {} bytes in {:.2?}", bytes.len(), render_start.elapsed());

        let artifact = ReportArtifact {
            file_name: file_name_with_fallback(
                &request.metadata,
                &self.config.theme.chrome.fallback_title,
                &self.config.extension,
            ),
            bytes,
            page_count: laid_out.page_count(),
        };
        info!(
            "Generated '{}' ({} pages) in {:.2?}",
            artifact.file_name,
            artifact.page_count,
            total_start.elapsed()
        );
        Ok(artifact)
    }
}

impl ReportBackend for ReportGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<ReportArtifact, PipelineError> {
        ReportGenerator::generate(self, request)
    }
}
