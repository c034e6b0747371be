use crate::helpers::{PageContext, estimate_text_width, fit_text};
use crate::writer::StreamingPdfWriter;
use dossier_layout::{ContentBudget, HeaderChrome, Page, StatisticsBlock};
use dossier_render_core::fonts::{self, FontRegistry};
use dossier_render_core::theme::ResolvedFonts;
use dossier_render_core::utils::format_page_marker;
use dossier_render_core::{DocumentRenderer, RenderError, ThemeConfig};
use dossier_types::{Block, CaseMetadata};
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{Seek, Write};

const ACCENT_BAR_HEIGHT: f32 = 6.0;
const PANEL_GAP: f32 = 10.0;
const RUNNING_HEADER_SIZE: f32 = 8.5;
const BADGE_SIZE: f32 = 7.5;
const TITLE_SIZE: f32 = 20.0;
const SUBTITLE_SIZE: f32 = 10.5;
const META_SIZE: f32 = 9.0;
const FOOTER_SIZE: f32 = 7.5;

/// The report renderer backed by `lopdf` primitives.
///
/// Every font the theme names is resolved against the process-wide
/// [`FontRegistry`] when the renderer is created, so an unknown font fails
/// before any bytes are written.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
    theme: ThemeConfig,
    budget: ContentBudget,
    fonts: ResolvedFonts,
    /// PostScript name to resource key (`F1`, `F2`, ...), in first-use order.
    font_keys: BTreeMap<String, String>,
    producer: String,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new(theme: &ThemeConfig) -> Result<Self, RenderError> {
        Self::with_registry(theme, fonts::global())
    }

    pub fn with_registry(theme: &ThemeConfig, registry: &FontRegistry) -> Result<Self, RenderError> {
        let fonts = theme.fonts.resolve(registry)?;
        let budget = theme
            .budget()
            .map_err(|e| RenderError::Other(format!("Theme page geometry is unusable: {}", e)))?;

        let mut font_keys = BTreeMap::new();
        for face in [&fonts.regular, &fonts.bold, &fonts.heading] {
            let next = format!("F{}", font_keys.len() + 1);
            font_keys.entry(face.postscript_name.clone()).or_insert(next);
        }

        Ok(Self {
            writer: None,
            theme: theme.clone(),
            budget,
            fonts,
            font_keys,
            producer: format!("dossier {}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    fn font_key(&self, postscript_name: &str) -> &str {
        self.font_keys
            .get(postscript_name)
            .map(String::as_str)
            .unwrap_or("F1")
    }

    fn info_dictionary(&self, metadata: &CaseMetadata) -> Dictionary {
        let literal = |s: &str| Object::String(crate::helpers::to_win_ansi(s), StringFormat::Literal);
        let creation_date = format!(
            "D:{}{}",
            metadata.generated_date.format("%Y%m%d"),
            metadata.generated_time.format("%H%M%S")
        );
        dictionary! {
            "Title" => literal(metadata.display_title(&self.theme.chrome.fallback_title)),
            "Subject" => literal(&format!("Case {}", metadata.case_id)),
            "Producer" => literal(&self.producer),
            "CreationDate" => literal(&creation_date),
        }
    }

    /// Accent bar, running header with the classification badge, and the
    /// rule beneath it. Drawn on every page.
    fn draw_running_header(&self, ctx: &mut PageContext, metadata: &CaseMetadata) {
        let layout = &self.theme.layout;
        let palette = &self.theme.palette;
        let chrome = &self.theme.chrome;
        let left = layout.margin_horizontal;
        let width = layout.content_width();
        let top = layout.margin_top;

        ctx.fill_rect(0.0, 0.0, layout.page_width, ACCENT_BAR_HEIGHT, palette.accent);

        let badge_width = estimate_text_width(&chrome.classification_badge, BADGE_SIZE) + 12.0;
        let badge_height = BADGE_SIZE + 7.0;
        ctx.fill_rect(left + width - badge_width, top, badge_width, badge_height, palette.badge_background);
        ctx.text(
            left + width - badge_width + 6.0,
            top + 3.5,
            self.font_key(&self.fonts.bold.postscript_name),
            BADGE_SIZE,
            palette.badge_text,
            &chrome.classification_badge,
        );

        let running = format!(
            "{}  |  {} {}",
            metadata.display_title(&chrome.fallback_title),
            chrome.case_id_label,
            metadata.case_id
        );
        let running = fit_text(&running, RUNNING_HEADER_SIZE, width - badge_width - 12.0);
        ctx.text(
            left,
            top + 3.0,
            self.font_key(&self.fonts.bold.postscript_name),
            RUNNING_HEADER_SIZE,
            palette.muted,
            &running,
        );

        ctx.horizontal_rule(left, top + layout.header_height - 6.0, width, 0.5, palette.rule);
    }

    /// Title banner, case information and optional statistics. Returns the
    /// layout height where body content starts.
    fn draw_first_page_chrome(
        &self,
        ctx: &mut PageContext,
        metadata: &CaseMetadata,
        statistics: Option<StatisticsBlock>,
    ) -> f32 {
        let layout = &self.theme.layout;
        let palette = &self.theme.palette;
        let chrome = &self.theme.chrome;
        let left = layout.margin_horizontal;
        let width = layout.content_width();
        let bold = self.font_key(&self.fonts.bold.postscript_name).to_string();
        let regular = self.font_key(&self.fonts.regular.postscript_name).to_string();

        let mut top = layout.body_top();

        // Banner
        ctx.fill_rect(left, top, width, layout.banner_height - PANEL_GAP, palette.banner_background);
        let title = fit_text(
            metadata.display_title(&chrome.fallback_title),
            TITLE_SIZE,
            width - 24.0,
        );
        ctx.text(left + 12.0, top + 12.0, &bold, TITLE_SIZE, palette.banner_text, &title);
        ctx.text(left + 12.0, top + 38.0, &regular, SUBTITLE_SIZE, palette.banner_text, &chrome.subtitle);
        let stamp = format!(
            "{} {} {}",
            chrome.date_label,
            metadata.generated_date.format("%Y-%m-%d"),
            metadata.generated_time.format("%H:%M:%S")
        );
        ctx.text(left + 12.0, top + 54.0, &regular, META_SIZE, palette.banner_text, &stamp);
        top += layout.banner_height;

        // Case information
        ctx.fill_rect(left, top, width, layout.case_info_height - PANEL_GAP, palette.panel_background);
        ctx.text(left + 12.0, top + 10.0, &bold, 11.0, palette.heading, &chrome.case_info_heading);
        let column = (width - 24.0) / 3.0;
        let fields = [
            (&chrome.case_id_label, metadata.case_id.clone()),
            (&chrome.date_label, metadata.generated_date.format("%Y-%m-%d").to_string()),
            (&chrome.time_label, metadata.generated_time.format("%H:%M:%S").to_string()),
        ];
        for (i, (label, value)) in fields.iter().enumerate() {
            let x = left + 12.0 + column * i as f32;
            ctx.text(x, top + 30.0, &regular, FOOTER_SIZE, palette.muted, label);
            let value = fit_text(value, META_SIZE + 1.0, column - 8.0);
            ctx.text(x, top + 42.0, &bold, META_SIZE + 1.0, palette.body, &value);
        }
        top += layout.case_info_height;

        // Evidence statistics, only for cases with evidence
        if let Some(statistics) = statistics {
            ctx.fill_rect(left, top, 4.0, layout.statistics_height - PANEL_GAP, palette.accent);
            ctx.fill_rect(
                left + 4.0,
                top,
                width - 4.0,
                layout.statistics_height - PANEL_GAP,
                palette.panel_background,
            );
            ctx.text(left + 14.0, top + 6.0, &regular, FOOTER_SIZE, palette.muted, &chrome.statistics_label);
            ctx.text(
                left + 14.0,
                top + 17.0,
                &bold,
                14.0,
                palette.accent,
                &statistics.evidence_count.to_string(),
            );
            top += layout.statistics_height;
        }

        top
    }

    fn draw_body(&self, ctx: &mut PageContext, blocks: &[Block], mut top: f32) {
        let left = self.theme.layout.margin_horizontal;
        for block in blocks {
            let metrics = self.budget.metrics_for(block);
            let (font, color) = match block {
                Block::Heading(_) => (&self.fonts.heading, self.theme.palette.heading),
                Block::Paragraph(_) => (&self.fonts.regular, self.theme.palette.body),
            };
            let font_key = self.font_key(&font.postscript_name).to_string();

            top += metrics.space_before;
            for line in self.budget.wrap(block) {
                ctx.text(left, top, &font_key, metrics.font_size, color, &line);
                top += metrics.line_advance();
            }
            top += metrics.space_after;
        }
    }

    fn draw_footer(&self, ctx: &mut PageContext, page: &Page) {
        let layout = &self.theme.layout;
        let palette = &self.theme.palette;
        let chrome = &self.theme.chrome;
        let left = layout.margin_horizontal;
        let width = layout.content_width();
        let top = layout.page_height - layout.margin_bottom - layout.footer_height;
        let regular = self.font_key(&self.fonts.regular.postscript_name).to_string();

        ctx.horizontal_rule(left, top + 6.0, width, 0.5, palette.rule);
        let disclaimer = fit_text(&chrome.disclaimer, FOOTER_SIZE, width);
        ctx.text(left, top + 12.0, &regular, FOOTER_SIZE, palette.muted, &disclaimer);
        let marker = format_page_marker(
            &chrome.page_marker,
            page.footer.page_number,
            page.footer.total_pages,
        );
        ctx.text_right(left + width, top + 25.0, &regular, 8.5, palette.body, &marker);
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, metadata: &CaseMetadata) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();
        for (postscript_name, key) in &self.font_keys {
            let mut single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => postscript_name.as_str(),
            };
            if postscript_name != "Symbol" && postscript_name != "ZapfDingbats" {
                single_font_dict.set("Encoding", "WinAnsiEncoding");
            }
            font_dict.set(key.as_bytes(), Object::Dictionary(single_font_dict));
        }

        let mut pdf_writer = StreamingPdfWriter::new(writer, "1.7", font_dict)?;
        pdf_writer.set_info(self.info_dictionary(metadata));
        self.writer = Some(pdf_writer);
        Ok(())
    }

    fn render_page(&mut self, page: &Page, metadata: &CaseMetadata) -> Result<ObjectId, RenderError> {
        let layout = self.theme.layout;
        let mut ctx = PageContext::new(layout.page_height);

        self.draw_running_header(&mut ctx, metadata);
        let body_top = match page.header {
            HeaderChrome::Banner { statistics } => {
                self.draw_first_page_chrome(&mut ctx, metadata, statistics)
            }
            HeaderChrome::Running => layout.body_top(),
        };
        self.draw_body(&mut ctx, &page.body, body_top);
        self.draw_footer(&mut ctx, page);

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))?;
        let content_id = writer.write_content_stream(ctx.finish())?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![Object::Real(0.0), Object::Real(0.0), layout.page_width.into(), layout.page_height.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into())?;
        writer.push_page(page_id);
        Ok(page_id)
    }

    fn finish(mut self) -> Result<W, RenderError> {
        match self.writer.take() {
            Some(writer) => Ok(writer.finish()?),
            None => Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            )),
        }
    }
}
