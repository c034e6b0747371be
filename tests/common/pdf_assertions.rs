use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Strings shown on `page` (1-based), one per line, in drawing order.
///
/// Bytes are decoded as Latin-1, which agrees with WinAnsi for everything
/// the tests draw.
pub fn extract_page_text(doc: &LopdfDocument, page: u32) -> String {
    let Some(page_id) = doc.get_pages().get(&page).copied() else {
        return String::new();
    };
    let Ok(raw) = doc.get_page_content(page_id) else {
        return String::new();
    };
    let Ok(content) = Content::decode(&raw) else {
        return String::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| bytes.iter().map(|&b| b as char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page in 1..=doc.get_pages().len() as u32 {
        text.push_str(&extract_page_text(doc, page));
        text.push('\n');
    }
    text
}

/// Base font names declared in the shared font resources.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter_map(|dict| dict.get(b"Font").and_then(|fonts| fonts.as_dict()).ok())
        .flat_map(|fonts| fonts.iter().map(|(_, font)| font))
        .filter_map(|font| font.as_dict().ok())
        .filter_map(|font| font.get(b"BaseFont").and_then(|name| name.as_name()).ok())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

/// A string entry of the document information dictionary.
pub fn info_entry(doc: &LopdfDocument, key: &str) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let value = info.get(key.as_bytes()).ok()?.as_str().ok()?;
    Some(value.iter().map(|&b| b as char).collect())
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
