/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Expands the `{page}` and `{total}` placeholders of a page marker template.
pub fn format_page_marker(template: &str, page: usize, total: usize) -> String {
    template
        .replace("{page}", &page.to_string())
        .replace("{total}", &total.to_string())
}
