use super::*;

const PAGE_HEAD_CHARS: usize = 2000;

/// Whether `title` appears on a page, tolerating whitespace noise from OCR.
pub fn title_in_page(title: &str, page_text: &str) -> bool {
    if title.is_empty() || page_text.is_empty() {
        return false;
    }

    if page_text.contains(title) {
        return true;
    }

    let normalized_title = strip_whitespace(title);
    if strip_whitespace(page_text).contains(&normalized_title) {
        return true;
    }

    strip_whitespace(char_prefix(page_text, PAGE_HEAD_CHARS)).contains(&normalized_title)
}
