use super::*;

const PAGE_FOOTER_MARKER: &str = "页共";
const TOP_NUMBER_LIMIT: u64 = 100;
/// Technical volumes restart numbering; larger single-part numbers there are list items.
const TECHNICAL_MAX_TOP: u64 = 5;
const BORROW_TITLE_TOKENS: [&str; 4] = [".", "。", ":", "："];
const PLACEHOLDER_TITLE_TOKENS: [&str; 2] = [".", "。"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Commercial,
    Technical,
}

/// Identity of a section for grouping: number, title and the volume it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub number: String,
    pub title: String,
    pub scope: Scope,
}

impl SectionKey {
    pub fn parts(&self) -> Vec<&str> {
        self.number.split('.').collect()
    }

    pub fn top_number(&self) -> Option<u64> {
        top_number(&self.number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    pub page_index: usize,
    pub y: f64,
    pub key: SectionKey,
}

fn top_number(number: &str) -> Option<u64> {
    number.split('.').next().and_then(|top| top.parse().ok())
}

pub struct HeaderParser {
    header: Regex,
    number_only: Regex,
    technical_after_page: usize,
}

impl HeaderParser {
    pub fn new(technical_after_page: usize) -> Result<Self> {
        Ok(Self {
            header: Regex::new(r"^(\d+(?:\.\d+)*)\.\s*(.*)")
                .context("failed to compile section header regex")?,
            number_only: Regex::new(r"^[\d.\s]+$")
                .context("failed to compile number-only regex")?,
            technical_after_page,
        })
    }

    /// Whether `page_index` opens the technical volume.
    fn starts_technical_scope(&self, page_index: usize, page: &LayoutPage) -> bool {
        if page_index <= self.technical_after_page {
            return false;
        }
        let text = page.full_text();
        text.contains("三、") && text.contains("技术部分")
    }

    /// Headers of every page in reading order, with the scope switching once for good.
    pub fn parse_document(&self, pages: &[LayoutPage]) -> Vec<SectionHeader> {
        let mut scope = Scope::Commercial;
        let mut headers = Vec::new();

        for (page_index, page) in pages.iter().enumerate() {
            if scope == Scope::Commercial && self.starts_technical_scope(page_index, page) {
                info!(page = page_index + 1, "switching to technical scope");
                scope = Scope::Technical;
            }
            headers.extend(self.page_headers(page_index, page, scope));
        }

        headers
    }

    pub fn page_headers(
        &self,
        page_index: usize,
        page: &LayoutPage,
        scope: Scope,
    ) -> Vec<SectionHeader> {
        let mut headers = Vec::new();

        for (line_index, line) in page.lines.iter().enumerate() {
            let text = line.text.trim();
            if text.is_empty() || text.contains(PAGE_FOOTER_MARKER) {
                continue;
            }
            let Some(captures) = self.header.captures(text) else {
                continue;
            };

            let number = captures[1].to_string();
            let parts = number.split('.').count();
            let Some(top) = top_number(&number) else {
                continue;
            };
            if top >= TOP_NUMBER_LIMIT {
                continue;
            }
            if scope == Scope::Technical && top > TECHNICAL_MAX_TOP && parts == 1 {
                continue;
            }

            let mut title = captures[2].trim().to_string();
            if title.is_empty() || BORROW_TITLE_TOKENS.contains(&title.as_str()) {
                title = self.next_meaningful_line(&page.lines[line_index + 1..]);
            }
            if title.is_empty() || PLACEHOLDER_TITLE_TOKENS.contains(&title.as_str()) {
                title = format!("(section {number})");
            }

            debug!(
                page = page_index + 1,
                y = line.y,
                number = %number,
                title = %title,
                "section header"
            );
            headers.push(SectionHeader {
                page_index,
                y: line.y,
                key: SectionKey {
                    number,
                    title,
                    scope,
                },
            });
        }

        headers
    }

    /// First following line that is neither blank, bare numbering nor a page footer.
    fn next_meaningful_line(&self, lines: &[LayoutLine]) -> String {
        lines
            .iter()
            .map(|line| line.text.trim())
            .find(|text| {
                !text.is_empty()
                    && !self.number_only.is_match(text)
                    && !text.contains(PAGE_FOOTER_MARKER)
            })
            .map(str::to_string)
            .unwrap_or_default()
    }
}

/// Title of the first header numbered like the `a.b` parent of an `a.b.c` section.
pub fn parent_title<'a>(number: &str, headers: &'a [SectionHeader]) -> Option<&'a str> {
    let parts: Vec<&str> = number.split('.').collect();
    if parts.len() < 3 {
        return None;
    }
    let parent = parts[..2].join(".");
    headers
        .iter()
        .find(|header| header.key.number == parent)
        .map(|header| header.key.title.as_str())
}
