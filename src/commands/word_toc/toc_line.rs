use super::*;

const CHINESE_NUMERALS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];
/// A single-space separated trailing number above this is a year or a code, not a page.
const TAIL_PAGE_LIMIT: u32 = 2000;
const TOP_NUMBER_LIMIT: u64 = 100;

/// `一、` style label for a level-1 counter; counters past ten stay arabic.
pub fn chinese_part_label(counter: usize) -> String {
    let numeral = counter
        .checked_sub(1)
        .and_then(|index| CHINESE_NUMERALS.get(index))
        .map(|numeral| numeral.to_string())
        .unwrap_or_else(|| counter.to_string());
    format!("{numeral}、")
}

/// Recognises `一、标题` and `1.2.3. 标题` lines and trailing page numbers.
pub struct TocLineParser {
    chinese_heading: Regex,
    arabic_heading: Regex,
    wide_page: Regex,
    tail_page: Regex,
    dot_leader: Regex,
    ellipsis_leader: Regex,
}

impl TocLineParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            chinese_heading: Regex::new(r"^([一二三四五六七八九十]+)、\s*(.+)")
                .context("failed to compile chinese heading regex")?,
            arabic_heading: Regex::new(r"^([0-9]+(?:\.[0-9]+)*)[.．]\s*(.+)")
                .context("failed to compile arabic heading regex")?,
            wide_page: Regex::new(r"\s{2,}([0-9]{1,4})\s*$")
                .context("failed to compile page number regex")?,
            tail_page: Regex::new(r"\s([0-9]{1,4})$")
                .context("failed to compile trailing page regex")?,
            dot_leader: Regex::new(r"\.{3,}").context("failed to compile dot leader regex")?,
            ellipsis_leader: Regex::new(r"…+").context("failed to compile ellipsis regex")?,
        })
    }

    /// Leading Chinese enumerator: `("一、", rest)`.
    pub fn chinese_heading(&self, text: &str) -> Option<(String, String)> {
        let captures = self.chinese_heading.captures(text)?;
        Some((format!("{}、", &captures[1]), captures[2].to_string()))
    }

    /// Leading dotted arabic number with a top-level value below 100: `(number, rest)`.
    pub fn arabic_heading(&self, text: &str) -> Option<(String, String)> {
        let captures = self.arabic_heading.captures(text)?;
        let number = captures[1].to_string();
        if !top_number_in_range(&number) {
            return None;
        }
        Some((number, captures[2].to_string()))
    }

    /// Splits a trailing page number off a title.
    pub fn split_page(&self, rest: &str) -> (String, Option<u32>) {
        let rest = rest.trim_end();

        if let Some(captures) = self.wide_page.captures(rest) {
            if let (Some(whole), Ok(page)) = (captures.get(0), captures[1].parse::<u32>()) {
                return (rest[..whole.start()].trim().to_string(), Some(page));
            }
        }

        if let Some(captures) = self.tail_page.captures(rest) {
            if let (Some(whole), Ok(page)) = (captures.get(0), captures[1].parse::<u32>()) {
                if page < TAIL_PAGE_LIMIT {
                    return (rest[..whole.start()].trim().to_string(), Some(page));
                }
            }
        }

        (rest.trim().to_string(), None)
    }

    /// Parses one line of a printed TOC into an entry without a paragraph position.
    pub fn parse_toc_line(&self, text: &str) -> Option<WordTocEntry> {
        let text = text.trim();

        if let Some((number, rest)) = self.chinese_heading(text) {
            let (title, page) = self.split_page(&rest);
            if !title.is_empty() {
                return Some(toc_entry(number, title, page, 1));
            }
        }

        let (number, rest) = self.arabic_heading(text)?;
        let (title, page) = self.split_page(&rest);
        if title.is_empty() {
            return None;
        }
        let level = dotted_level(&number);
        Some(toc_entry(number, title, page, level))
    }

    /// Replaces tabs and dot or ellipsis leaders with a double space.
    pub fn normalize_leaders(&self, text: &str) -> String {
        let text = text.replace('\t', "  ");
        let text = self.dot_leader.replace_all(&text, "  ");
        self.ellipsis_leader.replace_all(&text, "  ").into_owned()
    }
}

fn toc_entry(number: String, title: String, page: Option<u32>, level: u32) -> WordTocEntry {
    WordTocEntry {
        number,
        title,
        page,
        level,
        part: None,
        para_index: None,
    }
}

/// `1` is level 2, `1.2` level 3; level 1 is reserved for `一、` parts.
pub fn dotted_level(number: &str) -> u32 {
    number.split('.').count() as u32 + 1
}

fn top_number_in_range(number: &str) -> bool {
    number
        .split('.')
        .next()
        .and_then(|top| top.parse::<u64>().ok())
        .is_some_and(|top| top < TOP_NUMBER_LIMIT)
}
