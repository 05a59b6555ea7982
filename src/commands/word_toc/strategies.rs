use super::*;

const MAX_HEADING_LEVEL: usize = 6;
const SCAN_MAX_LINE_CHARS: usize = 100;
const SCAN_MAX_TITLE_CHARS: usize = 80;
/// A non-TOC line ends the explicit TOC section once more entries than this are collected.
const TOC_SECTION_MIN_ENTRIES: usize = 3;
const TOC_MARKERS: [&str; 2] = ["目录", "目 录"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocStrategy {
    HeadingStyle,
    ExplicitTocSection,
    NumberedHeaderScan,
}

impl TocStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            TocStrategy::HeadingStyle => "heading_style",
            TocStrategy::ExplicitTocSection => "explicit_toc_section",
            TocStrategy::NumberedHeaderScan => "numbered_header_scan",
        }
    }
}

/// Strategies in precedence order; the first non-empty result wins.
pub const CASCADE: [TocStrategy; 3] = [
    TocStrategy::HeadingStyle,
    TocStrategy::ExplicitTocSection,
    TocStrategy::NumberedHeaderScan,
];

pub struct WordTocBuilder {
    lines: TocLineParser,
}

impl WordTocBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            lines: TocLineParser::new()?,
        })
    }

    /// Runs the cascade; an empty result is reported as the last strategy.
    pub fn build(&self, paragraphs: &[&Paragraph]) -> (TocStrategy, Vec<WordTocEntry>) {
        CASCADE
            .iter()
            .find_map(|strategy| {
                let entries = self.run_strategy(*strategy, paragraphs);
                debug!(
                    strategy = strategy.as_str(),
                    entries = entries.len(),
                    "word toc strategy attempted"
                );
                (!entries.is_empty()).then_some((*strategy, entries))
            })
            .unwrap_or((TocStrategy::NumberedHeaderScan, Vec::new()))
    }

    pub fn run_strategy(
        &self,
        strategy: TocStrategy,
        paragraphs: &[&Paragraph],
    ) -> Vec<WordTocEntry> {
        match strategy {
            TocStrategy::HeadingStyle => from_heading_styles(paragraphs),
            TocStrategy::ExplicitTocSection => self.from_toc_section(paragraphs),
            TocStrategy::NumberedHeaderScan => self.from_numbered_headers(paragraphs),
        }
    }

    fn from_toc_section(&self, paragraphs: &[&Paragraph]) -> Vec<WordTocEntry> {
        let mut entries = Vec::new();
        let mut part = PartTracker::default();
        let mut in_toc = false;

        for paragraph in paragraphs {
            let text = paragraph.text.trim();
            let style = paragraph.style_name.to_lowercase();

            if style.contains("toc") && !text.is_empty() {
                if let Some(entry) = self.lines.parse_toc_line(text) {
                    entries.push(part.attach(entry));
                }
                continue;
            }

            if !in_toc && TOC_MARKERS.contains(&text) {
                in_toc = true;
                continue;
            }
            if !in_toc || text.is_empty() {
                continue;
            }

            let normalized = self.lines.normalize_leaders(text);
            match self.lines.parse_toc_line(&normalized) {
                Some(entry) => entries.push(part.attach(entry)),
                None if entries.len() > TOC_SECTION_MIN_ENTRIES => break,
                None => {}
            }
        }

        entries
    }

    fn from_numbered_headers(&self, paragraphs: &[&Paragraph]) -> Vec<WordTocEntry> {
        let mut entries = Vec::new();
        let mut current_part: Option<String> = None;

        for (para_index, paragraph) in paragraphs.iter().enumerate() {
            let text = paragraph.text.trim();
            if text.is_empty() || char_len(text) > SCAN_MAX_LINE_CHARS {
                continue;
            }

            if let Some((number, rest)) = self.lines.chinese_heading(text) {
                let title = rest.trim().to_string();
                current_part = Some(title.clone());
                entries.push(WordTocEntry {
                    number,
                    title,
                    page: None,
                    level: 1,
                    part: current_part.clone(),
                    para_index: Some(para_index),
                });
                continue;
            }

            if let Some((number, rest)) = self.lines.arabic_heading(text) {
                let title = rest.trim().to_string();
                if char_len(&title) < SCAN_MAX_TITLE_CHARS {
                    entries.push(WordTocEntry {
                        level: dotted_level(&number),
                        number,
                        title,
                        page: None,
                        part: current_part.clone(),
                        para_index: Some(para_index),
                    });
                }
            }
        }

        entries
    }
}

/// Labels entries with the title of the nearest level-1 entry seen so far.
#[derive(Debug, Default)]
struct PartTracker {
    current: Option<String>,
}

impl PartTracker {
    fn attach(&mut self, mut entry: WordTocEntry) -> WordTocEntry {
        if entry.level == 1 {
            self.current = Some(entry.title.clone());
        }
        entry.part = self.current.clone();
        entry
    }
}

/// `Heading N` paragraph styles, numbered from six reset-on-increment counters.
fn from_heading_styles(paragraphs: &[&Paragraph]) -> Vec<WordTocEntry> {
    let mut entries = Vec::new();
    let mut counters = [0_usize; MAX_HEADING_LEVEL];
    let mut current_part: Option<String> = None;

    for (para_index, paragraph) in paragraphs.iter().enumerate() {
        let Some(level) = heading_level(&paragraph.style_name) else {
            continue;
        };
        let text = paragraph.text.trim();
        if text.is_empty() {
            continue;
        }

        counters[level - 1] += 1;
        counters[level..].iter_mut().for_each(|counter| *counter = 0);

        let number = if level == 1 {
            current_part = Some(text.to_string());
            chinese_part_label(counters[0])
        } else {
            counters[1..level]
                .iter()
                .map(|counter| counter.to_string())
                .collect::<Vec<String>>()
                .join(".")
        };

        entries.push(WordTocEntry {
            number,
            title: text.to_string(),
            page: None,
            level: level as u32,
            part: current_part.clone(),
            para_index: Some(para_index),
        });
    }

    entries
}

fn heading_level(style_name: &str) -> Option<usize> {
    if !style_name.starts_with("Heading ") {
        return None;
    }
    style_name
        .split_whitespace()
        .last()
        .and_then(|level| level.parse::<usize>().ok())
        .filter(|level| (1..=MAX_HEADING_LEVEL).contains(level))
}
