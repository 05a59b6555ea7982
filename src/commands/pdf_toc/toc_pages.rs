use super::*;

const TOC_PAGE_MIN_SCORE: usize = 5;
const HEADING_LINES: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocPageScore {
    pub score: usize,
    pub dot_leaders: usize,
    pub chapter_refs: usize,
    pub numbered: usize,
}

/// Recognises pages that print a table of contents.
pub struct TocPageDetector {
    heading: Regex,
    dot_leader: Regex,
    ellipsis_leader: Regex,
    chapter_ref: Regex,
    numbered: Regex,
}

impl TocPageDetector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            heading: Regex::new(r"目\s*录").context("failed to compile toc heading regex")?,
            dot_leader: Regex::new(r"\.{3,}\s*\d+").context("failed to compile dot leader regex")?,
            ellipsis_leader: Regex::new(r"…+\s*\d+")
                .context("failed to compile ellipsis leader regex")?,
            chapter_ref: Regex::new(r"第[一二三四五六七八九十0-9]+[章节部]")
                .context("failed to compile chapter reference regex")?,
            numbered: Regex::new(r"^\d+\.\d+").context("failed to compile numbered line regex")?,
        })
    }

    /// 1-indexed TOC pages among the first `scan_limit` pages.
    pub fn detect(&self, page_texts: &[String], scan_limit: usize) -> Vec<usize> {
        let mut toc_pages = Vec::new();

        for (index, text) in page_texts.iter().take(scan_limit).enumerate() {
            if text.trim().is_empty() {
                continue;
            }

            let score = self.score_page(text);
            if score.score >= TOC_PAGE_MIN_SCORE {
                debug!(
                    page = index + 1,
                    score = score.score,
                    dots = score.dot_leaders,
                    chapters = score.chapter_refs,
                    numbered = score.numbered,
                    "detected toc page"
                );
                toc_pages.push(index + 1);
            }
        }

        toc_pages
    }

    pub fn score_page(&self, text: &str) -> TocPageScore {
        let lines: Vec<&str> = text.trim().split('\n').collect();
        let mut result = TocPageScore::default();

        let first_lines = lines
            .iter()
            .take(HEADING_LINES)
            .copied()
            .collect::<Vec<&str>>()
            .join("\n");
        if self.heading.is_match(&first_lines) {
            result.score += 3;
        }

        result.dot_leaders = lines
            .iter()
            .filter(|line| self.dot_leader.is_match(line) || self.ellipsis_leader.is_match(line))
            .count();
        if result.dot_leaders >= 3 {
            result.score += result.dot_leaders;
        }

        result.chapter_refs = lines
            .iter()
            .filter(|line| self.chapter_ref.is_match(line))
            .count();
        if result.chapter_refs >= 3 {
            result.score += result.chapter_refs;
        }

        result.numbered = lines
            .iter()
            .filter(|line| self.numbered.is_match(line.trim()))
            .count();
        if result.numbered >= 5 {
            result.score += 2;
        }

        result
    }
}
