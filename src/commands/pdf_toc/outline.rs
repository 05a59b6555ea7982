use super::*;

/// Accumulator threaded through the outline normalization fold.
#[derive(Debug, Default)]
struct OutlineFold {
    counters: BTreeMap<u32, u32>,
    seen_chapters: HashSet<String>,
    chapter_count: usize,
    /// Level of the last duplicated chapter; deeper entries are dropped until the next chapter.
    suppressed_below: Option<u32>,
    filtered_count: usize,
    dedup_count: usize,
    entries: Vec<TocEntry>,
}

impl OutlineFold {
    fn step(mut self, classifier: &TitleClassifier, item: &OutlineItem) -> Self {
        let title = item.title.trim();

        if !classifier.is_valid_toc_title(title) {
            debug!(title = %char_prefix(title, 50), "filtered outline title");
            self.filtered_count += 1;
            return self;
        }

        let is_chapter = classifier.is_chapter_title(title);
        if is_chapter {
            if !self.seen_chapters.insert(title.to_string()) {
                debug!(title = %title, "skipping duplicate chapter");
                self.dedup_count += 1;
                self.suppressed_below = Some(item.level);
                return self;
            }
            self.suppressed_below = None;
        } else if let Some(duplicate_level) = self.suppressed_below {
            if item.level > duplicate_level {
                return self;
            }
            self.suppressed_below = None;
        }

        let level = if is_chapter {
            self.chapter_count += 1;
            1
        } else if item.level == 1
            && self.chapter_count > 0
            && classifier.is_appendix_title(title)
        {
            2
        } else {
            item.level
        };

        *self.counters.entry(level).or_insert(0) += 1;
        self.counters.retain(|depth, _| *depth <= level);

        let structure = self
            .counters
            .values()
            .map(|counter| counter.to_string())
            .collect::<Vec<String>>()
            .join(".");

        self.entries.push(TocEntry {
            level,
            title: title.to_string(),
            page: item.page,
            structure,
        });
        self
    }
}

/// Converts a native outline into levelled, numbered TOC entries.
///
/// Invalid titles are dropped, a repeated chapter suppresses its whole subtree, chapters
/// are forced to level 1 and trailing appendix items under chapters are demoted to level 2.
/// Output order follows input order.
pub fn normalize_outline(classifier: &TitleClassifier, raw: &[OutlineItem]) -> Vec<TocEntry> {
    let folded = raw
        .iter()
        .fold(OutlineFold::default(), |acc, item| acc.step(classifier, item));

    debug!(
        filtered = folded.filtered_count,
        duplicates = folded.dedup_count,
        chapters = folded.chapter_count,
        kept = folded.entries.len(),
        "normalized embedded outline"
    );

    folded.entries
}
