use super::*;

const OFFSET_SAMPLE_SIZE: usize = 5;
const LISTING_PAGE_CHARS: usize = 5000;
const LISTING_PAGE_MIN_HITS: usize = 3;
const TITLE_SEARCH_CHARS: usize = 3000;

/// Finds the page offset most of the sampled TOC titles agree on, or 0 without evidence.
///
/// Pages that list at least three sampled titles are the TOC itself and are skipped.
/// Each sampled title votes with the first remaining page whose head contains it.
pub fn detect_page_offset(entries: &[TocEntry], page_texts: &[String]) -> i64 {
    let samples: Vec<(&TocEntry, String)> = entries
        .iter()
        .filter(|entry| !entry.title.trim().is_empty())
        .take(OFFSET_SAMPLE_SIZE)
        .map(|entry| (entry, strip_whitespace(entry.title.trim())))
        .collect();

    if samples.is_empty() {
        return 0;
    }

    let listing_pages: HashSet<usize> = page_texts
        .iter()
        .enumerate()
        .filter(|(_, text)| {
            let head = strip_whitespace(char_prefix(text, LISTING_PAGE_CHARS));
            samples
                .iter()
                .filter(|(_, title)| head.contains(title.as_str()))
                .count()
                >= LISTING_PAGE_MIN_HITS
        })
        .map(|(index, _)| index)
        .collect();

    if !listing_pages.is_empty() {
        debug!(pages = ?listing_pages, "excluding toc listing pages from offset search");
    }

    let search_heads: Vec<Option<String>> = page_texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            (!listing_pages.contains(&index))
                .then(|| strip_whitespace(char_prefix(text, TITLE_SEARCH_CHARS)))
        })
        .collect();

    let offsets: Vec<i64> = samples
        .iter()
        .filter_map(|(entry, title)| {
            let declared_page = entry.declared_page()?;
            let page_index = search_heads.iter().position(|head| {
                head.as_ref()
                    .is_some_and(|head| head.contains(title.as_str()))
            })?;
            Some(page_index as i64 + 1 - declared_page)
        })
        .collect();

    match stable_mode(&offsets) {
        Some((offset, votes)) => {
            debug!(
                offset,
                votes,
                matches = offsets.len(),
                "page offset consensus"
            );
            offset
        }
        None => 0,
    }
}

/// Most frequent value; ties go to the value recorded first.
pub fn stable_mode(values: &[i64]) -> Option<(i64, usize)> {
    let mut tallies: Vec<(i64, usize)> = Vec::new();
    for value in values {
        match tallies.iter_mut().find(|(candidate, _)| candidate == value) {
            Some(tally) => tally.1 += 1,
            None => tallies.push((*value, 1)),
        }
    }

    tallies
        .into_iter()
        .fold(None, |best, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
}
