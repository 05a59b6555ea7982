use super::*;

/// Turns mapped entries into page ranges in source order.
///
/// A section ends one page before the next section that has a start page, or at the
/// last page. Entries without a start page get the same look-ahead end.
pub fn build_page_sections(
    mapped: &[ValidatedEntry],
    total_pages: usize,
    page_offset: i64,
) -> Vec<PageSection> {
    let starts: Vec<Option<i64>> = mapped
        .iter()
        .map(|item| item.entry.declared_page().map(|page| page + page_offset))
        .collect();

    let mut ends = vec![total_pages as i64; mapped.len()];
    let mut next_start: Option<i64> = None;
    for index in (0..mapped.len()).rev() {
        if let Some(start) = next_start {
            ends[index] = start - 1;
        }
        if let Some(start) = starts[index] {
            next_start = Some(start);
        }
    }

    mapped
        .iter()
        .zip(starts)
        .zip(ends)
        .map(|((item, start_page), end_page)| PageSection {
            title: item.entry.title.clone(),
            start_page,
            end_page,
            level: item.entry.level,
            structure: item.entry.structure.clone(),
            validation: item.validation,
        })
        .collect()
}
