use super::*;

#[derive(Debug, Clone)]
pub struct MappingOutcome {
    pub entries: Vec<ValidatedEntry>,
    pub validated: usize,
    pub not_found: usize,
}

impl MappingOutcome {
    pub fn rate(&self) -> f64 {
        let total = self.entries.len();
        if total == 0 {
            0.0
        } else {
            self.validated as f64 / total as f64
        }
    }
}

/// Checks every entry's declared page, shifted by `offset`, against the page text.
/// Entries are verified independently of each other.
pub fn validate_page_mapping(
    entries: &[TocEntry],
    page_texts: &[String],
    offset: i64,
) -> MappingOutcome {
    let entries: Vec<ValidatedEntry> = entries
        .iter()
        .map(|entry| validate_entry(entry, page_texts, offset))
        .collect();

    let validated = entries
        .iter()
        .filter(|entry| entry.validation == ValidationStatus::Passed)
        .count();
    let not_found = entries.len() - validated;

    MappingOutcome {
        entries,
        validated,
        not_found,
    }
}

fn validate_entry(entry: &TocEntry, page_texts: &[String], offset: i64) -> ValidatedEntry {
    let Some(declared_page) = entry.declared_page() else {
        return ValidatedEntry {
            entry: entry.clone(),
            physical_page: None,
            validation: ValidationStatus::NoPage,
        };
    };

    let physical_page = declared_page + offset;
    let page_text = usize::try_from(physical_page)
        .ok()
        .filter(|page| *page >= 1)
        .and_then(|page| page_texts.get(page - 1));

    let validation = match page_text {
        None => ValidationStatus::OutOfRange,
        Some(text) if title_in_page(entry.title.trim(), text) => ValidationStatus::Passed,
        Some(_) => ValidationStatus::Failed,
    };

    ValidatedEntry {
        entry: entry.clone(),
        physical_page: Some(physical_page),
        validation,
    }
}
