use super::*;

/// Labels are short; longer cells are content even in the key column.
const MAX_KEY_CHARS: usize = 30;
const CONTEXT_LINES: usize = 5;

/// A top-level table with trimmed cell texts.
pub struct TableView {
    pub rows: Vec<Vec<String>>,
    /// Last non-empty paragraphs above the table, nearest last.
    pub context: Vec<String>,
}

impl TableView {
    /// `(key, value)` candidates from every row: cells `0→1, 2→3, …` and then the offset
    /// pairs `1→2, 3→4, …`, which must have keys of at least two characters.
    pub fn kv_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for cells in self.rows.iter().filter(|cells| cells.len() >= 2) {
            for start in [0, 1] {
                let min_key_chars = if start == 0 { 1 } else { 2 };
                for index in (start..cells.len() - 1).step_by(2) {
                    let key = cells[index].as_str();
                    let key_chars = char_len(key);
                    if key_chars >= min_key_chars && key_chars < MAX_KEY_CHARS {
                        pairs.push((key, cells[index + 1].as_str()));
                    }
                }
            }
        }
        pairs
    }

    /// First row as header and the rest as data, for tables with at least two rows.
    pub fn header_and_data(&self) -> Option<(&[String], &[Vec<String>])> {
        let (header, data) = self.rows.split_first()?;
        if header.is_empty() || data.is_empty() {
            return None;
        }
        Some((header.as_slice(), data))
    }
}

/// Number of `keywords` found inside at least one header cell.
pub fn header_matches(header: &[String], keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| header.iter().any(|cell| cell.contains(*keyword)))
        .count()
}

/// Cell text at `column`, cleaned; `None` for short rows.
pub fn cell_value(rules: &ValueRules, row: &[String], column: Option<usize>) -> Option<String> {
    row.get(column?).and_then(|cell| rules.clean(cell))
}

/// Every top-level table with the paragraphs that introduce it.
pub fn table_views(document: &DocxDocument) -> Vec<TableView> {
    let mut views = Vec::new();
    let mut recent: Vec<String> = Vec::new();

    for element in &document.body {
        match element {
            BodyElement::Paragraph(paragraph) => {
                let text = paragraph.full_text.trim();
                if text.is_empty() {
                    continue;
                }
                recent.push(text.to_string());
                if recent.len() > CONTEXT_LINES {
                    recent.remove(0);
                }
            }
            BodyElement::Table(table) => views.push(TableView {
                rows: table
                    .rows
                    .iter()
                    .map(|cells| cells.iter().map(|cell| cell.trim().to_string()).collect())
                    .collect(),
                context: recent.clone(),
            }),
        }
    }

    views
}
