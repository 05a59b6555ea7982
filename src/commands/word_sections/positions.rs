use super::*;

/// Half-open range of body element indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    NotInToc,
    UnmappedParagraph(usize),
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedReason::NotInToc => write!(f, "section not found in toc"),
            UnresolvedReason::UnmappedParagraph(index) => {
                write!(f, "paragraph index {index} is not in the document")
            }
        }
    }
}

/// `13.1.1` descends from `13.1` and `13`; `13.2` does not descend from `13.1`.
/// Numbers with `、` label top-level parts and have no numbered descendants.
pub fn is_descendant(child: &str, parent: &str) -> bool {
    if parent.contains('、') {
        return false;
    }
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('.'))
}

/// Paragraph positions of the TOC entries that carry one.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    by_key: HashMap<(String, String), usize>,
    ordered: Vec<(usize, String)>,
}

impl PositionIndex {
    pub fn new(entries: &[WordTocEntry]) -> Self {
        let mut index = Self::default();
        for entry in entries {
            let Some(para_index) = entry.para_index else {
                continue;
            };
            index
                .by_key
                .insert((entry.number.clone(), entry.title.clone()), para_index);
            index.ordered.push((para_index, entry.number.clone()));
        }
        index.ordered.sort();
        index
    }

    /// Start and end element of a planned section.
    ///
    /// `paragraph_elements[i]` is the body element index of paragraph `i`. The range ends at
    /// the first later TOC entry outside the section's subtree, or at the end of the body.
    pub fn resolve(
        &self,
        number: &str,
        title: &str,
        paragraph_elements: &[usize],
        total_elements: usize,
    ) -> std::result::Result<SectionRange, UnresolvedReason> {
        let para_index = *self
            .by_key
            .get(&(number.to_string(), title.to_string()))
            .ok_or(UnresolvedReason::NotInToc)?;
        let start = *paragraph_elements
            .get(para_index)
            .ok_or(UnresolvedReason::UnmappedParagraph(para_index))?;

        let end = self
            .ordered
            .iter()
            .find(|(candidate, candidate_number)| {
                *candidate > para_index && !is_descendant(candidate_number, number)
            })
            .and_then(|(candidate, _)| paragraph_elements.get(*candidate).copied())
            .unwrap_or(total_elements);

        Ok(SectionRange { start, end })
    }
}
