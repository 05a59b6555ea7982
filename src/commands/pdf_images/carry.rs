use super::*;

/// Section that images on header-less pages (or above a page's first header) belong to.
#[derive(Debug, Clone, Default)]
pub struct CarryState {
    active_section: Option<SectionKey>,
    /// First page index on which the active section no longer applies.
    expires_at_page: Option<usize>,
}

impl CarryState {
    /// The carried section, unless it expired. An expired carry never falls back to an
    /// older section.
    pub fn carried(&self, page_index: usize) -> Option<&SectionKey> {
        let section = self.active_section.as_ref()?;
        match self.expires_at_page {
            Some(expires_at_page) if page_index >= expires_at_page => None,
            _ => Some(section),
        }
    }

    /// Takes over the last header of a page once that page's images are assigned.
    ///
    /// Short commercial top-level sections (`1.` to `9.`) only reach `carry_page_limit`
    /// pages past their header; everything else carries until the next header.
    pub fn advance(
        &mut self,
        page_index: usize,
        page_headers: &[&SectionHeader],
        carry_page_limit: usize,
    ) {
        let Some(last) = page_headers.last() else {
            return;
        };

        let key = &last.key;
        let is_short_commercial = key.scope == Scope::Commercial
            && key.parts().len() == 1
            && key.top_number().is_some_and(|top| top <= 9);

        self.expires_at_page = is_short_commercial.then_some(page_index + carry_page_limit);
        self.active_section = Some(key.clone());
    }
}
