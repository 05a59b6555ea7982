use super::*;

const SAFE_NAME_CHARS: usize = 80;

pub struct SectionExtractor<'a> {
    document: &'a DocxDocument,
    positions: PositionIndex,
    paragraph_elements: Vec<usize>,
    sanitizer: FilenameSanitizer,
}

impl<'a> SectionExtractor<'a> {
    pub fn new(document: &'a DocxDocument, toc_entries: &[WordTocEntry]) -> Result<Self> {
        Ok(Self {
            document,
            positions: PositionIndex::new(toc_entries),
            paragraph_elements: document.paragraph_element_indices(),
            sanitizer: FilenameSanitizer::new()?,
        })
    }

    pub fn resolve(
        &self,
        section: &PlannedSection,
    ) -> std::result::Result<SectionRange, UnresolvedReason> {
        self.positions.resolve(
            &section.number,
            &section.title,
            &self.paragraph_elements,
            self.document.body.len(),
        )
    }

    /// Writes the section's files into `output_dir` and reports what was produced.
    pub fn extract(&self, section: &PlannedSection, output_dir: &Path) -> Result<SectionResult> {
        let category = section.category.clone().unwrap_or_default();

        let range = match self.resolve(section) {
            Ok(range) => range,
            Err(reason) => {
                warn!(
                    number = %section.number,
                    title = %section.title,
                    reason = %reason,
                    "planned section unresolved"
                );
                return Ok(SectionResult {
                    number: section.number.clone(),
                    title: section.title.clone(),
                    category,
                    files: Vec::new(),
                    status: SectionStatus::Unresolved,
                });
            }
        };

        let name_source = section.output_name.as_deref().unwrap_or(&section.title);
        let prefix = output_prefix(
            &section.number,
            &self.sanitizer.sanitize(name_source, SAFE_NAME_CHARS),
        );
        let elements = &self.document.body[range.start..range.end.max(range.start)];
        let mut files = Vec::new();

        if section.extract_text {
            let text = section_text(elements);
            if !text.trim().is_empty() {
                let file_name = format!("{prefix}.txt");
                write_bytes(&output_dir.join(&file_name), text.as_bytes())?;
                debug!(file = %file_name, chars = text.chars().count(), "wrote section text");
                files.push(file_name);
            }
        }

        if section.extract_images {
            let images = section_images(self.document, elements);
            for (position, image) in images.iter().enumerate() {
                let file_name = image_file_name(&prefix, position, images.len(), &image.extension);
                write_bytes(&output_dir.join(&file_name), image.data)?;
                debug!(
                    file = %file_name,
                    bytes = image.data.len(),
                    rel_id = image.rel_id,
                    "wrote section image"
                );
                files.push(file_name);
            }
        }

        info!(
            number = %section.number,
            title = %char_prefix(&section.title, 50),
            start = range.start,
            end = range.end,
            files = files.len(),
            "extracted section"
        );

        let status = if files.is_empty() {
            SectionStatus::Empty
        } else {
            SectionStatus::Extracted
        };

        Ok(SectionResult {
            number: section.number.clone(),
            title: section.title.clone(),
            category,
            files,
            status,
        })
    }
}
