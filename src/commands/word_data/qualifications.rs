use super::*;

/// Certificate keywords mentioned anywhere in body paragraphs or table cells, in order of
/// first mention.
pub fn extract_qualifications(document: &DocxDocument, tables: &[TableView]) -> Vec<Certification> {
    let paragraph_texts = document
        .paragraphs()
        .into_iter()
        .map(|paragraph| paragraph.text.trim());
    let cell_texts = tables
        .iter()
        .flat_map(|view| view.rows.iter().flatten())
        .map(String::as_str);

    let mut certifications: Vec<Certification> = Vec::new();
    for text in paragraph_texts.chain(cell_texts).filter(|text| !text.is_empty()) {
        for (keyword, description) in CERT_KEYWORDS {
            if text.contains(keyword) && !certifications.iter().any(|cert| cert.name == keyword) {
                certifications.push(Certification {
                    name: keyword.to_string(),
                    description: description.to_string(),
                    image_ref: None,
                });
            }
        }
    }

    certifications
}
