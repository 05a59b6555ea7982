use super::*;

/// Images smaller than this are icons, bullets or signature stamps.
pub const MIN_IMAGE_BYTES: usize = 5000;
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif"];

/// Cells joined with ` | `, one line per row.
pub fn format_table(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.trim().replace('\n', " "))
                .collect::<Vec<String>>()
                .join(" | ")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Non-blank paragraphs (text boxes included) and rendered tables of `elements`, one block
/// per line.
pub fn section_text(elements: &[BodyElement]) -> String {
    elements
        .iter()
        .filter_map(|element| match element {
            BodyElement::Paragraph(paragraph) => {
                let text = paragraph.full_text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            BodyElement::Table(table) => Some(format_table(table)),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionImage<'a> {
    pub rel_id: &'a str,
    pub extension: String,
    pub data: &'a [u8],
}

/// Distinct embedded images of `elements` that are large enough and in a raster format.
pub fn section_images<'a>(
    document: &'a DocxDocument,
    elements: &'a [BodyElement],
) -> Vec<SectionImage<'a>> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for rel_id in elements.iter().flat_map(BodyElement::image_refs) {
        let Some(media) = document.media(rel_id) else {
            continue;
        };
        if !seen.insert(rel_id.as_str()) {
            continue;
        }

        let extension = media.extension();
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            debug!(rel_id = %rel_id, part = %media.partname, "skipping non-raster image");
            continue;
        }
        if media.data.len() < MIN_IMAGE_BYTES {
            debug!(rel_id = %rel_id, bytes = media.data.len(), "skipping small image");
            continue;
        }

        images.push(SectionImage {
            rel_id,
            extension,
            data: &media.data,
        });
    }

    images
}

/// `<number>-<name>`, or just the name for `一、` style part numbers.
pub fn output_prefix(number: &str, safe_name: &str) -> String {
    if number.contains('、') {
        safe_name.to_string()
    } else {
        format!("{number}-{safe_name}")
    }
}

pub fn image_file_name(prefix: &str, position: usize, count: usize, extension: &str) -> String {
    if count == 1 {
        format!("{prefix}.{extension}")
    } else {
        format!("{prefix}-{:02}.{extension}", position + 1)
    }
}
