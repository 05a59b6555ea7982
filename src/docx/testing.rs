//! In-memory `.docx` packages for tests.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::DocxDocument;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[derive(Debug, Default, Clone)]
pub struct DocxFixture {
    body: Vec<String>,
    styles: Vec<String>,
    relationships: Vec<String>,
    parts: Vec<(String, Vec<u8>)>,
}

impl DocxFixture {
    pub fn new() -> Self {
        Self::default()
            .style("Normal", "Normal", true)
            .style("Heading1", "heading 1", false)
            .style("Heading2", "heading 2", false)
            .style("Heading3", "heading 3", false)
            .style("TOC1", "toc 1", false)
            .style("TOC2", "toc 2", false)
    }

    pub fn style(mut self, id: &str, name: &str, default: bool) -> Self {
        let default_attr = if default { r#" w:default="1""# } else { "" };
        self.styles.push(format!(
            r#"<w:style w:type="paragraph"{default_attr} w:styleId="{id}"><w:name w:val="{name}"/></w:style>"#
        ));
        self
    }

    pub fn paragraph(self, text: &str) -> Self {
        self.styled_paragraph(None, text)
    }

    pub fn styled_paragraph(mut self, style_id: Option<&str>, text: &str) -> Self {
        let properties = style_id
            .map(|id| format!(r#"<w:pPr><w:pStyle w:val="{id}"/></w:pPr>"#))
            .unwrap_or_default();
        self.body.push(format!(
            r#"<w:p>{properties}<w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape(text)
        ));
        self
    }

    pub fn heading(self, level: u32, text: &str) -> Self {
        let style_id = format!("Heading{level}");
        self.styled_paragraph(Some(&style_id), text)
    }

    /// A simple table; every cell holds one paragraph.
    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        let rows_xml: String = rows
            .iter()
            .map(|cells| {
                let cells_xml: String = cells
                    .iter()
                    .map(|cell| {
                        format!(
                            r#"<w:tc><w:tcPr/><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc>"#,
                            escape(cell)
                        )
                    })
                    .collect();
                format!("<w:tr>{cells_xml}</w:tr>")
            })
            .collect();
        self.body.push(format!("<w:tbl>{rows_xml}</w:tbl>"));
        self
    }

    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push(xml.to_string());
        self
    }

    /// A paragraph holding one inline picture stored at `word/media/<file_name>`.
    pub fn image(mut self, rel_id: &str, file_name: &str, data: Vec<u8>) -> Self {
        self.body.push(format!(
            r#"<w:p><w:r><w:drawing><wp:inline><a:graphic><a:graphicData><pic:pic><pic:blipFill><a:blip r:embed="{rel_id}"/></pic:blipFill></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#
        ));
        self.relationships.push(format!(
            r#"<Relationship Id="{rel_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/{file_name}"/>"#
        ));
        self.parts.push((format!("word/media/{file_name}"), data));
        self
    }

    pub fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            self.body.concat()
        )
    }

    pub fn build(&self) -> Vec<u8> {
        let styles_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{}</w:styles>"#,
            self.styles.concat()
        );
        let rels_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rIdStyles" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>{}</Relationships>"#,
            self.relationships.concat()
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        let mut files: Vec<(String, Vec<u8>)> = vec![
            ("[Content_Types].xml".to_string(), CONTENT_TYPES.as_bytes().to_vec()),
            ("word/document.xml".to_string(), self.document_xml().into_bytes()),
            ("word/styles.xml".to_string(), styles_xml.into_bytes()),
            ("word/_rels/document.xml.rels".to_string(), rels_xml.into_bytes()),
        ];
        files.extend(self.parts.iter().cloned());

        for (name, data) in files {
            writer
                .start_file(name, options)
                .expect("start fixture zip entry");
            writer.write_all(&data).expect("write fixture zip entry");
        }

        writer.finish().expect("finish fixture zip").into_inner()
    }

    pub fn open(&self) -> DocxDocument {
        DocxDocument::from_reader(Cursor::new(self.build())).expect("fixture docx parses")
    }
}

/// Bytes of the given length that look like a PNG to anything reading the extension only.
pub fn image_bytes(len: usize) -> Vec<u8> {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.resize(len, 0);
    data
}
