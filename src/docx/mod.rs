//! Minimal WordprocessingML reader.
//!
//! Exposes the top-level body of `word/document.xml` as an ordered list of paragraphs and
//! tables, with style names resolved through `word/styles.xml` and embedded images resolved
//! through the document relationships.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;
use zip::ZipArchive;

mod body;
mod package;
#[cfg(test)]
pub mod testing;

use body::*;
use package::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style_name: String,
    /// Run text with tabs and breaks, leaving out text boxes.
    pub text: String,
    /// Every `w:t` below the paragraph, text boxes included.
    pub full_text: String,
    pub image_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Cell texts per row, one entry per distinct cell.
    pub rows: Vec<Vec<String>>,
    pub image_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

impl BodyElement {
    pub fn image_refs(&self) -> &[String] {
        match self {
            BodyElement::Paragraph(paragraph) => &paragraph.image_refs,
            BodyElement::Table(table) => &table.image_refs,
        }
    }
}

/// An image part referenced from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPart {
    pub partname: String,
    pub data: Vec<u8>,
}

impl MediaPart {
    pub fn extension(&self) -> String {
        self.partname
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    pub body: Vec<BodyElement>,
    media: HashMap<String, MediaPart>,
}

impl DocxDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open docx: {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("failed to read docx: {}", path.display()))
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader).context("not a zip package")?;

        let Some(document_xml) = read_part_string(&mut archive, "word/document.xml")? else {
            bail!("package has no word/document.xml");
        };
        let styles = match read_part_string(&mut archive, "word/styles.xml")? {
            Some(xml) => parse_styles(&xml)?,
            None => StyleTable::default(),
        };
        let relationships = match read_part_string(&mut archive, "word/_rels/document.xml.rels")? {
            Some(xml) => parse_relationships(&xml)?,
            None => HashMap::new(),
        };

        let body = parse_body(&document_xml, &styles)?;
        let media = load_media(&mut archive, &body, &relationships)?;

        debug!(
            elements = body.len(),
            styles = styles.len(),
            media = media.len(),
            "parsed docx package"
        );

        Ok(Self { body, media })
    }

    /// Top-level paragraphs in document order; the position is the paragraph index.
    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        self.body
            .iter()
            .filter_map(|element| match element {
                BodyElement::Paragraph(paragraph) => Some(paragraph),
                BodyElement::Table(_) => None,
            })
            .collect()
    }

    /// Body element index of each top-level paragraph, indexed by paragraph index.
    pub fn paragraph_element_indices(&self) -> Vec<usize> {
        self.body
            .iter()
            .enumerate()
            .filter(|(_, element)| matches!(element, BodyElement::Paragraph(_)))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn media(&self, rel_id: &str) -> Option<&MediaPart> {
        self.media.get(rel_id)
    }
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .filter_map(std::result::Result::ok)
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}
