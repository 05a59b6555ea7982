use super::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionPlan {
    #[serde(default)]
    pub extractions: Vec<PlannedSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlannedSection {
    pub number: String,
    pub title: String,
    /// File name stem; the title is used when absent.
    #[serde(default)]
    pub output_name: Option<String>,
    #[serde(default = "enabled")]
    pub extract_text: bool,
    #[serde(default = "enabled")]
    pub extract_images: bool,
    #[serde(default)]
    pub category: Option<String>,
}

fn enabled() -> bool {
    true
}

/// The part of toc.json this command reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TocDocument {
    #[serde(default)]
    pub entries: Vec<WordTocEntry>,
}
