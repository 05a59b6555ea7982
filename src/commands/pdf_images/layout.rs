use super::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub pages: Vec<LayoutPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutPage {
    /// Full page text; the joined lines are used when absent.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub lines: Vec<LayoutLine>,
    #[serde(default)]
    pub images: Vec<LayoutImage>,
}

impl LayoutPage {
    pub fn full_text(&self) -> String {
        if !self.text.is_empty() {
            return self.text.clone();
        }
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutLine {
    /// Top of the line, growing downwards.
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutImage {
    pub xref: u64,
    /// Topmost placement on the page; missing placements count as the page top.
    #[serde(default)]
    pub y: Option<f64>,
    pub width: u32,
    pub height: u32,
    pub ext: String,
    /// Extracted image file, relative to the layout file's directory.
    pub path: PathBuf,
}

pub fn load_layout(path: &Path) -> Result<LayoutDocument> {
    read_json(path)
}
