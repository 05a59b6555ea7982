use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bid-extract",
    version,
    about = "Table-of-contents, section and data extraction for bid documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct and validate a PDF table of contents.
    PdfToc(PdfTocArgs),
    /// Group extracted PDF images by the section headers above them.
    PdfImages(PdfImagesArgs),
    /// Build a numbered table of contents from a Word document.
    WordToc(WordTocArgs),
    /// Cut planned sections out of a Word document as text and image files.
    WordSections(WordSectionsArgs),
    /// Pull company, personnel, track-record and certificate data out of a Word document.
    WordData(WordDataArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PdfTocArgs {
    #[arg(long)]
    pub pdf_path: PathBuf,

    /// Pre-parsed pages JSON (`{"pages":[{"text":...}]}`) used instead of pdftotext.
    #[arg(long)]
    pub pages_json: Option<PathBuf>,

    /// Native outline as `[[level, title, page], ...]` used instead of pdftohtml.
    #[arg(long)]
    pub outline_json: Option<PathBuf>,

    /// Output JSON path; stdout when omitted.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub max_pages: Option<usize>,

    #[arg(long, default_value_t = 3)]
    pub min_embedded_entries: usize,

    #[arg(long, default_value_t = 0.5)]
    pub offset_trigger_rate: f64,

    #[arg(long, default_value_t = 20)]
    pub toc_scan_pages: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PdfImagesArgs {
    /// Per-page layout dump: text lines with Y positions and image placements.
    #[arg(long)]
    pub layout_json: PathBuf,

    #[arg(long, default_value = "pages")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "index.json")]
    pub index: PathBuf,

    #[arg(long, default_value_t = 300)]
    pub min_width: u32,

    #[arg(long, default_value_t = 200)]
    pub min_height: u32,

    #[arg(long, default_value_t = 5)]
    pub carry_page_limit: usize,

    #[arg(long, default_value_t = 10)]
    pub technical_scope_after_page: usize,
}

#[derive(Args, Debug, Clone)]
pub struct WordTocArgs {
    #[arg(long)]
    pub docx_path: PathBuf,

    #[arg(long, short = 'o', default_value = "toc.json")]
    pub output: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct WordSectionsArgs {
    #[arg(long)]
    pub docx_path: PathBuf,

    #[arg(long)]
    pub plan: PathBuf,

    /// toc.json produced by `word-toc`.
    #[arg(long)]
    pub toc: PathBuf,

    #[arg(long, short = 'o', default_value = "data")]
    pub output_dir: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct WordDataArgs {
    #[arg(long)]
    pub docx_path: PathBuf,

    #[arg(long, short = 'o', default_value = "data")]
    pub output_dir: PathBuf,

    /// index.json produced by `pdf-images`, used to link certificates and contracts to scans.
    #[arg(long)]
    pub index: Option<PathBuf>,
}
