use serde::{Deserialize, Serialize};

/// One item of a document's native outline, as reported by the PDF tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineItem {
    pub level: u32,
    pub title: String,
    pub page: Option<i64>,
}

impl OutlineItem {
    pub fn new(level: u32, title: impl Into<String>, page: Option<i64>) -> Self {
        Self {
            level,
            title: title.into(),
            page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub level: u32,
    pub title: String,
    pub page: Option<i64>,
    pub structure: String,
}

impl TocEntry {
    /// Declared page, with the outline's "0 = no destination" folded into `None`.
    pub fn declared_page(&self) -> Option<i64> {
        self.page.filter(|page| *page != 0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Passed,
    Failed,
    OutOfRange,
    NoPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEntry {
    #[serde(flatten)]
    pub entry: TocEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_page: Option<i64>,
    pub validation: ValidationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSection {
    pub title: String,
    pub start_page: Option<i64>,
    pub end_page: i64,
    pub level: u32,
    pub structure: String,
    pub validation: ValidationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub rate: f64,
}

impl ValidationSummary {
    pub fn empty() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TocResult {
    pub source: String,
    pub total_pages: usize,
    pub has_embedded_toc: bool,
    pub embedded_toc_count: usize,
    pub embedded_toc: Vec<TocEntry>,
    pub toc_pages: Vec<usize>,
    pub toc_page_text: String,
    pub page_offset: i64,
    pub page_sections: Vec<PageSection>,
    pub validation_summary: ValidationSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTocEntry {
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub page: Option<u32>,
    pub level: u32,
    #[serde(default)]
    pub part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub para_index: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordTocResult {
    pub source: String,
    pub entry_count: usize,
    pub entries: Vec<WordTocEntry>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Extracted,
    Empty,
    Unresolved,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionResult {
    pub number: String,
    pub title: String,
    pub category: String,
    pub files: Vec<String>,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionManifest {
    pub source: String,
    pub source_sha256: String,
    pub generated_at: String,
    pub results: Vec<SectionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageIndexDocument {
    pub id: String,
    pub section: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub category: String,
    pub label: String,
    pub files: Vec<String>,
    pub page_range: [usize; 2],
    pub searchable_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageIndex {
    #[serde(default)]
    pub documents: Vec<ImageIndexDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankAccount {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_code: Option<String>,
}

impl BankAccount {
    pub fn is_empty(&self) -> bool {
        self.bank_name.is_none() && self.account_number.is_none() && self.bank_code.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub credit_code: Option<String>,
    pub registered_address: Option<String>,
    pub office_address: Option<String>,
    pub registered_capital: Option<String>,
    pub company_type: Option<String>,
    pub established_date: Option<String>,
    pub postal_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub business_scope: Option<String>,
    pub credit_rating: Option<String>,
    pub total_employees: Option<String>,
    pub legal_representative: Option<String>,
    pub bank: BankAccount,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDocument {
    #[serde(flatten)]
    pub company: CompanyInfo,
    pub source_file: String,
    pub extracted_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_years: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Free-text experience column of a team table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_experience: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonnelDocument {
    pub personnel: Vec<Person>,
    pub source_file: String,
    pub extracted_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    pub project_name: Option<String>,
    pub client: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceDocument {
    pub projects: Vec<Project>,
    pub source_file: String,
    pub extracted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualificationsDocument {
    pub certifications: Vec<Certification>,
    pub source_file: String,
    pub extracted_at: String,
}
