//! Structured data pulled from the tables of a Word bid document.
//!
//! Company registration details, personnel, past performance and certifications are read
//! from key/value and header tables, written as JSON, and summarised in a markdown report.
//! An image index from `pdf-images` can be supplied to link certifications and contracts to
//! their scanned pages.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::cli::WordDataArgs;
use crate::docx::{BodyElement, DocxDocument};
use crate::model::{
    BankAccount, Certification, CompanyDocument, CompanyInfo, ImageIndex, PerformanceDocument,
    Person, PersonnelDocument, Project, QualificationsDocument,
};
use crate::util::{
    char_len, char_prefix, ensure_directory, ensure_input_exists, file_name_string,
    now_utc_string, read_json, write_bytes, write_json_pretty,
};

mod company;
mod cross_ref;
mod fields;
mod performance;
mod personnel;
mod qualifications;
mod report;
mod run;
mod tables;
#[cfg(test)]
mod tests;

pub use run::run;

use company::*;
use cross_ref::*;
use fields::*;
use performance::*;
use personnel::*;
use qualifications::*;
use report::*;
use tables::*;
