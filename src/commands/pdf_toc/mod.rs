//! PDF table-of-contents reconstruction.
//!
//! The native outline is filtered and re-levelled, its page numbers are checked against
//! the extracted page text (optionally after a whole-document page offset found by
//! consensus), and the surviving entries are turned into contiguous page ranges.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::cli::PdfTocArgs;
use crate::model::{
    OutlineItem, PageSection, TocEntry, TocResult, ValidatedEntry, ValidationStatus,
    ValidationSummary,
};
use crate::util::{
    char_len, char_prefix, ensure_input_exists, file_name_string, read_json, strip_whitespace,
    write_json_pretty,
};

mod classify;
mod extractor;
mod mapping;
mod offset;
mod outline;
mod page_match;
mod run;
mod sections;
mod source;
mod toc_pages;

pub use run::run;

use classify::*;
use extractor::*;
use mapping::*;
use offset::*;
use outline::*;
use page_match::*;
use sections::*;
use source::*;
use toc_pages::*;
