//! Cuts planned sections out of a Word document.
//!
//! Each planned `(number, title)` is located through the `para_index` recorded in toc.json and
//! runs until the next TOC entry that is not one of its subsections. The text and images of
//! that body range are written as individual files and summarised in `manifest.json`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::cli::WordSectionsArgs;
use crate::docx::{BodyElement, DocxDocument, Table};
use crate::model::{SectionManifest, SectionResult, SectionStatus, WordTocEntry};
use crate::util::{
    FilenameSanitizer, char_prefix, ensure_directory, ensure_input_exists, now_utc_string,
    read_json, sha256_file, write_bytes, write_json_pretty,
};

mod content;
mod extractor;
mod plan;
mod positions;
mod run;
#[cfg(test)]
mod tests;

pub use run::run;

use content::*;
use extractor::*;
use plan::*;
use positions::*;
