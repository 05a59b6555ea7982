//! Groups images extracted from a PDF by the numbered section headers above them.
//!
//! Input is a per-page layout dump (text lines with their Y position, image placements with
//! the path of the extracted image file). Each image goes to the last header above it on its
//! page, or to the section carried over from earlier pages.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::cli::PdfImagesArgs;
use crate::model::{ImageIndex, ImageIndexDocument};
use crate::util::{
    FilenameSanitizer, char_len, clear_directory_files, ensure_directory, ensure_input_exists,
    read_json, write_json_pretty,
};

mod assign;
mod carry;
mod headers;
mod index;
mod layout;
mod run;

pub use run::run;

use assign::*;
use carry::*;
use headers::*;
use index::*;
use layout::*;
