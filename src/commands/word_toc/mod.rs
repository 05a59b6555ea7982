//! Word table-of-contents extraction.
//!
//! Three strategies are tried in order (heading styles, an explicit TOC section, a scan for
//! numbered headers) and the first one that yields entries wins.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info};

use crate::cli::WordTocArgs;
use crate::docx::{DocxDocument, Paragraph};
use crate::model::{WordTocEntry, WordTocResult};
use crate::util::{char_len, char_prefix, ensure_input_exists, write_json_pretty};

mod run;
mod strategies;
mod toc_line;

pub use run::run;

use strategies::*;
use toc_line::*;
