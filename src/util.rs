use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn ensure_input_exists(path: &Path, label: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{label} not found: {}", path.display());
    }
    Ok(())
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("failed to open file for hashing: {}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];

    loop {
        let count = file
            .read(&mut buf)
            .with_context(|| format!("failed to read file for hashing: {}", path.display()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buf[..count]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create json file: {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("failed to write json file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize json file: {}", path.display()))?;

    Ok(())
}

pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

/// Removes regular files directly inside `dir`; subdirectories are left alone.
pub fn clear_directory_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_file = entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file();
        if is_file {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            removed += 1;
        }
    }

    Ok(removed)
}

pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| path.display().to_string())
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Filesystem-safe rendering of a section title, truncated to `max_chars`.
pub struct FilenameSanitizer {
    unsafe_chars: Regex,
    brackets: Regex,
    whitespace: Regex,
}

const ALL_BRACKETS: &str = r"[（）()\[\]【】]";
const PARENTHESES: &str = r"[（）()]";

impl FilenameSanitizer {
    /// Replaces round, square and lenticular brackets.
    pub fn new() -> Result<Self> {
        Self::with_brackets(ALL_BRACKETS)
    }

    /// Replaces round brackets only; `[]` and `【】` stay in the name.
    pub fn parentheses_only() -> Result<Self> {
        Self::with_brackets(PARENTHESES)
    }

    fn with_brackets(brackets: &str) -> Result<Self> {
        Ok(Self {
            unsafe_chars: Regex::new(r#"[\\/:*?"<>|\x{201c}\x{201d}\x{2018}\x{2019}]"#)
                .context("failed to compile unsafe filename regex")?,
            brackets: Regex::new(brackets)
                .with_context(|| format!("failed to compile filename bracket regex: {brackets}"))?,
            whitespace: Regex::new(r"\s+").context("failed to compile whitespace regex")?,
        })
    }

    pub fn sanitize(&self, value: &str, max_chars: usize) -> String {
        let replaced = self.unsafe_chars.replace_all(value, "_");
        let replaced = self.brackets.replace_all(&replaced, "_");
        let replaced = self.whitespace.replace_all(&replaced, "_");
        let trimmed = replaced.trim_matches(|ch| ch == '_' || ch == '.');
        char_prefix(trimmed, max_chars).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_prefix_respects_multibyte_boundaries() {
        assert_eq!(char_prefix("第一章总则", 2), "第一");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("", 3), "");
    }

    #[test]
    fn strip_whitespace_removes_ideographic_spaces() {
        assert_eq!(strip_whitespace("第 一\u{3000}章\n总则"), "第一章总则");
    }

    #[test]
    fn sanitizer_replaces_separators_and_trims_edges() {
        let sanitizer = FilenameSanitizer::new().expect("sanitizer compiles");
        assert_eq!(sanitizer.sanitize("营业执照（副本）", 80), "营业执照_副本");
        assert_eq!(sanitizer.sanitize(" a/b: c. ", 80), "a_b__c");
        assert_eq!(sanitizer.sanitize("【资质】ISO 9001", 4), "资质_I");
    }

    #[test]
    fn parentheses_only_sanitizer_keeps_square_brackets() {
        let sanitizer = FilenameSanitizer::parentheses_only().expect("sanitizer compiles");
        assert_eq!(
            sanitizer.sanitize("【资质】ISO 9001（副本）", 50),
            "【资质】ISO_9001_副本"
        );
        assert_eq!(sanitizer.sanitize("[附件] 证书", 50), "[附件]_证书");
    }
}
