use super::*;

#[derive(Debug, Deserialize)]
struct PagesDocument {
    #[serde(default)]
    pages: Vec<PageRecord>,
}

#[derive(Debug, Deserialize)]
struct PageRecord {
    #[serde(default)]
    text: String,
}

pub fn load_pages_json(path: &Path) -> Result<Vec<String>> {
    let document: PagesDocument = read_json(path)?;
    Ok(document.pages.into_iter().map(|page| page.text).collect())
}

/// Outline in the `[[level, title, page], ...]` layout of common PDF toolkits.
pub fn load_outline_json(path: &Path) -> Result<Vec<OutlineItem>> {
    let rows: Vec<(u32, String, Option<i64>)> = read_json(path)?;
    Ok(rows
        .into_iter()
        .map(|(level, title, page)| OutlineItem::new(level, title, page))
        .collect())
}

pub fn command_available(program: &str) -> bool {
    Command::new(program).arg("-v").output().is_ok()
}

pub fn extract_pages_with_pdftotext(
    pdf_path: &Path,
    max_pages: Option<usize>,
) -> Result<Vec<String>> {
    let mut command = Command::new("pdftotext");
    command.arg("-enc").arg("UTF-8").arg("-f").arg("1");
    if let Some(max_pages) = max_pages {
        command.arg("-l").arg(max_pages.to_string());
    }
    command.arg(pdf_path).arg("-");

    let output = command
        .output()
        .with_context(|| format!("failed to execute pdftotext for {}", pdf_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftotext returned non-zero exit status for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    Ok(split_pdftotext_pages(&raw))
}

pub fn split_pdftotext_pages(raw: &str) -> Vec<String> {
    let mut pages: Vec<String> = raw
        .split('\u{000C}')
        .map(|chunk| chunk.replace('\u{0000}', ""))
        .collect();

    while let Some(last_page) = pages.last() {
        if last_page.trim().is_empty() {
            pages.pop();
            continue;
        }
        break;
    }

    pages
}

pub fn extract_outline_with_pdftohtml(pdf_path: &Path) -> Result<Vec<OutlineItem>> {
    let output = Command::new("pdftohtml")
        .arg("-xml")
        .arg("-i")
        .arg("-f")
        .arg("1")
        .arg("-l")
        .arg("1")
        .arg(pdf_path)
        .arg("-stdout")
        .output()
        .with_context(|| format!("failed to execute pdftohtml for {}", pdf_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftohtml returned non-zero exit status for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }

    let xml = String::from_utf8_lossy(&output.stdout);
    parse_pdftohtml_outline(&xml)
}

/// Reads the `<outline>` tree of `pdftohtml -xml` output; nesting depth is the level.
pub fn parse_pdftohtml_outline(xml: &str) -> Result<Vec<OutlineItem>> {
    let token_regex =
        Regex::new(r#"(?s)<outline>|</outline>|<item(?:\s+page="(-?\d+)")?\s*>(.*?)</item>"#)
            .context("failed to compile outline token regex")?;
    let tag_regex = Regex::new(r"<[^>]*>").context("failed to compile markup regex")?;

    let mut depth: u32 = 0;
    let mut items = Vec::new();

    for captures in token_regex.captures_iter(xml) {
        let token = captures.get(0).map(|value| value.as_str()).unwrap_or("");
        if token == "<outline>" {
            depth += 1;
            continue;
        }
        if token == "</outline>" {
            depth = depth.saturating_sub(1);
            continue;
        }

        let page = captures
            .get(1)
            .and_then(|value| value.as_str().parse::<i64>().ok());
        let raw_label = captures.get(2).map(|value| value.as_str()).unwrap_or("");
        let title = normalize_outline_label(&tag_regex.replace_all(raw_label, ""));

        items.push(OutlineItem::new(depth.max(1), title, page));
    }

    Ok(items)
}

fn normalize_outline_label(raw_label: &str) -> String {
    raw_label
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
        .replace('\u{00a0}', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn count_pages_with_pdfinfo(pdf_path: &Path) -> Result<usize> {
    let output = Command::new("pdfinfo")
        .arg(pdf_path)
        .output()
        .with_context(|| format!("failed to execute pdfinfo for {}", pdf_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdfinfo returned non-zero exit status for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_pdfinfo_pages(&stdout)
        .with_context(|| format!("pdfinfo reported no page count for {}", pdf_path.display()))
}

pub fn parse_pdfinfo_pages(output: &str) -> Option<usize> {
    output.lines().find_map(|line| {
        line.strip_prefix("Pages:")
            .and_then(|rest| rest.trim().parse::<usize>().ok())
    })
}
