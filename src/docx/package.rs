use super::*;

/// Paragraph style names keyed by style id, plus the default paragraph style.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleTable {
    /// Display name for an explicit style id, falling back to the default paragraph style.
    pub fn paragraph_style_name(&self, style_id: Option<&str>) -> String {
        style_id
            .and_then(|id| self.names.get(id))
            .or(self.default_paragraph.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

pub fn read_part_string<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("failed to open part {name}")),
    };

    let mut content = String::new();
    part.read_to_string(&mut content)
        .with_context(|| format!("failed to read part {name}"))?;
    Ok(Some(content))
}

fn read_part_bytes<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<Vec<u8>>> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("failed to open part {name}")),
    };

    let mut data = Vec::new();
    part.read_to_end(&mut data)
        .with_context(|| format!("failed to read part {name}"))?;
    Ok(Some(data))
}

/// Built-in styles are stored with lowercase names; Word shows them capitalised.
fn display_style_name(name: &str) -> String {
    const BUILT_IN: [&str; 6] = ["normal", "title", "caption", "header", "footer", "body text"];

    let is_heading = name
        .strip_prefix("heading ")
        .is_some_and(|level| !level.is_empty() && level.chars().all(|ch| ch.is_ascii_digit()));
    if !is_heading && !BUILT_IN.contains(&name) {
        return name.to_string();
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn parse_styles(xml: &str) -> Result<StyleTable> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut table = StyleTable::default();
    let mut current: Option<(String, bool)> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:style" => {
                let is_paragraph = attribute(&e, b"w:type").is_none_or(|kind| kind == "paragraph");
                let is_default = attribute(&e, b"w:default")
                    .is_some_and(|value| value == "1" || value == "true");
                current = attribute(&e, b"w:styleId")
                    .map(|id| (id, is_paragraph && is_default));
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:name" => {
                if let (Some((id, is_default)), Some(name)) = (&current, attribute(&e, b"w:val")) {
                    let name = display_style_name(&name);
                    if *is_default {
                        table.default_paragraph = Some(name.clone());
                    }
                    table.names.insert(id.clone(), name);
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:style" => current = None,
            Ok(Event::Eof) => break,
            Err(err) => bail!("failed to parse styles.xml: {err}"),
            _ => {}
        }
        buf.clear();
    }

    Ok(table)
}

/// Relationship id to package part name, for internal targets only.
pub fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut relationships = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"Relationship" => {
                let external = attribute(&e, b"TargetMode").is_some_and(|mode| mode == "External");
                if let (false, Some(id), Some(target)) =
                    (external, attribute(&e, b"Id"), attribute(&e, b"Target"))
                {
                    relationships.insert(id, resolve_part_name(&target));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => bail!("failed to parse document relationships: {err}"),
            _ => {}
        }
        buf.clear();
    }

    Ok(relationships)
}

/// Resolves a relationship target relative to `word/` into a zip entry name.
pub fn resolve_part_name(target: &str) -> String {
    let joined = match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("word/{target}"),
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

pub fn load_media<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    body: &[BodyElement],
    relationships: &HashMap<String, String>,
) -> Result<HashMap<String, MediaPart>> {
    let mut media = HashMap::new();

    for rel_id in body.iter().flat_map(BodyElement::image_refs) {
        if media.contains_key(rel_id) {
            continue;
        }
        let Some(partname) = relationships.get(rel_id) else {
            debug!(rel_id = %rel_id, "image relationship not found");
            continue;
        };
        let Some(data) = read_part_bytes(archive, partname)? else {
            debug!(rel_id = %rel_id, part = %partname, "image part missing from package");
            continue;
        };
        media.insert(
            rel_id.clone(),
            MediaPart {
                partname: partname.clone(),
                data,
            },
        );
    }

    Ok(media)
}
