use super::*;

const PARAGRAPH: &str = "w:p";
const TABLE: &str = "w:tbl";
const ROW: &str = "w:tr";
const CELL: &str = "w:tc";
const RUN: &str = "w:r";
const TEXT_BOX: &str = "w:txbxContent";

#[derive(Debug, Default)]
struct ParagraphBuilder {
    /// Stack depth of the `w:p` element.
    depth: usize,
    style_id: Option<String>,
    text: String,
    full_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerticalMerge {
    None,
    Restart,
    Continue,
}

#[derive(Debug)]
struct CellBuilder {
    depth: usize,
    span: usize,
    merge: VerticalMerge,
    paragraphs: Vec<String>,
}

#[derive(Debug, Default)]
struct TableBuilder {
    depth: usize,
    row_depth: Option<usize>,
    cells: Vec<CellBuilder>,
    /// Resolved text per grid column of the previous row.
    previous_grid: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    fn finish_row(&mut self) {
        let mut grid = Vec::new();
        let mut row = Vec::new();

        for cell in self.cells.drain(..) {
            let column = grid.len();
            let text = match cell.merge {
                VerticalMerge::Continue => self
                    .previous_grid
                    .get(column)
                    .cloned()
                    .unwrap_or_default(),
                VerticalMerge::None | VerticalMerge::Restart => cell.paragraphs.join("\n"),
            };
            for _ in 0..cell.span.max(1) {
                grid.push(text.clone());
            }
            row.push(text);
        }

        self.previous_grid = grid;
        self.rows.push(row);
        self.row_depth = None;
    }
}

/// Where text inside the current event belongs.
enum Target {
    BodyParagraph,
    CellParagraph,
    Ignored,
}

#[derive(Default)]
struct BodyWalker {
    stack: Vec<String>,
    elements: Vec<BodyElement>,
    paragraph: Option<ParagraphBuilder>,
    table: Option<TableBuilder>,
    cell_paragraph: Option<ParagraphBuilder>,
    image_refs: Vec<String>,
}

impl BodyWalker {
    fn parent(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    fn in_text_box(&self) -> bool {
        self.stack.iter().any(|name| name == TEXT_BOX)
    }

    fn at_body_level(&self) -> bool {
        self.parent() == Some("w:body")
    }

    fn text_target(&self) -> Target {
        if self.in_text_box() {
            return Target::Ignored;
        }
        if self.paragraph.is_some() {
            return Target::BodyParagraph;
        }
        if self.cell_paragraph.is_some() {
            return Target::CellParagraph;
        }
        Target::Ignored
    }

    /// Content of a `w:t`; body paragraphs also keep it in their full text.
    fn push_run_text(&mut self, text: &str) {
        if let Some(builder) = self.paragraph.as_mut() {
            builder.full_text.push_str(text);
        }
        self.push_text(text);
    }

    fn push_text(&mut self, text: &str) {
        let builder = match self.text_target() {
            Target::BodyParagraph => self.paragraph.as_mut(),
            Target::CellParagraph => self.cell_paragraph.as_mut(),
            Target::Ignored => None,
        };
        if let Some(builder) = builder {
            builder.text.push_str(text);
        }
    }

    fn open(&mut self, element: &BytesStart<'_>) {
        let name = element_name(element);
        let depth = self.stack.len();

        match name.as_str() {
            PARAGRAPH if self.at_body_level() => {
                self.paragraph = Some(ParagraphBuilder {
                    depth,
                    ..ParagraphBuilder::default()
                });
            }
            TABLE if self.at_body_level() => {
                self.table = Some(TableBuilder {
                    depth,
                    ..TableBuilder::default()
                });
            }
            ROW => {
                if let Some(table) = self.table.as_mut() {
                    if depth == table.depth + 1 {
                        table.row_depth = Some(depth);
                    }
                }
            }
            CELL => {
                if let Some(table) = self.table.as_mut() {
                    if table.row_depth.is_some_and(|row_depth| depth == row_depth + 1) {
                        table.cells.push(CellBuilder {
                            depth,
                            span: 1,
                            merge: VerticalMerge::None,
                            paragraphs: Vec::new(),
                        });
                    }
                }
            }
            PARAGRAPH => {
                let in_direct_cell = self
                    .table
                    .as_ref()
                    .and_then(|table| table.cells.last())
                    .is_some_and(|cell| depth == cell.depth + 1);
                if in_direct_cell {
                    self.cell_paragraph = Some(ParagraphBuilder {
                        depth,
                        ..ParagraphBuilder::default()
                    });
                }
            }
            _ => {}
        }

        self.stack.push(name);
    }

    /// Elements that carry data in their attributes or stand for a character.
    fn leaf(&mut self, element: &BytesStart<'_>) {
        let name = element_name(element);
        let in_run = self.parent() == Some(RUN);

        match name.as_str() {
            "w:tab" if in_run => self.push_text("\t"),
            "w:br" | "w:cr" if in_run => self.push_text("\n"),
            "w:pStyle" => self.set_style(attribute(element, b"w:val")),
            "w:gridSpan" => {
                let span = attribute(element, b"w:val").and_then(|value| value.parse().ok());
                if let (Some(cell), Some(span)) = (self.current_cell_properties(), span) {
                    cell.span = span;
                }
            }
            "w:vMerge" => {
                let merge = match attribute(element, b"w:val").as_deref() {
                    Some("restart") => VerticalMerge::Restart,
                    _ => VerticalMerge::Continue,
                };
                if let Some(cell) = self.current_cell_properties() {
                    cell.merge = merge;
                }
            }
            "a:blip" => {
                if self.paragraph.is_some() || self.table.is_some() {
                    if let Some(rel_id) = attribute(element, b"r:embed") {
                        self.image_refs.push(rel_id);
                    }
                }
            }
            _ => {}
        }
    }

    /// `w:pStyle` counts only inside the `w:pPr` of the paragraph being built.
    fn set_style(&mut self, style_id: Option<String>) {
        let depth = self.stack.len();
        let in_properties = self.parent() == Some("w:pPr");
        let builder = if self.paragraph.as_ref().is_some_and(|p| p.depth + 2 == depth) {
            self.paragraph.as_mut()
        } else if self.cell_paragraph.as_ref().is_some_and(|p| p.depth + 2 == depth) {
            self.cell_paragraph.as_mut()
        } else {
            None
        };
        if let (true, Some(builder)) = (in_properties, builder) {
            builder.style_id = style_id;
        }
    }

    /// Cell whose `w:tcPr` is currently open.
    fn current_cell_properties(&mut self) -> Option<&mut CellBuilder> {
        if self.parent() != Some("w:tcPr") {
            return None;
        }
        let depth = self.stack.len();
        self.table
            .as_mut()
            .and_then(|table| table.cells.last_mut())
            .filter(|cell| cell.depth + 2 == depth)
    }

    fn close(&mut self, styles: &StyleTable) {
        let Some(name) = self.stack.pop() else {
            return;
        };
        let depth = self.stack.len();

        match name.as_str() {
            PARAGRAPH if self.paragraph.as_ref().is_some_and(|p| p.depth == depth) => {
                if let Some(builder) = self.paragraph.take() {
                    self.elements.push(BodyElement::Paragraph(Paragraph {
                        style_name: styles.paragraph_style_name(builder.style_id.as_deref()),
                        text: builder.text,
                        full_text: builder.full_text,
                        image_refs: std::mem::take(&mut self.image_refs),
                    }));
                }
            }
            PARAGRAPH if self.cell_paragraph.as_ref().is_some_and(|p| p.depth == depth) => {
                if let Some(builder) = self.cell_paragraph.take() {
                    if let Some(cell) = self.table.as_mut().and_then(|table| table.cells.last_mut())
                    {
                        cell.paragraphs.push(builder.text);
                    }
                }
            }
            ROW => {
                if let Some(table) = self.table.as_mut() {
                    if table.row_depth == Some(depth) {
                        table.finish_row();
                    }
                }
            }
            TABLE if self.table.as_ref().is_some_and(|t| t.depth == depth) => {
                if let Some(table) = self.table.take() {
                    self.elements.push(BodyElement::Table(Table {
                        rows: table.rows,
                        image_refs: std::mem::take(&mut self.image_refs),
                    }));
                }
            }
            _ => {}
        }
    }

    /// A self-closing element is an open immediately followed by a close.
    fn empty(&mut self, element: &BytesStart<'_>, styles: &StyleTable) {
        let name = element_name(element);
        if name == PARAGRAPH || name == TABLE || name == ROW || name == CELL {
            self.open(element);
            self.close(styles);
        } else {
            self.leaf(element);
        }
    }
}

/// Reads the direct children of `w:body` as paragraphs and tables, in order.
pub fn parse_body(xml: &str, styles: &StyleTable) -> Result<Vec<BodyElement>> {
    let mut reader = Reader::from_str(xml);
    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"a:blip" {
                    walker.leaf(&e);
                }
                walker.open(&e);
            }
            Ok(Event::Empty(e)) => walker.empty(&e, styles),
            Ok(Event::End(_)) => walker.close(styles),
            Ok(Event::Text(e)) => {
                if walker.parent() == Some("w:t") {
                    let text = e
                        .unescape()
                        .context("failed to decode text in document.xml")?;
                    walker.push_run_text(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => bail!(
                "failed to parse document.xml at byte {}: {err}",
                reader.buffer_position()
            ),
            _ => {}
        }
        buf.clear();
    }

    Ok(walker.elements)
}
