use std::io::{self, Write};

use super::*;

const LISTING_TITLE_CHARS: usize = 60;

pub fn run(args: WordTocArgs) -> Result<()> {
    ensure_input_exists(&args.docx_path, "Word document")?;

    let document = DocxDocument::open(&args.docx_path)?;
    let paragraphs = document.paragraphs();
    info!(
        docx = %args.docx_path.display(),
        paragraphs = paragraphs.len(),
        elements = document.body.len(),
        "loaded word document"
    );

    let builder = WordTocBuilder::new()?;
    let (strategy, entries) = builder.build(&paragraphs);
    info!(
        strategy = strategy.as_str(),
        entries = entries.len(),
        "word toc extracted"
    );

    let result = WordTocResult {
        source: args.docx_path.display().to_string(),
        entry_count: entries.len(),
        entries,
    };
    write_json_pretty(&args.output, &result)?;
    info!(path = %args.output.display(), "wrote word toc");

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_listing(&mut output, &result.entries)?;
    output.flush()?;

    Ok(())
}

/// One indented line per entry, with the page when known.
pub fn write_listing<W: Write>(output: &mut W, entries: &[WordTocEntry]) -> Result<()> {
    for entry in entries {
        let indent = "  ".repeat(entry.level.saturating_sub(1) as usize);
        let page = entry
            .page
            .filter(|page| *page != 0)
            .map(|page| format!(" (p{page})"))
            .unwrap_or_default();
        writeln!(
            output,
            "  {indent}{}  {}{page}",
            entry.number,
            char_prefix(&entry.title, LISTING_TITLE_CHARS)
        )
        .context("failed to write toc listing")?;
    }
    Ok(())
}
