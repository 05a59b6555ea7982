use std::io::{self, Write};

use super::*;

pub fn run(args: PdfTocArgs) -> Result<()> {
    ensure_input_exists(&args.pdf_path, "PDF")?;

    let page_texts = match &args.pages_json {
        Some(path) => load_pages_json(path)?,
        None => extract_pages_with_pdftotext(&args.pdf_path, args.max_pages)?,
    };

    let raw_outline = match &args.outline_json {
        Some(path) => load_outline_json(path)?,
        None => load_native_outline(&args.pdf_path),
    };

    let total_pages = resolve_total_pages(&args.pdf_path, page_texts.len());
    info!(
        pdf = %args.pdf_path.display(),
        total_pages,
        text_pages = page_texts.len(),
        outline_items = raw_outline.len(),
        "loaded pdf inputs"
    );

    let extractor = TocExtractor::new(TocConfig::from_args(&args))?;
    let result = extractor.extract(
        &file_name_string(&args.pdf_path),
        total_pages,
        &raw_outline,
        &page_texts,
    );

    info!(
        entries = result.embedded_toc_count,
        toc_pages = result.toc_pages.len(),
        page_offset = result.page_offset,
        passed = result.validation_summary.passed,
        rate = result.validation_summary.rate,
        "toc extraction completed"
    );

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &result)?;
            info!(path = %path.display(), "wrote toc result");
        }
        None => {
            let mut output = io::BufWriter::new(io::stdout().lock());
            serde_json::to_writer_pretty(&mut output, &result)
                .context("failed to serialize toc json output")?;
            writeln!(output)?;
            output.flush()?;
        }
    }

    Ok(())
}

fn load_native_outline(pdf_path: &Path) -> Vec<OutlineItem> {
    if !command_available("pdftohtml") {
        warn!("pdftohtml unavailable; continuing without embedded outline");
        return Vec::new();
    }

    match extract_outline_with_pdftohtml(pdf_path) {
        Ok(items) => items,
        Err(error) => {
            warn!(error = %error, "outline extraction failed; continuing without embedded outline");
            Vec::new()
        }
    }
}

fn resolve_total_pages(pdf_path: &Path, text_page_count: usize) -> usize {
    if !command_available("pdfinfo") {
        return text_page_count;
    }

    match count_pages_with_pdfinfo(pdf_path) {
        Ok(pages) => pages,
        Err(error) => {
            warn!(error = %error, "falling back to extracted page count");
            text_page_count
        }
    }
}
