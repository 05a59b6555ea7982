use super::*;

pub fn run(args: WordSectionsArgs) -> Result<()> {
    ensure_input_exists(&args.docx_path, "Word document")?;
    ensure_input_exists(&args.plan, "extraction plan")?;
    ensure_input_exists(&args.toc, "toc json")?;

    let plan: ExtractionPlan = read_json(&args.plan)?;
    let toc: TocDocument = read_json(&args.toc)?;
    if plan.extractions.is_empty() {
        warn!(plan = %args.plan.display(), "extraction plan is empty; nothing to do");
        return Ok(());
    }

    ensure_directory(&args.output_dir)?;
    let document = DocxDocument::open(&args.docx_path)?;
    info!(
        docx = %args.docx_path.display(),
        elements = document.body.len(),
        planned = plan.extractions.len(),
        toc_entries = toc.entries.len(),
        "loaded word document and plan"
    );

    let results = extract_plan(&document, &plan, &toc, &args.output_dir)?;
    let manifest = SectionManifest {
        source: args.docx_path.display().to_string(),
        source_sha256: sha256_file(&args.docx_path)?,
        generated_at: now_utc_string(),
        results,
    };

    let manifest_path = args.output_dir.join("manifest.json");
    write_json_pretty(&manifest_path, &manifest)?;

    let resolved = manifest
        .results
        .iter()
        .filter(|result| result.status != SectionStatus::Unresolved)
        .count();
    let total_files: usize = manifest.results.iter().map(|result| result.files.len()).sum();
    info!(
        resolved,
        planned = manifest.results.len(),
        files = total_files,
        manifest = %manifest_path.display(),
        "section extraction completed"
    );

    Ok(())
}

/// Extracts every planned section in plan order.
pub fn extract_plan(
    document: &DocxDocument,
    plan: &ExtractionPlan,
    toc: &TocDocument,
    output_dir: &Path,
) -> Result<Vec<SectionResult>> {
    let extractor = SectionExtractor::new(document, &toc.entries)?;
    plan.extractions
        .iter()
        .map(|section| extractor.extract(section, output_dir))
        .collect()
}
