use super::*;

pub fn run(args: PdfImagesArgs) -> Result<()> {
    ensure_input_exists(&args.layout_json, "layout json")?;

    let layout = load_layout(&args.layout_json)?;
    let layout_dir = args
        .layout_json
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    info!(
        layout = %args.layout_json.display(),
        pages = layout.pages.len(),
        "loaded page layout"
    );

    ensure_directory(&args.output_dir)?;
    let removed = clear_directory_files(&args.output_dir)?;
    if removed > 0 {
        debug!(removed, dir = %args.output_dir.display(), "cleared previous output");
    }

    let parser = HeaderParser::new(args.technical_scope_after_page)?;
    let headers = parser.parse_document(&layout.pages);
    info!(headers = headers.len(), "parsed section headers");

    let mut groups = assign_images(&layout.pages, &headers, AssignConfig::from_args(&args));
    sort_sections(&mut groups);

    let builder = IndexBuilder::new()?;
    let mut documents = Vec::with_capacity(groups.len());
    for group in &groups {
        let (document, copies) = builder.document(group, &headers, &layout_dir);
        for copy in &copies {
            let destination = args.output_dir.join(&copy.file_name);
            fs::copy(&copy.source, &destination).with_context(|| {
                format!(
                    "failed to copy image {} to {}",
                    copy.source.display(),
                    destination.display()
                )
            })?;
        }

        info!(
            section = %document.section,
            title = %document.section_type,
            images = document.files.len(),
            first_page = document.page_range[0],
            last_page = document.page_range[1],
            category = %document.category,
            "indexed section images"
        );
        documents.push(document);
    }

    if documents.is_empty() {
        warn!("no images were assigned to any section");
    }

    let total_images: usize = documents.iter().map(|document| document.files.len()).sum();
    write_json_pretty(&args.index, &ImageIndex { documents })?;
    info!(
        images = total_images,
        sections = groups.len(),
        index = %args.index.display(),
        output_dir = %args.output_dir.display(),
        "image extraction completed"
    );

    Ok(())
}
