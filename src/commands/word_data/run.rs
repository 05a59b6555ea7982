use super::*;

pub fn run(args: WordDataArgs) -> Result<()> {
    ensure_input_exists(&args.docx_path, "Word document")?;
    ensure_directory(&args.output_dir)?;

    let document = DocxDocument::open(&args.docx_path)?;
    let source = file_name_string(&args.docx_path);
    let extracted_at = now_utc_string();
    let mut extraction = extract_document(&document)?;
    info!(
        docx = %args.docx_path.display(),
        tables = extraction.table_count,
        people = extraction.personnel.len(),
        projects = extraction.projects.len(),
        certifications = extraction.certifications.len(),
        "extracted bid data"
    );

    if let Some(index_path) = &args.index {
        if index_path.is_file() {
            let index: ImageIndex = read_json(index_path)?;
            let linked = link_image_index(
                &index,
                &mut extraction.certifications,
                &mut extraction.projects,
            );
            info!(index = %index_path.display(), linked, "linked image index documents");
        } else {
            warn!(index = %index_path.display(), "image index not found; skipping image links");
        }
    }

    write_outputs(&args.output_dir, &source, &extracted_at, extraction)
}

/// Everything pulled from one document.
pub struct Extraction {
    pub table_count: usize,
    pub company: CompanyInfo,
    pub personnel: Vec<Person>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

pub fn extract_document(document: &DocxDocument) -> Result<Extraction> {
    let rules = ValueRules::new()?;
    let tables = table_views(document);

    Ok(Extraction {
        table_count: tables.len(),
        company: extract_company(&rules, &tables),
        personnel: extract_personnel(&rules, &tables),
        projects: extract_performance(&rules, &tables),
        certifications: extract_qualifications(document, &tables),
    })
}

fn write_outputs(
    output_dir: &Path,
    source: &str,
    extracted_at: &str,
    extraction: Extraction,
) -> Result<()> {
    let report = render_report(
        source,
        extracted_at,
        &extraction.company,
        &extraction.personnel,
        &extraction.projects,
        &extraction.certifications,
    );

    write_json_pretty(
        &output_dir.join("company.json"),
        &CompanyDocument {
            company: extraction.company,
            source_file: source.to_string(),
            extracted_at: extracted_at.to_string(),
        },
    )?;
    write_json_pretty(
        &output_dir.join("personnel.json"),
        &PersonnelDocument {
            personnel: extraction.personnel,
            source_file: source.to_string(),
            extracted_at: extracted_at.to_string(),
        },
    )?;
    write_json_pretty(
        &output_dir.join("performance.json"),
        &PerformanceDocument {
            projects: extraction.projects,
            source_file: source.to_string(),
            extracted_at: extracted_at.to_string(),
        },
    )?;
    write_json_pretty(
        &output_dir.join("qualifications.json"),
        &QualificationsDocument {
            certifications: extraction.certifications,
            source_file: source.to_string(),
            extracted_at: extracted_at.to_string(),
        },
    )?;

    let report_path = output_dir.join("extraction_report.md");
    write_bytes(&report_path, report.as_bytes())?;
    info!(output_dir = %output_dir.display(), report = %report_path.display(), "wrote bid data");
    Ok(())
}
