use std::fs;

use serde_json::json;

use crate::docx::testing::{DocxFixture, image_bytes};

use super::run::extract_plan;
use super::*;

fn toc_entry(number: &str, title: &str, para_index: Option<usize>) -> WordTocEntry {
    WordTocEntry {
        number: number.to_string(),
        title: title.to_string(),
        page: None,
        level: 2,
        part: None,
        para_index,
    }
}

/// Body elements:
/// 0 一、商务部分 | 1 13. 业绩证明 | 2 13.1 合同 | 3 table | 4 13.1.1 合同扫描件 | 5 png
/// 6 13.2 发票 | 7 small png | 8 gif | 9 text + png again | 10 14. 其他
fn sample_document() -> DocxDocument {
    DocxFixture::new()
        .paragraph("一、商务部分")
        .paragraph("13. 业绩证明")
        .paragraph("13.1 合同")
        .table(&[&["项目", "金额"], &["系统集成\n二期", "100万"]])
        .paragraph("13.1.1 合同扫描件")
        .image("rId1", "image1.png", image_bytes(6000))
        .paragraph("13.2 发票")
        .image("rId2", "image2.png", image_bytes(100))
        .image("rId3", "image3.gif", image_bytes(8000))
        .raw(r#"<w:p><w:r><w:t>附图</w:t></w:r><w:r><w:drawing><a:blip r:embed="rId1"/></w:drawing></w:r></w:p>"#)
        .paragraph("14. 其他")
        .open()
}

fn sample_toc() -> TocDocument {
    TocDocument {
        entries: vec![
            toc_entry("一、", "商务部分", Some(0)),
            toc_entry("13", "业绩证明", Some(1)),
            toc_entry("13.1", "合同", Some(2)),
            toc_entry("13.1.1", "合同扫描件", Some(3)),
            toc_entry("13.2", "发票", Some(5)),
            toc_entry("14", "其他", Some(9)),
            toc_entry("15", "无位置", None),
        ],
    }
}

fn planned(value: serde_json::Value) -> PlannedSection {
    serde_json::from_value(value).expect("planned section deserializes")
}

#[test]
fn descendant_numbers_follow_dotted_prefixes() {
    assert!(is_descendant("13.1.1", "13.1"));
    assert!(is_descendant("13.1.1", "13"));
    assert!(!is_descendant("13.2", "13.1"));
    assert!(!is_descendant("13.10", "13.1"));
    assert!(!is_descendant("13", "13"));
    assert!(!is_descendant("一、1", "一、"));
}

#[test]
fn plan_defaults_enable_text_and_images() {
    let plan: ExtractionPlan = serde_json::from_value(json!({
        "extractions": [{"number": "13.1", "title": "合同"}]
    }))
    .expect("plan deserializes");

    let section = &plan.extractions[0];
    assert!(section.extract_text);
    assert!(section.extract_images);
    assert_eq!(section.output_name, None);
    assert_eq!(section.category, None);
}

#[test]
fn positions_span_subsections_and_stop_at_next_sibling() {
    let document = sample_document();
    assert_eq!(document.body.len(), 11);

    let elements = document.paragraph_element_indices();
    let index = PositionIndex::new(&sample_toc().entries);
    let resolve = |number: &str, title: &str| {
        index.resolve(number, title, &elements, document.body.len())
    };

    assert_eq!(resolve("13.1", "合同"), Ok(SectionRange { start: 2, end: 6 }));
    assert_eq!(resolve("13", "业绩证明"), Ok(SectionRange { start: 1, end: 10 }));
    assert_eq!(resolve("一、", "商务部分"), Ok(SectionRange { start: 0, end: 1 }));
    assert_eq!(resolve("14", "其他"), Ok(SectionRange { start: 10, end: 11 }));
    assert_eq!(resolve("13.1", "发票"), Err(UnresolvedReason::NotInToc));
    assert_eq!(resolve("15", "无位置"), Err(UnresolvedReason::NotInToc));
}

#[test]
fn positions_report_paragraphs_beyond_the_document() {
    let index = PositionIndex::new(&[toc_entry("1", "越界", Some(99))]);
    assert_eq!(
        index.resolve("1", "越界", &[0, 1, 2], 3),
        Err(UnresolvedReason::UnmappedParagraph(99))
    );
}

#[test]
fn section_text_renders_paragraphs_and_tables() {
    let document = sample_document();
    assert_eq!(
        section_text(&document.body[2..6]),
        "13.1 合同\n项目 | 金额\n系统集成 二期 | 100万\n13.1.1 合同扫描件"
    );
}

#[test]
fn section_text_keeps_text_box_content() {
    let document = DocxFixture::new()
        .raw(concat!(
            "<w:p><w:r><w:t>营业执照</w:t></w:r>",
            "<w:r><w:drawing><wps:txbx><w:txbxContent><w:p><w:r>",
            "<w:t xml:space=\"preserve\">统一社会信用代码 91110000</w:t>",
            "</w:r></w:p></w:txbxContent></wps:txbx></w:drawing></w:r></w:p>",
        ))
        .open();

    assert_eq!(document.paragraphs()[0].text, "营业执照");
    assert_eq!(
        section_text(&document.body),
        "营业执照统一社会信用代码 91110000"
    );
}

#[test]
fn section_images_skip_small_and_repeated_images() {
    let document = sample_document();

    let images = section_images(&document, &document.body[1..10]);
    let found: Vec<(&str, &str)> = images
        .iter()
        .map(|image| (image.rel_id, image.extension.as_str()))
        .collect();
    assert_eq!(found, vec![("rId1", "png"), ("rId3", "gif")]);
}

#[test]
fn file_names_follow_number_and_count() {
    assert_eq!(output_prefix("13.1", "合同"), "13.1-合同");
    assert_eq!(output_prefix("一、", "商务部分"), "商务部分");
    assert_eq!(image_file_name("13.1-合同", 0, 1, "png"), "13.1-合同.png");
    assert_eq!(image_file_name("13.1-合同", 1, 3, "jpg"), "13.1-合同-02.jpg");
}

#[test]
fn extract_plan_writes_files_and_reports_every_planned_section() {
    let document = sample_document();
    let output = tempfile::tempdir().expect("temp dir");
    let plan: ExtractionPlan = serde_json::from_value(json!({
        "extractions": [
            {"number": "13.1", "title": "合同", "category": "业绩证明"},
            {"number": "一、", "title": "商务部分", "output_name": "商务部分（封面）", "extract_images": false},
            {"number": "99", "title": "不存在"},
            {"number": "13.2", "title": "发票", "extract_text": false},
            {"number": "14", "title": "其他", "extract_text": false}
        ]
    }))
    .expect("plan deserializes");

    let results =
        extract_plan(&document, &plan, &sample_toc(), output.path()).expect("plan extracts");

    let summary: Vec<(&str, Vec<&str>, SectionStatus)> = results
        .iter()
        .map(|result| {
            (
                result.number.as_str(),
                result.files.iter().map(String::as_str).collect(),
                result.status,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                "13.1",
                vec!["13.1-合同.txt", "13.1-合同.png"],
                SectionStatus::Extracted
            ),
            ("一、", vec!["商务部分_封面.txt"], SectionStatus::Extracted),
            ("99", vec![], SectionStatus::Unresolved),
            (
                "13.2",
                vec!["13.2-发票-01.gif", "13.2-发票-02.png"],
                SectionStatus::Extracted
            ),
            ("14", vec![], SectionStatus::Empty),
        ]
    );
    assert_eq!(results[0].category, "业绩证明");
    assert_eq!(results[1].category, "");

    let text = fs::read_to_string(output.path().join("13.1-合同.txt")).expect("text written");
    assert!(text.starts_with("13.1 合同\n项目 | 金额"));
    let gif = fs::read(output.path().join("13.2-发票-01.gif")).expect("gif written");
    assert_eq!(gif.len(), 8000);
    assert_eq!(
        fs::read_to_string(output.path().join("商务部分_封面.txt")).expect("part text"),
        "一、商务部分"
    );
}

#[test]
fn unresolved_sections_keep_plan_metadata() {
    let document = sample_document();
    let extractor = SectionExtractor::new(&document, &sample_toc().entries).expect("extractor");
    let output = tempfile::tempdir().expect("temp dir");

    let result = extractor
        .extract(
            &planned(json!({"number": "7", "title": "缺失", "category": "资质证明"})),
            output.path(),
        )
        .expect("unresolved is not an error");

    assert_eq!(result.status, SectionStatus::Unresolved);
    assert_eq!(result.category, "资质证明");
    assert!(result.files.is_empty());
    assert_eq!(fs::read_dir(output.path()).expect("read dir").count(), 0);
}
