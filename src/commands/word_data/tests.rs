use std::fs;

use serde_json::Value;

use crate::docx::testing::DocxFixture;
use crate::model::ImageIndexDocument;

use super::run::extract_document;
use super::*;

fn rules() -> ValueRules {
    ValueRules::new().expect("value rules compile")
}

fn single_table(rows: &[&[&str]]) -> Vec<TableView> {
    table_views(&DocxFixture::new().table(rows).open())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn indexed(id: &str, section_type: &str, category: &str, tags: &[&str]) -> ImageIndexDocument {
    ImageIndexDocument {
        id: id.to_string(),
        section: id.trim_start_matches("sec_").to_string(),
        section_type: section_type.to_string(),
        category: category.to_string(),
        label: section_type.to_string(),
        files: Vec::new(),
        page_range: [1, 1],
        searchable_tags: strings(tags),
    }
}

fn certification(name: &str) -> Certification {
    Certification {
        name: name.to_string(),
        description: String::new(),
        image_ref: None,
    }
}

fn project(name: &str) -> Project {
    Project {
        project_name: Some(name.to_string()),
        ..Project::default()
    }
}

/// Company card, team list, a résumé card under a heading and a track-record table.
fn bid_fixture() -> DocxFixture {
    DocxFixture::new()
        .paragraph("一、供应商基本情况表")
        .table(&[
            &["母公司名称", "某某控股集团"],
            &["供应商名称", "北京某某科技有限公司"],
            &["统一社会信用代码", "91110108MA01ABCD2X"],
            &["法定代表人", "法定代表人身份证复印件"],
            &["法定代表人", "李四"],
            &["注册资本", "【填写注册资本】"],
            &["开户银行", "中国银行北京中关村支行"],
            &["银行账号", "3456  7890"],
            &["联系电话", "010-88886666"],
        ])
        .paragraph("二、项目团队")
        .table(&[
            &["序号", "人员姓名", "岗位", "学历", "资质证书"],
            &["1", "张三", "项目经理", "本科", "PMP"],
            &["2", "赵六", "开发", "硕士", "/"],
            &["3", "张三", "测试", "本科", ""],
        ])
        .paragraph("项目经理简历")
        .table(&[
            &["姓名", "王五", "性别", "男"],
            &["职称", "高级工程师", "联系电话", "13800000000"],
            &["2021.03-2022.06", "某市政务云平台", "项目经理"],
            &["时间", "项目", "职务"],
        ])
        .paragraph("公司已通过 ISO 9001 质量管理体系认证和 CMMI 3 级评估")
        .table(&[
            &["序号", "项目名称", "采购单位", "合同金额（万元）", "签订时间"],
            &["1", "智慧园区平台", "某某管委会", "120", "2023-05"],
            &["2", "", "某局", "80", "2022-01"],
            &["3", "数据中台建设", "某某集团", "—", "2021-11"],
        ])
}

#[test]
fn clean_collapses_whitespace_and_drops_placeholders() {
    let rules = rules();
    assert_eq!(
        rules.clean("  北京\n某某\t 公司 "),
        Some("北京 某某 公司".to_string())
    );
    assert_eq!(rules.clean("/"), None);
    assert_eq!(rules.clean(" 无 "), None);
    assert_eq!(rules.clean("N/A"), None);
    assert_eq!(rules.clean("【请填写】"), None);
    assert_eq!(rules.clean(""), None);
}

#[test]
fn noise_values_are_labels_and_instructions() {
    assert!(is_noise_value("营业执照复印件"));
    assert!(is_noise_value("此处插入身份证正面"));
    assert!(is_noise_value(""));
    assert!(!is_noise_value("北京某某科技有限公司"));
}

#[test]
fn person_names_reject_labels_fragments_and_dates() {
    let rules = rules();
    assert!(rules.looks_like_person_name("张三"));
    assert!(rules.looks_like_person_name("欧阳·娜娜"));
    assert!(rules.looks_like_person_name("John Smith"));
    assert!(!rules.looks_like_person_name("项目"));
    assert!(!rules.looks_like_person_name("联系人"));
    assert!(!rules.looks_like_person_name("法定代表人授权书"));
    assert!(!rules.looks_like_person_name("2024.6-2024.12"));
    assert!(!rules.looks_like_person_name("12345"));
}

#[test]
fn kv_pairs_read_adjacent_and_offset_cells() {
    let tables = single_table(&[
        &["名称", "甲", "地址", "乙"],
        &["序号", "姓名", "张三"],
        &["单独一格"],
    ]);

    assert_eq!(
        tables[0].kv_pairs(),
        vec![("名称", "甲"), ("地址", "乙"), ("序号", "姓名"), ("姓名", "张三")]
    );
}

#[test]
fn table_context_keeps_the_last_five_paragraphs() {
    let document = DocxFixture::new()
        .paragraph("一")
        .paragraph("二")
        .paragraph("")
        .paragraph("三")
        .paragraph("四")
        .paragraph("五")
        .paragraph("六")
        .table(&[&["a", "b"]])
        .table(&[&["c", "d"]])
        .open();

    let tables = table_views(&document);
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].context, strings(&["二", "三", "四", "五", "六"]));
    assert_eq!(tables[1].context, tables[0].context);
}

#[test]
fn company_takes_first_clean_value_per_field() {
    let extraction = extract_document(&bid_fixture().open()).expect("extraction");
    let company = extraction.company;

    assert_eq!(company.name.as_deref(), Some("北京某某科技有限公司"));
    assert_eq!(company.credit_code.as_deref(), Some("91110108MA01ABCD2X"));
    assert_eq!(company.legal_representative.as_deref(), Some("李四"));
    assert_eq!(company.registered_capital, None);
    assert_eq!(company.phone.as_deref(), Some("010-88886666"));
    assert_eq!(company.bank.bank_name.as_deref(), Some("中国银行北京中关村支行"));
    assert_eq!(company.bank.account_number.as_deref(), Some("3456 7890"));
    assert_eq!(company.bank.bank_code, None);
}

#[test]
fn personnel_merges_team_lists_and_resume_cards() {
    let extraction = extract_document(&bid_fixture().open()).expect("extraction");
    let names: Vec<&str> = extraction
        .personnel
        .iter()
        .map(|person| person.name.as_str())
        .collect();
    assert_eq!(names, vec!["张三", "赵六", "王五"]);

    let zhang = &extraction.personnel[0];
    assert_eq!(zhang.role.as_deref(), Some("项目经理"));
    assert_eq!(zhang.education.as_deref(), Some("本科"));
    assert_eq!(zhang.certifications.as_deref(), Some("PMP"));
    assert_eq!(extraction.personnel[1].certifications, None);

    let wang = &extraction.personnel[2];
    assert_eq!(wang.gender.as_deref(), Some("男"));
    assert_eq!(wang.professional_title.as_deref(), Some("高级工程师"));
    assert_eq!(wang.phone.as_deref(), Some("13800000000"));
    assert_eq!(wang.role.as_deref(), Some("项目经理"));
    assert_eq!(
        wang.project_experience,
        strings(&["2021.03-2022.06: 某市政务云平台 项目经理"])
    );
}

#[test]
fn guess_role_prefers_the_nearest_line() {
    assert_eq!(
        guess_role(&strings(&["项目经理", "测试工程师简历"])).as_deref(),
        Some("测试工程师")
    );
    assert_eq!(guess_role(&strings(&["附件一"])), None);
}

#[test]
fn performance_rows_need_a_project_name() {
    let extraction = extract_document(&bid_fixture().open()).expect("extraction");

    assert_eq!(extraction.projects.len(), 2);
    assert_eq!(
        extraction.projects[0],
        Project {
            project_name: Some("智慧园区平台".to_string()),
            client: Some("某某管委会".to_string()),
            amount: Some("120".to_string()),
            date: Some("2023-05".to_string()),
            image_ref: None,
        }
    );
    assert_eq!(extraction.projects[1].amount, None);
}

#[test]
fn qualifications_follow_first_mention_order() {
    let document = DocxFixture::new()
        .paragraph("公司已通过 ISO 9001 认证和 CMMI 3 级评估")
        .table(&[&["ISO9001 证书", "高新技术企业"], &["CMMI", "ITSS 三级"]])
        .open();
    let tables = table_views(&document);

    let names: Vec<String> = extract_qualifications(&document, &tables)
        .into_iter()
        .map(|cert| cert.name)
        .collect();
    assert_eq!(names, strings(&["ISO 9001", "CMMI", "ISO9001", "高新技术企业", "ITSS"]));
}

#[test]
fn image_index_links_certifications_and_contracts() {
    let index = ImageIndex {
        documents: vec![
            indexed("sec_3_营业执照", "营业执照", "资质证书", &["营业执照"]),
            indexed("sec_5_ISO", "质量管理体系认证", "资质证书", &["ISO 9001", "质量"]),
            indexed("sec_7_CMMI", "CMMI 3级", "资质证书", &[]),
            indexed("sec_13.1_合同", "合同", "业绩证明", &["合同"]),
        ],
    };
    let mut certifications = vec![
        certification("ISO9001"),
        certification("CMMI"),
        certification("ITSS"),
    ];
    let mut projects = vec![project("智慧园区平台"), project("数据中台建设")];

    let linked = link_image_index(&index, &mut certifications, &mut projects);

    assert_eq!(linked, 3);
    assert_eq!(certifications[0].image_ref.as_deref(), Some("sec_5_ISO"));
    assert_eq!(certifications[1].image_ref.as_deref(), Some("sec_7_CMMI"));
    assert_eq!(certifications[2].image_ref, None);
    assert_eq!(projects[0].image_ref.as_deref(), Some("sec_13.1_合同"));
    assert_eq!(projects[1].image_ref, None);
}

#[test]
fn report_shows_bank_and_falls_back_to_professional_title() {
    let company = CompanyInfo {
        name: Some("北京某某科技有限公司".to_string()),
        bank: BankAccount {
            bank_name: Some("中国银行".to_string()),
            ..BankAccount::default()
        },
        ..CompanyInfo::default()
    };
    let person = Person {
        name: "王五".to_string(),
        professional_title: Some("高级工程师".to_string()),
        ..Person::default()
    };

    let report = render_report(
        "bid.docx",
        "2026-01-01T00:00:00Z",
        &company,
        &[person],
        &[],
        &[],
    );

    assert!(report.starts_with("# 资料提取报告\n\n- 来源: `bid.docx`\n"));
    assert!(report.contains("- name: 北京某某科技有限公司\n- 开户行: 中国银行\n- 账号: —"));
    assert!(report.contains("| 王五 | — | — | 高级工程师 |"));
    assert!(!report.contains("## 业绩信息"));
    assert!(!report.contains("## 资质证书"));
}

#[test]
fn run_writes_json_files_and_report() {
    let workspace = tempfile::tempdir().expect("temp dir");
    let root = workspace.path();
    let docx_path = root.join("bid.docx");
    fs::write(&docx_path, bid_fixture().build()).expect("docx written");

    let index_path = root.join("index.json");
    let index = ImageIndex {
        documents: vec![
            indexed("sec_5_ISO", "ISO 9001 认证", "资质证书", &["ISO 9001"]),
            indexed("sec_13.1_合同", "合同", "业绩证明", &["合同"]),
        ],
    };
    write_json_pretty(&index_path, &index).expect("index written");

    let output_dir = root.join("data");
    run(WordDataArgs {
        docx_path: docx_path.clone(),
        output_dir: output_dir.clone(),
        index: Some(index_path),
    })
    .expect("word data run");

    let read = |name: &str| -> Value {
        let raw = fs::read(output_dir.join(name)).expect("output exists");
        serde_json::from_slice(&raw).expect("output is json")
    };

    let company = read("company.json");
    assert_eq!(company["name"], "北京某某科技有限公司");
    assert_eq!(company["bank"]["account_number"], "3456 7890");
    assert_eq!(company["source_file"], "bid.docx");
    assert!(company["registered_capital"].is_null());

    let personnel = read("personnel.json");
    assert_eq!(personnel["personnel"].as_array().map(Vec::len), Some(3));
    assert!(personnel["personnel"][1].get("certifications").is_none());

    let performance = read("performance.json");
    assert_eq!(performance["projects"][0]["image_ref"], "sec_13.1_合同");
    assert!(performance["projects"][1].get("image_ref").is_none());

    let qualifications = read("qualifications.json");
    assert_eq!(qualifications["certifications"][0]["name"], "ISO 9001");
    assert_eq!(qualifications["certifications"][0]["image_ref"], "sec_5_ISO");

    let report = fs::read_to_string(output_dir.join("extraction_report.md")).expect("report");
    assert!(report.contains("| 张三 | 项目经理 | 本科 | PMP |"));
    assert!(report.contains("| 智慧园区平台 | 某某管委会 | 120 | 2023-05 |"));
    assert!(report.contains("- ISO 9001 (质量管理体系)"));
}

#[test]
fn run_skips_a_missing_image_index() {
    let workspace = tempfile::tempdir().expect("temp dir");
    let root = workspace.path();
    let docx_path = root.join("bid.docx");
    fs::write(&docx_path, bid_fixture().build()).expect("docx written");

    run(WordDataArgs {
        docx_path,
        output_dir: root.join("data"),
        index: Some(root.join("missing.json")),
    })
    .expect("word data run");

    assert!(root.join("data/qualifications.json").is_file());
}
