use super::*;

const MISSING: &str = "—";

fn or_missing(value: Option<&String>) -> &str {
    value.map(String::as_str).unwrap_or(MISSING)
}

/// Company fields in output order, labelled by their JSON names.
fn company_lines(company: &CompanyInfo) -> Vec<String> {
    let fields = [
        ("name", &company.name),
        ("credit_code", &company.credit_code),
        ("registered_address", &company.registered_address),
        ("office_address", &company.office_address),
        ("registered_capital", &company.registered_capital),
        ("company_type", &company.company_type),
        ("established_date", &company.established_date),
        ("postal_code", &company.postal_code),
        ("email", &company.email),
        ("phone", &company.phone),
        ("fax", &company.fax),
        ("business_scope", &company.business_scope),
        ("credit_rating", &company.credit_rating),
        ("total_employees", &company.total_employees),
        ("legal_representative", &company.legal_representative),
    ];

    let mut lines: Vec<String> = fields
        .iter()
        .filter_map(|&(label, value)| value.as_ref().map(|value| format!("- {label}: {value}")))
        .collect();
    if !company.bank.is_empty() {
        lines.push(format!("- 开户行: {}", or_missing(company.bank.bank_name.as_ref())));
        lines.push(format!("- 账号: {}", or_missing(company.bank.account_number.as_ref())));
    }
    lines
}

/// Markdown summary of one extraction run.
pub fn render_report(
    source: &str,
    generated_at: &str,
    company: &CompanyInfo,
    personnel: &[Person],
    projects: &[Project],
    certifications: &[Certification],
) -> String {
    let mut lines = vec![
        "# 资料提取报告".to_string(),
        String::new(),
        format!("- 来源: `{source}`"),
        format!("- 时间: {generated_at}"),
        String::new(),
        "## 公司信息".to_string(),
        String::new(),
    ];
    lines.extend(company_lines(company));

    if !personnel.is_empty() {
        lines.extend(table_head("## 人员信息", "| 姓名 | 角色 | 学历 | 资质 |"));
        for person in personnel {
            let qualification = person
                .certifications
                .as_ref()
                .or(person.professional_title.as_ref());
            lines.push(format!(
                "| {} | {} | {} | {} |",
                person.name,
                or_missing(person.role.as_ref()),
                or_missing(person.education.as_ref()),
                or_missing(qualification),
            ));
        }
    }

    if !projects.is_empty() {
        lines.extend(table_head("## 业绩信息", "| 项目 | 客户 | 金额 | 时间 |"));
        for project in projects {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                or_missing(project.project_name.as_ref()),
                or_missing(project.client.as_ref()),
                or_missing(project.amount.as_ref()),
                or_missing(project.date.as_ref()),
            ));
        }
    }

    if !certifications.is_empty() {
        lines.extend(["".to_string(), "## 资质证书".to_string(), String::new()]);
        lines.extend(
            certifications
                .iter()
                .map(|cert| format!("- {} ({})", cert.name, cert.description)),
        );
    }

    lines.join("\n")
}

fn table_head(title: &str, columns: &str) -> [String; 5] {
    [
        String::new(),
        title.to_string(),
        String::new(),
        columns.to_string(),
        "|------|------|------|------|".to_string(),
    ]
}
