use super::*;

#[derive(Default)]
struct PerformanceColumns {
    project_name: Option<usize>,
    client: Option<usize>,
    amount: Option<usize>,
    date: Option<usize>,
}

impl PerformanceColumns {
    fn from_header(header: &[String]) -> Self {
        let mut columns = Self::default();
        for (index, cell) in header.iter().enumerate() {
            let mentions = |words: &[&str]| words.iter().any(|word| cell.contains(word));
            if cell.contains("项目名称") {
                columns.project_name = Some(index);
            } else if mentions(&["采购单位", "采购人", "甲方", "用户"]) {
                columns.client = Some(index);
            } else if cell.contains("金额") {
                columns.amount = Some(index);
            } else if mentions(&["时间", "日期"]) {
                columns.date = Some(index);
            }
        }
        columns
    }
}

/// Track-record rows from tables whose header names at least two performance columns.
pub fn extract_performance(rules: &ValueRules, tables: &[TableView]) -> Vec<Project> {
    let mut projects = Vec::new();

    for view in tables {
        let Some((header, data)) = view.header_and_data() else {
            continue;
        };
        if header_matches(header, &PERFORMANCE_TABLE_HEADERS) < 2 {
            continue;
        }

        let columns = PerformanceColumns::from_header(header);
        projects.extend(data.iter().filter_map(|row| {
            let project_name = cell_value(rules, row, columns.project_name)?;
            Some(Project {
                project_name: Some(project_name),
                client: cell_value(rules, row, columns.client),
                amount: cell_value(rules, row, columns.amount),
                date: cell_value(rules, row, columns.date),
                image_ref: None,
            })
        }));
    }

    projects
}
