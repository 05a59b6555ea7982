use super::*;

/// Characters of project text kept per experience line.
const PROJECT_TEXT_CHARS: usize = 100;

#[derive(Default)]
struct TeamColumns {
    name: Option<usize>,
    education: Option<usize>,
    certifications: Option<usize>,
    experience: Option<usize>,
    role: Option<usize>,
}

impl TeamColumns {
    /// Later columns win when two headers map to the same field.
    fn from_header(header: &[String]) -> Self {
        let mut columns = Self::default();
        for (index, cell) in header.iter().enumerate() {
            if cell.contains("姓名") {
                columns.name = Some(index);
            } else if cell.contains("学历") {
                columns.education = Some(index);
            } else if cell.contains("资质") || cell.contains("证书") {
                columns.certifications = Some(index);
            } else if cell.contains("经验") {
                columns.experience = Some(index);
            } else if cell.contains("岗位") || cell.contains("角色") {
                columns.role = Some(index);
            }
        }
        columns
    }
}

/// People from team summary tables and from single-person key/value cards.
///
/// A name is reported once, by the first table that yields it.
pub fn extract_personnel(rules: &ValueRules, tables: &[TableView]) -> Vec<Person> {
    let mut personnel = Vec::new();
    let mut seen = HashSet::new();

    for view in tables {
        if let Some(team) = team_members(rules, view) {
            for person in team {
                if seen.insert(person.name.clone()) {
                    personnel.push(person);
                }
            }
            continue;
        }

        if let Some(person) = person_card(rules, view) {
            if seen.insert(person.name.clone()) {
                personnel.push(person);
            }
        }
    }

    personnel
}

/// Rows of a table whose header names people; `None` when the table is not a team list.
fn team_members(rules: &ValueRules, view: &TableView) -> Option<Vec<Person>> {
    let (header, data) = view.header_and_data()?;
    if header_matches(header, &TEAM_TABLE_HEADERS) < 2
        || !header.iter().any(|cell| cell.contains("姓名"))
    {
        return None;
    }

    let columns = TeamColumns::from_header(header);
    columns.name?;
    let members = data
        .iter()
        .filter_map(|row| {
            let name = cell_value(rules, row, columns.name)?;
            if !rules.looks_like_person_name(&name) {
                return None;
            }
            Some(Person {
                name,
                role: cell_value(rules, row, columns.role),
                education: cell_value(rules, row, columns.education),
                certifications: cell_value(rules, row, columns.certifications),
                experience: cell_value(rules, row, columns.experience),
                ..Person::default()
            })
        })
        .collect();
    Some(members)
}

/// A résumé-style table with labelled cells for one person.
fn person_card(rules: &ValueRules, view: &TableView) -> Option<Person> {
    let mut found: Vec<(PersonField, String)> = Vec::new();
    for (key, value) in view.kv_pairs() {
        let Some(value) = rules.clean(value) else {
            continue;
        };
        let Some((_, field)) = PERSON_KEYS.iter().find(|(keyword, _)| key.contains(keyword)) else {
            continue;
        };
        if !found.iter().any(|(existing, _)| existing == field) {
            found.push((*field, value));
        }
    }

    let take = |field: PersonField| {
        found
            .iter()
            .find(|(existing, _)| *existing == field)
            .map(|(_, value)| value.clone())
    };

    let name = take(PersonField::Name)?;
    if !rules.looks_like_person_name(&name) {
        return None;
    }

    Some(Person {
        name,
        gender: take(PersonField::Gender),
        age: take(PersonField::Age),
        title: take(PersonField::Title),
        professional_title: take(PersonField::ProfessionalTitle),
        education: take(PersonField::Education),
        id_number: take(PersonField::IdNumber),
        phone: take(PersonField::Phone),
        work_years: take(PersonField::WorkYears),
        work_experience: take(PersonField::WorkExperience),
        certifications: take(PersonField::Certifications),
        role: guess_role(&view.context),
        experience: None,
        project_experience: project_experience(rules, view),
    })
}

/// The role keyword named by the nearest context line that names one.
pub fn guess_role(context: &[String]) -> Option<String> {
    context.iter().rev().find_map(|line| {
        ROLE_KEYWORDS
            .iter()
            .find(|keyword| line.contains(*keyword))
            .map(|keyword| keyword.to_string())
    })
}

/// `"<period>: <project text>"` for every row whose first cell starts with a year.
fn project_experience(rules: &ValueRules, view: &TableView) -> Vec<String> {
    view.rows
        .iter()
        .filter_map(|cells| {
            let (period, rest) = cells.split_first()?;
            if !rules.starts_with_year(period) {
                return None;
            }
            let text = rest
                .iter()
                .filter(|cell| rules.clean(cell).is_some())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            if text.is_empty() {
                return None;
            }
            Some(format!("{period}: {}", char_prefix(&text, PROJECT_TEXT_CHARS)))
        })
        .collect()
}
