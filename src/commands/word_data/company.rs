use super::*;

/// Company, bank and legal representative fields; the first usable value of each field wins.
pub fn extract_company(rules: &ValueRules, tables: &[TableView]) -> CompanyInfo {
    let mut company = CompanyInfo::default();

    for view in tables {
        for (key, value) in view.kv_pairs() {
            let Some(value) = rules.clean(value) else {
                continue;
            };
            if is_noise_value(&value) {
                continue;
            }

            if let Some((_, field)) = COMPANY_KEYS.iter().find(|(keyword, _)| key.contains(keyword)) {
                let holding_name = *field == CompanyField::Name
                    && (key.starts_with("母公司") || key.contains("控股"));
                fill(field.slot(&mut company), &value, holding_name);
            }

            if let Some((_, field)) = BANK_KEYS.iter().find(|(keyword, _)| key.contains(keyword)) {
                fill(field.slot(&mut company.bank), &value, false);
            }

            if company.legal_representative.is_none()
                && LEGAL_REP_KEYS.iter().any(|keyword| key.contains(keyword))
                && rules.looks_like_person_name(&value)
            {
                company.legal_representative = Some(value.clone());
            }

            if company.phone.is_none() && COMPANY_PHONE_KEYS.contains(&key) {
                company.phone = Some(value);
            }
        }
    }

    debug!(name = ?company.name, credit_code = ?company.credit_code, "company fields collected");
    company
}

fn fill(slot: &mut Option<String>, value: &str, skip: bool) {
    if !skip && slot.is_none() {
        *slot = Some(value.to_string());
    }
}
