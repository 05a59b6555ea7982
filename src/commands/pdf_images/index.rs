use super::*;

const SAFE_TITLE_CHARS: usize = 50;
const MIN_TAG_CHARS: usize = 2;
const TECHNICAL_CATEGORY: &str = "技术文件";
const DEFAULT_CATEGORY: &str = "商务文件";

/// Title keywords checked in order; the first hit decides the category.
const CATEGORY_KEYWORDS: [(&str, &str); 26] = [
    ("营业执照", "资质证明"),
    ("ISO", "资质证明"),
    ("CMMI", "资质证明"),
    ("管理体系", "资质证明"),
    ("信用", "资质证明"),
    ("认证", "资质证明"),
    ("著作权", "资质证明"),
    ("资质", "资质证明"),
    ("合同", "业绩证明"),
    ("业绩", "业绩证明"),
    ("发票", "业绩证明"),
    ("中标", "业绩证明"),
    ("验收", "业绩证明"),
    ("身份证", "基本文件"),
    ("授权", "基本文件"),
    ("法定代表人", "基本文件"),
    ("社保", "基本文件"),
    ("承诺", "基本文件"),
    ("印章", "基本文件"),
    ("报价", "商务文件"),
    ("学历", "人员资料"),
    ("资格证", "人员资料"),
    ("学位", "人员资料"),
    ("简历", "人员资料"),
    ("审计", "财务文件"),
    ("财务", "财务文件"),
];

const TOP_SECTION_CATEGORIES: [(&str, &str); 4] = [
    ("10", "基本文件"),
    ("11", "人员资料"),
    ("12", "人员资料"),
    ("13", "业绩证明"),
];

const TAG_ALIASES: [(&str, &[&str]); 14] = [
    ("营业执照", &["工商登记", "执照"]),
    ("ISO9001", &["质量管理", "质量体系"]),
    ("ISO14001", &["环境管理"]),
    ("ISO20000", &["IT服务管理"]),
    ("ISO27001", &["信息安全"]),
    ("OHSAS18001", &["职业健康"]),
    ("0HSAS18001", &["职业健康", "OHSAS18001"]),
    ("身份证", &["证件"]),
    ("社保", &["社会保险"]),
    ("发票", &["税务"]),
    ("合同", &["协议", "项目合同"]),
    ("学历", &["毕业证", "学位"]),
    ("资格证", &["执业资格", "证书"]),
    ("中标通知书", &["中标", "通知书"]),
];

const TOP_SECTION_TAGS: [(&str, &[&str]); 3] = [
    ("12", &["团队成员", "项目团队"]),
    ("11", &["项目负责人"]),
    ("13", &["业绩", "项目业绩"]),
];

pub fn guess_category(key: &SectionKey) -> &'static str {
    if key.scope == Scope::Technical {
        return TECHNICAL_CATEGORY;
    }

    if let Some((_, category)) = CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| key.title.contains(*keyword))
    {
        return *category;
    }

    let top = key.parts().first().copied().unwrap_or_default();
    TOP_SECTION_CATEGORIES
        .iter()
        .find(|(section, _)| *section == top)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Copy of one assigned image into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCopy {
    pub source: PathBuf,
    pub file_name: String,
}

pub struct IndexBuilder {
    sanitizer: FilenameSanitizer,
    tag_separator: Regex,
}

impl IndexBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sanitizer: FilenameSanitizer::parentheses_only()?,
            tag_separator: Regex::new(r"[、，,\s]+").context("failed to compile tag separator")?,
        })
    }

    /// Title, its separated parts, the parent title, keyword aliases and section tags.
    pub fn searchable_tags(&self, key: &SectionKey, parent: Option<&str>) -> Vec<String> {
        let title = key.title.as_str();
        let mut tags = vec![title.to_string()];

        tags.extend(
            self.tag_separator
                .split(title)
                .filter(|part| char_len(part) >= MIN_TAG_CHARS && *part != title)
                .map(str::to_string),
        );

        if let Some(parent) = parent.filter(|parent| !parent.is_empty()) {
            tags.push(parent.to_string());
        }

        let lowered = title.to_lowercase();
        for (keyword, aliases) in TAG_ALIASES {
            if lowered.contains(&keyword.to_lowercase()) {
                tags.extend(aliases.iter().map(|alias| alias.to_string()));
            }
        }

        let top = key.parts().first().copied().unwrap_or_default();
        let section_tags = TOP_SECTION_TAGS
            .iter()
            .find(|(section, _)| *section == top)
            .map(|(_, section_tags)| *section_tags);
        if let Some(section_tags) = section_tags {
            tags.extend(section_tags.iter().map(|tag| tag.to_string()));
        }

        tags
    }

    /// Index entry for one section plus the image copies it names.
    pub fn document(
        &self,
        group: &SectionImages<'_>,
        headers: &[SectionHeader],
        layout_dir: &Path,
    ) -> (ImageIndexDocument, Vec<ImageCopy>) {
        let key = &group.key;
        let safe_section = key.number.replace('.', "_");
        let safe_title = self.sanitizer.sanitize(&key.title, SAFE_TITLE_CHARS);
        let (id_prefix, file_prefix) = match key.scope {
            Scope::Commercial => ("sec", safe_section.clone()),
            Scope::Technical => ("tech", format!("tech_{safe_section}")),
        };

        let count = group.images.len();
        let copies: Vec<ImageCopy> = group
            .images
            .iter()
            .enumerate()
            .map(|(position, placed)| {
                let ext = &placed.image.ext;
                let file_name = if count == 1 {
                    format!("{file_prefix}_{safe_title}.{ext}")
                } else {
                    format!("{file_prefix}_{safe_title}_{:02}.{ext}", position + 1)
                };
                ImageCopy {
                    source: layout_dir.join(&placed.image.path),
                    file_name,
                }
            })
            .collect();

        let first_page = group.images.first().map_or(0, |placed| placed.page_index) + 1;
        let last_page = group.images.last().map_or(0, |placed| placed.page_index) + 1;
        let parent = parent_title(&key.number, headers);

        let document = ImageIndexDocument {
            id: format!("{id_prefix}_{safe_section}_{safe_title}"),
            section: key.number.clone(),
            section_type: key.title.clone(),
            category: guess_category(key).to_string(),
            label: format!("{} {}", key.number, key.title),
            files: copies.iter().map(|copy| copy.file_name.clone()).collect(),
            page_range: [first_page, last_page],
            searchable_tags: self.searchable_tags(key, parent),
        };

        (document, copies)
    }
}
