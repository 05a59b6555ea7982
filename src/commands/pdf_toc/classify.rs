use super::*;

const SENTENCE_PUNCTUATION: [char; 4] = ['。', '，', '！', '？'];
const SENTENCE_PREFIXES: [&str; 6] = ["第", "（", "(", "附件", "表", "图"];
const NOISE_TOKENS: [&str; 9] = ["报", "价", "文", "件", "供", "应", "商", "称", "章"];
const FORM_FIELD_KEYWORDS: [&str; 10] = [
    "地址", "时间", "日期", "名称", "公章", "签字", "盖章", "电话", "传真", "邮编",
];
const LETTER_PREFIX_CONTINUATIONS: [&str; 4] = ["附", "补", "表", "图"];
const TABLE_HEADER_WORDS: [&str; 15] = [
    "序号", "项目", "内容", "名称", "规格", "数量", "单价", "合价", "金额", "备注", "编号",
    "类别", "单位", "要求", "说明",
];
const APPENDIX_KEYWORDS: [&str; 15] = [
    "投标函",
    "开标一览表",
    "报价明细表",
    "偏离表",
    "声明书",
    "承诺书",
    "授权委托书",
    "证明书",
    "自评表",
    "基本情况表",
    "业绩一览表",
    "情况表",
    "清单",
    "一览表",
    "证书一览表",
];

/// Pattern-based judgments on outline titles.
pub struct TitleClassifier {
    chapter_patterns: Vec<Regex>,
    appendix_prefix: Regex,
}

impl TitleClassifier {
    pub fn new() -> Result<Self> {
        let chapter_patterns = [
            r"^第[一二三四五六七八九十0-9]+章",
            r"(?i)^chapter\s*[0-9IVX]+",
            r"^[0-9]{1,2}\s*/\s*.+",
            r"^[0-9]{1,2}\s+[\x{4e00}-\x{9fa5}]{2,}",
            r"^第[一二三四五六七八九十百0-9]+[部节]",
        ]
        .into_iter()
        .map(|pattern| {
            Regex::new(pattern)
                .with_context(|| format!("failed to compile chapter title regex: {pattern}"))
        })
        .collect::<Result<Vec<Regex>>>()?;

        Ok(Self {
            chapter_patterns,
            appendix_prefix: Regex::new(r"^附件\s*[0-9０-９一二三四五六七八九十]")
                .context("failed to compile appendix title regex")?,
        })
    }

    pub fn is_chapter_title(&self, title: &str) -> bool {
        self.chapter_patterns
            .iter()
            .any(|pattern| pattern.is_match(title))
    }

    pub fn is_appendix_title(&self, title: &str) -> bool {
        self.appendix_prefix.is_match(title)
            || APPENDIX_KEYWORDS
                .iter()
                .any(|keyword| title.contains(keyword))
    }

    /// Whether a title is admissible as a TOC entry. Rejects body sentences, form
    /// templates, table headers and single-character noise.
    pub fn is_valid_toc_title(&self, title: &str) -> bool {
        let title = title.trim();
        let length = char_len(title);

        if length <= 1 || length > 80 {
            return false;
        }

        if title.contains(&SENTENCE_PUNCTUATION[..])
            && !SENTENCE_PREFIXES
                .iter()
                .any(|prefix| title.starts_with(prefix))
        {
            return false;
        }

        if NOISE_TOKENS.contains(&title) {
            return false;
        }

        if !title.chars().any(char::is_alphanumeric) {
            return false;
        }

        if title.ends_with('：') || title.ends_with(':') {
            let has_form_keyword = FORM_FIELD_KEYWORDS
                .iter()
                .any(|keyword| title.contains(keyword));
            if has_form_keyword || title.contains("  ") {
                return false;
            }
        }

        if length > 2 && has_letter_dot_prefix(title) {
            let rest = title.chars().skip(2).collect::<String>();
            let rest = rest.trim();
            if !LETTER_PREFIX_CONTINUATIONS
                .iter()
                .any(|prefix| rest.starts_with(prefix))
            {
                return false;
            }
        }

        let words: Vec<&str> = title.split_whitespace().collect();
        if words.len() >= 2
            && words.iter().all(|word| char_len(word) <= 4)
            && words.iter().any(|word| TABLE_HEADER_WORDS.contains(word))
        {
            return false;
        }

        true
    }
}

/// "A." style list markers: a letter immediately followed by a dot.
fn has_letter_dot_prefix(title: &str) -> bool {
    let mut chars = title.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some('.')) if first.is_alphabetic()
    )
}
