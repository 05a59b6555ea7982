use super::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CompanyField {
    Name,
    CreditCode,
    RegisteredAddress,
    OfficeAddress,
    RegisteredCapital,
    CompanyType,
    EstablishedDate,
    PostalCode,
    Email,
    Fax,
    BusinessScope,
    CreditRating,
    TotalEmployees,
}

impl CompanyField {
    pub fn slot(self, company: &mut CompanyInfo) -> &mut Option<String> {
        match self {
            CompanyField::Name => &mut company.name,
            CompanyField::CreditCode => &mut company.credit_code,
            CompanyField::RegisteredAddress => &mut company.registered_address,
            CompanyField::OfficeAddress => &mut company.office_address,
            CompanyField::RegisteredCapital => &mut company.registered_capital,
            CompanyField::CompanyType => &mut company.company_type,
            CompanyField::EstablishedDate => &mut company.established_date,
            CompanyField::PostalCode => &mut company.postal_code,
            CompanyField::Email => &mut company.email,
            CompanyField::Fax => &mut company.fax,
            CompanyField::BusinessScope => &mut company.business_scope,
            CompanyField::CreditRating => &mut company.credit_rating,
            CompanyField::TotalEmployees => &mut company.total_employees,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BankField {
    BankName,
    AccountNumber,
    BankCode,
}

impl BankField {
    pub fn slot(self, bank: &mut BankAccount) -> &mut Option<String> {
        match self {
            BankField::BankName => &mut bank.bank_name,
            BankField::AccountNumber => &mut bank.account_number,
            BankField::BankCode => &mut bank.bank_code,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PersonField {
    Name,
    Gender,
    Age,
    Title,
    ProfessionalTitle,
    Education,
    IdNumber,
    Phone,
    WorkYears,
    WorkExperience,
    Certifications,
}

/// Keys are matched by substring in table order, so earlier keys shadow later ones.
pub const COMPANY_KEYS: [(&str, CompanyField); 26] = [
    ("供应商名称", CompanyField::Name),
    ("企业名称", CompanyField::Name),
    ("公司名称", CompanyField::Name),
    ("统一社会信用代码", CompanyField::CreditCode),
    ("社会信用代码", CompanyField::CreditCode),
    ("税号", CompanyField::CreditCode),
    ("注册地址", CompanyField::RegisteredAddress),
    ("企业地址", CompanyField::RegisteredAddress),
    ("公司地址", CompanyField::RegisteredAddress),
    ("办公地址", CompanyField::OfficeAddress),
    ("注册资本", CompanyField::RegisteredCapital),
    ("注册资金", CompanyField::RegisteredCapital),
    ("注册资本金", CompanyField::RegisteredCapital),
    ("企业性质", CompanyField::CompanyType),
    ("公司类型", CompanyField::CompanyType),
    ("注册时间", CompanyField::EstablishedDate),
    ("成立日期", CompanyField::EstablishedDate),
    ("成立时间", CompanyField::EstablishedDate),
    ("邮政编码", CompanyField::PostalCode),
    ("邮编", CompanyField::PostalCode),
    ("电子邮箱", CompanyField::Email),
    ("邮箱", CompanyField::Email),
    ("传真", CompanyField::Fax),
    ("经营范围", CompanyField::BusinessScope),
    ("信用等级", CompanyField::CreditRating),
    ("总人数", CompanyField::TotalEmployees),
];

pub const BANK_KEYS: [(&str, BankField); 6] = [
    ("开户银行", BankField::BankName),
    ("开户行", BankField::BankName),
    ("银行账号", BankField::AccountNumber),
    ("账号", BankField::AccountNumber),
    ("开户行联行号", BankField::BankCode),
    ("联行号", BankField::BankCode),
];

pub const LEGAL_REP_KEYS: [&str; 2] = ["法定代表人", "法人代表"];

/// Only these exact keys are taken as the company phone.
pub const COMPANY_PHONE_KEYS: [&str; 4] = ["联系电话", "联系手机", "电话", "手机"];

pub const PERSON_KEYS: [(&str, PersonField); 17] = [
    ("姓名", PersonField::Name),
    ("姓\t名", PersonField::Name),
    ("性别", PersonField::Gender),
    ("年龄", PersonField::Age),
    ("职务", PersonField::Title),
    ("职称", PersonField::ProfessionalTitle),
    ("学历", PersonField::Education),
    ("身份证号码", PersonField::IdNumber),
    ("身份证号", PersonField::IdNumber),
    ("联系电话", PersonField::Phone),
    ("联系手机", PersonField::Phone),
    ("电话", PersonField::Phone),
    ("手机", PersonField::Phone),
    ("工作年限", PersonField::WorkYears),
    ("工作经验", PersonField::WorkExperience),
    ("执业资格证书", PersonField::Certifications),
    ("资质证书", PersonField::Certifications),
];

pub const TEAM_TABLE_HEADERS: [&str; 6] = ["人员姓名", "姓名", "学历", "资质证书", "工作经验", "岗位"];

pub const PERFORMANCE_TABLE_HEADERS: [&str; 5] = ["项目名称", "采购单位", "合同金额", "实施时间", "甲方"];

/// Checked in order against context lines; the first keyword found in a line wins.
pub const ROLE_KEYWORDS: [&str; 16] = [
    "项目负责人",
    "项目经理",
    "系统架构师",
    "架构师",
    "需求分析师",
    "需求分析",
    "测试工程师",
    "测试",
    "实施工程师",
    "实施",
    "运维工程师",
    "运维",
    "开发工程师",
    "开发",
    "前端",
    "后端",
];

pub const CERT_KEYWORDS: [(&str, &str); 15] = [
    ("ISO9001", "质量管理体系"),
    ("ISO 9001", "质量管理体系"),
    ("ISO14001", "环境管理体系"),
    ("ISO 14001", "环境管理体系"),
    ("ISO27001", "信息安全管理体系"),
    ("ISO 27001", "信息安全管理体系"),
    ("ISO20000", "信息技术服务管理体系"),
    ("ISO 20000", "信息技术服务管理体系"),
    ("ISO45001", "职业健康安全管理体系"),
    ("ISO 45001", "职业健康安全管理体系"),
    ("OHSAS18001", "职业健康安全管理体系"),
    ("CMMI", "能力成熟度模型"),
    ("高新技术企业", "高新技术企业认定"),
    ("软件著作权", "软件著作权"),
    ("ITSS", "信息技术服务标准"),
];

const EMPTY_MARKERS: [&str; 6] = ["/", "——", "—", "-", "无", "N/A"];

const NOISE_WORDS: [&str; 12] = [
    "复印件", "扫描件", "此处插入", "正面", "反面", "人像面", "国徽面", "（%）", "备注", "说明",
    "要求", "序号",
];

const NON_NAME_WORDS: [&str; 26] = [
    "职称", "学历", "时间", "日期", "序号", "编号", "姓名", "性别", "年龄", "岗位", "角色", "职务",
    "备注", "说明", "证书", "资质", "经验", "专业", "电话", "手机", "地址", "邮箱", "名称", "金额",
    "单位", "项目",
];

const NON_NAME_FRAGMENTS: [&str; 17] = [
    "联系", "电话", "手机", "代表", "授权", "委托", "负责", "地址", "邮箱", "编号", "复印件",
    "扫描件", "证书", "资质", "经验", "学历", "职称",
];

/// A person name of at most this many characters may mix in latin letters.
const MAX_NAME_CHARS: usize = 20;

/// Cleans cell values and tells names apart from labels and placeholders.
pub struct ValueRules {
    placeholder: Regex,
    whitespace: Regex,
    date_prefix: Regex,
    year_prefix: Regex,
    chinese_name: Regex,
    name_letter: Regex,
}

impl ValueRules {
    pub fn new() -> Result<Self> {
        Ok(Self {
            placeholder: Regex::new(r"【.*?】").context("failed to compile placeholder regex")?,
            whitespace: Regex::new(r"\s+").context("failed to compile whitespace regex")?,
            date_prefix: Regex::new(r"^\d{4}[.\-/年]")
                .context("failed to compile date prefix regex")?,
            year_prefix: Regex::new(r"^\d{4}").context("failed to compile year prefix regex")?,
            chinese_name: Regex::new(r"^[\x{4e00}-\x{9fff}·]{2,6}$")
                .context("failed to compile chinese name regex")?,
            name_letter: Regex::new(r"[a-zA-Z\x{4e00}-\x{9fff}]")
                .context("failed to compile name letter regex")?,
        })
    }

    /// Single-spaced value, or `None` for blanks, dash markers and `【...】` placeholders.
    pub fn clean(&self, value: &str) -> Option<String> {
        let collapsed = self.whitespace.replace_all(value.trim(), " ");
        if collapsed.is_empty() || EMPTY_MARKERS.contains(&&*collapsed) {
            return None;
        }
        if self.placeholder.is_match(&collapsed) {
            return None;
        }
        Some(collapsed.into_owned())
    }

    pub fn starts_with_year(&self, value: &str) -> bool {
        self.year_prefix.is_match(value)
    }

    pub fn looks_like_person_name(&self, value: &str) -> bool {
        if value.is_empty() || NON_NAME_WORDS.contains(&value) {
            return false;
        }
        if NON_NAME_FRAGMENTS.iter().any(|fragment| value.contains(fragment)) {
            return false;
        }
        if self.date_prefix.is_match(value) {
            return false;
        }
        if self.chinese_name.is_match(value) {
            return true;
        }
        char_len(value) <= MAX_NAME_CHARS && self.name_letter.is_match(value)
    }
}

/// Labels and instructions that sit in value cells of blank templates.
pub fn is_noise_value(value: &str) -> bool {
    value.is_empty() || NOISE_WORDS.iter().any(|word| value.contains(word))
}
