// ==========================================
// 电池运势核心 - 领域类型定义
// ==========================================
// 红线: 所有中文标签均为封闭枚举,非法标签在构造时报错
// ==========================================

use crate::error::FortuneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 五行 (Element)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// 我生者
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// 我克者
    pub fn overcomes(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Fire => Element::Metal,
            Element::Earth => Element::Water,
            Element::Metal => Element::Wood,
            Element::Water => Element::Fire,
        }
    }

    /// 生我者
    pub fn generated_by(self) -> Element {
        match self {
            Element::Wood => Element::Water,
            Element::Fire => Element::Wood,
            Element::Earth => Element::Fire,
            Element::Metal => Element::Earth,
            Element::Water => Element::Metal,
        }
    }

    /// 以 self 为"我"判断与 other 的生克关系
    ///
    /// 五种关系互斥且完备,任意两行必落其一
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if self.overcomes() == other {
            ElementRelation::Overcomes
        } else if self.generated_by() == other {
            ElementRelation::GeneratedBy
        } else {
            ElementRelation::OvercomeBy
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 五行关系 (Element Relation)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Same,        // 同我
    Generates,   // 我生
    Overcomes,   // 我克
    GeneratedBy, // 生我
    OvercomeBy,  // 克我
}

// ==========================================
// 阴阳 (Polarity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "阳")]
    Yang,
    #[serde(rename = "阴")]
    Yin,
}

// ==========================================
// 十神 (Ten God)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    #[serde(rename = "比肩")]
    BiJian,
    #[serde(rename = "劫财")]
    JieCai,
    #[serde(rename = "食神")]
    ShiShen,
    #[serde(rename = "伤官")]
    ShangGuan,
    #[serde(rename = "偏财")]
    PianCai,
    #[serde(rename = "正财")]
    ZhengCai,
    #[serde(rename = "七杀")]
    QiSha,
    #[serde(rename = "正官")]
    ZhengGuan,
    #[serde(rename = "偏印")]
    PianYin,
    #[serde(rename = "正印")]
    ZhengYin,
}

impl TenGod {
    pub const ALL: [TenGod; 10] = [
        TenGod::BiJian,
        TenGod::JieCai,
        TenGod::ShiShen,
        TenGod::ShangGuan,
        TenGod::PianCai,
        TenGod::ZhengCai,
        TenGod::QiSha,
        TenGod::ZhengGuan,
        TenGod::PianYin,
        TenGod::ZhengYin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TenGod::BiJian => "比肩",
            TenGod::JieCai => "劫财",
            TenGod::ShiShen => "食神",
            TenGod::ShangGuan => "伤官",
            TenGod::PianCai => "偏财",
            TenGod::ZhengCai => "正财",
            TenGod::QiSha => "七杀",
            TenGod::ZhengGuan => "正官",
            TenGod::PianYin => "偏印",
            TenGod::ZhengYin => "正印",
        }
    }

    /// i18n 键名片段
    pub fn key(self) -> &'static str {
        match self {
            TenGod::BiJian => "bi_jian",
            TenGod::JieCai => "jie_cai",
            TenGod::ShiShen => "shi_shen",
            TenGod::ShangGuan => "shang_guan",
            TenGod::PianCai => "pian_cai",
            TenGod::ZhengCai => "zheng_cai",
            TenGod::QiSha => "qi_sha",
            TenGod::ZhengGuan => "zheng_guan",
            TenGod::PianYin => "pian_yin",
            TenGod::ZhengYin => "zheng_yin",
        }
    }

    /// 十神大类
    pub fn category(self) -> GodCategory {
        match self {
            TenGod::ZhengYin | TenGod::PianYin => GodCategory::Resource,
            TenGod::BiJian | TenGod::JieCai => GodCategory::Peer,
            TenGod::ShiShen | TenGod::ShangGuan => GodCategory::Output,
            TenGod::ZhengCai | TenGod::PianCai => GodCategory::Wealth,
            TenGod::ZhengGuan | TenGod::QiSha => GodCategory::Power,
        }
    }

    /// 凶神: 七杀、伤官、劫财、偏印
    pub fn is_fierce(self) -> bool {
        matches!(
            self,
            TenGod::QiSha | TenGod::ShangGuan | TenGod::JieCai | TenGod::PianYin
        )
    }

    /// 吉神: 正官、食神、正印、正财、偏财、比肩
    pub fn is_auspicious(self) -> bool {
        matches!(
            self,
            TenGod::ZhengGuan
                | TenGod::ShiShen
                | TenGod::ZhengYin
                | TenGod::ZhengCai
                | TenGod::PianCai
                | TenGod::BiJian
        )
    }

    /// 能量强度（领域排序平局裁决用）
    pub fn energy_intensity(self) -> u8 {
        match self {
            TenGod::QiSha => 5,
            TenGod::ShangGuan | TenGod::PianCai => 4,
            TenGod::JieCai | TenGod::ShiShen | TenGod::ZhengGuan => 3,
            TenGod::ZhengCai | TenGod::ZhengYin | TenGod::PianYin => 2,
            TenGod::BiJian => 1,
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TenGod {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TenGod::ALL
            .into_iter()
            .find(|god| god.label() == s.trim())
            .ok_or_else(|| FortuneError::unknown_label("ten_god", s))
    }
}

// ==========================================
// 十神大类 (God Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GodCategory {
    Resource, // 印
    Peer,     // 比劫
    Output,   // 食伤
    Wealth,   // 财
    Power,    // 官杀
}

// ==========================================
// 身强弱 / 电池容量 (Body Strength)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyStrength {
    Strong,
    Balanced,
    Weak,
}

impl BodyStrength {
    pub fn key(self) -> &'static str {
        match self {
            BodyStrength::Strong => "strong",
            BodyStrength::Balanced => "balanced",
            BodyStrength::Weak => "weak",
        }
    }

    /// 该体质下的喜用判断
    ///
    /// - Strong: 喜食伤、财、官杀
    /// - Weak: 喜印、比劫
    /// - Balanced: 除七杀外皆可
    pub fn favors(self, god: TenGod) -> bool {
        match self {
            BodyStrength::Strong => matches!(
                god.category(),
                GodCategory::Output | GodCategory::Wealth | GodCategory::Power
            ),
            BodyStrength::Weak => {
                matches!(god.category(), GodCategory::Resource | GodCategory::Peer)
            }
            BodyStrength::Balanced => god != TenGod::QiSha,
        }
    }
}

impl fmt::Display for BodyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyStrength::Strong => write!(f, "Strong"),
            BodyStrength::Balanced => write!(f, "Balanced"),
            BodyStrength::Weak => write!(f, "Weak"),
        }
    }
}

impl FromStr for BodyStrength {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Strong" => Ok(BodyStrength::Strong),
            "Balanced" => Ok(BodyStrength::Balanced),
            "Weak" => Ok(BodyStrength::Weak),
            other => Err(FortuneError::unknown_label("body_strength", other)),
        }
    }
}

// ==========================================
// 地支关系 (Branch Relation)
// ==========================================
// 序列化格式与上游接口保持一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchRelation {
    #[serde(rename = "clash")]
    Clash, // 六冲
    #[serde(rename = "combine")]
    Combine, // 六合
    #[serde(rename = "3-combine")]
    TripleCombine, // 三合
    #[serde(rename = "harm")]
    Harm, // 六害
    #[serde(rename = "punish")]
    Punishment, // 刑
    #[serde(rename = "none")]
    None,
}

impl BranchRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            BranchRelation::Clash => "clash",
            BranchRelation::Combine => "combine",
            BranchRelation::TripleCombine => "3-combine",
            BranchRelation::Harm => "harm",
            BranchRelation::Punishment => "punish",
            BranchRelation::None => "none",
        }
    }

    pub fn is_combine(self) -> bool {
        matches!(self, BranchRelation::Combine | BranchRelation::TripleCombine)
    }
}

impl fmt::Display for BranchRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BranchRelation {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "clash" => Ok(BranchRelation::Clash),
            "combine" => Ok(BranchRelation::Combine),
            "3-combine" | "triple-combine" => Ok(BranchRelation::TripleCombine),
            "harm" => Ok(BranchRelation::Harm),
            "punish" | "punishment" => Ok(BranchRelation::Punishment),
            "none" => Ok(BranchRelation::None),
            other => Err(FortuneError::unknown_label("branch_relation", other)),
        }
    }
}

// ==========================================
// 十二长生 (Energy Phase)
// ==========================================
// 顺序即长生循环顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyPhase {
    #[serde(rename = "长生")]
    ChangSheng,
    #[serde(rename = "沐浴")]
    MuYu,
    #[serde(rename = "冠带")]
    GuanDai,
    #[serde(rename = "临官")]
    LinGuan,
    #[serde(rename = "帝旺")]
    DiWang,
    #[serde(rename = "衰")]
    Shuai,
    #[serde(rename = "病")]
    Bing,
    #[serde(rename = "死")]
    Si,
    #[serde(rename = "墓")]
    Mu,
    #[serde(rename = "绝")]
    Jue,
    #[serde(rename = "胎")]
    Tai,
    #[serde(rename = "养")]
    Yang,
}

impl EnergyPhase {
    pub const CYCLE: [EnergyPhase; 12] = [
        EnergyPhase::ChangSheng,
        EnergyPhase::MuYu,
        EnergyPhase::GuanDai,
        EnergyPhase::LinGuan,
        EnergyPhase::DiWang,
        EnergyPhase::Shuai,
        EnergyPhase::Bing,
        EnergyPhase::Si,
        EnergyPhase::Mu,
        EnergyPhase::Jue,
        EnergyPhase::Tai,
        EnergyPhase::Yang,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnergyPhase::ChangSheng => "长生",
            EnergyPhase::MuYu => "沐浴",
            EnergyPhase::GuanDai => "冠带",
            EnergyPhase::LinGuan => "临官",
            EnergyPhase::DiWang => "帝旺",
            EnergyPhase::Shuai => "衰",
            EnergyPhase::Bing => "病",
            EnergyPhase::Si => "死",
            EnergyPhase::Mu => "墓",
            EnergyPhase::Jue => "绝",
            EnergyPhase::Tai => "胎",
            EnergyPhase::Yang => "养",
        }
    }
}

impl fmt::Display for EnergyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EnergyPhase {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergyPhase::CYCLE
            .into_iter()
            .find(|phase| phase.label() == s.trim())
            .ok_or_else(|| FortuneError::unknown_label("energy_phase", s))
    }
}

// ==========================================
// 运势领域 (Domain)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Career,
    Wealth,
    Love,
    Study,
    Social,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Career,
        Domain::Wealth,
        Domain::Love,
        Domain::Study,
        Domain::Social,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Domain::Career => "career",
            Domain::Wealth => "wealth",
            Domain::Love => "love",
            Domain::Study => "study",
            Domain::Social => "social",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Domain::Career => 0,
            Domain::Wealth => 1,
            Domain::Love => 2,
            Domain::Study => 3,
            Domain::Social => 4,
        }
    }

    /// 静态优先级: career > wealth > love > study > social
    pub fn static_priority(self) -> u8 {
        match self {
            Domain::Career => 5,
            Domain::Wealth => 4,
            Domain::Love => 3,
            Domain::Study => 2,
            Domain::Social => 1,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Domain {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.key() == s.trim())
            .ok_or_else(|| FortuneError::unknown_label("domain", s))
    }
}

// ==========================================
// 性别 (Gender)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// 从用户资料字段归一化
    ///
    /// 以 f 开头（不区分大小写）视为 Female,其余（含空值）默认 Male
    pub fn from_profile(raw: &str) -> Self {
        if raw.trim().to_lowercase().starts_with('f') {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

// ==========================================
// 塔罗正逆位 (Orientation)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Upright,
    Reversed,
}

impl Orientation {
    pub fn is_upright(self) -> bool {
        self == Orientation::Upright
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Upright => write!(f, "upright"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

impl FromStr for Orientation {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upright" => Ok(Orientation::Upright),
            "reversed" => Ok(Orientation::Reversed),
            other => Err(FortuneError::InvalidInput(format!(
                "未知塔罗朝向: {}",
                other
            ))),
        }
    }
}
