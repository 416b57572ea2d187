// ==========================================
// 电池运势核心 - 天干地支静态表
// ==========================================
// 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
// 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
// ==========================================
// 红线: 表为编译期常量,运行时只读
// ==========================================

use crate::domain::types::{Element, Polarity};
use crate::error::FortuneError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 天干 (Stem)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// 按序号取天干（自动取模）
    pub fn from_index(index: usize) -> Stem {
        Stem::ALL[index % 10]
    }

    pub fn as_char(self) -> char {
        STEM_CHARS[self.index()]
    }

    pub fn from_char(c: char) -> Result<Stem, FortuneError> {
        STEM_CHARS
            .iter()
            .position(|s| *s == c)
            .map(Stem::from_index)
            .ok_or_else(|| FortuneError::unknown_label("stem", c.to_string()))
    }

    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// 奇数位为阴
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Stem {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Stem::from_char(c),
            _ => Err(FortuneError::unknown_label("stem", s)),
        }
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Stem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// 地支 (Branch)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// 按序号取地支（自动取模）
    pub fn from_index(index: usize) -> Branch {
        Branch::ALL[index % 12]
    }

    pub fn as_char(self) -> char {
        BRANCH_CHARS[self.index()]
    }

    pub fn from_char(c: char) -> Result<Branch, FortuneError> {
        BRANCH_CHARS
            .iter()
            .position(|b| *b == c)
            .map(Branch::from_index)
            .ok_or_else(|| FortuneError::unknown_label("branch", c.to_string()))
    }

    /// 本气五行
    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    /// 藏干（本气在前,中气、余气随后）
    pub fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Branch::Zi => &[Stem::Gui],
            Branch::Chou => &[Stem::Ji, Stem::Gui, Stem::Xin],
            Branch::Yin => &[Stem::Jia, Stem::Bing, Stem::Wu],
            Branch::Mao => &[Stem::Yi],
            Branch::Chen => &[Stem::Wu, Stem::Yi, Stem::Gui],
            Branch::Si => &[Stem::Bing, Stem::Geng, Stem::Wu],
            Branch::Wu => &[Stem::Ding, Stem::Ji],
            Branch::Wei => &[Stem::Ji, Stem::Ding, Stem::Yi],
            Branch::Shen => &[Stem::Geng, Stem::Ren, Stem::Wu],
            Branch::You => &[Stem::Xin],
            Branch::Xu => &[Stem::Wu, Stem::Xin, Stem::Ding],
            Branch::Hai => &[Stem::Ren, Stem::Jia],
        }
    }

    /// 本气藏干
    pub fn main_hidden_stem(self) -> Stem {
        self.hidden_stems()[0]
    }

    /// 库地: 辰(水库) 戌(火库) 丑(金库) 未(木库)
    pub fn is_storage(self) -> bool {
        matches!(self, Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Branch {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Branch::from_char(c),
            _ => Err(FortuneError::unknown_label("branch", s)),
        }
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Branch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// 柱 (Pillar)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// 调用方保证干支同阴阳（外部输入请用 try_new）
    pub fn new(stem: Stem, branch: Branch) -> Self {
        debug_assert!(Self::is_valid_pair(stem, branch), "{}{} 阴阳不合", stem, branch);
        Self { stem, branch }
    }

    /// 校验构造: 阳干配阳支、阴干配阴支,否则不在六十甲子中
    pub fn try_new(stem: Stem, branch: Branch) -> Result<Self, FortuneError> {
        if Self::is_valid_pair(stem, branch) {
            Ok(Self { stem, branch })
        } else {
            Err(FortuneError::unknown_label(
                "pillar",
                format!("{}{}", stem, branch),
            ))
        }
    }

    fn is_valid_pair(stem: Stem, branch: Branch) -> bool {
        stem.index() % 2 == branch.index() % 2
    }

    /// 由六十甲子序号构造（0 = 甲子）
    pub fn from_cycle_index(index: usize) -> Self {
        let i = index % 60;
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// 六十甲子序号
    pub fn cycle_index(self) -> usize {
        // 中国剩余定理: i ≡ stem (mod 10), i ≡ branch (mod 12)
        let stem = self.stem.index() as i64;
        let branch = self.branch.index() as i64;
        (6 * stem - 5 * branch).rem_euclid(60) as usize
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(stem), Some(branch), None) => {
                let stem = Stem::from_char(stem)?;
                let branch = Branch::from_char(branch)?;
                Pillar::try_new(stem, branch).map_err(|_| FortuneError::unknown_label("pillar", s))
            }
            _ => Err(FortuneError::unknown_label("pillar", s)),
        }
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// 四柱 (Four Pillars)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// 日主 = 日柱天干
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// 年/月/日三支
    pub fn natal_branches(&self) -> [Branch; 3] {
        [self.year.branch, self.month.branch, self.day.branch]
    }
}
