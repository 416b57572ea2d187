// ==========================================
// 电池运势核心 - 塔罗牌标识
// ==========================================
// 评分 slug 约定:
// - 大阿卡纳: "{序号}_{名}",序号 0-21（如 19_sun）
// - 小阿卡纳: "{花色}_{牌阶}",花色 w/c/s/p（如 w_ace、p_10）
// ==========================================
// 评分只关心 slug 与正逆位,牌义文本不参与计算
// ==========================================

use crate::domain::types::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// TarotCard - 评分用牌标识
// ==========================================
// 允许任意字符串: 未收录的牌在偏移表中视为中性
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TarotCard {
    slug: String,
}

const MAJOR_ARCANA: [(&str, &str); 22] = [
    ("the fool", "0_fool"),
    ("the magician", "1_magician"),
    ("the high priestess", "2_priestess"),
    ("the empress", "3_empress"),
    ("the emperor", "4_emperor"),
    ("the hierophant", "5_hierophant"),
    ("the lovers", "6_lovers"),
    ("the chariot", "7_chariot"),
    ("strength", "8_strength"),
    ("the hermit", "9_hermit"),
    ("wheel of fortune", "10_wheel"),
    ("justice", "11_justice"),
    ("the hanged man", "12_hanged_man"),
    ("death", "13_death"),
    ("temperance", "14_temperance"),
    ("the devil", "15_devil"),
    ("the tower", "16_tower"),
    ("the star", "17_star"),
    ("the moon", "18_moon"),
    ("the sun", "19_sun"),
    ("judgement", "20_judgement"),
    ("the world", "21_world"),
];

fn suit_slug(suit: &str) -> Option<&'static str> {
    match suit {
        "wands" | "rods" | "staves" => Some("w"),
        "cups" | "chalices" => Some("c"),
        "swords" => Some("s"),
        "pentacles" | "coins" => Some("p"),
        _ => None,
    }
}

fn rank_slug(rank: &str) -> Option<&'static str> {
    match rank {
        "ace" => Some("ace"),
        "page" => Some("page"),
        "knight" => Some("knight"),
        "queen" => Some("queen"),
        "king" => Some("king"),
        "two" | "2" => Some("2"),
        "three" | "3" => Some("3"),
        "four" | "4" => Some("4"),
        "five" | "5" => Some("5"),
        "six" | "6" => Some("6"),
        "seven" | "7" => Some("7"),
        "eight" | "8" => Some("8"),
        "nine" | "9" => Some("9"),
        "ten" | "10" => Some("10"),
        _ => None,
    }
}

impl TarotCard {
    /// 直接使用评分 slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    /// 由英文牌名映射评分 slug
    ///
    /// # 参数
    /// - name: 英文牌名（"The Sun"、"Ace of Wands"、"Two of Coins"）
    /// - suit: 可选花色字段,牌名不含 " of " 时作为兜底
    ///
    /// # 返回
    /// - None: 无法映射
    pub fn from_name(name: &str, suit: Option<&str>) -> Option<Self> {
        let name_key = name.trim().to_lowercase();
        if name_key.is_empty() {
            return None;
        }

        if let Some((_, slug)) = MAJOR_ARCANA.iter().find(|(n, _)| *n == name_key) {
            return Some(Self::new(*slug));
        }

        if let Some((rank_raw, suit_raw)) = name_key.split_once(" of ") {
            if let (Some(rank), Some(suit)) = (rank_slug(rank_raw), suit_slug(suit_raw)) {
                return Some(Self::new(format!("{}_{}", suit, rank)));
            }
        }

        let suit = suit_slug(&suit?.trim().to_lowercase())?;
        let rank = rank_slug(&name_key)?;
        Some(Self::new(format!("{}_{}", suit, rank)))
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// 大阿卡纳判定: 首段为整数且 < 22
    pub fn is_major_arcana(&self) -> bool {
        self.slug
            .split('_')
            .next()
            .filter(|head| !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()))
            .and_then(|head| head.parse::<u32>().ok())
            .map(|n| n < 22)
            .unwrap_or(false)
    }
}

impl fmt::Display for TarotCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug)
    }
}

// ==========================================
// TarotDraw - 一次抽牌
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotDraw {
    pub card: TarotCard,
    pub orientation: Orientation,
}

impl TarotDraw {
    pub fn new(card: TarotCard, orientation: Orientation) -> Self {
        Self { card, orientation }
    }

    pub fn upright(slug: &str) -> Self {
        Self::new(TarotCard::new(slug), Orientation::Upright)
    }

    pub fn reversed(slug: &str) -> Self {
        Self::new(TarotCard::new(slug), Orientation::Reversed)
    }
}
