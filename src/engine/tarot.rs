// ==========================================
// 电池运势核心 - 塔罗偏移表
// ==========================================
// 78 张牌 × (综合 + 五领域) 的基础偏移,乘以大/小阿卡纳倍率后计入评分
// 查表口径:
// - 领域键取领域偏移（表内五领域齐全）
// - 综合键取综合偏移（小阿卡纳多数无综合偏移,视为 0）
// - 未收录的牌一律视为 0（中性）,不报错
// ==========================================

use crate::domain::{Domain, DomainMap, TarotCard};
use tracing::warn;

/// 单张牌的偏移
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOffsets {
    pub slug: &'static str,
    pub overall: Option<f64>,
    pub domains: DomainMap<f64>,
}

/// 查表键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetKey {
    Overall,
    Domain(Domain),
}

/// [career, wealth, love, study, social]
const fn card(slug: &'static str, overall: Option<f64>, d: [f64; 5]) -> CardOffsets {
    CardOffsets {
        slug,
        overall,
        domains: DomainMap {
            career: d[0],
            wealth: d[1],
            love: d[2],
            study: d[3],
            social: d[4],
        },
    }
}

const TAROT_OFFSETS: [CardOffsets; 78] = [
    card("0_fool", Some(0.5), [0.2, -0.5, 0.5, 0.5, 1.5]),
    card("1_magician", Some(1.5), [1.5, 1.2, 0.8, 1.5, 1.5]),
    card("2_priestess", Some(0.5), [0.0, 0.0, -0.5, 1.8, -0.5]),
    card("3_empress", Some(1.5), [0.5, 1.5, 1.8, 0.5, 1.5]),
    card("4_emperor", Some(1.2), [2.0, 1.5, 0.5, 0.5, 0.8]),
    card("5_hierophant", Some(0.5), [1.0, 0.0, 0.5, 1.5, 1.2]),
    card("6_lovers", Some(1.2), [0.5, 0.0, 2.0, 0.0, 1.5]),
    card("7_chariot", Some(1.2), [2.0, 0.8, 0.5, 1.0, 0.0]),
    card("8_strength", Some(1.0), [1.5, 0.5, 1.2, 0.8, 0.8]),
    card("9_hermit", Some(0.0), [-0.5, 0.0, -1.5, 1.8, -2.0]),
    card("10_wheel", Some(1.8), [1.2, 1.5, 1.0, 0.5, 0.8]),
    card("11_justice", Some(0.5), [1.2, 0.0, 0.2, 1.2, 0.0]),
    card("12_hanged_man", Some(-0.5), [-1.0, -0.8, -0.5, 1.0, -0.5]),
    card("13_death", Some(-1.5), [-1.5, -1.0, -1.5, -0.5, -1.0]),
    card("14_temperance", Some(1.2), [0.8, 0.5, 1.0, 1.0, 1.5]),
    card("15_devil", Some(-1.2), [0.5, 1.5, -2.0, -1.0, -1.5]),
    card("16_tower", Some(-2.0), [-2.0, -2.0, -2.0, -1.8, -2.0]),
    card("17_star", Some(1.5), [0.8, 0.5, 1.2, 1.2, 1.0]),
    card("18_moon", Some(-1.5), [-1.0, -0.8, -1.5, -1.2, -1.2]),
    card("19_sun", Some(2.0), [1.8, 1.5, 1.5, 1.2, 1.8]),
    card("20_judgement", Some(1.5), [1.5, 0.5, 0.8, 1.0, 0.5]),
    card("21_world", Some(2.0), [2.0, 1.8, 1.8, 1.5, 1.5]),
    card("w_ace", None, [2.0, 1.0, 0.5, 1.0, 0.8]),
    card("w_2", None, [1.0, 0.5, 0.2, 0.8, 0.5]),
    card("w_3", None, [1.5, 1.0, 0.5, 1.0, 0.5]),
    card("w_4", Some(1.5), [1.0, 1.0, 1.5, 0.2, 2.0]),
    card("w_5", Some(-0.5), [-1.2, -0.5, -0.8, -0.5, -2.0]),
    card("w_6", None, [2.0, 1.0, 0.5, 1.2, 1.8]),
    card("w_7", None, [1.0, 0.5, 0.2, 0.8, -0.5]),
    card("w_8", None, [1.8, 0.8, 0.8, 1.0, 0.5]),
    card("w_9", None, [0.5, 0.0, 0.0, 0.5, -0.8]),
    card("w_10", Some(-1.0), [-2.0, -0.8, -0.5, -1.2, -1.5]),
    card("w_page", None, [1.2, 0.5, 0.5, 1.2, 0.8]),
    card("w_knight", None, [1.8, 0.8, 0.8, 0.5, 0.5]),
    card("w_queen", None, [1.5, 1.0, 1.0, 0.5, 1.5]),
    card("w_king", None, [2.0, 1.5, 0.8, 0.5, 1.2]),
    card("c_ace", None, [0.5, 0.5, 2.0, 0.5, 1.5]),
    card("c_2", None, [0.5, 0.5, 2.0, 0.0, 1.8]),
    card("c_3", None, [0.5, 0.5, 1.2, 0.0, 2.0]),
    card("c_4", Some(-0.5), [-0.5, 0.0, -0.8, -0.5, -1.2]),
    card("c_5", Some(-1.0), [-0.8, -0.5, -1.8, -0.8, -1.5]),
    card("c_6", None, [0.0, 0.5, 1.5, 0.5, 1.8]),
    card("c_7", None, [-0.5, -0.5, -0.5, -1.2, 0.0]),
    card("c_8", None, [-1.0, -0.5, -1.5, 0.0, -1.2]),
    card("c_9", Some(1.5), [0.5, 1.5, 1.2, 0.0, 1.5]),
    card("c_10", Some(1.8), [0.5, 1.2, 2.0, 0.0, 1.8]),
    card("c_page", None, [0.5, 0.5, 1.5, 1.0, 1.0]),
    card("c_knight", None, [0.5, 0.5, 1.8, 0.5, 1.0]),
    card("c_queen", None, [0.5, 0.5, 1.8, 0.5, 1.5]),
    card("c_king", None, [1.0, 0.5, 1.5, 0.5, 1.5]),
    card("s_ace", None, [1.2, 0.5, 0.0, 2.0, 0.2]),
    card("s_2", None, [-0.5, 0.0, 0.0, 1.2, -0.5]),
    card("s_3", Some(-1.5), [-0.8, -0.5, -2.0, -0.5, -1.5]),
    card("s_4", Some(-0.5), [-1.2, 0.0, -0.5, 0.5, -2.0]),
    card("s_5", Some(-1.5), [-1.5, -1.0, -1.5, -0.5, -2.0]),
    card("s_6", None, [0.5, 0.5, 0.5, 1.0, 0.5]),
    card("s_7", None, [-0.8, -0.5, -1.0, 0.5, -1.2]),
    card("s_8", Some(-1.0), [-1.5, -0.8, -0.8, -1.2, -1.0]),
    card("s_9", Some(-1.5), [-1.2, -0.5, -1.2, -1.0, -1.5]),
    card("s_10", Some(-2.0), [-2.0, -1.5, -1.8, -1.5, -1.5]),
    card("s_page", None, [0.5, 0.2, 0.0, 1.8, 0.5]),
    card("s_knight", None, [1.5, 0.5, -0.5, 1.5, -0.8]),
    card("s_queen", None, [1.2, 0.8, 0.5, 1.5, 0.5]),
    card("s_king", None, [1.8, 1.0, 0.5, 1.8, 1.0]),
    card("p_ace", None, [1.5, 2.0, 0.5, 0.5, 0.5]),
    card("p_2", None, [0.5, 1.0, 0.5, 0.0, 0.8]),
    card("p_3", None, [1.8, 1.2, 0.5, 1.5, 1.5]),
    card("p_4", None, [0.8, 1.8, 0.0, 0.0, -0.8]),
    card("p_5", Some(-1.5), [-1.2, -2.0, -1.0, -0.5, -1.8]),
    card("p_6", None, [1.0, 1.5, 0.8, 0.5, 1.5]),
    card("p_7", None, [0.5, 1.0, 0.2, 0.5, 0.0]),
    card("p_8", None, [1.8, 1.5, 0.2, 1.8, 0.0]),
    card("p_9", Some(1.5), [1.0, 2.0, 0.8, 0.8, 0.5]),
    card("p_10", Some(1.8), [1.2, 2.0, 1.5, 0.5, 1.5]),
    card("p_page", None, [1.0, 1.2, 0.5, 1.5, 0.5]),
    card("p_knight", None, [1.5, 1.8, 0.2, 0.8, 0.0]),
    card("p_queen", None, [1.2, 2.0, 1.0, 0.5, 1.0]),
    card("p_king", None, [1.8, 2.0, 0.8, 0.5, 1.2]),
];

/// 按 slug 查偏移行
pub fn lookup(slug: &str) -> Option<&'static CardOffsets> {
    TAROT_OFFSETS.iter().find(|row| row.slug == slug)
}

/// 牌在某键上的基础偏移（未乘倍率）
pub fn base_offset(card: &TarotCard, key: OffsetKey) -> f64 {
    let Some(row) = lookup(card.slug()) else {
        warn!(card = %card, "塔罗牌不在偏移表中,按中性处理");
        return 0.0;
    };
    match key {
        OffsetKey::Overall => row.overall.unwrap_or(0.0),
        OffsetKey::Domain(domain) => row.domains.get(domain),
    }
}

/// 偏移表收录的全部 slug
pub fn known_slugs() -> impl Iterator<Item = &'static str> {
    TAROT_OFFSETS.iter().map(|row| row.slug)
}
