// ==========================================
// 测试辅助函数
// ==========================================
// 用途: 为集成测试构造日期、四柱与评分输入
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use fortune_battery::{
    BodyStrength, BranchRelation, EnergyPhase, FourPillars, Gender, Pillar, ScoringInput,
    TarotDraw, TenGod,
};

/// 构造日期
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 由干支字符串构造柱
pub fn pillar(raw: &str) -> Pillar {
    raw.parse().unwrap()
}

/// 由年/月/日干支构造四柱（时柱取甲子）
pub fn pillars(year: &str, month: &str, day: &str) -> FourPillars {
    FourPillars {
        year: pillar(year),
        month: pillar(month),
        day: pillar(day),
        hour: pillar("甲子"),
    }
}

/// 构造评分输入
pub fn scoring_input(
    body_strength: BodyStrength,
    energy_phase: EnergyPhase,
    branch_relation: BranchRelation,
    nobleman_score: u8,
    stem_god: TenGod,
    branch_god: TenGod,
    draw: TarotDraw,
) -> ScoringInput {
    ScoringInput {
        body_strength,
        energy_phase,
        branch_relation,
        nobleman_score,
        stem_god,
        branch_god,
        draw,
        gender: Gender::Male,
    }
}

pub const ALL_BODY_STRENGTHS: [BodyStrength; 3] =
    [BodyStrength::Strong, BodyStrength::Balanced, BodyStrength::Weak];

pub const ALL_RELATIONS: [BranchRelation; 6] = [
    BranchRelation::Clash,
    BranchRelation::Combine,
    BranchRelation::TripleCombine,
    BranchRelation::Harm,
    BranchRelation::Punishment,
    BranchRelation::None,
];
