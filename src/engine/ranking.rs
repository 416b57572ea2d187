// ==========================================
// 电池运势核心 - 领域排序引擎
// ==========================================
// 职责: 五领域排序,选出"快充"（最高）与"耗电"（最低）领域
// 排序键（全部降序）:
// 1) 领域分
// 2) 塔罗领域贡献
// 3) 是否大阿卡纳
// 4) 能量强度 = max(天干十神强度, 地支十神强度)
// 5) 静态优先级 career > wealth > love > study > social
// ==========================================

use crate::domain::{Domain, FortuneResult, TenGod};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// RankedDomain - 排序条目
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDomain {
    pub domain: Domain,
    pub score: u8,
    pub tarot_contribution: f64,
    pub is_major_arcana: bool,
    pub energy_intensity: u8,
}

// ==========================================
// DomainRanking - 排序结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRanking {
    /// 从高到低
    pub ordered: Vec<RankedDomain>,
}

impl DomainRanking {
    /// 快充领域（最高）
    pub fn fast_charge(&self) -> Option<Domain> {
        self.ordered.first().map(|r| r.domain)
    }

    /// 耗电领域（最低）
    pub fn power_drain(&self) -> Option<Domain> {
        self.ordered.last().map(|r| r.domain)
    }

    pub fn domains(&self) -> Vec<Domain> {
        self.ordered.iter().map(|r| r.domain).collect()
    }
}

// ==========================================
// DomainRanker - 领域排序器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainRanker;

impl DomainRanker {
    pub fn new() -> Self {
        Self
    }

    /// 对评分结果的五领域排序
    pub fn rank(&self, result: &FortuneResult, stem_god: TenGod, branch_god: TenGod) -> DomainRanking {
        let energy_intensity = stem_god.energy_intensity().max(branch_god.energy_intensity());

        let mut ordered: Vec<RankedDomain> = Domain::ALL
            .into_iter()
            .map(|domain| RankedDomain {
                domain,
                score: result.domain_score(domain),
                tarot_contribution: result.domain_tarot_contribution.get(domain),
                is_major_arcana: result.is_major_arcana,
                energy_intensity,
            })
            .collect();

        ordered.sort_by(|a, b| self.compare(a, b));
        DomainRanking { ordered }
    }

    /// Ordering::Less 表示 a 排在 b 之前
    fn compare(&self, a: &RankedDomain, b: &RankedDomain) -> Ordering {
        b.score
            .cmp(&a.score)
            .then_with(|| {
                b.tarot_contribution
                    .partial_cmp(&a.tarot_contribution)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| b.is_major_arcana.cmp(&a.is_major_arcana))
            .then_with(|| b.energy_intensity.cmp(&a.energy_intensity))
            .then_with(|| b.domain.static_priority().cmp(&a.domain.static_priority()))
    }
}

// ==========================================
// WritingTilt - 文案基调
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingTilt {
    SunnyWitty,
    ConfidentLight,
    SteadyWarm,
    FocusedSharp,
    GentleGuardrails,
    LowPowerSoft,
}

impl WritingTilt {
    /// 由综合分选择文案基调
    pub fn from_overall(score: u8) -> Self {
        match score {
            90.. => WritingTilt::SunnyWitty,
            80..=89 => WritingTilt::ConfidentLight,
            70..=79 => WritingTilt::SteadyWarm,
            60..=69 => WritingTilt::FocusedSharp,
            50..=59 => WritingTilt::GentleGuardrails,
            _ => WritingTilt::LowPowerSoft,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WritingTilt::SunnyWitty => "sunny_witty",
            WritingTilt::ConfidentLight => "confident_light",
            WritingTilt::SteadyWarm => "steady_warm",
            WritingTilt::FocusedSharp => "focused_sharp",
            WritingTilt::GentleGuardrails => "gentle_guardrails",
            WritingTilt::LowPowerSoft => "low_power_soft",
        }
    }
}

impl fmt::Display for WritingTilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
