// ==========================================
// 电池运势核心 - 命盘与流日实体
// ==========================================

use crate::domain::ganzhi::{FourPillars, Pillar, Stem};
use crate::domain::types::{BodyStrength, BranchRelation, EnergyPhase, TenGod};
use serde::{Deserialize, Serialize};

// ==========================================
// BaziChart - 本命盘
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziChart {
    pub day_master: Stem,
    pub pillars: FourPillars,
    pub body_strength: BodyStrength,
}

impl BaziChart {
    pub fn year_pillar(&self) -> Pillar {
        self.pillars.year
    }

    pub fn month_pillar(&self) -> Pillar {
        self.pillars.month
    }

    pub fn day_pillar(&self) -> Pillar {
        self.pillars.day
    }

    pub fn hour_pillar(&self) -> Pillar {
        self.pillars.hour
    }
}

// ==========================================
// DailyFlow - 流日分析
// ==========================================
// 评分引擎的全部八字输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFlow {
    pub chart: BaziChart,

    pub flow_year: Pillar,
    pub flow_month: Pillar,
    pub flow_day: Pillar,

    /// 日主 vs 流日天干
    pub stem_god: TenGod,
    /// 日主 vs 流日地支本气
    pub branch_god: TenGod,
    /// 日主在流日地支的十二长生
    pub energy_phase: EnergyPhase,
    /// 本命日支 vs 流日地支
    pub branch_relation: BranchRelation,
    /// 天乙贵人分 (0-20)
    pub nobleman_score: u8,
}

impl DailyFlow {
    pub fn body_strength(&self) -> BodyStrength {
        self.chart.body_strength
    }
}
