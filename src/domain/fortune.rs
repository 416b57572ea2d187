// ==========================================
// 电池运势核心 - 评分结果
// ==========================================
// FortuneResult 为不可变值对象: 每次 (命盘, 抽牌) 计算新建一份
// ==========================================

use crate::domain::types::{BodyStrength, Domain};
use serde::{Deserialize, Serialize};

// ==========================================
// DomainMap - 五领域定长映射
// ==========================================
// 五个领域键编译期固定,不会缺失或拼错
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainMap<T> {
    pub career: T,
    pub wealth: T,
    pub love: T,
    pub study: T,
    pub social: T,
}

impl<T: Copy> DomainMap<T> {
    /// 逐领域构造
    pub fn from_fn(mut f: impl FnMut(Domain) -> T) -> Self {
        Self {
            career: f(Domain::Career),
            wealth: f(Domain::Wealth),
            love: f(Domain::Love),
            study: f(Domain::Study),
            social: f(Domain::Social),
        }
    }

    pub fn get(&self, domain: Domain) -> T {
        match domain {
            Domain::Career => self.career,
            Domain::Wealth => self.wealth,
            Domain::Love => self.love,
            Domain::Study => self.study,
            Domain::Social => self.social,
        }
    }

    /// 按 career, wealth, love, study, social 顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Domain, T)> + '_ {
        Domain::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// 各领域最终分 (30-100)
pub type DomainScores = DomainMap<u8>;

// ==========================================
// ModifierBreakdown - 修正值诊断
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifierBreakdown {
    pub overall: f64,
    #[serde(flatten)]
    pub domains: DomainMap<f64>,
}

// ==========================================
// FortuneResult - 引擎输出
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneResult {
    /// 综合分 (30-100)
    pub overall_score: u8,
    pub body_strength: BodyStrength,
    /// 低电量模式: overall_score < 45
    pub low_power_mode: bool,
    pub domain_scores: DomainScores,

    // ===== 诊断字段 =====
    /// overall = 八字基础修正合计; 领域 = 领域修正
    pub bazi_modifiers: ModifierBreakdown,
    pub tarot_modifiers: ModifierBreakdown,
    pub domain_tarot_contribution: DomainMap<f64>,
    pub is_major_arcana: bool,
}

impl FortuneResult {
    pub fn domain_score(&self, domain: Domain) -> u8 {
        self.domain_scores.get(domain)
    }
}
