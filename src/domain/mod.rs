// ==========================================
// 电池运势核心 - 领域模型层
// ==========================================
// 职责: 定义天干地支、十神、命盘、评分结果等实体与封闭枚举
// 红线: 不含历法换算,不含评分逻辑
// ==========================================

pub mod chart;
pub mod fortune;
pub mod ganzhi;
pub mod tarot;
pub mod types;

// 重导出核心类型
pub use chart::{BaziChart, DailyFlow};
pub use fortune::{DomainMap, DomainScores, FortuneResult, ModifierBreakdown};
pub use ganzhi::{Branch, FourPillars, Pillar, Stem};
pub use tarot::{TarotCard, TarotDraw};
pub use types::{
    BodyStrength, BranchRelation, Domain, Element, ElementRelation, EnergyPhase, Gender,
    GodCategory, Orientation, Polarity, TenGod,
};
