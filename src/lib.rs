// ==========================================
// 电池运势核心 - 核心库
// ==========================================
// 八字 + 塔罗确定性评分: 出生日期 + 当日抽牌 → 综合分与五领域分
// 系统定位: 纯计算核心,不含 HTTP / 存储 / 文案生成
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 历法层 - 公历 → 干支
pub mod calendar;

// 引擎层 - 评分规则
pub mod engine;

// 配置层 - 评分参数
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BaziChart, BodyStrength, Branch, BranchRelation, DailyFlow, Domain, DomainMap, DomainScores,
    Element, EnergyPhase, FortuneResult, FourPillars, Gender, GodCategory, ModifierBreakdown,
    Orientation, Pillar, Stem, TarotCard, TarotDraw, TenGod,
};

// 历法
pub use calendar::{SexagenaryCalendar, SolarTermCalendar};

// 引擎
pub use engine::{
    BodyStrengthClassifier, ChartCalculator, DailyFortuneOrchestrator, DailyReading,
    DomainRanker, DomainRanking, FortuneScoringEngine, PatternService, RelationAnalyzer,
    ScoringInput, WritingTilt,
};

// 配置
pub use config::{ConfigManager, ConfigSource, ScoringProfile};

// 展示标签
pub use i18n::ReadingLabels;

// 错误
pub use error::FortuneError;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "电池运势";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
