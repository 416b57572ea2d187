// ==========================================
// 电池运势核心 - 引擎层
// ==========================================
// 职责: 排盘、关系分析、身强弱、格局、塔罗、评分、排序
// 红线: 引擎均为纯计算,同输入必同输出
// ==========================================

pub mod body_strength;
pub mod chart;
pub mod orchestrator;
pub mod pattern;
pub mod ranking;
pub mod relation;
pub mod scoring;
pub mod tarot;

// 重导出核心引擎
pub use body_strength::{BodyStrengthClassifier, SeasonScore, StrengthBreakdown};
pub use chart::ChartCalculator;
pub use orchestrator::{DailyFortuneOrchestrator, DailyReading};
pub use pattern::{PatternMatch, PatternService};
pub use ranking::{DomainRanker, DomainRanking, RankedDomain, WritingTilt};
pub use relation::RelationAnalyzer;
pub use scoring::{FortuneScoringEngine, ScoringInput};
pub use tarot::{CardOffsets, OffsetKey};
