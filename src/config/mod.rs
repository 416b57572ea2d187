// ==========================================
// 电池运势核心 - 配置层
// ==========================================
// 职责: 评分常量与阈值的集中管理,支持文件覆写
// 存储: JSON 文件（可选）
// ==========================================

pub mod config_manager;
pub mod scoring_profile;

// 重导出核心配置类型
pub use config_manager::{ConfigManager, ConfigSource, CONFIG_ENV_VAR};
pub use scoring_profile::ScoringProfile;
