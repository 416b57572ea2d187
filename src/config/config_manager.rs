// ==========================================
// 电池运势核心 - 配置管理器
// ==========================================
// 职责: 评分参数加载与校验
// 查找顺序: 显式路径 → 环境变量 → 用户配置目录 → 内置默认
// ==========================================

use crate::config::scoring_profile::ScoringProfile;
use crate::error::FortuneError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "FORTUNE_BATTERY_CONFIG";

/// 用户配置目录下的子目录名
pub const CONFIG_DIR_NAME: &str = "fortune-battery";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "scoring.json";

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 显式路径或环境变量指定的文件
    File(PathBuf),
    /// 用户配置目录中的默认文件
    UserDir(PathBuf),
    /// 内置默认值
    BuiltIn,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    profile: ScoringProfile,
    source: ConfigSource,
}

impl ConfigManager {
    /// 按查找顺序加载评分参数
    ///
    /// # 参数
    /// - explicit_path: 调用方显式指定的配置文件（优先级最高）
    ///
    /// # 返回
    /// - Err(Config): 指定文件不存在/无法解析,或参数校验失败
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, FortuneError> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        if let Ok(raw) = env::var(CONFIG_ENV_VAR) {
            let raw = raw.trim();
            if !raw.is_empty() {
                debug!(env = CONFIG_ENV_VAR, path = raw, "使用环境变量指定的配置");
                return Self::from_file(Path::new(raw));
            }
        }

        if let Some(path) = Self::default_config_path() {
            if path.is_file() {
                let profile = Self::read_profile(&path)?;
                info!(path = %path.display(), "已加载用户目录配置");
                return Ok(Self {
                    profile,
                    source: ConfigSource::UserDir(path),
                });
            }
        }

        debug!("未找到配置文件,使用内置默认参数");
        Ok(Self::with_defaults())
    }

    /// 从指定文件加载（文件必须存在）
    pub fn from_file(path: &Path) -> Result<Self, FortuneError> {
        let profile = Self::read_profile(path)?;
        info!(path = %path.display(), "已加载配置文件");
        Ok(Self {
            profile,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    /// 内置默认参数
    pub fn with_defaults() -> Self {
        Self {
            profile: ScoringProfile::default(),
            source: ConfigSource::BuiltIn,
        }
    }

    /// 用户配置目录中的默认配置路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    fn read_profile(path: &Path) -> Result<ScoringProfile, FortuneError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FortuneError::Config(format!("无法读取配置文件 {}: {}", path.display(), e))
        })?;
        let profile: ScoringProfile = serde_json::from_str(&raw)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn into_profile(self) -> ScoringProfile {
        self.profile
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 当前参数快照（JSON）
    pub fn snapshot(&self) -> Result<String, FortuneError> {
        Ok(serde_json::to_string_pretty(&self.profile)?)
    }
}
