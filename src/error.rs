// ==========================================
// 电池运势核心 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 标签错误必须显式失败,不得静默映射为 0 分
// ==========================================

use thiserror::Error;

/// 运势核心错误类型
#[derive(Error, Debug)]
pub enum FortuneError {
    // ===== 排盘错误 =====
    /// 历法换算失败（日期非法或超出支持范围）
    #[error("排盘失败: input={input}, reason={reason}")]
    ChartCalculationFailed { input: String, reason: String },

    // ===== 标签错误 =====
    /// 未知的天干/地支/十神/长生/关系标签
    #[error("未知标签: kind={kind}, value={value}")]
    UnknownLabel { kind: &'static str, value: String },

    // ===== 输入错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 配置错误 =====
    #[error("配置错误: {0}")]
    Config(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FortuneError {
    /// 构造未知标签错误
    pub fn unknown_label(kind: &'static str, value: impl Into<String>) -> Self {
        FortuneError::UnknownLabel {
            kind,
            value: value.into(),
        }
    }

    /// 构造排盘失败错误
    pub fn chart_failed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        FortuneError::ChartCalculationFailed {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for FortuneError {
    fn from(err: serde_json::Error) -> Self {
        FortuneError::Config(format!("JSON 解析失败: {}", err))
    }
}

impl From<std::io::Error> for FortuneError {
    fn from(err: std::io::Error) -> Self {
        FortuneError::Config(format!("文件读取失败: {}", err))
    }
}
