// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// 翻译仅用于展示,不参与评分
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 红线: 一律显式传入 locale,不读写全局语言
// ==========================================

use crate::domain::{BodyStrength, DailyFlow, Domain, FortuneResult, Stem, TenGod};
use crate::engine::DomainRanking;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 规范化语言代码,不支持的语言回退到默认语言
///
/// 接受 "en"、"en-US"、"zh"、"zh-CN" 等写法（大小写不敏感）
pub fn normalize_locale(raw: &str) -> &'static str {
    let lower = raw.trim().to_ascii_lowercase();
    let primary = lower.split(['-', '_']).next().unwrap_or_default();
    match primary {
        "zh" => "zh-CN",
        "en" => "en",
        _ => {
            warn!(locale = raw, fallback = DEFAULT_LOCALE, "不支持的语言,使用默认语言");
            DEFAULT_LOCALE
        }
    }
}

/// 翻译消息（指定语言）
///
/// # 示例
/// ```no_run
/// use fortune_battery::i18n::t_in;
/// let msg = t_in("domain.career", "en");
/// ```
pub fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数,占位符写作 %{name}）
///
/// # 示例
/// ```no_run
/// use fortune_battery::i18n::t_with_args;
/// let msg = t_with_args("reading.summary", "zh-CN", &[("score", "72"), ("fast", "事业"), ("drain", "人际")]);
/// ```
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t_in(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// ==========================================
// 领域标签
// ==========================================

pub fn ten_god_name(god: TenGod, locale: &str) -> String {
    t_in(&format!("ten_god.{}.name", god.key()), locale)
}

pub fn ten_god_analysis(god: TenGod, locale: &str) -> String {
    t_in(&format!("ten_god.{}.analysis", god.key()), locale)
}

pub fn body_strength_name(strength: BodyStrength, locale: &str) -> String {
    t_in(&format!("body_strength.{}", strength.key()), locale)
}

pub fn domain_name(domain: Domain, locale: &str) -> String {
    t_in(&format!("domain.{}", domain.key()), locale)
}

pub fn stem_name(stem: Stem, locale: &str) -> String {
    t_in(&format!("stem.{}", stem.key()), locale)
}

// ==========================================
// ReadingLabels - 每日运势展示标签
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodLabel {
    pub name: String,
    pub analysis: String,
}

impl TenGodLabel {
    fn new(god: TenGod, locale: &str) -> Self {
        Self {
            name: ten_god_name(god, locale),
            analysis: ten_god_analysis(god, locale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingLabels {
    pub locale: String,
    pub day_master: String,
    pub body_strength: String,
    pub stem_god: TenGodLabel,
    pub branch_god: TenGodLabel,
    pub fast_charge: Option<String>,
    pub power_drain: Option<String>,
    /// 仅低电量模式下给出
    pub low_power: Option<String>,
    pub summary: String,
}

impl ReadingLabels {
    /// 由流日、评分与排序结果生成展示标签
    pub fn build(
        flow: &DailyFlow,
        result: &FortuneResult,
        ranking: &DomainRanking,
        locale: &str,
    ) -> Self {
        let locale = normalize_locale(locale);
        let fast_charge = ranking.fast_charge().map(|d| domain_name(d, locale));
        let power_drain = ranking.power_drain().map(|d| domain_name(d, locale));

        let score = result.overall_score.to_string();
        let summary = t_with_args(
            "reading.summary",
            locale,
            &[
                ("score", score.as_str()),
                ("fast", fast_charge.as_deref().unwrap_or("-")),
                ("drain", power_drain.as_deref().unwrap_or("-")),
            ],
        );

        Self {
            locale: locale.to_string(),
            day_master: stem_name(flow.chart.day_master, locale),
            body_strength: body_strength_name(result.body_strength, locale),
            stem_god: TenGodLabel::new(flow.stem_god, locale),
            branch_god: TenGodLabel::new(flow.branch_god, locale),
            fast_charge,
            power_drain,
            low_power: result
                .low_power_mode
                .then(|| t_in("common.low_power", locale)),
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en"), "en");
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("EN_gb"), "en");
        assert_eq!(normalize_locale("zh"), "zh-CN");
        assert_eq!(normalize_locale("zh-CN"), "zh-CN");
        assert_eq!(normalize_locale("fr"), DEFAULT_LOCALE);
        assert_eq!(normalize_locale(""), DEFAULT_LOCALE);
        for locale in SUPPORTED_LOCALES {
            assert_eq!(normalize_locale(locale), locale);
        }
    }

    #[test]
    fn test_label_names() {
        assert_eq!(ten_god_name(TenGod::QiSha, "zh-CN"), "七杀");
        assert_eq!(domain_name(Domain::Love, "zh-CN"), "感情");
        assert_eq!(body_strength_name(BodyStrength::Weak, "zh-CN"), "身弱");
        assert_eq!(stem_name(Stem::Gui, "zh-CN"), "癸");

        assert_eq!(ten_god_name(TenGod::ZhengYin, "en"), "Direct Resource");
        assert_eq!(domain_name(Domain::Wealth, "en"), "Wealth");
        assert_eq!(stem_name(Stem::Gui, "en"), "Gui");
    }

    #[test]
    fn test_every_ten_god_translated() {
        for god in TenGod::ALL {
            for locale in SUPPORTED_LOCALES {
                let key = format!("ten_god.{}.analysis", god.key());
                let text = t_in(&key, locale);
                assert!(!text.ends_with(&key), "{} 缺少 {} 翻译", locale, key);
            }
        }
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_with_args(
            "reading.summary",
            "zh-CN",
            &[("score", "72"), ("fast", "事业"), ("drain", "人际")],
        );
        assert!(msg.contains("72%"));
        assert!(msg.contains("事业"));
        assert!(!msg.contains("%{"));

        let msg = t_with_args(
            "reading.summary",
            "en",
            &[("score", "72"), ("fast", "Career"), ("drain", "Social")],
        );
        assert!(msg.starts_with("Battery at 72%"));
    }
}
