use crate::error::FortuneError;
use serde::{Deserialize, Serialize};

/// 评分参数（可由 JSON 部分覆写）
///
/// 缺省字段取内置默认值,默认值即线上评分口径
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    /// 八字基础分
    pub base_score: f64,

    /// 最终分下限
    pub min_score: f64,

    /// 最终分上限
    pub max_score: f64,

    /// 八字软上限（塔罗修正前）
    pub bazi_soft_cap: f64,

    /// 大阿卡纳塔罗倍率
    pub tarot_multiplier_major: f64,

    /// 小阿卡纳塔罗倍率
    pub tarot_multiplier_minor: f64,

    /// 逆位折减系数
    pub reversed_factor: f64,

    /// 低电量阈值（综合分低于此值进入低电量模式）
    pub low_power_threshold: f64,

    /// 身强阈值（加权分 >= 此值）
    pub strong_threshold: f64,

    /// 身中和阈值（加权分 >= 此值）
    pub balanced_threshold: f64,

    /// 出生/目标日期所在时区（节气换算用）
    pub utc_offset_hours: f64,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            base_score: 65.0,
            min_score: 30.0,
            max_score: 100.0,
            bazi_soft_cap: 90.0,
            tarot_multiplier_major: 6.0,
            tarot_multiplier_minor: 5.0,
            reversed_factor: 0.5,
            low_power_threshold: 45.0,
            strong_threshold: 50.0,
            balanced_threshold: 30.0,
            utc_offset_hours: 8.0,
        }
    }
}

impl ScoringProfile {
    /// 参数合法性校验
    ///
    /// # 返回
    /// - Err(Config): 非有限数、分数越出 u8、上下限倒置、软上限或低电量阈值越界、倍率非正、阈值倒置
    pub fn validate(&self) -> Result<(), FortuneError> {
        let fields = [
            ("base_score", self.base_score),
            ("min_score", self.min_score),
            ("max_score", self.max_score),
            ("bazi_soft_cap", self.bazi_soft_cap),
            ("tarot_multiplier_major", self.tarot_multiplier_major),
            ("tarot_multiplier_minor", self.tarot_multiplier_minor),
            ("reversed_factor", self.reversed_factor),
            ("low_power_threshold", self.low_power_threshold),
            ("strong_threshold", self.strong_threshold),
            ("balanced_threshold", self.balanced_threshold),
            ("utc_offset_hours", self.utc_offset_hours),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FortuneError::Config(format!("{}({}) 必须为有限数", name, value)));
        }
        // 最终分以 u8 输出
        if self.min_score < 0.0 || self.max_score > f64::from(u8::MAX) {
            return Err(FortuneError::Config(format!(
                "分数区间 [{}, {}] 必须位于 [0, {}]",
                self.min_score,
                self.max_score,
                u8::MAX
            )));
        }
        if self.min_score >= self.max_score {
            return Err(FortuneError::Config(format!(
                "min_score({}) 必须小于 max_score({})",
                self.min_score, self.max_score
            )));
        }
        if self.bazi_soft_cap < self.min_score || self.bazi_soft_cap > self.max_score {
            return Err(FortuneError::Config(format!(
                "bazi_soft_cap({}) 必须位于 [{}, {}]",
                self.bazi_soft_cap, self.min_score, self.max_score
            )));
        }
        if self.low_power_threshold < self.min_score || self.low_power_threshold > self.max_score {
            return Err(FortuneError::Config(format!(
                "low_power_threshold({}) 必须位于 [{}, {}]",
                self.low_power_threshold, self.min_score, self.max_score
            )));
        }
        if self.tarot_multiplier_major <= 0.0 || self.tarot_multiplier_minor <= 0.0 {
            return Err(FortuneError::Config("塔罗倍率必须为正数".to_string()));
        }
        if !(0.0..=1.0).contains(&self.reversed_factor) {
            return Err(FortuneError::Config(format!(
                "reversed_factor({}) 必须位于 [0, 1]",
                self.reversed_factor
            )));
        }
        if self.balanced_threshold > self.strong_threshold {
            return Err(FortuneError::Config(format!(
                "balanced_threshold({}) 不得高于 strong_threshold({})",
                self.balanced_threshold, self.strong_threshold
            )));
        }
        if !(-12.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(FortuneError::Config(format!(
                "utc_offset_hours({}) 超出时区范围",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }

    /// 塔罗倍率（正位口径,逆位由调用方再乘 reversed_factor）
    pub fn tarot_multiplier(&self, is_major: bool) -> f64 {
        if is_major {
            self.tarot_multiplier_major
        } else {
            self.tarot_multiplier_minor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScoringProfile::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let profile: ScoringProfile =
            serde_json::from_str(r#"{"base_score": 60, "utc_offset_hours": 9}"#).unwrap();
        assert_eq!(profile.base_score, 60.0);
        assert_eq!(profile.utc_offset_hours, 9.0);
        assert_eq!(profile.bazi_soft_cap, 90.0);
        assert_eq!(profile.tarot_multiplier_major, 6.0);
    }

    #[test]
    fn test_tarot_multiplier() {
        let profile = ScoringProfile::default();
        assert_eq!(profile.tarot_multiplier(true), 6.0);
        assert_eq!(profile.tarot_multiplier(false), 5.0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let profile = ScoringProfile {
            min_score: 100.0,
            max_score: 30.0,
            ..ScoringProfile::default()
        };
        assert!(matches!(profile.validate(), Err(FortuneError::Config(_))));

        let profile = ScoringProfile {
            bazi_soft_cap: 120.0,
            ..ScoringProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_score_range_must_fit_u8() {
        let profile = ScoringProfile {
            max_score: 300.0,
            bazi_soft_cap: 250.0,
            ..ScoringProfile::default()
        };
        assert!(matches!(profile.validate(), Err(FortuneError::Config(_))));

        let profile = ScoringProfile {
            min_score: -10.0,
            ..ScoringProfile::default()
        };
        assert!(profile.validate().is_err());

        let profile = ScoringProfile {
            max_score: 255.0,
            ..ScoringProfile::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_low_power_threshold_within_bounds() {
        for threshold in [10.0, 150.0] {
            let profile = ScoringProfile {
                low_power_threshold: threshold,
                ..ScoringProfile::default()
            };
            assert!(matches!(profile.validate(), Err(FortuneError::Config(_))));
        }
        let profile = ScoringProfile {
            low_power_threshold: 30.0,
            ..ScoringProfile::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let profile = ScoringProfile {
            base_score: f64::NAN,
            ..ScoringProfile::default()
        };
        assert!(profile.validate().is_err());
    }
}
