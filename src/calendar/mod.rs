// ==========================================
// 电池运势核心 - 干支历换算层
// ==========================================
// 职责: 公历 → 年/月/日/时四柱（以节气为月界、立春为年界）
// 边界: 评分核心只依赖 SexagenaryCalendar trait,换算实现可替换
// ==========================================

pub mod solar_term;

pub use solar_term::{SolarTermCalendar, SUPPORTED_YEARS};

use crate::domain::FourPillars;
use crate::error::FortuneError;
use chrono::{NaiveDate, NaiveDateTime};

// ==========================================
// SexagenaryCalendar - 干支历换算接口
// ==========================================
pub trait SexagenaryCalendar: Send + Sync {
    /// 按日换算（交节当日即属新月,时柱取子时）
    fn pillars_for_date(&self, date: NaiveDate) -> Result<FourPillars, FortuneError>;

    /// 按时刻换算（交节精确到时刻）
    fn pillars_at(&self, at: NaiveDateTime) -> Result<FourPillars, FortuneError>;
}

// ==========================================
// CivilMoment - 公历输入
// ==========================================
/// 公历日期或日期时间（ISO 8601）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CivilMoment {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CivilMoment {
    /// 解析 ISO 8601 日期或日期时间
    ///
    /// 支持: "2000-01-01"、"2000-01-01T08:30"、"2000-01-01T08:30:00"、"2000-01-01 08:30:00"
    pub fn parse(raw: &str) -> Result<Self, FortuneError> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(CivilMoment::Date(date));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(at) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Ok(CivilMoment::DateTime(at));
            }
        }
        Err(FortuneError::chart_failed(raw, "无法解析的 ISO 日期"))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            CivilMoment::Date(date) => *date,
            CivilMoment::DateTime(at) => at.date(),
        }
    }

    /// 按精度选择换算方式
    pub fn pillars<C: SexagenaryCalendar + ?Sized>(
        &self,
        calendar: &C,
    ) -> Result<FourPillars, FortuneError> {
        match self {
            CivilMoment::Date(date) => calendar.pillars_for_date(*date),
            CivilMoment::DateTime(at) => calendar.pillars_at(*at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_civil_moment() {
        assert!(matches!(
            CivilMoment::parse("2000-01-01").unwrap(),
            CivilMoment::Date(_)
        ));
        assert!(matches!(
            CivilMoment::parse("2000-01-01T08:30").unwrap(),
            CivilMoment::DateTime(_)
        ));
        assert!(matches!(
            CivilMoment::parse("2000-01-01 08:30:15").unwrap(),
            CivilMoment::DateTime(_)
        ));
        let err = CivilMoment::parse("2000-13-01").unwrap_err();
        assert!(matches!(err, FortuneError::ChartCalculationFailed { .. }));
        assert!(CivilMoment::parse("yesterday").is_err());
    }
}
