// ==========================================
// 电池运势核心 - 节气干支历
// ==========================================
// 换算委托 tyme4rs（寿星天文历算法,节气精确到时刻）
// 年柱: 立春换年; 月柱: 以节为界,交节当日整日归新月
// 时柱: 23:00 起即为次日子时,日柱与时干同步进位
// ==========================================
// 红线: 交节时刻以北京时间为准,其他时区先换算再查表
// ==========================================

use crate::calendar::SexagenaryCalendar;
use crate::domain::{FourPillars, Pillar};
use crate::error::FortuneError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use tracing::debug;
use tyme4rs::tyme::sixtycycle::SixtyCycle;
use tyme4rs::tyme::solar::{SolarDay, SolarTime};

/// 支持的公历年份范围（闭区间）
pub const SUPPORTED_YEARS: (i32, i32) = (1900, 2100);

/// 默认时区: 北京时间 UTC+8
pub const DEFAULT_UTC_OFFSET_HOURS: f64 = 8.0;

fn to_pillar(cycle: SixtyCycle) -> Pillar {
    Pillar::from_cycle_index(cycle.get_index())
}

// ==========================================
// SolarTermCalendar - 节气干支历
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermCalendar {
    /// 输入时间所在时区相对 UTC 的小时偏移
    utc_offset_hours: f64,
}

impl Default for SolarTermCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_UTC_OFFSET_HOURS)
    }
}

impl SolarTermCalendar {
    pub fn new(utc_offset_hours: f64) -> Self {
        Self { utc_offset_hours }
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// 当地时刻 → 北京时间
    pub fn to_beijing_time(&self, local: NaiveDateTime) -> NaiveDateTime {
        let shift = (DEFAULT_UTC_OFFSET_HOURS - self.utc_offset_hours) * 3600.0;
        local + Duration::seconds(shift.round() as i64)
    }

    fn check_range(&self, year: i32, input: &dyn std::fmt::Display) -> Result<(), FortuneError> {
        let (min, max) = SUPPORTED_YEARS;
        if year < min || year > max {
            return Err(FortuneError::chart_failed(
                input.to_string(),
                format!("年份 {} 超出支持范围 {}-{}", year, min, max),
            ));
        }
        Ok(())
    }

    fn solar_time(at: NaiveDateTime) -> Result<SolarTime, FortuneError> {
        SolarTime::new(
            at.year() as isize,
            at.month() as usize,
            at.day() as usize,
            at.hour() as usize,
            at.minute() as usize,
            at.second() as usize,
        )
        .map_err(|e| FortuneError::chart_failed(at.to_string(), e))
    }
}

impl SexagenaryCalendar for SolarTermCalendar {
    fn pillars_for_date(&self, date: NaiveDate) -> Result<FourPillars, FortuneError> {
        self.check_range(date.year(), &date)?;

        let day = SolarDay::new(date.year() as isize, date.month() as usize, date.day() as usize)
            .map_err(|e| FortuneError::chart_failed(date.to_string(), e))?
            .get_sixty_cycle_day();

        // 未给时刻: 取当日 00:00 子时
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| FortuneError::chart_failed(date.to_string(), "无效时刻"))?;
        let hour = Self::solar_time(midnight)?.get_sixty_cycle_hour();

        let pillars = FourPillars {
            year: to_pillar(day.get_year()),
            month: to_pillar(day.get_month()),
            day: to_pillar(day.get_sixty_cycle()),
            hour: to_pillar(hour.get_sixty_cycle()),
        };
        debug!(%date, year = %pillars.year, month = %pillars.month, day = %pillars.day, "按日排盘");
        Ok(pillars)
    }

    fn pillars_at(&self, at: NaiveDateTime) -> Result<FourPillars, FortuneError> {
        self.check_range(at.year(), &at)?;

        // 年/月看交节时刻（北京时间）,日/时看当地民用时
        let seasonal = Self::solar_time(self.to_beijing_time(at))?.get_sixty_cycle_hour();
        let local = Self::solar_time(at)?.get_sixty_cycle_hour();

        let pillars = FourPillars {
            year: to_pillar(seasonal.get_year()),
            month: to_pillar(seasonal.get_month()),
            day: to_pillar(local.get_day()),
            hour: to_pillar(local.get_sixty_cycle()),
        };
        debug!(
            %at,
            year = %pillars.year,
            month = %pillars.month,
            day = %pillars.day,
            hour = %pillars.hour,
            "按时刻排盘"
        );
        Ok(pillars)
    }
}
