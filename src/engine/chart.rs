// ==========================================
// 电池运势核心 - 排盘引擎
// ==========================================
// 职责: 公历出生日期 → 本命四柱 + 身强弱; 目标日期 → 流日分析
// 输入: 出生日期（可含时刻）、目标日期（缺省为今日）
// 输出: BaziChart / DailyFlow
// ==========================================
// 红线: 历法换算失败必须返回 ChartCalculationFailed,不得回落默认命盘
// ==========================================

use crate::calendar::{CivilMoment, SexagenaryCalendar, SolarTermCalendar};
use crate::config::ScoringProfile;
use crate::domain::{BaziChart, DailyFlow, FourPillars};
use crate::engine::body_strength::BodyStrengthClassifier;
use crate::engine::relation::RelationAnalyzer;
use crate::error::FortuneError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, instrument};

// ==========================================
// ChartCalculator - 排盘引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct ChartCalculator<C = SolarTermCalendar> {
    calendar: C,
    classifier: BodyStrengthClassifier,
    relations: RelationAnalyzer,
}

impl Default for ChartCalculator<SolarTermCalendar> {
    fn default() -> Self {
        Self::new(&ScoringProfile::default())
    }
}

impl ChartCalculator<SolarTermCalendar> {
    /// 使用节气历（时区取自评分参数）
    pub fn new(profile: &ScoringProfile) -> Self {
        Self::with_calendar(SolarTermCalendar::new(profile.utc_offset_hours), profile)
    }
}

impl<C: SexagenaryCalendar> ChartCalculator<C> {
    /// 注入自定义历法换算
    pub fn with_calendar(calendar: C, profile: &ScoringProfile) -> Self {
        Self {
            calendar,
            classifier: BodyStrengthClassifier::new(profile),
            relations: RelationAnalyzer::new(),
        }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn classifier(&self) -> &BodyStrengthClassifier {
        &self.classifier
    }

    pub fn relations(&self) -> &RelationAnalyzer {
        &self.relations
    }

    // ==========================================
    // 本命盘
    // ==========================================

    /// 按出生日期排盘（时辰未知,时柱取子时）
    #[instrument(skip(self))]
    pub fn calculate_bazi(&self, birth: NaiveDate) -> Result<BaziChart, FortuneError> {
        let pillars = self.calendar.pillars_for_date(birth)?;
        Ok(self.chart_from_pillars(pillars))
    }

    /// 按出生时刻排盘
    #[instrument(skip(self))]
    pub fn calculate_bazi_at(&self, birth: NaiveDateTime) -> Result<BaziChart, FortuneError> {
        let pillars = self.calendar.pillars_at(birth)?;
        Ok(self.chart_from_pillars(pillars))
    }

    /// 按 ISO 8601 字符串排盘
    pub fn calculate_bazi_iso(&self, birth: &str) -> Result<BaziChart, FortuneError> {
        let pillars = CivilMoment::parse(birth)?.pillars(&self.calendar)?;
        Ok(self.chart_from_pillars(pillars))
    }

    /// 由已知四柱构造命盘
    pub fn chart_from_pillars(&self, pillars: FourPillars) -> BaziChart {
        let day_master = pillars.day_master();
        let body_strength = self.classifier.classify(day_master.element(), &pillars);
        debug!(%day_master, ?pillars, %body_strength, "排盘完成");
        BaziChart {
            day_master,
            pillars,
            body_strength,
        }
    }

    // ==========================================
    // 流日分析
    // ==========================================

    /// 流日分析
    ///
    /// # 参数
    /// - birth: 出生日期
    /// - target: 目标日期（None = 今日）
    #[instrument(skip(self))]
    pub fn analyze_daily_flow(
        &self,
        birth: NaiveDate,
        target: Option<NaiveDate>,
    ) -> Result<DailyFlow, FortuneError> {
        let chart = self.calculate_bazi(birth)?;
        let target = target.unwrap_or_else(|| Local::now().date_naive());
        self.analyze_flow_for_chart(&chart, target)
    }

    /// 对已有命盘做流日分析
    pub fn analyze_flow_for_chart(
        &self,
        chart: &BaziChart,
        target: NaiveDate,
    ) -> Result<DailyFlow, FortuneError> {
        let flow = self.calendar.pillars_for_date(target)?;
        let day_master = chart.day_master;
        let flow_day_branch = flow.day.branch;

        let stem_god = self.relations.ten_god(day_master, flow.day.stem);
        let branch_god = self
            .relations
            .ten_god(day_master, flow_day_branch.main_hidden_stem());
        let energy_phase = self.relations.energy_phase(day_master, flow_day_branch);
        let natal_day_branch = chart.pillars.day.branch;
        let branch_relation = self
            .relations
            .branch_relationship(natal_day_branch, flow_day_branch);
        let nobleman_score = self.relations.nobleman_score(
            day_master,
            chart.pillars.year.stem,
            flow_day_branch,
            natal_day_branch,
        );

        debug!(
            %target,
            flow_day = %flow.day,
            %stem_god,
            %branch_god,
            %energy_phase,
            %branch_relation,
            nobleman_score,
            "流日分析完成"
        );

        Ok(DailyFlow {
            chart: chart.clone(),
            flow_year: flow.year,
            flow_month: flow.month,
            flow_day: flow.day,
            stem_god,
            branch_god,
            energy_phase,
            branch_relation,
            nobleman_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BranchRelation, EnergyPhase, Stem, TenGod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator() -> ChartCalculator {
        ChartCalculator::default()
    }

    #[test]
    fn test_day_master_from_day_pillar() {
        let calc = calculator();
        let chart = calc.calculate_bazi(date(2000, 1, 1)).unwrap();
        assert_eq!(chart.day_master, Stem::Wu);
        assert_eq!(chart.day_pillar().to_string(), "戊午");
    }

    #[test]
    fn test_flow_on_birthday_is_self_relation() {
        let calc = calculator();
        let flow = calc
            .analyze_daily_flow(date(2000, 1, 1), Some(date(2000, 1, 1)))
            .unwrap();
        // 戊日主见流日戊午: 天干比肩,午藏丁为正印,戊在午帝旺,午午自刑
        assert_eq!(flow.stem_god, TenGod::BiJian);
        assert_eq!(flow.branch_god, TenGod::ZhengYin);
        assert_eq!(flow.energy_phase, EnergyPhase::DiWang);
        assert_eq!(flow.branch_relation, BranchRelation::Punishment);
        assert_eq!(flow.flow_day, flow.chart.day_pillar());
    }

    #[test]
    fn test_out_of_range_birth_fails() {
        let calc = calculator();
        let err = calc.calculate_bazi(date(1850, 6, 1)).unwrap_err();
        assert!(matches!(err, FortuneError::ChartCalculationFailed { .. }));
        assert!(calc.calculate_bazi_iso("not-a-date").is_err());
    }
}
