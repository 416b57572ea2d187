// ==========================================
// 电池运势核心 - 引擎编排器
// ==========================================
// 主流程: 排盘 → 流日分析 → 评分 → 领域排序 → 文案基调 → 展示标签
// ==========================================

use crate::calendar::{SexagenaryCalendar, SolarTermCalendar};
use crate::config::ScoringProfile;
use crate::domain::{BaziChart, DailyFlow, FortuneResult, Gender, TarotDraw};
use crate::engine::{
    ChartCalculator, DomainRanker, DomainRanking, FortuneScoringEngine, ScoringInput,
    WritingTilt,
};
use crate::error::FortuneError;
use crate::i18n::{self, ReadingLabels};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ==========================================
// DailyReading - 每日运势结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    pub target_date: NaiveDate,
    pub draw: TarotDraw,
    pub flow: DailyFlow,
    pub result: FortuneResult,
    pub ranking: DomainRanking,
    pub writing_tilt: WritingTilt,
    pub labels: ReadingLabels,
}

// ==========================================
// DailyFortuneOrchestrator - 引擎编排器
// ==========================================
#[derive(Debug, Clone)]
pub struct DailyFortuneOrchestrator<C = SolarTermCalendar> {
    chart: ChartCalculator<C>,
    scoring: FortuneScoringEngine,
    ranker: DomainRanker,
    locale: &'static str,
}

impl Default for DailyFortuneOrchestrator<SolarTermCalendar> {
    fn default() -> Self {
        Self::new(ScoringProfile::default())
    }
}

impl DailyFortuneOrchestrator<SolarTermCalendar> {
    pub fn new(profile: ScoringProfile) -> Self {
        Self {
            chart: ChartCalculator::new(&profile),
            scoring: FortuneScoringEngine::new(profile),
            ranker: DomainRanker::new(),
            locale: i18n::DEFAULT_LOCALE,
        }
    }
}

impl<C: SexagenaryCalendar> DailyFortuneOrchestrator<C> {
    /// 注入自定义历法换算
    pub fn with_calendar(calendar: C, profile: ScoringProfile) -> Self {
        Self {
            chart: ChartCalculator::with_calendar(calendar, &profile),
            scoring: FortuneScoringEngine::new(profile),
            ranker: DomainRanker::new(),
            locale: i18n::DEFAULT_LOCALE,
        }
    }

    /// 展示标签语言（不支持的语言回退中文）
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = i18n::normalize_locale(locale);
        self
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    pub fn chart_calculator(&self) -> &ChartCalculator<C> {
        &self.chart
    }

    pub fn scoring_engine(&self) -> &FortuneScoringEngine {
        &self.scoring
    }

    /// 每日运势
    ///
    /// # 参数
    /// - birth: 出生日期
    /// - target: 目标日期（None = 今日）
    /// - draw: 当日抽牌
    /// - gender: 性别（影响感情领域可见度）
    #[instrument(skip(self, draw), fields(card = %draw.card))]
    pub fn daily_reading(
        &self,
        birth: NaiveDate,
        target: Option<NaiveDate>,
        draw: TarotDraw,
        gender: Gender,
    ) -> Result<DailyReading, FortuneError> {
        let chart = self.chart.calculate_bazi(birth)?;
        let target = target.unwrap_or_else(|| Local::now().date_naive());
        self.reading_for_chart(&chart, target, draw, gender)
    }

    /// 对已有命盘出每日运势
    pub fn reading_for_chart(
        &self,
        chart: &BaziChart,
        target: NaiveDate,
        draw: TarotDraw,
        gender: Gender,
    ) -> Result<DailyReading, FortuneError> {
        // 1. 流日分析
        let flow = self.chart.analyze_flow_for_chart(chart, target)?;

        // 2. 评分
        let input = ScoringInput::from_flow(&flow, draw.clone(), gender);
        let result = self.scoring.calculate(&input);

        // 3. 领域排序与文案基调
        let ranking = self.ranker.rank(&result, flow.stem_god, flow.branch_god);
        let writing_tilt = WritingTilt::from_overall(result.overall_score);
        let labels = ReadingLabels::build(&flow, &result, &ranking, self.locale);

        info!(
            %target,
            overall = result.overall_score,
            fast_charge = ?ranking.fast_charge(),
            power_drain = ?ranking.power_drain(),
            %writing_tilt,
            "每日运势完成"
        );

        Ok(DailyReading {
            target_date: target,
            draw,
            flow,
            result,
            ranking,
            writing_tilt,
            labels,
        })
    }
}
