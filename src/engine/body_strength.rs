// ==========================================
// 电池运势核心 - 身强弱判定引擎
// ==========================================
// 判定顺序:
// 1. 成局覆盖: 年/月/日三支成局,局五行同我或生我 → Strong,否则 → Weak
// 2. 加权评分: 月令(60) + 日支根(15) + 年支根(10) + 月干助(10) + 年干助(5)
// 3. 分档: >= strong_threshold → Strong; >= balanced_threshold → Balanced; 其余 → Weak
// ==========================================

use crate::config::ScoringProfile;
use crate::domain::{
    BodyStrength, Branch, BranchRelation, Element, ElementRelation, FourPillars, Stem,
};
use crate::engine::relation::RelationAnalyzer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use Branch::*;

// ===== 权重 =====
const MONTH_SAME_SCORE: f64 = 60.0;
const MONTH_GENERATED_SCORE: f64 = 45.0;
const MONTH_EARTH_FALLBACK_SCORE: f64 = 15.0;
const DAY_ROOT_WEIGHT: f64 = 15.0;
const YEAR_ROOT_WEIGHT: f64 = 10.0;
const MONTH_STEM_WEIGHT: f64 = 10.0;
const YEAR_STEM_WEIGHT: f64 = 5.0;

// ===== 系数 =====
const CLASH_MULTIPLIER: f64 = 0.7;
const COMBINE_MULTIPLIER: f64 = 0.85;
const PARTIAL_ROOT_FACTOR: f64 = 0.6;
const HIDDEN_ROOT_FACTOR: f64 = 0.3;
const ROOTED_STEM_FACTOR: f64 = 1.0;
const REDEEMED_STEM_FACTOR: f64 = 0.7;
const CUT_STEM_FACTOR: f64 = 0.3;
const DEFAULT_STEM_FACTOR: f64 = 0.6;

/// 成局表（按检查顺序）; 土局需四库俱全
const BUREAUS: [(Element, &[Branch]); 9] = [
    (Element::Wood, &[Yin, Mao, Chen]),
    (Element::Wood, &[Hai, Mao, Wei]),
    (Element::Fire, &[Si, Wu, Wei]),
    (Element::Fire, &[Yin, Wu, Xu]),
    (Element::Metal, &[Shen, You, Xu]),
    (Element::Metal, &[Si, You, Chou]),
    (Element::Water, &[Hai, Zi, Chou]),
    (Element::Water, &[Shen, Zi, Chen]),
    (Element::Earth, &[Chen, Xu, Chou, Wei]),
];

// ==========================================
// SeasonScore - 月令得分
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonScore {
    pub base: f64,
    /// 月支受冲/合的系数
    pub multiplier: f64,
}

impl SeasonScore {
    pub fn score(&self) -> f64 {
        self.base * self.multiplier
    }
}

// ==========================================
// StrengthBreakdown - 加权分明细
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthBreakdown {
    pub season: SeasonScore,
    pub day_root: f64,
    pub year_root: f64,
    pub month_stem_support: f64,
    pub year_stem_support: f64,
}

impl StrengthBreakdown {
    pub fn total(&self) -> f64 {
        self.season.score()
            + self.day_root
            + self.year_root
            + self.month_stem_support
            + self.year_stem_support
    }
}

// ==========================================
// BodyStrengthClassifier - 身强弱判定器
// ==========================================
#[derive(Debug, Clone)]
pub struct BodyStrengthClassifier {
    strong_threshold: f64,
    balanced_threshold: f64,
    relations: RelationAnalyzer,
}

impl Default for BodyStrengthClassifier {
    fn default() -> Self {
        Self::new(&ScoringProfile::default())
    }
}

impl BodyStrengthClassifier {
    pub fn new(profile: &ScoringProfile) -> Self {
        Self {
            strong_threshold: profile.strong_threshold,
            balanced_threshold: profile.balanced_threshold,
            relations: RelationAnalyzer::new(),
        }
    }

    /// 判定身强弱
    ///
    /// # 参数
    /// - day_master_element: 日主五行
    /// - pillars: 本命四柱（时柱不参与）
    pub fn classify(&self, day_master_element: Element, pillars: &FourPillars) -> BodyStrength {
        if let Some(element) = self.bureau_element(pillars) {
            let strength = match day_master_element.relation_to(element) {
                ElementRelation::Same | ElementRelation::GeneratedBy => BodyStrength::Strong,
                _ => BodyStrength::Weak,
            };
            info!(
                bureau = %element,
                day_master = %day_master_element,
                %strength,
                "三支成局,覆盖加权评分"
            );
            return strength;
        }

        let breakdown = self.weighted_breakdown(day_master_element, pillars);
        let total = breakdown.total();
        let strength = self.band(total);
        info!(day_master = %day_master_element, total, %strength, "身强弱判定完成");
        strength
    }

    /// 三支成局的五行（未成局返回 None）
    pub fn bureau_element(&self, pillars: &FourPillars) -> Option<Element> {
        let natal = pillars.natal_branches();
        BUREAUS
            .iter()
            .find(|(_, combo)| combo.iter().all(|b| natal.contains(b)))
            .map(|(element, _)| *element)
    }

    /// 分数分档
    pub fn band(&self, total: f64) -> BodyStrength {
        if total >= self.strong_threshold {
            BodyStrength::Strong
        } else if total >= self.balanced_threshold {
            BodyStrength::Balanced
        } else {
            BodyStrength::Weak
        }
    }

    /// 加权评分明细（不含成局覆盖）
    pub fn weighted_breakdown(
        &self,
        day_master_element: Element,
        pillars: &FourPillars,
    ) -> StrengthBreakdown {
        let breakdown = StrengthBreakdown {
            season: self.season_score(day_master_element, pillars),
            day_root: root_score(day_master_element, pillars.day.branch, DAY_ROOT_WEIGHT),
            year_root: root_score(day_master_element, pillars.year.branch, YEAR_ROOT_WEIGHT),
            month_stem_support: stem_support(
                day_master_element,
                pillars.month.stem,
                pillars.month.branch,
                MONTH_STEM_WEIGHT,
            ),
            year_stem_support: stem_support(
                day_master_element,
                pillars.year.stem,
                pillars.year.branch,
                YEAR_STEM_WEIGHT,
            ),
        };
        debug!(?breakdown, "身强弱加权明细");
        breakdown
    }

    /// 月令得分
    ///
    /// 月支受年/日支冲 ×0.7（土支逢冲不减）,受合 ×0.85
    pub fn season_score(&self, day_master_element: Element, pillars: &FourPillars) -> SeasonScore {
        let month_branch = pillars.month.branch;
        let month_element = month_branch.element();

        let base = match day_master_element.relation_to(month_element) {
            ElementRelation::Same => MONTH_SAME_SCORE,
            ElementRelation::GeneratedBy => MONTH_GENERATED_SCORE,
            _ if month_element == Element::Earth => MONTH_EARTH_FALLBACK_SCORE,
            _ => {
                return SeasonScore {
                    base: 0.0,
                    multiplier: 1.0,
                }
            }
        };

        let relations = [
            self.relations
                .branch_relationship(month_branch, pillars.year.branch),
            self.relations
                .branch_relationship(month_branch, pillars.day.branch),
        ];

        let multiplier = if relations.contains(&BranchRelation::Clash) {
            if month_element == Element::Earth {
                1.0
            } else {
                CLASH_MULTIPLIER
            }
        } else if relations.iter().any(|r| r.is_combine()) {
            COMBINE_MULTIPLIER
        } else {
            1.0
        };

        debug!(base, multiplier, month = %month_branch, "月令得分");
        SeasonScore { base, multiplier }
    }
}

/// 地支根气分
fn root_score(day_master_element: Element, branch: Branch, weight: f64) -> f64 {
    match day_master_element.relation_to(branch.element()) {
        ElementRelation::Same => weight,
        ElementRelation::GeneratedBy => weight * PARTIAL_ROOT_FACTOR,
        _ if branch.is_storage() => weight * PARTIAL_ROOT_FACTOR,
        _ if has_hidden_element(branch, day_master_element) => weight * HIDDEN_ROOT_FACTOR,
        _ => 0.0,
    }
}

/// 天干帮扶分: 仅比劫/印星天干计分,按坐支通根程度打折
fn stem_support(day_master_element: Element, stem: Stem, sitting: Branch, weight: f64) -> f64 {
    let stem_element = stem.element();
    if !matches!(
        day_master_element.relation_to(stem_element),
        ElementRelation::Same | ElementRelation::GeneratedBy
    ) {
        return 0.0;
    }

    let factor = match stem_element.relation_to(sitting.element()) {
        ElementRelation::Same | ElementRelation::GeneratedBy => ROOTED_STEM_FACTOR,
        _ if has_hidden_element(sitting, stem_element) => REDEEMED_STEM_FACTOR,
        ElementRelation::OvercomeBy => CUT_STEM_FACTOR,
        _ => DEFAULT_STEM_FACTOR,
    };
    weight * factor
}

fn has_hidden_element(branch: Branch, element: Element) -> bool {
    branch.hidden_stems().iter().any(|s| s.element() == element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(year: &str, month: &str, day: &str) -> FourPillars {
        FourPillars {
            year: year.parse().unwrap(),
            month: month.parse().unwrap(),
            day: day.parse().unwrap(),
            hour: "甲子".parse().unwrap(),
        }
    }

    #[test]
    fn test_season_score_earth_clash_keeps_full_weight() {
        let c = BodyStrengthClassifier::default();
        // 戊日主,月支辰被年支戌冲
        let earth = c.season_score(Element::Earth, &chart("壬戌", "甲辰", "戊午"));
        assert_eq!(earth.base, 60.0);
        assert_eq!(earth.multiplier, 1.0);

        // 甲日主,月支卯被年支酉冲
        let wood = c.season_score(Element::Wood, &chart("乙酉", "己卯", "甲午"));
        assert_eq!(wood.base, 60.0);
        assert_eq!(wood.multiplier, 0.7);
        assert!((wood.score() - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_season_score_earth_fallback_and_zero() {
        let c = BodyStrengthClassifier::default();
        // 甲日主生于丑月: 土令兜底 15
        let s = c.season_score(Element::Wood, &chart("甲辰", "丁丑", "甲寅"));
        assert_eq!(s.base, 15.0);
        // 甲日主生于酉月: 0
        let s = c.season_score(Element::Wood, &chart("甲辰", "癸酉", "甲寅"));
        assert_eq!(s.score(), 0.0);
    }

    #[test]
    fn test_root_score_levels() {
        assert_eq!(root_score(Element::Wood, Yin, 15.0), 15.0);
        assert_eq!(root_score(Element::Wood, Zi, 15.0), 9.0);
        assert_eq!(root_score(Element::Wood, Chou, 10.0), 6.0);
        assert!((root_score(Element::Wood, Hai, 10.0) - 6.0).abs() < 1e-9);
        // 午藏丁己,无木
        assert_eq!(root_score(Element::Wood, Wu, 15.0), 0.0);
        assert_eq!(root_score(Element::Fire, Shen, 15.0), 0.0);
        // 金日主坐巳: 巳藏庚 → 0.3
        assert!((root_score(Element::Metal, Si, 15.0) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_stem_support_factors() {
        // 甲日主,月干乙坐卯: 通根
        assert_eq!(stem_support(Element::Wood, Stem::Yi, Mao, 10.0), 10.0);
        // 月干乙坐未: 未藏乙 → 0.7
        assert!((stem_support(Element::Wood, Stem::Yi, Wei, 10.0) - 7.0).abs() < 1e-9);
        // 月干甲坐酉: 金克木且无藏干救 → 0.3
        assert!((stem_support(Element::Wood, Stem::Jia, You, 10.0) - 3.0).abs() < 1e-9);
        // 月干甲坐午: 木生火,无救 → 0.6
        assert!((stem_support(Element::Wood, Stem::Jia, Wu, 10.0) - 6.0).abs() < 1e-9);
        // 财星天干不计
        assert_eq!(stem_support(Element::Wood, Stem::Wu, Chen, 10.0), 0.0);
    }

    #[test]
    fn test_bureau_override_beats_weighted_score() {
        let c = BodyStrengthClassifier::default();
        // 己日主,亥卯未木局克身
        let pillars = chart("丁亥", "丁未", "己卯");
        let weighted = c.weighted_breakdown(Element::Earth, &pillars);
        assert_eq!(c.band(weighted.total()), BodyStrength::Strong);

        assert_eq!(c.bureau_element(&pillars), Some(Element::Wood));
        assert_eq!(c.classify(Element::Earth, &pillars), BodyStrength::Weak);
    }

    #[test]
    fn test_bureau_generating_day_master_is_strong() {
        let c = BodyStrengthClassifier::default();
        // 甲日主,申子辰水局生身
        let pillars = chart("庚申", "丙子", "甲辰");
        assert_eq!(c.bureau_element(&pillars), Some(Element::Water));
        assert_eq!(c.classify(Element::Wood, &pillars), BodyStrength::Strong);
    }

    #[test]
    fn test_thresholds() {
        let c = BodyStrengthClassifier::default();
        assert_eq!(c.band(50.0), BodyStrength::Strong);
        assert_eq!(c.band(49.9), BodyStrength::Balanced);
        assert_eq!(c.band(30.0), BodyStrength::Balanced);
        assert_eq!(c.band(29.9), BodyStrength::Weak);
    }
}
