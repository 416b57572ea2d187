// ==========================================
// 电池运势核心 - 运势评分引擎
// ==========================================
// 流程:
// 1. 八字基础分 = 基础分 + 长生修正 + 地支关系 + 贵人 + 喜忌 + 凶神
// 2. 八字软上限: 基础分封顶 bazi_soft_cap（塔罗修正可越过）
// 3. 塔罗修正: 偏移 × 大/小阿卡纳倍率,逆位折减
// 4. 综合分 = clamp(封顶八字分 + 塔罗综合修正, min, max)
// 5. 领域分 = clamp(min(基础分 + 领域修正, 软上限) + 塔罗领域修正, min, max)
// ==========================================
// 红线: 纯函数,同输入必同输出
// ==========================================

use crate::config::ScoringProfile;
use crate::domain::{
    BodyStrength, BranchRelation, DailyFlow, Domain, DomainMap, EnergyPhase, FortuneResult,
    Gender, ModifierBreakdown, TarotDraw, TenGod,
};
use crate::engine::pattern::PatternService;
use crate::engine::tarot::{self, OffsetKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ===== 修正值 =====
const COMBINE_BONUS: f64 = 7.0;
const CLASH_PENALTY: f64 = -7.0;
const HARM_PENALTY: f64 = -4.0;
const NOBLEMAN_STRONG_BONUS: f64 = 8.0;
const NOBLEMAN_WEAK_BONUS: f64 = 4.0;
const NOBLEMAN_STRONG_THRESHOLD: u8 = 15;
const FAVORABLE_BONUS: f64 = 5.0;
const FIERCE_STEM_PENALTY: f64 = -3.0;
const DOUBLE_FIERCE_PENALTY: f64 = -5.0;
const DOUBLE_AUSPICIOUS_BONUS: f64 = 5.0;

// ==========================================
// ScoringInput - 评分输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    pub body_strength: BodyStrength,
    pub energy_phase: EnergyPhase,
    pub branch_relation: BranchRelation,
    pub nobleman_score: u8,
    pub stem_god: TenGod,
    pub branch_god: TenGod,
    pub draw: TarotDraw,
    #[serde(default)]
    pub gender: Gender,
}

impl ScoringInput {
    /// 由流日分析结果组装
    pub fn from_flow(flow: &DailyFlow, draw: TarotDraw, gender: Gender) -> Self {
        Self {
            body_strength: flow.body_strength(),
            energy_phase: flow.energy_phase,
            branch_relation: flow.branch_relation,
            nobleman_score: flow.nobleman_score,
            stem_god: flow.stem_god,
            branch_god: flow.branch_god,
            draw,
            gender,
        }
    }
}

// ==========================================
// FortuneScoringEngine - 运势评分引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct FortuneScoringEngine {
    profile: ScoringProfile,
    patterns: PatternService,
}

impl Default for FortuneScoringEngine {
    fn default() -> Self {
        Self::new(ScoringProfile::default())
    }
}

impl FortuneScoringEngine {
    pub fn new(profile: ScoringProfile) -> Self {
        Self {
            profile,
            patterns: PatternService::new(),
        }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算综合分与五领域分
    #[instrument(skip(self, input), fields(
        body_strength = %input.body_strength,
        stem_god = %input.stem_god,
        branch_god = %input.branch_god,
        card = %input.draw.card
    ))]
    pub fn calculate(&self, input: &ScoringInput) -> FortuneResult {
        let p = &self.profile;

        // 1-2. 八字基础分与软上限
        let overall_base = self.overall_base(input);
        let bazi_overall_capped = overall_base.min(p.bazi_soft_cap);

        // 3-4. 综合分
        let tarot_overall = self.tarot_modifier(&input.draw, OffsetKey::Overall);
        let final_overall = self.clamp(bazi_overall_capped + tarot_overall);
        let low_power_mode = final_overall < p.low_power_threshold;

        // 5. 领域分
        let bazi_domains = DomainMap::from_fn(|domain| self.domain_modifier(domain, input));
        let tarot_domains = DomainMap::from_fn(|domain| {
            self.tarot_modifier(&input.draw, OffsetKey::Domain(domain))
        });
        let domain_scores = DomainMap::from_fn(|domain| {
            let capped = (overall_base + bazi_domains.get(domain)).min(p.bazi_soft_cap);
            let score = self.clamp(capped + tarot_domains.get(domain));
            debug!(
                domain = %domain,
                bazi = bazi_domains.get(domain),
                tarot = tarot_domains.get(domain),
                score,
                "领域评分"
            );
            score as u8
        });

        let overall_score = final_overall as u8;
        info!(overall_base, overall_score, low_power_mode, "运势评分完成");

        FortuneResult {
            overall_score,
            body_strength: input.body_strength,
            low_power_mode,
            domain_scores,
            bazi_modifiers: ModifierBreakdown {
                overall: overall_base - p.base_score,
                domains: bazi_domains,
            },
            tarot_modifiers: ModifierBreakdown {
                overall: tarot_overall,
                domains: tarot_domains,
            },
            domain_tarot_contribution: tarot_domains,
            is_major_arcana: input.draw.card.is_major_arcana(),
        }
    }

    /// 由流日分析直接评分
    pub fn calculate_flow(&self, flow: &DailyFlow, draw: TarotDraw, gender: Gender) -> FortuneResult {
        self.calculate(&ScoringInput::from_flow(flow, draw, gender))
    }

    // ==========================================
    // 八字基础分
    // ==========================================

    /// 八字基础分（未封顶）
    pub fn overall_base(&self, input: &ScoringInput) -> f64 {
        let mut modifier = phase_modifier(input.body_strength, input.energy_phase);

        // 冲/害/刑共用一个负向修正,贵人出现时整体抵消
        let mut relation_penalty = 0.0;
        match input.branch_relation {
            BranchRelation::Combine | BranchRelation::TripleCombine => modifier += COMBINE_BONUS,
            BranchRelation::Clash => relation_penalty = CLASH_PENALTY,
            BranchRelation::Harm | BranchRelation::Punishment => relation_penalty = HARM_PENALTY,
            BranchRelation::None => {}
        }
        modifier += relation_penalty;

        let nobleman = nobleman_bonus(input.nobleman_score);
        if nobleman > 0.0 {
            modifier += nobleman;
            modifier -= relation_penalty;
        }

        modifier += favorability(input.body_strength, input.stem_god);
        modifier += favorability(input.body_strength, input.branch_god);
        if input.stem_god.is_fierce() {
            modifier += FIERCE_STEM_PENALTY;
        }

        debug!(modifier, "八字基础修正");
        self.profile.base_score + modifier
    }

    /// 领域修正 = 可见度 + 格局 + 双凶/双吉
    pub fn domain_modifier(&self, domain: Domain, input: &ScoringInput) -> f64 {
        let stem = input.stem_god;
        let branch = input.branch_god;

        let visibility = self.patterns.visibility(domain, stem, branch, input.gender);
        let pattern = self.patterns.pattern_scores(stem, branch).get(domain);
        let pairing = if stem.is_fierce() && branch.is_fierce() {
            DOUBLE_FIERCE_PENALTY
        } else if stem.is_auspicious() && branch.is_auspicious() {
            DOUBLE_AUSPICIOUS_BONUS
        } else {
            0.0
        };

        visibility + pattern + pairing
    }

    /// 塔罗修正（已乘倍率,逆位折减）
    pub fn tarot_modifier(&self, draw: &TarotDraw, key: OffsetKey) -> f64 {
        let offset = tarot::base_offset(&draw.card, key);
        let modifier = offset * self.profile.tarot_multiplier(draw.card.is_major_arcana());
        if draw.orientation.is_upright() {
            modifier
        } else {
            modifier * self.profile.reversed_factor
        }
    }

    fn clamp(&self, score: f64) -> f64 {
        score.min(self.profile.max_score).max(self.profile.min_score)
    }
}

/// 身强弱 × 十二长生修正
fn phase_modifier(body_strength: BodyStrength, phase: EnergyPhase) -> f64 {
    use EnergyPhase::*;
    match (body_strength, phase) {
        (BodyStrength::Weak, GuanDai | LinGuan) => 8.0,
        (BodyStrength::Weak, ChangSheng | DiWang) => 4.0,
        (BodyStrength::Weak, Si | Jue | Bing) => -4.0,
        (BodyStrength::Strong, ChangSheng) => 4.0,
        (BodyStrength::Strong, DiWang) => -8.0,
        (BodyStrength::Balanced, GuanDai | LinGuan) => 4.0,
        _ => 0.0,
    }
}

fn nobleman_bonus(score: u8) -> f64 {
    if score >= NOBLEMAN_STRONG_THRESHOLD {
        NOBLEMAN_STRONG_BONUS
    } else if score > 0 {
        NOBLEMAN_WEAK_BONUS
    } else {
        0.0
    }
}

fn favorability(body_strength: BodyStrength, god: TenGod) -> f64 {
    if body_strength.favors(god) {
        FAVORABLE_BONUS
    } else {
        -FAVORABLE_BONUS
    }
}
