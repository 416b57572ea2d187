// ==========================================
// FortuneScoringEngine 集成测试
// ==========================================
// 测试目标: 评分确定性、分数边界、低电量判定、八字软上限
// 覆盖范围: 身强弱 × 长生 × 地支关系 × 十神 × 塔罗全组合
// ==========================================

mod test_helpers;

use fortune_battery::{
    BodyStrength, BranchRelation, Domain, EnergyPhase, FortuneScoringEngine, ScoringProfile,
    TarotDraw, TenGod,
};
use test_helpers::{scoring_input, ALL_BODY_STRENGTHS, ALL_RELATIONS};

// ==========================================
// 测试辅助函数
// ==========================================

fn sample_draws() -> Vec<TarotDraw> {
    vec![
        TarotDraw::upright("19_sun"),
        TarotDraw::reversed("16_tower"),
        TarotDraw::upright("c_3"),
    ]
}

// ==========================================
// 典型场景
// ==========================================

#[test]
fn test_strong_peak_clash_with_sun() {
    let engine = FortuneScoringEngine::default();
    let input = scoring_input(
        BodyStrength::Strong,
        EnergyPhase::DiWang,
        BranchRelation::Clash,
        0,
        TenGod::ZhengGuan,
        TenGod::ShiShen,
        TarotDraw::upright("19_sun"),
    );

    // 65 - 8 - 7 + 5 + 5
    assert_eq!(engine.overall_base(&input), 60.0);

    let result = engine.calculate(&input);
    println!("综合分: {}, 领域分: {:?}", result.overall_score, result.domain_scores);

    assert_eq!(result.tarot_modifiers.overall, 12.0);
    assert_eq!(result.overall_score, 72);
    assert!(!result.low_power_mode);
    assert!(result.is_major_arcana);
    assert_eq!(result.body_strength, BodyStrength::Strong);
}

#[test]
fn test_low_power_scenario() {
    let engine = FortuneScoringEngine::default();
    let input = scoring_input(
        BodyStrength::Strong,
        EnergyPhase::DiWang,
        BranchRelation::Clash,
        0,
        TenGod::JieCai,
        TenGod::BiJian,
        TarotDraw::reversed("16_tower"),
    );

    // 65 - 8 - 7 - 5 - 5 - 3
    assert_eq!(engine.overall_base(&input), 37.0);

    let result = engine.calculate(&input);
    // 37 + (-2.0 × 6 × 0.5)
    assert_eq!(result.overall_score, 31);
    assert!(result.low_power_mode);
}

// ==========================================
// 性质测试
// ==========================================

#[test]
fn test_scores_bounded_and_low_power_consistent() {
    let engine = FortuneScoringEngine::default();
    let mut checked = 0usize;

    for body_strength in ALL_BODY_STRENGTHS {
        for phase in EnergyPhase::CYCLE {
            for relation in ALL_RELATIONS {
                for nobleman in [0u8, 15] {
                    for stem_god in TenGod::ALL {
                        for branch_god in TenGod::ALL {
                            for draw in sample_draws() {
                                let input = scoring_input(
                                    body_strength,
                                    phase,
                                    relation,
                                    nobleman,
                                    stem_god,
                                    branch_god,
                                    draw,
                                );
                                let result = engine.calculate(&input);

                                assert!((30..=100).contains(&result.overall_score));
                                for domain in Domain::ALL {
                                    assert!((30..=100).contains(&result.domain_score(domain)));
                                }
                                assert_eq!(result.low_power_mode, result.overall_score < 45);
                                checked += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    println!("已校验 {} 组输入", checked);
}

#[test]
fn test_calculation_is_deterministic() {
    let engine = FortuneScoringEngine::default();
    for draw in sample_draws() {
        let input = scoring_input(
            BodyStrength::Weak,
            EnergyPhase::ChangSheng,
            BranchRelation::Harm,
            10,
            TenGod::ShangGuan,
            TenGod::ZhengGuan,
            draw,
        );
        let first = engine.calculate(&input);
        let second = engine.calculate(&input);
        assert_eq!(first, second);
    }
}

#[test]
fn test_bazi_soft_cap_before_tarot() {
    let engine = FortuneScoringEngine::default();

    // 全部正向修正: 65 + 8 + 7 + 8 + 5 + 5 = 98
    let maxed = |draw| {
        scoring_input(
            BodyStrength::Weak,
            EnergyPhase::LinGuan,
            BranchRelation::Combine,
            20,
            TenGod::ZhengYin,
            TenGod::ZhengYin,
            draw,
        )
    };

    let neutral = maxed(TarotDraw::upright("not_a_card"));
    assert_eq!(engine.overall_base(&neutral), 98.0);

    let result = engine.calculate(&neutral);
    assert_eq!(result.overall_score, 90);
    assert_eq!(result.tarot_modifiers.overall, 0.0);

    // 塔罗可越过软上限
    let boosted = engine.calculate(&maxed(TarotDraw::upright("19_sun")));
    assert_eq!(boosted.overall_score, 100);
}

#[test]
fn test_profile_overrides_change_scores() {
    let profile = ScoringProfile {
        base_score: 55.0,
        ..ScoringProfile::default()
    };
    let engine = FortuneScoringEngine::new(profile);
    let input = scoring_input(
        BodyStrength::Strong,
        EnergyPhase::DiWang,
        BranchRelation::Clash,
        0,
        TenGod::ZhengGuan,
        TenGod::ShiShen,
        TarotDraw::upright("19_sun"),
    );
    assert_eq!(engine.calculate(&input).overall_score, 62);
}
