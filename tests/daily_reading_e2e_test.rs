// ==========================================
// 每日运势端到端测试
// ==========================================
// 测试目标: 出生日期 + 目标日期 + 抽牌 → 完整每日运势
// 覆盖范围: 排盘、流日、评分、领域排序、文案基调、序列化
// ==========================================

mod test_helpers;

use fortune_battery::{
    DailyFortuneOrchestrator, DailyReading, Domain, Gender, Orientation, ScoringProfile, TarotCard,
    TarotDraw, WritingTilt,
};
use test_helpers::date;

#[test]
fn test_full_reading_pipeline() {
    let orchestrator = DailyFortuneOrchestrator::new(ScoringProfile::default());
    let card = TarotCard::from_name("Ace of Cups", None).unwrap();
    let draw = TarotDraw::new(card, Orientation::Upright);

    let reading = orchestrator
        .daily_reading(date(2000, 1, 1), Some(date(2024, 1, 1)), draw, Gender::Female)
        .unwrap();

    println!(
        "综合分 {} / 快充 {:?} / 耗电 {:?} / 基调 {}",
        reading.result.overall_score,
        reading.ranking.fast_charge(),
        reading.ranking.power_drain(),
        reading.writing_tilt
    );

    assert_eq!(reading.draw.card.slug(), "c_ace");
    assert_eq!(reading.flow.flow_day.to_string(), "甲子");
    assert_eq!(
        reading.writing_tilt,
        WritingTilt::from_overall(reading.result.overall_score)
    );

    // 排序结果按领域分降序
    let scores: Vec<u8> = reading.ranking.ordered.iter().map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(reading.ranking.ordered.len(), Domain::ALL.len());
}

#[test]
fn test_reading_serializes_to_json() {
    let orchestrator = DailyFortuneOrchestrator::default();
    let reading = orchestrator
        .daily_reading(
            date(1992, 8, 20),
            Some(date(2024, 6, 15)),
            TarotDraw::reversed("s_10"),
            Gender::Male,
        )
        .unwrap();

    let json = serde_json::to_value(&reading).unwrap();
    let domains = &json["result"]["domain_scores"];
    for key in ["career", "wealth", "love", "study", "social"] {
        assert!(domains[key].is_u64(), "缺少领域 {}", key);
    }
    assert!(json["result"]["overall_score"].is_u64());
    assert!(json["writing_tilt"].is_string());
    // 日主与四柱以汉字输出
    assert!(json["flow"]["chart"]["day_master"].is_string());
    assert_eq!(json["labels"]["locale"], "zh-CN");

    // 完整结果可反序列化（浮点修正项不做逐位比较）
    let text = serde_json::to_string(&reading).unwrap();
    let restored: DailyReading = serde_json::from_str(&text).unwrap();
    assert_eq!(restored.flow, reading.flow);
    assert_eq!(restored.draw, reading.draw);
    assert_eq!(restored.labels, reading.labels);
    assert_eq!(restored.result.domain_scores, reading.result.domain_scores);
    assert_eq!(restored.ranking.domains(), reading.ranking.domains());
}

#[test]
fn test_english_labels() {
    let orchestrator = DailyFortuneOrchestrator::default().with_locale("en");
    let reading = orchestrator
        .daily_reading(
            date(2000, 1, 1),
            Some(date(2024, 1, 1)),
            TarotDraw::upright("c_ace"),
            Gender::Female,
        )
        .unwrap();

    let labels = &reading.labels;
    assert_eq!(labels.day_master, "Wu");
    assert_eq!(labels.stem_god.name, "Seven Killings");
    assert!(!labels.stem_god.analysis.is_empty());
    let fast = labels.fast_charge.as_deref().unwrap();
    assert!(labels.summary.contains(fast), "{}", labels.summary);
    assert_eq!(labels.low_power.is_some(), reading.result.low_power_mode);

    // 不支持的语言回退中文
    let fallback = DailyFortuneOrchestrator::default()
        .with_locale("fr")
        .daily_reading(
            date(2000, 1, 1),
            Some(date(2024, 1, 1)),
            TarotDraw::upright("c_ace"),
            Gender::Female,
        )
        .unwrap();
    assert_eq!(fallback.labels.day_master, "戊");
}

#[test]
fn test_out_of_range_birth_fails() {
    let orchestrator = DailyFortuneOrchestrator::default();
    let result = orchestrator.daily_reading(
        date(1880, 1, 1),
        Some(date(2024, 1, 1)),
        TarotDraw::upright("19_sun"),
        Gender::Male,
    );
    assert!(result.is_err());
}
