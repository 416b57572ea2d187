// ==========================================
// 电池运势核心 - 开发用命令行入口
// ==========================================
// 用法:
//   fortune-battery <birth YYYY-MM-DD[THH:MM]> [target YYYY-MM-DD] [card] [upright|reversed] [gender]
//
// 环境变量:
//   FORTUNE_BATTERY_CONFIG      评分参数文件
//   FORTUNE_BATTERY_LOG_FORMAT  设为 json 时输出 JSON 日志
//   FORTUNE_BATTERY_LOCALE      展示标签语言（zh-CN / en,默认 zh-CN）
// ==========================================

use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate};
use fortune_battery::{
    i18n, logging, ConfigManager, DailyFortuneOrchestrator, Gender, Orientation, TarotCard, TarotDraw,
};

const USAGE: &str =
    "用法: fortune-battery <birth> [target] [card] [upright|reversed] [gender]";
const DEFAULT_CARD: &str = "0_fool";

fn main() -> anyhow::Result<()> {
    if std::env::var("FORTUNE_BATTERY_LOG_FORMAT").as_deref() == Ok("json") {
        logging::init_json();
    } else {
        logging::init();
    }

    let mut args = std::env::args().skip(1);
    let birth = args.next().ok_or_else(|| anyhow!(USAGE))?;

    let target = match args.next().filter(|s| !s.trim().is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("无法解析目标日期: {}", raw))?,
        None => Local::now().date_naive(),
    };

    let card_raw = args.next().unwrap_or_else(|| DEFAULT_CARD.to_string());
    let card = TarotCard::from_name(&card_raw, None).unwrap_or_else(|| TarotCard::new(card_raw));

    let orientation: Orientation = match args.next() {
        Some(raw) => raw.parse()?,
        None => Orientation::Upright,
    };

    let gender = args
        .next()
        .map(|raw| Gender::from_profile(&raw))
        .unwrap_or_default();

    let config = ConfigManager::load(None)?;
    tracing::info!(source = ?config.source(), "评分参数已加载");

    let locale = std::env::var("FORTUNE_BATTERY_LOCALE")
        .unwrap_or_else(|_| i18n::DEFAULT_LOCALE.to_string());
    let orchestrator = DailyFortuneOrchestrator::new(config.into_profile()).with_locale(&locale);
    let chart = orchestrator.chart_calculator().calculate_bazi_iso(&birth)?;
    let reading =
        orchestrator.reading_for_chart(&chart, target, TarotDraw::new(card, orientation), gender)?;

    println!("{}", serde_json::to_string_pretty(&reading)?);
    Ok(())
}
