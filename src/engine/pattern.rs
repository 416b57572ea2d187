// ==========================================
// 电池运势核心 - 格局与领域可见度引擎
// ==========================================
// 职责:
// 1. 格局规则: 天干十神 × 地支十神组合 → 五领域增减（首个命中生效）
// 2. 可见度: 按天干十神大类判定各领域的显现程度
// ==========================================

use crate::domain::{Domain, DomainMap, Gender, GodCategory, TenGod};
use serde::Serialize;
use tracing::debug;

// ===== 可见度档位 =====
const HIGH_POS: f64 = 10.0;
const MID_POS: f64 = 5.0;
const LOW_NEG: f64 = -5.0;
const HIGH_NEG: f64 = -10.0;

/// 天干地支同类时正向可见度放大倍数
const SAME_CATEGORY_AMPLIFIER: f64 = 1.5;

/// 领域增减 (career, wealth, love, study, social)
type Deltas = (i8, i8, i8, i8, i8);

fn to_map(d: Deltas) -> DomainMap<f64> {
    DomainMap {
        career: f64::from(d.0),
        wealth: f64::from(d.1),
        love: f64::from(d.2),
        study: f64::from(d.3),
        social: f64::from(d.4),
    }
}

/// 十神组合匹配条件
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// 指定十神,天干地支任意一侧
    Gods(TenGod, TenGod),
    /// 指定大类,天干地支任意一侧
    Categories(GodCategory, GodCategory),
    /// 一侧为某大类,另一侧为指定十神
    CategoryAndGod(GodCategory, TenGod),
}

impl Matcher {
    fn matches(self, stem: TenGod, branch: TenGod) -> bool {
        let either = |a: &dyn Fn(TenGod) -> bool, b: &dyn Fn(TenGod) -> bool| {
            (a(stem) && b(branch)) || (b(stem) && a(branch))
        };
        match self {
            Matcher::Gods(x, y) => either(&|g| g == x, &|g| g == y),
            Matcher::Categories(x, y) => either(&|g| g.category() == x, &|g| g.category() == y),
            Matcher::CategoryAndGod(x, y) => either(&|g| g.category() == x, &|g| g == y),
        }
    }
}

/// 格局规则
#[derive(Debug, Clone, Copy)]
struct PatternRule {
    name: &'static str,
    matcher: Matcher,
    deltas: Deltas,
}

/// 命名格局（顺序即优先级）
const PATTERN_RULES: [PatternRule; 10] = [
    PatternRule {
        name: "伤官见官",
        matcher: Matcher::Gods(TenGod::ShangGuan, TenGod::ZhengGuan),
        deltas: (-20, -10, -15, -10, -15),
    },
    PatternRule {
        name: "枭神夺食",
        matcher: Matcher::Categories(GodCategory::Resource, GodCategory::Output),
        deltas: (-10, -10, -5, 5, -10),
    },
    PatternRule {
        name: "财生杀",
        matcher: Matcher::CategoryAndGod(GodCategory::Wealth, TenGod::QiSha),
        deltas: (-5, -15, -10, -10, -5),
    },
    PatternRule {
        name: "比劫夺财",
        matcher: Matcher::Categories(GodCategory::Peer, GodCategory::Wealth),
        deltas: (-5, -15, -10, 0, 5),
    },
    PatternRule {
        name: "食伤制杀",
        matcher: Matcher::CategoryAndGod(GodCategory::Output, TenGod::QiSha),
        deltas: (20, 10, -5, 10, 15),
    },
    PatternRule {
        name: "官印相生",
        matcher: Matcher::Categories(GodCategory::Power, GodCategory::Resource),
        deltas: (20, 5, 10, 20, 10),
    },
    PatternRule {
        name: "食伤生财",
        matcher: Matcher::Categories(GodCategory::Output, GodCategory::Wealth),
        deltas: (10, 20, 10, -5, 10),
    },
    PatternRule {
        name: "财官相生",
        matcher: Matcher::Categories(GodCategory::Wealth, GodCategory::Power),
        deltas: (15, 10, 10, 0, 10),
    },
    PatternRule {
        name: "印比相生",
        matcher: Matcher::Categories(GodCategory::Resource, GodCategory::Peer),
        deltas: (5, 5, 5, 15, 15),
    },
    PatternRule {
        name: "官杀制比",
        matcher: Matcher::Categories(GodCategory::Power, GodCategory::Peer),
        deltas: (15, 10, 5, 5, -5),
    },
];

// ==========================================
// PatternMatch - 格局命中结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternMatch {
    /// 格局名（未命中为 None）
    pub name: Option<&'static str>,
    pub deltas: DomainMap<f64>,
}

// ==========================================
// PatternService - 格局与可见度服务
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternService;

impl PatternService {
    pub fn new() -> Self {
        Self
    }

    /// 格局匹配
    ///
    /// 命名格局优先; 均未命中且天干地支同类时走同类兜底; 否则全 0
    pub fn match_pattern(&self, stem_god: TenGod, branch_god: TenGod) -> PatternMatch {
        if let Some(rule) = PATTERN_RULES
            .iter()
            .find(|rule| rule.matcher.matches(stem_god, branch_god))
        {
            debug!(pattern = rule.name, %stem_god, %branch_god, "命中格局");
            return PatternMatch {
                name: Some(rule.name),
                deltas: to_map(rule.deltas),
            };
        }

        if let Some((name, deltas)) = same_category_fallback(stem_god, branch_god) {
            debug!(pattern = name, %stem_god, %branch_god, "命中同类格局");
            return PatternMatch {
                name: Some(name),
                deltas: to_map(deltas),
            };
        }

        PatternMatch {
            name: None,
            deltas: DomainMap::default(),
        }
    }

    /// 各领域格局分
    pub fn pattern_scores(&self, stem_god: TenGod, branch_god: TenGod) -> DomainMap<f64> {
        self.match_pattern(stem_god, branch_god).deltas
    }

    /// 领域可见度
    ///
    /// 正分且天干地支同类时 ×1.5
    pub fn visibility(
        &self,
        domain: Domain,
        stem_god: TenGod,
        branch_god: TenGod,
        gender: Gender,
    ) -> f64 {
        let score = raw_visibility(domain, stem_god, branch_god, gender);
        if score > 0.0 && stem_god.category() == branch_god.category() {
            score * SAME_CATEGORY_AMPLIFIER
        } else {
            score
        }
    }
}

fn same_category_fallback(stem_god: TenGod, branch_god: TenGod) -> Option<(&'static str, Deltas)> {
    if stem_god.category() != branch_god.category() {
        return None;
    }
    match stem_god.category() {
        GodCategory::Output => Some(("食伤并见", (10, 15, 10, 5, 15))),
        GodCategory::Wealth => Some(("财星并见", (5, 20, 15, -10, 5))),
        GodCategory::Resource => Some(("印星并见", (-5, -5, -5, 20, -5))),
        GodCategory::Peer => Some(("比劫并见", (0, -15, -10, 0, 20))),
        GodCategory::Power if stem_god == TenGod::QiSha => {
            Some(("杀星并见", (10, -5, -5, -5, -5)))
        }
        GodCategory::Power => None,
    }
}

fn raw_visibility(domain: Domain, stem_god: TenGod, branch_god: TenGod, gender: Gender) -> f64 {
    let category = stem_god.category();
    match domain {
        Domain::Career => match category {
            GodCategory::Power if stem_god.is_fierce() => MID_POS,
            GodCategory::Power => HIGH_POS,
            GodCategory::Wealth | GodCategory::Resource => MID_POS,
            GodCategory::Output => match branch_god {
                TenGod::QiSha => HIGH_POS,
                TenGod::ZhengGuan => HIGH_NEG,
                _ => LOW_NEG,
            },
            GodCategory::Peer => LOW_NEG,
        },
        Domain::Wealth => match category {
            GodCategory::Wealth => HIGH_POS,
            GodCategory::Output => MID_POS,
            GodCategory::Peer => HIGH_NEG,
            GodCategory::Resource => LOW_NEG,
            GodCategory::Power => 0.0,
        },
        Domain::Love => match gender {
            Gender::Male => match category {
                GodCategory::Wealth => HIGH_POS,
                GodCategory::Output | GodCategory::Power => MID_POS,
                GodCategory::Peer => HIGH_NEG,
                GodCategory::Resource => 0.0,
            },
            Gender::Female => match category {
                GodCategory::Power if stem_god.is_fierce() => MID_POS,
                GodCategory::Power => HIGH_POS,
                GodCategory::Wealth => MID_POS,
                GodCategory::Peer => HIGH_NEG,
                GodCategory::Output if branch_god == TenGod::QiSha => MID_POS,
                GodCategory::Output => HIGH_NEG,
                GodCategory::Resource => 0.0,
            },
        },
        Domain::Study => match category {
            GodCategory::Resource | GodCategory::Output => HIGH_POS,
            GodCategory::Wealth => HIGH_NEG,
            GodCategory::Peer | GodCategory::Power => 0.0,
        },
        Domain::Social => match category {
            GodCategory::Peer => HIGH_POS,
            GodCategory::Output => MID_POS,
            _ if stem_god == TenGod::QiSha => MID_POS,
            _ if stem_god == TenGod::ShangGuan && branch_god == TenGod::ZhengGuan => HIGH_NEG,
            _ => 0.0,
        },
    }
}
