// ==========================================
// 电池运势核心 - 关系分析引擎
// ==========================================
// 职责: 十神判定、地支关系、十二长生、天乙贵人
// 地支关系优先级: 六冲 > 六合 > 三合 > 刑（含自刑）> 六害 > 无
// ==========================================
// 红线: 全部为静态表上的纯函数,无状态
// ==========================================

use crate::domain::{
    Branch, BranchRelation, ElementRelation, EnergyPhase, Polarity, Stem, TenGod,
};
use Branch::*;

// ==========================================
// 静态关系表
// ==========================================

/// 六冲
const SIX_CLASHES: [(Branch, Branch); 6] = [
    (Zi, Wu),
    (Chou, Wei),
    (Yin, Shen),
    (Mao, You),
    (Chen, Xu),
    (Si, Hai),
];

/// 六合
const SIX_COMBINES: [(Branch, Branch); 6] = [
    (Zi, Chou),
    (Yin, Hai),
    (Mao, Xu),
    (Chen, You),
    (Si, Shen),
    (Wu, Wei),
];

/// 三合局（水、木、火、金）
const TRIPLE_COMBINES: [[Branch; 3]; 4] = [
    [Shen, Zi, Chen],
    [Hai, Mao, Wei],
    [Yin, Wu, Xu],
    [Si, You, Chou],
];

/// 自刑
const SELF_PUNISHMENTS: [Branch; 4] = [Chen, Wu, You, Hai];

/// 相刑（无恩之刑、恃势之刑、无礼之刑）
const PUNISHMENTS: [(Branch, Branch); 7] = [
    (Zi, Mao),
    (Yin, Si),
    (Yin, Shen),
    (Si, Shen),
    (Chou, Xu),
    (Chou, Wei),
    (Xu, Wei),
];

/// 六害
const SIX_HARMS: [(Branch, Branch); 6] = [
    (Zi, Wei),
    (Chou, Wu),
    (Yin, Si),
    (Mao, Chen),
    (Shen, Hai),
    (You, Xu),
];

fn pair_in(table: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

// ==========================================
// RelationAnalyzer - 关系分析器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationAnalyzer;

impl RelationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 十神: 以日主为"我",判定另一天干的十神
    ///
    /// 同阴阳取偏（比肩/食神/偏财/七杀/偏印）,异阴阳取正
    pub fn ten_god(&self, day_master: Stem, other: Stem) -> TenGod {
        let same_polarity = day_master.polarity() == other.polarity();
        match day_master.element().relation_to(other.element()) {
            ElementRelation::Same if same_polarity => TenGod::BiJian,
            ElementRelation::Same => TenGod::JieCai,
            ElementRelation::Generates if same_polarity => TenGod::ShiShen,
            ElementRelation::Generates => TenGod::ShangGuan,
            ElementRelation::GeneratedBy if same_polarity => TenGod::PianYin,
            ElementRelation::GeneratedBy => TenGod::ZhengYin,
            ElementRelation::Overcomes if same_polarity => TenGod::PianCai,
            ElementRelation::Overcomes => TenGod::ZhengCai,
            ElementRelation::OvercomeBy if same_polarity => TenGod::QiSha,
            ElementRelation::OvercomeBy => TenGod::ZhengGuan,
        }
    }

    /// 两地支关系,按固定优先级返回首个命中
    pub fn branch_relationship(&self, a: Branch, b: Branch) -> BranchRelation {
        if pair_in(&SIX_CLASHES, a, b) {
            BranchRelation::Clash
        } else if pair_in(&SIX_COMBINES, a, b) {
            BranchRelation::Combine
        } else if a != b
            && TRIPLE_COMBINES
                .iter()
                .any(|frame| frame.contains(&a) && frame.contains(&b))
        {
            BranchRelation::TripleCombine
        } else if (a == b && SELF_PUNISHMENTS.contains(&a)) || pair_in(&PUNISHMENTS, a, b) {
            BranchRelation::Punishment
        } else if pair_in(&SIX_HARMS, a, b) {
            BranchRelation::Harm
        } else {
            BranchRelation::None
        }
    }

    /// 十二长生: 日主在某地支的能量相位
    ///
    /// 阳干顺行、阴干逆行
    pub fn energy_phase(&self, day_master: Stem, branch: Branch) -> EnergyPhase {
        let start = chang_sheng_branch(day_master).index();
        let target = branch.index();
        let step = match day_master.polarity() {
            Polarity::Yang => (target + 12 - start) % 12,
            Polarity::Yin => (start + 12 - target) % 12,
        };
        EnergyPhase::CYCLE[step]
    }

    /// 天乙贵人分 (0-20)
    ///
    /// - 流日地支为日主贵人 +15,为年干贵人 +10,合计封顶 20
    /// - 本命日支冲流日地支时减半（向下取整）
    pub fn nobleman_score(
        &self,
        day_master: Stem,
        year_stem: Stem,
        flow_day_branch: Branch,
        natal_day_branch: Branch,
    ) -> u8 {
        let mut score: u8 = 0;
        if nobleman_branches(day_master).contains(&flow_day_branch) {
            score += 15;
        }
        if nobleman_branches(year_stem).contains(&flow_day_branch) {
            score += 10;
        }
        score = score.min(20);

        if score > 0 && pair_in(&SIX_CLASHES, natal_day_branch, flow_day_branch) {
            score /= 2;
        }
        score
    }
}

/// 长生起点
fn chang_sheng_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Hai,
        Stem::Yi => Wu,
        Stem::Bing | Stem::Wu => Yin,
        Stem::Ding | Stem::Ji => You,
        Stem::Geng => Si,
        Stem::Xin => Zi,
        Stem::Ren => Shen,
        Stem::Gui => Mao,
    }
}

/// 天乙贵人: 甲戊庚牛羊,乙己鼠猴乡,丙丁猪鸡位,壬癸兔蛇藏,六辛逢马虎
fn nobleman_branches(stem: Stem) -> [Branch; 2] {
    match stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Chou, Wei],
        Stem::Yi | Stem::Ji => [Zi, Shen],
        Stem::Bing | Stem::Ding => [Hai, You],
        Stem::Ren | Stem::Gui => [Si, Mao],
        Stem::Xin => [Wu, Yin],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn analyzer() -> RelationAnalyzer {
        RelationAnalyzer::new()
    }

    #[test]
    fn test_ten_god_samples() {
        let a = analyzer();
        assert_eq!(a.ten_god(Stem::Jia, Stem::Jia), TenGod::BiJian);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Yi), TenGod::JieCai);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Bing), TenGod::ShiShen);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Ding), TenGod::ShangGuan);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Wu), TenGod::PianCai);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Ji), TenGod::ZhengCai);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Geng), TenGod::QiSha);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Xin), TenGod::ZhengGuan);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Ren), TenGod::PianYin);
        assert_eq!(a.ten_god(Stem::Jia, Stem::Gui), TenGod::ZhengYin);
    }

    #[test]
    fn test_each_day_master_sees_all_ten_gods() {
        let a = analyzer();
        for dm in Stem::ALL {
            let gods: HashSet<TenGod> = Stem::ALL.iter().map(|s| a.ten_god(dm, *s)).collect();
            assert_eq!(gods.len(), 10, "日主 {} 应对应全部十神", dm);
        }
    }

    #[test]
    fn test_branch_relationship_priority() {
        let a = analyzer();
        // 寅申: 冲且刑 → 冲
        assert_eq!(a.branch_relationship(Yin, Shen), BranchRelation::Clash);
        // 丑未: 冲且刑 → 冲
        assert_eq!(a.branch_relationship(Wei, Chou), BranchRelation::Clash);
        // 巳申: 合且刑 → 合
        assert_eq!(a.branch_relationship(Si, Shen), BranchRelation::Combine);
        // 寅巳: 刑且害 → 刑
        assert_eq!(a.branch_relationship(Yin, Si), BranchRelation::Punishment);
        assert_eq!(a.branch_relationship(Si, Yin), BranchRelation::Punishment);
        // 纯害
        assert_eq!(a.branch_relationship(Zi, Wei), BranchRelation::Harm);
        // 三合
        assert_eq!(a.branch_relationship(Shen, Chen), BranchRelation::TripleCombine);
        // 自刑
        assert_eq!(a.branch_relationship(Wu, Wu), BranchRelation::Punishment);
        assert_eq!(a.branch_relationship(Zi, Zi), BranchRelation::None);
        assert_eq!(a.branch_relationship(Zi, Yin), BranchRelation::None);
    }

    #[test]
    fn test_energy_phase() {
        let a = analyzer();
        assert_eq!(a.energy_phase(Stem::Jia, Hai), EnergyPhase::ChangSheng);
        assert_eq!(a.energy_phase(Stem::Jia, Mao), EnergyPhase::DiWang);
        assert_eq!(a.energy_phase(Stem::Yi, Wu), EnergyPhase::ChangSheng);
        assert_eq!(a.energy_phase(Stem::Yi, Yin), EnergyPhase::DiWang);
        assert_eq!(a.energy_phase(Stem::Bing, Wu), EnergyPhase::DiWang);
        assert_eq!(a.energy_phase(Stem::Gui, Zi), EnergyPhase::LinGuan);
        assert_eq!(a.energy_phase(Stem::Gui, Hai), EnergyPhase::DiWang);
        assert_eq!(a.energy_phase(Stem::Geng, Hai), EnergyPhase::Bing);
    }

    #[test]
    fn test_nobleman_score() {
        let a = analyzer();
        // 甲日主、庚年干,流日丑: 15 + 10 → 封顶 20
        assert_eq!(a.nobleman_score(Stem::Jia, Stem::Geng, Chou, Zi), 20);
        // 本命日支未冲流日丑 → 减半
        assert_eq!(a.nobleman_score(Stem::Jia, Stem::Geng, Chou, Wei), 10);
        // 仅年干贵人
        assert_eq!(a.nobleman_score(Stem::Jia, Stem::Xin, Yin, Zi), 10);
        // 仅年干贵人且被冲: 10 / 2
        assert_eq!(a.nobleman_score(Stem::Jia, Stem::Xin, Yin, Shen), 5);
        assert_eq!(a.nobleman_score(Stem::Jia, Stem::Jia, Zi, Wu), 0);
    }
}
