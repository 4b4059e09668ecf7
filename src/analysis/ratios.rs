use super::summary::{MatchSummary, Side, TeamSheet};

/// Per-player share of the team total, in percent, in player-slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRatios {
    pub gold: Vec<f64>,
    pub damage: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRatios {
    pub blue: TeamRatios,
    pub red: TeamRatios,
}

impl MatchRatios {
    pub fn team(&self, side: Side) -> &TeamRatios {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }
}

/// Each value as a percentage of the sum. A zero sum gives all zeros.
pub fn shares(values: &[u64]) -> Vec<f64> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| v as f64 / total as f64 * 100.0)
        .collect()
}

pub fn team_ratios(team: &TeamSheet) -> TeamRatios {
    let gold: Vec<u64> = team.players.iter().map(|p| p.gold_earned).collect();
    let damage: Vec<u64> = team.players.iter().map(|p| p.damage_to_champions).collect();
    TeamRatios {
        gold: shares(&gold),
        damage: shares(&damage),
    }
}

pub fn compute_ratios(summary: &MatchSummary) -> MatchRatios {
    MatchRatios {
        blue: team_ratios(&summary.blue),
        red: team_ratios(&summary.red),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summary::summarize;
    use crate::api::models::fixtures;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn sample_match_ratios() {
        let summary = summarize(&fixtures::sample_match(), "puuid-orcybe", &fixtures::champions()).unwrap();
        let ratios = compute_ratios(&summary);

        assert_close(&ratios.blue.gold, &[24.0, 20.0, 22.0, 26.0, 8.0]);
        assert_close(&ratios.blue.damage, &[20.0, 10.0, 30.0, 25.0, 15.0]);
        assert_close(&ratios.red.gold, &[25.0, 20.0, 22.5, 27.5, 5.0]);
        assert_close(&ratios.team(Side::Red).damage, &[30.0, 10.0, 40.0, 16.0, 4.0]);
    }

    #[test]
    fn nonzero_side_sums_to_one_hundred() {
        for values in [
            vec![1, 1, 1],
            vec![7, 13, 29, 31, 101],
            vec![0, 0, 0, 0, 3],
            vec![123_456, 98_765, 1, 55_555, 7],
        ] {
            let total: f64 = shares(&values).iter().sum();
            assert!((total - 100.0).abs() < 1e-6, "{:?} sums to {}", values, total);
        }
    }

    #[test]
    fn zero_total_gives_zero_shares() {
        assert_eq!(shares(&[0, 0, 0, 0, 0]), vec![0.0; 5]);
        assert!(shares(&[]).is_empty());
    }

    #[test]
    fn zero_damage_team_does_not_fault() {
        let mut summary =
            summarize(&fixtures::sample_match(), "puuid-orcybe", &fixtures::champions()).unwrap();
        for p in &mut summary.red.players {
            p.damage_to_champions = 0;
        }
        let ratios = compute_ratios(&summary);
        assert_eq!(ratios.red.damage, vec![0.0; 5]);
        assert!(ratios.red.gold.iter().all(|v| v.is_finite() && *v > 0.0));
    }
}
