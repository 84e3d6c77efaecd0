use crate::{GameConfig, Inventory, SynergyResult};
use serde::{Deserialize, Serialize};

/// Itemized end-of-run score. Computed once from a snapshot of final state;
/// every component is reported alongside the total for the breakdown screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub round_points: i64,
    pub boss_points: i64,
    pub synergy_points: i64,
    pub rarity_points: i64,
    pub streak_multiplier: f64,
    pub total: i64,
}

pub fn streak_multiplier(streak_days: u32, config: &GameConfig) -> f64 {
    (1.0 + streak_days as f64 * config.scoring.streak_step).min(config.scoring.streak_cap)
}

pub fn calculate_run_score(
    rounds_completed: u32,
    bosses_defeated: u32,
    final_inventory: &Inventory,
    synergies: &[SynergyResult],
    streak_days: u32,
    config: &GameConfig,
) -> ScoreBreakdown {
    let round_points = rounds_completed as i64 * config.scoring.points_per_round;
    let boss_points = bosses_defeated as i64 * config.scoring.points_per_boss;
    let synergy_points = synergies.len() as i64 * config.scoring.points_per_synergy;
    let rarity_points: i64 = final_inventory
        .items
        .iter()
        .map(|item| item.rarity.score_points())
        .sum();

    let multiplier = streak_multiplier(streak_days, config);
    let subtotal = round_points + boss_points + synergy_points + rarity_points;
    let total = (subtotal as f64 * multiplier).floor() as i64;

    ScoreBreakdown {
        round_points,
        boss_points,
        synergy_points,
        rarity_points,
        streak_multiplier: multiplier,
        total,
    }
}
