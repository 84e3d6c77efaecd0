use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRule {
    pub points_per_round: i64,
    pub points_per_boss: i64,
    pub points_per_synergy: i64,
    pub streak_step: f64,
    pub streak_cap: f64,
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            points_per_round: 10,
            points_per_boss: 500,
            points_per_synergy: 100,
            streak_step: 0.1,
            streak_cap: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatRule {
    /// Boss attack is health divided by this, floored at 1.
    pub boss_attack_divisor: i64,
    pub weakness_mult: f64,
    pub resistance_mult: f64,
    /// Immediate score award on a boss kill, on top of the end-of-run
    /// per-boss points.
    pub victory_score_bonus: i64,
    pub victory_gold: i64,
    /// Fraction of max health restored after a kill.
    pub victory_heal_fraction: f64,
}

impl Default for CombatRule {
    fn default() -> Self {
        Self {
            boss_attack_divisor: 10,
            weakness_mult: 1.5,
            resistance_mult: 0.5,
            victory_score_bonus: 100,
            victory_gold: 25,
            victory_heal_fraction: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRule {
    /// Health cost when a chest is opened without a key.
    pub chest_no_key_damage: i64,
    pub trap_damage_min: i64,
    pub trap_damage_max: i64,
    pub healer_restore: i64,
    pub wheel_gold_min: i64,
    pub wheel_gold_max: i64,
    pub wheel_damage_min: i64,
    pub wheel_damage_max: i64,
    /// Cumulative percentage bands for the wheel, in order:
    /// item / buff / gold / nothing / damage.
    pub wheel_bands: [u32; 5],
}

impl Default for EventRule {
    fn default() -> Self {
        Self {
            chest_no_key_damage: 15,
            trap_damage_min: 10,
            trap_damage_max: 30,
            healer_restore: 30,
            wheel_gold_min: 10,
            wheel_gold_max: 50,
            wheel_damage_min: 5,
            wheel_damage_max: 25,
            wheel_bands: [40, 20, 20, 10, 10],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Every Nth round is a boss round.
    pub boss_interval: u32,
    /// Flat event-trigger chance per zone, earliest first.
    pub event_chance: [f64; 4],
    /// Rarity weight multiplier per zone, earliest first. Strictly
    /// increasing; applied to every rarity except Common.
    pub zone_rarity_mult: [f64; 4],
    pub scoring: ScoringRule,
    pub combat: CombatRule,
    pub event: EventRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            boss_interval: 5,
            event_chance: [0.15, 0.20, 0.25, 0.30],
            zone_rarity_mult: [1.0, 1.5, 2.0, 2.5],
            scoring: ScoringRule::default(),
            combat: CombatRule::default(),
            event: EventRule::default(),
        }
    }
}
