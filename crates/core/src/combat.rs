use crate::{BossDef, GameConfig, Inventory, ItemDef, SynergyTotals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombatResult {
    pub boss_id: String,
    pub victory: bool,
    pub boss_health: i64,
    pub boss_health_remaining: i64,
    pub damage_dealt: i64,
    pub damage_taken: i64,
}

/// Boss health grows linearly with the round the fight happens on.
pub fn boss_health(base: i64, scaling: i64, round: u32) -> i64 {
    base + scaling * round as i64
}

fn curse_adjusted(value: i64, item: &ItemDef) -> i64 {
    if item.cursed {
        value / 2
    } else {
        value
    }
}

fn category_adjusted(value: i64, item: &ItemDef, boss: &BossDef, config: &GameConfig) -> i64 {
    if item.category == boss.weakness {
        (value as f64 * config.combat.weakness_mult).floor() as i64
    } else if item.category == boss.resistance {
        (value as f64 * config.combat.resistance_mult).floor() as i64
    } else {
        value
    }
}

/// Single-shot fight: total adjusted player damage against total boss
/// health, one evaluation, no turn loop.
pub fn calculate_combat(
    boss: &BossDef,
    inventory: &Inventory,
    totals: &SynergyTotals,
    round: u32,
    config: &GameConfig,
) -> CombatResult {
    let health = boss_health(boss.base_health, boss.health_scaling, round);
    let boss_attack = (health / config.combat.boss_attack_divisor).max(1);

    // Weakness/resistance applies per item, after curse halving. The synergy
    // attack bonus lands at full value regardless of boss category.
    let item_damage: i64 = inventory
        .items
        .iter()
        .map(|item| category_adjusted(curse_adjusted(item.attack, item), item, boss, config))
        .sum();
    let damage_dealt = item_damage + totals.attack;

    let defense: i64 = inventory
        .items
        .iter()
        .map(|item| curse_adjusted(item.defense, item))
        .sum::<i64>()
        + totals.defense;
    let damage_taken = (boss_attack - defense).max(0);

    let victory = damage_dealt >= health;
    CombatResult {
        boss_id: boss.id.clone(),
        victory,
        boss_health: health,
        boss_health_remaining: if victory { 0 } else { health - damage_dealt },
        damage_dealt,
        damage_taken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_scales_with_round() {
        assert_eq!(boss_health(100, 5, 15), 175);
        assert_eq!(boss_health(100, 5, 30), 250);
    }
}
