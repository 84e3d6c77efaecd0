use crate::{pair_key, Inventory, ItemCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const ANTI_SYNERGY_DAMAGE: i64 = 10;
pub const FATAL_DAMAGE: i64 = 999;

const DUAL_WIELD_PER_WEAPON: i64 = 10;
const TRIAD_DEFENSE: i64 = 15;
const TRIAD_HEALTH: i64 = 20;
const ALCHEMIST_PER_CONSUMABLE: i64 = 5;
const KEYMASTER_BONUS: i64 = 10;
const ELEMENTAL_ATTACK: i64 = 15;
const ELEMENTAL_DEFENSE: i64 = 15;
const PARTNER_BONUS: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SynergyKind {
    /// Shield + armor + helmet all present.
    DefensiveTriad,
    /// Two or more weapons; scales with weapon count.
    DualWield,
    /// Three or more consumables; scales with consumable count.
    Alchemist,
    /// Three or more keys.
    Keymaster,
    /// A fire-flagged and an ice-flagged item together.
    Elemental,
    /// Two items that declare each other as synergy partners.
    Pair { first: String, second: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynergyResult {
    pub kind: SynergyKind,
    pub bonus_attack: i64,
    pub bonus_defense: i64,
    pub bonus_health: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AntiSynergyResult {
    pub first: String,
    pub second: String,
    pub damage: i64,
    pub fatal: bool,
}

/// Aggregate bonuses from a set of active synergies, summed for combat.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SynergyTotals {
    pub attack: i64,
    pub defense: i64,
    pub health: i64,
}

impl SynergyTotals {
    pub fn from_results(results: &[SynergyResult]) -> Self {
        let mut totals = Self::default();
        for result in results {
            totals.attack += result.bonus_attack;
            totals.defense += result.bonus_defense;
            totals.health += result.bonus_health;
        }
        totals
    }
}

// The shield/armor/helmet triad matches on item id substrings rather than a
// dedicated flag; catalog ids follow the "iron_shield" naming convention.
fn has_id_containing(inventory: &Inventory, needle: &str) -> bool {
    inventory.items.iter().any(|item| item.id.contains(needle))
}

/// Scan the inventory for every active positive combination. Recomputed from
/// scratch on each call; nothing is cached between mutations.
pub fn check_synergies(inventory: &Inventory) -> Vec<SynergyResult> {
    let mut results = Vec::new();

    if has_id_containing(inventory, "shield")
        && has_id_containing(inventory, "armor")
        && has_id_containing(inventory, "helmet")
    {
        results.push(SynergyResult {
            kind: SynergyKind::DefensiveTriad,
            bonus_attack: 0,
            bonus_defense: TRIAD_DEFENSE,
            bonus_health: TRIAD_HEALTH,
        });
    }

    let weapons = inventory.count_category(ItemCategory::Weapon) as i64;
    if weapons >= 2 {
        results.push(SynergyResult {
            kind: SynergyKind::DualWield,
            bonus_attack: weapons * DUAL_WIELD_PER_WEAPON,
            bonus_defense: 0,
            bonus_health: 0,
        });
    }

    let consumables = inventory.count_category(ItemCategory::Consumable) as i64;
    if consumables >= 3 {
        results.push(SynergyResult {
            kind: SynergyKind::Alchemist,
            bonus_attack: 0,
            bonus_defense: consumables * ALCHEMIST_PER_CONSUMABLE,
            bonus_health: consumables * ALCHEMIST_PER_CONSUMABLE,
        });
    }

    if inventory.count_category(ItemCategory::Key) >= 3 {
        results.push(SynergyResult {
            kind: SynergyKind::Keymaster,
            bonus_attack: KEYMASTER_BONUS,
            bonus_defense: KEYMASTER_BONUS,
            bonus_health: KEYMASTER_BONUS,
        });
    }

    let has_fire = inventory.items.iter().any(|item| item.fire);
    let has_ice = inventory.items.iter().any(|item| item.ice);
    if has_fire && has_ice {
        results.push(SynergyResult {
            kind: SynergyKind::Elemental,
            bonus_attack: ELEMENTAL_ATTACK,
            bonus_defense: ELEMENTAL_DEFENSE,
            bonus_health: 0,
        });
    }

    let mut seen = HashSet::new();
    for (i, a) in inventory.items.iter().enumerate() {
        for b in inventory.items.iter().skip(i + 1) {
            if a.id == b.id || !a.declares_synergy_with(b) {
                continue;
            }
            let key = pair_key(&a.id, &b.id);
            if !seen.insert(key.clone()) {
                continue;
            }
            results.push(SynergyResult {
                kind: SynergyKind::Pair {
                    first: key.0,
                    second: key.1,
                },
                bonus_attack: PARTNER_BONUS,
                bonus_defense: PARTNER_BONUS,
                bonus_health: PARTNER_BONUS,
            });
        }
    }

    results
}

/// Scan for conflicting pairs. A pair where both items are cursed is fatal;
/// otherwise the conflict costs a flat chunk of health.
pub fn check_anti_synergies(inventory: &Inventory) -> Vec<AntiSynergyResult> {
    let mut results = Vec::new();
    let mut seen = HashSet::new();
    for (i, a) in inventory.items.iter().enumerate() {
        for b in inventory.items.iter().skip(i + 1) {
            if a.id == b.id || !a.conflicts_with(b) {
                continue;
            }
            let key = pair_key(&a.id, &b.id);
            if !seen.insert(key.clone()) {
                continue;
            }
            let fatal = a.cursed && b.cursed;
            results.push(AntiSynergyResult {
                first: key.0,
                second: key.1,
                damage: if fatal { FATAL_DAMAGE } else { ANTI_SYNERGY_DAMAGE },
                fatal,
            });
        }
    }
    results
}
