use crate::{pick_weighted, Content, GameConfig, ItemDef, RngState};
use serde::{Deserialize, Serialize};

/// Coarse difficulty band derived purely from the round number. Later zones
/// admit strictly more item categories and rarities than earlier ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zone {
    Threshold,
    Warrens,
    Deeps,
    Abyss,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Threshold, Zone::Warrens, Zone::Deeps, Zone::Abyss];

    pub fn for_round(round: u32) -> Zone {
        match round {
            0..=5 => Zone::Threshold,
            6..=12 => Zone::Warrens,
            13..=20 => Zone::Deeps,
            _ => Zone::Abyss,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Zone::Threshold => 0,
            Zone::Warrens => 1,
            Zone::Deeps => 2,
            Zone::Abyss => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Zone::Threshold => "Threshold",
            Zone::Warrens => "Warrens",
            Zone::Deeps => "Deeps",
            Zone::Abyss => "Abyss",
        }
    }
}

/// Zone gate: the first zone keeps hazards and high rarities out entirely.
fn zone_admits(zone: Zone, item: &ItemDef) -> bool {
    if zone != Zone::Threshold {
        return true;
    }
    !item.category.is_hazard() && item.rarity < crate::Rarity::Rare
}

fn item_weight(item: &ItemDef, zone: Zone, config: &GameConfig) -> f64 {
    let mut rarity_weight = item.rarity.base_weight();
    if item.rarity != crate::Rarity::Common {
        rarity_weight *= config.zone_rarity_mult[zone.index()];
    }
    item.drop_weight * rarity_weight
}

/// Draw the round's item, or `None` when nothing in the catalog is eligible
/// (a quiet round, not a failure).
pub fn generate_item(
    content: &Content,
    biome: &str,
    zone: Zone,
    rng: &mut RngState,
    config: &GameConfig,
) -> Option<ItemDef> {
    let pool: Vec<&ItemDef> = content
        .items
        .iter()
        .filter(|item| item.available_in(biome) && zone_admits(zone, item))
        .collect();
    if pool.is_empty() {
        return None;
    }
    let weights: Vec<f64> = pool
        .iter()
        .map(|item| item_weight(item, zone, config))
        .collect();
    pick_weighted(&pool, &weights, rng).map(|item| (*item).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_boundaries_follow_round_number() {
        assert_eq!(Zone::for_round(1), Zone::Threshold);
        assert_eq!(Zone::for_round(5), Zone::Threshold);
        assert_eq!(Zone::for_round(6), Zone::Warrens);
        assert_eq!(Zone::for_round(12), Zone::Warrens);
        assert_eq!(Zone::for_round(13), Zone::Deeps);
        assert_eq!(Zone::for_round(20), Zone::Deeps);
        assert_eq!(Zone::for_round(21), Zone::Abyss);
        assert_eq!(Zone::for_round(400), Zone::Abyss);
    }

    #[test]
    fn rarity_multiplier_increases_with_depth() {
        let config = GameConfig::default();
        for pair in config.zone_rarity_mult.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
