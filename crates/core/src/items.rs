use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Weapon,
    Defense,
    Consumable,
    Key,
    Trap,
    Artifact,
    Curse,
}

impl ItemCategory {
    /// Trap and Curse drops hurt the player instead of helping; several
    /// handlers exclude them from trades and chest loot.
    pub fn is_hazard(self) -> bool {
        matches!(self, ItemCategory::Trap | ItemCategory::Curse)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Base drop frequency before zone scaling. Common stays fixed; the
    /// other tiers are multiplied up as the run deepens.
    pub fn base_weight(self) -> f64 {
        match self {
            Rarity::Common => 60.0,
            Rarity::Uncommon => 25.0,
            Rarity::Rare => 10.0,
            Rarity::Legendary => 5.0,
        }
    }

    pub fn score_points(self) -> i64 {
        match self {
            Rarity::Common => 10,
            Rarity::Uncommon => 25,
            Rarity::Rare => 50,
            Rarity::Legendary => 100,
        }
    }
}

pub fn category_from_str(value: &str) -> Option<ItemCategory> {
    match value.trim().to_lowercase().as_str() {
        "weapon" => Some(ItemCategory::Weapon),
        "defense" | "defence" => Some(ItemCategory::Defense),
        "consumable" => Some(ItemCategory::Consumable),
        "key" => Some(ItemCategory::Key),
        "trap" => Some(ItemCategory::Trap),
        "artifact" => Some(ItemCategory::Artifact),
        "curse" => Some(ItemCategory::Curse),
        _ => None,
    }
}

pub fn rarity_from_str(value: &str) -> Option<Rarity> {
    match value.trim().to_lowercase().as_str() {
        "common" => Some(Rarity::Common),
        "uncommon" => Some(Rarity::Uncommon),
        "rare" => Some(Rarity::Rare),
        "legendary" => Some(Rarity::Legendary),
        _ => None,
    }
}

/// Catalog entry. An inventory holds owned clones, so curse and blacksmith
/// mutations stay instance-local and never touch the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub rarity: Rarity,
    /// 1 or 2; validated at catalog load.
    pub slot_cost: u8,
    pub attack: i64,
    pub defense: i64,
    pub heal: i64,
    #[serde(default)]
    pub cursed: bool,
    #[serde(default)]
    pub consumable: bool,
    #[serde(default)]
    pub fire: bool,
    #[serde(default)]
    pub ice: bool,
    #[serde(default)]
    pub synergy_partners: Vec<String>,
    #[serde(default)]
    pub anti_synergy_partners: Vec<String>,
    /// Empty list means the item drops in every biome.
    #[serde(default)]
    pub biomes: Vec<String>,
    pub drop_weight: f64,
}

impl ItemDef {
    pub fn available_in(&self, biome: &str) -> bool {
        self.biomes.is_empty() || self.biomes.iter().any(|b| b == biome)
    }

    /// Curse an inventory instance: flag it and halve its combat stats.
    pub fn apply_curse(&mut self) {
        self.cursed = true;
        self.attack /= 2;
        self.defense /= 2;
    }

    pub fn conflicts_with(&self, other: &ItemDef) -> bool {
        self.anti_synergy_partners.iter().any(|id| id == &other.id)
            || other.anti_synergy_partners.iter().any(|id| id == &self.id)
    }

    pub fn declares_synergy_with(&self, other: &ItemDef) -> bool {
        self.synergy_partners.iter().any(|id| id == &other.id)
            || other.synergy_partners.iter().any(|id| id == &self.id)
    }
}

/// Canonical unordered pair key, so a conflicting or synergizing pair is
/// reported once regardless of inventory order.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_base_weights_strictly_ordered() {
        let weights: Vec<f64> = Rarity::ALL.iter().map(|r| r.base_weight()).collect();
        for pair in weights.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn curse_halves_stats_in_place() {
        let mut item = ItemDef {
            id: "sword".into(),
            name: "Sword".into(),
            category: ItemCategory::Weapon,
            rarity: Rarity::Common,
            slot_cost: 1,
            attack: 15,
            defense: 3,
            heal: 0,
            cursed: false,
            consumable: false,
            fire: false,
            ice: false,
            synergy_partners: Vec::new(),
            anti_synergy_partners: Vec::new(),
            biomes: Vec::new(),
            drop_weight: 1.0,
        };
        item.apply_curse();
        assert!(item.cursed);
        assert_eq!(item.attack, 7);
        assert_eq!(item.defense, 1);
    }

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(pair_key("torch", "bomb"), pair_key("bomb", "torch"));
    }
}
