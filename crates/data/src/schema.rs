use serde::Deserialize;

/// Raw catalog records as they appear on disk. Categories, rarities and
/// event kinds travel as strings and are validated during conversion so a
/// typo in a data file fails the load, not a run.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rarity: String,
    pub slot_cost: u8,
    #[serde(default)]
    pub attack: i64,
    #[serde(default)]
    pub defense: i64,
    #[serde(default)]
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
    #[serde(default)]
    pub biomes: Vec<String>,
    pub drop_weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BossRecord {
    pub id: String,
    pub name: String,
    pub base_health: i64,
    pub health_scaling: i64,
    pub weakness: String,
    pub resistance: String,
    #[serde(default)]
    pub guaranteed_drops: Vec<String>,
    #[serde(default)]
    pub min_round: u32,
    #[serde(default)]
    pub preferred_biome: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub kind: String,
    pub base_chance: f64,
    #[serde(default)]
    pub min_round: u32,
    #[serde(default)]
    pub biomes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub max_health: i64,
    #[serde(default)]
    pub starting_gold: i64,
    pub slots: u8,
    #[serde(default)]
    pub starting_items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BiomeRecord {
    pub id: String,
    pub name: String,
}
