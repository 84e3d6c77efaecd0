use crate::{EventKind, ItemCategory, ItemDef, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossDef {
    pub id: String,
    pub name: String,
    pub base_health: i64,
    /// Health gained per round number at the time of the fight.
    pub health_scaling: i64,
    pub weakness: ItemCategory,
    pub resistance: ItemCategory,
    #[serde(default)]
    pub guaranteed_drops: Vec<String>,
    #[serde(default)]
    pub min_round: u32,
    #[serde(default)]
    pub preferred_biome: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    pub id: String,
    pub kind: EventKind,
    pub base_chance: f64,
    #[serde(default)]
    pub min_round: u32,
    /// Empty list means the event can fire in every biome.
    #[serde(default)]
    pub biomes: Vec<String>,
}

impl EventDef {
    pub fn available_in(&self, biome: &str) -> bool {
        self.biomes.is_empty() || self.biomes.iter().any(|b| b == biome)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    pub max_health: i64,
    #[serde(default)]
    pub starting_gold: i64,
    pub slots: u8,
    #[serde(default)]
    pub starting_items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomeDef {
    pub id: String,
    pub name: String,
}

/// Read-only definition pools the engine draws from. Loaded once per run;
/// never mutated (inventory items are owned clones).
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub items: Vec<ItemDef>,
    pub bosses: Vec<BossDef>,
    pub events: Vec<EventDef>,
    pub characters: Vec<CharacterDef>,
    pub biomes: Vec<BiomeDef>,
}

impl Content {
    pub fn item_by_id(&self, id: &str) -> Option<&ItemDef> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn character_by_id(&self, id: &str) -> Option<&CharacterDef> {
        self.characters.iter().find(|character| character.id == id)
    }

    pub fn biome_by_id(&self, id: &str) -> Option<&BiomeDef> {
        self.biomes.iter().find(|biome| biome.id == id)
    }

    /// Pick the boss for a boss round: eligible by minimum round, preferring
    /// bosses at home in the active biome, uniform among what remains.
    pub fn pick_boss<'a>(
        &'a self,
        round: u32,
        biome: &str,
        rng: &mut RngState,
    ) -> Option<&'a BossDef> {
        let eligible: Vec<&BossDef> = self
            .bosses
            .iter()
            .filter(|boss| boss.min_round <= round)
            .collect();
        if eligible.is_empty() {
            return None;
        }
        let at_home: Vec<&BossDef> = eligible
            .iter()
            .copied()
            .filter(|boss| boss.preferred_biome.as_deref() == Some(biome))
            .collect();
        let pool = if at_home.is_empty() { &eligible } else { &at_home };
        rng.pick_index(pool.len()).map(|idx| pool[idx])
    }

    pub fn eligible_events(&self, round: u32, biome: &str) -> Vec<&EventDef> {
        self.events
            .iter()
            .filter(|event| event.min_round <= round && event.available_in(biome))
            .collect()
    }
}
