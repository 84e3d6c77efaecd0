use crate::schema::{BiomeRecord, BossRecord, CharacterRecord, EventRecord, ItemRecord};
use anyhow::{bail, Context};
use lootfall_core::{
    category_from_str, event_kind_from_str, rarity_from_str, BiomeDef, BossDef, CharacterDef,
    Content, EventDef, GameConfig, ItemDef,
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

/// Load the optional tunables file; absence means defaults.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join("config.json");
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    load_json(path)
}

/// Load and validate every catalog under `dir`.
pub fn load_catalog(dir: &Path) -> anyhow::Result<Content> {
    let items: Vec<ItemRecord> = load_json(dir.join("items.json"))?;
    let bosses: Vec<BossRecord> = load_json(dir.join("bosses.json"))?;
    let events: Vec<EventRecord> = load_json(dir.join("events.json"))?;
    let characters: Vec<CharacterRecord> = load_json(dir.join("characters.json"))?;
    let biomes: Vec<BiomeRecord> = load_json(dir.join("biomes.json"))?;

    let mut content = Content {
        items: items.into_iter().map(convert_item).collect::<anyhow::Result<_>>()?,
        bosses: bosses
            .into_iter()
            .map(convert_boss)
            .collect::<anyhow::Result<_>>()?,
        events: events
            .into_iter()
            .map(convert_event)
            .collect::<anyhow::Result<_>>()?,
        characters: Vec::new(),
        biomes: biomes
            .into_iter()
            .map(|record| BiomeDef {
                id: record.id,
                name: record.name,
            })
            .collect(),
    };
    content.characters = characters_from_records(characters);
    validate(&content)?;
    Ok(content)
}

fn convert_item(record: ItemRecord) -> anyhow::Result<ItemDef> {
    let category = category_from_str(&record.category)
        .with_context(|| format!("item {}: unknown category {}", record.id, record.category))?;
    let rarity = rarity_from_str(&record.rarity)
        .with_context(|| format!("item {}: unknown rarity {}", record.id, record.rarity))?;
    if !matches!(record.slot_cost, 1 | 2) {
        bail!("item {}: slot_cost must be 1 or 2", record.id);
    }
    if record.drop_weight < 0.0 {
        bail!("item {}: negative drop_weight", record.id);
    }
    Ok(ItemDef {
        id: record.id,
        name: record.name,
        category,
        rarity,
        slot_cost: record.slot_cost,
        attack: record.attack,
        defense: record.defense,
        heal: record.heal,
        cursed: record.cursed,
        consumable: record.consumable,
        fire: record.fire,
        ice: record.ice,
        synergy_partners: record.synergy_partners,
        anti_synergy_partners: record.anti_synergy_partners,
        biomes: record.biomes,
        drop_weight: record.drop_weight,
    })
}

fn convert_boss(record: BossRecord) -> anyhow::Result<BossDef> {
    let weakness = category_from_str(&record.weakness)
        .with_context(|| format!("boss {}: unknown weakness {}", record.id, record.weakness))?;
    let resistance = category_from_str(&record.resistance).with_context(|| {
        format!("boss {}: unknown resistance {}", record.id, record.resistance)
    })?;
    if weakness == resistance {
        bail!("boss {}: weakness and resistance are the same category", record.id);
    }
    Ok(BossDef {
        id: record.id,
        name: record.name,
        base_health: record.base_health,
        health_scaling: record.health_scaling,
        weakness,
        resistance,
        guaranteed_drops: record.guaranteed_drops,
        min_round: record.min_round,
        preferred_biome: record.preferred_biome,
    })
}

fn convert_event(record: EventRecord) -> anyhow::Result<EventDef> {
    let kind = event_kind_from_str(&record.kind)
        .with_context(|| format!("event {}: unknown kind {}", record.id, record.kind))?;
    Ok(EventDef {
        id: record.id,
        kind,
        base_chance: record.base_chance,
        min_round: record.min_round,
        biomes: record.biomes,
    })
}

fn characters_from_records(records: Vec<CharacterRecord>) -> Vec<CharacterDef> {
    records
        .into_iter()
        .map(|record| CharacterDef {
            id: record.id,
            name: record.name,
            max_health: record.max_health,
            starting_gold: record.starting_gold,
            slots: record.slots,
            starting_items: record.starting_items,
        })
        .collect()
}

/// Cross-reference checks: ids unique, partner and drop references resolve,
/// biome references point at real biomes.
fn validate(content: &Content) -> anyhow::Result<()> {
    let mut item_ids = HashSet::new();
    for item in &content.items {
        if !item_ids.insert(item.id.as_str()) {
            bail!("duplicate item id {}", item.id);
        }
    }
    let biome_ids: HashSet<&str> = content.biomes.iter().map(|b| b.id.as_str()).collect();

    for item in &content.items {
        for partner in item.synergy_partners.iter().chain(&item.anti_synergy_partners) {
            if !item_ids.contains(partner.as_str()) {
                bail!("item {}: partner {} not in catalog", item.id, partner);
            }
        }
        for biome in &item.biomes {
            if !biome_ids.contains(biome.as_str()) {
                bail!("item {}: unknown biome {}", item.id, biome);
            }
        }
    }
    let hazard_ids: HashSet<&str> = content
        .items
        .iter()
        .filter(|item| item.category.is_hazard())
        .map(|item| item.id.as_str())
        .collect();
    for boss in &content.bosses {
        for drop in &boss.guaranteed_drops {
            if !item_ids.contains(drop.as_str()) {
                bail!("boss {}: drop {} not in catalog", boss.id, drop);
            }
            if hazard_ids.contains(drop.as_str()) {
                bail!("boss {}: drop {} is a hazard item", boss.id, drop);
            }
        }
        if let Some(biome) = &boss.preferred_biome {
            if !biome_ids.contains(biome.as_str()) {
                bail!("boss {}: unknown biome {}", boss.id, biome);
            }
        }
    }
    for event in &content.events {
        for biome in &event.biomes {
            if !biome_ids.contains(biome.as_str()) {
                bail!("event {}: unknown biome {}", event.id, biome);
            }
        }
    }
    for character in &content.characters {
        for item in &character.starting_items {
            if !item_ids.contains(item.as_str()) {
                bail!("character {}: starting item {} not in catalog", character.id, item);
            }
        }
    }
    Ok(())
}
