use crate::{
    EventDef, GameConfig, Inventory, ItemCategory, ItemDef, Rarity, RngState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    Merchant,
    Altar,
    Chest,
    Curse,
    WheelOfFortune,
    Healer,
    Blacksmith,
    Trap,
}

pub fn event_kind_from_str(value: &str) -> Option<EventKind> {
    match value.trim().to_lowercase().as_str() {
        "merchant" => Some(EventKind::Merchant),
        "altar" => Some(EventKind::Altar),
        "chest" => Some(EventKind::Chest),
        "curse" => Some(EventKind::Curse),
        "wheel" | "wheel_of_fortune" | "wheeloffortune" => Some(EventKind::WheelOfFortune),
        "healer" => Some(EventKind::Healer),
        "blacksmith" => Some(EventKind::Blacksmith),
        "trap" => Some(EventKind::Trap),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BuffKind {
    Strength,
    Stoneskin,
    Vitality,
    Fortune,
}

impl BuffKind {
    pub const ALL: [BuffKind; 4] = [
        BuffKind::Strength,
        BuffKind::Stoneskin,
        BuffKind::Vitality,
        BuffKind::Fortune,
    ];
}

/// Uniform record every handler returns, so the run machine applies scalar
/// effects without branching on the event kind. Inventory changes (removals,
/// in-place curse/upgrade mutations, committed gains) are already applied
/// when this is returned; `items_gained`/`items_lost` describe them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventOutcome {
    pub kind: EventKind,
    pub success: bool,
    pub items_gained: Vec<ItemDef>,
    pub items_lost: Vec<String>,
    pub health_delta: i64,
    pub gold_delta: i64,
    pub buff: Option<BuffKind>,
}

impl EventOutcome {
    fn new(kind: EventKind) -> Self {
        Self {
            kind,
            success: false,
            items_gained: Vec::new(),
            items_lost: Vec::new(),
            health_delta: 0,
            gold_delta: 0,
            buff: None,
        }
    }
}

/// Dispatch an event against the inventory and item pool. Narrative failures
/// (a trade that yields nothing, a chest with no key) come back as
/// `success: false`, never as an error.
pub fn process_event(
    def: &EventDef,
    inventory: &mut Inventory,
    rng: &mut RngState,
    pool: &[ItemDef],
    config: &GameConfig,
) -> EventOutcome {
    match def.kind {
        EventKind::Merchant => merchant(inventory, rng, pool),
        EventKind::Altar => altar(inventory, rng),
        EventKind::Chest => chest(inventory, rng, pool, config),
        EventKind::Curse => curse(inventory, rng),
        EventKind::WheelOfFortune => wheel(inventory, rng, pool, config),
        EventKind::Healer => healer(config),
        EventKind::Blacksmith => blacksmith(inventory, rng),
        EventKind::Trap => trap(rng, config),
    }
}

/// Trades one random item for a same-or-better non-hazard replacement. The
/// item is gone either way; a pool with nothing suitable means a bad trade.
fn merchant(inventory: &mut Inventory, rng: &mut RngState, pool: &[ItemDef]) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Merchant);
    let Some(idx) = rng.pick_index(inventory.len()) else {
        return outcome;
    };
    let traded = inventory.items.remove(idx);
    outcome.items_lost.push(traded.id.clone());

    let better: Vec<&ItemDef> = pool
        .iter()
        .filter(|item| !item.category.is_hazard() && item.rarity >= traded.rarity)
        .collect();
    let fallback: Vec<&ItemDef> = pool
        .iter()
        .filter(|item| !item.category.is_hazard())
        .collect();
    let candidates = if better.is_empty() { &fallback } else { &better };
    let Some(pick) = rng.pick_index(candidates.len()).map(|i| candidates[i].clone()) else {
        return outcome;
    };
    if inventory.add(pick.clone()).is_ok() {
        outcome.items_gained.push(pick);
        outcome.success = true;
    }
    outcome
}

/// Sacrifices one random item unconditionally for a random buff.
fn altar(inventory: &mut Inventory, rng: &mut RngState) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Altar);
    let Some(idx) = rng.pick_index(inventory.len()) else {
        return outcome;
    };
    let sacrificed = inventory.items.remove(idx);
    outcome.items_lost.push(sacrificed.id);
    let buff = BuffKind::ALL[(rng.next_u64() % BuffKind::ALL.len() as u64) as usize];
    outcome.buff = Some(buff);
    outcome.success = true;
    outcome
}

/// A key opens the chest for rare loot; without one the lock bites.
fn chest(
    inventory: &mut Inventory,
    rng: &mut RngState,
    pool: &[ItemDef],
    config: &GameConfig,
) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Chest);
    let Some(key_idx) = inventory
        .items
        .iter()
        .position(|item| item.category == ItemCategory::Key)
    else {
        outcome.health_delta = -config.event.chest_no_key_damage;
        return outcome;
    };
    let key = inventory.items.remove(key_idx);
    outcome.items_lost.push(key.id);

    let treasures: Vec<&ItemDef> = pool
        .iter()
        .filter(|item| !item.category.is_hazard() && item.rarity >= Rarity::Rare)
        .collect();
    let Some(pick) = rng.pick_index(treasures.len()).map(|i| treasures[i].clone()) else {
        return outcome;
    };
    if inventory.add(pick.clone()).is_ok() {
        outcome.items_gained.push(pick);
        outcome.success = true;
    }
    outcome
}

/// Marks one random non-cursed item cursed, halving its stats in place.
fn curse(inventory: &mut Inventory, rng: &mut RngState) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Curse);
    let candidates: Vec<usize> = inventory
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.cursed)
        .map(|(idx, _)| idx)
        .collect();
    let Some(pick) = rng.pick_index(candidates.len()).map(|i| candidates[i]) else {
        return outcome;
    };
    inventory.items[pick].apply_curse();
    outcome.success = true;
    outcome
}

/// One weighted spin across five fixed bands: item, buff, gold, nothing,
/// damage.
fn wheel(
    inventory: &mut Inventory,
    rng: &mut RngState,
    pool: &[ItemDef],
    config: &GameConfig,
) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::WheelOfFortune);
    let bands = config.event.wheel_bands;
    let total: u32 = bands.iter().sum();
    let roll = (rng.next_u64() % total.max(1) as u64) as u32;

    if roll < bands[0] {
        // Hazards only enter play through a looted offer, never as a prize.
        let prizes: Vec<&ItemDef> = pool
            .iter()
            .filter(|item| !item.category.is_hazard())
            .collect();
        if let Some(pick) = rng.pick_index(prizes.len()).map(|i| prizes[i].clone()) {
            if inventory.add(pick.clone()).is_ok() {
                outcome.items_gained.push(pick);
                outcome.success = true;
            }
        }
    } else if roll < bands[0] + bands[1] {
        let buff = BuffKind::ALL[(rng.next_u64() % BuffKind::ALL.len() as u64) as usize];
        outcome.buff = Some(buff);
        outcome.success = true;
    } else if roll < bands[0] + bands[1] + bands[2] {
        outcome.gold_delta = rng.next_range(config.event.wheel_gold_min, config.event.wheel_gold_max);
        outcome.success = true;
    } else if roll < bands[0] + bands[1] + bands[2] + bands[3] {
        // The wheel stops on nothing.
    } else {
        outcome.health_delta =
            -rng.next_range(config.event.wheel_damage_min, config.event.wheel_damage_max);
    }
    outcome
}

fn healer(config: &GameConfig) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Healer);
    outcome.health_delta = config.event.healer_restore;
    outcome.success = true;
    outcome
}

/// Upgrades one random non-cursed item's attack or defense by half, min +1.
fn blacksmith(inventory: &mut Inventory, rng: &mut RngState) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Blacksmith);
    let candidates: Vec<usize> = inventory
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.cursed && (item.attack > 0 || item.defense > 0))
        .map(|(idx, _)| idx)
        .collect();
    let Some(pick) = rng.pick_index(candidates.len()).map(|i| candidates[i]) else {
        return outcome;
    };
    let item = &mut inventory.items[pick];
    let upgrade_attack = if item.attack > 0 && item.defense > 0 {
        rng.next_u64() % 2 == 0
    } else {
        item.attack > 0
    };
    if upgrade_attack {
        item.attack += (item.attack / 2).max(1);
    } else {
        item.defense += (item.defense / 2).max(1);
    }
    outcome.success = true;
    outcome
}

fn trap(rng: &mut RngState, config: &GameConfig) -> EventOutcome {
    let mut outcome = EventOutcome::new(EventKind::Trap);
    outcome.health_delta = -rng.next_range(config.event.trap_damage_min, config.event.trap_damage_max);
    outcome
}
