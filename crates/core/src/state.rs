use crate::{BuffKind, Zone};
use serde::{Deserialize, Serialize};

/// What the machine is waiting on between host calls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Ready for the next `advance_round`.
    Idle,
    /// An item offer is pending a loot/leave/timeout decision.
    AwaitingDecision,
    /// Dead or otherwise finished; no further calls accepted.
    Ended,
}

/// Mutable per-run facts. Owned exclusively by `RunState`, created at run
/// start, discarded when the run ends; never persisted mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub round: u32,
    pub health: i64,
    pub max_health: i64,
    pub gold: i64,
    pub score: i64,
    pub biome: String,
    pub zone: Zone,
    pub alive: bool,
    pub phase: RoundPhase,
    pub bosses_defeated: u32,
    pub items_looted: u32,
    pub items_left: u32,
    /// Flat combat bonuses from altar/wheel buffs, on top of synergies.
    #[serde(default)]
    pub buff_attack: i64,
    #[serde(default)]
    pub buff_defense: i64,
}

impl PlayerState {
    pub fn new(max_health: i64, gold: i64, biome: String) -> Self {
        Self {
            round: 0,
            health: max_health,
            max_health,
            gold,
            score: 0,
            biome,
            zone: Zone::Threshold,
            alive: true,
            phase: RoundPhase::Idle,
            bosses_defeated: 0,
            items_looted: 0,
            items_left: 0,
            buff_attack: 0,
            buff_defense: 0,
        }
    }

    pub fn heal(&mut self, amount: i64) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Returns true when the damage kills.
    pub fn take_damage(&mut self, amount: i64) -> bool {
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            self.alive = false;
        }
        !self.alive
    }

    pub fn apply_buff(&mut self, buff: BuffKind) {
        match buff {
            BuffKind::Strength => self.buff_attack += 5,
            BuffKind::Stoneskin => self.buff_defense += 5,
            BuffKind::Vitality => {
                self.max_health += 15;
                self.heal(15);
            }
            BuffKind::Fortune => self.gold += 25,
        }
    }
}
