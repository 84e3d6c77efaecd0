use crate::{
    AntiSynergyResult, CombatResult, Content, EventOutcome, GameConfig, Inventory, InventoryError,
    ItemDef, PlayerState, RngState, RoundPhase, ScoreBreakdown,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

mod boss;
mod decision;
mod encounter;
mod round;
mod state;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("unknown character {0}")]
    UnknownCharacter(String),
    #[error("unknown biome {0}")]
    UnknownBiome(String),
    #[error("run has ended")]
    RunEnded,
    #[error("no pending offer to decide on")]
    NoPendingOffer,
    #[error("an offer is pending; decide before advancing")]
    OfferPending,
    #[error("inventory is full; a discard choice is required")]
    DiscardRequired,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// Host decision for a pending item offer. A timeout from the countdown
/// collaborator is handled exactly like walking away.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Loot { discard: Option<usize> },
    Leave,
    Timeout,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeathCause {
    BossFight,
    AntiSynergy,
    EventDamage,
    HazardLoot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossReport {
    pub combat: CombatResult,
    pub drops: Vec<ItemDef>,
    pub healed: i64,
    pub score_bonus: i64,
    pub gold_gained: i64,
    pub anti_synergies: Vec<AntiSynergyResult>,
    pub died: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    pub outcome: EventOutcome,
    pub anti_synergies: Vec<AntiSynergyResult>,
    pub died: bool,
}

/// What a round advance produced; the host renders it and, for `Offer`,
/// comes back with a decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoundOutcome {
    Boss(BossReport),
    Event(EventReport),
    Offer(ItemDef),
    /// Nothing eligible this round; it still counted.
    Quiet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub looted: Option<String>,
    pub discarded: Option<ItemDef>,
    /// Immediate effect of a consumable or hazard loot.
    pub health_delta: i64,
    pub anti_synergies: Vec<AntiSynergyResult>,
    pub died: bool,
}

/// End-of-run snapshot handed to the host once, after which the run state
/// is dead weight (permadeath: nothing here is resumable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub rounds_completed: u32,
    pub bosses_defeated: u32,
    pub items_looted: u32,
    pub items_left: u32,
    pub gold: i64,
    pub cause_of_death: Option<DeathCause>,
    pub breakdown: ScoreBreakdown,
    /// Breakdown total plus score banked during the run (boss bonuses).
    pub final_score: i64,
}

/// The one mutator of per-run state. The host serializes calls; the engine
/// assumes no concurrent access and no notion of wall-clock time.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub content: Content,
    pub state: PlayerState,
    pub inventory: Inventory,
    pub rng: RngState,
    pending: Option<ItemDef>,
    cause_of_death: Option<DeathCause>,
    /// Conflict pairs that have already dealt their damage. A standing
    /// conflict charges once when it forms, not again on every later
    /// inventory mutation.
    settled_conflicts: HashSet<(String, String)>,
}

impl RunState {
    pub fn pending_offer(&self) -> Option<&ItemDef> {
        self.pending.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == RoundPhase::Ended
    }

    pub fn cause_of_death(&self) -> Option<DeathCause> {
        self.cause_of_death
    }
}
