use super::*;
use crate::{
    calculate_run_score, check_anti_synergies, check_synergies, AntiSynergyResult, Content,
    GameConfig, Inventory, PlayerState, RngState, RoundPhase,
};
use std::collections::HashSet;

impl RunState {
    /// Start a run from a chosen character and biome. The seed is the whole
    /// of the randomness: two runs with the same seed and the same decision
    /// sequence replay identically.
    pub fn new(
        config: GameConfig,
        content: Content,
        character_id: &str,
        biome_id: &str,
        seed: u64,
    ) -> Result<Self, RunError> {
        let character = content
            .character_by_id(character_id)
            .ok_or_else(|| RunError::UnknownCharacter(character_id.to_string()))?
            .clone();
        if content.biome_by_id(biome_id).is_none() {
            return Err(RunError::UnknownBiome(biome_id.to_string()));
        }

        let mut inventory = Inventory::new(character.slots);
        for item_id in &character.starting_items {
            if let Some(item) = content.item_by_id(item_id) {
                // A over-stuffed starting kit is a data problem, not a run
                // failure; extras just don't make it in.
                let _ = inventory.add(item.clone());
            }
        }

        let state = PlayerState::new(
            character.max_health,
            character.starting_gold,
            biome_id.to_string(),
        );
        Ok(Self {
            config,
            content,
            state,
            inventory,
            rng: RngState::from_seed(seed),
            pending: None,
            cause_of_death: None,
            settled_conflicts: HashSet::new(),
        })
    }

    /// Recompute conflicts after an inventory mutation and apply damage for
    /// the ones that just formed. A standing pair already paid its toll; it
    /// charges again only if broken up and reassembled. A fatal pair (both
    /// halves cursed) ends the run outright.
    pub(super) fn settle_anti_synergies(
        &mut self,
        cause: DeathCause,
    ) -> (Vec<AntiSynergyResult>, bool) {
        let results = check_anti_synergies(&self.inventory);
        let current: HashSet<(String, String)> = results
            .iter()
            .map(|r| (r.first.clone(), r.second.clone()))
            .collect();
        let fresh: Vec<AntiSynergyResult> = results
            .into_iter()
            .filter(|r| {
                r.fatal
                    || !self
                        .settled_conflicts
                        .contains(&(r.first.clone(), r.second.clone()))
            })
            .collect();
        self.settled_conflicts = current;
        let mut died = false;
        for result in &fresh {
            if self.state.take_damage(result.damage) {
                died = true;
            }
            if result.fatal {
                died = true;
                self.state.alive = false;
                self.state.health = 0;
            }
        }
        if died {
            self.end(Some(if fresh.iter().any(|r| r.fatal) {
                DeathCause::AntiSynergy
            } else {
                cause
            }));
        }
        (fresh, died)
    }

    pub(super) fn end(&mut self, cause: Option<DeathCause>) {
        self.state.phase = RoundPhase::Ended;
        self.pending = None;
        if self.cause_of_death.is_none() {
            self.cause_of_death = cause;
        }
    }

    /// Close the run (if it is not already over) and produce the score
    /// snapshot. Consumes the run: permadeath, nothing to resume.
    pub fn finish(mut self, streak_days: u32) -> RunSummary {
        self.end(self.cause_of_death);
        let synergies = check_synergies(&self.inventory);
        let breakdown = calculate_run_score(
            self.state.round,
            self.state.bosses_defeated,
            &self.inventory,
            &synergies,
            streak_days,
            &self.config,
        );
        let final_score = breakdown.total + self.state.score;
        RunSummary {
            seed: self.rng.seed(),
            rounds_completed: self.state.round,
            bosses_defeated: self.state.bosses_defeated,
            items_looted: self.state.items_looted,
            items_left: self.state.items_left,
            gold: self.state.gold,
            cause_of_death: self.cause_of_death,
            breakdown,
            final_score,
        }
    }
}
