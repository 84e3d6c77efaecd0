use super::*;
use crate::{generate_item, RoundPhase, Zone};

impl RunState {
    /// Advance one round: boss rounds on the interval, otherwise an event
    /// roll, otherwise an item offer. Empty pools make quiet rounds, never
    /// errors.
    pub fn advance_round(&mut self) -> Result<RoundOutcome, RunError> {
        match self.state.phase {
            RoundPhase::Ended => return Err(RunError::RunEnded),
            RoundPhase::AwaitingDecision => return Err(RunError::OfferPending),
            RoundPhase::Idle => {}
        }

        self.state.round += 1;
        self.state.zone = Zone::for_round(self.state.round);

        if self.state.round % self.config.boss_interval == 0 {
            return Ok(self.boss_round());
        }

        let event_chance = self.config.event_chance[self.state.zone.index()];
        if self.rng.chance(event_chance) {
            return Ok(self.event_round());
        }

        let item = generate_item(
            &self.content,
            &self.state.biome,
            self.state.zone,
            &mut self.rng,
            &self.config,
        );
        match item {
            Some(item) => {
                self.state.phase = RoundPhase::AwaitingDecision;
                self.pending = Some(item.clone());
                Ok(RoundOutcome::Offer(item))
            }
            None => Ok(RoundOutcome::Quiet),
        }
    }
}
