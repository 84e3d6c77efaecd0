use super::*;
use crate::{pick_weighted, process_event};

impl RunState {
    /// Resolve an event round: draw an eligible event weighted by its base
    /// chance, run its handler, then apply the scalar effects generically.
    pub(super) fn event_round(&mut self) -> RoundOutcome {
        let eligible = self
            .content
            .eligible_events(self.state.round, &self.state.biome);
        let weights: Vec<f64> = eligible.iter().map(|event| event.base_chance).collect();
        let Some(def) = pick_weighted(&eligible, &weights, &mut self.rng).map(|e| (*e).clone())
        else {
            return RoundOutcome::Quiet;
        };

        let pool: Vec<crate::ItemDef> = self
            .content
            .items
            .iter()
            .filter(|item| item.available_in(&self.state.biome))
            .cloned()
            .collect();
        let outcome = process_event(
            &def,
            &mut self.inventory,
            &mut self.rng,
            &pool,
            &self.config,
        );

        let mut report = EventReport {
            outcome: outcome.clone(),
            anti_synergies: Vec::new(),
            died: false,
        };

        if outcome.health_delta > 0 {
            self.state.heal(outcome.health_delta);
        } else if outcome.health_delta < 0 && self.state.take_damage(-outcome.health_delta) {
            self.end(Some(DeathCause::EventDamage));
            report.died = true;
            return RoundOutcome::Event(report);
        }
        self.state.gold += outcome.gold_delta;
        if let Some(buff) = outcome.buff {
            self.state.apply_buff(buff);
        }
        if !outcome.items_gained.is_empty() {
            self.state.items_looted += outcome.items_gained.len() as u32;
            let (anti, died) = self.settle_anti_synergies(DeathCause::AntiSynergy);
            report.anti_synergies = anti;
            report.died = died;
        }

        RoundOutcome::Event(report)
    }
}
