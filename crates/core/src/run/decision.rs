use super::*;
use crate::{InventoryError, ItemDef, RoundPhase};

impl RunState {
    /// Apply the host's decision on the pending offer. Rejections (no offer
    /// pending, full inventory with no workable discard) leave every piece
    /// of state untouched so the host can resupply a choice.
    pub fn decide(&mut self, decision: Decision) -> Result<DecisionOutcome, RunError> {
        if self.state.phase == RoundPhase::Ended {
            return Err(RunError::RunEnded);
        }
        let Some(offer) = self.pending.clone() else {
            return Err(RunError::NoPendingOffer);
        };

        match decision {
            Decision::Leave | Decision::Timeout => {
                self.pending = None;
                self.state.phase = RoundPhase::Idle;
                self.state.items_left += 1;
                Ok(DecisionOutcome {
                    looted: None,
                    discarded: None,
                    health_delta: 0,
                    anti_synergies: Vec::new(),
                    died: false,
                })
            }
            Decision::Loot { discard } => self.loot(offer, discard),
        }
    }

    fn loot(
        &mut self,
        offer: ItemDef,
        discard: Option<usize>,
    ) -> Result<DecisionOutcome, RunError> {
        let mut outcome = DecisionOutcome {
            looted: Some(offer.id.clone()),
            discarded: None,
            health_delta: 0,
            anti_synergies: Vec::new(),
            died: false,
        };

        // Consumables act on pickup and are never stored, so capacity does
        // not come into it.
        if offer.consumable {
            self.pending = None;
            self.state.phase = RoundPhase::Idle;
            self.state.items_looted += 1;
            outcome.health_delta = offer.heal;
            self.state.heal(offer.heal);
            return Ok(outcome);
        }

        if !self.inventory.can_fit(&offer) {
            // Validate the discard before mutating anything: the rejection
            // contract is state-unchanged.
            let Some(index) = discard else {
                return Err(RunError::DiscardRequired);
            };
            let discarded_cost = self
                .inventory
                .items
                .get(index)
                .ok_or(InventoryError::InvalidIndex(index))?
                .slot_cost as u32;
            if self.inventory.free_slots() + discarded_cost < offer.slot_cost as u32 {
                return Err(RunError::DiscardRequired);
            }
            let removed = self.inventory.remove(index)?;
            outcome.discarded = Some(removed);
        }

        self.pending = None;
        self.state.phase = RoundPhase::Idle;
        self.inventory.add(offer.clone())?;
        self.state.items_looted += 1;

        // Hazard drops bite the hand that grabs them, then stay in the bag.
        if offer.category.is_hazard() && offer.attack > 0 {
            outcome.health_delta = -offer.attack;
            if self.state.take_damage(offer.attack) {
                self.end(Some(DeathCause::HazardLoot));
                outcome.died = true;
                return Ok(outcome);
            }
        }

        let (anti, died) = self.settle_anti_synergies(DeathCause::AntiSynergy);
        outcome.anti_synergies = anti;
        outcome.died = died;
        Ok(outcome)
    }
}
