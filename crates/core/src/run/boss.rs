use super::*;
use crate::{calculate_combat, check_synergies, SynergyTotals};

impl RunState {
    /// Resolve a boss round: one formula evaluation, then victory spoils or
    /// the damage of a failed attempt.
    pub(super) fn boss_round(&mut self) -> RoundOutcome {
        let Some(boss) = self
            .content
            .pick_boss(self.state.round, &self.state.biome, &mut self.rng)
            .cloned()
        else {
            return RoundOutcome::Quiet;
        };

        let synergies = check_synergies(&self.inventory);
        let mut totals = SynergyTotals::from_results(&synergies);
        totals.attack += self.state.buff_attack;
        totals.defense += self.state.buff_defense;

        let combat = calculate_combat(
            &boss,
            &self.inventory,
            &totals,
            self.state.round,
            &self.config,
        );

        let mut report = BossReport {
            combat: combat.clone(),
            drops: Vec::new(),
            healed: 0,
            score_bonus: 0,
            gold_gained: 0,
            anti_synergies: Vec::new(),
            died: false,
        };

        if combat.victory {
            self.state.bosses_defeated += 1;
            report.score_bonus = self.config.combat.victory_score_bonus;
            self.state.score += report.score_bonus;
            report.gold_gained = self.config.combat.victory_gold;
            self.state.gold += report.gold_gained;

            let heal = (self.state.max_health as f64 * self.config.combat.victory_heal_fraction)
                .floor() as i64;
            let before = self.state.health;
            self.state.heal(heal);
            report.healed = self.state.health - before;

            // Guaranteed drops, capacity permitting; overflow is silently
            // skipped. Hazards never ride in as spoils, only through a
            // looted offer.
            for drop_id in &boss.guaranteed_drops {
                let Some(item) = self.content.item_by_id(drop_id).cloned() else {
                    continue;
                };
                if item.category.is_hazard() {
                    continue;
                }
                if self.inventory.add(item.clone()).is_ok() {
                    self.state.items_looted += 1;
                    report.drops.push(item);
                }
            }
            if !report.drops.is_empty() {
                let (anti, died) = self.settle_anti_synergies(DeathCause::AntiSynergy);
                report.anti_synergies = anti;
                report.died = died;
            }
        } else if self.state.take_damage(combat.damage_taken) {
            self.end(Some(DeathCause::BossFight));
            report.died = true;
        }

        RoundOutcome::Boss(report)
    }
}
