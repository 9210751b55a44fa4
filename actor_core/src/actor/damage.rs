//! Damage application pipeline

use super::Actor;
use crate::events::{EffectCue, GameEvent, SoundCue};
use crate::status::StatusTrigger;
use crate::types::DamageType;

impl Actor {
    /// Apply a damage vector to this actor. Returns true on a killing blow.
    ///
    /// Mitigation order: flat thresholds (armor) first, then
    /// resistance/immunity/vulnerability scaling. Status buildup accumulates
    /// from the attacker's raw values: mitigation reduces the health loss,
    /// not the exposure; activation alone is gated by resistances.
    pub fn apply_damage(
        &mut self,
        damages: &[(DamageType, f64)],
        status_damage_percentage: f64,
        bleed_buildup: f64,
    ) -> bool {
        let mut events = std::mem::take(&mut self.events);

        let mut mitigated = damages.to_vec();
        self.damage_thresholds.modify_incoming_damage(&mut mitigated);
        self.damage_effects.modify_incoming_damage(&mut mitigated);

        let mut died = false;
        for (damage_type, amount) in &mitigated {
            if *amount <= 0.0 {
                continue;
            }
            events.push(GameEvent::FloatingText {
                amount: *amount,
                damage_type: *damage_type,
            });
            if self.health.decrease(*amount, *damage_type, &mut events) {
                died = true;
            }
        }

        let alive = self.health.is_alive();
        let triggers = self.statuses.increase_buildup(
            damages,
            status_damage_percentage,
            bleed_buildup,
            &self.damage_effects,
            alive,
            &mut events,
        );

        for trigger in triggers {
            match trigger {
                StatusTrigger::BloodLoss { fraction } => {
                    let damage = self.health.decrease_by_fraction_of_max(
                        fraction,
                        DamageType::Bleed,
                        &mut events,
                    );
                    if !self.health.is_alive() {
                        died = true;
                    }
                    events.push(GameEvent::BloodLoss { damage });
                    events.push(GameEvent::FloatingText {
                        amount: damage,
                        damage_type: DamageType::Bleed,
                    });
                    events.push(GameEvent::SpawnEffect {
                        cue: EffectCue::Bleeding,
                    });
                    events.push(GameEvent::PlaySound {
                        cue: SoundCue::BloodLoss,
                        volume: 1.0,
                    });
                }
                StatusTrigger::ChainLightning { damage } => {
                    events.push(GameEvent::ChainLightning { damage });
                    events.push(GameEvent::SpawnEffect {
                        cue: EffectCue::ChainLightningArc,
                    });
                    events.push(GameEvent::PlaySound {
                        cue: SoundCue::Shocked,
                        volume: 1.0,
                    });
                }
            }
        }

        self.events = events;
        died
    }

    /// Apply poise damage (stagger); a zero crossing knocks the actor down
    pub fn apply_poise_damage(&mut self, quantity: f64) {
        let mut events = std::mem::take(&mut self.events);
        self.poise.decrease(quantity, &mut events);
        self.events = events;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use crate::status::StatusChannel;

    fn actor() -> Actor {
        Actor::new("test", [0, 0, 0, 0, 0, 0], 0, GameConstants::default())
    }

    #[test]
    fn test_thresholds_then_category_scaling() {
        let mut actor = actor();
        actor
            .damage_thresholds
            .set_bases(&[(DamageType::Fire, 10.0)]);
        actor.damage_effects.resistances.push(DamageType::Fire);

        // (50 - 10) * 0.5 = 20 health lost
        actor.apply_damage(&[(DamageType::Fire, 50.0)], 0.0, 0.0);
        assert!((actor.health.current() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_immunity_prevents_health_loss_but_not_buildup() {
        let mut actor = actor();
        actor.damage_effects.immunities.push(DamageType::Poison);

        actor.apply_damage(&[(DamageType::Poison, 2000.0)], 0.1, 0.0);
        assert!((actor.health.current() - 100.0).abs() < f64::EPSILON);
        // raw exposure still accumulated, activation stayed gated
        assert!(actor.statuses.buildup(StatusChannel::Poisoned) > 0.0);
        assert!(!actor.statuses.is_active(StatusChannel::Poisoned));
    }

    #[test]
    fn test_killing_blow_reported_once() {
        let mut actor = actor();
        assert!(actor.apply_damage(&[(DamageType::Slashing, 150.0)], 0.1, 0.0));
        assert!(!actor.apply_damage(&[(DamageType::Slashing, 50.0)], 0.1, 0.0));
    }

    #[test]
    fn test_bleed_threshold_costs_fraction_of_max_health() {
        let mut actor = actor();
        actor.apply_damage(&[], 0.1, 150.0);

        // full blood loss with no reduction: entire max health
        assert!((actor.health.current() - 0.0).abs() < f64::EPSILON);
        assert!(!actor.health.is_alive());
        let events = actor.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::BloodLoss { .. })));
    }

    #[test]
    fn test_shock_threshold_emits_chain_lightning() {
        let mut actor = actor();
        actor.apply_damage(&[(DamageType::Shock, 1000.0)], 0.1, 0.0);

        let events = actor.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::ChainLightning { .. })));
    }

    #[test]
    fn test_poise_damage_triggers_knockdown() {
        let mut actor = actor();
        let max_poise = actor.poise.max_value();
        actor.apply_poise_damage(max_poise + 1.0);
        assert!(actor.is_incapacitated());
    }
}
