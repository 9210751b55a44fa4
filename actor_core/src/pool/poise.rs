//! Poise - stagger resistance with the knockdown state machine

use super::Pool;
use crate::config::PoolConstants;
use crate::events::{AnimFlag, GameEvent, SoundCue};
use crate::types::PoolKind;
use serde::{Deserialize, Serialize};

/// Poise pool. Reaching zero knocks the actor down for a fixed duration:
/// movement and equipped-item visibility freeze, poise regen freezes, then
/// the actor stands back up with poise refilled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poise {
    pool: Pool,
    knockdown_seconds: f64,
    knockdown_remaining: f64,
    incapacitated: bool,
}

impl Poise {
    pub fn new(max: f64, constants: &PoolConstants) -> Self {
        Poise {
            pool: Pool::new(max, constants.ticks_per_second),
            knockdown_seconds: constants.knockdown_seconds,
            knockdown_remaining: 0.0,
            incapacitated: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.pool.current()
    }

    pub fn max_value(&self) -> f64 {
        self.pool.max_value()
    }

    pub fn is_incapacitated(&self) -> bool {
        self.incapacitated
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    fn push_bar(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::HudBar {
            pool: PoolKind::Poise,
            value: self.pool.current(),
            max: self.pool.max_value(),
        });
    }

    pub fn increase(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        self.pool.increase(quantity);
        self.push_bar(events);
    }

    /// Take poise damage; a zero crossing starts the knockdown
    pub fn decrease(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        let delta = self.pool.decrease(quantity);
        self.push_bar(events);

        if delta.reached_zero && !self.incapacitated {
            self.begin_knockdown(events);
        }
    }

    fn begin_knockdown(&mut self, events: &mut Vec<GameEvent>) {
        self.incapacitated = true;
        self.knockdown_remaining = self.knockdown_seconds;
        self.pool.freeze_regen();

        events.push(GameEvent::KnockedDown);
        events.push(GameEvent::MovementFrozen);
        events.push(GameEvent::EquippedItemsHidden);
        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::KnockedDown,
            value: true,
        });
        events.push(GameEvent::PlaySound {
            cue: SoundCue::PoiseBreak,
            volume: 1.0,
        });
    }

    fn finish_knockdown(&mut self, events: &mut Vec<GameEvent>) {
        self.incapacitated = false;
        self.pool.refill();
        self.pool.start_regen();

        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::KnockedDown,
            value: false,
        });
        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::StandingUp,
            value: true,
        });
        events.push(GameEvent::StoodUp);
        events.push(GameEvent::MovementRestored);
        events.push(GameEvent::EquippedItemsShown);
        self.push_bar(events);
    }

    pub fn refill_to_max(&mut self, events: &mut Vec<GameEvent>) {
        self.pool.refill();
        self.push_bar(events);
    }

    /// Advance regen and the knockdown countdown
    pub fn tick(&mut self, dt: f64, events: &mut Vec<GameEvent>) {
        if self.incapacitated {
            self.knockdown_remaining -= dt;
            if self.knockdown_remaining <= 0.0 {
                self.finish_knockdown(events);
            }
            return;
        }

        self.pool.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(events: &[GameEvent], wanted: &GameEvent) -> usize {
        events.iter().filter(|e| *e == wanted).count()
    }

    #[test]
    fn test_poise_break_knocks_down_once() {
        let mut poise = Poise::new(50.0, &PoolConstants::default());
        let mut events = Vec::new();

        poise.decrease(60.0, &mut events);
        assert!(poise.is_incapacitated());
        assert_eq!(count(&events, &GameEvent::KnockedDown), 1);

        // hits while down do not restart the knockdown
        poise.decrease(10.0, &mut events);
        assert_eq!(count(&events, &GameEvent::KnockedDown), 1);
    }

    #[test]
    fn test_regen_frozen_while_down_then_standing_restores() {
        let mut poise = Poise::new(50.0, &PoolConstants::default());
        poise.pool_mut().set_regen_per_second(10.0);
        poise.pool_mut().start_regen();
        let mut events = Vec::new();

        poise.decrease(60.0, &mut events);
        poise.tick(0.5, &mut events);
        // no regen while incapacitated
        assert!((poise.current() - 0.0).abs() < f64::EPSILON);

        poise.tick(0.6, &mut events);
        assert!(!poise.is_incapacitated());
        assert_eq!(count(&events, &GameEvent::StoodUp), 1);
        assert!((poise.current() - poise.max_value()).abs() < f64::EPSILON);
        assert!(poise.pool().is_regen_active());
    }
}
