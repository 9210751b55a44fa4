//! Health - hit point pool with death and severe-damage transitions

use super::Pool;
use crate::config::PoolConstants;
use crate::events::{GameEvent, SoundCue};
use crate::types::{DamageType, PoolKind};
use serde::{Deserialize, Serialize};

/// Hit points. Death is terminal until health is explicitly raised above
/// zero again; severe-damage and restored-to-max transitions are
/// edge-triggered, never re-fired while the value sits past the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pool: Pool,
    alive: bool,
    severely_damaged: bool,
    /// Fraction of max at or below which the actor counts as severely damaged
    severe_damage_fraction: f64,
    shake_magnitude_multiplier: f64,
    shake_duration: f64,
}

impl Health {
    pub fn new(max: f64, constants: &PoolConstants) -> Self {
        Health {
            pool: Pool::new(max, constants.ticks_per_second),
            alive: true,
            severely_damaged: false,
            severe_damage_fraction: constants.severe_damage_fraction,
            shake_magnitude_multiplier: constants.shake_magnitude_multiplier,
            shake_duration: constants.shake_duration,
        }
    }

    pub fn current(&self) -> f64 {
        self.pool.current()
    }

    pub fn max_value(&self) -> f64 {
        self.pool.max_value()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_severely_damaged(&self) -> bool {
        self.severely_damaged
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    fn severe_threshold(&self) -> f64 {
        self.pool.max_value() * self.severe_damage_fraction
    }

    fn push_bar(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::HudBar {
            pool: PoolKind::Health,
            value: self.pool.current(),
            max: self.pool.max_value(),
        });
    }

    /// Heal, clamped to max. Revives a dead actor whose health rises above
    /// zero.
    pub fn increase(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        let delta = self.pool.increase(quantity);

        if delta.reached_max {
            events.push(GameEvent::RestoredToMax {
                pool: PoolKind::Health,
            });
        }
        if self.severely_damaged && self.pool.current() > self.severe_threshold() {
            self.severely_damaged = false;
            events.push(GameEvent::HealedSevereDamage);
        }
        if !self.alive && self.pool.current() > 0.0 {
            self.alive = true;
            events.push(GameEvent::Resurrected);
        }

        self.push_bar(events);
    }

    /// Take damage, clamped to zero. Returns true on the killing blow.
    pub fn decrease(
        &mut self,
        quantity: f64,
        damage_type: DamageType,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let delta = self.pool.decrease(quantity);

        events.push(GameEvent::PlaySound {
            cue: SoundCue::Impact,
            volume: 1.0,
        });
        events.push(GameEvent::ShakeCamera {
            magnitude: quantity * self.shake_magnitude_multiplier,
            duration: self.shake_duration,
        });
        events.push(GameEvent::Damaged { damage_type });
        self.push_bar(events);

        if !self.severely_damaged && self.pool.current() <= self.severe_threshold() {
            self.severely_damaged = true;
            events.push(GameEvent::SeverelyDamaged);
        }

        if delta.reached_zero && self.alive {
            self.alive = false;
            events.push(GameEvent::Died);
            return true;
        }

        false
    }

    pub fn increase_by_fraction_of_max(&mut self, fraction: f64, events: &mut Vec<GameEvent>) {
        self.increase(self.pool.max_value() * fraction, events);
    }

    /// Lose a fraction of max health; returns the damage dealt
    pub fn decrease_by_fraction_of_max(
        &mut self,
        fraction: f64,
        damage_type: DamageType,
        events: &mut Vec<GameEvent>,
    ) -> f64 {
        let quantity = self.pool.max_value() * fraction;
        self.decrease(quantity, damage_type, events);
        quantity
    }

    /// Set the current value directly, syncing the alive and severe flags
    /// (snapshot restore path)
    pub fn restore_current(&mut self, value: f64) {
        self.pool.set_current(value);
        self.alive = self.pool.current() > 0.0;
        self.severely_damaged = self.pool.current() <= self.severe_threshold();
    }

    /// Advance the regen ticker
    pub fn tick(&mut self, dt: f64, events: &mut Vec<GameEvent>) {
        let result = self.pool.tick(dt);
        if result.delta.reached_max {
            events.push(GameEvent::RestoredToMax {
                pool: PoolKind::Health,
            });
            self.push_bar(events);
        }
        if self.severely_damaged && self.pool.current() > self.severe_threshold() {
            self.severely_damaged = false;
            events.push(GameEvent::HealedSevereDamage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(events: &[GameEvent], wanted: &GameEvent) -> usize {
        events.iter().filter(|e| *e == wanted).count()
    }

    fn new_health() -> Health {
        Health::new(100.0, &PoolConstants::default())
    }

    #[test]
    fn test_death_fires_once_and_is_terminal() {
        let mut health = new_health();
        let mut events = Vec::new();

        assert!(health.decrease(150.0, DamageType::Slashing, &mut events));
        assert!(!health.is_alive());
        assert_eq!(count(&events, &GameEvent::Died), 1);

        // further hits while dead do not re-fire the death event
        assert!(!health.decrease(10.0, DamageType::Slashing, &mut events));
        assert_eq!(count(&events, &GameEvent::Died), 1);
    }

    #[test]
    fn test_resurrection_restores_alive() {
        let mut health = new_health();
        let mut events = Vec::new();
        health.decrease(150.0, DamageType::Fire, &mut events);

        health.increase(10.0, &mut events);
        assert!(health.is_alive());
        assert_eq!(count(&events, &GameEvent::Resurrected), 1);
    }

    #[test]
    fn test_severe_damage_is_edge_triggered() {
        let mut health = new_health();
        let mut events = Vec::new();

        health.decrease(75.0, DamageType::Blunt, &mut events);
        assert_eq!(count(&events, &GameEvent::SeverelyDamaged), 1);

        // still below the threshold: no second event
        health.decrease(5.0, DamageType::Blunt, &mut events);
        assert_eq!(count(&events, &GameEvent::SeverelyDamaged), 1);

        // climb back above, then drop again: one more each
        health.increase(50.0, &mut events);
        assert_eq!(count(&events, &GameEvent::HealedSevereDamage), 1);
        health.decrease(60.0, DamageType::Blunt, &mut events);
        assert_eq!(count(&events, &GameEvent::SeverelyDamaged), 2);
    }

    #[test]
    fn test_restored_to_max_once_per_crossing() {
        let mut health = new_health();
        let mut events = Vec::new();
        health.decrease(20.0, DamageType::Blunt, &mut events);

        health.increase(50.0, &mut events);
        let restored = GameEvent::RestoredToMax {
            pool: PoolKind::Health,
        };
        assert_eq!(count(&events, &restored), 1);

        health.increase(10.0, &mut events);
        assert_eq!(count(&events, &restored), 1);
    }

    #[test]
    fn test_regen_does_not_refire_restored_each_tick() {
        let mut health = new_health();
        let mut events = Vec::new();
        health.pool_mut().set_regen_per_second(10.0);
        health.pool_mut().start_regen();
        health.decrease(15.0, DamageType::Blunt, &mut events);
        events.clear();

        for _ in 0..10 {
            health.tick(1.0, &mut events);
        }
        let restored = GameEvent::RestoredToMax {
            pool: PoolKind::Health,
        };
        assert_eq!(count(&events, &restored), 1);
    }
}
