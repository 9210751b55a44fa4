//! Magic - spell point pool with a constant-cast burn driver

use super::Pool;
use crate::events::GameEvent;
use crate::item::Spell;
use crate::types::PoolKind;
use serde::{Deserialize, Serialize};

/// Magic points plus the actor's known spells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magic {
    pool: Pool,
    spells: Vec<Spell>,
}

impl Magic {
    pub fn new(max: f64, ticks_per_second: f64) -> Self {
        Magic {
            pool: Pool::new(max, ticks_per_second),
            spells: Vec::new(),
        }
    }

    pub fn current(&self) -> f64 {
        self.pool.current()
    }

    pub fn max_value(&self) -> f64 {
        self.pool.max_value()
    }

    pub fn is_burning(&self) -> bool {
        self.pool.is_draining()
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut Pool {
        &mut self.pool
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    /// Learn a spell; the list stays sorted by name
    pub fn add_spell(&mut self, spell: Spell) {
        self.spells.push(spell);
        self.spells.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn spell(&self, spell_id: u32) -> Option<&Spell> {
        self.spells.iter().find(|s| s.id == spell_id)
    }

    fn push_bar(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::HudBar {
            pool: PoolKind::Magic,
            value: self.pool.current(),
            max: self.pool.max_value(),
        });
    }

    pub fn increase(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        let delta = self.pool.increase(quantity);
        if delta.reached_max {
            events.push(GameEvent::RestoredToMax {
                pool: PoolKind::Magic,
            });
        }
        self.push_bar(events);
    }

    pub fn decrease(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        let delta = self.pool.decrease(quantity);
        if delta.reached_zero {
            events.push(GameEvent::Depleted {
                pool: PoolKind::Magic,
            });
        }
        self.push_bar(events);
    }

    pub fn increase_by_fraction_of_max(&mut self, fraction: f64, events: &mut Vec<GameEvent>) {
        self.increase(self.pool.max_value() * fraction, events);
    }

    /// Start burning points per second (constant-cast). Suspends regen.
    pub fn start_burn(&mut self, per_second: f64) {
        self.pool.start_drain(per_second);
    }

    /// Stop an active burn and resume regen
    pub fn stop_burn(&mut self) {
        self.pool.stop_drain();
    }

    pub fn tick(&mut self, dt: f64, events: &mut Vec<GameEvent>) {
        let result = self.pool.tick(dt);
        if result.delta.reached_zero {
            events.push(GameEvent::Depleted {
                pool: PoolKind::Magic,
            });
        }
        if result.drain_exhausted || result.delta.reached_zero || result.regen_ticks > 0 {
            self.push_bar(events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::School;

    #[test]
    fn test_burn_exhaustion_fires_depleted_and_resumes_regen() {
        let mut magic = Magic::new(10.0, 1.0);
        magic.pool_mut().set_regen_per_second(2.0);
        magic.pool_mut().start_regen();
        let mut events = Vec::new();

        magic.start_burn(5.0);
        assert!(magic.is_burning());
        assert!(!magic.pool().is_regen_active());

        magic.tick(1.0, &mut events);
        magic.tick(1.0, &mut events);
        assert!(!magic.is_burning());
        assert!(magic.pool().is_regen_active());
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::Depleted { pool: PoolKind::Magic }))
                .count(),
            1
        );
    }

    #[test]
    fn test_spell_list_sorted_by_name() {
        let mut magic = Magic::new(100.0, 1.0);
        magic.add_spell(Spell::new(2, "Wither", School::Erebancy, 10.0, 1.0, 20.0));
        magic.add_spell(Spell::new(1, "Cinder", School::Enkiism, 10.0, 1.0, 20.0));
        let names: Vec<&str> = magic.spells().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Cinder", "Wither"]);
    }
}
