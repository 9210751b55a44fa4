//! Focus - focus point pool spent by implants and aimed actions

use super::Pool;
use crate::events::GameEvent;
use crate::types::PoolKind;
use serde::{Deserialize, Serialize};

/// Focus points; drained continuously while a focus ability is held
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Focus {
    pool: Pool,
}

impl Focus {
    pub fn new(max: f64, ticks_per_second: f64) -> Self {
        Focus {
            pool: Pool::new(max, ticks_per_second),
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

    fn push_bar(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::HudBar {
            pool: PoolKind::Focus,
            value: self.pool.current(),
            max: self.pool.max_value(),
        });
    }

    pub fn increase(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        let delta = self.pool.increase(quantity);
        if delta.reached_max {
            events.push(GameEvent::RestoredToMax {
                pool: PoolKind::Focus,
            });
        }
        self.push_bar(events);
    }

    pub fn decrease(&mut self, quantity: f64, events: &mut Vec<GameEvent>) {
        let delta = self.pool.decrease(quantity);
        if delta.reached_zero {
            events.push(GameEvent::Depleted {
                pool: PoolKind::Focus,
            });
        }
        self.push_bar(events);
    }

    pub fn start_burn(&mut self, per_second: f64) {
        self.pool.start_drain(per_second);
    }

    pub fn stop_burn(&mut self) {
        self.pool.stop_drain();
    }

    pub fn tick(&mut self, dt: f64, events: &mut Vec<GameEvent>) {
        let result = self.pool.tick(dt);
        if result.delta.reached_zero {
            events.push(GameEvent::Depleted {
                pool: PoolKind::Focus,
            });
        }
        if result.drain_exhausted || result.delta.reached_zero || result.regen_ticks > 0 {
            self.push_bar(events);
        }
    }
}
