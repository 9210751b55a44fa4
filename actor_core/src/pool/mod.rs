//! Pools - capped, regenerating/drainable numeric resources
//!
//! One generic `Pool` drives the shared state machine:
//! `Idle(regen) ⇄ Draining(regen suspended) → Idle on exhaustion`.
//! Health/Magic/Focus/Poise wrap it with their own transition events.

mod focus;
mod health;
mod magic;
mod poise;

pub use focus::Focus;
pub use health::Health;
pub use magic::Magic;
pub use poise::Poise;

use crate::attribute::GameplayAttribute;
use serde::{Deserialize, Serialize};

/// Active drain driver; its presence suspends the regen driver
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Drain {
    per_tick: f64,
    elapsed: f64,
}

/// What a single mutation did, for edge-triggered event translation
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolDelta {
    /// Crossed up to the cap this call
    pub reached_max: bool,
    /// Crossed down to zero this call
    pub reached_zero: bool,
}

/// What one simulation tick did
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolTick {
    pub regen_ticks: u32,
    pub delta: PoolDelta,
    /// The drain driver ran dry and the regen driver resumed
    pub drain_exhausted: bool,
}

/// Shared pool core: clamped current value, regen ticker, optional drain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    current: f64,
    max: GameplayAttribute,
    ticks_per_second: f64,
    regen_per_tick: f64,
    regen_per_second: f64,
    regen_active: bool,
    regen_elapsed: f64,
    drain: Option<Drain>,
}

impl Pool {
    pub fn new(max: f64, ticks_per_second: f64) -> Self {
        Pool {
            current: max,
            max: GameplayAttribute::with_base(max),
            ticks_per_second,
            regen_per_tick: 0.0,
            regen_per_second: 0.0,
            regen_active: false,
            regen_elapsed: 0.0,
            drain: None,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> &GameplayAttribute {
        &self.max
    }

    pub fn max_value(&self) -> f64 {
        self.max.value()
    }

    pub fn regen_per_second(&self) -> f64 {
        self.regen_per_second
    }

    pub fn is_regen_active(&self) -> bool {
        self.regen_active
    }

    pub fn is_draining(&self) -> bool {
        self.drain.is_some()
    }

    pub fn set_regen_per_second(&mut self, per_second: f64) {
        self.regen_per_second = per_second;
        self.regen_per_tick = per_second / self.ticks_per_second;
    }

    /// Start the regen driver. Starting an active driver is a no-op.
    pub fn start_regen(&mut self) {
        if !self.regen_active {
            self.regen_active = true;
            self.regen_elapsed = 0.0;
        }
    }

    pub fn freeze_regen(&mut self) {
        self.regen_active = false;
    }

    /// Start a drain driver, suspending regen. A second drain is a no-op.
    pub fn start_drain(&mut self, per_second: f64) {
        if self.drain.is_none() {
            self.freeze_regen();
            self.drain = Some(Drain {
                per_tick: per_second / self.ticks_per_second,
                elapsed: 0.0,
            });
        }
    }

    /// Stop an active drain and resume regen
    pub fn stop_drain(&mut self) {
        if self.drain.take().is_some() {
            self.start_regen();
        }
    }

    /// Raise `current`, clamped to max. Reports the upward cap crossing.
    pub fn increase(&mut self, quantity: f64) -> PoolDelta {
        let max = self.max_value();
        let before = self.current;
        self.current = (self.current + quantity).min(max);

        PoolDelta {
            reached_max: before < max && self.current >= max,
            reached_zero: false,
        }
    }

    /// Lower `current`, clamped to zero. Reports the downward zero crossing.
    pub fn decrease(&mut self, quantity: f64) -> PoolDelta {
        let before = self.current;
        self.current = (self.current - quantity).max(0.0);

        PoolDelta {
            reached_max: false,
            reached_zero: before > 0.0 && self.current <= 0.0,
        }
    }

    /// Force a value, clamped into `[0, max]`
    pub fn set_current(&mut self, value: f64) {
        self.current = value.clamp(0.0, self.max_value());
    }

    pub fn refill(&mut self) {
        self.current = self.max_value();
    }

    /// Replace the max base value; negative requests clamp to zero.
    /// Current is clamped into the new range without firing cap events.
    pub fn set_max_base(&mut self, base: f64) {
        self.max.set_base(base);
        self.current = self.current.min(self.max_value());
    }

    /// Shift the max base by a delta, optionally moving current with it
    pub fn add_max_base(&mut self, delta: f64, change_current: bool) {
        self.max.set_base(self.max.base + delta);
        if change_current {
            if delta > 0.0 && self.current < self.max_value() {
                self.current += delta;
            } else if delta < 0.0 && self.current > self.max_value() {
                self.current += delta;
            }
        }
        self.current = self.current.clamp(0.0, self.max_value().max(0.0));
    }

    pub fn add_max_modifier(&mut self, delta: f64) {
        self.max.add_modifier(delta);
        self.current = self.current.min(self.max_value());
    }

    /// Advance drain (if any) and regen tickers by `dt` seconds
    pub fn tick(&mut self, dt: f64) -> PoolTick {
        let mut result = PoolTick::default();
        let interval = 1.0 / self.ticks_per_second;

        if let Some(drain) = &mut self.drain {
            drain.elapsed += dt;
            while drain.elapsed >= interval && self.current > 0.0 {
                drain.elapsed -= interval;
                let before = self.current;
                self.current = (self.current - drain.per_tick).max(0.0);
                if before > 0.0 && self.current <= 0.0 {
                    result.delta.reached_zero = true;
                }
            }
            if self.current <= 0.0 {
                self.drain = None;
                self.start_regen();
                result.drain_exhausted = true;
            }
            return result;
        }

        if self.regen_active {
            self.regen_elapsed += dt;
            while self.regen_elapsed >= interval {
                self.regen_elapsed -= interval;
                if self.current < self.max_value() {
                    let delta = self.increase(self.regen_per_tick);
                    result.regen_ticks += 1;
                    if delta.reached_max {
                        result.delta.reached_max = true;
                    }
                }
            }
        }

        result
    }
}
