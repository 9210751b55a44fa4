//! GameplayAttribute - base + modifier numeric cell with an optional floor

use serde::{Deserialize, Serialize};

/// A numeric stat cell: an owned base value plus an external modifier.
///
/// `value()` clamps to the floor; callers that need the raw sum (damage
/// thresholds can legitimately go negative from debuffs) use
/// `value_unfloored()`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameplayAttribute {
    pub base: f64,
    pub modifier: f64,
    pub floor: f64,
}

impl Default for GameplayAttribute {
    fn default() -> Self {
        GameplayAttribute {
            base: 0.0,
            modifier: 0.0,
            floor: 0.0,
        }
    }
}

impl GameplayAttribute {
    pub fn new(base: f64, modifier: f64, floor: f64) -> Self {
        GameplayAttribute {
            base,
            modifier,
            floor,
        }
    }

    /// Create with a base value, no modifier, floored at zero
    pub fn with_base(base: f64) -> Self {
        GameplayAttribute {
            base,
            modifier: 0.0,
            floor: 0.0,
        }
    }

    /// Current value, never below the floor
    pub fn value(&self) -> f64 {
        (self.base + self.modifier).max(self.floor)
    }

    /// Current value without floor clamping
    pub fn value_unfloored(&self) -> f64 {
        self.base + self.modifier
    }

    /// Replace the base, clamping negative requests to zero
    pub fn set_base(&mut self, base: f64) {
        self.base = base.max(0.0);
    }

    pub fn add_modifier(&mut self, delta: f64) {
        self.modifier += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_base_plus_modifier() {
        let mut attr = GameplayAttribute::with_base(100.0);
        attr.add_modifier(25.0);
        assert!((attr.value() - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_clamps_value() {
        let attr = GameplayAttribute::new(10.0, -50.0, 0.0);
        assert!((attr.value() - 0.0).abs() < f64::EPSILON);
        assert!((attr.value_unfloored() - -40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_base_rejects_negative() {
        let mut attr = GameplayAttribute::with_base(50.0);
        attr.set_base(-10.0);
        assert!((attr.base - 0.0).abs() < f64::EPSILON);
    }
}
