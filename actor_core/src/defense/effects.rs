//! DamageEffects - per-actor resistance, immunity, and vulnerability sets

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Scales incoming damage by category membership.
///
/// Priority when a type appears in more than one list: immune > resistant >
/// vulnerable. First match wins, checked in that fixed order everywhere
/// (damage scaling here and status activation gating in `StatusEffects`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageEffects {
    pub resistances: Vec<DamageType>,
    pub immunities: Vec<DamageType>,
    pub vulnerabilities: Vec<DamageType>,
}

impl DamageEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale each damage in place: immunity zeroes, resistance halves,
    /// vulnerability doubles.
    pub fn modify_incoming_damage(&self, damages: &mut [(DamageType, f64)]) {
        for (damage_type, amount) in damages.iter_mut() {
            if self.immunities.contains(damage_type) {
                *amount = 0.0;
            } else if self.resistances.contains(damage_type) {
                *amount *= 0.5;
            } else if self.vulnerabilities.contains(damage_type) {
                *amount *= 2.0;
            }
        }
    }

    /// True when the type is resisted or outright immune; used to gate
    /// status effect activation
    pub fn resists_or_immune(&self, damage_type: DamageType) -> bool {
        self.resistances.contains(&damage_type) || self.immunities.contains(&damage_type)
    }

    pub fn is_immune(&self, damage_type: DamageType) -> bool {
        self.immunities.contains(&damage_type)
    }
}
