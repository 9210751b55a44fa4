//! Spells - castable school abilities, equipped into hands but not items

use crate::scores::DerivedStats;
use crate::types::School;
use serde::{Deserialize, Serialize};

/// A known spell. Effective cost/charge/power scale with the caster's
/// school skill at the moment of use, never baked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spell {
    pub id: u32,
    pub name: String,
    pub school: School,
    pub base_cost: f64,
    pub base_charge_time: f64,
    pub base_power: f64,
    /// Magic points burned per second while constant-casting (zero for
    /// discrete casts)
    pub burn_per_second: f64,
}

impl Spell {
    pub fn new(
        id: u32,
        name: &str,
        school: School,
        base_cost: f64,
        base_charge_time: f64,
        base_power: f64,
    ) -> Self {
        Spell {
            id,
            name: name.to_string(),
            school,
            base_cost,
            base_charge_time,
            base_power,
            burn_per_second: 0.0,
        }
    }

    pub fn effective_cost(&self, derived: &DerivedStats) -> f64 {
        self.base_cost * derived.school_cost_mod(self.school)
    }

    pub fn effective_charge_time(&self, derived: &DerivedStats) -> f64 {
        self.base_charge_time * derived.school_charge_mod(self.school)
    }

    pub fn effective_power(&self, derived: &DerivedStats) -> f64 {
        self.base_power * derived.school_power_mod(self.school)
    }
}
