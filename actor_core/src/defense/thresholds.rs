//! DamageThresholds - flat per-type damage reduction (armor DT)

use crate::attribute::GameplayAttribute;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Flat damage thresholds, one cell per damage type.
///
/// Each threshold is a `GameplayAttribute` so buffs can push the modifier
/// while outfits own the base; the unfloored value is used so a debuffed
/// threshold can go negative (and add damage back).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageThresholds {
    thresholds: [GameplayAttribute; DamageType::ALL.len()],
}

impl DamageThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self, damage_type: DamageType) -> &GameplayAttribute {
        &self.thresholds[damage_type.index()]
    }

    pub fn threshold_mut(&mut self, damage_type: DamageType) -> &mut GameplayAttribute {
        &mut self.thresholds[damage_type.index()]
    }

    /// Subtract each type's threshold from the matching damages.
    /// Damage never goes negative.
    pub fn modify_incoming_damage(&self, damages: &mut [(DamageType, f64)]) {
        for (damage_type, amount) in damages.iter_mut() {
            let threshold = self.thresholds[damage_type.index()].value_unfloored();
            *amount = (*amount - threshold).max(0.0);
        }
    }

    /// Replace every base threshold (outfit swap path). Types not present in
    /// `bases` reset to zero.
    pub fn set_bases(&mut self, bases: &[(DamageType, f64)]) {
        for cell in &mut self.thresholds {
            cell.base = 0.0;
        }
        for (damage_type, base) in bases {
            self.thresholds[damage_type.index()].base = *base;
        }
    }

    /// Zero every base threshold (outfit removed)
    pub fn clear_bases(&mut self) {
        self.set_bases(&[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_subtract_flat() {
        let mut thresholds = DamageThresholds::new();
        thresholds.set_bases(&[(DamageType::Blunt, 15.0)]);

        let mut damages = vec![(DamageType::Blunt, 40.0), (DamageType::Fire, 40.0)];
        thresholds.modify_incoming_damage(&mut damages);
        assert!((damages[0].1 - 25.0).abs() < f64::EPSILON);
        assert!((damages[1].1 - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_damage_never_negative() {
        let mut thresholds = DamageThresholds::new();
        thresholds.set_bases(&[(DamageType::Piercing, 100.0)]);

        let mut damages = vec![(DamageType::Piercing, 30.0)];
        thresholds.modify_incoming_damage(&mut damages);
        assert!((damages[0].1 - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_threshold_adds_damage() {
        let mut thresholds = DamageThresholds::new();
        thresholds.threshold_mut(DamageType::Energy).modifier = -10.0;

        let mut damages = vec![(DamageType::Energy, 30.0)];
        thresholds.modify_incoming_damage(&mut damages);
        assert!((damages[0].1 - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_bases_resets_missing_types() {
        let mut thresholds = DamageThresholds::new();
        thresholds.set_bases(&[(DamageType::Blunt, 10.0), (DamageType::Fire, 5.0)]);
        thresholds.set_bases(&[(DamageType::Blunt, 4.0)]);

        assert!((thresholds.threshold(DamageType::Blunt).value() - 4.0).abs() < f64::EPSILON);
        assert!((thresholds.threshold(DamageType::Fire).value() - 0.0).abs() < f64::EPSILON);
    }
}
