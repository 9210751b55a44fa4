//! Outgoing damage: attribute-scaled weapon stats and attack rolls

use crate::item::WeaponData;
use crate::scores::DerivedStats;
use crate::types::DamageType;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weapon handling numbers after the wielder's skills are applied.
///
/// Computed fresh at equip time and whenever scores change; the base item
/// is never mutated, so unequipping restores the pre-equip baseline by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub damages: Vec<(DamageType, f64)>,
    /// Projectile spread after skill reduction (ranged only, else zero)
    pub spread: f64,
    /// Seconds to a full charge after the skill's charge modifier
    pub charge_time: f64,
}

/// Scale a weapon's handling by the wielder's current skills
pub fn compute_weapon_stats(weapon: &WeaponData, derived: &DerivedStats) -> WeaponStats {
    let spread = match weapon.ranged() {
        Some(ranged) => {
            (ranged.base_spread * (1.0 - derived.spread_mod(weapon.skill))).max(0.0)
        }
        None => 0.0,
    };

    WeaponStats {
        damages: weapon.base_damages.clone(),
        spread,
        charge_time: weapon.base_charge_time * derived.charge_mod(weapon.skill),
    }
}

/// One resolved attack
#[derive(Debug, Clone)]
pub struct AttackRoll {
    pub damages: Vec<(DamageType, f64)>,
    pub crit: bool,
    /// The fired round carried the sweet-spot reload bonus
    pub bonus_round: bool,
}

/// Roll an attack with the thread RNG
pub fn roll_attack(
    stats: &WeaponStats,
    derived: &DerivedStats,
    bonus_round_multiplier: Option<f64>,
) -> AttackRoll {
    let mut rng = rand::thread_rng();
    roll_attack_with_rng(stats, derived, bonus_round_multiplier, &mut rng)
}

/// Roll an attack with a provided RNG (for deterministic testing)
pub fn roll_attack_with_rng(
    stats: &WeaponStats,
    derived: &DerivedStats,
    bonus_round_multiplier: Option<f64>,
    rng: &mut impl Rng,
) -> AttackRoll {
    let crit = rng.gen_range(0..100) < derived.crit_chance;

    let mut multiplier = 1.0;
    if crit {
        multiplier *= derived.crit_damage_multiplier;
    }
    if let Some(bonus) = bonus_round_multiplier {
        multiplier *= bonus;
    }

    AttackRoll {
        damages: stats
            .damages
            .iter()
            .map(|(damage_type, amount)| (*damage_type, amount * multiplier))
            .collect(),
        crit,
        bonus_round: bonus_round_multiplier.is_some(),
    }
}
