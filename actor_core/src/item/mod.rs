//! Items: weapons, outfits, ammo, and miscellany as a closed tagged variant

mod spell;

pub use spell::Spell;

use crate::scores::Skill;
use crate::status::StatusChannel;
use crate::types::{AmmoType, DamageType};
use serde::{Deserialize, Serialize};

/// An inventory item. Identity is `id`; stacking merges equal ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub weight: f64,
    /// Base trade value before barter multipliers
    pub value: u64,
    /// Largest stack a single inventory entry may hold
    pub held_max: u32,
    pub kind: ItemKind,
    /// Statuses granted to the wearer while equipped
    pub on_equip_statuses: Vec<StatusChannel>,
}

impl Item {
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }

    pub fn is_outfit(&self) -> bool {
        matches!(self.kind, ItemKind::Outfit(_))
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut WeaponData> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_outfit(&self) -> Option<&OutfitData> {
        match &self.kind {
            ItemKind::Outfit(outfit) => Some(outfit),
            _ => None,
        }
    }

    pub fn ammo_type(&self) -> Option<AmmoType> {
        match &self.kind {
            ItemKind::Ammo(ammo_type) => Some(*ammo_type),
            _ => None,
        }
    }
}

/// Exhaustive item classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponData),
    Outfit(OutfitData),
    Ammo(AmmoType),
    Misc,
}

/// Weapon definition plus the clip state that persists between equips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponData {
    /// Skill that governs handling (charge time, spread)
    pub skill: Skill,
    pub kind: WeaponKind,
    /// Per-hit base damage instances
    pub base_damages: Vec<(DamageType, f64)>,
    pub base_charge_time: f64,
    /// Flat bleed buildup added per hit landed
    pub bleed_buildup: f64,
}

impl WeaponData {
    pub fn ranged(&self) -> Option<&RangedData> {
        match &self.kind {
            WeaponKind::Ranged(ranged) => Some(ranged),
            _ => None,
        }
    }

    pub fn ranged_mut(&mut self) -> Option<&mut RangedData> {
        match &mut self.kind {
            WeaponKind::Ranged(ranged) => Some(ranged),
            _ => None,
        }
    }

    /// Weapons that feed from the ammo reserves (thermal and throwing
    /// weapons do not reload)
    pub fn uses_clip(&self) -> bool {
        match &self.kind {
            WeaponKind::Ranged(ranged) => !ranged.is_throwing,
            _ => false,
        }
    }
}

/// Delivery subvariants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WeaponKind {
    Melee,
    Ranged(RangedData),
    /// Heat-based ranged weapon; builds heat instead of spending ammo
    Thermal,
}

/// Clip, ammo, and spread state for ranged weapons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangedData {
    pub ammo_type: AmmoType,
    pub clip_size: u32,
    /// Rounds currently chambered; written back to the item on unequip
    pub ammo_in_clip: u32,
    pub reload_time: f64,
    pub base_spread: f64,
    pub is_throwing: bool,
}

/// Outfit defenses applied as deltas on equip/unequip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutfitData {
    /// Added to max poise base while worn
    pub poise: f64,
    /// Flat damage thresholds granted while worn
    pub damage_thresholds: Vec<(DamageType, f64)>,
    /// Status buildup threshold bonuses while worn
    pub status_thresholds: Vec<(StatusChannel, f64)>,
    /// Percentage points of blood-loss reduction while worn
    pub bleed_reduction: f64,
}
