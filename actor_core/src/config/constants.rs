//! Tunable gameplay constants
//!
//! Every derivation formula in the crate reads its coefficients from here so
//! balance passes are data edits, not code edits. Partial TOML files parse:
//! each section falls back to its defaults.

use serde::{Deserialize, Serialize};

/// Aggregate of all tunable constant groups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConstants {
    pub attributes: AttributeConstants,
    pub skills: SkillConstants,
    pub pools: PoolConstants,
    pub status: StatusConstants,
    pub reload: ReloadConstants,
    pub leveling: LevelConstants,
}

impl GameConstants {
    /// Parse from a TOML string, missing sections keep defaults
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Per-point effects of the six primary attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeConstants {
    // Strength
    pub equip_load_base: f64,
    pub equip_load_per_strength: f64,
    // Perception
    pub max_focus_base: f64,
    pub focus_per_perception: f64,
    pub crit_chance_base: u32,
    pub crit_chance_per_perception: u32,
    pub focus_per_level_per_perception: f64,
    // Endurance
    pub max_health_base: f64,
    pub health_per_endurance: f64,
    pub natural_poise_base: f64,
    pub poise_per_endurance: f64,
    pub health_per_level_per_endurance: f64,
    // Intelligence
    pub max_magic_base: f64,
    pub magic_per_intelligence: f64,
    pub magic_per_level_per_intelligence: f64,
    // Agility
    pub focus_regen_base: f64,
    pub focus_regen_per_agility: f64,
    // Aberrance
    pub magic_regen_base: f64,
    pub magic_regen_per_aberrance: f64,
    pub crit_damage_multiplier_base: f64,
    pub crit_damage_multiplier_per_aberrance: f64,
}

impl Default for AttributeConstants {
    fn default() -> Self {
        AttributeConstants {
            equip_load_base: 20.0,
            equip_load_per_strength: 1.0,
            max_focus_base: 100.0,
            focus_per_perception: 10.0,
            crit_chance_base: 0,
            crit_chance_per_perception: 1,
            focus_per_level_per_perception: 2.0,
            max_health_base: 100.0,
            health_per_endurance: 10.0,
            natural_poise_base: 50.0,
            poise_per_endurance: 5.0,
            health_per_level_per_endurance: 2.0,
            max_magic_base: 100.0,
            magic_per_intelligence: 1.0,
            magic_per_level_per_intelligence: 2.0,
            focus_regen_base: 1.0,
            focus_regen_per_agility: 1.0,
            magic_regen_base: 1.0,
            magic_regen_per_aberrance: 1.0,
            crit_damage_multiplier_base: 2.0,
            crit_damage_multiplier_per_aberrance: 0.2,
        }
    }
}

/// Per-point effects of the eighteen skills
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConstants {
    /// Flat bonus granted once per proficiency tag
    pub tag_bonus: u32,
    // Acrobatics
    pub move_speed_base: f64,
    pub move_speed_per_acrobatics: f64,
    // Barter
    pub min_sell_multiplier: f64,
    pub max_sell_multiplier: f64,
    pub min_buy_multiplier: f64,
    pub max_buy_multiplier: f64,
    // Spell schools
    pub school_power_base: f64,
    pub school_power_per_point: f64,
    pub min_spell_cost_mod: f64,
    pub max_spell_cost_mod: f64,
    // Charge times (ranged, melee, throwing, spells)
    pub min_charge_mod: f64,
    pub max_charge_mod: f64,
    // Ranged spread
    pub spread_mod_per_point: f64,
    // Resourcefulness
    pub consumable_mod_base: f64,
    pub consumable_mod_per_point: f64,
    pub item_discovery_base: u32,
    pub item_discovery_per_point: u32,
    // Sleight of hand
    pub reload_speed_multiplier_base: f64,
    pub reload_speed_multiplier_per_point: f64,
    pub sweet_spot_bonus_base: f64,
    pub sweet_spot_bonus_per_point: f64,
    pub sweet_spot_bonus_max: f64,
}

impl Default for SkillConstants {
    fn default() -> Self {
        SkillConstants {
            tag_bonus: 15,
            move_speed_base: 5.0,
            move_speed_per_acrobatics: 0.5,
            min_sell_multiplier: 0.5,
            max_sell_multiplier: 1.5,
            min_buy_multiplier: 0.5,
            max_buy_multiplier: 2.0,
            school_power_base: 1.0,
            school_power_per_point: 0.02,
            min_spell_cost_mod: 0.5,
            max_spell_cost_mod: 1.5,
            min_charge_mod: 0.5,
            max_charge_mod: 1.5,
            spread_mod_per_point: 0.04,
            consumable_mod_base: 0.0,
            consumable_mod_per_point: 0.15,
            item_discovery_base: 100,
            item_discovery_per_point: 3,
            reload_speed_multiplier_base: 1.0,
            reload_speed_multiplier_per_point: 0.02,
            sweet_spot_bonus_base: 0.0,
            sweet_spot_bonus_per_point: 0.005,
            sweet_spot_bonus_max: 0.2,
        }
    }
}

/// Pool regen rates and transition thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConstants {
    /// Regen ticks per second for every pool
    pub ticks_per_second: f64,
    /// Fraction of max health at or below which the actor is severely damaged
    pub severe_damage_fraction: f64,
    /// Seconds an actor stays down after a poise break
    pub knockdown_seconds: f64,
    /// Camera shake scaling when the player takes damage
    pub shake_magnitude_multiplier: f64,
    pub shake_duration: f64,
}

impl Default for PoolConstants {
    fn default() -> Self {
        PoolConstants {
            ticks_per_second: 1.0,
            severe_damage_fraction: 0.3,
            knockdown_seconds: 1.0,
            shake_magnitude_multiplier: 0.25,
            shake_duration: 0.5,
        }
    }
}

/// Status buildup thresholds and decay rates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConstants {
    /// Fraction of each damage instance converted into buildup
    pub status_damage_percentage: f64,
    /// Decay ticks per second, shared by all channels
    pub decay_ticks_per_second: f64,
    pub burning_threshold: f64,
    pub poisoned_threshold: f64,
    pub frost_threshold: f64,
    pub shocked_threshold: f64,
    pub decay_threshold: f64,
    pub insanity_threshold: f64,
    pub bleed_threshold: f64,
    pub burning_decay_per_second: f64,
    pub poisoned_decay_per_second: f64,
    pub frost_decay_per_second: f64,
    pub shocked_decay_per_second: f64,
    pub decay_decay_per_second: f64,
    pub insanity_decay_per_second: f64,
    pub bleed_decay_per_second: f64,
    /// Percentage points subtracted from the blood-loss health fraction
    pub bleed_reduction: f64,
}

impl Default for StatusConstants {
    fn default() -> Self {
        StatusConstants {
            status_damage_percentage: 0.1,
            decay_ticks_per_second: 10.0,
            burning_threshold: 100.0,
            poisoned_threshold: 100.0,
            frost_threshold: 100.0,
            shocked_threshold: 100.0,
            decay_threshold: 100.0,
            insanity_threshold: 100.0,
            bleed_threshold: 100.0,
            burning_decay_per_second: 20.0,
            poisoned_decay_per_second: 20.0,
            frost_decay_per_second: 20.0,
            shocked_decay_per_second: 20.0,
            decay_decay_per_second: 20.0,
            insanity_decay_per_second: 20.0,
            bleed_decay_per_second: 20.0,
            bleed_reduction: 0.0,
        }
    }
}

/// Active reload window placement and payoffs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReloadConstants {
    /// Slider fraction where the sweet spot begins
    pub sweet_spot_start: f64,
    /// Slider fraction where the sweet spot ends (normal spot starts here)
    pub sweet_spot_end: f64,
    /// Slider fraction where the normal spot ends
    pub normal_spot_end: f64,
    /// Countdown rate multiplier after hitting either spot
    pub sweet_spot_speed_factor: f64,
    /// Damage multiplier applied to bonus rounds
    pub sweet_spot_damage_multiplier: f64,
}

impl Default for ReloadConstants {
    fn default() -> Self {
        ReloadConstants {
            sweet_spot_start: 0.4,
            sweet_spot_end: 0.5,
            normal_spot_end: 0.7,
            sweet_spot_speed_factor: 2.0,
            sweet_spot_damage_multiplier: 1.5,
        }
    }
}

/// Level-up cost curve coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConstants {
    pub cubic_coefficient: f64,
    pub quadratic_coefficient: f64,
    pub linear_coefficient: f64,
    /// Cost discount per intelligence point, capped at 100%
    pub discount_per_intelligence: f64,
}

impl Default for LevelConstants {
    fn default() -> Self {
        LevelConstants {
            cubic_coefficient: 0.15,
            quadratic_coefficient: 3.0,
            linear_coefficient: 110.0,
            discount_per_intelligence: 0.025,
        }
    }
}
