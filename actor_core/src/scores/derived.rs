//! DerivedStats - every stat that is a pure function of attributes + skills

use crate::config::GameConstants;
use crate::scores::{Attribute, Skill};
use crate::types::{lerp, School};
use serde::{Deserialize, Serialize};

/// The full dependent-stat block.
///
/// Never mutated directly: `recompute` rebuilds the whole block from the
/// current attribute/skill values, so a stale field cannot exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DerivedStats {
    // === Pool caps and regen ===
    pub max_health: f64,
    pub max_magic: f64,
    pub max_focus: f64,
    pub natural_poise: f64,
    pub magic_regen_per_second: f64,
    pub focus_regen_per_second: f64,

    // === Per-level pool growth (captured from attributes) ===
    pub max_health_per_level: f64,
    pub max_magic_per_level: f64,
    pub max_focus_per_level: f64,

    // === Carry and movement ===
    pub max_equip_load: f64,
    pub move_speed: f64,

    // === Criticals ===
    pub crit_chance: u32,
    pub crit_damage_multiplier: f64,

    // === Trade ===
    pub sell_multiplier: f64,
    pub buy_multiplier: f64,

    // === Spell schools (keyed by `School as usize`) ===
    pub school_power_mods: [f64; 6],
    pub school_cost_mods: [f64; 6],

    // === Weapon handling (keyed by `Skill as usize`) ===
    /// Charge-time multiplier for every skill; only weapon and school skills
    /// are ever read
    pub charge_mods: [f64; Skill::COUNT],
    /// Spread reduction for the three ranged weapon skills, zero elsewhere
    pub spread_mods: [f64; Skill::COUNT],

    // === Consumables and loot ===
    pub consumable_mod: f64,
    pub item_discovery: u32,

    // === Reloading ===
    pub reload_speed_multiplier: f64,
    pub sweet_spot_bonus: f64,
}

impl DerivedStats {
    /// Rebuild every field from the current scores
    pub fn recompute(
        &mut self,
        attributes: &[u32; Attribute::COUNT],
        skills: &[u32; Skill::COUNT],
        constants: &GameConstants,
    ) {
        let a = &constants.attributes;
        let s = &constants.skills;

        let attr = |which: Attribute| attributes[which as usize] as f64;
        let skill = |which: Skill| skills[which as usize] as f64;

        // attribute effects
        self.max_equip_load = a.equip_load_base + a.equip_load_per_strength * attr(Attribute::Strength);

        self.max_focus = a.max_focus_base + a.focus_per_perception * attr(Attribute::Perception);
        self.crit_chance = a.crit_chance_base
            + a.crit_chance_per_perception * attributes[Attribute::Perception as usize];
        self.max_focus_per_level =
            a.focus_per_level_per_perception * attr(Attribute::Perception);

        self.max_health = a.max_health_base + a.health_per_endurance * attr(Attribute::Endurance);
        self.natural_poise = a.natural_poise_base + a.poise_per_endurance * attr(Attribute::Endurance);
        self.max_health_per_level =
            a.health_per_level_per_endurance * attr(Attribute::Endurance);

        self.max_magic = a.max_magic_base + a.magic_per_intelligence * attr(Attribute::Intelligence);
        self.max_magic_per_level =
            a.magic_per_level_per_intelligence * attr(Attribute::Intelligence);

        self.focus_regen_per_second =
            a.focus_regen_base + a.focus_regen_per_agility * attr(Attribute::Agility);

        self.magic_regen_per_second =
            a.magic_regen_base + a.magic_regen_per_aberrance * attr(Attribute::Aberrance);
        self.crit_damage_multiplier = a.crit_damage_multiplier_base
            + a.crit_damage_multiplier_per_aberrance * attr(Attribute::Aberrance);

        // skill effects
        self.move_speed = s.move_speed_base + s.move_speed_per_acrobatics * skill(Skill::Acrobatics);

        self.sell_multiplier = lerp(
            s.min_sell_multiplier,
            s.max_sell_multiplier,
            skill(Skill::Barter) / 100.0,
        );
        self.buy_multiplier = lerp(
            s.min_buy_multiplier,
            s.max_buy_multiplier,
            1.0 - skill(Skill::Barter) / 100.0,
        );

        for school in School::ALL {
            let value = skill(school.skill());
            self.school_power_mods[school as usize] =
                s.school_power_base + s.school_power_per_point * value;
            self.school_cost_mods[school as usize] =
                lerp(s.min_spell_cost_mod, s.max_spell_cost_mod, 1.0 - value / 100.0);
        }

        // one lerp for every skill; only the weapon and school skills matter
        for which in Skill::ALL {
            self.charge_mods[which as usize] = lerp(
                s.min_charge_mod,
                s.max_charge_mod,
                1.0 - skill(which) / 100.0,
            );
        }

        self.spread_mods = [0.0; Skill::COUNT];
        for which in [Skill::HeavyWeapons, Skill::Pistols, Skill::Rifles] {
            self.spread_mods[which as usize] = s.spread_mod_per_point * skill(which);
        }

        self.consumable_mod =
            s.consumable_mod_base + s.consumable_mod_per_point * skill(Skill::Resourcefulness);
        self.item_discovery = s.item_discovery_base
            + s.item_discovery_per_point * skills[Skill::Resourcefulness as usize];

        self.reload_speed_multiplier = s.reload_speed_multiplier_base
            + s.reload_speed_multiplier_per_point * skill(Skill::SleightOfHand);
        self.sweet_spot_bonus = (s.sweet_spot_bonus_base
            + s.sweet_spot_bonus_per_point * skill(Skill::SleightOfHand))
        .min(s.sweet_spot_bonus_max);
    }

    /// Charge-time multiplier for a spell school
    pub fn school_charge_mod(&self, school: School) -> f64 {
        self.charge_mods[school.skill() as usize]
    }

    /// Cost multiplier for a spell school
    pub fn school_cost_mod(&self, school: School) -> f64 {
        self.school_cost_mods[school as usize]
    }

    /// Damage/effect multiplier for a spell school
    pub fn school_power_mod(&self, school: School) -> f64 {
        self.school_power_mods[school as usize]
    }

    /// Charge-time multiplier for a weapon skill
    pub fn charge_mod(&self, skill: Skill) -> f64 {
        self.charge_mods[skill as usize]
    }

    /// Spread reduction for a ranged weapon skill
    pub fn spread_mod(&self, skill: Skill) -> f64 {
        self.spread_mods[skill as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recomputed(attributes: [u32; 6], skills: [u32; 18]) -> DerivedStats {
        let mut derived = DerivedStats::default();
        derived.recompute(&attributes, &skills, &GameConstants::default());
        derived
    }

    #[test]
    fn test_pool_caps_scale_with_attributes() {
        // END 5, INT 3, PER 2
        let derived = recomputed([0, 2, 5, 3, 0, 0], [0; 18]);
        assert!((derived.max_health - 150.0).abs() < f64::EPSILON);
        assert!((derived.max_magic - 103.0).abs() < f64::EPSILON);
        assert!((derived.max_focus - 120.0).abs() < f64::EPSILON);
        assert!((derived.natural_poise - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_equip_load_scales_with_strength() {
        let derived = recomputed([7, 0, 0, 0, 0, 0], [0; 18]);
        assert!((derived.max_equip_load - 27.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_fields() {
        let derived = recomputed([0, 4, 0, 0, 0, 5], [0; 18]);
        assert_eq!(derived.crit_chance, 4);
        assert!((derived.crit_damage_multiplier - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_barter_multipliers_lerp() {
        let mut skills = [0u32; 18];
        skills[Skill::Barter as usize] = 50;
        let derived = recomputed([0; 6], skills);
        // sell: lerp(0.5, 1.5, 0.5) = 1.0; buy: lerp(0.5, 2.0, 0.5) = 1.25
        assert!((derived.sell_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((derived.buy_multiplier - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_school_mods() {
        let mut skills = [0u32; 18];
        skills[Skill::Enkiism as usize] = 100;
        let derived = recomputed([0; 6], skills);
        assert!((derived.school_power_mod(School::Enkiism) - 3.0).abs() < f64::EPSILON);
        // fully trained school costs the minimum
        assert!((derived.school_cost_mod(School::Enkiism) - 0.5).abs() < f64::EPSILON);
        assert!((derived.school_charge_mod(School::Enkiism) - 0.5).abs() < f64::EPSILON);
        // untrained school pays the maximum
        assert!((derived.school_cost_mod(School::Erebancy) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spread_mod_only_for_ranged_skills() {
        let mut skills = [0u32; 18];
        skills[Skill::Rifles as usize] = 10;
        skills[Skill::Blade as usize] = 10;
        let derived = recomputed([0; 6], skills);
        assert!((derived.spread_mod(Skill::Rifles) - 0.4).abs() < f64::EPSILON);
        assert!((derived.spread_mod(Skill::Blade) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sweet_spot_bonus_clamped() {
        let mut skills = [0u32; 18];
        skills[Skill::SleightOfHand as usize] = 100;
        let derived = recomputed([0; 6], skills);
        // 0.005 * 100 = 0.5, clamped to the configured max
        assert!((derived.sweet_spot_bonus - 0.2).abs() < f64::EPSILON);
        assert!((derived.reload_speed_multiplier - 3.0).abs() < f64::EPSILON);
    }
}
