//! AttributeScores - primary attributes, skills, and their derived stats

mod derived;

pub use derived::DerivedStats;

use crate::config::{GameConstants, LevelConstants};
use crate::types::School;
use serde::{Deserialize, Serialize};

/// The six primary attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Perception,
    Endurance,
    Intelligence,
    Agility,
    Aberrance,
}

impl Attribute {
    pub const COUNT: usize = 6;

    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Strength,
        Attribute::Perception,
        Attribute::Endurance,
        Attribute::Intelligence,
        Attribute::Agility,
        Attribute::Aberrance,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Perception => "PER",
            Attribute::Endurance => "END",
            Attribute::Intelligence => "INT",
            Attribute::Agility => "AGI",
            Attribute::Aberrance => "ABR",
        }
    }
}

/// The eighteen trainable skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Acrobatics,
    Barter,
    Blade,
    Bludgeoning,
    Enkiism,
    Erebancy,
    Explosives,
    Gaianism,
    HeavyWeapons,
    Hermeticism,
    Iktomancy,
    Pistols,
    Polearms,
    Reshephism,
    Resourcefulness,
    Rifles,
    SleightOfHand,
    Throwing,
}

impl Skill {
    pub const COUNT: usize = 18;

    pub const ALL: [Skill; Self::COUNT] = [
        Skill::Acrobatics,
        Skill::Barter,
        Skill::Blade,
        Skill::Bludgeoning,
        Skill::Enkiism,
        Skill::Erebancy,
        Skill::Explosives,
        Skill::Gaianism,
        Skill::HeavyWeapons,
        Skill::Hermeticism,
        Skill::Iktomancy,
        Skill::Pistols,
        Skill::Polearms,
        Skill::Reshephism,
        Skill::Resourcefulness,
        Skill::Rifles,
        Skill::SleightOfHand,
        Skill::Throwing,
    ];

    /// The attribute that seeds this skill's starting value
    pub fn governing_attribute(self) -> Attribute {
        match self {
            Skill::Acrobatics => Attribute::Agility,
            Skill::Barter => Attribute::Intelligence,
            Skill::Blade => Attribute::Strength,
            Skill::Bludgeoning => Attribute::Strength,
            Skill::Enkiism => Attribute::Intelligence,
            Skill::Erebancy => Attribute::Aberrance,
            Skill::Explosives => Attribute::Perception,
            Skill::Gaianism => Attribute::Aberrance,
            Skill::HeavyWeapons => Attribute::Strength,
            Skill::Hermeticism => Attribute::Intelligence,
            Skill::Iktomancy => Attribute::Aberrance,
            Skill::Pistols => Attribute::Agility,
            Skill::Polearms => Attribute::Strength,
            Skill::Reshephism => Attribute::Intelligence,
            Skill::Resourcefulness => Attribute::Endurance,
            Skill::Rifles => Attribute::Perception,
            Skill::SleightOfHand => Attribute::Agility,
            Skill::Throwing => Attribute::Strength,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::Barter => "Barter",
            Skill::Blade => "Blade",
            Skill::Bludgeoning => "Bludgeoning",
            Skill::Enkiism => "Enkiism",
            Skill::Erebancy => "Erebancy",
            Skill::Explosives => "Explosives",
            Skill::Gaianism => "Gaianism",
            Skill::HeavyWeapons => "Heavy Weapons",
            Skill::Hermeticism => "Hermeticism",
            Skill::Iktomancy => "Iktomancy",
            Skill::Pistols => "Pistols",
            Skill::Polearms => "Polearms",
            Skill::Reshephism => "Reshephism",
            Skill::Resourcefulness => "Resourcefulness",
            Skill::Rifles => "Rifles",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Throwing => "Throwing",
        }
    }
}

impl School {
    /// The skill that trains this school
    pub fn skill(self) -> Skill {
        match self {
            School::Enkiism => Skill::Enkiism,
            School::Erebancy => Skill::Erebancy,
            School::Gaianism => Skill::Gaianism,
            School::Hermeticism => Skill::Hermeticism,
            School::Iktomancy => Skill::Iktomancy,
            School::Reshephism => Skill::Reshephism,
        }
    }
}

/// Character sheet: primaries, skills, and the dependent stat block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeScores {
    pub level: u32,
    pub total_attribute_points: u32,
    pub unused_points: u32,
    pub total_tags: u32,
    pub unused_tags: u32,
    attributes: [u32; Attribute::COUNT],
    skills: [u32; Skill::COUNT],
    proficiencies: [bool; Skill::COUNT],
    #[serde(skip)]
    constants: GameConstants,
    derived: DerivedStats,
}

impl Default for AttributeScores {
    fn default() -> Self {
        Self::new(GameConstants::default())
    }
}

impl AttributeScores {
    pub fn new(constants: GameConstants) -> Self {
        let mut scores = AttributeScores {
            level: 1,
            total_attribute_points: 0,
            unused_points: 0,
            total_tags: 3,
            unused_tags: 3,
            attributes: [0; Attribute::COUNT],
            skills: [0; Skill::COUNT],
            proficiencies: [false; Skill::COUNT],
            constants,
            derived: DerivedStats::default(),
        };
        scores.recompute_derived();
        scores
    }

    pub fn attribute(&self, which: Attribute) -> u32 {
        self.attributes[which as usize]
    }

    pub fn skill(&self, which: Skill) -> u32 {
        self.skills[which as usize]
    }

    pub fn skills(&self) -> &[u32; Skill::COUNT] {
        &self.skills
    }

    pub fn attributes(&self) -> &[u32; Attribute::COUNT] {
        &self.attributes
    }

    pub fn has_proficiency(&self, skill: Skill) -> bool {
        self.proficiencies[skill as usize]
    }

    pub fn proficiencies(&self) -> &[bool; Skill::COUNT] {
        &self.proficiencies
    }

    /// Restore proficiency flags without re-granting tag bonuses; snapshot
    /// restore sets flags first, then overwrites skills with stored values
    pub fn restore_proficiencies(&mut self, flags: [bool; Skill::COUNT]) {
        self.proficiencies = flags;
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Assign the six primaries, reseed starting skills, recompute dependents.
    ///
    /// Starting skill value is `2 + 2 * governing attribute`. Proficiency tag
    /// bonuses are re-applied on top so a reseed never loses a tag.
    pub fn set_attributes(
        &mut self,
        attributes: [u32; Attribute::COUNT],
        points_available: u32,
    ) {
        self.attributes = attributes;
        self.total_attribute_points = attributes.iter().sum();
        self.unused_points = points_available;

        for skill in Skill::ALL {
            let governing = self.attributes[skill.governing_attribute() as usize];
            let mut value = Self::starting_skill_value(governing);
            if self.proficiencies[skill as usize] {
                value += self.constants.skills.tag_bonus;
            }
            self.skills[skill as usize] = value;
        }

        self.recompute_derived();
    }

    /// Overwrite skill values directly (the level-up path)
    pub fn set_skills(&mut self, skills: [u32; Skill::COUNT]) {
        self.skills = skills;
        self.recompute_derived();
    }

    /// Grant the one-time tag bonus for a skill. Re-tagging is a no-op.
    pub fn set_proficiency(&mut self, skill: Skill) {
        if self.proficiencies[skill as usize] {
            return;
        }
        self.proficiencies[skill as usize] = true;
        self.unused_tags = self.unused_tags.saturating_sub(1);
        self.skills[skill as usize] += self.constants.skills.tag_bonus;
        self.recompute_derived();
    }

    fn starting_skill_value(governing_attribute: u32) -> u32 {
        2 + 2 * governing_attribute
    }

    fn recompute_derived(&mut self) {
        self.derived
            .recompute(&self.attributes, &self.skills, &self.constants);
    }

    /// Currency cost to reach `level`, discounted by intelligence.
    ///
    /// Monotonically non-decreasing in level; the discount caps at 100%.
    pub fn level_cost(level: u32, intelligence: u32, constants: &LevelConstants) -> u64 {
        let x = level.saturating_sub(1) as f64;
        let discount = (1.0 - constants.discount_per_intelligence * intelligence as f64).max(0.0);
        let raw = constants.cubic_coefficient * x.powi(3)
            + constants.quadratic_coefficient * x.powi(2)
            + constants.linear_coefficient * x;
        (raw * discount) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConstants;

    #[test]
    fn test_starting_skills_seeded_from_attributes() {
        let mut scores = AttributeScores::default();
        // STR 3, AGI 5
        scores.set_attributes([3, 0, 0, 0, 5, 0], 0);
        assert_eq!(scores.skill(Skill::Blade), 8);
        assert_eq!(scores.skill(Skill::Acrobatics), 12);
        assert_eq!(scores.skill(Skill::Barter), 2);
    }

    #[test]
    fn test_proficiency_applies_once() {
        let mut scores = AttributeScores::default();
        scores.set_attributes([0; 6], 0);
        let before = scores.skill(Skill::Pistols);

        scores.set_proficiency(Skill::Pistols);
        assert_eq!(scores.skill(Skill::Pistols), before + 15);
        assert_eq!(scores.unused_tags, 2);

        // second tag on the same skill does nothing
        scores.set_proficiency(Skill::Pistols);
        assert_eq!(scores.skill(Skill::Pistols), before + 15);
        assert_eq!(scores.unused_tags, 2);
    }

    #[test]
    fn test_proficiency_survives_attribute_reseed() {
        let mut scores = AttributeScores::default();
        scores.set_proficiency(Skill::Rifles);
        scores.set_attributes([0, 4, 0, 0, 0, 0], 0);
        // 2 + 2*4 + tag 15
        assert_eq!(scores.skill(Skill::Rifles), 25);
    }

    #[test]
    fn test_derived_recomputed_on_every_mutation() {
        let mut scores = AttributeScores::default();
        scores.set_attributes([0, 0, 10, 0, 0, 0], 0);
        assert!((scores.derived().max_health - 200.0).abs() < f64::EPSILON);

        let mut skills = *scores.skills();
        skills[Skill::Barter as usize] = 100;
        scores.set_skills(skills);
        assert!((scores.derived().sell_multiplier - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_cost_monotonic_in_level() {
        let constants = LevelConstants::default();
        let mut previous = 0;
        for level in 1..40 {
            let cost = AttributeScores::level_cost(level, 0, &constants);
            assert!(cost >= previous, "cost decreased at level {level}");
            previous = cost;
        }
    }

    #[test]
    fn test_level_cost_discounted_by_intelligence() {
        let constants = LevelConstants::default();
        let mut previous = u64::MAX;
        for intelligence in 0..=40 {
            let cost = AttributeScores::level_cost(10, intelligence, &constants);
            assert!(cost <= previous, "cost rose at INT {intelligence}");
            previous = cost;
        }
        // discount never exceeds 100%
        assert_eq!(AttributeScores::level_cost(10, 100, &constants), 0);
    }
}
