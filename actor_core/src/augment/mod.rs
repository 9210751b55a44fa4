//! Augmentations - unlockable perks gated on level, attributes, and skills

use crate::scores::{Attribute, AttributeScores, Skill};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One perk definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Augmentation {
    pub id: u32,
    pub name: String,
    pub point_cost: u32,
    pub level_requirement: u32,
    pub attribute_requirements: Vec<(Attribute, u32)>,
    pub skill_requirements: Vec<(Skill, u32)>,
}

/// The actor's owned augmentations and spendable points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Augmentations {
    pub points: u32,
    owned: HashSet<u32>,
}

impl Augmentations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owns(&self, augmentation_id: u32) -> bool {
        self.owned.contains(&augmentation_id)
    }

    pub fn owned_ids(&self) -> &HashSet<u32> {
        &self.owned
    }

    /// Every gate an augmentation must pass before purchase
    pub fn check_purchasable(
        &self,
        augmentation: &Augmentation,
        scores: &AttributeScores,
    ) -> bool {
        if self.owns(augmentation.id) {
            return false;
        }
        if augmentation.point_cost > self.points {
            return false;
        }
        if augmentation.level_requirement > scores.level {
            return false;
        }
        for (attribute, required) in &augmentation.attribute_requirements {
            if *required > scores.attribute(*attribute) {
                return false;
            }
        }
        for (skill, required) in &augmentation.skill_requirements {
            if *required > scores.skill(*skill) {
                return false;
            }
        }
        true
    }

    /// Purchase if every gate passes; spends points. Returns success.
    pub fn purchase(&mut self, augmentation: &Augmentation, scores: &AttributeScores) -> bool {
        if !self.check_purchasable(augmentation, scores) {
            return false;
        }
        self.points -= augmentation.point_cost;
        self.owned.insert(augmentation.id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;

    fn reinforced_frame() -> Augmentation {
        Augmentation {
            id: 1,
            name: "Reinforced Frame".to_string(),
            point_cost: 1,
            level_requirement: 5,
            attribute_requirements: vec![(Attribute::Strength, 4)],
            skill_requirements: vec![(Skill::Resourcefulness, 20)],
        }
    }

    fn qualified_scores() -> AttributeScores {
        let mut scores = AttributeScores::new(GameConstants::default());
        scores.set_attributes([4, 0, 9, 0, 0, 0], 0);
        scores.level = 5;
        scores
    }

    #[test]
    fn test_purchase_when_all_gates_pass() {
        let mut augmentations = Augmentations::new();
        augmentations.points = 2;
        let scores = qualified_scores();

        assert!(augmentations.purchase(&reinforced_frame(), &scores));
        assert!(augmentations.owns(1));
        assert_eq!(augmentations.points, 1);
    }

    #[test]
    fn test_level_gate_blocks() {
        let mut augmentations = Augmentations::new();
        augmentations.points = 2;
        let mut scores = qualified_scores();
        scores.level = 4;

        assert!(!augmentations.check_purchasable(&reinforced_frame(), &scores));
    }

    #[test]
    fn test_attribute_and_skill_gates_block() {
        let mut augmentations = Augmentations::new();
        augmentations.points = 2;

        let mut scores = AttributeScores::new(GameConstants::default());
        // STR high enough, but END 0 leaves Resourcefulness at 2
        scores.set_attributes([4, 0, 0, 0, 0, 0], 0);
        scores.level = 10;
        assert!(!augmentations.check_purchasable(&reinforced_frame(), &scores));
    }

    #[test]
    fn test_no_double_purchase() {
        let mut augmentations = Augmentations::new();
        augmentations.points = 5;
        let scores = qualified_scores();

        assert!(augmentations.purchase(&reinforced_frame(), &scores));
        assert!(!augmentations.purchase(&reinforced_frame(), &scores));
        assert_eq!(augmentations.points, 4);
    }
}
