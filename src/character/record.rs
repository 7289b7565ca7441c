//! Character record
//!
//! The aggregate the generator builds up phase by phase.

use serde::{Deserialize, Serialize};

use crate::catalog::{Advantage, Archetype, Disadvantage, SkillTemplate};
use crate::progression::skill_level;
use super::attributes::{Attribute, Attributes};

/// A skill the character owns, with the points invested in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedSkill {
    #[serde(flatten)]
    pub template: SkillTemplate,
    pub points: i32,
}

impl LearnedSkill {
    /// Independent copy of `template` with `points` invested
    pub fn from_template(template: &SkillTemplate, points: i32) -> Self {
        Self {
            template: template.clone(),
            points,
        }
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn base_attribute(&self) -> Attribute {
        self.template.base_attribute
    }
}

/// A generated character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub archetype: Archetype,
    pub tech_level: i32,
    pub attributes: Attributes,
    /// Budget ceiling, fixed at creation
    pub total_points: i32,
    /// Net spend; disadvantages count negative
    pub points_spent: i32,
    pub advantages: Vec<Advantage>,
    pub disadvantages: Vec<Disadvantage>,
    pub skills: Vec<LearnedSkill>,
}

impl Character {
    /// Empty character with baseline attributes
    pub fn new(name: impl Into<String>, archetype: Archetype, tech_level: i32, total_points: i32) -> Self {
        Self {
            name: name.into(),
            archetype,
            tech_level,
            attributes: Attributes::baseline(),
            total_points,
            points_spent: 0,
            advantages: Vec::new(),
            disadvantages: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub fn remaining_points(&self) -> i32 {
        self.total_points - self.points_spent
    }

    pub fn attribute(&self, attr: Attribute) -> i32 {
        self.attributes.get(attr)
    }

    pub fn has_advantage(&self, name: &str) -> bool {
        self.advantages.iter().any(|a| a.name == name)
    }

    pub fn has_disadvantage(&self, name: &str) -> bool {
        self.disadvantages.iter().any(|d| d.name == name)
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.name() == name)
    }

    /// Append an advantage unless one with the same name is present.
    /// Does not touch the budget.
    pub fn add_advantage(&mut self, advantage: Advantage) -> bool {
        if self.has_advantage(&advantage.name) {
            return false;
        }
        self.advantages.push(advantage);
        true
    }

    /// Append a disadvantage unless one with the same name is present.
    /// Does not touch the budget.
    pub fn add_disadvantage(&mut self, disadvantage: Disadvantage) -> bool {
        if self.has_disadvantage(&disadvantage.name) {
            return false;
        }
        self.disadvantages.push(disadvantage);
        true
    }

    /// Append a skill unless one with the same name is present.
    /// Does not touch the budget.
    pub fn add_skill(&mut self, skill: LearnedSkill) -> bool {
        if self.has_skill(skill.name()) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    /// Effective level of one of this character's skills
    pub fn skill_level(&self, skill: &LearnedSkill) -> i32 {
        skill_level(skill, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ContentTag, Difficulty};

    fn sample_skill() -> SkillTemplate {
        SkillTemplate::new("Stealth", Attribute::Dx, Difficulty::Average)
    }

    #[test]
    fn test_new_character_baseline() {
        let c = Character::new("Test", Archetype::Scout, 4, 150);
        assert_eq!(c.attributes, Attributes::baseline());
        assert_eq!(c.attributes.will, c.attributes.iq);
        assert_eq!(c.remaining_points(), 150);
    }

    #[test]
    fn test_remaining_tracks_spend() {
        let mut c = Character::new("Test", Archetype::Generalist, 3, 100);
        c.points_spent += 40;
        c.points_spent += -15;
        assert_eq!(c.remaining_points(), 75);
    }

    #[test]
    fn test_names_stay_unique() {
        let mut c = Character::new("Test", Archetype::Generalist, 3, 100);
        assert!(c.add_advantage(Advantage::new("Luck", 10, &[ContentTag::Mundane])));
        assert!(!c.add_advantage(Advantage::new("Luck", 15, &[ContentTag::Mundane])));
        assert_eq!(c.advantages.len(), 1);

        assert!(c.add_skill(LearnedSkill::from_template(&sample_skill(), 2)));
        assert!(!c.add_skill(LearnedSkill::from_template(&sample_skill(), 4)));
        assert_eq!(c.skills.len(), 1);
        assert_eq!(c.skills[0].points, 2);
    }

    #[test]
    fn test_learned_skill_is_independent_copy() {
        let template = sample_skill();
        let mut learned = LearnedSkill::from_template(&template, 1);
        learned.template.base_weight = 9;
        assert_eq!(template.base_weight, 1);
    }
}
