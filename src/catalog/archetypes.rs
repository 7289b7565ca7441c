//! Archetype bias profiles
//!
//! An archetype skews which attributes get raised and which skill
//! categories get picked.

use serde::{Deserialize, Serialize};

use crate::character::Attribute;
use super::skills::SkillCategory;

/// A named bias profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    #[default]
    Generalist,
    Warrior,
    Scholar,
    Negotiator,
    Scout,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Generalist,
        Archetype::Warrior,
        Archetype::Scholar,
        Archetype::Negotiator,
        Archetype::Scout,
    ];

    /// Identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Archetype::Generalist => "generalist",
            Archetype::Warrior => "warrior",
            Archetype::Scholar => "scholar",
            Archetype::Negotiator => "negotiator",
            Archetype::Scout => "scout",
        }
    }

    /// Relative chance of picking `attr` when raising attributes
    pub fn attribute_weight(&self, attr: Attribute) -> u32 {
        use Attribute::*;

        match (self, attr) {
            (Archetype::Generalist, _) => 1,

            (Archetype::Warrior, St | Dx) => 3,
            (Archetype::Warrior, Ht) => 2,
            (Archetype::Warrior, _) => 1,

            (Archetype::Scholar, Iq | Will) => 3,
            (Archetype::Scholar, Per) => 2,
            (Archetype::Scholar, _) => 1,

            (Archetype::Negotiator, Will) => 3,
            (Archetype::Negotiator, Iq | Per) => 2,
            (Archetype::Negotiator, _) => 1,

            (Archetype::Scout, Dx | Per) => 3,
            (Archetype::Scout, Ht) => 2,
            (Archetype::Scout, _) => 1,
        }
    }

    /// Skill weight multiplier for a category, 1 when the archetype has no
    /// opinion on it
    pub fn category_affinity(&self, category: SkillCategory) -> u32 {
        use SkillCategory::*;

        match (self, category) {
            (Archetype::Warrior, MeleeBlade | MeleeUnarmed) => 3,
            (Archetype::Warrior, RangedPrimitive | Firearms | Survival | Stealth) => 2,

            (Archetype::Scholar, Science) => 3,
            (Archetype::Scholar, Medicine | Magic | Computer | Electronics) => 2,

            (Archetype::Negotiator, Social) => 4,
            (Archetype::Negotiator, Stealth) => 2,

            (Archetype::Scout, Stealth | Survival | RangedPrimitive) => 3,
            (Archetype::Scout, Firearms | MeleeUnarmed) => 2,

            _ => 1,
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generalist_is_flat() {
        for attr in Attribute::ALL {
            assert_eq!(Archetype::Generalist.attribute_weight(attr), 1);
        }
        assert_eq!(Archetype::Generalist.category_affinity(SkillCategory::Social), 1);
    }

    #[test]
    fn test_warrior_leans_physical() {
        let w = Archetype::Warrior;
        assert!(w.attribute_weight(Attribute::St) > w.attribute_weight(Attribute::Iq));
        assert_eq!(w.category_affinity(SkillCategory::MeleeBlade), 3);
        assert_eq!(w.category_affinity(SkillCategory::Science), 1);
    }

    #[test]
    fn test_negotiator_social_affinity() {
        assert_eq!(Archetype::Negotiator.category_affinity(SkillCategory::Social), 4);
        assert_eq!(Archetype::Negotiator.category_affinity(SkillCategory::Magic), 1);
    }

    #[test]
    fn test_every_attribute_weight_positive() {
        for arch in Archetype::ALL {
            for attr in Attribute::ALL {
                assert!(arch.attribute_weight(attr) >= 1);
            }
        }
    }
}
