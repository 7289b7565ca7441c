//! Remainder pass
//!
//! Pours whatever budget is left into attributes first, then into skills
//! one point at a time.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::SkillTemplate;
use crate::character::{Attribute, Character, LearnedSkill};
use super::filter::{filter_by_options, Eligibility};

/// Hard stop for the spending loop
pub const SAFETY_LIMIT: u32 = 1000;

/// Spend the character's remaining points.
///
/// May leave points unspent when no legal increment exists.
pub fn spend_remainder(
    character: &mut Character,
    templates: &[SkillTemplate],
    eligibility: &Eligibility,
    max_attribute: i32,
    rng: &mut impl Rng,
) {
    let mut safety = 0;

    while character.remaining_points() > 0 && safety < SAFETY_LIMIT {
        safety += 1;
        let remaining = character.remaining_points();

        let viable: Vec<Attribute> = Attribute::ALL
            .iter()
            .copied()
            .filter(|a| a.cost() <= remaining && character.attribute(*a) < max_attribute)
            .collect();
        if let Some(&attr) = viable.choose(rng) {
            character.attributes.raise(attr);
            character.points_spent += attr.cost();
            continue;
        }

        if character.skills.is_empty() {
            let pool = filter_by_options(templates, eligibility);
            let Some(template) = pool.choose(rng) else {
                log::debug!("Nothing left to spend {} points on", remaining);
                break;
            };
            character.add_skill(LearnedSkill::from_template(template, 0));
        }

        if remaining < 1 {
            break;
        }

        let idx = rng.gen_range(0..character.skills.len());
        character.skills[idx].points += 1;
        character.points_spent += 1;
    }

    if safety >= SAFETY_LIMIT {
        log::debug!(
            "Remainder pass hit the iteration limit with {} points left",
            character.remaining_points()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_skill_templates, Archetype, Difficulty};
    use crate::character::ATTRIBUTE_CAP;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spends_everything_when_possible() {
        let templates = default_skill_templates();
        let mut rng = StdRng::seed_from_u64(5);
        let mut c = Character::new("Test", Archetype::Generalist, 3, 37);

        spend_remainder(&mut c, &templates, &Eligibility::mundane(3), ATTRIBUTE_CAP, &mut rng);

        assert_eq!(c.remaining_points(), 0);
    }

    #[test]
    fn test_attributes_first_then_skills() {
        let templates = default_skill_templates();
        let mut rng = StdRng::seed_from_u64(6);
        let mut c = Character::new("Test", Archetype::Generalist, 3, 4);

        // Nothing costs 4 or less, so a skill is created and fed
        spend_remainder(&mut c, &templates, &Eligibility::mundane(3), ATTRIBUTE_CAP, &mut rng);

        assert_eq!(c.attributes, crate::character::Attributes::baseline());
        assert_eq!(c.skills.len(), 1);
        assert_eq!(c.skills[0].points, 4);
        assert_eq!(c.points_spent, 4);
    }

    #[test]
    fn test_respects_attribute_ceiling() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut c = Character::new("Test", Archetype::Generalist, 3, 300);

        spend_remainder(&mut c, &[], &Eligibility::mundane(3), 12, &mut rng);

        for attr in Attribute::ALL {
            assert!(c.attribute(attr) <= 12);
        }
        // 2 steps on every attribute, no skills available for the rest
        assert_eq!(c.points_spent, 2 * (10 + 20 + 20 + 10 + 5 + 5));
        assert!(c.skills.is_empty());
    }

    #[test]
    fn test_feeds_existing_skills() {
        let templates = vec![SkillTemplate::new("Climbing", Attribute::Dx, Difficulty::Average)];
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = Character::new("Test", Archetype::Generalist, 3, 3);
        c.add_skill(LearnedSkill::from_template(&templates[0], 1));
        c.points_spent = 1;

        spend_remainder(&mut c, &templates, &Eligibility::mundane(3), ATTRIBUTE_CAP, &mut rng);

        assert_eq!(c.skills.len(), 1);
        assert_eq!(c.skills[0].points, 3);
        assert_eq!(c.remaining_points(), 0);
    }

    #[test]
    fn test_safety_limit_bounds_work() {
        let templates = default_skill_templates();
        let mut rng = StdRng::seed_from_u64(4);
        let mut c = Character::new("Test", Archetype::Generalist, 3, 5000);

        spend_remainder(&mut c, &templates, &Eligibility::mundane(3), ATTRIBUTE_CAP, &mut rng);

        // Attributes cap at 420 points; 1000 iterations cannot cover the rest
        assert!(c.remaining_points() > 0);
        assert!(c.points_spent <= 420 + SAFETY_LIMIT as i32);
    }
}
