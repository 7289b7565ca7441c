//! Skill phase
//!
//! Draws skills by weight from the eligible pool. Each candidate is tried
//! once: it leaves the pool whether or not it was taken.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::catalog::{Archetype, SkillTemplate};
use crate::character::{Character, LearnedSkill};
use super::filter::{filter_by_options, Eligibility};
use super::weight::skill_weight;

/// Point investments a newly picked skill can receive
pub const INVESTMENTS: [i32; 3] = [1, 2, 4];

/// Pick skills worth up to `budget` points. Returns the points committed.
///
/// The loop runs at most three times the pool size and may leave budget
/// unspent.
pub fn allocate_skills(
    character: &mut Character,
    templates: &[SkillTemplate],
    eligibility: &Eligibility,
    budget: i32,
    archetype: Archetype,
    rng: &mut impl Rng,
) -> i32 {
    let mut pool: Vec<&SkillTemplate> = Vec::new();
    let mut weights: Vec<u32> = Vec::new();
    for template in filter_by_options(templates, eligibility) {
        let w = skill_weight(template, eligibility.tech_level, Some(archetype));
        if w > 0 {
            pool.push(template);
            weights.push(w);
        }
    }

    if pool.is_empty() {
        log::debug!("No skills eligible at TL {}", eligibility.tech_level);
        return 0;
    }

    let max_iterations = pool.len() * 3;
    let mut spent = 0;

    for _ in 0..max_iterations {
        if spent >= budget || pool.is_empty() {
            break;
        }

        let idx = match WeightedIndex::new(&weights) {
            Ok(picker) => picker.sample(rng),
            Err(_) => break,
        };
        let template = pool.swap_remove(idx);
        weights.swap_remove(idx);

        let points = INVESTMENTS[rng.gen_range(0..INVESTMENTS.len())];
        if spent + points > budget || character.has_skill(&template.name) {
            continue;
        }

        character.add_skill(LearnedSkill::from_template(template, points));
        spent += points;
    }

    spent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_skill_templates, ContentTag, Difficulty, SkillCategory};
    use crate::character::Attribute;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn fresh() -> Character {
        Character::new("Test", Archetype::Generalist, 3, 100)
    }

    #[test]
    fn test_stays_within_budget() {
        let templates = default_skill_templates();
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut c = fresh();
            let spent = allocate_skills(&mut c, &templates, &Eligibility::mundane(3), 23, Archetype::Warrior, &mut rng);

            assert!(spent <= 23);
            assert_eq!(spent, c.skills.iter().map(|s| s.points).sum::<i32>());
            assert!(c.skills.iter().all(|s| INVESTMENTS.contains(&s.points)));
        }
    }

    #[test]
    fn test_picks_are_unique_and_eligible() {
        let templates = default_skill_templates();
        let mut rng = StdRng::seed_from_u64(17);
        let mut c = fresh();
        allocate_skills(&mut c, &templates, &Eligibility::mundane(3), 500, Archetype::Scout, &mut rng);

        let names: HashSet<_> = c.skills.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), c.skills.len());
        for s in &c.skills {
            assert!(s.template.tech_range.contains(3), "{} not available at TL 3", s.name());
            assert_eq!(s.template.tags, vec![ContentTag::Mundane]);
        }
    }

    #[test]
    fn test_each_candidate_tried_once() {
        let templates = vec![
            SkillTemplate::new("Stealth", Attribute::Dx, Difficulty::Average)
                .in_categories(&[SkillCategory::Stealth]),
            SkillTemplate::new("Climbing", Attribute::Dx, Difficulty::Average),
        ];
        let mut rng = StdRng::seed_from_u64(8);
        let mut c = fresh();
        let spent = allocate_skills(&mut c, &templates, &Eligibility::mundane(3), 1000, Archetype::Generalist, &mut rng);

        assert_eq!(c.skills.len(), 2);
        assert!(spent <= 8);
    }

    #[test]
    fn test_owned_skill_not_bought_again() {
        let templates = vec![SkillTemplate::new("Climbing", Attribute::Dx, Difficulty::Average)];
        let mut c = fresh();
        c.add_skill(LearnedSkill::from_template(&templates[0], 2));

        let mut rng = StdRng::seed_from_u64(12);
        let spent = allocate_skills(&mut c, &templates, &Eligibility::mundane(3), 50, Archetype::Generalist, &mut rng);
        assert_eq!(spent, 0);
        assert_eq!(c.skills.len(), 1);
        assert_eq!(c.skills[0].points, 2);
    }

    #[test]
    fn test_empty_pool_contributes_nothing() {
        let templates = default_skill_templates();
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = fresh();
        let spent = allocate_skills(&mut c, &templates, &Eligibility::mundane(40), 50, Archetype::Generalist, &mut rng);
        assert_eq!(spent, 0);
        assert!(c.skills.is_empty());
    }

    #[test]
    fn test_zero_budget() {
        let templates = default_skill_templates();
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = fresh();
        assert_eq!(allocate_skills(&mut c, &templates, &Eligibility::mundane(3), 0, Archetype::Generalist, &mut rng), 0);
    }
}
