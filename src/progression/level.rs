//! Skill levels
//!
//! Converts invested points into a skill level relative to the base
//! attribute. Levels plateau between thresholds and rise by one for every
//! four points past the last one.

use crate::catalog::Difficulty;
use crate::character::{Character, LearnedSkill};

/// Point thresholds shared by every difficulty
const THRESHOLDS: [i32; 5] = [1, 2, 4, 8, 12];

/// Points per extra level beyond the last threshold
const POINTS_PER_EXTRA_LEVEL: i32 = 4;

/// Penalty for a skill owned with no points in it
const UNTRAINED_PENALTY: i32 = 4;

/// Offset from the base attribute at each threshold
fn offsets(difficulty: Difficulty) -> [i32; 5] {
    match difficulty {
        Difficulty::Easy => [0, 1, 2, 3, 4],
        Difficulty::Average => [-1, 0, 1, 2, 3],
        Difficulty::Hard => [-2, -1, 0, 1, 2],
        Difficulty::VeryHard => [-3, -2, -1, 0, 1],
    }
}

/// Level relative to the base attribute for `points` invested
pub fn relative_level(difficulty: Difficulty, points: i32) -> i32 {
    if points <= 0 {
        return -UNTRAINED_PENALTY;
    }

    let table = offsets(difficulty);
    // points >= 1 so at least the first threshold matches
    let idx = THRESHOLDS.iter().rposition(|&t| t <= points).unwrap_or(0);
    let rel = table[idx];

    if idx + 1 < THRESHOLDS.len() {
        return rel;
    }

    let top = THRESHOLDS[THRESHOLDS.len() - 1];
    rel + (points - top) / POINTS_PER_EXTRA_LEVEL
}

/// Effective level of `skill` for `character`
pub fn skill_level(skill: &LearnedSkill, character: &Character) -> i32 {
    character.attribute(skill.base_attribute()) + relative_level(skill.template.difficulty, skill.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Archetype, SkillTemplate};
    use crate::character::Attribute;

    const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Average,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    #[test]
    fn test_plateaus() {
        assert_eq!(relative_level(Difficulty::Easy, 1), 0);
        assert_eq!(relative_level(Difficulty::Easy, 3), 1);
        assert_eq!(relative_level(Difficulty::Average, 7), 1);
        assert_eq!(relative_level(Difficulty::Hard, 4), 0);
        assert_eq!(relative_level(Difficulty::VeryHard, 11), 0);
    }

    #[test]
    fn test_past_twelve_points() {
        assert_eq!(relative_level(Difficulty::Average, 12), 3);
        assert_eq!(relative_level(Difficulty::Average, 15), 3);
        assert_eq!(relative_level(Difficulty::Average, 16), 4);
        assert_eq!(relative_level(Difficulty::Average, 24), 6);
        assert_eq!(relative_level(Difficulty::VeryHard, 20), 3);
    }

    #[test]
    fn test_untrained() {
        for d in ALL {
            assert_eq!(relative_level(d, 0), -4);
            assert_eq!(relative_level(d, -3), -4);
        }
    }

    #[test]
    fn test_non_decreasing_in_points() {
        for d in ALL {
            let mut last = relative_level(d, 1);
            for pts in 2..=40 {
                let lvl = relative_level(d, pts);
                assert!(lvl >= last, "{:?} dropped at {} points", d, pts);
                last = lvl;
            }
        }
    }

    #[test]
    fn test_difficulties_one_apart_at_twelve() {
        let e = relative_level(Difficulty::Easy, 12);
        assert_eq!(e, relative_level(Difficulty::Average, 12) + 1);
        assert_eq!(e, relative_level(Difficulty::Hard, 12) + 2);
        assert_eq!(e, relative_level(Difficulty::VeryHard, 12) + 3);
    }

    #[test]
    fn test_uses_base_attribute() {
        let mut c = Character::new("Test", Archetype::Scout, 3, 100);
        c.attributes.per = 13;
        let template = SkillTemplate::new("Tracking", Attribute::Per, Difficulty::Average);
        let skill = LearnedSkill::from_template(&template, 4);

        assert_eq!(skill_level(&skill, &c), 14);
        // Pure function of stored state
        assert_eq!(skill_level(&skill, &c), c.skill_level(&skill));
    }
}
