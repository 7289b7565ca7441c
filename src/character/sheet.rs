//! Character sheet output
//!
//! Plain-text and JSON renderings of a finished character.

use serde::Serialize;

use super::attributes::Attribute;
use super::record::Character;

const RULE_WIDTH: usize = 40;

/// Render the character as a text sheet
pub fn format_character(character: &Character) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(heavy.clone());
    lines.push(format!("Name: {}", character.name));
    lines.push(format!("TL: {}", character.tech_level));
    lines.push(format!(
        "Points: {}/{} (remaining: {})",
        character.points_spent,
        character.total_points,
        character.remaining_points()
    ));
    lines.push(light.clone());
    lines.push(
        Attribute::ALL
            .iter()
            .map(|a| format!("{} {}", a.abbrev(), character.attribute(*a)))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.push(light);
    lines.push(format!("Archetype: {}", character.archetype.id()));

    lines.push("Advantages:".to_string());
    if character.advantages.is_empty() {
        lines.push("  —".to_string());
    }
    for a in &character.advantages {
        lines.push(format!("  {} [{}]", a.name, a.cost));
    }

    lines.push("Disadvantages:".to_string());
    if character.disadvantages.is_empty() {
        lines.push("  —".to_string());
    }
    for d in &character.disadvantages {
        lines.push(format!("  {} [{}]", d.name, d.cost));
    }

    lines.push("Skills:".to_string());
    if character.skills.is_empty() {
        lines.push("  —".to_string());
    }
    for s in &character.skills {
        lines.push(format!(
            "  {} ({}, {}) — {} pts, level {}",
            s.name(),
            s.base_attribute().abbrev(),
            s.template.difficulty.code(),
            s.points,
            character.skill_level(s)
        ));
    }

    lines.push(heavy);
    lines.join("\n")
}

/// Skill entry in the JSON sheet
#[derive(Debug, Serialize)]
struct SkillLine<'a> {
    name: &'a str,
    attribute: &'static str,
    difficulty: &'static str,
    points: i32,
    level: i32,
}

#[derive(Debug, Serialize)]
struct SheetJson<'a> {
    character: &'a Character,
    remaining_points: i32,
    skill_levels: Vec<SkillLine<'a>>,
}

/// Render the character, plus computed skill levels, as pretty JSON
pub fn character_json(character: &Character) -> serde_json::Result<String> {
    let skill_levels = character
        .skills
        .iter()
        .map(|s| SkillLine {
            name: s.name(),
            attribute: s.base_attribute().abbrev(),
            difficulty: s.template.difficulty.code(),
            points: s.points,
            level: character.skill_level(s),
        })
        .collect();

    serde_json::to_string_pretty(&SheetJson {
        character,
        remaining_points: character.remaining_points(),
        skill_levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Advantage, Archetype, ContentTag, Difficulty, SkillTemplate};
    use crate::character::LearnedSkill;

    fn sample() -> Character {
        let mut c = Character::new("Mira", Archetype::Scholar, 8, 100);
        c.attributes.iq = 12;
        c.points_spent = 55;
        c.add_advantage(Advantage::new("Luck", 10, &[ContentTag::Mundane]));
        let chem = SkillTemplate::new("Chemistry", Attribute::Iq, Difficulty::Hard);
        c.add_skill(LearnedSkill::from_template(&chem, 4));
        c
    }

    #[test]
    fn test_text_sheet_sections() {
        let text = format_character(&sample());
        assert!(text.contains("Name: Mira"));
        assert!(text.contains("Points: 55/100 (remaining: 45)"));
        assert!(text.contains("ST 10  DX 10  IQ 12  HT 10  Will 10  Per 10"));
        assert!(text.contains("Archetype: scholar"));
        assert!(text.contains("  Luck [10]"));
        assert!(text.contains("Disadvantages:\n  —"));
        assert!(text.contains("Chemistry (IQ, H) — 4 pts, level 12"));
    }

    #[test]
    fn test_generalist_sheet_uses_identifier() {
        let c = Character::new("Ash", Archetype::Generalist, 3, 100);
        let text = format_character(&c);
        assert!(text.contains("Archetype: generalist"));
        assert!(!text.contains("Balanced"));
    }

    #[test]
    fn test_json_carries_levels() {
        let json = character_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["remaining_points"], 45);
        assert_eq!(value["skill_levels"][0]["level"], 12);
        assert_eq!(value["character"]["name"], "Mira");
    }
}
