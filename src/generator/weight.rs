//! Skill weighting
//!
//! How likely a skill is to be picked, given the setting's technology
//! level and the character's archetype.

use crate::catalog::{Archetype, SkillCategory, SkillTemplate};

/// Multiply when `favoured`, otherwise floor-divide and clamp to 1
fn boost_or_cut(weight: u32, favoured: bool, mult: u32, div: u32) -> u32 {
    if favoured {
        weight.saturating_mul(mult)
    } else {
        (weight / div).max(1)
    }
}

/// Tiers shared by blades and primitive ranged weapons
fn ancient_weapon(weight: u32, tech_level: i32) -> u32 {
    if tech_level <= 3 {
        weight.saturating_mul(3)
    } else if tech_level <= 5 {
        weight.saturating_mul(2)
    } else {
        (weight / 2).max(1)
    }
}

/// Effective selection weight of `skill`
///
/// Zero when `tech_level` is outside the skill's range. Category rules apply
/// in a fixed order and stack; the archetype multiplier comes last.
pub fn skill_weight(skill: &SkillTemplate, tech_level: i32, archetype: Option<Archetype>) -> u32 {
    use SkillCategory::*;

    if !skill.tech_range.contains(tech_level) {
        return 0;
    }

    let tl = tech_level;
    let has = |c: SkillCategory| skill.has_category(c);
    let mut w = skill.base_weight;

    // Close combat
    if has(MeleeUnarmed) {
        w = w.saturating_mul(2);
    }
    if has(MeleeBlade) {
        w = ancient_weapon(w, tl);
    }

    // Ranged
    if has(RangedPrimitive) {
        w = ancient_weapon(w, tl);
    }
    if has(Firearms) {
        w = boost_or_cut(w, tl >= 5, 3, 3);
    }
    if has(FirearmsHiTech) {
        w = boost_or_cut(w, tl >= 9, 4, 4);
    }

    // Vehicles and gear
    if has(Vehicle) {
        w = boost_or_cut(w, tl >= 6, 2, 2);
    }
    if has(ProtectiveSuit) {
        w = boost_or_cut(w, tl >= 8, 3, 3);
    }

    // High tech
    if has(Computer) {
        w = boost_or_cut(w, tl >= 7, 4, 3);
    }
    if has(Electronics) {
        w = boost_or_cut(w, tl >= 6, 3, 2);
    }

    // Science and medicine
    if has(Science) && tl >= 5 {
        w = w.saturating_mul(2);
    }
    if has(Medicine) && tl >= 6 {
        w = w.saturating_mul(2);
    }

    // Social, survival, stealth, magic
    if has(Social) {
        w = w.saturating_mul(2);
    }
    if has(Survival) && tl <= 4 {
        w = w.saturating_mul(2);
    }
    if has(Stealth) {
        w = w.saturating_mul(2);
    }
    if has(Magic) {
        w = w.saturating_mul(if tl <= 4 { 3 } else { 2 });
    }

    if let Some(archetype) = archetype {
        let mult = skill
            .categories
            .iter()
            .map(|c| archetype.category_affinity(*c))
            .fold(1, u32::max);
        w = w.saturating_mul(mult);
    }

    w
}
