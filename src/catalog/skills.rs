//! Skill templates
//!
//! Catalog skills carry the data the generator needs to weigh them: semantic
//! categories, a seed weight, and the attribute/difficulty pair the level
//! calculator uses.

use serde::{Deserialize, Serialize};

use crate::character::Attribute;
use super::tags::{CatalogEntry, ContentTag, TechRange};

/// Difficulty tier of a skill
///
/// Data files use the short codes `E`, `A`, `H` and `VH`. Anything else is
/// read as `Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Average,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "E" | "Easy" => Difficulty::Easy,
            "A" | "Average" => Difficulty::Average,
            "H" | "Hard" => Difficulty::Hard,
            "VH" | "VeryHard" | "Very Hard" => Difficulty::VeryHard,
            other => {
                log::warn!("Unknown skill difficulty {:?}, treating as Average", other);
                Difficulty::Average
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Difficulty::Easy => "E",
            Difficulty::Average => "A",
            Difficulty::Hard => "H",
            Difficulty::VeryHard => "VH",
        }
    }
}

impl From<String> for Difficulty {
    fn from(code: String) -> Self {
        Difficulty::from_code(&code)
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.code().to_string()
    }
}

/// Semantic category driving technology and archetype weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    MeleeUnarmed,
    MeleeBlade,
    RangedPrimitive,
    Firearms,
    FirearmsHiTech,
    Vehicle,
    ProtectiveSuit,
    Computer,
    Electronics,
    Science,
    Medicine,
    Social,
    Survival,
    Stealth,
    Magic,
}

/// A skill as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTemplate {
    pub name: String,
    pub base_attribute: Attribute,
    pub difficulty: Difficulty,
    pub tags: Vec<ContentTag>,
    #[serde(default)]
    pub tech_range: TechRange,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
    /// Seed weight before category, technology and archetype multipliers
    #[serde(default = "default_base_weight")]
    pub base_weight: u32,
}

fn default_base_weight() -> u32 {
    1
}

impl SkillTemplate {
    /// Mundane skill available at every TL with weight 1
    pub fn new(name: impl Into<String>, base_attribute: Attribute, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            base_attribute,
            difficulty,
            tags: vec![ContentTag::Mundane],
            tech_range: TechRange::ALL,
            categories: Vec::new(),
            base_weight: default_base_weight(),
        }
    }

    pub fn tagged(mut self, tags: &[ContentTag]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub fn tl(mut self, min: i32, max: i32) -> Self {
        self.tech_range = TechRange::new(min, max);
        self
    }

    pub fn in_categories(mut self, categories: &[SkillCategory]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    pub fn weight(mut self, base_weight: u32) -> Self {
        self.base_weight = base_weight;
        self
    }

    pub fn has_category(&self, category: SkillCategory) -> bool {
        self.categories.contains(&category)
    }
}

impl CatalogEntry for SkillTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[ContentTag] {
        &self.tags
    }

    fn tech_range(&self) -> TechRange {
        self.tech_range
    }
}

// =============================================================================
// Built-in skill list
// =============================================================================

/// Built-in skill list
pub fn default_skill_templates() -> Vec<SkillTemplate> {
    use Attribute::*;
    use ContentTag::{Super, Supernatural};
    use Difficulty::*;
    use SkillCategory::*;

    vec![
        // === Melee: blades and hafted weapons ===
        SkillTemplate::new("Broadsword", Dx, Average).tl(0, 8).in_categories(&[MeleeBlade]).weight(3),
        SkillTemplate::new("Shortsword", Dx, Average).tl(1, 8).in_categories(&[MeleeBlade]).weight(3),
        SkillTemplate::new("Rapier", Dx, Average).tl(3, 8).in_categories(&[MeleeBlade]).weight(2),
        SkillTemplate::new("Saber", Dx, Average).tl(3, 8).in_categories(&[MeleeBlade]).weight(2),
        SkillTemplate::new("Knife", Dx, Easy).in_categories(&[MeleeBlade]).weight(3),
        SkillTemplate::new("Axe/Mace", Dx, Average).tl(0, 8).in_categories(&[MeleeBlade]).weight(3),
        SkillTemplate::new("Spear", Dx, Average).tl(0, 8).in_categories(&[MeleeBlade]).weight(3),
        SkillTemplate::new("Staff", Dx, Average).tl(0, 8).in_categories(&[MeleeBlade]).weight(2),

        // === Melee: unarmed ===
        SkillTemplate::new("Brawling", Dx, Easy).in_categories(&[MeleeUnarmed]).weight(4),
        SkillTemplate::new("Wrestling", Dx, Average).in_categories(&[MeleeUnarmed]).weight(3),
        SkillTemplate::new("Boxing", Dx, Average).in_categories(&[MeleeUnarmed]).weight(2),
        SkillTemplate::new("Judo", Dx, Hard).in_categories(&[MeleeUnarmed]).weight(2),
        SkillTemplate::new("Karate", Dx, Hard).in_categories(&[MeleeUnarmed]).weight(2),

        // === Ranged: muscle-powered ===
        SkillTemplate::new("Bow", Dx, Average).tl(0, 8).in_categories(&[RangedPrimitive]).weight(3),
        SkillTemplate::new("Crossbow", Dx, Easy).tl(2, 8).in_categories(&[RangedPrimitive]).weight(2),
        SkillTemplate::new("Sling", Dx, Hard).tl(0, 8).in_categories(&[RangedPrimitive]).weight(1),
        SkillTemplate::new("Thrown Weapon (Spear)", Dx, Easy).tl(0, 8).in_categories(&[RangedPrimitive]).weight(2),

        // === Ranged: firearms ===
        SkillTemplate::new("Guns (Pistol)", Dx, Easy).tl(4, 12).in_categories(&[Firearms]).weight(4),
        SkillTemplate::new("Guns (Rifle)", Dx, Easy).tl(4, 12).in_categories(&[Firearms]).weight(4),
        SkillTemplate::new("Guns (SMG)", Dx, Easy).tl(6, 12).in_categories(&[Firearms]).weight(3),
        SkillTemplate::new("Gunner (Machine Gun)", Dx, Easy).tl(6, 12).in_categories(&[Firearms]).weight(2),
        SkillTemplate::new("Liquid Projector", Dx, Easy).tl(6, 12).in_categories(&[Firearms]).weight(1),

        // === Ranged: beam and force weapons ===
        SkillTemplate::new("Beam Weapons (Pistol)", Dx, Easy).tl(9, 12).in_categories(&[FirearmsHiTech]).weight(3),
        SkillTemplate::new("Beam Weapons (Rifle)", Dx, Easy).tl(9, 12).in_categories(&[FirearmsHiTech]).weight(3),
        SkillTemplate::new("Force Sword", Dx, Average).tl(11, 12).in_categories(&[FirearmsHiTech, MeleeBlade]).weight(2),

        // === Vehicles ===
        SkillTemplate::new("Driving (Automobile)", Dx, Average).tl(6, 12).in_categories(&[Vehicle]).weight(2),
        SkillTemplate::new("Piloting (Light Airplane)", Dx, Average).tl(6, 12).in_categories(&[Vehicle]).weight(1),
        SkillTemplate::new("Boating (Motorboat)", Dx, Average).tl(6, 12).in_categories(&[Vehicle]).weight(1),
        SkillTemplate::new("Riding (Horse)", Dx, Average).tl(0, 8).weight(2),

        // === Suits ===
        SkillTemplate::new("Environment Suit (Vacc Suit)", Dx, Average).tl(8, 12).in_categories(&[ProtectiveSuit]).weight(2),
        SkillTemplate::new("Battlesuit", Dx, Average).tl(9, 12).in_categories(&[ProtectiveSuit]).weight(1),
        SkillTemplate::new("Diving Suit", Dx, Average).tl(8, 12).in_categories(&[ProtectiveSuit]).weight(1),

        // === Computers and electronics ===
        SkillTemplate::new("Computer Operation", Iq, Easy).tl(7, 12).in_categories(&[Computer]).weight(2),
        SkillTemplate::new("Computer Programming", Iq, Hard).tl(7, 12).in_categories(&[Computer]).weight(2),
        SkillTemplate::new("Computer Hacking", Iq, VeryHard).tl(8, 12).in_categories(&[Computer]).weight(1),
        SkillTemplate::new("Electronics Operation (Comm)", Iq, Average).tl(6, 12).in_categories(&[Electronics]).weight(2),
        SkillTemplate::new("Electronics Repair", Iq, Average).tl(6, 12).in_categories(&[Electronics]).weight(2),
        SkillTemplate::new("Electrician", Iq, Average).tl(6, 12).in_categories(&[Electronics]).weight(2),
        SkillTemplate::new("Photography", Iq, Average).tl(7, 12).in_categories(&[Electronics]).weight(2),

        // === Science and medicine ===
        SkillTemplate::new("Chemistry", Iq, Hard).tl(5, 12).in_categories(&[Science]).weight(2),
        SkillTemplate::new("Physics", Iq, VeryHard).tl(5, 12).in_categories(&[Science]).weight(2),
        SkillTemplate::new("Mathematics", Iq, Hard).tl(5, 12).in_categories(&[Science]).weight(2),
        SkillTemplate::new("Engineering", Iq, Hard).tl(5, 12).in_categories(&[Science]).weight(2),
        SkillTemplate::new("Astronomy", Iq, Hard).tl(5, 12).in_categories(&[Science]).weight(1),
        SkillTemplate::new("Physician", Iq, Hard).tl(5, 12).in_categories(&[Medicine]).weight(1),
        SkillTemplate::new("Surgery", Iq, VeryHard).tl(5, 12).in_categories(&[Medicine]).weight(1),
        SkillTemplate::new("Diagnosis", Iq, Hard).tl(5, 12).in_categories(&[Medicine]).weight(1),
        SkillTemplate::new("Pharmacy", Iq, Hard).tl(5, 12).in_categories(&[Medicine]).weight(1),
        SkillTemplate::new("First Aid", Iq, Easy).in_categories(&[Medicine]).weight(3),

        // === Social ===
        SkillTemplate::new("Diplomacy", Iq, Hard).in_categories(&[Social]),
        SkillTemplate::new("Fast-Talk", Iq, Average).in_categories(&[Social]),
        SkillTemplate::new("Intimidation", Will, Average).in_categories(&[Social]),
        SkillTemplate::new("Merchant", Iq, Average).in_categories(&[Social]),
        SkillTemplate::new("Leadership", Iq, Average).in_categories(&[Social]),
        SkillTemplate::new("Savoir-Faire", Iq, Easy).in_categories(&[Social]),
        SkillTemplate::new("Public Speaking", Iq, Average).in_categories(&[Social]),
        SkillTemplate::new("Sex Appeal", Ht, Average).in_categories(&[Social]),

        // === Survival and outdoors ===
        SkillTemplate::new("Survival (Woodlands)", Per, Average).in_categories(&[Survival]).weight(2),
        SkillTemplate::new("Tracking", Per, Average).in_categories(&[Survival]),
        SkillTemplate::new("Fishing", Per, Easy).in_categories(&[Survival]),
        SkillTemplate::new("Naturalist", Iq, Hard).in_categories(&[Survival]),
        SkillTemplate::new("Farming", Iq, Average).tl(1, 12).in_categories(&[Survival]),

        // === Stealth and larceny ===
        SkillTemplate::new("Stealth", Dx, Average).in_categories(&[Stealth]).weight(3),
        SkillTemplate::new("Lockpicking", Iq, Average).tl(3, 12).in_categories(&[Stealth]).weight(2),
        SkillTemplate::new("Pickpocket", Dx, Hard).in_categories(&[Stealth]),
        SkillTemplate::new("Sleight of Hand", Dx, Hard).in_categories(&[Stealth]),
        SkillTemplate::new("Disguise", Iq, Average).in_categories(&[Stealth]),
        SkillTemplate::new("Shadowing", Iq, Average).in_categories(&[Stealth]),

        // === General ===
        SkillTemplate::new("Climbing", Dx, Average),
        SkillTemplate::new("Swimming", Ht, Easy),
        SkillTemplate::new("Running", Ht, Average),
        SkillTemplate::new("Area Knowledge", Iq, Easy),
        SkillTemplate::new("Navigation (Land)", Iq, Average),
        SkillTemplate::new("Research", Iq, Average).tl(5, 12),

        // === Supernatural ===
        SkillTemplate::new("Thaumatology", Iq, VeryHard).tagged(&[Supernatural]).in_categories(&[Magic]).weight(2),
        SkillTemplate::new("Ritual Magic", Iq, VeryHard).tagged(&[Supernatural]).in_categories(&[Magic]).weight(2),
        SkillTemplate::new("Occultism", Iq, Average).tagged(&[Supernatural]).in_categories(&[Magic]),
        SkillTemplate::new("Exorcism", Will, Hard).tagged(&[Supernatural]).in_categories(&[Magic]),
        SkillTemplate::new("Symbol Drawing", Iq, Hard).tagged(&[Supernatural]).in_categories(&[Magic]),

        // === Cinematic ===
        SkillTemplate::new("Kiai", Ht, Hard).tagged(&[Super]).in_categories(&[MeleeUnarmed]).weight(2),
        SkillTemplate::new("Power Blow", Will, Hard).tagged(&[Super]).in_categories(&[MeleeUnarmed]).weight(2),
        SkillTemplate::new("Breath Control", Ht, Hard).tagged(&[Super]),
        SkillTemplate::new("Body Control", Ht, VeryHard).tagged(&[Super]),
        SkillTemplate::new("Light Walk", Dx, Hard).tagged(&[Super]).in_categories(&[Stealth]),
        SkillTemplate::new("Invisibility Art", Iq, VeryHard).tagged(&[Super]).in_categories(&[Stealth]),
    ]
}
