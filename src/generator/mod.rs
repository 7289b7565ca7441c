//! Character generation
//!
//! Runs the budget phases in a fixed order against one character:
//! attributes, disadvantages, advantages, skills, then a remainder pass.
//! The random source is passed in so a seeded generator reproduces a run.

pub mod filter;
pub mod weight;
pub mod attributes;
pub mod traits;
pub mod skills;
pub mod remainder;

pub use filter::{filter_by_options, Eligibility};
pub use weight::skill_weight;
pub use attributes::allocate_attributes;
pub use traits::{allocate_advantages, allocate_disadvantages};
pub use skills::allocate_skills;
pub use remainder::spend_remainder;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Archetype, Catalog};
use crate::character::{Character, ATTRIBUTE_CAP};

/// Name given to characters when none is supplied
pub const DEFAULT_NAME: &str = "Nameless";

/// Share of the total budget offered to attributes
const ATTRIBUTE_SHARE: i32 = 40;
/// Share of the total budget disadvantages may refund
const DISADVANTAGE_SHARE: i32 = 40;
/// Share of the total budget offered to advantages
const ADVANTAGE_SHARE: i32 = 30;
/// Share of the remaining balance offered to skills
const SKILL_SHARE: i32 = 70;

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub total_points: i32,
    pub tech_level: i32,
    pub allow_super: bool,
    pub allow_supernatural: bool,
    pub name: String,
    pub archetype: Archetype,
}

impl GenerationRequest {
    /// Mundane generalist with the default name
    pub fn new(total_points: i32, tech_level: i32) -> Self {
        Self {
            total_points,
            tech_level,
            allow_super: false,
            allow_supernatural: false,
            name: DEFAULT_NAME.to_string(),
            archetype: Archetype::Generalist,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    pub fn with_content(mut self, allow_super: bool, allow_supernatural: bool) -> Self {
        self.allow_super = allow_super;
        self.allow_supernatural = allow_supernatural;
        self
    }

    pub fn eligibility(&self) -> Eligibility {
        Eligibility::new(self.tech_level, self.allow_super, self.allow_supernatural)
    }
}

/// `percent`% of `points`, truncated toward zero
fn share_of(points: i32, percent: i32) -> i32 {
    (i64::from(points) * i64::from(percent) / 100) as i32
}

/// Generate a complete character
pub fn generate_character(catalog: &Catalog, request: &GenerationRequest, rng: &mut impl Rng) -> Character {
    let total = request.total_points;
    let eligibility = request.eligibility();
    let mut character = Character::new(request.name.clone(), request.archetype, request.tech_level, total);

    // 1. Attributes, from the full total
    let attr_budget = share_of(total, ATTRIBUTE_SHARE);
    let spent = allocate_attributes(&mut character, attr_budget, request.archetype, rng);
    character.points_spent += spent;
    log::debug!("Attributes: {} of {} points", spent, attr_budget);

    // 2. Disadvantages, down to a cap from the full total
    let disadvantage_cap = -share_of(total, DISADVANTAGE_SHARE);
    let refunded = allocate_disadvantages(
        &mut character,
        &catalog.disadvantages,
        &eligibility,
        disadvantage_cap,
        rng,
    );
    character.points_spent += refunded;
    log::debug!("Disadvantages: {} (cap {})", refunded, disadvantage_cap);

    // 3. Advantages, from the full total
    let adv_budget = share_of(total, ADVANTAGE_SHARE);
    let spent = allocate_advantages(&mut character, &catalog.advantages, &eligibility, adv_budget, rng);
    character.points_spent += spent;
    log::debug!("Advantages: {} of {} points", spent, adv_budget);

    // 4. Skills, from what is left
    let skill_budget = share_of(character.remaining_points(), SKILL_SHARE).max(0);
    let spent = allocate_skills(
        &mut character,
        &catalog.skills,
        &eligibility,
        skill_budget,
        request.archetype,
        rng,
    );
    character.points_spent += spent;
    log::debug!("Skills: {} of {} points", spent, skill_budget);

    // 5. Whatever is still unspent
    spend_remainder(&mut character, &catalog.skills, &eligibility, ATTRIBUTE_CAP, rng);
    log::debug!(
        "Generated {}: {}/{} points spent",
        character.name,
        character.points_spent,
        character.total_points
    );

    character
}

/// Generate `count` characters, run `i` seeded with `seed + i`
pub fn generate_batch(catalog: &Catalog, request: &GenerationRequest, seed: u64, count: usize) -> Vec<Character> {
    (0..count)
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            generate_character(catalog, request, &mut rng)
        })
        .collect()
}
