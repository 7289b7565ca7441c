//! Attribute phase
//!
//! Raises attributes one step at a time, picking which one by the
//! archetype's weights, until a randomly chosen share of the budget is
//! used.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::catalog::Archetype;
use crate::character::{Attribute, Character, ATTRIBUTE_CAP};

/// Spend between 30% and 50% of `budget` on attribute increases.
/// Returns the points spent, never more than `budget`.
pub fn allocate_attributes(
    character: &mut Character,
    budget: i32,
    archetype: Archetype,
    rng: &mut impl Rng,
) -> i32 {
    let weights: Vec<u32> = Attribute::ALL
        .iter()
        .map(|a| archetype.attribute_weight(*a))
        .collect();
    let picker = match WeightedIndex::new(&weights) {
        Ok(picker) => picker,
        Err(e) => {
            log::warn!("No usable attribute weights for {}: {}", archetype, e);
            return 0;
        }
    };

    let target = (f64::from(budget) * rng.gen_range(0.3..0.5)) as i32;
    let mut spent = 0;

    while spent < target {
        // Every draw would be a redraw once everything is capped
        if character.attributes.below(ATTRIBUTE_CAP).is_empty() {
            break;
        }

        let attr = Attribute::ALL[picker.sample(rng)];
        let cost = attr.cost();
        if spent + cost > budget {
            break;
        }
        if character.attribute(attr) >= ATTRIBUTE_CAP {
            continue;
        }

        character.attributes.raise(attr);
        spent += cost;
    }

    spent
}
