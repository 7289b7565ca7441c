//! Disadvantage and advantage phases
//!
//! Both walk a shuffled copy of the eligible list once and take whatever
//! still fits. Nothing skipped is reconsidered.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Advantage, Disadvantage};
use crate::character::Character;
use super::filter::{filter_by_options, Eligibility};

/// Take disadvantages until their total would pass `min_negative_points`
/// in absolute value. Returns the (negative) total taken.
pub fn allocate_disadvantages(
    character: &mut Character,
    disadvantages: &[Disadvantage],
    eligibility: &Eligibility,
    min_negative_points: i32,
    rng: &mut impl Rng,
) -> i32 {
    let mut pool = filter_by_options(disadvantages, eligibility);
    pool.shuffle(rng);

    let cap = min_negative_points.abs();
    let mut total = 0;

    for dis in pool {
        if (total + dis.cost).abs() > cap {
            continue;
        }
        if !character.add_disadvantage(dis.clone()) {
            continue;
        }
        total += dis.cost;
    }

    total
}

/// Take advantages while their total stays within `budget`.
/// Returns the total taken.
pub fn allocate_advantages(
    character: &mut Character,
    advantages: &[Advantage],
    eligibility: &Eligibility,
    budget: i32,
    rng: &mut impl Rng,
) -> i32 {
    let mut pool = filter_by_options(advantages, eligibility);
    pool.shuffle(rng);

    let mut spent = 0;

    for adv in pool {
        if spent + adv.cost > budget {
            continue;
        }
        if !character.add_advantage(adv.clone()) {
            continue;
        }
        spent += adv.cost;
    }

    spent
}
