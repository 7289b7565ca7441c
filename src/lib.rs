//! Pointbuy - a point-budget tabletop RPG character generator
//!
//! Give it a budget, a technology level and some content switches, and it
//! rolls up attributes, advantages, disadvantages and skills from the
//! reference catalog.

pub mod catalog;
pub mod character;
pub mod progression;
pub mod generator;
pub mod config;

// Re-export commonly used types
pub use catalog::{Archetype, Catalog};
pub use character::{Character, format_character};
pub use generator::{GenerationRequest, generate_character};
