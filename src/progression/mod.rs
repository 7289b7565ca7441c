//! Progression rules

pub mod level;

pub use level::{relative_level, skill_level};
