//! Character data
//!
//! Attributes, the character record, and sheet rendering.

pub mod attributes;
pub mod record;
pub mod sheet;

pub use attributes::{Attribute, Attributes, ATTRIBUTE_CAP, BASELINE};
pub use record::{Character, LearnedSkill};
pub use sheet::{character_json, format_character};
