//! Reference catalog
//!
//! Static tables of advantages, disadvantages, skills and archetype
//! profiles, with optional RON overrides on disk.

pub mod tags;
pub mod traits;
pub mod skills;
pub mod archetypes;
pub mod loader;

pub use tags::{CatalogEntry, ContentTag, TechRange};
pub use traits::{Advantage, Disadvantage, default_advantages, default_disadvantages};
pub use skills::{Difficulty, SkillCategory, SkillTemplate, default_skill_templates};
pub use archetypes::Archetype;
pub use loader::{Catalog, CatalogError, export_default_catalog};
