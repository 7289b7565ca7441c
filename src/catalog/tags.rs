//! Content tags and technology ranges
//!
//! Every catalog entry carries a content classification and the span of
//! technology levels it exists in.

use serde::{Deserialize, Serialize};

/// Setting classification of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTag {
    /// Ordinary, always allowed
    Mundane,
    /// Cinematic or superhuman abilities
    Super,
    /// Magic and the occult
    Supernatural,
}

/// Inclusive range of technology levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechRange {
    pub min: i32,
    pub max: i32,
}

impl TechRange {
    /// Default span used when an entry does not narrow it
    pub const ALL: TechRange = TechRange { min: 0, max: 12 };

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, tech_level: i32) -> bool {
        self.min <= tech_level && tech_level <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for TechRange {
    fn default() -> Self {
        Self::ALL
    }
}

/// Shape shared by everything the eligibility filter looks at
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn tags(&self) -> &[ContentTag];
    fn tech_range(&self) -> TechRange;

    fn has_tag(&self, tag: ContentTag) -> bool {
        self.tags().contains(&tag)
    }
}
