//! Advantages and disadvantages
//!
//! Fixed-cost traits. Disadvantages carry a negative cost.

use serde::{Deserialize, Serialize};

use super::tags::{CatalogEntry, ContentTag, TechRange};

/// A beneficial trait bought with points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advantage {
    pub name: String,
    pub cost: i32,
    pub tags: Vec<ContentTag>,
    #[serde(default)]
    pub tech_range: TechRange,
}

/// A limiting trait that refunds points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disadvantage {
    pub name: String,
    /// Negative by convention
    pub cost: i32,
    pub tags: Vec<ContentTag>,
    #[serde(default)]
    pub tech_range: TechRange,
}

impl Advantage {
    pub fn new(name: impl Into<String>, cost: i32, tags: &[ContentTag]) -> Self {
        Self {
            name: name.into(),
            cost,
            tags: tags.to_vec(),
            tech_range: TechRange::ALL,
        }
    }

    pub fn with_tech_range(mut self, min: i32, max: i32) -> Self {
        self.tech_range = TechRange::new(min, max);
        self
    }
}

impl Disadvantage {
    pub fn new(name: impl Into<String>, cost: i32, tags: &[ContentTag]) -> Self {
        Self {
            name: name.into(),
            cost,
            tags: tags.to_vec(),
            tech_range: TechRange::ALL,
        }
    }

    pub fn with_tech_range(mut self, min: i32, max: i32) -> Self {
        self.tech_range = TechRange::new(min, max);
        self
    }
}

impl CatalogEntry for Advantage {
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

impl CatalogEntry for Disadvantage {
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
// Built-in tables
// =============================================================================

/// Built-in advantage list
pub fn default_advantages() -> Vec<Advantage> {
    use ContentTag::*;

    vec![
        Advantage::new("Fit", 5, &[Mundane]),
        Advantage::new("Combat Reflexes", 15, &[Mundane]),
        Advantage::new("Luck", 10, &[Mundane]),
        Advantage::new("High Pain Threshold", 10, &[Mundane]),
        Advantage::new("Acute Hearing 2", 4, &[Mundane]),
        Advantage::new("Charisma 1", 5, &[Mundane]),
        Advantage::new("Language Talent", 10, &[Mundane]),
        Advantage::new("Wealthy", 20, &[Mundane]),
        Advantage::new("Security Clearance", 5, &[Mundane]).with_tech_range(6, 12),
        Advantage::new("Neural Interface", 10, &[Mundane]).with_tech_range(9, 12),
        Advantage::new("Magery 1", 15, &[Supernatural]),
        Advantage::new("Spirit Empathy", 10, &[Supernatural]),
        Advantage::new("Telepathy 1", 15, &[Super]),
        Advantage::new("Damage Resistance 2", 10, &[Super]),
    ]
}

/// Built-in disadvantage list
pub fn default_disadvantages() -> Vec<Disadvantage> {
    use ContentTag::*;

    vec![
        Disadvantage::new("Lame (Crippled Leg)", -10, &[Mundane]),
        Disadvantage::new("Code of Honor", -10, &[Mundane]),
        Disadvantage::new("Phobia (Darkness)", -5, &[Mundane]),
        Disadvantage::new("Bad Temper", -10, &[Mundane]),
        Disadvantage::new("Overconfidence", -5, &[Mundane]),
        Disadvantage::new("Sense of Duty (Comrades)", -5, &[Mundane]),
        Disadvantage::new("Illiteracy", -3, &[Mundane]).with_tech_range(0, 5),
        Disadvantage::new("Phobia (Machinery)", -5, &[Mundane]).with_tech_range(5, 12),
        Disadvantage::new("Addiction (Stimulants)", -5, &[Mundane]).with_tech_range(7, 12),
        Disadvantage::new("Cursed", -15, &[Supernatural]),
        Disadvantage::new("Magic Susceptibility 1", -3, &[Supernatural]),
        Disadvantage::new("Uncontrollable Power", -10, &[Super]),
    ]
}
