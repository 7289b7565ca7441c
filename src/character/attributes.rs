//! Primary attributes
//!
//! The six scored attributes and their point costs. Attributes are addressed
//! through the `Attribute` enum rather than by name.

use serde::{Deserialize, Serialize};

/// Human baseline for every attribute
pub const BASELINE: i32 = 10;

/// Highest value the generator will raise an attribute to
pub const ATTRIBUTE_CAP: i32 = 16;

/// A scored attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "DX")]
    Dx,
    #[serde(rename = "IQ")]
    Iq,
    #[serde(rename = "HT")]
    Ht,
    Will,
    Per,
}

impl Attribute {
    /// All attributes, in sheet order
    pub const ALL: [Attribute; 6] = [
        Attribute::St,
        Attribute::Dx,
        Attribute::Iq,
        Attribute::Ht,
        Attribute::Will,
        Attribute::Per,
    ];

    /// Point cost of raising the attribute by one
    pub fn cost(&self) -> i32 {
        match self {
            Attribute::St | Attribute::Ht => 10,
            Attribute::Dx | Attribute::Iq => 20,
            Attribute::Will | Attribute::Per => 5,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Attribute::St => "ST",
            Attribute::Dx => "DX",
            Attribute::Iq => "IQ",
            Attribute::Ht => "HT",
            Attribute::Will => "Will",
            Attribute::Per => "Per",
        }
    }
}

/// Attribute scores of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub st: i32,
    pub dx: i32,
    pub iq: i32,
    pub ht: i32,
    pub will: i32,
    pub per: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            st: BASELINE,
            dx: BASELINE,
            iq: BASELINE,
            ht: BASELINE,
            will: BASELINE,
            per: BASELINE,
        }
    }
}

impl Attributes {
    /// Baseline scores with Will and Per following IQ
    pub fn baseline() -> Self {
        let mut attrs = Self::default();
        attrs.will = attrs.iq;
        attrs.per = attrs.iq;
        attrs
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::St => self.st,
            Attribute::Dx => self.dx,
            Attribute::Iq => self.iq,
            Attribute::Ht => self.ht,
            Attribute::Will => self.will,
            Attribute::Per => self.per,
        }
    }

    pub fn get_mut(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::St => &mut self.st,
            Attribute::Dx => &mut self.dx,
            Attribute::Iq => &mut self.iq,
            Attribute::Ht => &mut self.ht,
            Attribute::Will => &mut self.will,
            Attribute::Per => &mut self.per,
        }
    }

    /// Raise an attribute by one
    pub fn raise(&mut self, attr: Attribute) {
        *self.get_mut(attr) += 1;
    }

    /// Attributes still below `cap`
    pub fn below(&self, cap: i32) -> Vec<Attribute> {
        Attribute::ALL
            .iter()
            .copied()
            .filter(|a| self.get(*a) < cap)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        assert_eq!(Attribute::St.cost(), 10);
        assert_eq!(Attribute::Ht.cost(), 10);
        assert_eq!(Attribute::Dx.cost(), 20);
        assert_eq!(Attribute::Iq.cost(), 20);
        assert_eq!(Attribute::Will.cost(), 5);
        assert_eq!(Attribute::Per.cost(), 5);
    }

    #[test]
    fn test_get_mut_targets_the_named_field() {
        let mut attrs = Attributes::baseline();
        attrs.raise(Attribute::Per);
        attrs.raise(Attribute::Per);
        assert_eq!(attrs.per, 12);
        assert_eq!(attrs.will, 10);
        assert_eq!(attrs.get(Attribute::Per), 12);
    }

    #[test]
    fn test_below_cap() {
        let mut attrs = Attributes::baseline();
        attrs.st = ATTRIBUTE_CAP;
        let open = attrs.below(ATTRIBUTE_CAP);
        assert_eq!(open.len(), 5);
        assert!(!open.contains(&Attribute::St));
    }

    #[test]
    fn test_serde_uses_sheet_abbreviations() {
        let json = serde_json::to_string(&Attribute::Dx).unwrap();
        assert_eq!(json, "\"DX\"");
        let will: Attribute = serde_json::from_str("\"Will\"").unwrap();
        assert_eq!(will, Attribute::Will);
    }
}
