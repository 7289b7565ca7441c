//! Eligibility filter
//!
//! Decides which catalog entries a generation run may use, from the run's
//! technology level and content flags.

use crate::catalog::{CatalogEntry, ContentTag};

/// Technology level and content switches for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    pub tech_level: i32,
    pub allow_super: bool,
    pub allow_supernatural: bool,
}

impl Eligibility {
    pub fn new(tech_level: i32, allow_super: bool, allow_supernatural: bool) -> Self {
        Self {
            tech_level,
            allow_super,
            allow_supernatural,
        }
    }

    /// Mundane content only
    pub fn mundane(tech_level: i32) -> Self {
        Self::new(tech_level, false, false)
    }

    pub fn admits<T: CatalogEntry + ?Sized>(&self, item: &T) -> bool {
        if !item.tech_range().contains(self.tech_level) {
            return false;
        }
        if item.has_tag(ContentTag::Super) && !self.allow_super {
            return false;
        }
        if item.has_tag(ContentTag::Supernatural) && !self.allow_supernatural {
            return false;
        }
        true
    }
}

/// Entries admitted by `eligibility`, in catalog order
pub fn filter_by_options<'a, T: CatalogEntry>(items: &'a [T], eligibility: &Eligibility) -> Vec<&'a T> {
    items.iter().filter(|item| eligibility.admits(*item)).collect()
}
