//! Catalog filtering: AND across attributes, OR within an attribute.

use crate::catalog::{Cafe, STAR_SCALE, star_label};
use crate::selection::{OptionList, SelectionSet};

/// The current selection for each filterable attribute.
///
/// A café passes when every attribute's set contains the café's value for
/// that attribute. An empty set therefore excludes every café; this strict
/// policy is intentional and must not be relaxed to "empty matches all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeFilters {
    pub locations: SelectionSet,
    pub names: SelectionSet,
    pub ratings: SelectionSet,
}

impl CafeFilters {
    /// The mount-time default: everything selected.
    pub fn seeded(cafes: &[Cafe]) -> Self {
        Self {
            locations: location_options(cafes).seeded(),
            names: name_options(cafes).seeded(),
            ratings: rating_options().seeded(),
        }
    }

    pub fn matches(&self, cafe: &Cafe) -> bool {
        self.locations.contains(&cafe.location)
            && self.names.contains(&cafe.name)
            && self.ratings.contains(&cafe.rating_bucket())
    }

    /// Filter the catalog, preserving its order.
    pub fn apply<'a>(&self, cafes: &'a [Cafe]) -> Vec<&'a Cafe> {
        cafes.iter().filter(|cafe| self.matches(cafe)).collect()
    }
}

/// Location dropdown options, in first-seen catalog order.
pub fn location_options(cafes: &[Cafe]) -> OptionList {
    OptionList::from_values("Location", cafes.iter().map(|c| c.location.clone()))
}

/// Café-name dropdown options, in first-seen catalog order.
pub fn name_options(cafes: &[Cafe]) -> OptionList {
    OptionList::from_values("Cafe", cafes.iter().map(|c| c.name.clone()))
}

/// The fixed rating buckets: "1 Star" through "5 Stars".
pub fn rating_options() -> OptionList {
    OptionList::from_values("Rating", (1..=STAR_SCALE).map(star_label))
}
