//! Multi-select option lists with an aggregate "all" entry.
//!
//! An [`OptionList`] is the ordered list of options one filter dropdown
//! offers; its first entry is the synthetic aggregate ("All Locations",
//! "All Cafes", ...). A [`SelectionSet`] holds the real options currently
//! selected for that attribute and never contains the aggregate itself.
//!
//! Both operations here are pure: they take the current selection and
//! return the next one, leaving storage to the caller.

use std::collections::HashSet;

/// The set of selected real options for one filterable attribute.
///
/// Empty means "match nothing", not "match everything"; callers seed the
/// set with every real option to mean "everything selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet(HashSet<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, option: &str) -> bool {
        self.0.contains(option)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn with_inserted(&self, option: &str) -> Self {
        let mut next = self.0.clone();
        next.insert(option.to_string());
        Self(next)
    }

    /// Removing an absent member is a no-op, never an error.
    fn with_removed(&self, option: &str) -> Self {
        let mut next = self.0.clone();
        next.remove(option);
        Self(next)
    }

    fn only(&self) -> Option<&str> {
        match self.0.len() {
            1 => self.0.iter().next().map(String::as_str),
            _ => None,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The ordered options of one filter dropdown, aggregate first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    label: String,
    options: Vec<String>,
}

impl OptionList {
    /// Build a list from an attribute label and its real option values.
    ///
    /// The aggregate entry is synthesized as "All {label}s" and prepended;
    /// duplicate values keep their first-seen position.
    pub fn from_values<S: Into<String>>(
        label: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let label = label.into();
        let mut seen = HashSet::new();
        let mut options = vec![format!("All {label}s")];
        for value in values {
            let value = value.into();
            if seen.insert(value.clone()) {
                options.push(value);
            }
        }
        Self { label, options }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All options in display order, aggregate first.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn aggregate(&self) -> &str {
        &self.options[0]
    }

    pub fn real_options(&self) -> &[String] {
        &self.options[1..]
    }

    /// The mount-time default: every real option selected.
    pub fn seeded(&self) -> SelectionSet {
        self.real_options().iter().cloned().collect()
    }

    /// Compute the selection that results from toggling `option`.
    ///
    /// Toggling the aggregate selects every real option unless all of them
    /// are already selected, in which case it clears the set. Toggling a
    /// real option flips its membership.
    pub fn toggle(&self, current: &SelectionSet, option: &str) -> SelectionSet {
        if option == self.aggregate() {
            let all_selected = self.real_options().iter().all(|o| current.contains(o));
            if all_selected {
                SelectionSet::new()
            } else {
                self.seeded()
            }
        } else if current.contains(option) {
            current.with_removed(option)
        } else {
            current.with_inserted(option)
        }
    }

    /// Display label for the dropdown button. Presentation only; never
    /// feeds back into filtering.
    pub fn summary(&self, current: &SelectionSet, placeholder: &str) -> String {
        if current.is_empty() {
            return placeholder.to_string();
        }
        if let Some(single) = current.only() {
            return single.to_string();
        }
        if current.len() == self.real_options().len() {
            return format!("All {}s", self.label);
        }
        format!("{} {}s", current.len(), self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> OptionList {
        OptionList::from_values("Location", ["Camberley", "Frimley", "Yateley"])
    }

    #[test]
    fn aggregate_is_prepended_and_duplicates_collapse() {
        let list = OptionList::from_values("Cafe", ["Mullans", "The Bear", "Mullans"]);
        assert_eq!(list.aggregate(), "All Cafes");
        assert_eq!(list.real_options(), ["Mullans", "The Bear"]);
    }

    #[test]
    fn toggling_a_real_option_is_self_inverse() {
        let list = cities();
        let start = list.seeded();
        let without = list.toggle(&start, "Frimley");
        assert!(!without.contains("Frimley"));
        assert!(without.contains("Camberley"));
        let back = list.toggle(&without, "Frimley");
        assert_eq!(back, start);
    }

    #[test]
    fn toggling_the_aggregate_flips_between_all_and_none() {
        let list = cities();
        let all = list.seeded();
        let none = list.toggle(&all, "All Locations");
        assert!(none.is_empty());
        let all_again = list.toggle(&none, "All Locations");
        assert_eq!(all_again, all);
    }

    #[test]
    fn aggregate_from_a_partial_selection_selects_everything() {
        let list = cities();
        let partial: SelectionSet = ["Camberley"].into_iter().collect();
        let all = list.toggle(&partial, "All Locations");
        assert_eq!(all, list.seeded());
    }

    #[test]
    fn removing_an_absent_option_is_a_no_op() {
        let list = cities();
        let partial: SelectionSet = ["Camberley"].into_iter().collect();
        // "Frimley" is a known option but not selected; toggling selects it.
        let toggled = list.toggle(&partial, "Frimley");
        assert!(toggled.contains("Frimley"));
        // Toggling it again removes it, back to the original set.
        assert_eq!(list.toggle(&toggled, "Frimley"), partial);
    }

    #[test]
    fn summary_labels() {
        let list = cities();
        let empty = SelectionSet::new();
        assert_eq!(list.summary(&empty, "Select Locations"), "Select Locations");

        let one: SelectionSet = ["Frimley"].into_iter().collect();
        assert_eq!(list.summary(&one, "Select Locations"), "Frimley");

        let two: SelectionSet = ["Frimley", "Yateley"].into_iter().collect();
        assert_eq!(list.summary(&two, "Select Locations"), "2 Locations");

        assert_eq!(
            list.summary(&list.seeded(), "Select Locations"),
            "All Locations"
        );
    }
}
