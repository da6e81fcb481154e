//! The user's chosen subset of the catalog.
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CountryOption};

/// Ordered multi-select contents.
///
/// Entries mirror what a multi-select widget hands back, so a slot may be
/// empty. Only present entries take part in a pick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    entries: Vec<Option<CountryOption>>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from widget entries, dropping repeated countries.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<CountryOption>>,
    {
        let mut set = Self::new();
        for entry in entries {
            match entry {
                Some(option) => {
                    set.push(option);
                }
                None => set.entries.push(None),
            }
        }
        set
    }

    /// Build a set where every entry is present.
    #[must_use]
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = CountryOption>,
    {
        Self::from_entries(options.into_iter().map(Some))
    }

    /// Append a country unless it is already selected. Returns whether it was added.
    pub fn push(&mut self, option: CountryOption) -> bool {
        if self.contains(&option) {
            return false;
        }
        self.entries.push(Some(option));
        true
    }

    /// Drop a country by its catalog value. Returns whether anything was removed.
    pub fn remove(&mut self, value: usize) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.as_ref().is_none_or(|option| option.value != value));
        self.entries.len() != before
    }

    #[must_use]
    pub fn contains(&self, option: &CountryOption) -> bool {
        self.present().any(|selected| selected.value == option.value)
    }

    /// Present entries in selection order.
    pub fn present(&self) -> impl Iterator<Item = &CountryOption> {
        self.entries.iter().flatten()
    }

    /// Number of present entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.present().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Raw widget entries, including empty slots.
    #[must_use]
    pub fn entries(&self) -> &[Option<CountryOption>] {
        &self.entries
    }

    /// Present entry at a 0-based position among present entries.
    #[must_use]
    pub fn nth_present(&self, index: usize) -> Option<&CountryOption> {
        self.present().nth(index)
    }

    /// Catalog options that are not already selected.
    #[must_use]
    pub fn candidates<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CountryOption> {
        catalog
            .options()
            .iter()
            .filter(|option| !self.contains(option))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Coordinates;

    fn catalog() -> Catalog {
        Catalog::from_entries([
            ("Japan", Coordinates::new(36.0, 138.0).unwrap()),
            ("France", Coordinates::new(46.0, 2.0).unwrap()),
            ("Italy", Coordinates::new(42.83, 12.83).unwrap()),
        ])
    }

    #[test]
    fn duplicates_are_dropped_and_gaps_skipped() {
        let catalog = catalog();
        let france = catalog.find("France").cloned();
        let set = SelectionSet::from_entries([france.clone(), None, france]);
        assert_eq!(set.entries().len(), 2);
        assert_eq!(set.count(), 1);
        assert_eq!(set.nth_present(0).map(|o| o.label.as_str()), Some("France"));
    }

    #[test]
    fn candidates_exclude_selected_countries() {
        let catalog = catalog();
        let mut set = SelectionSet::new();
        assert!(set.push(catalog.find("Italy").cloned().unwrap()));
        assert!(!set.push(catalog.find("Italy").cloned().unwrap()));
        let labels: Vec<_> = set
            .candidates(&catalog)
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, ["France", "Japan"]);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let catalog = catalog();
        let mut set = SelectionSet::from_options(catalog.options().iter().cloned());
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert_eq!(set.count(), 2);
    }
}
