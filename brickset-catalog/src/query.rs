//! In-memory query catalog over the loaded set collection.
//!
//! Builds a `by_number` lookup map over the sets in file order. All queries
//! are single linear scans (plus a sort where the result order demands it)
//! and never mutate the collection.

use std::collections::HashMap;

use crate::types::{LegoSet, PackagingType, PackagingTypeParseError};

/// The loaded set collection, keyed by set number for direct lookups.
pub struct SetCatalog {
    by_number: HashMap<String, usize>,
    sets: Vec<LegoSet>,
}

impl SetCatalog {
    /// Build a catalog from a loaded set collection.
    ///
    /// Set numbers are unique in well-formed data; duplicates are resolved
    /// by keeping the first entry and warning about the rest.
    pub fn from_sets(sets: Vec<LegoSet>) -> Self {
        let mut by_number = HashMap::with_capacity(sets.len());

        for (i, set) in sets.iter().enumerate() {
            if by_number.contains_key(&set.number) {
                log::warn!("Duplicate set number in data: {}", set.number);
                continue;
            }
            by_number.insert(set.number.clone(), i);
        }

        Self { by_number, sets }
    }

    /// Look up a set by its unique number.
    pub fn get(&self, number: &str) -> Option<&LegoSet> {
        self.by_number.get(number).map(|&i| &self.sets[i])
    }

    /// All sets in original file order.
    pub fn all(&self) -> &[LegoSet] {
        &self.sets
    }

    /// Returns the total number of sets in the catalog.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Count sets tagged with `tag` (exact, case-sensitive).
    ///
    /// Sets without a tag list contribute nothing; an unmatched tag yields 0.
    pub fn count_with_tag(&self, tag: &str) -> usize {
        self.sets
            .iter()
            .filter(|set| {
                set.tags
                    .as_ref()
                    .is_some_and(|tags| tags.iter().any(|t| t == tag))
            })
            .count()
    }

    /// Names of sets in the given theme (case-insensitive), in file order.
    pub fn names_with_theme(&self, theme: &str) -> Vec<&str> {
        self.sets
            .iter()
            .filter(|set| set.theme.eq_ignore_ascii_case(theme))
            .map(|set| set.name.as_str())
            .collect()
    }

    /// Names of the `n` sets with the most pieces, highest first.
    ///
    /// The sort is stable, so sets with equal piece counts keep their
    /// original relative order. `n` past the end returns every name.
    pub fn top_names_by_pieces(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&LegoSet> = self.sets.iter().collect();
        ranked.sort_by(|a, b| b.pieces.cmp(&a.pieces));
        ranked
            .into_iter()
            .take(n)
            .map(|set| set.name.as_str())
            .collect()
    }

    /// Count sets with the named packaging type (case-insensitive).
    ///
    /// Unknown packaging names fail with the parse error rather than
    /// counting zero.
    pub fn count_with_packaging(
        &self,
        type_name: &str,
    ) -> Result<usize, PackagingTypeParseError> {
        let packaging: PackagingType = type_name.parse()?;
        Ok(self
            .sets
            .iter()
            .filter(|set| set.packaging_type == packaging)
            .count())
    }

    /// Names of sets with `low < pieces < high` (exclusive on both ends),
    /// sorted alphabetically.
    pub fn names_in_piece_range(&self, low: u32, high: u32) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .sets
            .iter()
            .filter(|set| set.pieces > low && set.pieces < high)
            .map(|set| set.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Names of sets weighing at least `min_weight`, sorted alphabetically.
    ///
    /// Sets with no recorded dimensions or no recorded weight never match.
    pub fn names_at_least_weight(&self, min_weight: f64) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .sets
            .iter()
            .filter(|set| set.weight().is_some_and(|w| w >= min_weight))
            .map(|set| set.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
