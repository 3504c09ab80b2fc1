//! Selection set for search-select widgets.
//!
//! This module provides [`SelectionSet`], the ordered sequence of identifiers
//! the user has chosen. Selection is by identity: an identifier stays
//! selected whether or not its item is currently in the query results, and
//! even if no item in the backing collection carries it.
//!
//! # Example
//!
//! ```
//! use search_select::model::{SelectionSet, DuplicatePolicy};
//!
//! let mut selection = SelectionSet::new(DuplicatePolicy::Unique);
//! assert!(selection.select(3));
//! assert!(!selection.select(3)); // already selected
//! assert!(selection.is_selected(&3));
//!
//! assert!(selection.deselect(&3));
//! assert!(selection.is_empty());
//! ```

use std::sync::Arc;

use search_select_core::logging::targets;

use super::dataset_view::FilterFn;
use super::item::IdAccessor;

/// How `select` treats an identifier that is already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Set semantics: selecting a selected identifier is a no-op.
    #[default]
    Unique,
    /// Every `select` appends, so the sequence may hold duplicates.
    /// `deselect` still removes all occurrences at once.
    AllowDuplicates,
}

/// The ordered sequence of selected identifiers.
///
/// Mutators return whether the sequence actually changed, so callers only
/// notify for real transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet<Id> {
    ids: Vec<Id>,
    policy: DuplicatePolicy,
}

impl<Id> Default for SelectionSet<Id> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            policy: DuplicatePolicy::default(),
        }
    }
}

impl<Id: Clone + PartialEq> SelectionSet<Id> {
    /// Creates an empty selection with the given duplicate policy.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            ids: Vec::new(),
            policy,
        }
    }

    /// Returns the duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Returns the selected identifiers in selection order.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Returns the number of entries (duplicates included).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checks if an identifier is selected.
    pub fn is_selected(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    /// Appends an identifier to the selection.
    ///
    /// Returns `false` when the policy is [`DuplicatePolicy::Unique`] and the
    /// identifier was already selected.
    pub fn select(&mut self, id: Id) -> bool {
        if self.policy == DuplicatePolicy::Unique && self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes every occurrence of an identifier.
    ///
    /// Returns `false` if the identifier was not selected.
    pub fn deselect(&mut self, id: &Id) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        let removed = before - self.ids.len();
        if removed > 1 {
            tracing::trace!(target: targets::SELECTION, removed, "removed duplicate selections");
        }
        removed > 0
    }

    /// Selects the identifier if unselected, otherwise deselects it.
    ///
    /// Returns `true` if the identifier is selected afterwards.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.is_selected(&id) {
            self.deselect(&id);
            false
        } else {
            self.select(id);
            true
        }
    }

    /// Deselects everything. Returns `false` if the selection was empty.
    pub fn clear(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        true
    }
}

impl<Id: Clone + PartialEq + Send + Sync + 'static> SelectionSet<Id> {
    /// Builds a predicate matching items whose identifier is selected.
    ///
    /// The predicate captures a snapshot of the current identifiers; rebuild
    /// it after every change.
    pub fn filter<T: 'static>(&self, id_of: IdAccessor<T, Id>) -> FilterFn<T> {
        let ids = self.ids.clone();
        Arc::new(move |item: &T| id_of(item).is_some_and(|id| ids.contains(&id)))
    }
}
