//! The search-select state machine.
//!
//! [`SearchSelect`] owns the query, the selected identifiers and two
//! [`DatasetView`]s over one shared backing collection:
//!
//! - the **search view**, filtered by the query, whose members are the
//!   result set shown to the user;
//! - the **selection view**, filtered to items whose identifier is selected.
//!
//! Query and selection are orthogonal: either can change in any order
//! without disturbing the other.
//!
//! # Signals
//!
//! - `query_changed(String)`: Emitted by `set_query` with the new query
//! - `result_set_changed(Vec<T>)`: Emitted with the search view's members
//!   after a query change or a source reset
//! - `selection_changed(Vec<Id>)`: Emitted with the full identifier sequence
//!   after the selection actually changed
//!
//! Every signal fires synchronously after both views are recomputed, so the
//! values a slot receives always come from consistent state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use search_select::{Accessors, SearchSelect};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Person {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let people: Arc<[Person]> = Arc::from(vec![
//!     Person { id: 1, name: "Ann" },
//!     Person { id: 2, name: "Anna" },
//!     Person { id: 3, name: "Bob" },
//! ]);
//!
//! let mut widget = SearchSelect::builder()
//!     .source(people)
//!     .accessors(Accessors::new(
//!         |p: &Person| Some(p.id),
//!         |p: &Person| Some(p.name),
//!         |_: &Person| None,
//!     ))
//!     .build()?;
//!
//! widget.result_set_changed.connect(|people| {
//!     println!("{} result(s)", people.len());
//! });
//!
//! widget.set_query("an");
//! assert_eq!(widget.result_set().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
//!
//! widget.select(3);
//! assert_eq!(widget.selection_members().map(|p| p.name).collect::<Vec<_>>(), vec!["Bob"]);
//! # Ok::<(), search_select::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;

use search_select_core::logging::targets;
use search_select_core::Signal;

use crate::config::{Record, RecordId, SearchSelectConfig};
use crate::error::{Error, Result};
use crate::model::{
    Accessors, DatasetView, DuplicatePolicy, FieldRole, FilterFn, IdAccessor, QueryMatcher,
    SelectionSet, TextAccessor,
};

/// Which affordance a renderer shows next to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Not selected; offer to add it.
    Available,
    /// Selected; show it checked and offer to remove it.
    Selected,
}

/// Reactive search-and-select state over a shared collection.
///
/// Built with [`SearchSelect::builder`]. Construction fails fast when the
/// source or an accessor is missing; every operation afterwards is total.
pub struct SearchSelect<T, Id> {
    query: String,
    accessors: Accessors<T, Id>,
    show_all_default: bool,
    selection: SelectionSet<Id>,
    search_view: DatasetView<T>,
    selection_view: DatasetView<T>,

    // Signals
    /// Signal emitted with the new query after `set_query`.
    pub query_changed: Signal<String>,

    /// Signal emitted with the current result set.
    pub result_set_changed: Signal<Vec<T>>,

    /// Signal emitted with every selected identifier after a selection change.
    pub selection_changed: Signal<Vec<Id>>,
}

impl<T, Id: fmt::Debug> fmt::Debug for SearchSelect<T, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSelect")
            .field("query", &self.query)
            .field("show_all_default", &self.show_all_default)
            .field("selection", &self.selection)
            .field("search_view", &self.search_view)
            .field("selection_view", &self.selection_view)
            .finish()
    }
}

impl<T, Id> SearchSelect<T, Id>
where
    T: Clone + Send + Sync + 'static,
    Id: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Starts building a widget.
    pub fn builder() -> SearchSelectBuilder<T, Id> {
        SearchSelectBuilder::new()
    }

    fn from_parts(
        source: Arc<[T]>,
        accessors: Accessors<T, Id>,
        show_all_default: bool,
        duplicate_policy: DuplicatePolicy,
    ) -> Self {
        let mut widget = Self {
            query: String::new(),
            search_view: DatasetView::new(source.clone()),
            selection_view: DatasetView::new(source),
            accessors,
            show_all_default,
            selection: SelectionSet::new(duplicate_policy),
            query_changed: Signal::new(),
            result_set_changed: Signal::new(),
            selection_changed: Signal::new(),
        };
        let filter = widget.search_filter();
        widget.search_view.reconfigure_shared(filter);
        tracing::debug!(
            target: targets::STATE,
            source_count = widget.search_view.source().len(),
            initial_results = widget.search_view.len(),
            show_all_default,
            "search-select created"
        );
        widget
    }

    // =========================================================================
    // Query
    // =========================================================================

    /// Returns the current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns whether an empty query matches every item.
    pub fn show_all_default(&self) -> bool {
        self.show_all_default
    }

    /// Sets the query and re-derives the result set.
    ///
    /// The query is used as given; trimming raw input is the caller's job
    /// (see [`InputEvent::QueryEdited`](crate::widget::InputEvent)).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        let filter = self.search_filter();
        self.search_view.reconfigure_shared(filter);
        tracing::debug!(
            target: targets::STATE,
            query = %self.query,
            result_count = self.search_view.len(),
            "query set"
        );

        self.query_changed.emit(self.query.clone());
        self.result_set_changed.emit(self.search_view.to_vec());
    }

    /// Iterates over the current result set in source order.
    pub fn result_set(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.search_view.members()
    }

    /// Returns the search view.
    pub fn search_view(&self) -> &DatasetView<T> {
        &self.search_view
    }

    fn search_filter(&self) -> FilterFn<T> {
        let matcher = QueryMatcher::new(&self.query, self.show_all_default);
        let name_of: TextAccessor<T> = self.accessors.name_accessor();
        Arc::new(move |item: &T| matcher.matches(name_of(item)))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns the selected identifiers in selection order.
    pub fn selected_ids(&self) -> &[Id] {
        self.selection.ids()
    }

    /// Checks if an identifier is selected.
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selection.is_selected(id)
    }

    /// Returns the affordance to show for an item.
    ///
    /// Items without an identifier are always [`ItemState::Available`].
    pub fn item_state(&self, item: &T) -> ItemState {
        match self.accessors.id_of(item) {
            Some(id) if self.selection.is_selected(&id) => ItemState::Selected,
            _ => ItemState::Available,
        }
    }

    /// Iterates over the selected items in source order.
    pub fn selection_members(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.selection_view.members()
    }

    /// Returns the selection view.
    pub fn selection_view(&self) -> &DatasetView<T> {
        &self.selection_view
    }

    /// Returns the duplicate policy.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.selection.policy()
    }

    /// Selects an identifier.
    ///
    /// The identifier does not need to be in the current result set. An
    /// identifier that matches no item is still recorded; it simply never
    /// produces a selection view member.
    pub fn select(&mut self, id: Id) {
        let newly_selected = !self.selection.is_selected(&id);
        let members_before = self.selection_view.len();

        let changed = self.selection.select(id.clone());
        tracing::debug!(target: targets::STATE, ?id, changed, "select");
        if changed {
            self.selection_did_change();
        }

        // A fresh identifier that adds no member matches no item.
        if newly_selected && self.selection_view.len() == members_before {
            tracing::debug!(target: targets::STATE, ?id, "selected identifier matches no item");
        }
    }

    /// Deselects every occurrence of an identifier.
    pub fn deselect(&mut self, id: &Id) {
        let changed = self.selection.deselect(id);
        tracing::debug!(target: targets::STATE, ?id, changed, "deselect");
        if changed {
            self.selection_did_change();
        }
    }

    /// Selects the identifier if unselected, otherwise deselects it.
    ///
    /// Returns `true` if the identifier is selected afterwards.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.selection.is_selected(&id) {
            self.deselect(&id);
            false
        } else {
            self.select(id);
            true
        }
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            tracing::debug!(target: targets::STATE, "selection cleared");
            self.selection_did_change();
        }
    }

    fn selection_did_change(&mut self) {
        let id_of: IdAccessor<T, Id> = self.accessors.id_accessor();
        let filter = self.selection.filter(id_of);
        self.selection_view.reconfigure_shared(filter);
        tracing::trace!(
            target: targets::SELECTION,
            selected = self.selection.len(),
            members = self.selection_view.len(),
            "selection view recomputed"
        );

        self.selection_changed.emit(self.selection.ids().to_vec());
    }

    // =========================================================================
    // Source
    // =========================================================================

    /// Returns the backing collection.
    pub fn source(&self) -> &Arc<[T]> {
        self.search_view.source()
    }

    /// Returns the item accessors.
    pub fn accessors(&self) -> &Accessors<T, Id> {
        &self.accessors
    }

    /// Re-derives both views after a dataset-level change.
    ///
    /// The collection itself is never mutated; the owner hands in the new
    /// snapshot. Query and selection are kept.
    pub fn reset_source(&mut self, source: impl Into<Arc<[T]>>) {
        let source = source.into();
        self.search_view.set_source(source.clone());
        self.selection_view.set_source(source);
        tracing::debug!(
            target: targets::STATE,
            source_count = self.search_view.source().len(),
            result_count = self.search_view.len(),
            "source reset"
        );

        self.result_set_changed.emit(self.search_view.to_vec());
    }
}

/// Builder for [`SearchSelect`].
///
/// The source and all three accessors are required.
pub struct SearchSelectBuilder<T, Id> {
    source: Option<Arc<[T]>>,
    id_of: Option<IdAccessor<T, Id>>,
    name_of: Option<TextAccessor<T>>,
    image_of: Option<TextAccessor<T>>,
    show_all_default: bool,
    duplicate_policy: DuplicatePolicy,
}

impl<T, Id> Default for SearchSelectBuilder<T, Id> {
    fn default() -> Self {
        Self {
            source: None,
            id_of: None,
            name_of: None,
            image_of: None,
            show_all_default: false,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl<T, Id> SearchSelectBuilder<T, Id>
where
    T: Clone + Send + Sync + 'static,
    Id: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backing collection.
    pub fn source(mut self, source: impl Into<Arc<[T]>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets all three accessors at once.
    pub fn accessors(mut self, accessors: Accessors<T, Id>) -> Self {
        self.id_of = Some(accessors.id_accessor());
        self.name_of = Some(accessors.name_accessor());
        self.image_of = Some(accessors.image_accessor());
        self
    }

    /// Sets the identifier accessor.
    pub fn id_of<F>(mut self, id_of: F) -> Self
    where
        F: Fn(&T) -> Option<Id> + Send + Sync + 'static,
    {
        self.id_of = Some(Arc::new(id_of));
        self
    }

    /// Sets the display-text accessor.
    pub fn name_of<F>(mut self, name_of: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.name_of = Some(Arc::new(name_of));
        self
    }

    /// Sets the image accessor.
    pub fn image_of<F>(mut self, image_of: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.image_of = Some(Arc::new(image_of));
        self
    }

    /// Sets whether an empty query matches every item. Defaults to `false`.
    pub fn show_all_default(mut self, show_all: bool) -> Self {
        self.show_all_default = show_all;
        self
    }

    /// Sets the duplicate policy. Defaults to [`DuplicatePolicy::Unique`].
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Builds the widget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] or [`Error::MissingAccessor`] if a
    /// required part was not supplied.
    pub fn build(self) -> Result<SearchSelect<T, Id>> {
        let source = self.source.ok_or(Error::MissingSource)?;
        let id_of = self
            .id_of
            .ok_or_else(|| Error::missing_accessor(FieldRole::Id))?;
        let name_of = self
            .name_of
            .ok_or_else(|| Error::missing_accessor(FieldRole::Name))?;
        let image_of = self
            .image_of
            .ok_or_else(|| Error::missing_accessor(FieldRole::Image))?;

        Ok(SearchSelect::from_parts(
            source,
            Accessors::from_shared(id_of, name_of, image_of),
            self.show_all_default,
            self.duplicate_policy,
        ))
    }
}

impl SearchSelectBuilder<Record, RecordId> {
    /// Creates a builder for records addressed by configured field names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFieldName`] if a field name is blank.
    pub fn from_config(config: &SearchSelectConfig) -> Result<Self> {
        Ok(Self::new()
            .accessors(Accessors::from_config(config)?)
            .show_all_default(config.show_all_default)
            .duplicate_policy(config.duplicate_policy))
    }
}
