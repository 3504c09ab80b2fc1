//! Filtered views over a backing collection.
//!
//! `DatasetView` wraps a shared, read-only collection and exposes the
//! subsequence of it accepted by a predicate, in collection order.

use std::fmt;
use std::sync::Arc;

use search_select_core::logging::targets;

/// Type alias for a filter predicate.
///
/// Returns `true` if the item should be a member of the view.
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal row mapping from view positions to source rows.
struct RowMapping {
    /// Mapping from view position to source row index.
    view_to_source: Vec<usize>,
    /// Mapping from source row index to view position (None if filtered out).
    source_to_view: Vec<Option<usize>>,
}

impl RowMapping {
    fn new() -> Self {
        Self {
            view_to_source: Vec::new(),
            source_to_view: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.view_to_source.clear();
        self.source_to_view.clear();
    }

    fn map_to_source(&self, position: usize) -> Option<usize> {
        self.view_to_source.get(position).copied()
    }

    fn map_from_source(&self, source_row: usize) -> Option<usize> {
        self.source_to_view.get(source_row).and_then(|&x| x)
    }
}

/// A live, filterable projection over an immutable backing collection.
///
/// The member sequence is recomputed in full whenever the predicate or the
/// source changes; it always equals `source.filter(predicate)` with the
/// source order preserved and is never partially updated.
///
/// A freshly created view matches nothing until a predicate is installed.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use search_select::model::DatasetView;
///
/// let source: Arc<[u32]> = Arc::from(vec![5, 12, 7, 30]);
/// let mut view = DatasetView::new(source).with_filter(|n: &u32| *n > 6);
///
/// assert_eq!(view.members().copied().collect::<Vec<_>>(), vec![12, 7, 30]);
///
/// view.reconfigure(|n: &u32| n % 2 == 0);
/// assert_eq!(view.members().copied().collect::<Vec<_>>(), vec![12, 30]);
/// ```
pub struct DatasetView<T> {
    source: Arc<[T]>,
    filter: FilterFn<T>,
    mapping: RowMapping,
}

impl<T> fmt::Debug for DatasetView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetView")
            .field("source_len", &self.source.len())
            .field("rows", &self.mapping.view_to_source)
            .finish()
    }
}

impl<T: 'static> DatasetView<T> {
    /// Creates a view over `source` that matches no items.
    pub fn new(source: Arc<[T]>) -> Self {
        let mut view = Self {
            source,
            filter: Arc::new(|_: &T| false),
            mapping: RowMapping::new(),
        };
        view.rebuild_mapping();
        view
    }

    /// Installs a predicate, consuming and returning the view.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.reconfigure(filter);
        self
    }

    /// Replaces the predicate and recomputes the members.
    pub fn reconfigure<F>(&mut self, filter: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.reconfigure_shared(Arc::new(filter));
    }

    /// Replaces the predicate with an already shared one and recomputes.
    pub fn reconfigure_shared(&mut self, filter: FilterFn<T>) {
        self.filter = filter;
        self.rebuild_mapping();
    }

    /// Re-applies the current predicate to the source.
    pub fn invalidate(&mut self) {
        self.rebuild_mapping();
    }

    /// Points the view at a different collection and recomputes.
    pub fn set_source(&mut self, source: Arc<[T]>) {
        self.source = source;
        self.rebuild_mapping();
    }

    /// Returns the backing collection.
    pub fn source(&self) -> &Arc<[T]> {
        &self.source
    }

    /// Iterates over the members in source order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.mapping
            .view_to_source
            .iter()
            .map(|&row| &self.source[row])
    }

    /// Returns the source row indices of the members.
    pub fn rows(&self) -> &[usize] {
        &self.mapping.view_to_source
    }

    /// Returns the member at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.mapping
            .map_to_source(position)
            .and_then(|row| self.source.get(row))
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.mapping.view_to_source.len()
    }

    /// Returns `true` if no item passes the predicate.
    pub fn is_empty(&self) -> bool {
        self.mapping.view_to_source.is_empty()
    }

    /// Returns `true` if the source row is a member.
    pub fn contains_row(&self, source_row: usize) -> bool {
        self.mapping.map_from_source(source_row).is_some()
    }

    /// Maps a view position to a source row.
    pub fn map_to_source(&self, position: usize) -> Option<usize> {
        self.mapping.map_to_source(position)
    }

    /// Maps a source row to a view position (`None` if filtered out).
    pub fn map_from_source(&self, source_row: usize) -> Option<usize> {
        self.mapping.map_from_source(source_row)
    }

    /// Rebuilds the row mapping from the predicate.
    fn rebuild_mapping(&mut self) {
        let source_count = self.source.len();
        let mapping = &mut self.mapping;
        mapping.clear();
        mapping.source_to_view.resize(source_count, None);

        for (row, item) in self.source.iter().enumerate() {
            if (self.filter)(item) {
                mapping.source_to_view[row] = Some(mapping.view_to_source.len());
                mapping.view_to_source.push(row);
            }
        }

        tracing::trace!(
            target: targets::DATASET_VIEW,
            source_count,
            member_count = mapping.view_to_source.len(),
            "rebuilt dataset view"
        );
    }
}

impl<T: Clone + 'static> DatasetView<T> {
    /// Returns an owned snapshot of the members.
    pub fn to_vec(&self) -> Vec<T> {
        self.members().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    fn create_test_source() -> Arc<[Person]> {
        Arc::from(vec![
            Person {
                name: "Charlie",
                age: 35,
            },
            Person {
                name: "Alice",
                age: 30,
            },
            Person {
                name: "Bob",
                age: 25,
            },
            Person {
                name: "David",
                age: 20,
            },
        ])
    }

    fn names(view: &DatasetView<Person>) -> Vec<&'static str> {
        view.members().map(|p| p.name).collect()
    }

    #[test]
    fn test_new_view_matches_nothing() {
        let view = DatasetView::new(create_test_source());
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.get(0), None);
    }

    #[test]
    fn test_view_with_filter_preserves_source_order() {
        let view = DatasetView::new(create_test_source()).with_filter(|p: &Person| p.age >= 30);

        assert_eq!(names(&view), vec!["Charlie", "Alice"]);
        assert_eq!(view.rows(), &[0, 1]);
    }

    #[test]
    fn test_reconfigure_replaces_members() {
        let mut view = DatasetView::new(create_test_source());

        view.reconfigure(|p: &Person| p.age >= 30);
        assert_eq!(view.len(), 2);

        view.reconfigure(|p: &Person| p.age >= 25);
        assert_eq!(names(&view), vec!["Charlie", "Alice", "Bob"]);

        view.reconfigure(|_: &Person| true);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_map_to_and_from_source() {
        let view = DatasetView::new(create_test_source()).with_filter(|p: &Person| p.age < 30);

        // Bob is source row 2, view position 0
        assert_eq!(view.map_to_source(0), Some(2));
        assert_eq!(view.map_from_source(2), Some(0));
        assert_eq!(view.map_from_source(3), Some(1));

        // Alice is filtered out
        assert_eq!(view.map_from_source(1), None);
        assert!(!view.contains_row(1));
        assert!(view.contains_row(3));

        // Out of range
        assert_eq!(view.map_to_source(5), None);
        assert_eq!(view.map_from_source(10), None);
    }

    #[test]
    fn test_get_returns_member() {
        let view = DatasetView::new(create_test_source()).with_filter(|p: &Person| p.age < 30);
        assert_eq!(view.get(1).map(|p| p.name), Some("David"));
    }

    #[test]
    fn test_set_source_recomputes() {
        let mut view = DatasetView::new(create_test_source()).with_filter(|p: &Person| p.age >= 30);

        view.set_source(Arc::from(vec![Person {
            name: "Eve",
            age: 41,
        }]));

        assert_eq!(names(&view), vec!["Eve"]);
        assert_eq!(view.source().len(), 1);
    }

    #[test]
    fn test_invalidate_keeps_predicate() {
        let mut view = DatasetView::new(create_test_source()).with_filter(|p: &Person| p.age == 25);
        view.invalidate();
        assert_eq!(names(&view), vec!["Bob"]);
    }

    #[test]
    fn test_to_vec_snapshot() {
        let view = DatasetView::new(create_test_source()).with_filter(|p: &Person| p.name == "Alice");
        assert_eq!(
            view.to_vec(),
            vec![Person {
                name: "Alice",
                age: 30
            }]
        );
    }

    #[test]
    fn test_empty_source() {
        let source: Arc<[Person]> = Arc::from(Vec::new());
        let view = DatasetView::new(source).with_filter(|_: &Person| true);
        assert!(view.is_empty());
    }
}
