//! Query matching.
//!
//! Matching is a case-insensitive, bidirectional prefix test: an item matches
//! when its name is a prefix of the query or the query is a prefix of its
//! name. A partially typed query therefore matches longer names, and a short
//! name keeps matching while the user types past it.

/// Returns whether `item_name` and `query` are a prefix match of one another.
///
/// Both inputs are case-folded before comparison. An empty query yields
/// `show_all_when_empty`.
///
/// # Example
///
/// ```
/// use search_select::model::matches;
///
/// assert!(matches("Alice", "al", false));
/// assert!(matches("Al", "alice", false));
/// assert!(!matches("Bob", "al", false));
/// assert!(matches("Bob", "", true));
/// ```
pub fn matches(item_name: &str, query: &str, show_all_when_empty: bool) -> bool {
    QueryMatcher::new(query, show_all_when_empty).matches(Some(item_name))
}

/// A query folded once and tested against many names.
///
/// The search view evaluates its predicate for every item of the backing
/// collection on each query change, so the fold is hoisted out of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatcher {
    folded_query: String,
    show_all_when_empty: bool,
}

impl QueryMatcher {
    /// Creates a matcher for `query`.
    pub fn new(query: &str, show_all_when_empty: bool) -> Self {
        Self {
            folded_query: query.to_lowercase(),
            show_all_when_empty,
        }
    }

    /// Returns the case-folded query.
    pub fn folded_query(&self) -> &str {
        &self.folded_query
    }

    /// Tests a (possibly absent) item name.
    ///
    /// An absent name is never a match, even for an empty query.
    pub fn matches(&self, item_name: Option<&str>) -> bool {
        let Some(name) = item_name else {
            return false;
        };
        if self.folded_query.is_empty() {
            return self.show_all_when_empty;
        }

        let name = name.to_lowercase();
        name.starts_with(&self.folded_query) || self.folded_query.starts_with(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_query_prefixes_name() {
        assert!(matches("Alice", "Al", false));
        assert!(matches("Anna", "an", false));
    }

    #[test]
    fn test_name_prefixes_query() {
        assert!(matches("Al", "Alice", false));
        assert!(matches("Ann", "annabel", false));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches("ALICE", "alice", false));
        assert!(matches("alice", "ALI", false));
    }

    #[test]
    fn test_no_common_prefix() {
        assert!(!matches("Bob", "an", false));
        assert!(!matches("Anna", "ab", true));
    }

    #[test]
    fn test_empty_query_follows_show_all() {
        assert!(!matches("Ann", "", false));
        assert!(matches("Ann", "", true));
    }

    #[test]
    fn test_empty_name_prefixes_every_query() {
        assert!(matches("", "x", false));
    }

    #[test]
    fn test_absent_name_never_matches() {
        assert!(!QueryMatcher::new("an", false).matches(None));
        assert!(!QueryMatcher::new("", true).matches(None));
    }

    #[test]
    fn test_folded_query() {
        assert_eq!(QueryMatcher::new("AnN", false).folded_query(), "ann");
    }

    proptest! {
        #[test]
        fn prop_prefix_symmetry(name in "[a-zA-Z]{1,12}", split in 0usize..12) {
            let cut = split.min(name.len());
            let prefix = &name[..cut];
            prop_assume!(!prefix.is_empty());
            prop_assert!(matches(prefix, &name, false));
            prop_assert!(matches(&name, prefix, false));
        }

        #[test]
        fn prop_symmetric_for_non_empty(a in "[a-zA-Z]{1,8}", b in "[a-zA-Z]{1,8}") {
            prop_assert_eq!(matches(&a, &b, false), matches(&b, &a, false));
        }

        #[test]
        fn prop_empty_query(name in "\\PC{0,16}") {
            prop_assert!(!matches(&name, "", false));
            prop_assert!(matches(&name, "", true));
        }
    }
}
