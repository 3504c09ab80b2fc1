//! Data model for search-select widgets.
//!
//! This module holds everything the state machine is built from, independent
//! of rendering:
//!
//! - `Accessors`: Reads an item's identifier, name and image
//! - `matches` / `QueryMatcher`: Case-insensitive bidirectional prefix matching
//! - `DatasetView`: A filtered, order-preserving projection over a shared collection
//! - `SelectionSet`: The ordered identifiers the user has chosen
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  query   ┌──────────────┐
//! │   Backing    │─────────>│ search view  │──> result set
//! │  collection  │          └──────────────┘
//! │  (Arc<[T]>)  │  ids     ┌──────────────┐
//! │              │─────────>│selection view│──> selected members
//! └──────────────┘          └──────────────┘
//! ```

mod dataset_view;
mod item;
mod matcher;
mod selection;

pub use dataset_view::{DatasetView, FilterFn};
pub use item::{Accessors, FieldRole, IdAccessor, TextAccessor};
pub use matcher::{matches, QueryMatcher};
pub use selection::{DuplicatePolicy, SelectionSet};
