//! Search Select: reactive filtering and selection for search-and-select widgets.
//!
//! Given a shared collection of labeled items, a user types a query, sees a
//! live-filtered subset and toggles items into and out of a selected subset.
//! This crate implements that state machine independent of any rendering:
//!
//! - **Model**: Item accessors, prefix matching, dataset views, selection sets
//! - **Widget**: The `SearchSelect` state machine and input translation
//! - **Config**: Field-name configuration for schema-less records
//!
//! Change notifications are delivered through the signals of
//! [`search_select_core`].
//!
//! # Example
//!
//! ```
//! use search_select::prelude::*;
//! use serde_json::json;
//!
//! let config = SearchSelectConfig::new("id", "name", "image");
//! let mut widget = SearchSelectBuilder::from_config(&config)?
//!     .source(vec![
//!         json!({ "id": 1, "name": "Ann", "image": "ann.png" }),
//!         json!({ "id": 2, "name": "Anna", "image": "anna.png" }),
//!         json!({ "id": 3, "name": "Bob", "image": "bob.png" }),
//!     ])
//!     .build()?;
//!
//! widget.selection_changed.connect(|ids| println!("selected: {ids:?}"));
//!
//! widget.handle(&InputEvent::QueryEdited("an ".into()));
//! assert_eq!(widget.result_set().len(), 2);
//!
//! widget.handle(&InputEvent::AddClicked { row: 1 });
//! assert_eq!(widget.selected_ids(), &[json!(2)]);
//! # Ok::<(), search_select::Error>(())
//! ```

pub mod config;
mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use config::{Record, RecordId, SearchSelectConfig};
pub use error::{Error, Result};
pub use model::{Accessors, DatasetView, DuplicatePolicy, SelectionSet};
pub use widget::{Command, InputEvent, ItemState, SearchSelect, SearchSelectBuilder};

pub use search_select_core::{ConnectionId, Signal};
