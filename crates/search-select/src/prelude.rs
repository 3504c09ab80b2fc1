//! Commonly used types.
//!
//! ```
//! use search_select::prelude::*;
//! ```

pub use crate::config::{Record, RecordId, SearchSelectConfig};
pub use crate::error::{Error, Result};
pub use crate::model::{matches, Accessors, DatasetView, DuplicatePolicy, SelectionSet};
pub use crate::widget::{Command, InputEvent, ItemState, SearchSelect, SearchSelectBuilder};
pub use search_select_core::{ConnectionId, Signal};
