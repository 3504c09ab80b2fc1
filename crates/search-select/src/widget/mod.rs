//! The search-select widget state.
//!
//! - `SearchSelect`: The reactive query/selection state machine
//! - `SearchSelectBuilder`: Validated construction
//! - `InputEvent` / `Command`: Translation of render-adapter events
//!
//! Rendering is left to the caller, which connects to the widget's signals
//! and feeds user actions back through [`SearchSelect::handle`].

mod input;
mod search_select;

pub use input::{Command, InputEvent};
pub use search_select::{ItemState, SearchSelect, SearchSelectBuilder};
