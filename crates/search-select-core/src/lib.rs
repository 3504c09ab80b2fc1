//! Core systems for Search Select.
//!
//! This crate provides the notification layer that the search-select state
//! machine uses to talk to whatever renders it:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Errors**: The error types surfaced by the notification layer
//! - **Logging**: `tracing` target names for filtering subsystem output
//!
//! # Signal/Slot Example
//!
//! ```
//! use search_select_core::Signal;
//!
//! // Create a signal that notifies when a query changes
//! let query_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = query_changed.connect(|query| {
//!     println!("Query is now: {}", query);
//! });
//!
//! // Emit the signal
//! query_changed.emit("ann".to_string());
//!
//! // Disconnect when done
//! query_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use signal::{ConnectionId, Signal};
