//! Logging facilities for Search Select.
//!
//! Search Select uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("search_select=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "search_select_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "search_select_core::signal";
    /// Dataset view recomputation target.
    pub const DATASET_VIEW: &str = "search_select::dataset_view";
    /// Selection set target.
    pub const SELECTION: &str = "search_select::selection";
    /// Search-select state machine target.
    pub const STATE: &str = "search_select::state";
    /// Configuration loading target.
    pub const CONFIG: &str = "search_select::config";
}
