//! Signal/slot system for Search Select.
//!
//! This module provides a type-safe, synchronous signal/slot mechanism. The
//! search-select state machine owns one signal per notification kind and emits
//! it once its derived views are consistent; a render adapter connects slots
//! to decide what to redraw.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Delivery
//!
//! Every slot runs on the emitting thread before [`Signal::emit`] returns, in
//! the order the slots were connected. There is no queued delivery: the state
//! machine is meant for a single logical thread such as a UI event loop.
//!
//! The connection table is snapshotted before any slot runs, so a slot may
//! connect or disconnect slots on the same signal. Such changes take effect
//! from the next emission. Slots only receive the emitted arguments; they
//! hold no reference back to whatever owns the signal.
//!
//! # Example
//!
//! ```
//! use search_select_core::Signal;
//!
//! // Create a signal that passes the selected identifiers
//! let selection_changed = Signal::<Vec<u32>>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = selection_changed.connect(|ids| {
//!     println!("{} item(s) selected", ids.len());
//! });
//!
//! // Emit the signal
//! selection_changed.emit(vec![1, 3]);
//!
//! // Disconnect when done
//! selection_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::SignalError;
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A connected slot and the position it was connected at.
///
/// Slot map keys are reused after a disconnect, so iteration order of the map
/// says nothing about connection order.
struct Connection<Args> {
    slot: Slot<Args>,
    order: u64,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a reference
/// to the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, usize)` for multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Order stamp handed to the next connection.
    next_order: AtomicU64,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

static_assertions::assert_impl_all!(Signal<Vec<String>>: Send, Sync);

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            next_order: AtomicU64::new(0),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use search_select_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let order = self.next_order.fetch_add(1, Ordering::Relaxed);
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
            order,
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect a specific slot, reporting a stale ID as an error.
    pub fn try_disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        if self.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. Otherwise every slot is
    /// called with `&args` before this method returns.
    #[tracing::instrument(skip_all, target = "search_select_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Release the lock before running slots so they can touch this signal.
        let mut slots: Vec<(u64, Slot<Args>)> = self
            .connections
            .lock()
            .values()
            .map(|connection| (connection.order, connection.slot.clone()))
            .collect();
        slots.sort_unstable_by_key(|(order, _)| *order);
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for (_, slot) in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        let values = received.lock();
        assert_eq!(*values, vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        signal.emit(2);

        let values = received.lock();
        assert_eq!(*values, vec![1]); // Only received before disconnect
    }

    #[test]
    fn test_try_disconnect_stale_id() {
        let signal = Signal::<()>::new();
        let conn_id = signal.connect(|_| {});

        assert_eq!(signal.try_disconnect(conn_id), Ok(()));
        assert_eq!(
            signal.try_disconnect(conn_id),
            Err(SignalError::InvalidConnection)
        );
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2); // Should be ignored
        signal.set_blocked(false);
        signal.emit(3);

        let values = received.lock();
        assert_eq!(*values, vec![1, 3]);
    }

    #[test]
    fn test_multiple_connections() {
        let signal = Signal::<String>::new();
        let count = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                *count_clone.lock() += 1;
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit("test".to_string());
        assert_eq!(*count.lock(), 3);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order_clone = order.clone();
            signal.connect(move |_| order_clone.lock().push(tag));
        }

        signal.emit(());
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_reused_key_keeps_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let connect_tagged = |tag: &'static str| {
            let order_clone = order.clone();
            signal.connect(move |_| order_clone.lock().push(tag))
        };

        let a = connect_tagged("a");
        connect_tagged("b");
        assert!(signal.disconnect(a));
        // "c" lands in the slot "a" vacated
        connect_tagged("c");

        signal.emit(());
        assert_eq!(*order.lock(), vec!["b", "c"]);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();

        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_can_connect_during_emit() {
        // A slot touching its own signal must not deadlock
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        signal.connect(move |_| {
            let calls_inner = calls_clone.clone();
            signal_clone.connect(move |_| {
                calls_inner.fetch_add(1, Ordering::SeqCst);
            });
        });

        signal.emit(());
        // The slot added during the first emission was not part of it
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(signal.connection_count(), 2);

        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_signal_with_multiple_args() {
        let signal = Signal::<(String, i32)>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        signal.connect(move |args| {
            *received_clone.lock() = Some(args.clone());
        });

        signal.emit(("hello".to_string(), 42));

        let value = received.lock().clone();
        assert_eq!(value, Some(("hello".to_string(), 42)));
    }

    #[test]
    fn test_traced_emit_delivers_only_when_unblocked() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("search_select_core=trace")
            .with_test_writer()
            .try_init();

        let signal = Signal::<u8>::new();
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        signal.connect(move |&value| received_clone.lock().push(value));

        signal.emit(7);
        signal.set_blocked(true);
        signal.emit(8);
        assert!(signal.is_blocked());
        signal.set_blocked(false);
        signal.emit(9);

        assert_eq!(*received.lock(), vec![7, 9]);
        assert_eq!(format!("{signal:?}"), "Signal { connections: 1, blocked: false }");
    }
}
