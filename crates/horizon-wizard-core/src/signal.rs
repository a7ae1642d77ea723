//! Change notifications for wizard observers.
//!
//! The controller announces screen changes, republished navigation state and
//! the end of the session through [`Signal`]s. Observers connect closures
//! and get a [`ConnectionId`] back to disconnect them later. Every slot runs
//! directly on the emitting thread, which for a wizard is always its UI
//! thread.
//!
//! ```
//! use horizon_wizard_core::Signal;
//!
//! let screen_changed = Signal::<String>::new();
//!
//! let id = screen_changed.connect(|screen| println!("now showing {screen}"));
//!
//! screen_changed.emit("welcome".to_string());
//! screen_changed.emit("summary".to_string());
//!
//! assert!(screen_changed.disconnect(id));
//! assert_eq!(screen_changed.connection_count(), 0);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle of one connected slot, valid until it is disconnected.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Connection<Args> {
    /// Connection order; slot keys are reused and cannot order slots.
    seq: u64,
    slot: Slot<Args>,
}

struct Connections<Args> {
    slots: SlotMap<ConnectionId, Connection<Args>>,
    next_seq: u64,
}

/// A list of slots invoked in connection order on every emission.
///
/// `Signal` is `Send + Sync`; slots may be connected from any thread and may
/// connect or disconnect slots of the same signal while it is emitting.
pub struct Signal<Args> {
    connections: Mutex<Connections<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a signal with no slots.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections {
                slots: SlotMap::with_key(),
                next_seq: 0,
            }),
        }
    }

    /// Connect a slot.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        let seq = connections.next_seq;
        connections.next_seq += 1;
        connections.slots.insert(Connection {
            seq,
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a slot. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().slots.remove(id).is_some()
    }

    /// Disconnect every slot.
    pub fn disconnect_all(&self) {
        self.connections.lock().slots.clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
    }

    /// Invoke every slot with `args`.
    #[tracing::instrument(skip_all, target = "horizon_wizard_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Collect under the lock, call outside it.
        let mut slots: Vec<(u64, Slot<Args>)> = self
            .connections
            .lock()
            .slots
            .values()
            .map(|c| (c.seq, c.slot.clone()))
            .collect();
        slots.sort_unstable_by_key(|(seq, _)| *seq);
        tracing::trace!(target: "horizon_wizard_core::signal", slots = slots.len(), "emitting");

        for (_, slot) in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().slots.len())
            .finish()
    }
}
