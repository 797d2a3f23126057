//! Change feed for observing applied collection changes.
//!
//! The feed emits an event for every mutation the manager applies,
//! enabling:
//! - Reactive UI updates
//! - Audit logging
//!
//! # Usage
//!
//! ```rust,ignore
//! let shelf = Shelf::open(store, ShelfConfig::new());
//! let receiver = shelf.subscribe();
//!
//! std::thread::spawn(move || {
//!     while let Ok(event) = receiver.recv() {
//!         println!("Change: {:?}", event);
//!     }
//! });
//! ```

use crate::book::{Book, BookId};
use parking_lot::RwLock;
use std::sync::mpsc::{self, Receiver, Sender};

/// A single change to the collection.
///
/// Events are emitted only after the mutation has been applied to the
/// in-memory collection (and persistence attempted), never for no-ops
/// such as removing an absent id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfEvent {
    /// A record was added.
    Added(Book),
    /// A record was removed.
    Removed(BookId),
    /// Several records were removed in one step. Carries the ids that
    /// were actually present and removed.
    RemovedMany(Vec<BookId>),
}

/// Distributes collection changes to subscribers.
///
/// The change feed:
/// - Emits only applied mutations
/// - Preserves mutation order
/// - Supports multiple subscribers
/// - Is thread-safe
pub struct ChangeFeed {
    subscribers: RwLock<Vec<Sender<ShelfEvent>>>,
}

impl ChangeFeed {
    /// Creates a new change feed with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Subscribes to the feed.
    ///
    /// Returns a receiver that will receive all future events. Events
    /// emitted before the subscription are not replayed.
    pub fn subscribe(&self) -> Receiver<ShelfEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.write().push(tx);
        rx
    }

    /// Emits an event to all subscribers.
    ///
    /// Events are cloned to each active subscriber; subscribers whose
    /// receiver has been dropped are removed.
    pub fn emit(&self, event: ShelfEvent) {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
