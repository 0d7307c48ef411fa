// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State store for the employee roster.
//!
//! The store owns the application state and is the only writer to it.
//! Dispatching an action runs the pure reducer, replaces the state
//! wholesale, synchronously notifies every subscriber, and then writes a
//! JSON snapshot of the new state through the configured storage
//! backend.
//!
//! ## Persistence
//!
//! Persistence is a cross-cutting concern layered over dispatch, not a
//! property of the reducer. The backend is swappable via the
//! [`StorageBackend`] trait:
//!
//! - [`FileBackend`] — a JSON snapshot file, the durable-local-storage
//!   analog used by the application shell
//! - [`MemoryBackend`] — in-memory storage for tests and ephemeral
//!   sessions, with failure injection
//!
//! A missing, corrupt, or unavailable backend never fails construction
//! or dispatch: the store logs the problem and continues with in-memory
//! state only. Worst case, the user re-enters data after a restart.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

pub mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use backend::StorageBackend;
pub use backend::file::{FileBackend, SNAPSHOT_FILE_NAME};
pub use backend::memory::MemoryBackend;
pub use error::StorageError;

use roster::{Action, AppState, reduce};
use tracing::{debug, warn};

/// Handle identifying a registered subscriber.
///
/// Returned by [`Store::subscribe`]; pass it to [`Store::unsubscribe`]
/// to detach the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct Subscriber {
    id: SubscriberId,
    callback: Box<dyn FnMut(&AppState)>,
}

/// The store: owns the current state, applies the reducer on dispatch,
/// notifies subscribers, and persists snapshots.
///
/// A single instance is constructed explicitly and passed by reference
/// to whatever needs it; there is no ambient global. `dispatch` takes
/// `&mut self`, so re-entrant dispatch from inside a subscriber callback
/// is unrepresentable and every subscriber observes a fully settled
/// state.
pub struct Store<B: StorageBackend> {
    state: AppState,
    backend: B,
    subscribers: Vec<Subscriber>,
    next_subscriber_id: u64,
}

impl<B: StorageBackend> Store<B> {
    /// Creates a store, initializing state from the backend.
    ///
    /// A present, parseable snapshot becomes the initial state. A
    /// missing snapshot, a corrupt snapshot, or a backend read failure
    /// falls back to the default state; failures are logged, never
    /// returned.
    #[must_use]
    pub fn new(backend: B) -> Self {
        let state: AppState = load_initial_state(&backend);
        Self {
            state,
            backend,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Returns the current state. Subsequent reads after a dispatch
    /// always observe the latest state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the storage backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Dispatches an action.
    ///
    /// Runs the reducer, replaces the state, notifies every subscriber
    /// exactly once (synchronously, in subscription order), then writes
    /// the new snapshot through the backend. Persistence failures are
    /// logged and swallowed; dispatch itself cannot fail.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = ?action, "Dispatching action");
        self.state = reduce(&self.state, action);

        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&self.state);
        }

        self.persist();
    }

    /// Registers a subscriber callback, invoked with the new state after
    /// every dispatch. Returns a handle for [`Store::unsubscribe`].
    pub fn subscribe(&mut self, callback: impl FnMut(&AppState) + 'static) -> SubscriberId {
        let id: SubscriberId = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Detaches a subscriber. Returns `false` if the handle was already
    /// detached or never belonged to this store.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before: usize = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    /// Serializes the current state and writes it through the backend.
    fn persist(&mut self) {
        let snapshot: String = match serde_json::to_string(&self.state) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "Failed to serialize state snapshot");
                return;
            }
        };

        if let Err(err) = self.backend.save(&snapshot) {
            warn!(error = %err, "Failed to persist state snapshot, continuing in memory");
        }
    }
}

/// Reads the initial state from a backend, degrading to defaults on any
/// failure.
fn load_initial_state<B: StorageBackend>(backend: &B) -> AppState {
    match backend.load() {
        Ok(Some(snapshot)) => match serde_json::from_str(&snapshot) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "Persisted state snapshot is corrupt, using defaults");
                AppState::new()
            }
        },
        Ok(None) => AppState::new(),
        Err(err) => {
            warn!(error = %err, "Failed to read persisted state, using defaults");
            AppState::new()
        }
    }
}
