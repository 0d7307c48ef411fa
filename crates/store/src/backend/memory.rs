// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::error::StorageError;

/// In-memory snapshot storage.
///
/// Used by tests and ephemeral sessions. Failure injection simulates an
/// unavailable or quota-exceeded storage layer so degradation paths can
/// be exercised deterministically.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    snapshot: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshot: None,
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Creates a backend preloaded with a snapshot, as if a previous
    /// session had persisted it.
    #[must_use]
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Creates a backend whose every read and write fails.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            snapshot: None,
            fail_reads: true,
            fail_writes: true,
        }
    }

    /// Returns the currently held snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable(String::from(
                "simulated read failure",
            )));
        }
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable(String::from(
                "simulated write failure",
            )));
        }
        self.snapshot = Some(snapshot.to_string());
        Ok(())
    }
}
