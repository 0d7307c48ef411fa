// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur against the storage backend.
///
/// These never escape the store: every occurrence is caught at the
/// persistence boundary, logged, and the session continues in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading the persisted snapshot failed.
    ReadFailed(String),
    /// Writing the snapshot failed.
    WriteFailed(String),
    /// The backend is unavailable entirely.
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Failed to read snapshot: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Failed to write snapshot: {msg}"),
            Self::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}
