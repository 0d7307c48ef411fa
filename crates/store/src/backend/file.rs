// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file name for the persisted snapshot, matching the storage
/// key the original application used.
pub const SNAPSHOT_FILE_NAME: &str = "appState.json";

/// Snapshot storage in a single file on disk.
///
/// The file plays the role of the browser's durable local storage: one
/// fixed location, overwritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend storing the snapshot at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a backend storing the snapshot under the default file
    /// name inside the given directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SNAPSHOT_FILE_NAME),
        }
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            // A missing file is an empty store, not a failure.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::ReadFailed(err.to_string())),
        }
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        fs::write(&self.path, snapshot).map_err(|err| StorageError::WriteFailed(err.to_string()))
    }
}
