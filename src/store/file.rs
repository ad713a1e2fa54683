// ABOUTME: File storage backend writing one JSON snapshot per scope key
// ABOUTME: Atomic replace through a same-directory temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use super::StorageBackend;
use crate::errors::StorageError;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores each scope as `<directory>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    directory: PathBuf,
}

impl FileBackend {
    /// Backend rooted at `directory`; created on first write
    #[must_use]
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Root directory
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Snapshot path for `key`
    ///
    /// ASCII letters, digits and `-` are kept; every other byte, `_` included,
    /// becomes `_XX` in uppercase hex, so distinct keys never share a file.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file_stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_stem.push(char::from(byte));
            } else {
                let _ = write!(file_stem, "_{byte:02X}");
            }
        }
        self.directory.join(format!("{file_stem}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.directory)
            .map_err(|e| StorageError::io(&self.directory, e))?;

        let mut temp_file = NamedTempFile::new_in(&self.directory)
            .map_err(|e| StorageError::io(&self.directory, e))?;
        temp_file
            .write_all(bytes)
            .and_then(|()| temp_file.as_file().sync_all())
            .map_err(|e| StorageError::io(temp_file.path(), e))?;
        temp_file
            .persist(&path)
            .map_err(|e| StorageError::io(&path, e.error))?;
        Ok(())
    }
}
