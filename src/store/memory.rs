// ABOUTME: In-memory storage backend for the saved-recipe store
// ABOUTME: Holds snapshots in a HashMap with switchable read and write failures for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use super::StorageBackend;
use crate::errors::StorageError;
use std::collections::HashMap;

/// Snapshot storage that lives only as long as the value
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    snapshots: HashMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key` with raw bytes
    #[must_use]
    pub fn with_snapshot(mut self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.snapshots.insert(key.to_owned(), bytes.into());
        self
    }

    /// Make every read fail as if the medium were unavailable
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every write fail as if the medium were unavailable
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw bytes currently stored under `key`
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<&[u8]> {
        self.snapshots.get(key).map(Vec::as_slice)
    }

    /// Number of successful writes
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::unavailable("memory backend read disabled"));
        }
        Ok(self.snapshots.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::unavailable("memory backend write disabled"));
        }
        self.snapshots.insert(key.to_owned(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}
