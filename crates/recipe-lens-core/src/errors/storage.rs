// ABOUTME: Storage error types for the saved-recipe store and its backends
// ABOUTME: Separates unavailable media, I/O failures, corrupted snapshots, and encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use std::path::PathBuf;

/// Errors raised while reading or writing saved-recipe snapshots
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing medium cannot be used at all
    #[error("Storage backend unavailable: {reason}")]
    Unavailable {
        /// Why the medium is unavailable
        reason: String,
    },

    /// Filesystem operation failed
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Stored snapshot could not be decoded
    #[error("Stored collection '{key}' is corrupted")]
    Corrupted {
        /// Storage scope key
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// In-memory collection could not be encoded
    #[error("Failed to serialize collection '{key}'")]
    Serialization {
        /// Storage scope key
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Create an unavailable-medium error
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create an I/O error for a path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
