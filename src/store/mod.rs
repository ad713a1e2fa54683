// ABOUTME: Saved-recipe store with dedup by id, search, and durable snapshots
// ABOUTME: Pluggable byte backends (in-memory, file) behind a small synchronous trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! # Saved Recipe Store
//!
//! The store keeps one ordered collection per scope key and writes the whole
//! collection as a JSON array on every mutation. Memory only changes after
//! the backend accepted the new snapshot, so a failed `save`/`delete` leaves
//! the last-known-good view in place.
//!
//! The snapshot is loaded lazily on first access. A backend that cannot be
//! read, or a snapshot that does not decode, degrades to an empty collection;
//! the cause stays available through [`SavedRecipeStore::load_error`].
//!
//! Mutations never write over a snapshot the store could not read. When the
//! last load failed on the medium itself, `save`/`delete`/`clear` read again
//! first and return the read error if it persists. Only a snapshot that was
//! read but did not decode may be replaced.

/// File-backed storage
pub mod file;
/// In-memory storage
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::config::StoreConfig;
use crate::errors::StorageError;
use crate::logging::AppLogger;
use crate::models::Recipe;
use std::cell::OnceCell;
use tracing::{debug, warn};

/// Byte storage addressed by scope key
pub trait StorageBackend {
    /// Read the snapshot stored under `key`, `None` if nothing was written yet
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the snapshot stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot was not durably written
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Why a save did not add anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A recipe with the same id is already saved
    AlreadySaved,
    /// The recipe has no stable id to dedup on
    MissingId,
}

/// Result of [`SavedRecipeStore::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Whether the recipe was appended and persisted
    pub saved: bool,
    /// Set when `saved` is false
    pub skipped: Option<SkipReason>,
}

impl SaveOutcome {
    const fn saved() -> Self {
        Self {
            saved: true,
            skipped: None,
        }
    }

    const fn skipped(reason: SkipReason) -> Self {
        Self {
            saved: false,
            skipped: Some(reason),
        }
    }
}

/// Result of [`SavedRecipeStore::delete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Whether a recipe with the id was present and removed
    pub deleted: bool,
}

#[derive(Debug)]
struct Snapshot {
    recipes: Vec<Recipe>,
    load_error: Option<StorageError>,
}

/// Ordered, id-deduplicated collection of saved recipes
#[derive(Debug)]
pub struct SavedRecipeStore<B: StorageBackend> {
    backend: B,
    key: String,
    snapshot: OnceCell<Snapshot>,
}

impl SavedRecipeStore<FileBackend> {
    /// Open the file-backed store described by `config`
    #[must_use]
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(FileBackend::new(&config.directory), config.key.clone())
    }
}

impl<B: StorageBackend> SavedRecipeStore<B> {
    /// Create a store over `backend` scoped to `key`
    #[must_use]
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            snapshot: OnceCell::new(),
        }
    }

    /// Scope key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backend
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the store and return its backend
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Why the initial load degraded to an empty collection, if it did
    #[must_use]
    pub fn load_error(&self) -> Option<&StorageError> {
        self.snapshot().load_error.as_ref()
    }

    /// All saved recipes in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes().to_vec()
    }

    /// Number of saved recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes().len()
    }

    /// Whether nothing is saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes().is_empty()
    }

    /// Whether a recipe with `id` is saved
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Saved recipe with `id`, without touching the network
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<Recipe> {
        self.position(id).map(|index| self.recipes()[index].clone())
    }

    /// Recipes whose name contains `term`, ignoring case, in stored order
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Recipe> {
        let needle = term.to_lowercase();
        self.recipes()
            .iter()
            .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Append `recipe` unless one with the same id is already saved
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be read or the new
    /// snapshot could not be persisted; nothing is written or changed in
    /// memory in either case.
    pub fn save(&mut self, recipe: Recipe) -> Result<SaveOutcome, StorageError> {
        self.reload_if_unreadable()?;
        let Some(id) = recipe.stable_id() else {
            debug!(name = %recipe.name, "Recipe has no id; not saving");
            return Ok(SaveOutcome::skipped(SkipReason::MissingId));
        };
        if self.contains(id) {
            debug!(recipe_id = %id, "Recipe already saved");
            return Ok(SaveOutcome::skipped(SkipReason::AlreadySaved));
        }

        let mut next = self.list();
        next.push(recipe);
        self.commit("save", next)?;
        Ok(SaveOutcome::saved())
    }

    /// Remove the recipe with `id`, if present
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be read or the new
    /// snapshot could not be persisted; the in-memory collection is
    /// unchanged in that case.
    pub fn delete(&mut self, id: &str) -> Result<DeleteOutcome, StorageError> {
        self.reload_if_unreadable()?;
        let Some(index) = self.position(id) else {
            return Ok(DeleteOutcome { deleted: false });
        };

        let mut next = self.list();
        next.remove(index);
        self.commit("delete", next)?;
        Ok(DeleteOutcome { deleted: true })
    }

    /// Remove every saved recipe, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be read or the empty
    /// snapshot could not be persisted
    pub fn clear(&mut self) -> Result<usize, StorageError> {
        self.reload_if_unreadable()?;
        let removed = self.len();
        self.commit("clear", Vec::new())?;
        Ok(removed)
    }

    fn recipes(&self) -> &[Recipe] {
        &self.snapshot().recipes
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.recipes()
            .iter()
            .position(|recipe| recipe.stable_id() == Some(id))
    }

    fn snapshot(&self) -> &Snapshot {
        self.snapshot.get_or_init(|| self.load())
    }

    /// Re-read when the last load failed on the medium; errors if it still does
    fn reload_if_unreadable(&mut self) -> Result<(), StorageError> {
        if !self.snapshot().load_error.as_ref().is_some_and(is_unreadable) {
            return Ok(());
        }

        let mut reloaded = self.load();
        match reloaded.load_error.take() {
            Some(e) if is_unreadable(&e) => {
                warn!(key = %self.key, error = %e, "Refusing to write over unread saved recipes");
                Err(e)
            }
            load_error => {
                reloaded.load_error = load_error;
                self.snapshot = OnceCell::from(reloaded);
                Ok(())
            }
        }
    }

    fn load(&self) -> Snapshot {
        let decoded = self.backend.read(&self.key).and_then(|bytes| {
            bytes.map_or_else(
                || Ok(Vec::new()),
                |bytes| {
                    serde_json::from_slice::<Vec<Recipe>>(&bytes).map_err(|source| {
                        StorageError::Corrupted {
                            key: self.key.clone(),
                            source,
                        }
                    })
                },
            )
        });

        match decoded {
            Ok(recipes) => {
                debug!(key = %self.key, count = recipes.len(), "Loaded saved recipes");
                Snapshot {
                    recipes,
                    load_error: None,
                }
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved recipes unavailable; starting empty");
                Snapshot {
                    recipes: Vec::new(),
                    load_error: Some(e),
                }
            }
        }
    }

    fn commit(&mut self, operation: &str, next: Vec<Recipe>) -> Result<(), StorageError> {
        let result = serde_json::to_vec(&next)
            .map_err(|source| StorageError::Serialization {
                key: self.key.clone(),
                source,
            })
            .and_then(|bytes| self.backend.write(&self.key, &bytes));

        AppLogger::log_store_operation(operation, &self.key, result.is_ok(), next.len());
        result?;

        self.snapshot = OnceCell::from(Snapshot {
            recipes: next,
            load_error: None,
        });
        Ok(())
    }
}

/// Read failures on the medium, as opposed to a snapshot that did not decode
const fn is_unreadable(error: &StorageError) -> bool {
    matches!(
        error,
        StorageError::Unavailable { .. } | StorageError::Io { .. }
    )
}
