// ABOUTME: Main library entry point for the Recipe Lens client
// ABOUTME: Recipe lookup by dish name or food photo, nutrition decoding, and a saved-recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

#![deny(unsafe_code)]

//! # Recipe Lens
//!
//! Client-side core of a recipe lookup application. A user asks for a dish by
//! name or by photo; the [`resolver`] sends the query to an external recipe
//! service and normalizes what comes back. Recipes can be kept in a local
//! [`store`] and searched offline.
//!
//! ## Architecture
//!
//! - **Text**: deterministic casing and punctuation stripping
//! - **Nutrition**: decoding the service's serialized nutrition list
//! - **External**: HTTP boundary to the recipe service and image search
//! - **Resolver**: query validation, failure mapping, normalization
//! - **Store**: ordered, id-deduplicated saved recipes over a pluggable backend
//! - **Config**: environment-driven settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_lens::config::RecipeLensConfig;
//! use recipe_lens::external::HttpRecipeService;
//! use recipe_lens::resolver::RecipeResolver;
//! use recipe_lens::store::SavedRecipeStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RecipeLensConfig::from_env()?;
//!     let resolver = RecipeResolver::new(HttpRecipeService::new(config.recipe_service.clone()));
//!
//!     let recipe = resolver.resolve_by_name("chicken tikka masala", Some(4)).await?;
//!
//!     let mut store = SavedRecipeStore::open(&config.store);
//!     store.save(recipe)?;
//!     println!("{} saved recipes", store.len());
//!     Ok(())
//! }
//! ```

/// Error types and handling (re-exported from recipe-lens-core)
pub mod errors;

/// Application constants (re-exported from recipe-lens-core)
pub mod constants;

/// Domain models (re-exported from recipe-lens-core)
pub mod models;

/// Text normalization
pub mod text;

/// Nutrition sequence decoding
pub mod nutrition;

/// External service clients
pub mod external;

/// Recipe resolution
pub mod resolver;

/// Saved-recipe store
pub mod store;

/// Configuration management
pub mod config;

/// Logging configuration
pub mod logging;

/// Shared utilities
pub mod utils;
