// ABOUTME: Configuration management module for client settings
// ABOUTME: Environment-driven settings for the recipe service, image search, store, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! Configuration module for Recipe Lens
//!
//! - **Environment**: every setting is read from environment variables

/// Environment configuration
pub mod environment;

pub use environment::{ImageSearchConfig, RecipeLensConfig, RecipeServiceConfig, StoreConfig};
