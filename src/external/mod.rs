// ABOUTME: External service client modules (recipe service, image search)
// ABOUTME: The only code that speaks HTTP to systems outside this crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! External API Clients

/// Illustrative dish photo lookup through an image search API
pub mod image_search;
/// Recipe service boundary: HTTP client and in-process mock
pub mod recipe_service;

// Re-export commonly used types
pub use image_search::ImageSearchClient;
pub use recipe_service::{HttpRecipeService, ImageAnalysis, MockRecipeService, RecipeService};
