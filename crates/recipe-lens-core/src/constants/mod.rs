// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, configuration defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than collected in a single list.

/// Upstream recipe service endpoints (relative to the configured base URL)
pub mod endpoints {
    /// Name-based recipe lookup
    pub const PARSE_RECIPE: &str = "/parse-recipe";
    /// Image classification plus optional recipe
    pub const ANALYZE_IMAGE: &str = "/analyze-image";
    /// Recipe lookup by stable identifier
    pub const RECIPE_BY_ID: &str = "/get-recipe-by-id";
    /// Multipart field name carrying the uploaded image
    pub const IMAGE_FIELD: &str = "image";
    /// File name sent with the uploaded image part
    pub const IMAGE_FILE_NAME: &str = "upload.jpg";
}

/// Default configuration values
pub mod defaults {
    /// Default upstream recipe service
    pub const RECIPE_SERVICE_URL: &str = "http://localhost:5000";
    /// Request timeout for the recipe service; image analysis is slow
    pub const RECIPE_SERVICE_TIMEOUT_SECS: u64 = 60;
    /// Connect timeout for the recipe service
    pub const RECIPE_SERVICE_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default image search endpoint (Google Custom Search JSON API)
    pub const IMAGE_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
    /// Offset into the image search results used for the illustrative photo.
    ///
    /// Upstream behavior picks the seventh result rather than the first; kept
    /// configurable because the reason for the offset is unknown.
    pub const IMAGE_SEARCH_RESULT_OFFSET: usize = 6;
    /// Storage scope key for saved recipes
    pub const STORE_KEY: &str = "savedRecipes";
    /// Directory name under the platform data dir
    pub const STORE_DIR_NAME: &str = "recipe-lens";
    /// Fallback store directory when no platform data dir exists
    pub const FALLBACK_STORE_DIR: &str = ".recipe-lens";
    /// Number of values in a serialized nutrition sequence
    pub const NUTRITION_FIELD_COUNT: usize = 7;
}

/// Environment variable names
pub mod env_vars {
    /// Base URL of the recipe service
    pub const RECIPE_SERVICE_URL: &str = "RECIPE_SERVICE_URL";
    /// Request timeout for the recipe service, in seconds
    pub const RECIPE_SERVICE_TIMEOUT_SECS: &str = "RECIPE_SERVICE_TIMEOUT_SECS";
    /// Connect timeout for the recipe service, in seconds
    pub const RECIPE_SERVICE_CONNECT_TIMEOUT_SECS: &str = "RECIPE_SERVICE_CONNECT_TIMEOUT_SECS";
    /// Image search endpoint
    pub const IMAGE_SEARCH_URL: &str = "IMAGE_SEARCH_URL";
    /// Image search API key
    pub const IMAGE_SEARCH_API_KEY: &str = "IMAGE_SEARCH_API_KEY";
    /// Image search engine id (`cx`)
    pub const IMAGE_SEARCH_CX: &str = "IMAGE_SEARCH_CX";
    /// Result offset used for the illustrative photo
    pub const IMAGE_SEARCH_RESULT_OFFSET: &str = "IMAGE_SEARCH_RESULT_OFFSET";
    /// Directory holding saved recipe snapshots
    pub const RECIPE_STORE_DIR: &str = "RECIPE_STORE_DIR";
    /// Storage scope key for saved recipes
    pub const RECIPE_STORE_KEY: &str = "RECIPE_STORE_KEY";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in logs
    pub const RECIPE_LENS: &str = "recipe-lens";
}
