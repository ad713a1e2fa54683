// ABOUTME: Environment configuration for the recipe service, image search, and store
// ABOUTME: Parses environment variables with defaults and typed validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! Environment-based configuration
//!
//! All settings come from environment variables; there is no config file.
//! Unset variables take the defaults in `constants::defaults`; set but
//! malformed variables are reported as `ConfigInvalid` rather than ignored.

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use url::Url;

/// Upstream recipe service connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeServiceConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for RecipeServiceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::RECIPE_SERVICE_URL.to_owned(),
            timeout_secs: defaults::RECIPE_SERVICE_TIMEOUT_SECS,
            connect_timeout_secs: defaults::RECIPE_SERVICE_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl RecipeServiceConfig {
    /// Config pointing at `base_url` with default timeouts
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `base_url` is not an absolute http(s) URL
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            base_url: validate_base_url(env_vars::RECIPE_SERVICE_URL, base_url)?,
            ..Self::default()
        })
    }

    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a malformed URL or timeout
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            base_url: validate_base_url(
                env_vars::RECIPE_SERVICE_URL,
                &env_var_or(env_vars::RECIPE_SERVICE_URL, defaults::RECIPE_SERVICE_URL),
            )?,
            timeout_secs: parse_env(
                env_vars::RECIPE_SERVICE_TIMEOUT_SECS,
                defaults::RECIPE_SERVICE_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_env(
                env_vars::RECIPE_SERVICE_CONNECT_TIMEOUT_SECS,
                defaults::RECIPE_SERVICE_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    /// Full URL for an endpoint path such as `/parse-recipe`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Illustrative image search settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchConfig {
    /// Search endpoint
    pub base_url: String,
    /// API key; search is disabled without it
    pub api_key: Option<String>,
    /// Search engine id; search is disabled without it
    pub cx: Option<String>,
    /// Result index used as the illustrative photo
    pub result_offset: usize,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::IMAGE_SEARCH_URL.to_owned(),
            api_key: None,
            cx: None,
            result_offset: defaults::IMAGE_SEARCH_RESULT_OFFSET,
        }
    }
}

impl ImageSearchConfig {
    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a malformed URL or offset
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            base_url: validate_base_url(
                env_vars::IMAGE_SEARCH_URL,
                &env_var_or(env_vars::IMAGE_SEARCH_URL, defaults::IMAGE_SEARCH_URL),
            )?,
            api_key: non_empty_env(env_vars::IMAGE_SEARCH_API_KEY),
            cx: non_empty_env(env_vars::IMAGE_SEARCH_CX),
            result_offset: parse_env(
                env_vars::IMAGE_SEARCH_RESULT_OFFSET,
                defaults::IMAGE_SEARCH_RESULT_OFFSET,
            )?,
        })
    }

    /// Whether both credentials are present
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some() && self.cx.is_some()
    }
}

/// Saved-recipe store location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one snapshot file per scope key
    pub directory: PathBuf,
    /// Scope key for saved recipes
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: default_store_dir(),
            key: defaults::STORE_KEY.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the scope key is blank
    pub fn from_env() -> AppResult<Self> {
        let directory = non_empty_env(env_vars::RECIPE_STORE_DIR)
            .map_or_else(default_store_dir, PathBuf::from);
        let key = env_var_or(env_vars::RECIPE_STORE_KEY, defaults::STORE_KEY);
        if key.trim().is_empty() {
            return Err(AppError::config_invalid(
                env_vars::RECIPE_STORE_KEY,
                "scope key cannot be blank",
            ));
        }
        Ok(Self { directory, key })
    }
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct RecipeLensConfig {
    /// Recipe service connection
    pub recipe_service: RecipeServiceConfig,
    /// Illustrative image search
    pub image_search: ImageSearchConfig,
    /// Saved-recipe store
    pub store: StoreConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl RecipeLensConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but malformed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let config = Self {
            recipe_service: RecipeServiceConfig::from_env()?,
            image_search: ImageSearchConfig::from_env()?,
            store: StoreConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        info!("{}", config.summary());
        Ok(config)
    }

    /// Human-readable summary without credentials
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Lens Configuration:\n\
             - Recipe Service: {} (timeout {}s)\n\
             - Image Search: {} (result offset {})\n\
             - Store: {} [{}]",
            self.recipe_service.base_url,
            self.recipe_service.timeout_secs,
            if self.image_search.is_enabled() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.image_search.result_offset,
            self.store.directory.display(),
            self.store.key,
        )
    }
}

fn default_store_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(defaults::FALLBACK_STORE_DIR),
        |dir| dir.join(defaults::STORE_DIR_NAME),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(key, format!("'{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

fn validate_base_url(key: &str, raw: &str) -> AppResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| AppError::config_invalid(key, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(
            key,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(trimmed.to_owned())
}
