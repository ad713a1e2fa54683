// ABOUTME: Unified error handling with standard error codes and domain errors
// ABOUTME: AppError umbrella plus recipe, storage, and nutrition error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! # Unified Error Handling System
//!
//! Domain operations return their own typed errors (`RecipeError`,
//! `StorageError`, `NutritionError`) so callers can match on the failure kind.
//! `AppError` is the umbrella used by configuration and logging setup, and
//! every domain error converts into it with a stable `ErrorCode`.

/// Nutrition decoding errors
pub mod nutrition;
/// Recipe resolution errors and upstream failure classification
pub mod recipe;
/// Saved-recipe storage errors
pub mod storage;

pub use nutrition::NutritionError;
pub use recipe::{RecipeError, UpstreamFailure};
pub use storage::StorageError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Data could not be parsed into the expected shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// External service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// External service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Local storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether a user can recover by retrying or changing input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalError)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// External service failure
    #[must_use]
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// Missing configuration value
    #[must_use]
    pub fn config_missing(key: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("Missing configuration: {key}"),
        )
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config_invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid configuration for {key}: {}", reason.into()),
        )
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<RecipeError> for AppError {
    fn from(error: RecipeError) -> Self {
        let code = match &error {
            RecipeError::EmptyQuery => ErrorCode::InvalidInput,
            RecipeError::RecipeNotFound { .. } => ErrorCode::ResourceNotFound,
            RecipeError::RecipeLookupFailed(UpstreamFailure::Structured { .. })
            | RecipeError::ImageAnalysisFailed(UpstreamFailure::Structured { .. }) => {
                ErrorCode::ExternalServiceError
            }
            RecipeError::RecipeLookupFailed(UpstreamFailure::Transport { .. })
            | RecipeError::ImageAnalysisFailed(UpstreamFailure::Transport { .. }) => {
                ErrorCode::ExternalServiceUnavailable
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        let code = match &error {
            StorageError::Serialization { .. } => ErrorCode::SerializationError,
            StorageError::Unavailable { .. }
            | StorageError::Io { .. }
            | StorageError::Corrupted { .. } => ErrorCode::StorageError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
