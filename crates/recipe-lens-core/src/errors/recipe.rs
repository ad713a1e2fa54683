// ABOUTME: Recipe resolution error types for name, image, and id lookups
// ABOUTME: Classifies upstream failures once at the boundary as structured or transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

/// Generic message shown when the image service failed without an error payload
pub const GENERIC_IMAGE_FAILURE: &str =
    "An unexpected error occurred while analyzing the image. Please try again.";

/// Generic message shown when a recipe lookup failed without an error payload
pub const GENERIC_LOOKUP_FAILURE: &str = "Failed to parse recipe. Please try again.";

/// How an upstream call failed, decided once where the response is read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamFailure {
    /// The service answered with an `{ "error": ... }` payload
    #[error("{message}")]
    Structured {
        /// Message from the upstream payload, verbatim
        message: String,
    },
    /// The request never produced a usable payload (connect, timeout, bad
    /// status without error body, undecodable body)
    #[error("{message}")]
    Transport {
        /// Description of the transport failure, for logs
        message: String,
    },
}

impl UpstreamFailure {
    /// Create a structured failure from an upstream error payload
    #[must_use]
    pub fn structured(message: impl Into<String>) -> Self {
        Self::Structured {
            message: message.into(),
        }
    }

    /// Create a transport failure
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// The underlying message regardless of kind
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Structured { message } | Self::Transport { message } => message,
        }
    }

    /// Whether the upstream service itself reported the error
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured { .. })
    }
}

/// Errors returned by the recipe resolver
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    /// Dish name was empty after trimming; no request was sent
    #[error("Please enter a dish name")]
    EmptyQuery,

    /// Name or id lookup failed upstream
    #[error("Recipe lookup failed: {0}")]
    RecipeLookupFailed(UpstreamFailure),

    /// Image analysis failed upstream
    #[error("Image analysis failed: {0}")]
    ImageAnalysisFailed(UpstreamFailure),

    /// The service has no recipe with this id
    #[error("Recipe '{id}' not found")]
    RecipeNotFound {
        /// Requested recipe id
        id: String,
    },
}

impl RecipeError {
    /// The upstream failure behind this error, if it came from the service
    #[must_use]
    pub const fn upstream(&self) -> Option<&UpstreamFailure> {
        match self {
            Self::RecipeLookupFailed(failure) | Self::ImageAnalysisFailed(failure) => Some(failure),
            Self::EmptyQuery | Self::RecipeNotFound { .. } => None,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// Structured upstream failures surface the upstream text verbatim;
    /// transport failures collapse to a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => self.to_string(),
            Self::RecipeLookupFailed(UpstreamFailure::Structured { message }) => {
                format!("Failed to parse recipe: {message}")
            }
            Self::RecipeLookupFailed(UpstreamFailure::Transport { .. }) => {
                GENERIC_LOOKUP_FAILURE.to_owned()
            }
            Self::ImageAnalysisFailed(UpstreamFailure::Structured { message }) => {
                format!("An error occurred while analyzing the image: {message}")
            }
            Self::ImageAnalysisFailed(UpstreamFailure::Transport { .. }) => {
                GENERIC_IMAGE_FAILURE.to_owned()
            }
            Self::RecipeNotFound { .. } => "Failed to fetch recipe data.".to_owned(),
        }
    }
}
