// ABOUTME: Nutrition decoding error type
// ABOUTME: Raised when a serialized nutrition sequence is short or non-numeric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

/// Errors from decoding a serialized nutrition sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NutritionError {
    /// Sequence was unparseable, too short, or held a non-numeric element
    #[error("Malformed nutrition data: {reason}")]
    MalformedNutritionData {
        /// What was wrong with the input
        reason: String,
    },
}

impl NutritionError {
    /// Create a malformed-data error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedNutritionData {
            reason: reason.into(),
        }
    }
}
