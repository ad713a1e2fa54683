// ABOUTME: Unit tests for error codes, AppError construction, and domain error conversion
// ABOUTME: Validates user-facing messages and the code each domain error maps to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_lens::errors::{
    AppError, ErrorCode, NutritionError, RecipeError, StorageError, UpstreamFailure,
};
use std::error::Error;
use std::io;

#[test]
fn test_error_code_serialization() {
    assert_eq!(
        serde_json::to_string(&ErrorCode::ExternalServiceUnavailable).unwrap(),
        "\"EXTERNAL_SERVICE_UNAVAILABLE\""
    );
    assert_eq!(
        serde_json::from_str::<ErrorCode>("\"CONFIG_INVALID\"").unwrap(),
        ErrorCode::ConfigInvalid
    );
}

#[test]
fn test_app_error_display_includes_description() {
    let err = AppError::config_missing("RECIPE_SERVICE_URL");
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert_eq!(
        err.to_string(),
        "Required configuration is missing: Missing configuration: RECIPE_SERVICE_URL"
    );
    assert!(err.code.is_recoverable());
    assert!(!AppError::internal("bug").code.is_recoverable());
}

#[test]
fn test_recipe_error_codes() {
    let cases = [
        (RecipeError::EmptyQuery, ErrorCode::InvalidInput),
        (
            RecipeError::RecipeNotFound { id: "7".into() },
            ErrorCode::ResourceNotFound,
        ),
        (
            RecipeError::RecipeLookupFailed(UpstreamFailure::structured("nope")),
            ErrorCode::ExternalServiceError,
        ),
        (
            RecipeError::ImageAnalysisFailed(UpstreamFailure::transport("timeout")),
            ErrorCode::ExternalServiceUnavailable,
        ),
    ];
    for (error, code) in cases {
        let app: AppError = error.into();
        assert_eq!(app.code, code);
        assert!(app.source().is_some());
    }
}

#[test]
fn test_user_messages() {
    assert_eq!(RecipeError::EmptyQuery.user_message(), "Please enter a dish name");
    assert_eq!(
        RecipeError::ImageAnalysisFailed(UpstreamFailure::structured("No image file provided"))
            .user_message(),
        "An error occurred while analyzing the image: No image file provided"
    );
    assert_eq!(
        RecipeError::RecipeLookupFailed(UpstreamFailure::transport("connection reset"))
            .user_message(),
        "Failed to parse recipe. Please try again."
    );
}

#[test]
fn test_upstream_accessor() {
    let failure = UpstreamFailure::transport("dns");
    assert_eq!(
        RecipeError::RecipeLookupFailed(failure.clone()).upstream(),
        Some(&failure)
    );
    assert_eq!(RecipeError::EmptyQuery.upstream(), None);
}

#[test]
fn test_storage_and_nutrition_codes() {
    let io_err: AppError =
        StorageError::io("/tmp/x.json", io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            .into();
    assert_eq!(io_err.code, ErrorCode::StorageError);
    assert!(io_err.message.contains("/tmp/x.json"));

    let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    let corrupted: AppError = StorageError::Corrupted {
        key: "savedRecipes".into(),
        source: serde_err,
    }
    .into();
    assert_eq!(corrupted.code, ErrorCode::StorageError);

    let nutrition: AppError = NutritionError::malformed("too short").into();
    assert_eq!(nutrition.code, ErrorCode::InvalidFormat);
}
