// ABOUTME: Core types and constants for the Recipe Lens client
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

#![deny(unsafe_code)]

//! # Recipe Lens Core
//!
//! Foundation crate providing shared types and constants for the Recipe Lens
//! client. It performs no I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the domain errors for recipe
//!   resolution, storage, and nutrition decoding
//! - **models**: `Recipe`, `PredictionCandidate`, `NutritionFacts`, `DishQuery`
//! - **constants**: endpoint paths, defaults, and environment variable names

/// Unified error handling with standard error codes and domain-specific errors
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `PredictionCandidate`, `NutritionFacts`)
pub mod models;
