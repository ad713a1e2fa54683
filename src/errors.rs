// ABOUTME: Error types re-exported from recipe-lens-core
// ABOUTME: AppError umbrella plus recipe, storage, and nutrition domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

pub use recipe_lens_core::errors::*;
