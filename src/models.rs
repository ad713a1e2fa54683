// ABOUTME: Data models re-exported from recipe-lens-core
// ABOUTME: Recipe, PredictionCandidate, NutritionFacts, and DishQuery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

pub use recipe_lens_core::models::*;
