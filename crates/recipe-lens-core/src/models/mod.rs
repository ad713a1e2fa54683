// ABOUTME: Core data models for recipe lookup and storage
// ABOUTME: Recipe, PredictionCandidate, NutritionFacts, and DishQuery definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

mod nutrition;
mod prediction;
mod query;
mod recipe;

pub use nutrition::{NutritionFacts, NutritionRow};
pub use prediction::PredictionCandidate;
pub use query::DishQuery;
pub use recipe::{parse_list_literal, CountDiscrepancy, Recipe};
