// ABOUTME: Named nutrition facts decoded from a recipe's serialized sequence
// ABOUTME: Fixed seven-field layout: calories, fat, carbs, fiber, protein, sugar, sodium
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use serde::{Deserialize, Serialize};

/// Per-serving nutrition facts in the recipe service's positional order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal (index 0)
    pub calories: f64,
    /// Total fat in grams (index 1)
    pub fat_g: f64,
    /// Carbohydrates in grams (index 2)
    pub carbohydrates_g: f64,
    /// Fiber in grams (index 3)
    pub fiber_g: f64,
    /// Protein in grams (index 4)
    pub protein_g: f64,
    /// Sugar in grams (index 5)
    pub sugar_g: f64,
    /// Sodium in milligrams (index 6)
    pub sodium_mg: f64,
}

/// One labeled row of the nutrition panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionRow {
    /// Display label
    pub label: &'static str,
    /// Amount
    pub value: f64,
    /// Unit suffix
    pub unit: &'static str,
}

impl NutritionFacts {
    /// Build from values in positional order
    #[must_use]
    pub const fn from_values(values: [f64; 7]) -> Self {
        let [calories, fat_g, carbohydrates_g, fiber_g, protein_g, sugar_g, sodium_mg] = values;
        Self {
            calories,
            fat_g,
            carbohydrates_g,
            fiber_g,
            protein_g,
            sugar_g,
            sodium_mg,
        }
    }

    /// Rows for display, in panel order
    #[must_use]
    pub const fn rows(&self) -> [NutritionRow; 7] {
        [
            NutritionRow { label: "Calories", value: self.calories, unit: "kcal" },
            NutritionRow { label: "Fat", value: self.fat_g, unit: "g" },
            NutritionRow { label: "Carbohydrates", value: self.carbohydrates_g, unit: "g" },
            NutritionRow { label: "Fiber", value: self.fiber_g, unit: "g" },
            NutritionRow { label: "Protein", value: self.protein_g, unit: "g" },
            NutritionRow { label: "Sugar", value: self.sugar_g, unit: "g" },
            NutritionRow { label: "Sodium", value: self.sodium_mg, unit: "mg" },
        ]
    }
}
