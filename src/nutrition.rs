// ABOUTME: Decodes a recipe's serialized nutrition sequence into named facts
// ABOUTME: Positional seven-value layout; short or non-numeric input is rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! # Nutrition Codec
//!
//! The recipe service stores nutrition as a serialized list such as
//! `"[51.5, 0.0, 13.0, 0.0, 2.0, 0.0, 4.0]"`. Index 0..6 map to calories, fat,
//! carbohydrates, fiber, protein, sugar and sodium. Values past index 6 are
//! ignored but must still be numeric.

use crate::constants::defaults::NUTRITION_FIELD_COUNT;
use crate::errors::NutritionError;
use crate::models::{NutritionFacts, Recipe};
use serde_json::Value;
use tracing::debug;

/// Decode a serialized nutrition sequence
///
/// # Errors
///
/// Returns `NutritionError::MalformedNutritionData` if the input is not a
/// list, holds fewer than seven elements, or any element is not a finite number.
pub fn decode(serialized: &str) -> Result<NutritionFacts, NutritionError> {
    let parsed: Value = serde_json::from_str(serialized.trim())
        .map_err(|e| NutritionError::malformed(format!("not a numeric list: {e}")))?;

    let Value::Array(items) = parsed else {
        return Err(NutritionError::malformed("expected a list of numbers"));
    };

    if items.len() < NUTRITION_FIELD_COUNT {
        return Err(NutritionError::malformed(format!(
            "expected {NUTRITION_FIELD_COUNT} values, found {}",
            items.len()
        )));
    }

    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let number = item
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| {
                NutritionError::malformed(format!("element {index} is not numeric: {item}"))
            })?;
        values.push(number);
    }

    Ok(NutritionFacts::from_values([
        values[0], values[1], values[2], values[3], values[4], values[5], values[6],
    ]))
}

/// Nutrition facts for a recipe, or `None` when the block cannot be rendered
#[must_use]
pub fn facts_for(recipe: &Recipe) -> Option<NutritionFacts> {
    let serialized = recipe.nutrition.as_deref()?;
    match decode(serialized) {
        Ok(facts) => Some(facts),
        Err(e) => {
            debug!(recipe_id = ?recipe.id, error = %e, "Omitting nutrition panel");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_mapping() {
        let facts = decode("[200, 10, 30, 5, 8, 6, 400]").unwrap();
        assert!((facts.calories - 200.0).abs() < f64::EPSILON);
        assert!((facts.fat_g - 10.0).abs() < f64::EPSILON);
        assert!((facts.carbohydrates_g - 30.0).abs() < f64::EPSILON);
        assert!((facts.fiber_g - 5.0).abs() < f64::EPSILON);
        assert!((facts.protein_g - 8.0).abs() < f64::EPSILON);
        assert!((facts.sugar_g - 6.0).abs() < f64::EPSILON);
        assert!((facts.sodium_mg - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decimal_values_from_service() {
        let facts = decode("[51.5, 0.0, 13.0, 0.0, 2.0, 0.0, 4.0]").unwrap();
        assert!((facts.calories - 51.5).abs() < f64::EPSILON);
        assert!((facts.carbohydrates_g - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_too_few_values() {
        let err = decode("[200, 10, 30, 5, 8, 6]").unwrap_err();
        assert!(matches!(err, NutritionError::MalformedNutritionData { .. }));
    }

    #[test]
    fn test_non_numeric_element() {
        assert!(decode(r#"[200, 10, "thirty", 5, 8, 6, 400]"#).is_err());
        assert!(decode("[200, 10, null, 5, 8, 6, 400]").is_err());
        assert!(decode("[200, 10, 30, 5, 8, 6, 400, \"x\"]").is_err());
    }

    #[test]
    fn test_not_a_list() {
        assert!(decode("").is_err());
        assert!(decode("{\"calories\": 1}").is_err());
        assert!(decode("200, 10").is_err());
    }

    #[test]
    fn test_extra_values_ignored() {
        let facts = decode("[1, 2, 3, 4, 5, 6, 7, 8]").unwrap();
        assert!((facts.sodium_mg - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_facts_for_recipe() {
        let recipe = Recipe::new("Soup").with_nutrition("[1, 2, 3, 4, 5, 6, 7]");
        assert!(facts_for(&recipe).is_some());

        let broken = Recipe::new("Soup").with_nutrition("[1, 2]");
        assert!(facts_for(&broken).is_none());

        assert!(facts_for(&Recipe::new("Soup")).is_none());
    }
}
