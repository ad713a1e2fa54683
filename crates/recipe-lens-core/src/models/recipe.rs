// ABOUTME: Canonical Recipe model shared by the resolver, the store, and views
// ABOUTME: Lenient decoding accepts both upstream service payloads and saved records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use serde::{Deserialize, Serialize};

/// A recipe as returned by the recipe service and kept in the saved store.
///
/// The upstream service and previously saved records disagree on field shapes
/// (`minutes` as `"30"` vs `30`, `tags` as a stringified list vs an array), so
/// every field decodes leniently. Fields missing from a record take their
/// defaults rather than failing the whole recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable upstream identifier; required to save or deep-link a recipe
    #[serde(
        default,
        deserialize_with = "lenient::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display title
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Ingredient lines in preparation order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub ingredients: Vec<String>,
    /// Instruction steps in execution order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub instructions: Vec<String>,
    /// Number of people the recipe serves (name and image lookups)
    #[serde(
        default,
        deserialize_with = "lenient::opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<u32>,
    /// Total preparation time in minutes (id lookups and saved records)
    #[serde(
        default,
        deserialize_with = "lenient::opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub minutes: Option<u32>,
    /// Free-form tags, order-insensitive
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    /// Free-text description
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    /// Declared number of steps; trusted as a display field
    #[serde(
        default,
        deserialize_with = "lenient::opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub n_steps: Option<u32>,
    /// Declared number of ingredients; trusted as a display field
    #[serde(
        default,
        deserialize_with = "lenient::opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub n_ingredients: Option<u32>,
    /// Serialized seven-value nutrition sequence
    #[serde(
        default,
        deserialize_with = "lenient::opt_nutrition",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutrition: Option<String>,
}

/// Declared count that disagrees with the actual sequence length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountDiscrepancy {
    /// Count reported by the upstream record
    pub declared: u32,
    /// Length of the sequence actually present
    pub actual: usize,
}

impl Recipe {
    /// Create a recipe with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            servings: None,
            minutes: None,
            tags: Vec::new(),
            description: String::new(),
            n_steps: None,
            n_ingredients: None,
            nutrition: None,
        }
    }

    /// Set the stable identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Add instruction steps
    #[must_use]
    pub fn with_instructions<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions.extend(steps.into_iter().map(Into::into));
        self
    }

    /// Set servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Set total minutes
    #[must_use]
    pub const fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Add tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the declared step and ingredient counts
    #[must_use]
    pub const fn with_declared_counts(mut self, n_steps: u32, n_ingredients: u32) -> Self {
        self.n_steps = Some(n_steps);
        self.n_ingredients = Some(n_ingredients);
        self
    }

    /// Set the serialized nutrition sequence
    #[must_use]
    pub fn with_nutrition(mut self, nutrition: impl Into<String>) -> Self {
        self.nutrition = Some(nutrition.into());
        self
    }

    /// Identifier usable as a store key, if present and non-blank
    #[must_use]
    pub fn stable_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Instructions paired with their 1-based display number
    pub fn numbered_instructions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(index, step)| (index + 1, step.as_str()))
    }

    /// Declared step count that differs from the instruction list, if any
    #[must_use]
    pub fn step_count_discrepancy(&self) -> Option<CountDiscrepancy> {
        discrepancy(self.n_steps, self.instructions.len())
    }

    /// Declared ingredient count that differs from the ingredient list, if any
    #[must_use]
    pub fn ingredient_count_discrepancy(&self) -> Option<CountDiscrepancy> {
        discrepancy(self.n_ingredients, self.ingredients.len())
    }
}

fn discrepancy(declared: Option<u32>, actual: usize) -> Option<CountDiscrepancy> {
    let declared = declared?;
    (declared as usize != actual).then_some(CountDiscrepancy { declared, actual })
}

/// Parse a list literal as emitted by the recipe service.
///
/// Accepts JSON arrays (`["a", "b"]`), Python list reprs (`['a', "b's"]`), and
/// bare comma-separated text. Anything else yields an empty list.
#[must_use]
pub fn parse_list_literal(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
        return items;
    }

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut saw_quote = false;

    for ch in inner.chars() {
        match quote {
            Some(open) => {
                if escaped {
                    current.push(ch);
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == open {
                    items.push(std::mem::take(&mut current));
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                saw_quote = true;
            }
            None => {}
        }
    }

    if saw_quote {
        return items;
    }

    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Field decoders tolerant of the shapes the recipe service emits
mod lenient {
    use super::parse_list_literal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        })
    }

    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Some(Value::String(raw)) => parse_list_literal(&raw),
            _ => Vec::new(),
        })
    }

    pub fn opt_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(count))
    }

    pub fn opt_nutrition<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(array @ Value::Array(_)) => Some(array.to_string()),
            _ => None,
        })
    }

    fn count(value: &Value) -> Option<u32> {
        let number = match value {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        (number.is_finite() && number >= 0.0 && number.fract() == 0.0 && number <= f64::from(u32::MAX))
            .then_some(number as u32)
    }
}
