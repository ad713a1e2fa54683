// ABOUTME: Image classification candidate returned alongside image lookups
// ABOUTME: Label plus probability, ordered best-first by the upstream service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use serde::{Deserialize, Serialize};

/// A labeled, probability-scored guess at the food depicted in an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCandidate {
    /// Food label (the upstream `class` field)
    #[serde(alias = "class")]
    pub label: String,
    /// Probability in `[0, 1]`
    pub probability: f64,
}

impl PredictionCandidate {
    /// Create a candidate
    #[must_use]
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }

    /// Probability rendered as a percentage with two decimals, e.g. `"87.25%"`
    #[must_use]
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rendering() {
        assert_eq!(PredictionCandidate::new("sushi", 0.8725).percentage(), "87.25%");
        assert_eq!(PredictionCandidate::new("ramen", 1.0).percentage(), "100.00%");
    }

    #[test]
    fn test_decodes_upstream_class_field() {
        let candidate: PredictionCandidate =
            serde_json::from_str(r#"{"class": "pizza", "probability": 0.5}"#).unwrap();
        assert_eq!(candidate.label, "pizza");
    }
}
