// ABOUTME: Recipe resolver turning a dish name, image, or id into a normalized recipe
// ABOUTME: Validates queries, maps upstream failures, and applies casing in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! # Recipe Resolver
//!
//! Every entry path (name, image, id) funnels its recipe through
//! [`normalize_recipe`], so the title is always in title case and every
//! ingredient and step in sentence case no matter how the recipe arrived.
//! The resolver never retries and never re-queries on its own.

use crate::errors::RecipeError;
use crate::external::RecipeService;
use crate::models::{DishQuery, PredictionCandidate, Recipe};
use crate::text::{normalize, CaseMode};
use tracing::{debug, info, warn};

/// Which parts of an image analysis came back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageResolutionKind {
    /// No candidates and no recipe
    Nothing,
    /// Candidates without a recipe
    CandidatesOnly,
    /// A recipe without candidates
    RecipeOnly,
    /// Candidates and a recipe
    Both,
}

/// Outcome of resolving an image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResolution {
    /// Classification candidates, best first
    pub candidates: Vec<PredictionCandidate>,
    /// Normalized recipe for the top candidate, if the service produced one
    pub recipe: Option<Recipe>,
}

impl ImageResolution {
    /// Highest-ranked candidate
    #[must_use]
    pub fn best_candidate(&self) -> Option<&PredictionCandidate> {
        self.candidates.first()
    }

    /// Label of the top candidate, for pre-filling a name query
    #[must_use]
    pub fn suggested_query(&self) -> Option<&str> {
        self.best_candidate().map(|candidate| candidate.label.as_str())
    }

    /// Which parts are present
    #[must_use]
    pub fn kind(&self) -> ImageResolutionKind {
        match (self.candidates.is_empty(), self.recipe.is_some()) {
            (true, false) => ImageResolutionKind::Nothing,
            (false, false) => ImageResolutionKind::CandidatesOnly,
            (true, true) => ImageResolutionKind::RecipeOnly,
            (false, true) => ImageResolutionKind::Both,
        }
    }
}

/// Outcome of resolving any [`DishQuery`]
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A name lookup produced a recipe
    Recipe(Recipe),
    /// An image lookup produced candidates and/or a recipe
    Image(ImageResolution),
}

/// Resolves user queries against a [`RecipeService`]
pub struct RecipeResolver<S: RecipeService> {
    service: S,
}

impl<S: RecipeService> RecipeResolver<S> {
    /// Create a resolver over `service`
    #[must_use]
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying service
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Resolve a dish name, optionally scaled to `servings`
    ///
    /// # Errors
    ///
    /// `EmptyQuery` when the name is blank (nothing is sent), otherwise
    /// `RecipeLookupFailed` when the service fails.
    pub async fn resolve_by_name(
        &self,
        dish_name: &str,
        servings: Option<u32>,
    ) -> Result<Recipe, RecipeError> {
        if dish_name.trim().is_empty() {
            return Err(RecipeError::EmptyQuery);
        }

        info!(dish_name = %dish_name, ?servings, "Resolving recipe by name");
        let recipe = self
            .service
            .recipe_by_name(dish_name, servings)
            .await
            .map_err(|failure| {
                warn!(dish_name = %dish_name, error = %failure, "Recipe lookup failed");
                RecipeError::RecipeLookupFailed(failure)
            })?;
        Ok(normalize_recipe(recipe))
    }

    /// Resolve a food photo into candidates and an optional recipe
    ///
    /// # Errors
    ///
    /// `ImageAnalysisFailed` when the service fails.
    pub async fn resolve_by_image(&self, image: Vec<u8>) -> Result<ImageResolution, RecipeError> {
        info!(bytes = image.len(), "Resolving recipe by image");
        let analysis = self.service.analyze_image(image).await.map_err(|failure| {
            warn!(error = %failure, structured = failure.is_structured(), "Image analysis failed");
            RecipeError::ImageAnalysisFailed(failure)
        })?;

        let resolution = ImageResolution {
            candidates: analysis.predictions,
            recipe: analysis.recipe.map(normalize_recipe),
        };
        debug!(kind = ?resolution.kind(), suggested = ?resolution.suggested_query(), "Image resolved");
        Ok(resolution)
    }

    /// Re-fetch a recipe by its stable id
    ///
    /// # Errors
    ///
    /// `RecipeNotFound` when the service has no match, otherwise
    /// `RecipeLookupFailed` when the service fails.
    pub async fn resolve_by_id(&self, id: &str) -> Result<Recipe, RecipeError> {
        info!(recipe_id = %id, "Resolving recipe by id");
        match self.service.recipe_by_id(id).await {
            Ok(Some(recipe)) => Ok(normalize_recipe(recipe)),
            Ok(None) => Err(RecipeError::RecipeNotFound { id: id.to_owned() }),
            Err(failure) => {
                warn!(recipe_id = %id, error = %failure, "Recipe lookup failed");
                Err(RecipeError::RecipeLookupFailed(failure))
            }
        }
    }

    /// Resolve either kind of query
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve_by_name`] or [`Self::resolve_by_image`].
    pub async fn resolve(&self, query: DishQuery) -> Result<Resolution, RecipeError> {
        match query {
            DishQuery::ByName {
                dish_name,
                servings,
            } => self
                .resolve_by_name(&dish_name, servings)
                .await
                .map(Resolution::Recipe),
            DishQuery::ByImage { image } => {
                self.resolve_by_image(image).await.map(Resolution::Image)
            }
        }
    }
}

/// Apply display casing to a raw upstream recipe
#[must_use]
pub fn normalize_recipe(mut recipe: Recipe) -> Recipe {
    recipe.name = normalize(&recipe.name, CaseMode::Title);
    for ingredient in &mut recipe.ingredients {
        *ingredient = normalize(ingredient, CaseMode::Sentence);
    }
    for step in &mut recipe.instructions {
        *step = normalize(step, CaseMode::Sentence);
    }
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_recipe_casing() {
        let raw = Recipe::new("chicken tikka-masala")
            .with_ingredients(["2 LBS chicken", "yogurt"])
            .with_instructions(["marinate overnight.", "GRILL"]);
        let recipe = normalize_recipe(raw);
        assert_eq!(recipe.name, "Chicken Tikka Masala");
        assert_eq!(recipe.ingredients, vec!["2 lbs chicken", "Yogurt"]);
        assert_eq!(recipe.instructions, vec!["Marinate overnight ", "Grill"]);
    }

    #[test]
    fn test_image_resolution_kind() {
        let mut resolution = ImageResolution {
            candidates: Vec::new(),
            recipe: None,
        };
        assert_eq!(resolution.kind(), ImageResolutionKind::Nothing);
        assert_eq!(resolution.suggested_query(), None);

        resolution.candidates.push(PredictionCandidate::new("ramen", 0.9));
        assert_eq!(resolution.kind(), ImageResolutionKind::CandidatesOnly);
        assert_eq!(resolution.suggested_query(), Some("ramen"));

        resolution.recipe = Some(Recipe::new("Ramen"));
        assert_eq!(resolution.kind(), ImageResolutionKind::Both);

        resolution.candidates.clear();
        assert_eq!(resolution.kind(), ImageResolutionKind::RecipeOnly);
    }
}
