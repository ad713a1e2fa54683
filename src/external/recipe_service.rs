// ABOUTME: Recipe service boundary for name lookup, image analysis, and id lookup
// ABOUTME: HTTP client over reqwest plus an in-process mock, both behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! Recipe Service Client
//!
//! The recipe service is a separate HTTP process that owns recipe generation
//! and image classification. This module is the only place its responses are
//! read, so it is also where every failure is classified:
//!
//! - a body of the form `{ "error": ... }` is [`UpstreamFailure::Structured`]
//!   and its message is kept verbatim
//! - connect errors, timeouts, a bad status without an error body, or a body
//!   that does not decode are [`UpstreamFailure::Transport`]
//!
//! Returned recipes are raw: casing is applied by the resolver.

use crate::config::RecipeServiceConfig;
use crate::constants::endpoints;
use crate::errors::UpstreamFailure;
use crate::logging::AppLogger;
use crate::models::{PredictionCandidate, Recipe};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;
use tracing::debug;

/// Raw image analysis payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageAnalysis {
    /// Classification candidates, best first
    #[serde(default)]
    pub predictions: Vec<PredictionCandidate>,
    /// Recipe for the top candidate, when the service produced one
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

/// Operations offered by the recipe service
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Look up a recipe by dish name, optionally scaled to `servings`
    async fn recipe_by_name(
        &self,
        dish_name: &str,
        servings: Option<u32>,
    ) -> Result<Recipe, UpstreamFailure>;

    /// Classify an image and fetch a recipe for the best candidate
    async fn analyze_image(&self, image: Vec<u8>) -> Result<ImageAnalysis, UpstreamFailure>;

    /// Fetch a recipe by stable id; `Ok(None)` when the service has no match
    async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, UpstreamFailure>;
}

#[derive(Debug, Serialize)]
struct NameLookupRequest<'a> {
    dish_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_people: Option<u32>,
}

#[derive(Debug, Serialize)]
struct IdLookupRequest<'a> {
    recipe_id: &'a str,
}

/// What one response body turned out to be
enum Payload {
    Data(Value),
    Error(String),
}

/// HTTP implementation of [`RecipeService`]
#[derive(Debug, Clone)]
pub struct HttpRecipeService {
    config: RecipeServiceConfig,
    http_client: Client,
}

impl HttpRecipeService {
    /// Create a client with timeouts taken from `config`
    #[must_use]
    pub fn new(config: RecipeServiceConfig) -> Self {
        let http_client =
            create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs);
        Self {
            config,
            http_client,
        }
    }

    /// Create a client reusing an existing `reqwest` client
    #[must_use]
    pub const fn with_client(config: RecipeServiceConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, Payload), UpstreamFailure> {
        let started = Instant::now();
        let result = Self::read_payload(request).await;
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let success = matches!(result, Ok((status, Payload::Data(_))) if status.is_success());
        AppLogger::log_upstream_call(endpoint, success, elapsed);
        result
    }

    async fn read_payload(
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, Payload), UpstreamFailure> {
        let response = request
            .send()
            .await
            .map_err(|e| UpstreamFailure::transport(format!("request failed: {e}")))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamFailure::transport(format!("failed to read body: {e}")))?;

        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => match error_message(&value) {
                Some(message) => Ok((status, Payload::Error(message))),
                None => Ok((status, Payload::Data(value))),
            },
            Err(e) if status.is_success() => Err(UpstreamFailure::transport(format!(
                "undecodable response body: {e}"
            ))),
            Err(_) => Ok((status, Payload::Data(Value::Null))),
        }
    }
}

#[async_trait]
impl RecipeService for HttpRecipeService {
    async fn recipe_by_name(
        &self,
        dish_name: &str,
        servings: Option<u32>,
    ) -> Result<Recipe, UpstreamFailure> {
        let request = self
            .http_client
            .post(self.config.endpoint(endpoints::PARSE_RECIPE))
            .json(&NameLookupRequest {
                dish_name,
                num_people: servings,
            });

        match self.send(endpoints::PARSE_RECIPE, request).await? {
            (_, Payload::Error(message)) => Err(UpstreamFailure::structured(message)),
            (status, Payload::Data(value)) if status.is_success() => decode_recipe(value),
            (status, Payload::Data(_)) => Err(bad_status(status)),
        }
    }

    async fn analyze_image(&self, image: Vec<u8>) -> Result<ImageAnalysis, UpstreamFailure> {
        debug!(bytes = image.len(), "Uploading image for analysis");
        let part = Part::bytes(image).file_name(endpoints::IMAGE_FILE_NAME);
        let request = self
            .http_client
            .post(self.config.endpoint(endpoints::ANALYZE_IMAGE))
            .multipart(Form::new().part(endpoints::IMAGE_FIELD, part));

        match self.send(endpoints::ANALYZE_IMAGE, request).await? {
            (_, Payload::Error(message)) => Err(UpstreamFailure::structured(message)),
            (status, Payload::Data(value)) if status.is_success() => {
                serde_json::from_value(value).map_err(|e| {
                    UpstreamFailure::transport(format!("undecodable analysis payload: {e}"))
                })
            }
            (status, Payload::Data(_)) => Err(bad_status(status)),
        }
    }

    async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, UpstreamFailure> {
        let request = self
            .http_client
            .post(self.config.endpoint(endpoints::RECIPE_BY_ID))
            .json(&IdLookupRequest { recipe_id: id });

        match self.send(endpoints::RECIPE_BY_ID, request).await? {
            (StatusCode::NOT_FOUND, _) => Ok(None),
            (status, Payload::Error(message)) if status.is_success() => {
                debug!(recipe_id = %id, %message, "Recipe service reported no match");
                Ok(None)
            }
            (_, Payload::Error(message)) => Err(UpstreamFailure::structured(message)),
            (status, Payload::Data(value)) if status.is_success() => decode_recipe(value).map(Some),
            (status, Payload::Data(_)) => Err(bad_status(status)),
        }
    }
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn decode_recipe(value: Value) -> Result<Recipe, UpstreamFailure> {
    serde_json::from_value(value)
        .map_err(|e| UpstreamFailure::transport(format!("undecodable recipe payload: {e}")))
}

fn bad_status(status: StatusCode) -> UpstreamFailure {
    UpstreamFailure::transport(format!("recipe service returned HTTP {status}"))
}

/// In-process recipe service for tests (no network)
///
/// Name lookups match case-insensitively on the trimmed dish name. Queued
/// failures are returned, in order, before any canned data is consulted.
#[derive(Debug, Default)]
pub struct MockRecipeService {
    recipes_by_name: HashMap<String, Recipe>,
    recipes_by_id: HashMap<String, Recipe>,
    analysis: ImageAnalysis,
    failures: Mutex<VecDeque<UpstreamFailure>>,
    calls: AtomicUsize,
}

impl MockRecipeService {
    /// Create an empty mock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `recipe` for name lookups of `dish_name`, and by id when it has one
    #[must_use]
    pub fn with_recipe(mut self, dish_name: &str, recipe: Recipe) -> Self {
        if let Some(id) = recipe.stable_id() {
            self.recipes_by_id.insert(id.to_owned(), recipe.clone());
        }
        self.recipes_by_name.insert(name_key(dish_name), recipe);
        self
    }

    /// Serve `analysis` for every image upload
    #[must_use]
    pub fn with_analysis(mut self, analysis: ImageAnalysis) -> Self {
        self.analysis = analysis;
        self
    }

    /// Fail the next call with `failure`
    #[must_use]
    pub fn with_failure(self, failure: UpstreamFailure) -> Self {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push_back(failure);
        }
        self
    }

    /// Number of calls received so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), UpstreamFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let queued = self
            .failures
            .lock()
            .ok()
            .and_then(|mut failures| failures.pop_front());
        queued.map_or(Ok(()), Err)
    }
}

#[async_trait]
impl RecipeService for MockRecipeService {
    async fn recipe_by_name(
        &self,
        dish_name: &str,
        _servings: Option<u32>,
    ) -> Result<Recipe, UpstreamFailure> {
        self.record_call()?;
        self.recipes_by_name
            .get(&name_key(dish_name))
            .cloned()
            .ok_or_else(|| {
                UpstreamFailure::structured(format!("No recipe found for '{}'", dish_name.trim()))
            })
    }

    async fn analyze_image(&self, image: Vec<u8>) -> Result<ImageAnalysis, UpstreamFailure> {
        self.record_call()?;
        if image.is_empty() {
            return Err(UpstreamFailure::structured("No image file provided"));
        }
        Ok(self.analysis.clone())
    }

    async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, UpstreamFailure> {
        self.record_call()?;
        Ok(self.recipes_by_id.get(id).cloned())
    }
}

fn name_key(dish_name: &str) -> String {
    dish_name.trim().to_lowercase()
}
