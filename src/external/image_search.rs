// ABOUTME: Illustrative photo lookup for a recipe name via a custom image search API
// ABOUTME: Picks the configured result offset; a missing result is not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use crate::config::ImageSearchConfig;
use crate::errors::UpstreamFailure;
use crate::logging::AppLogger;
use crate::utils::http_client::shared_client;
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchErrorResponse {
    error: SearchErrorBody,
}

#[derive(Debug, Deserialize)]
struct SearchErrorBody {
    #[serde(default)]
    message: String,
}

/// Image search client; only constructed when credentials are configured
#[derive(Debug, Clone)]
pub struct ImageSearchClient {
    base_url: String,
    api_key: String,
    cx: String,
    result_offset: usize,
    http_client: Client,
}

impl ImageSearchClient {
    /// Build a client from config, or `None` when the key or engine id is missing
    #[must_use]
    pub fn from_config(config: &ImageSearchConfig) -> Option<Self> {
        let (Some(api_key), Some(cx)) = (config.api_key.clone(), config.cx.clone()) else {
            debug!("Image search disabled: credentials not configured");
            return None;
        };
        Some(Self {
            base_url: config.base_url.clone(),
            api_key,
            cx,
            result_offset: config.result_offset,
            http_client: shared_client().clone(),
        })
    }

    /// Link of the image at the configured offset for `name`
    ///
    /// Returns `Ok(None)` when the search has fewer results than the offset.
    pub async fn find_image(&self, name: &str) -> Result<Option<String>, UpstreamFailure> {
        let started = Instant::now();
        let result = self.search(name).await;
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_upstream_call("image-search", result.is_ok(), elapsed);
        result
    }

    async fn search(&self, name: &str) -> Result<Option<String>, UpstreamFailure> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("q", name),
                ("searchType", "image"),
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
            ])
            .send()
            .await
            .map_err(|e| UpstreamFailure::transport(format!("image search failed: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamFailure::transport(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(serde_json::from_slice::<SearchErrorResponse>(&body).map_or_else(
                |_| UpstreamFailure::transport(format!("image search returned HTTP {status}")),
                |payload| UpstreamFailure::structured(payload.error.message),
            ));
        }

        let payload: SearchResponse = serde_json::from_slice(&body).map_err(|e| {
            UpstreamFailure::transport(format!("undecodable image search payload: {e}"))
        })?;

        let link = payload
            .items
            .into_iter()
            .nth(self.result_offset)
            .and_then(|item| item.link)
            .filter(|link| !link.trim().is_empty());
        if link.is_none() {
            debug!(query = %name, offset = self.result_offset, "No image at result offset");
        }
        Ok(link)
    }
}
