// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Sample recipes and a helper that serves an axum router on a loopback port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_lens`

use axum::Router;
use recipe_lens::models::Recipe;

/// Recipe with an id, as the store would hold it
pub fn saved_recipe(id: &str, name: &str) -> Recipe {
    Recipe::new(name)
        .with_id(id)
        .with_ingredients(["1 cup rice", "2 cups water"])
        .with_instructions(["Rinse the rice", "Simmer for 20 minutes"])
        .with_minutes(25)
        .with_tags(["easy", "side"])
}

/// Serve `router` on 127.0.0.1 with an OS-assigned port, returning its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve router");
    });
    format!("http://{addr}")
}

/// Base URL of a loopback port nothing is listening on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}")
}
