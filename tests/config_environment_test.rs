// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates defaults, overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_lens::config::{ImageSearchConfig, RecipeLensConfig, RecipeServiceConfig, StoreConfig};
use recipe_lens::constants::{defaults, env_vars};
use recipe_lens::errors::ErrorCode;
use recipe_lens::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const ALL_VARS: &[&str] = &[
    env_vars::RECIPE_SERVICE_URL,
    env_vars::RECIPE_SERVICE_TIMEOUT_SECS,
    env_vars::RECIPE_SERVICE_CONNECT_TIMEOUT_SECS,
    env_vars::IMAGE_SEARCH_URL,
    env_vars::IMAGE_SEARCH_API_KEY,
    env_vars::IMAGE_SEARCH_CX,
    env_vars::IMAGE_SEARCH_RESULT_OFFSET,
    env_vars::RECIPE_STORE_DIR,
    env_vars::RECIPE_STORE_KEY,
    "LOG_FORMAT",
    "SERVICE_NAME",
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = RecipeLensConfig::from_env().unwrap();

    assert_eq!(config.recipe_service, RecipeServiceConfig::default());
    assert_eq!(config.recipe_service.base_url, "http://localhost:5000");
    assert_eq!(config.recipe_service.timeout_secs, 60);
    assert_eq!(config.image_search.result_offset, 6);
    assert!(!config.image_search.is_enabled());
    assert_eq!(config.store.key, "savedRecipes");
    assert!(config
        .store
        .directory
        .ends_with(defaults::STORE_DIR_NAME)
        || config.store.directory == PathBuf::from(defaults::FALLBACK_STORE_DIR));
    assert!(config.summary().contains("Image Search: Disabled"));
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    env::set_var(env_vars::RECIPE_SERVICE_URL, "https://recipes.internal:8443/");
    env::set_var(env_vars::RECIPE_SERVICE_TIMEOUT_SECS, " 15 ");
    env::set_var(env_vars::IMAGE_SEARCH_API_KEY, "key");
    env::set_var(env_vars::IMAGE_SEARCH_CX, "engine");
    env::set_var(env_vars::IMAGE_SEARCH_RESULT_OFFSET, "0");
    env::set_var(env_vars::RECIPE_STORE_DIR, "/var/lib/recipes");
    env::set_var(env_vars::RECIPE_STORE_KEY, "weeknight");

    let config = RecipeLensConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.recipe_service.base_url, "https://recipes.internal:8443");
    assert_eq!(
        config.recipe_service.endpoint("/parse-recipe"),
        "https://recipes.internal:8443/parse-recipe"
    );
    assert_eq!(config.recipe_service.timeout_secs, 15);
    assert!(config.image_search.is_enabled());
    assert_eq!(config.image_search.result_offset, 0);
    assert_eq!(
        config.store,
        StoreConfig {
            directory: PathBuf::from("/var/lib/recipes"),
            key: "weeknight".to_owned(),
        }
    );
    assert!(!config.summary().contains("key"));
}

#[test]
#[serial]
fn test_malformed_number_is_config_invalid() {
    clear_env();
    env::set_var(env_vars::RECIPE_SERVICE_TIMEOUT_SECS, "soon");

    let err = RecipeServiceConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_vars::RECIPE_SERVICE_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_negative_offset_is_config_invalid() {
    clear_env();
    env::set_var(env_vars::IMAGE_SEARCH_RESULT_OFFSET, "-1");

    let err = ImageSearchConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_malformed_url_is_config_invalid() {
    clear_env();
    env::set_var(env_vars::RECIPE_SERVICE_URL, "not a url");
    assert_eq!(
        RecipeServiceConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    env::set_var(env_vars::RECIPE_SERVICE_URL, "ftp://recipes.example");
    assert_eq!(
        RecipeServiceConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();
}

#[test]
#[serial]
fn test_blank_credentials_disable_image_search() {
    clear_env();
    env::set_var(env_vars::IMAGE_SEARCH_API_KEY, "key");
    env::set_var(env_vars::IMAGE_SEARCH_CX, "   ");

    let config = ImageSearchConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.cx, None);
    assert!(!config.is_enabled());
}

#[test]
#[serial]
fn test_blank_store_key_rejected() {
    clear_env();
    env::set_var(env_vars::RECIPE_STORE_KEY, " ");

    let err = StoreConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "JSON");
    env::set_var("SERVICE_NAME", "recipe-lens-test");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "recipe-lens-test");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("Compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_with_base_url_trims_trailing_slash() {
    let config = RecipeServiceConfig::with_base_url("http://127.0.0.1:5000/").unwrap();
    assert_eq!(
        config.endpoint("/analyze-image"),
        "http://127.0.0.1:5000/analyze-image"
    );
}
