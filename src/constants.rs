// ABOUTME: Constants re-exported from recipe-lens-core
// ABOUTME: Endpoint paths, configuration defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

pub use recipe_lens_core::constants::*;
