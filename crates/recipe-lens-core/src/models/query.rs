// ABOUTME: Dish query input for the resolver: a dish name or raw image bytes
// ABOUTME: Exactly one kind of input is present per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use std::fmt;

/// A user-initiated request to resolve a recipe
#[derive(Clone, PartialEq, Eq)]
pub enum DishQuery {
    /// Free-text dish name, with an optional number of people to serve
    ByName {
        /// Raw dish name as typed
        dish_name: String,
        /// Number of people to serve
        servings: Option<u32>,
    },
    /// Food photograph
    ByImage {
        /// Encoded image bytes
        image: Vec<u8>,
    },
}

impl DishQuery {
    /// Query by dish name
    #[must_use]
    pub fn by_name(dish_name: impl Into<String>, servings: Option<u32>) -> Self {
        Self::ByName {
            dish_name: dish_name.into(),
            servings,
        }
    }

    /// Query by image
    #[must_use]
    pub const fn by_image(image: Vec<u8>) -> Self {
        Self::ByImage { image }
    }
}

// Image bytes are elided so queries can be logged
impl fmt::Debug for DishQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName {
                dish_name,
                servings,
            } => f
                .debug_struct("ByName")
                .field("dish_name", dish_name)
                .field("servings", servings)
                .finish(),
            Self::ByImage { image } => f
                .debug_struct("ByImage")
                .field("bytes", &image.len())
                .finish(),
        }
    }
}
