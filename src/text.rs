// ABOUTME: Deterministic text normalization for recipe names, ingredients, and steps
// ABOUTME: Strips non-alphanumerics to spaces then applies lower/upper/title/sentence casing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! # Text Normalizer
//!
//! Every character that is not an ASCII letter or digit becomes one space, the
//! result is lower-cased, then the requested casing is applied. The transform
//! is lossy: punctuation is gone after the first pass, so raw upstream text
//! must be normalized exactly once before it is stored or compared.
//!
//! Runs of spaces are kept as-is (`"Chicken-Tikka!!"` becomes
//! `"Chicken Tikka  "` in title case). Use [`collapse_whitespace`] when a
//! display needs single spacing.

use serde::{Deserialize, Serialize};

/// Casing applied after stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// all lower case
    Lower,
    /// ALL UPPER CASE
    Upper,
    /// First Letter Of Every Word
    Title,
    /// First character of the whole string only
    Sentence,
}

/// Normalize `input` with the given casing mode
#[must_use]
pub fn normalize(input: &str, mode: CaseMode) -> String {
    let stripped: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    match mode {
        CaseMode::Lower => stripped,
        CaseMode::Upper => stripped.to_ascii_uppercase(),
        CaseMode::Title => title_case(&stripped),
        CaseMode::Sentence => sentence_case(&stripped),
    }
}

/// Trim and collapse internal whitespace runs to single spaces
#[must_use]
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Input is already stripped to lowercase ASCII alphanumerics and spaces
fn title_case(stripped: &str) -> String {
    let mut out = String::with_capacity(stripped.len());
    let mut at_word_start = true;
    for c in stripped.chars() {
        if c == ' ' {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.push(c.to_ascii_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn sentence_case(stripped: &str) -> String {
    let mut chars = stripped.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(stripped.len());
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
        out
    })
}
