// ABOUTME: Criterion benchmarks for saved-recipe search and text normalization
// ABOUTME: Measures search latency across collection sizes and per-mode normalize cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

//! Criterion benchmarks for the saved-recipe store and text normalizer.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_lens::models::Recipe;
use recipe_lens::store::{MemoryBackend, SavedRecipeStore};
use recipe_lens::text::{normalize, CaseMode};

/// Saved collection sizes for benchmarking
#[derive(Debug, Clone, Copy)]
enum CollectionSize {
    Small,
    Medium,
    Large,
}

impl CollectionSize {
    const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1_000,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Small => "10",
            Self::Medium => "100",
            Self::Large => "1000",
        }
    }
}

const DISHES: [&str; 5] = [
    "Chicken Tikka",
    "Tikka Masala",
    "Pasta Primavera",
    "Miso Ramen",
    "Pad Thai",
];

fn populated_store(size: CollectionSize) -> SavedRecipeStore<MemoryBackend> {
    let mut store = SavedRecipeStore::new(MemoryBackend::new(), "bench");
    for i in 0..size.count() {
        let name = format!("{} {i}", DISHES[i % DISHES.len()]);
        store
            .save(
                Recipe::new(name)
                    .with_id(i.to_string())
                    .with_ingredients(["1 cup rice", "2 cups water", "salt"])
                    .with_instructions(["Rinse", "Simmer", "Serve"]),
            )
            .unwrap();
    }
    store
}

fn bench_store_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_search");

    for size in [
        CollectionSize::Small,
        CollectionSize::Medium,
        CollectionSize::Large,
    ] {
        let store = populated_store(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(BenchmarkId::new("substring", size.name()), &store, |b, store| {
            b.iter(|| black_box(store.search(black_box("tik"))));
        });
    }

    group.finish();
}

fn bench_store_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_save");

    group.bench_function("append_to_100", |b| {
        b.iter_batched(
            || populated_store(CollectionSize::Medium),
            |mut store| {
                store
                    .save(Recipe::new("Shakshuka").with_id("new"))
                    .unwrap()
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let input = "2 LBS boneless, skinless chicken-thighs (cut into 1\" cubes)!!";

    for mode in [
        CaseMode::Lower,
        CaseMode::Upper,
        CaseMode::Title,
        CaseMode::Sentence,
    ] {
        group.bench_with_input(
            BenchmarkId::new("ingredient", format!("{mode:?}")),
            &mode,
            |b, &mode| b.iter(|| black_box(normalize(black_box(input), mode))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_store_search, bench_store_save, bench_normalize);
criterion_main!(benches);
