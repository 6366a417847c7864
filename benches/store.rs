// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pinwall::format::{document_to_json, export_wall_pretty};
use pinwall::model::Point;
use pinwall::query::{search_notes, SearchMode};
use pinwall::store::{FileStorage, MemoryStorage, WallStore};

mod fixtures;
mod profiler;

use fixtures::walls::Case;

// Benchmark identity (keep stable):
// - Group names in this file: `store.persist`, `store.hydrate`, `store.import`, `query.search`.
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_persist(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.persist");

    for case in [Case::Small, Case::Medium, Case::LargeDense] {
        let walls = fixtures::walls::fixture(case);
        group.bench_function(format!("compute_only_{}", case.id()), |b| {
            b.iter(|| {
                let document = document_to_json(black_box(&walls), None);
                black_box(serde_json::to_string(&document).expect("serialize").len())
            })
        });
    }

    let document = fixtures::walls::document(Case::Medium);
    group.bench_function("io_medium", |b| {
        b.iter_batched_ref(
            || {
                let dir = tempfile::tempdir().expect("tempdir");
                let path = dir.path().join("walls.json");
                std::fs::write(&path, &document).expect("seed document");
                let store = WallStore::open(FileStorage::new(&path));
                (dir, path, store)
            },
            |(_dir, path, store)| {
                let wall_id = store.active_wall_id().cloned().expect("active wall");
                store.add_note(&wall_id, Point::new(0.0, 0.0), None, None);
                black_box(std::fs::metadata(path).expect("document metadata").len())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn benches_hydrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.hydrate");
    for case in [Case::Small, Case::Medium, Case::LargeDense] {
        let document = fixtures::walls::document(case);
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let store = WallStore::open(MemoryStorage::with_contents(black_box(document.clone())));
                black_box(store.walls().iter().map(fixtures::checksum_wall).sum::<u64>())
            })
        });
    }
    group.finish();
}

fn benches_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.import");
    for case in [Case::Medium, Case::LargeDense] {
        let walls = fixtures::walls::fixture(case);
        let exported = export_wall_pretty(&walls[0]).expect("export");
        group.bench_function(case.id(), |b| {
            b.iter_batched_ref(
                || WallStore::open(MemoryStorage::new()),
                |store| {
                    let wall = store.try_import_wall(black_box(&exported)).expect("import");
                    black_box(fixtures::checksum_wall(&wall))
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn benches_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("query.search");
    let store = fixtures::walls::store(Case::LargeDense);
    let wall = store.active_wall().expect("active wall");

    for (id, query, mode) in [
        ("substring", "deploy", SearchMode::Substring),
        ("substring_date", "2026-03-1", SearchMode::Substring),
        ("regex", r"re(lease|view)\s+bud", SearchMode::Regex),
        ("fuzzy", "rodmap", SearchMode::Fuzzy),
    ] {
        group.bench_function(id, |b| {
            b.iter(|| {
                let hits = search_notes(black_box(wall.notes()), black_box(query), mode).expect("search");
                black_box(hits.len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_persist, benches_hydrate, benches_import, benches_search
}
criterion_main!(benches);
