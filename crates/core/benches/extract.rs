// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for backlog extraction and snapshot assembly.

use brief_core::backlog::extract;
use brief_core::{assemble, Schema, SnapshotSettings, Timestamps};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn backlog(epics: usize, stories: usize) -> Value {
    let statuses = ["active", "in_progress", "done", "planned"];
    let items = ["todo", "in_progress", "done", "delivered", "skipped"];
    let records: Vec<Value> = (0..epics)
        .map(|e| {
            let stories: Vec<Value> = (0..stories)
                .map(|s| {
                    json!({
                        "id": format!("S{}-{}", e, s),
                        "name": format!("Story {}", s),
                        "status": items[s % items.len()],
                    })
                })
                .collect();
            json!({
                "epicId": format!("EPIC-{}", e),
                "title": format!("Epic {}", e),
                "status": statuses[e % statuses.len()],
                "stories": stories,
            })
        })
        .collect();
    json!({ "epics": records, "activeEpics": [], "pendingEpics": [] })
}

fn extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let schema = Schema::default();

    for (epics, stories) in [(10, 10), (100, 20), (1000, 5)] {
        let doc = backlog(epics, stories);
        let id = format!("{}x{}", epics, stories);
        group.bench_with_input(BenchmarkId::new("extract", id), &doc, |b, d| {
            b.iter(|| extract(d, &schema))
        });
    }
    group.finish();
}

fn assembly(c: &mut Criterion) {
    let groups = extract(&backlog(100, 20), &Schema::default());
    let stamps = Timestamps {
        utc: "2026-10-18 09:05 UTC".to_string(),
        local: "Sun 18 Oct 2026, 08:05 PM UTC".to_string(),
    };
    let settings = SnapshotSettings::default();

    c.bench_function("assemble_and_render_100_groups", |b| {
        b.iter(|| assemble(groups.clone(), vec![], vec![], &stamps, &settings).render())
    });
}

criterion_group!(benches, extraction, assembly);
criterion_main!(benches);
