// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry Lookup Benchmark
//!
//! Measures:
//! - cached `describe_type` lookups
//! - field lookup by proto name and by exported identifier
//! - cold registration of a small recursive graph (fresh registry per iteration)

#![allow(clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pbdb::{well_known, FieldDescriptor, MessageDescriptor, ScalarKind, TypeRegistry};

static ENTRY: MessageDescriptor = MessageDescriptor::map_entry(
    "bench.Document.LabelsEntry",
    &[
        FieldDescriptor::scalar("key", 1, ScalarKind::String),
        FieldDescriptor::scalar("value", 2, ScalarKind::String),
    ],
);

static DOCUMENT: MessageDescriptor = MessageDescriptor::new(
    "bench.Document",
    &[
        FieldDescriptor::scalar("doc_id", 1, ScalarKind::Uint64),
        FieldDescriptor::scalar("title", 2, ScalarKind::String),
        FieldDescriptor::message("parent", 3, document),
        FieldDescriptor::message("children", 4, document).repeated(),
        FieldDescriptor::map("labels", 5, entry),
        FieldDescriptor::message("published", 6, well_known::bool_value),
        FieldDescriptor::message("extra", 7, well_known::structure),
    ],
);

fn document() -> &'static MessageDescriptor {
    &DOCUMENT
}

fn entry() -> &'static MessageDescriptor {
    &ENTRY
}

fn bench_describe_cached(c: &mut Criterion) {
    let registry = TypeRegistry::new();
    registry.register_descriptor(&DOCUMENT).expect("register");

    c.bench_function("describe_type_cached", |b| {
        b.iter(|| {
            let td = registry
                .describe_type(black_box("bench.Document"))
                .expect("describe");
            black_box(td.field_count())
        });
    });
}

fn bench_field_lookup(c: &mut Criterion) {
    let registry = TypeRegistry::new();
    let td = registry.register_descriptor(&DOCUMENT).expect("register");

    c.bench_function("field_by_proto_name", |b| {
        b.iter(|| black_box(td.field_by_name(black_box("doc_id")).is_some()));
    });
    c.bench_function("field_by_exported_name", |b| {
        b.iter(|| black_box(td.field_by_name(black_box("DocId")).is_some()));
    });
}

fn bench_cold_registration(c: &mut Criterion) {
    c.bench_function("register_recursive_cold", |b| {
        b.iter(|| {
            let registry = TypeRegistry::new();
            let td = registry.register_descriptor(&DOCUMENT).expect("register");
            black_box(td.field_count())
        });
    });
}

criterion_group!(
    benches,
    bench_describe_cached,
    bench_field_lookup,
    bench_cold_registration
);
criterion_main!(benches);
