// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for language switching.
//!
//! Measures the performance of:
//! - Loading and validating the embedded translation table
//! - A full locale switch over the home page
//! - Rendering the tracking timeline

use criterion::{criterion_group, criterion_main, Criterion};
use morocco_docs::app::page;
use morocco_docs::app::preferences::MemoryStore;
use morocco_docs::i18n::{Locale, LocalizationEngine, PageProfile, TranslationTable};
use morocco_docs::request::track;
use std::hint::black_box;

fn bench_table_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_switch");
    let profile = PageProfile::default();

    group.bench_function("load_embedded_table", |b| {
        b.iter(|| black_box(TranslationTable::embedded(&profile).unwrap()));
    });

    group.finish();
}

/// Cycles through every locale on the same page.
fn bench_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_switch");

    let profile = PageProfile::default();
    let table = TranslationTable::embedded(&profile).unwrap();
    let mut engine = LocalizationEngine::new(profile, table, MemoryStore::new());
    let mut doc = page::skeleton();
    engine.start(&mut doc);

    group.bench_function("switch_all_locales", |b| {
        b.iter(|| {
            for locale in Locale::ALL {
                engine.switch_locale(&mut doc, black_box(locale));
            }
        });
    });

    group.finish();
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_switch");
    let table = TranslationTable::embedded(&PageProfile::default()).unwrap();
    let timeline = track("DOC-2024-12345").unwrap();

    group.bench_function("render_timeline_ar", |b| {
        b.iter(|| black_box(timeline.render(&table, Locale::Ar)));
    });

    group.finish();
}

criterion_group!(benches, bench_table_load, bench_switch, bench_timeline);
criterion_main!(benches);
