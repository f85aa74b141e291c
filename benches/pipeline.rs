//! Benchmarks for the atomcss pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use atomcss::{extract_class_names, Engine, Manifest};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

fn fixture_engine() -> Engine {
    let manifest = Manifest::parse(&load_fixture("atomcss.yaml")).unwrap();
    Engine::new(manifest.config).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let engine = fixture_engine();
    let grammar = engine.grammar();
    let page = load_fixture("page.html");

    group.bench_function("grammar_simple", |b| {
        b.iter(|| grammar.parse(black_box("bg-primary")))
    });

    group.bench_function("grammar_prefixed_secondary", |b| {
        b.iter(|| grammar.parse(black_box("md:border-2px/red")))
    });

    group.bench_function("grammar_bracket_type", |b| {
        b.iter(|| grammar.parse(black_box("[marginLeft,marginRight]-auto")))
    });

    group.bench_function("extract_page", |b| {
        b.iter(|| extract_class_names(black_box(&page)))
    });

    group.finish();
}

// -- Engine benchmarks --

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    let page = load_fixture("page.html");
    let classes = extract_class_names(&page);

    group.bench_function("process_page", |b| {
        let mut engine = fixture_engine();
        b.iter(|| {
            engine.reset();
            for list in &classes {
                engine.process(black_box(list));
            }
        })
    });

    // Many distinct classes
    let many: String = (0..500)
        .map(|i| format!("p-{}px m-{}rem hover:text-#{:06x} ", i, i, i * 97))
        .collect();

    group.bench_function("process_many", |b| {
        let mut engine = fixture_engine();
        b.iter(|| {
            engine.reset();
            engine.process(black_box(&many));
        })
    });

    let mut engine = fixture_engine();
    for list in &classes {
        engine.process(list);
    }
    engine.process(&many);

    group.bench_function("emit", |b| b.iter(|| black_box(&engine).emit()));

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_engine);
criterion_main!(benches);
