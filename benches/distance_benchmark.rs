use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordwhiz_engine::validation::{edit_distance, is_fuzzy_match};
use wordwhiz_engine::{validate, Difficulty, TargetWord};

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("distance_short", |b| {
        b.iter(|| black_box(edit_distance(black_box("cat"), black_box("bat"))));
    });

    c.bench_function("distance_medium", |b| {
        b.iter(|| black_box(edit_distance(black_box("kitten"), black_box("sitting"))));
    });

    c.bench_function("distance_long", |b| {
        b.iter(|| {
            black_box(edit_distance(
                black_box("metamorphosis"),
                black_box("metamorphoses"),
            ))
        });
    });

    // Maximum-size inputs the validator will ever feed it
    let worst_a = "ab".repeat(25);
    let worst_b = "ba".repeat(25);
    c.bench_function("distance_worst_case_50", |b| {
        b.iter(|| black_box(edit_distance(black_box(&worst_a), black_box(&worst_b))));
    });
}

fn bench_fuzzy_match(c: &mut Criterion) {
    c.bench_function("fuzzy_accept_typo", |b| {
        b.iter(|| black_box(is_fuzzy_match(black_box("exampl"), black_box("example"))));
    });

    c.bench_function("fuzzy_reject_far", |b| {
        b.iter(|| black_box(is_fuzzy_match(black_box("another"), black_box("example"))));
    });
}

fn bench_validate_pipeline(c: &mut Criterion) {
    let target = TargetWord::new(
        23,
        "example",
        "a thing characteristic of its kind, used to illustrate a rule",
        Difficulty::Medium,
    );

    c.bench_function("validate_exact", |b| {
        b.iter(|| black_box(validate(black_box(Some("example")), Some(&target))));
    });

    c.bench_function("validate_fuzzy", |b| {
        b.iter(|| black_box(validate(black_box(Some("exampl")), Some(&target))));
    });

    c.bench_function("validate_miss", |b| {
        b.iter(|| black_box(validate(black_box(Some("anagram")), Some(&target))));
    });
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_fuzzy_match,
    bench_validate_pipeline
);
criterion_main!(benches);
