//! Criterion benchmarks for spritegen critical paths
//!
//! Benchmarks the operations a full `generate` spends its time in:
//! - Color: CSS color parsing for config palettes
//! - Shapes: polygon and ellipse rasterization
//! - Characters: full sheet rendering
//! - Tiles: single tiles and the whole atlas
//! - Masks: the parallel mask strip

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spritegen::characters::{builtin, CharacterGenerator, BUILTIN_NAMES};
use spritegen::color::parse_color;
use spritegen::masks::render_transition_masks;
use spritegen::output::scale_image;
use spritegen::shapes::{rasterize_ellipse, rasterize_polygon};
use spritegen::tiles::{render_tile, render_tile_atlas, tile_by_name};

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("parse_hex_6", |b| b.iter(|| parse_color(black_box("#4060a0"))));
    group.bench_function("parse_named", |b| b.iter(|| parse_color(black_box("crimson"))));
    group.bench_function("parse_hsl", |b| b.iter(|| parse_color(black_box("hsl(210, 40%, 44%)"))));

    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    group.bench_function("polygon_diamond", |b| {
        b.iter(|| rasterize_polygon(black_box(&[(0, 46), (20, 36), (39, 46), (20, 55)])))
    });
    group.bench_function("ellipse_12x8", |b| b.iter(|| rasterize_ellipse(black_box(32), 32, 12, 8)));

    group.finish();
}

fn bench_characters(c: &mut Criterion) {
    let mut group = c.benchmark_group("characters");
    group.throughput(Throughput::Elements(16));

    for name in ["wizard", "raptor", "spaceman"] {
        let Some(generator) = builtin(name) else { continue };
        group.bench_with_input(BenchmarkId::new("sheet", name), &generator, |b, generator| {
            b.iter(|| generator.render_sheet())
        });
    }

    group.bench_function("all_sheets", |b| {
        b.iter(|| {
            for name in BUILTIN_NAMES {
                if let Some(generator) = builtin(name) {
                    black_box(generator.render_sheet());
                }
            }
        })
    });

    group.finish();
}

fn bench_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiles");

    for name in ["grass", "lava", "cliff"] {
        let Some(tile) = tile_by_name(name) else { continue };
        group.bench_with_input(BenchmarkId::new("tile", name), tile, |b, tile| b.iter(|| render_tile(tile, 1)));
    }
    group.bench_function("atlas", |b| b.iter(render_tile_atlas));

    group.finish();
}

fn bench_masks(c: &mut Criterion) {
    let mut group = c.benchmark_group("masks");
    group.throughput(Throughput::Elements(320 * 112));

    group.bench_function("strip", |b| b.iter(render_transition_masks));
    group.bench_function("strip_scaled_4x", |b| b.iter(|| scale_image(render_transition_masks(), 4)));

    group.finish();
}

criterion_group!(benches, bench_color, bench_shapes, bench_characters, bench_tiles, bench_masks);
criterion_main!(benches);
