//! Benchmarks for the tile render pipeline.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mandelbrot_tiles::{write_png, ColourMapKind, EngineConfig, TileAddress, TileController};

fn bench_render_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tile");
    let config = EngineConfig::default();
    group.throughput(Throughput::Elements(u64::from(config.tile_size) * u64::from(config.tile_size)));

    for workers in [1_usize, 2, 4, 8] {
        let tiles = TileController::new(EngineConfig {
            worker_count: workers,
            ..config
        });

        group.bench_with_input(BenchmarkId::new("base_tile", workers), &tiles, |b, tiles| {
            b.iter(|| {
                tiles
                    .render_tile(black_box(TileAddress::new(0, 0, 0)), 800, ColourMapKind::FireGradient)
                    .unwrap()
            });
        });
    }

    // Near seahorse valley, where most pixels escape slowly.
    let tiles = TileController::new(config);
    group.bench_function("seahorse_valley_z6", |b| {
        b.iter(|| {
            tiles
                .render_tile(black_box(TileAddress::new(6, 19, 29)), 800, ColourMapKind::FireGradient)
                .unwrap()
        });
    });

    group.finish();
}

fn bench_write_png(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_png");
    let tiles = TileController::new(EngineConfig::default());

    for &kind in ColourMapKind::ALL {
        let raster = tiles.render_tile(TileAddress::new(2, 1, 1), 800, kind).unwrap();
        group.throughput(Throughput::Bytes(raster.buffer().len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", kind.slug()), &raster, |b, raster| {
            b.iter(|| {
                let mut sink = Vec::with_capacity(raster.buffer().len());
                write_png(black_box(raster), &mut sink).unwrap();
                sink
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_tile, bench_write_png);
criterion_main!(benches);
