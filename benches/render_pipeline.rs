use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_studio::core::colour_mapping::palette::builder::{PALETTE_TEXTURE_SIZE, build_palette};
use fractal_studio::core::data::palette_config::{Interpolation, PaletteConfig};
use fractal_studio::core::data::render_settings::Detail;
use fractal_studio::{
    ExportRequest, FractalRenderer, FrameSnapshot, NeverCancel, RenderQuality, RendererConfig,
};

fn bench_snapshot() -> FrameSnapshot {
    let mut snapshot = FrameSnapshot::default();
    snapshot.settings.iterations = 256;
    snapshot
}

fn bench_render_frame_256(c: &mut Criterion) {
    let mut renderer = FractalRenderer::new(RendererConfig::default()).unwrap();
    let snapshot = bench_snapshot();

    c.bench_function("render_frame_256", |b| {
        b.iter(|| {
            let frame = renderer
                .render_frame(&snapshot, 256, 256, RenderQuality::Full)
                .unwrap();
            black_box(frame.buffer_size());
        });
    });
}

fn bench_render_frame_256_detail_2(c: &mut Criterion) {
    let mut renderer = FractalRenderer::new(RendererConfig::default()).unwrap();
    let mut snapshot = bench_snapshot();
    snapshot.settings.detail = Detail::X2;

    c.bench_function("render_frame_256_detail_2", |b| {
        b.iter(|| {
            let frame = renderer
                .render_frame(&snapshot, 256, 256, RenderQuality::Full)
                .unwrap();
            black_box(frame.buffer_size());
        });
    });
}

fn bench_render_preview_512(c: &mut Criterion) {
    let mut renderer = FractalRenderer::new(RendererConfig::default()).unwrap();
    let snapshot = bench_snapshot();

    c.bench_function("render_preview_512", |b| {
        b.iter(|| {
            let frame = renderer
                .render_frame(&snapshot, 512, 512, RenderQuality::Preview)
                .unwrap();
            black_box(frame.buffer_size());
        });
    });
}

fn bench_export_512_tiles_128(c: &mut Criterion) {
    let mut renderer = FractalRenderer::new(RendererConfig::default()).unwrap();
    let snapshot = bench_snapshot();
    let request = ExportRequest {
        width: 512,
        height: 512,
        tile_size: 128,
    };

    c.bench_function("export_512_tiles_128", |b| {
        b.iter(|| {
            let outcome = renderer.export_image(&snapshot, request, |_| {}, &NeverCancel);
            black_box(outcome.is_completed());
        });
    });
}

fn bench_build_palette(c: &mut Criterion) {
    let config = PaletteConfig {
        interpolation: Interpolation::Perceptual,
        ..PaletteConfig::default()
    };

    c.bench_function("build_palette_perceptual", |b| {
        b.iter(|| black_box(build_palette(black_box(&config), PALETTE_TEXTURE_SIZE)));
    });
}

criterion_group!(
    benches,
    bench_render_frame_256,
    bench_render_frame_256_detail_2,
    bench_render_preview_512,
    bench_export_512_tiles_128,
    bench_build_palette
);
criterion_main!(benches);
