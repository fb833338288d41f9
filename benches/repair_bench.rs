use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, RgbaImage};
use wkimage::{build_args, cleanup_output, ImageOptions, OutputFormat};

fn sample_png() -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, y| {
        image::Rgba([x as u8 * 4, y as u8 * 4, 128, 255])
    }));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

fn bench_repair(c: &mut Criterion) {
    let png = sample_png();

    let clean = png.clone();
    c.bench_function("repair_clean_png", |b| {
        b.iter(|| cleanup_output(black_box(clean.clone()), OutputFormat::Png))
    });

    let mut noisy = b"Loading page (1/2)\n".to_vec();
    noisy.extend_from_slice(&png);
    c.bench_function("repair_noisy_png", |b| {
        b.iter(|| cleanup_output(black_box(noisy.clone()), OutputFormat::Png))
    });
}

fn bench_args(c: &mut Criterion) {
    let options = ImageOptions {
        input: "http://example.com".to_string(),
        width: 1024,
        height: 768,
        quality: 94,
        ..Default::default()
    };
    c.bench_function("build_args", |b| {
        b.iter(|| build_args(black_box(&options)).unwrap())
    });
}

criterion_group!(benches, bench_repair, bench_args);
criterion_main!(benches);
