use criterion::{criterion_group, criterion_main, Criterion};
use fullscreen_counter::indicator::{Indicator, StarArt, StarField};
use fullscreen_counter::surface::{PixelSurface, Rect, Rgba};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_star_field(c: &mut Criterion) {
    let art = StarArt::builtin();
    c.bench_function("place_100_stars_1080p", |b| {
        b.iter(|| {
            let mut field =
                StarField::with_rng(0, 100, (1920, 1080), &art, StdRng::seed_from_u64(3)).unwrap();
            field.set_value(100);
            field.stars().len()
        })
    });

    let mut field = StarField::with_rng(0, 100, (1920, 1080), &art, StdRng::seed_from_u64(3)).unwrap();
    field.set_value(60);
    c.bench_function("render_star_field_1080p", |b| {
        b.iter(|| {
            let mut surface = PixelSurface::new(1920, 1080, Rgba::BLACK);
            field.render(&mut surface, Rect::from_size(1920, 1080));
            surface
        })
    });
}

criterion_group!(benches, bench_star_field);
criterion_main!(benches);
