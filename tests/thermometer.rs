use fullscreen_counter::error::ConfigError;
use fullscreen_counter::indicator::{Indicator, Thermometer, ThermometerArt};
use fullscreen_counter::surface::{PixelSurface, Rect, Rgba};

#[path = "recording_surface.rs"]
mod recording_surface;
use recording_surface::{Op, RecordingSurface};

const BOUNDS: Rect = Rect {
    x: 0,
    y: 0,
    width: 300,
    height: 930,
};

fn thermometer(value: i32) -> Thermometer {
    let mut thermometer = Thermometer::new(0, 50, 930, &ThermometerArt::builtin()).unwrap();
    thermometer.set_value(value);
    thermometer
}

fn clips(ops: &[Op]) -> Vec<Option<Rect>> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Clip(clip) => Some(*clip),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_range_is_rejected() {
    let err = Thermometer::new(10, 5, 930, &ThermometerArt::builtin()).err();
    assert_eq!(
        err,
        Some(ConfigError::InvalidRange {
            min_value: 10,
            max_value: 5
        })
    );
}

#[test]
fn split_follows_the_counter() {
    for (value, split) in [(0, 790), (25, 465), (50, 140), (-10, 790), (70, 140)] {
        let mut surface = RecordingSurface::default();
        thermometer(value).render(&mut surface, BOUNDS);
        assert_eq!(
            clips(&surface.ops),
            vec![
                Some(BOUNDS),
                Some(Rect::new(0, 0, 300, split)),
                Some(Rect::new(0, split, 300, 930 - split)),
                None,
            ],
            "value {value}"
        );
    }
}

#[test]
fn both_layers_are_drawn_whole_into_the_same_rectangle() {
    let mut surface = RecordingSurface::default();
    thermometer(25).render(&mut surface, BOUNDS);
    let draws: Vec<&Op> = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Draw { .. }))
        .collect();
    assert_eq!(draws.len(), 2);
    for op in draws {
        assert_eq!(
            *op,
            Op::Draw {
                size: (300, 930),
                src: BOUNDS,
                dst: BOUNDS,
            }
        );
    }
}

#[test]
fn opaque_mode_fills_the_bounds_first() {
    let mut thermometer = thermometer(0);
    thermometer.set_background(Rgba::rgb(10, 20, 30));
    let mut surface = RecordingSurface::default();
    thermometer.render(&mut surface, BOUNDS);
    assert_eq!(surface.ops[0], Op::Clip(Some(BOUNDS)));
    assert_eq!(surface.ops[1], Op::Fill(BOUNDS, Rgba::rgb(10, 20, 30)));
}

#[test]
fn transparent_mode_skips_the_fill() {
    let mut thermometer = thermometer(0);
    thermometer.set_opaque(false);
    let mut surface = RecordingSurface::default();
    thermometer.render(&mut surface, BOUNDS);
    assert!(!surface.ops.iter().any(|op| matches!(op, Op::Fill(..))));
}

#[test]
fn vessel_is_centered_in_wider_bounds() {
    let mut surface = RecordingSurface::default();
    thermometer(50).render(&mut surface, Rect::new(0, 0, 500, 930));
    assert!(surface.ops.contains(&Op::Draw {
        size: (300, 930),
        src: BOUNDS,
        dst: Rect::new(100, 0, 300, 930),
    }));
}

#[test]
fn rendering_is_idempotent() {
    let thermometer = thermometer(30);
    let mut first = PixelSurface::new(300, 930, Rgba::BLACK);
    let mut second = PixelSurface::new(300, 930, Rgba::BLACK);
    thermometer.render(&mut first, BOUNDS);
    thermometer.render(&mut second, BOUNDS);
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn background_color_shows_around_the_vessel() {
    let mut thermometer = thermometer(10);
    thermometer.set_background(Rgba::rgb(0, 200, 0));
    let mut surface = PixelSurface::new(500, 930, Rgba::BLACK);
    thermometer.render(&mut surface, Rect::new(0, 0, 500, 930));
    assert_eq!(surface.pixel(5, 465), Rgba::rgb(0, 200, 0));
    assert_eq!(surface.pixel(495, 465), Rgba::rgb(0, 200, 0));
}
