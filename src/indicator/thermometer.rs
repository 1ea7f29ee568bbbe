use super::art::ThermometerArt;
use super::{Indicator, IndicatorLayout};
use crate::error::{ensure_range, ConfigError};
use crate::surface::{Rect, Rgba, Surface};
use image::imageops::FilterType;
use image::RgbaImage;

/// Goal thermometer: an "empty" and a "reached" vessel layered on top of each
/// other and split at the liquid line.
pub struct Thermometer {
    value: i32,
    min_value: i32,
    max_value: i32,
    source_size: (u32, u32),
    goal_line: u32,
    empty_line: u32,
    desired_size: (u32, u32),
    empty: RgbaImage,
    reached: RgbaImage,
    background: Rgba,
    opaque: bool,
}

impl Thermometer {
    pub fn new(
        min_value: i32,
        max_value: i32,
        height: u32,
        art: &ThermometerArt,
    ) -> Result<Self, ConfigError> {
        ensure_range(min_value, max_value)?;

        let source_size = art.source_size();
        let width = (source_size.0 as f64 * (height as f64 / source_size.1 as f64)) as u32;
        let desired_size = (width, height);

        // Scaled once; render only clips and copies.
        let empty = scale(&art.empty, desired_size);
        let reached = scale(&art.reached, desired_size);

        Ok(Self {
            value: min_value,
            min_value,
            max_value,
            source_size,
            goal_line: art.goal_line,
            empty_line: art.empty_line,
            desired_size,
            empty,
            reached,
            background: Rgba::BLACK,
            opaque: true,
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn desired_size(&self) -> (u32, u32) {
        self.desired_size
    }

    pub fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
    }

    pub fn fraction(&self) -> f64 {
        fill_fraction(self.value, self.min_value, self.max_value)
    }

    /// Destination rectangle of the vessel inside `bounds`.
    pub fn placement(&self, bounds: Rect) -> Rect {
        fit_within(self.desired_size, self.source_size, bounds)
    }

    /// Row (relative to the top of the placed vessel) where the "reached" art
    /// starts.
    pub fn split_row(&self, placed_height: i32) -> i32 {
        split_row(
            self.fraction(),
            placed_height,
            self.goal_line,
            self.empty_line,
            self.source_size.1,
        )
    }
}

fn scale(image: &RgbaImage, size: (u32, u32)) -> RgbaImage {
    image::imageops::resize(image, size.0.max(1), size.1.max(1), FilterType::Lanczos3)
}

/// Position of `value` within `[min_value, max_value]`, clamped to `[0, 1]`.
pub fn fill_fraction(value: i32, min_value: i32, max_value: i32) -> f64 {
    let p = (value as f64 - min_value as f64) / (max_value as f64 - min_value as f64);
    p.clamp(0.0, 1.0)
}

/// Fit `desired` into `bounds` keeping the source aspect ratio, shrinking but
/// never enlarging, and center the result.
pub fn fit_within(desired: (u32, u32), source: (u32, u32), bounds: Rect) -> Rect {
    let aspect = source.0 as f64 / source.1 as f64;
    let mut dw = desired.0 as i32;
    let mut dh = desired.1 as i32;
    if dw > bounds.width {
        dw = bounds.width;
        dh = (dw as f64 / aspect) as i32;
    }
    if dh > bounds.height {
        dh = bounds.height;
        dw = (dh as f64 * aspect) as i32;
    }
    let dx = bounds.x + (bounds.width - dw) / 2;
    let dy = bounds.y + (bounds.height - dh) / 2;
    Rect::new(dx, dy, dw, dh)
}

/// Interpolate the liquid line between the empty and goal scanlines and map
/// it onto a vessel `placed_height` pixels tall.
pub fn split_row(
    fraction: f64,
    placed_height: i32,
    goal_line: u32,
    empty_line: u32,
    source_height: u32,
) -> i32 {
    let empty = empty_line as f64;
    let line = empty - fraction * (empty - goal_line as f64);
    let split = (line * placed_height as f64 / source_height as f64).round() as i32;
    split.clamp(0, placed_height.max(0))
}

impl Indicator for Thermometer {
    fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn render(&self, surface: &mut dyn Surface, bounds: Rect) {
        if self.opaque {
            surface.set_clip(Some(bounds));
            surface.fill_rect(bounds, self.background);
        }

        let dest = self.placement(bounds);
        if dest.is_empty() {
            surface.set_clip(None);
            return;
        }
        let src = Rect::from_size(self.desired_size.0, self.desired_size.1);
        let split = self.split_row(dest.height);

        if split > 0 {
            surface.set_clip(Some(Rect::new(dest.x, dest.y, dest.width, split)));
            surface.draw_image(&self.empty, src, dest);
        }
        if split < dest.height {
            surface.set_clip(Some(Rect::new(
                dest.x,
                dest.y + split,
                dest.width,
                dest.height - split,
            )));
            surface.draw_image(&self.reached, src, dest);
        }
        surface.set_clip(None);
    }

    fn layout(&self) -> IndicatorLayout {
        IndicatorLayout::Column {
            width: self.desired_size.0,
        }
    }
}
