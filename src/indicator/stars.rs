use super::art::StarArt;
use super::{Indicator, IndicatorLayout};
use crate::error::{ensure_range, ConfigError};
use crate::surface::{Rect, Rgba, Surface};
use image::imageops::FilterType;
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rejected positions tolerated for a single star before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    /// Top-left corner of the star's bounding box.
    pub x: i32,
    pub y: i32,
    pub variant: usize,
}

impl Star {
    pub fn distance_to(&self, x: i32, y: i32) -> f64 {
        let dx = (x - self.x) as f64;
        let dy = (y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Star sizes and spacing, all derived from the display height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGeometry {
    pub min_radius: u32,
    pub max_radius: u32,
    pub variants: usize,
    pub min_distance: f64,
}

impl StarGeometry {
    pub fn from_height(height: u32) -> Self {
        let min_radius = height / 60;
        let max_radius = height / 25;
        Self {
            min_radius,
            max_radius,
            variants: (max_radius - min_radius + 1) as usize,
            min_distance: max_radius as f64 * 2.5,
        }
    }

    /// Pixel side of the square raster for `variant`.
    pub fn side(&self, variant: usize) -> u32 {
        (2 * (self.min_radius + variant as u32)).max(1)
    }
}

/// A background of stars, one more revealed per counter step. Stars are
/// appended in reveal order and never move.
pub struct StarField<R = StdRng> {
    size: (u32, u32),
    value: i32,
    min_value: i32,
    max_value: i32,
    stars: Vec<Star>,
    geometry: StarGeometry,
    normal: Vec<RgbaImage>,
    shining: Vec<RgbaImage>,
    background: Rgba,
    rng: R,
}

impl StarField<StdRng> {
    pub fn new(
        min_value: i32,
        max_value: i32,
        size: (u32, u32),
        art: &StarArt,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(min_value, max_value, size, art, StdRng::from_entropy())
    }
}

impl<R: Rng> StarField<R> {
    pub fn with_rng(
        min_value: i32,
        max_value: i32,
        size: (u32, u32),
        art: &StarArt,
        rng: R,
    ) -> Result<Self, ConfigError> {
        ensure_range(min_value, max_value)?;

        let geometry = StarGeometry::from_height(size.1);
        let scaled = |source: &RgbaImage| -> Vec<RgbaImage> {
            (0..geometry.variants)
                .map(|variant| {
                    let side = geometry.side(variant);
                    image::imageops::resize(source, side, side, FilterType::Lanczos3)
                })
                .collect()
        };
        let normal = scaled(&art.normal);
        let shining = scaled(&art.shining);

        let mut field = Self {
            size,
            value: min_value,
            min_value,
            max_value,
            stars: Vec::new(),
            geometry,
            normal,
            shining,
            background: Rgba::BLACK,
            rng,
        };
        field.set_value(min_value);
        Ok(field)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn geometry(&self) -> StarGeometry {
        self.geometry
    }

    /// Every star placed so far, in reveal order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn visible_stars(&self) -> &[Star] {
        let count = (self.value.max(0) as usize).min(self.stars.len());
        &self.stars[..count]
    }

    pub fn goal_reached(&self) -> bool {
        self.value >= self.max_value
    }

    /// Place stars until `target` exist or a star cannot be fitted.
    fn place_missing(&mut self, target: usize) {
        let span = |extent: u32| -> i32 {
            (extent as i32 - 2 * self.geometry.max_radius as i32).max(1)
        };
        let (span_x, span_y) = (span(self.size.0), span(self.size.1));

        while self.stars.len() < target {
            let mut placed = None;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let x = self.rng.gen_range(0..span_x);
                let y = self.rng.gen_range(0..span_y);
                if self.is_far_enough(x, y) {
                    placed = Some((x, y));
                    break;
                }
            }
            let Some((x, y)) = placed else {
                tracing::debug!(
                    placed = self.stars.len(),
                    requested = target,
                    "star field saturated"
                );
                return;
            };
            let variant = self.rng.gen_range(0..self.geometry.variants);
            self.stars.push(Star { x, y, variant });
        }
    }

    fn is_far_enough(&self, x: i32, y: i32) -> bool {
        self.stars
            .iter()
            .all(|star| star.distance_to(x, y) >= self.geometry.min_distance)
    }
}

impl<R: Rng> Indicator for StarField<R> {
    fn set_value(&mut self, value: i32) {
        self.value = value;
        if value > 0 && self.stars.len() < value as usize {
            self.place_missing(value as usize);
        }
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn render(&self, surface: &mut dyn Surface, bounds: Rect) {
        surface.set_clip(Some(bounds));
        surface.fill_rect(bounds, self.background);

        let images = if self.goal_reached() {
            &self.shining
        } else {
            &self.normal
        };
        for star in self.visible_stars() {
            let image = &images[star.variant];
            let side = image.width() as i32;
            surface.draw_image(
                image,
                Rect::new(0, 0, side, side),
                Rect::new(bounds.x + star.x, bounds.y + star.y, side, side),
            );
        }
        surface.set_clip(None);
    }

    fn layout(&self) -> IndicatorLayout {
        IndicatorLayout::Background
    }
}
