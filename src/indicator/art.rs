//! Source rasters for the indicators.
//!
//! The bundled art is drawn procedurally at load time so the reference
//! scanlines of the thermometer are exact. Custom PNG art can replace it via
//! [`ArtSettings`].

use crate::settings::ArtSettings;
use anyhow::{bail, Context};
use image::RgbaImage;
use std::path::Path;

/// Scanline where the liquid reaches the goal mark in the bundled art.
pub const GOAL_LINE: u32 = 140;
/// Scanline where the liquid starts (bottom of the fillable tube).
pub const EMPTY_LINE: u32 = 790;

pub const THERMOMETER_SOURCE_SIZE: (u32, u32) = (300, 930);
pub const STAR_SOURCE_SIZE: u32 = 128;

const TUBE_X: f32 = 150.0;
const TUBE_TOP: f32 = 100.0;
const TUBE_BOTTOM: f32 = 800.0;
const TUBE_OUTER: f32 = 40.0;
const TUBE_INNER: f32 = 28.0;
const BULB_Y: f32 = 845.0;
const BULB_OUTER: f32 = 75.0;
const BULB_INNER: f32 = 62.0;
const TICK_COUNT: u32 = 10;

const GLASS: [u8; 3] = [60, 62, 72];
const EMPTY_FILL: [u8; 3] = [232, 238, 244];
const LIQUID: [u8; 3] = [214, 32, 40];
const TICK: [u8; 3] = [200, 200, 210];
const GOAL_TICK: [u8; 3] = [255, 200, 40];

const STAR_NORMAL: [u8; 3] = [205, 210, 225];
const STAR_SHINING: [u8; 3] = [255, 214, 64];

/// The two thermometer rasters plus the scanlines that bound the fillable
/// region, in source pixel coordinates.
#[derive(Debug, Clone)]
pub struct ThermometerArt {
    pub empty: RgbaImage,
    pub reached: RgbaImage,
    pub goal_line: u32,
    pub empty_line: u32,
}

impl ThermometerArt {
    pub fn builtin() -> Self {
        Self {
            empty: draw_thermometer(false),
            reached: draw_thermometer(true),
            goal_line: GOAL_LINE,
            empty_line: EMPTY_LINE,
        }
    }

    pub fn from_settings(settings: &ArtSettings) -> anyhow::Result<Self> {
        let art = match (&settings.thermometer_empty, &settings.thermometer_reached) {
            (None, None) => return Ok(Self::builtin()),
            (Some(empty), Some(reached)) => Self {
                empty: load_png(empty)?,
                reached: load_png(reached)?,
                goal_line: settings.thermometer_goal_line,
                empty_line: settings.thermometer_empty_line,
            },
            _ => bail!("thermometer art needs both the empty and the reached image"),
        };
        art.validate()?;
        tracing::info!(
            width = art.empty.width(),
            height = art.empty.height(),
            "loaded custom thermometer art"
        );
        Ok(art)
    }

    pub fn source_size(&self) -> (u32, u32) {
        self.empty.dimensions()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.empty.dimensions() != self.reached.dimensions() {
            bail!(
                "thermometer images differ in size: {:?} vs {:?}",
                self.empty.dimensions(),
                self.reached.dimensions()
            );
        }
        let (width, height) = self.source_size();
        if width == 0 || height == 0 {
            bail!("thermometer art is empty");
        }
        if self.goal_line >= self.empty_line || self.empty_line > height {
            bail!(
                "thermometer reference lines must satisfy goal ({}) < empty ({}) <= height ({height})",
                self.goal_line,
                self.empty_line
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct StarArt {
    pub normal: RgbaImage,
    pub shining: RgbaImage,
}

impl StarArt {
    pub fn builtin() -> Self {
        Self {
            normal: draw_star(STAR_NORMAL, false),
            shining: draw_star(STAR_SHINING, true),
        }
    }

    pub fn from_settings(settings: &ArtSettings) -> anyhow::Result<Self> {
        match (&settings.star_normal, &settings.star_shining) {
            (None, None) => Ok(Self::builtin()),
            (Some(normal), Some(shining)) => Ok(Self {
                normal: load_png(normal)?,
                shining: load_png(shining)?,
            }),
            _ => bail!("star art needs both the normal and the shining image"),
        }
    }
}

fn load_png(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("load art {}", path.display()))?;
    Ok(img.to_rgba8())
}

fn coverage(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}

fn mix(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    [lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2])]
}

/// Signed distance from `(x, y)` to the vertical capsule of the tube.
fn tube_distance(x: f32, y: f32, radius: f32) -> f32 {
    let cy = y.clamp(TUBE_TOP, TUBE_BOTTOM);
    ((x - TUBE_X).powi(2) + (y - cy).powi(2)).sqrt() - radius
}

fn bulb_distance(x: f32, y: f32, radius: f32) -> f32 {
    ((x - TUBE_X).powi(2) + (y - BULB_Y).powi(2)).sqrt() - radius
}

fn tick_color(x: u32, y: u32) -> Option<[u8; 3]> {
    if !(195..225).contains(&x) {
        return None;
    }
    let step = (EMPTY_LINE - GOAL_LINE) / TICK_COUNT;
    let offset = y.checked_sub(GOAL_LINE)?;
    if y > EMPTY_LINE || offset % step > 2 {
        return None;
    }
    if offset < 3 {
        Some(GOAL_TICK)
    } else {
        Some(TICK)
    }
}

fn draw_thermometer(filled: bool) -> RgbaImage {
    let (width, height) = THERMOMETER_SOURCE_SIZE;
    let fill = if filled { LIQUID } else { EMPTY_FILL };
    RgbaImage::from_fn(width, height, |x, y| {
        if let Some(color) = tick_color(x, y) {
            return image::Rgba([color[0], color[1], color[2], 255]);
        }
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let outer = tube_distance(fx, fy, TUBE_OUTER).min(bulb_distance(fx, fy, BULB_OUTER));
        let inner = tube_distance(fx, fy, TUBE_INNER).min(bulb_distance(fx, fy, BULB_INNER));
        let alpha = coverage(outer);
        if alpha <= 0.0 {
            return image::Rgba([0, 0, 0, 0]);
        }
        let c = mix(GLASS, fill, coverage(inner));
        image::Rgba([c[0], c[1], c[2], (alpha * 255.0).round() as u8])
    })
}

fn star_polygon() -> [(f32, f32); 10] {
    let center = STAR_SOURCE_SIZE as f32 / 2.0;
    let outer = center * 0.94;
    let inner = outer * 0.4;
    let mut points = [(0.0, 0.0); 10];
    for (i, point) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        *point = (center + radius * angle.cos(), center + radius * angle.sin());
    }
    points
}

fn inside_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn draw_star(color: [u8; 3], glow: bool) -> RgbaImage {
    const SAMPLES: u32 = 4;
    let points = star_polygon();
    let center = STAR_SOURCE_SIZE as f32 / 2.0;
    RgbaImage::from_fn(STAR_SOURCE_SIZE, STAR_SOURCE_SIZE, |x, y| {
        let mut hits = 0;
        for sy in 0..SAMPLES {
            for sx in 0..SAMPLES {
                let px = x as f32 + (sx as f32 + 0.5) / SAMPLES as f32;
                let py = y as f32 + (sy as f32 + 0.5) / SAMPLES as f32;
                if inside_polygon(&points, px, py) {
                    hits += 1;
                }
            }
        }
        let mut alpha = hits as f32 / (SAMPLES * SAMPLES) as f32;
        if glow {
            let d = ((x as f32 + 0.5 - center).powi(2) + (y as f32 + 0.5 - center).powi(2)).sqrt();
            let halo = (1.0 - d / center).clamp(0.0, 1.0) * 0.45;
            alpha = alpha.max(halo);
        }
        image::Rgba([color[0], color[1], color[2], (alpha * 255.0).round() as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_thermometer_matches_reference_geometry() {
        let art = ThermometerArt::builtin();
        assert_eq!(art.source_size(), THERMOMETER_SOURCE_SIZE);
        assert_eq!(art.goal_line, 140);
        assert_eq!(art.empty_line, 790);
        art.validate().unwrap();
    }

    #[test]
    fn layers_differ_only_inside_the_vessel() {
        let art = ThermometerArt::builtin();
        let center_x = TUBE_X as u32;
        assert_ne!(
            art.empty.get_pixel(center_x, 500),
            art.reached.get_pixel(center_x, 500)
        );
        assert_eq!(art.empty.get_pixel(5, 5), art.reached.get_pixel(5, 5));
        assert_eq!(art.empty.get_pixel(5, 5).0[3], 0);
    }

    #[test]
    fn star_center_is_opaque_and_corner_transparent() {
        let art = StarArt::builtin();
        let mid = STAR_SOURCE_SIZE / 2;
        assert_eq!(art.normal.get_pixel(mid, mid).0[3], 255);
        assert_eq!(art.normal.get_pixel(0, 0).0[3], 0);
        assert_ne!(art.normal.get_pixel(mid, mid), art.shining.get_pixel(mid, mid));
    }

    #[test]
    fn half_configured_art_is_rejected() {
        let settings = ArtSettings {
            star_normal: Some("normal.png".into()),
            ..ArtSettings::default()
        };
        assert!(StarArt::from_settings(&settings).is_err());
    }

    #[test]
    fn missing_art_file_reports_path() {
        let settings = ArtSettings {
            thermometer_empty: Some("does/not/exist-empty.png".into()),
            thermometer_reached: Some("does/not/exist-reached.png".into()),
            ..ArtSettings::default()
        };
        let err = ThermometerArt::from_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("exist-empty.png"));
    }

    #[test]
    fn reference_lines_out_of_order_fail_validation() {
        let mut art = ThermometerArt::builtin();
        art.goal_line = 800;
        assert!(art.validate().is_err());
    }
}
