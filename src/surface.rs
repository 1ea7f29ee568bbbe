use image::RgbaImage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_rgba_array(color: [u8; 4]) -> Self {
        Self::rgba(color[0], color[1], color[2], color[3])
    }

    pub fn to_rgb_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Axis-aligned pixel rectangle. Width and height are never negative once
/// produced by [`Rect::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn right(self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}

/// The drawing operations the indicators need from a render target.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Restrict subsequent drawing to `clip`, or lift the restriction with `None`.
    fn set_clip(&mut self, clip: Option<Rect>);

    /// Draw the `src` region of `image` scaled into `dst`.
    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect);
}

/// Software render target backed by an RGBA buffer.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    image: RgbaImage,
    clip: Option<Rect>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, image::Rgba(fill.to_rgba_array())),
            clip: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from_rgba_array(self.image.get_pixel(x, y).0)
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn drawable(&self, rect: Rect) -> Option<Rect> {
        let bounds = Rect::from_size(self.image.width(), self.image.height());
        let rect = rect.intersect(bounds)?;
        match self.clip {
            Some(clip) => rect.intersect(clip),
            None => Some(rect),
        }
    }

    fn blend_at(&mut self, x: i32, y: i32, top: Rgba) {
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        let blended = blend_pixel(Rgba::from_rgba_array(px.0), top);
        px.0 = blended.to_rgba_array();
    }
}

impl Surface for PixelSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(area) = self.drawable(rect) else {
            return;
        };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.blend_at(x, y, color);
            }
        }
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect) {
        if src.is_empty() || dst.is_empty() {
            return;
        }
        let Some(area) = self.drawable(dst) else {
            return;
        };
        // Nearest-neighbour mapping from destination back into the source region.
        for y in area.y..area.bottom() {
            let sy = src.y as i64 + (y - dst.y) as i64 * src.height as i64 / dst.height as i64;
            if sy < 0 || sy >= image.height() as i64 {
                continue;
            }
            for x in area.x..area.right() {
                let sx = src.x as i64 + (x - dst.x) as i64 * src.width as i64 / dst.width as i64;
                if sx < 0 || sx >= image.width() as i64 {
                    continue;
                }
                let top = Rgba::from_rgba_array(image.get_pixel(sx as u32, sy as u32).0);
                if top.a == 0 {
                    continue;
                }
                self.blend_at(x, y, top);
            }
        }
    }
}

/// Source-over compositing of `top` onto `bottom`.
pub fn blend_pixel(bottom: Rgba, top: Rgba) -> Rgba {
    let sa = top.a as f32 / 255.0;
    let da = bottom.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a <= f32::EPSILON {
        return Rgba::TRANSPARENT;
    }

    let blend = |s: u8, d: u8| -> u8 {
        (((s as f32 * sa) + (d as f32 * da * (1.0 - sa))) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgba {
        r: blend(top.r, bottom.r),
        g: blend(top.g, bottom.g),
        b: blend(top.b, bottom.b),
        a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::{blend_pixel, PixelSurface, Rect, Rgba, Surface};
    use image::RgbaImage;

    #[test]
    fn half_transparent_pixel_blends_over_opaque_base() {
        let out = blend_pixel(Rgba::rgb(100, 100, 100), Rgba::rgba(200, 0, 0, 128));
        assert_eq!(out, Rgba::rgba(150, 50, 50, 255));
    }

    #[test]
    fn fill_respects_clip() {
        let mut surface = PixelSurface::new(4, 4, Rgba::BLACK);
        surface.set_clip(Some(Rect::new(0, 0, 2, 4)));
        surface.fill_rect(Rect::from_size(4, 4), Rgba::WHITE);

        assert_eq!(surface.pixel(1, 3), Rgba::WHITE);
        assert_eq!(surface.pixel(2, 0), Rgba::BLACK);
    }

    #[test]
    fn fill_outside_surface_is_ignored() {
        let mut surface = PixelSurface::new(2, 2, Rgba::BLACK);
        surface.fill_rect(Rect::new(5, 5, 3, 3), Rgba::WHITE);
        assert!(surface.as_raw().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn image_is_scaled_into_destination() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        source.put_pixel(1, 0, image::Rgba([0, 0, 255, 255]));

        let mut surface = PixelSurface::new(4, 2, Rgba::BLACK);
        surface.draw_image(&source, Rect::new(0, 0, 2, 1), Rect::new(0, 0, 4, 2));

        assert_eq!(surface.pixel(0, 1), Rgba::rgb(255, 0, 0));
        assert_eq!(surface.pixel(1, 0), Rgba::rgb(255, 0, 0));
        assert_eq!(surface.pixel(2, 0), Rgba::rgb(0, 0, 255));
        assert_eq!(surface.pixel(3, 1), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn transparent_source_pixels_leave_destination_untouched() {
        let source = RgbaImage::new(3, 3);
        let mut surface = PixelSurface::new(3, 3, Rgba::rgb(9, 8, 7));
        surface.draw_image(&source, Rect::new(0, 0, 3, 3), Rect::new(0, 0, 3, 3));
        assert_eq!(surface.pixel(1, 1), Rgba::rgb(9, 8, 7));
    }

    #[test]
    fn rect_intersection_handles_disjoint_rects() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersect(Rect::new(10, 0, 5, 5)), None);
        assert_eq!(
            a.intersect(Rect::new(5, -2, 10, 4)),
            Some(Rect::new(5, 0, 5, 2))
        );
    }
}
