use fullscreen_counter::surface::{Rect, Rgba, Surface};
use image::RgbaImage;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Rect, Rgba),
    Clip(Option<Rect>),
    Draw { size: (u32, u32), src: Rect, dst: Rect },
}

/// Records drawing calls instead of touching pixels.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        self.ops.push(Op::Clip(clip));
    }

    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect) {
        self.ops.push(Op::Draw {
            size: image.dimensions(),
            src,
            dst,
        });
    }
}
