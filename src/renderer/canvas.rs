//! Software canvas
//!
//! The whole frame is drawn into a fixed-size `RgbaImage` on the CPU, then
//! handed to the GPU in one texture upload.

use image::{Rgba, RgbaImage, imageops};

use crate::assets::Image;
use crate::sim::Rect;

/// Fixed-size RGBA8 frame buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    /// Fill the whole canvas with one color
    pub fn clear(&mut self, color: [u8; 4]) {
        for px in self.buffer.pixels_mut() {
            *px = Rgba(color);
        }
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let block = RgbaImage::from_pixel(rect.w as u32, rect.h as u32, Rgba(color));
        imageops::replace(&mut self.buffer, &block, i64::from(rect.x), i64::from(rect.y));
    }

    /// Set a single pixel; off-canvas points are ignored
    pub fn draw_point(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        self.buffer.put_pixel(x as u32, y as u32, Rgba(color));
    }

    /// Alpha-blend an image with its top-left corner at (x, y), clipped
    pub fn draw_image(&mut self, image: &Image, x: i32, y: i32) {
        imageops::overlay(&mut self.buffer, image, i64::from(x), i64::from(y));
    }

    /// Image drawn at the origin at its natural size
    pub fn draw_fullscreen_image(&mut self, image: &Image) {
        self.draw_image(image, 0, 0);
    }
}
