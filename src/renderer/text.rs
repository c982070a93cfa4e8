//! Scoreboard text
//!
//! Scores only ever show small integers, so each value is rasterized once
//! and cached as an RGBA image.

use std::collections::HashMap;

use image::Rgba;
use rusttype::{Font, Scale, point};

use crate::assets::Image;

/// Source of rendered score images
pub trait ScoreGlyphs {
    /// Image for `value`, or `None` if nothing could be drawn
    fn score(&mut self, value: u32) -> Option<&Image>;
}

/// Score images rendered with a TrueType font
pub struct ScoreText {
    font: Font<'static>,
    scale: Scale,
    color: [u8; 3],
    cache: HashMap<u32, Image>,
}

impl ScoreText {
    pub fn new(font: Font<'static>, size: f32, color: [u8; 3]) -> Self {
        Self {
            font,
            scale: Scale::uniform(size),
            color,
            cache: HashMap::new(),
        }
    }

    /// Rasterize `text` into a tight image; coverage becomes alpha
    fn rasterize(&self, text: &str) -> Option<Image> {
        let v_metrics = self.font.v_metrics(self.scale);
        let glyphs: Vec<_> = self
            .font
            .layout(text, self.scale, point(0.0, v_metrics.ascent))
            .collect();

        let text_width = glyphs.last().map_or(0.0, |g| {
            g.position().x + g.unpositioned().h_metrics().advance_width
        });
        let width = text_width.ceil() as u32;
        let height = (v_metrics.ascent - v_metrics.descent).ceil() as u32;
        if width == 0 || height == 0 {
            return None;
        }

        let [r, g, b] = self.color;
        let mut image = Image::from_pixel(width, height, Rgba([r, g, b, 0]));
        let mut drawn = false;
        for glyph in &glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                let pixel = image.get_pixel_mut(px as u32, py as u32);
                pixel[3] = pixel[3].max(alpha);
                drawn = true;
            });
        }

        drawn.then_some(image)
    }
}

impl ScoreGlyphs for ScoreText {
    fn score(&mut self, value: u32) -> Option<&Image> {
        if !self.cache.contains_key(&value) {
            let image = self.rasterize(&value.to_string())?;
            self.cache.insert(value, image);
        }
        self.cache.get(&value)
    }
}
