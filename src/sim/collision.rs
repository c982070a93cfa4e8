//! Axis-aligned collision detection
//!
//! Everything in Pong is a box, so a single strict AABB test covers
//! ball-vs-paddle hits.

use glam::IVec2;

/// Axis-aligned rectangle in screen pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a top-left position and a size
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True iff the rectangles share a positive-area region.
    ///
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.bottom() <= other.top() {
            return false;
        }
        if self.top() >= other.bottom() {
            return false;
        }
        if self.right() <= other.left() {
            return false;
        }
        if self.left() >= other.right() {
            return false;
        }
        true
    }
}
