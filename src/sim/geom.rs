//! Axis-aligned rectangles for paddles, ball, player and buttons
//!
//! Screen coordinates: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w * 0.5, center.y - h * 0.5, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w * 0.5;
        self.y = center.y - self.h * 0.5;
    }

    pub fn set_center_x(&mut self, x: f32) {
        self.x = x - self.w * 0.5;
    }

    pub fn set_center_y(&mut self, y: f32) {
        self.y = y - self.h * 0.5;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Check if point is inside (right/bottom edges exclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check if two rectangles share interior area (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Keep the rectangle between two horizontal lines
    pub fn clamp_vertical(&mut self, top: f32, bottom: f32) {
        if self.y < top {
            self.y = top;
        }
        if self.bottom() > bottom {
            self.set_bottom(bottom);
        }
    }

    /// Keep the rectangle between two vertical lines
    pub fn clamp_horizontal(&mut self, left: f32, right: f32) {
        if self.x < left {
            self.x = left;
        }
        if self.right() > right {
            self.x = right - self.w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(50.0, 40.0)));
        assert!(!r.contains(Vec2::new(5.0, 40.0)));
        assert!(!r.contains(Vec2::new(50.0, 100.0)));
        // Right edge is exclusive
        assert!(!r.contains(Vec2::new(110.0, 40.0)));
    }

    #[test]
    fn test_overlaps_ignores_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_center_roundtrip() {
        let mut r = Rect::from_center(Vec2::new(500.0, 300.0), 20.0, 20.0);
        assert_eq!(r.x, 490.0);
        assert_eq!(r.center(), Vec2::new(500.0, 300.0));
        r.set_bottom(100.0);
        assert_eq!(r.bottom(), 100.0);
    }

    #[test]
    fn test_clamp() {
        let mut r = Rect::new(-5.0, 590.0, 10.0, 100.0);
        r.clamp_vertical(0.0, 600.0);
        assert_eq!(r.bottom(), 600.0);
        r.clamp_horizontal(0.0, 1000.0);
        assert_eq!(r.left(), 0.0);
    }
}
