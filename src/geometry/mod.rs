//! Plane geometry shared by the snap solver and the pattern synthesizers.
//!
//! All coordinates here are canvas pixels with Y pointing down.

mod clip;
mod coverage;
mod frame;

pub use clip::{Outcode, clip_segment};
pub use coverage::{coverage_size, rotate_about};
pub use frame::BorderRegion;

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::types::BoundingBox;

/// Axis-aligned rectangle given by its min (top-left) and max (bottom-right) corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min: min.min(max), max: min.max(max) }
    }

    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(dvec2(x, y), dvec2(x + w, y + h))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive containment: points on the boundary are inside.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Strict containment: points on the boundary are outside.
    pub fn contains_strict(&self, p: DVec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Shrink by `amount` on every side. Collapses to the center rather than inverting.
    pub fn inset(&self, amount: f64) -> Self {
        let half = dvec2(self.width(), self.height()) * 0.5;
        let d = dvec2(amount.min(half.x), amount.min(half.y));
        Self { min: self.min + d, max: self.max - d }
    }

    /// Area shared with `other`, zero when they only touch.
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let h = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }
}

impl From<BoundingBox> for Rect {
    fn from(bb: BoundingBox) -> Self {
        Rect::from_xywh(bb.left, bb.top, bb.width, bb.height)
    }
}

/// A directed line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(dvec2(x1, y1), dvec2(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.length() < defaults::MIN_SEGMENT_PX
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    pub fn at(&self, t: f64) -> DVec2 {
        self.start + (self.end - self.start) * t
    }

    /// Parameter of the projection of `p` onto this segment's line.
    pub fn param_of(&self, p: DVec2) -> f64 {
        let d = self.end - self.start;
        let len_sq = d.length_squared();
        if len_sq == 0.0 { 0.0 } else { (p - self.start).dot(d) / len_sq }
    }

    /// Shorten by `amount` at the end only. `None` if nothing would remain.
    pub fn trim_end(&self, amount: f64) -> Option<Segment> {
        let len = self.length();
        if amount <= 0.0 {
            return Some(*self);
        }
        if len <= amount {
            return None;
        }
        Some(Segment::new(self.start, self.at(1.0 - amount / len)))
    }

    /// Shorten by `amount` at the start only. `None` if nothing would remain.
    pub fn trim_start(&self, amount: f64) -> Option<Segment> {
        let len = self.length();
        if amount <= 0.0 {
            return Some(*self);
        }
        if len <= amount {
            return None;
        }
        Some(Segment::new(self.at(amount / len), self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new_orders_corners() {
        let r = Rect::new(dvec2(10.0, 0.0), dvec2(0.0, 5.0));
        assert_eq!(r.min, dvec2(0.0, 0.0));
        assert_eq!(r.max, dvec2(10.0, 5.0));
        assert_eq!(r.area(), 50.0);
    }

    #[test]
    fn rect_inset_collapses_instead_of_inverting() {
        let r = Rect::from_xywh(0.0, 0.0, 10.0, 4.0).inset(3.0);
        assert_eq!(r.min, dvec2(3.0, 2.0));
        assert_eq!(r.max, dvec2(7.0, 2.0));
        assert!(r.is_empty());
    }

    #[test]
    fn rect_containment_inclusive_vs_strict() {
        let r = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(dvec2(0.0, 5.0)));
        assert!(!r.contains_strict(dvec2(0.0, 5.0)));
        assert!(r.contains_strict(dvec2(5.0, 5.0)));
    }

    #[test]
    fn overlap_area_ignores_touching_edges() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        let c = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.overlap_area(&b), 0.0);
        assert_eq!(a.overlap_area(&c), 25.0);
    }

    #[test]
    fn segment_trim_ends() {
        let s = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.trim_end(2.0), Some(Segment::from_coords(0.0, 0.0, 8.0, 0.0)));
        assert_eq!(s.trim_start(2.0), Some(Segment::from_coords(2.0, 0.0, 10.0, 0.0)));
        assert_eq!(s.trim_end(12.0), None);
    }

    #[test]
    fn segment_param_of_projects_onto_line() {
        let s = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.param_of(dvec2(5.0, 3.0)), 0.5);
    }
}
