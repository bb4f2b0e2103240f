//! Cohen–Sutherland segment clipping against an axis-aligned rectangle.
//!
//! Every line a pattern emits passes through here, so this is what keeps
//! pen strokes out of the page interior and off the paper edge.

use glam::{DVec2, dvec2};

use super::{Rect, Segment};

/// Region code of a point relative to a rectangle (Y-down: top is `min.y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const TOP: Outcode = Outcode(4);
    pub const BOTTOM: Outcode = Outcode(8);

    pub fn of(p: DVec2, rect: &Rect) -> Outcode {
        let mut code = 0;
        if p.x < rect.min.x {
            code |= Self::LEFT.0;
        } else if p.x > rect.max.x {
            code |= Self::RIGHT.0;
        }
        if p.y < rect.min.y {
            code |= Self::TOP.0;
        } else if p.y > rect.max.y {
            code |= Self::BOTTOM.0;
        }
        Outcode(code)
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn has(self, flag: Outcode) -> bool {
        self.0 & flag.0 != 0
    }

    fn shares_side_with(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

/// Clip `segment` to `rect`.
///
/// Returns the portion inside the rectangle (boundary inclusive), keeping
/// the input's direction, or `None` when no part of it is inside.
pub fn clip_segment(segment: Segment, rect: &Rect) -> Option<Segment> {
    let (mut p0, mut p1) = (segment.start, segment.end);
    let mut code0 = Outcode::of(p0, rect);
    let mut code1 = Outcode::of(p1, rect);

    loop {
        if code0.is_inside() && code1.is_inside() {
            return Some(Segment::new(p0, p1));
        }
        if code0.shares_side_with(code1) {
            return None;
        }

        // At least one endpoint is outside; move it onto the boundary it violates.
        // The other endpoint lies on the far side of that boundary, so the
        // corresponding delta is never zero here.
        let outside = if code0.is_inside() { code1 } else { code0 };
        let d = p1 - p0;
        let p = if outside.has(Outcode::TOP) {
            dvec2(p0.x + d.x * (rect.min.y - p0.y) / d.y, rect.min.y)
        } else if outside.has(Outcode::BOTTOM) {
            dvec2(p0.x + d.x * (rect.max.y - p0.y) / d.y, rect.max.y)
        } else if outside.has(Outcode::RIGHT) {
            dvec2(rect.max.x, p0.y + d.y * (rect.max.x - p0.x) / d.x)
        } else {
            dvec2(rect.min.x, p0.y + d.y * (rect.min.x - p0.x) / d.x)
        };

        if outside == code0 {
            p0 = p;
            code0 = Outcode::of(p0, rect);
        } else {
            p1 = p;
            code1 = Outcode::of(p1, rect);
        }
    }
}
