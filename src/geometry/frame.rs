//! The border frame: the "donut" between the page edge and an inner
//! rectangle inset by the margin, tiled by four non-overlapping strips.
//!
//! ```text
//! +-------------------------+
//! |           top           |
//! +----+---------------+----+
//! |left|    (inner)    |rght|
//! +----+---------------+----+
//! |         bottom          |
//! +-------------------------+
//! ```
//!
//! Top and bottom strips span the full page width; left and right strips
//! only span the height between them, so no two strips share area.

use glam::{DVec2, dvec2};

use super::clip::clip_segment;
use super::{Rect, Segment};
use crate::defaults;

#[derive(Debug, Clone, PartialEq)]
pub struct BorderRegion {
    outer: Rect,
    inner: Rect,
    strips: Vec<Rect>,
}

impl BorderRegion {
    /// Build the frame for a page of `width` × `height` with the given margin.
    ///
    /// Non-positive page dimensions or margin give a frame with no strips.
    /// A margin of at least half the short side makes the whole page frame.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        let outer = Rect::new(DVec2::ZERO, dvec2(width.max(0.0), height.max(0.0)));
        if !(width > 0.0 && height > 0.0 && margin > 0.0) {
            return Self { outer, inner: outer, strips: Vec::new() };
        }

        let mx = margin.min(width / 2.0);
        let my = margin.min(height / 2.0);
        let inner = Rect::new(dvec2(mx, my), dvec2(width - mx, height - my));

        let strips = [
            Rect::new(dvec2(0.0, 0.0), dvec2(width, my)),
            Rect::new(dvec2(0.0, height - my), dvec2(width, height)),
            Rect::new(dvec2(0.0, my), dvec2(mx, height - my)),
            Rect::new(dvec2(width - mx, my), dvec2(width, height - my)),
        ]
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect();

        Self { outer, inner, strips }
    }

    pub fn outer(&self) -> &Rect {
        &self.outer
    }

    pub fn inner(&self) -> &Rect {
        &self.inner
    }

    /// Non-empty strips in top, bottom, left, right order.
    pub fn strips(&self) -> &[Rect] {
        &self.strips
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Total frame area, the page area minus the inner rectangle.
    pub fn area(&self) -> f64 {
        self.strips.iter().map(Rect::area).sum()
    }

    /// Whether `p` lies in the frame: inside the page and not strictly
    /// inside the inner rectangle. Used to place discrete primitives by
    /// their logical center.
    pub fn contains_point(&self, p: DVec2) -> bool {
        !self.is_empty() && self.outer.contains(p) && !self.inner.contains_strict(p)
    }

    /// Clip a segment against every strip and return the union of the pieces.
    ///
    /// The frame is not convex, so one line may yield several pieces (a
    /// horizontal line through the page crosses both side strips). Pieces
    /// that touch or overlap along the line, such as a diagonal passing
    /// from the top strip into the left strip at a corner, are stitched
    /// back into one continuous stroke.
    pub fn clip_segment(&self, segment: Segment) -> Vec<Segment> {
        // Clipping keeps direction, so each piece's start has the lower parameter.
        let mut spans: Vec<(f64, f64, Segment)> = self
            .strips
            .iter()
            .filter_map(|strip| clip_segment(segment, strip))
            .filter(|piece| !piece.is_degenerate())
            .map(|piece| (segment.param_of(piece.start), segment.param_of(piece.end), piece))
            .collect();

        spans.sort_by(|a, b| a.0.total_cmp(&b.0));

        let tolerance = defaults::MIN_SEGMENT_PX / segment.length().max(1.0);
        let mut merged: Vec<(f64, f64, Segment)> = Vec::with_capacity(spans.len());
        for (lo, hi, piece) in spans {
            match merged.last_mut() {
                Some(last) if lo <= last.1 + tolerance => {
                    if hi > last.1 {
                        last.1 = hi;
                        last.2.end = piece.end;
                    }
                }
                _ => merged.push((lo, hi, piece)),
            }
        }

        merged.into_iter().map(|(_, _, stroke)| stroke).collect()
    }
}
