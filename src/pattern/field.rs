//! The candidate field a synthesizer lays its geometry over.
//!
//! The field is the page's coverage box for the spec's rotation, centered
//! on the page, in render pixels. Candidates are generated across the
//! whole field and then filtered or clipped against the (unrotated) frame.

use glam::{DVec2, dvec2};

use super::{PatternPrimitive, PatternSpec};
use crate::defaults;
use crate::geometry::{BorderRegion, Segment, coverage_size};
use crate::types::{Mm, Scaler};

/// Upper bound on lattice cells or wave steps a single pattern may generate.
pub const MAX_FIELD_CELLS: usize = 2_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct PatternField {
    origin: DVec2,
    size: DVec2,
    spacing: f64,
    page_center: DVec2,
    frame: BorderRegion,
    scaler: Scaler,
}

impl PatternField {
    pub fn new(spec: &PatternSpec, scaler: &Scaler) -> Self {
        let page = scaler.point(spec.canvas_width, spec.canvas_height);
        let page_center = page * 0.5;
        let size = coverage_size(page.x.max(0.0), page.y.max(0.0), spec.rotation);
        Self {
            origin: page_center - size * 0.5,
            size,
            spacing: scaler.px(spec.spacing),
            page_center,
            frame: BorderRegion::new(page.x, page.y, scaler.px(spec.border_margin)),
            scaler: *scaler,
        }
    }

    /// Whether generation must short-circuit to zero primitives.
    pub fn is_degenerate(&self) -> bool {
        if self.frame.is_empty() || !(self.spacing.is_finite() && self.spacing > 0.0) {
            return true;
        }
        if !(self.size.is_finite() && self.origin.is_finite()) {
            return true;
        }
        let (cols, rows) = (self.count_along(self.size.x), self.count_along(self.size.y));
        cols.saturating_mul(rows) > MAX_FIELD_CELLS
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Lattice spacing in pixels.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn page_center(&self) -> DVec2 {
        self.page_center
    }

    pub fn frame(&self) -> &BorderRegion {
        &self.frame
    }

    /// Convert a family parameter to pixels.
    pub fn px(&self, length: Mm) -> f64 {
        self.scaler.px(length)
    }

    fn count_along(&self, length: f64) -> usize {
        (length / self.spacing).ceil().max(0.0) as usize
    }

    /// Column centerlines (x), half a step in from the field edge.
    pub fn columns(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count_along(self.size.x)).map(|i| self.origin.x + (i as f64 + 0.5) * self.spacing)
    }

    /// Row centerlines (y), half a step in from the field edge.
    pub fn rows(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count_along(self.size.y)).map(|j| self.origin.y + (j as f64 + 0.5) * self.spacing)
    }

    /// Cell centers of the square lattice with their (column, row) indices.
    pub fn lattice(&self) -> impl Iterator<Item = (usize, usize, DVec2)> + '_ {
        let cols: Vec<f64> = self.columns().collect();
        self.rows().enumerate().flat_map(move |(row, y)| {
            cols.clone().into_iter().enumerate().map(move |(col, x)| (col, row, dvec2(x, y)))
        })
    }

    /// Points from the left to the right edge of the field, `step` apart
    /// (the last step may be shorter). `None` if the step count is unreasonable.
    pub fn sweep_x(&self, step: f64) -> Option<Vec<f64>> {
        if !(step.is_finite() && step > 0.0) {
            return None;
        }
        let steps = (self.size.x / step).ceil().max(0.0) as usize;
        let rows = self.count_along(self.size.y);
        if steps.saturating_mul(rows) > MAX_FIELD_CELLS {
            return None;
        }
        let end = self.origin.x + self.size.x;
        Some((0..=steps).map(|i| (self.origin.x + i as f64 * step).min(end)).collect())
    }

    /// Clip `segment` to the frame and push the surviving pieces as lines.
    pub fn push_clipped(&self, segment: Segment, out: &mut Vec<PatternPrimitive>) {
        if segment.length() < defaults::MIN_SEGMENT_PX {
            return;
        }
        out.extend(self.frame.clip_segment(segment).into_iter().map(PatternPrimitive::Line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{DotGrid, PatternSpec};
    use crate::types::Angle;

    fn spec() -> PatternSpec {
        PatternSpec::new(DotGrid::default().into(), Mm(100.0), Mm(50.0)).with_spacing(Mm(10.0))
    }

    #[test]
    fn unrotated_field_is_the_page() {
        let field = PatternField::new(&spec(), &Scaler::default());
        assert_eq!(field.origin(), DVec2::ZERO);
        assert_eq!(field.size(), dvec2(300.0, 150.0));
        assert_eq!(field.spacing(), 30.0);
        assert_eq!(field.page_center(), dvec2(150.0, 75.0));
    }

    #[test]
    fn rotated_field_is_centered_and_oversized() {
        let field = PatternField::new(&spec().with_rotation(Angle(90.0)), &Scaler::default());
        assert!(field.size().abs_diff_eq(dvec2(150.0, 300.0), 1e-9));
        assert!((field.origin() + field.size() * 0.5).abs_diff_eq(field.page_center(), 1e-9));
    }

    #[test]
    fn lattice_is_cell_centered() {
        let field = PatternField::new(&spec(), &Scaler::default());
        let cells: Vec<_> = field.lattice().collect();
        assert_eq!(cells.len(), 10 * 5);
        assert_eq!(cells[0], (0, 0, dvec2(15.0, 15.0)));
        assert_eq!(cells[11], (1, 1, dvec2(45.0, 45.0)));
    }

    #[test]
    fn sweep_ends_on_field_edge() {
        let field = PatternField::new(&spec(), &Scaler::default());
        let xs = field.sweep_x(40.0).unwrap_or_default();
        assert_eq!(xs.first(), Some(&0.0));
        assert_eq!(xs.last(), Some(&300.0));
        assert_eq!(xs.len(), 9);
        assert_eq!(field.sweep_x(0.0), None);
    }

    #[test]
    fn zero_spacing_is_degenerate() {
        let field = PatternField::new(&spec().with_spacing(Mm(0.0)), &Scaler::default());
        assert!(field.is_degenerate());
    }
}
