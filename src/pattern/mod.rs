//! Frame-fill pattern synthesis.
//!
//! Each family lays candidate geometry over an oversized field, keeps or
//! clips it against the border frame, and returns a flat list of
//! plottable primitives (lines, dots, square outlines). The result is one
//! group that the caller rotates as a unit about the page center.

mod checkerboard;
mod chevron;
mod diagonal;
mod dots;
mod field;
mod graph;
mod plus;
mod squiggle;
mod update;

pub use checkerboard::Checkerboard;
pub use chevron::Chevron;
pub use diagonal::DiagonalStripe;
pub use dots::DotGrid;
pub use field::{MAX_FIELD_CELLS, PatternField};
pub use graph::GraphGrid;
pub use plus::PlusGrid;
pub use squiggle::Squiggle;
pub use update::{PatternUpdate, Refresh};

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use crate::defaults;
use crate::errors::SpecError;
use crate::geometry::{Rect, Segment, clip_segment, rotate_about};
use crate::page::PageSize;
use crate::types::{Angle, BoundingBox, Color, Mm, Scaler};

/// One plottable piece of a pattern, in render pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternPrimitive {
    /// Always lies inside one frame strip (clipped).
    Line(Segment),
    /// Center lies inside the frame (placement-filtered).
    Dot { center: DVec2, radius: f64 },
    /// Square outline with its top-left corner at `origin`; center lies
    /// inside the frame (placement-filtered, never clipped).
    Square { origin: DVec2, size: f64 },
}

/// Generates a family's primitives over a field.
#[enum_dispatch]
pub trait Synthesize {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive>;

    /// Check the family's own parameters.
    fn validate_params(&self) -> Result<(), SpecError> {
        Ok(())
    }
}

/// The closed set of pattern families, each carrying only the parameters it needs.
#[enum_dispatch(Synthesize)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternFamily {
    DotGrid(DotGrid),
    DiagonalStripe(DiagonalStripe),
    Chevron(Chevron),
    Checkerboard(Checkerboard),
    GraphGrid(GraphGrid),
    PlusGrid(PlusGrid),
    Squiggle(Squiggle),
}

impl PatternFamily {
    pub const NAMES: [&'static str; 7] = ["dots", "diagonal", "chevron", "checkerboard", "graph", "plus", "squiggle"];

    pub fn name(&self) -> &'static str {
        match self {
            PatternFamily::DotGrid(_) => "dots",
            PatternFamily::DiagonalStripe(_) => "diagonal",
            PatternFamily::Chevron(_) => "chevron",
            PatternFamily::Checkerboard(_) => "checkerboard",
            PatternFamily::GraphGrid(_) => "graph",
            PatternFamily::PlusGrid(_) => "plus",
            PatternFamily::Squiggle(_) => "squiggle",
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a family name into that family with default parameters.
impl FromStr for PatternFamily {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = match s.trim().to_ascii_lowercase().as_str() {
            "dots" | "dot-grid" => DotGrid::default().into(),
            "diagonal" | "stripes" => DiagonalStripe.into(),
            "chevron" => Chevron::default().into(),
            "checkerboard" => Checkerboard.into(),
            "graph" | "grid" => GraphGrid.into(),
            "plus" => PlusGrid::default().into(),
            "squiggle" | "wave" => Squiggle::default().into(),
            _ => return Err(SpecError::UnknownFamily { name: s.to_string() }),
        };
        Ok(family)
    }
}

/// Everything needed to (re)generate a pattern. Lengths in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSpec {
    pub family: PatternFamily,
    pub canvas_width: Mm,
    pub canvas_height: Mm,
    pub border_margin: Mm,
    pub spacing: Mm,
    pub stroke_width: Mm,
    pub stroke_color: Color,
    pub rotation: Angle,
}

impl PatternSpec {
    pub fn new(family: PatternFamily, canvas_width: Mm, canvas_height: Mm) -> Self {
        Self {
            family,
            canvas_width,
            canvas_height,
            border_margin: defaults::FRAME_MARGIN,
            spacing: defaults::SPACING,
            stroke_width: defaults::STROKE_WIDTH,
            stroke_color: Color::black(),
            rotation: Angle::ZERO,
        }
    }

    pub fn for_page(family: PatternFamily, page: PageSize) -> Self {
        Self::new(family, page.width, page.height)
    }

    pub fn with_margin(mut self, margin: Mm) -> Self {
        self.border_margin = margin;
        self
    }

    pub fn with_spacing(mut self, spacing: Mm) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stroke(mut self, width: Mm, color: Color) -> Self {
        self.stroke_width = width;
        self.stroke_color = color;
        self
    }

    pub fn with_rotation(mut self, rotation: Angle) -> Self {
        self.rotation = rotation;
        self
    }

    /// Reject specs a property panel should not accept.
    ///
    /// Generation itself never fails; an invalid spec just yields no primitives.
    pub fn validate(&self) -> Result<(), SpecError> {
        SpecError::check_non_negative("canvas width", self.canvas_width.raw())?;
        SpecError::check_non_negative("canvas height", self.canvas_height.raw())?;
        SpecError::check_non_negative("border margin", self.border_margin.raw())?;
        SpecError::check_finite("spacing", self.spacing.raw())?;
        if self.spacing.raw() <= 0.0 {
            return Err(SpecError::NonPositiveSpacing { value: self.spacing.raw() });
        }
        SpecError::check_non_negative("stroke width", self.stroke_width.raw())?;
        SpecError::check_finite("rotation", self.rotation.degrees())?;
        self.family.validate_params()
    }

    /// Generate at the editor's default scale.
    pub fn generate(&self) -> PatternGroup {
        self.generate_with(&Scaler::default())
    }

    pub fn generate_with(&self, scaler: &Scaler) -> PatternGroup {
        let field = PatternField::new(self, scaler);
        let primitives = if field.is_degenerate() {
            crate::log::warn!(
                family = self.family.name(),
                width = self.canvas_width.raw(),
                height = self.canvas_height.raw(),
                spacing = self.spacing.raw(),
                "degenerate pattern spec, emitting nothing"
            );
            Vec::new()
        } else {
            self.family.synthesize(&field)
        };

        crate::log::debug!(
            family = self.family.name(),
            field_w = field.size().x,
            field_h = field.size().y,
            count = primitives.len(),
            "pattern generated"
        );

        PatternGroup {
            spec: self.clone(),
            primitives,
            center: field.page_center(),
            scaler: *scaler,
        }
    }
}

/// A generated pattern: its primitives plus the spec that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternGroup {
    pub spec: PatternSpec,
    /// Unrotated primitives in render pixels.
    pub primitives: Vec<PatternPrimitive>,
    /// Page center in render pixels; the group rotates about this point.
    pub center: DVec2,
    pub scaler: Scaler,
}

impl PatternGroup {
    pub fn rotation(&self) -> Angle {
        self.spec.rotation
    }

    pub fn stroke_width_px(&self) -> f64 {
        self.scaler.px(self.spec.stroke_width)
    }

    pub fn stroke_color(&self) -> &Color {
        &self.spec.stroke_color
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    fn rotate(&self, p: DVec2) -> DVec2 {
        let angle = self.rotation();
        if angle.is_zero() { p } else { rotate_about(p, self.center, angle) }
    }

    /// The four rotated edges of a square primitive.
    fn outline(&self, origin: DVec2, size: f64) -> [Segment; 4] {
        let corners = [origin, origin + dvec2(size, 0.0), origin + dvec2(size, size), origin + dvec2(0.0, size)]
            .map(|c| self.rotate(c));
        std::array::from_fn(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
    }

    /// Primitives with the group rotation applied about the page center.
    ///
    /// Squares become their four outline segments, since a rotated square
    /// is no longer axis-aligned. Rotated output can reach past the page
    /// edge; use [`PatternGroup::clip_to_safe_area`] before plotting.
    pub fn flatten(&self) -> Vec<PatternPrimitive> {
        let mut out = Vec::with_capacity(self.primitives.len());
        for primitive in &self.primitives {
            match *primitive {
                PatternPrimitive::Line(s) => {
                    out.push(PatternPrimitive::Line(Segment::new(self.rotate(s.start), self.rotate(s.end))))
                }
                PatternPrimitive::Dot { center, radius } => {
                    out.push(PatternPrimitive::Dot { center: self.rotate(center), radius })
                }
                PatternPrimitive::Square { origin, size } => {
                    out.extend(self.outline(origin, size).map(PatternPrimitive::Line))
                }
            }
        }
        out
    }

    /// Bounding box of the flattened (rotated) output, `None` when empty.
    pub fn extent(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.primitives.iter().flat_map(|p| match *p {
            PatternPrimitive::Line(s) => vec![self.rotate(s.start), self.rotate(s.end)],
            PatternPrimitive::Dot { center, radius } => {
                let (center, r) = (self.rotate(center), DVec2::splat(radius));
                vec![center - r, center + r]
            }
            PatternPrimitive::Square { origin, size } => self.outline(origin, size).map(|s| s.start).to_vec(),
        }))
    }

    /// Rotated output restricted to `safe_area`, ready for the plotter.
    ///
    /// Lines and square outlines are clipped; dots must fit entirely inside.
    pub fn clip_to_safe_area(&self, safe_area: &Rect) -> Vec<PatternPrimitive> {
        let clip = |s: Segment| {
            clip_segment(s, safe_area)
                .filter(|s| !s.is_degenerate())
                .map(PatternPrimitive::Line)
        };
        let mut out = Vec::with_capacity(self.primitives.len());
        for primitive in &self.primitives {
            match *primitive {
                PatternPrimitive::Line(s) => {
                    out.extend(clip(Segment::new(self.rotate(s.start), self.rotate(s.end))))
                }
                PatternPrimitive::Dot { center, radius } => {
                    let center = self.rotate(center);
                    let r = DVec2::splat(radius);
                    if safe_area.contains(center - r) && safe_area.contains(center + r) {
                        out.push(PatternPrimitive::Dot { center, radius });
                    }
                }
                PatternPrimitive::Square { origin, size } => {
                    out.extend(self.outline(origin, size).into_iter().filter_map(clip))
                }
            }
        }
        out
    }
}

/// Assert every primitive sits in the frame, allowing for float noise on strip edges.
#[cfg(test)]
pub(crate) fn assert_in_frame(frame: &crate::geometry::BorderRegion, primitives: &[PatternPrimitive]) {
    const EPS: f64 = 1e-6;
    let inside = |p: DVec2| {
        let (outer, inner) = (frame.outer(), frame.inner());
        let in_outer = p.x >= outer.min.x - EPS
            && p.x <= outer.max.x + EPS
            && p.y >= outer.min.y - EPS
            && p.y <= outer.max.y + EPS;
        let in_inner = p.x > inner.min.x + EPS
            && p.x < inner.max.x - EPS
            && p.y > inner.min.y + EPS
            && p.y < inner.max.y - EPS;
        in_outer && !in_inner
    };
    for primitive in primitives {
        match *primitive {
            PatternPrimitive::Line(s) => {
                assert!(inside(s.start) && inside(s.end) && inside(s.at(0.5)), "line escapes frame: {s:?}")
            }
            PatternPrimitive::Dot { center, .. } => assert!(inside(center), "dot outside frame: {center}"),
            PatternPrimitive::Square { origin, size } => {
                let center = origin + DVec2::splat(size * 0.5);
                assert!(inside(center), "square outside frame: {center}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Orientation, PaperSize};
    use crate::types::NumericError;

    fn square_page(family: PatternFamily) -> PatternSpec {
        PatternSpec::new(family, Mm(100.0), Mm(100.0)).with_margin(Mm(20.0)).with_spacing(Mm(5.0))
    }

    #[test]
    fn family_names_round_trip() {
        for name in PatternFamily::NAMES {
            let family: PatternFamily = name.parse().unwrap();
            assert_eq!(family.name(), name);
        }
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert_eq!(
            "hexagon".parse::<PatternFamily>(),
            Err(SpecError::UnknownFamily { name: "hexagon".to_string() })
        );
    }

    #[test]
    fn validate_rejects_zero_spacing() {
        let spec = square_page(DiagonalStripe.into()).with_spacing(Mm(0.0));
        assert_eq!(spec.validate(), Err(SpecError::NonPositiveSpacing { value: 0.0 }));
    }

    #[test]
    fn validate_rejects_negative_margin() {
        let spec = square_page(DiagonalStripe.into()).with_margin(Mm(-1.0));
        assert_eq!(
            spec.validate(),
            Err(SpecError::InvalidNumber { field: "border margin", source: NumericError::Negative })
        );
    }

    #[test]
    fn degenerate_specs_emit_nothing() {
        let zero_page = PatternSpec::new(GraphGrid.into(), Mm(0.0), Mm(0.0));
        assert!(zero_page.generate().is_empty());
        let negative = PatternSpec::new(GraphGrid.into(), Mm(-10.0), Mm(50.0));
        assert!(negative.generate().is_empty());
        let no_spacing = square_page(GraphGrid.into()).with_spacing(Mm(-2.0));
        assert!(no_spacing.generate().is_empty());
    }

    #[test]
    fn every_family_fills_an_a4_frame() {
        for name in PatternFamily::NAMES {
            let family: PatternFamily = name.parse().unwrap();
            let spec = PatternSpec::for_page(family, PageSize::from_paper(PaperSize::A4, Orientation::Portrait));
            let group = spec.generate();
            assert!(!group.is_empty(), "{name} produced no primitives");
        }
    }

    #[test]
    fn group_is_anchored_at_page_center() {
        let group = square_page(DotGrid::default().into()).generate();
        assert_eq!(group.center, dvec2(150.0, 150.0));
    }

    #[test]
    fn flatten_turns_squares_into_outlines() {
        let group = square_page(Checkerboard.into()).generate();
        let squares = group.primitives.iter().filter(|p| matches!(p, PatternPrimitive::Square { .. })).count();
        let flat = group.flatten();
        assert_eq!(flat.len(), squares * 4);
        assert!(flat.iter().all(|p| matches!(p, PatternPrimitive::Line(_))));
    }

    #[test]
    fn safe_area_clip_keeps_pen_off_the_edge() {
        let page = PageSize::custom(Mm(100.0), Mm(100.0));
        let group = square_page(GraphGrid.into()).generate();
        let safe = page.default_safe_area(&group.scaler);
        let clipped = group.clip_to_safe_area(&safe);
        assert!(!clipped.is_empty());
        for p in clipped {
            if let PatternPrimitive::Line(s) = p {
                assert!(safe.contains(s.start) && safe.contains(s.end));
            }
        }
    }

    #[test]
    fn rotated_squares_are_clipped_as_outlines() {
        let page = PageSize::custom(Mm(100.0), Mm(100.0));
        let group = square_page(Checkerboard.into()).with_rotation(Angle(30.0)).generate();
        let safe = page.default_safe_area(&group.scaler);
        let clipped = group.clip_to_safe_area(&safe);
        assert!(!clipped.is_empty());
        assert!(clipped.len() < group.flatten().len());
        for p in clipped {
            let PatternPrimitive::Line(s) = p else { panic!("expected only outline strokes, got {p:?}") };
            assert!(safe.contains(s.start) && safe.contains(s.end));
        }
    }

    #[test]
    fn extent_matches_flattened_output() {
        let group = square_page(Checkerboard.into()).with_rotation(Angle(45.0)).generate();
        let flat = group.flatten();
        let expected = BoundingBox::enclosing(flat.iter().flat_map(|p| match *p {
            PatternPrimitive::Line(s) => vec![s.start, s.end],
            _ => Vec::new(),
        }));
        assert_eq!(group.extent(), expected);
    }
}
