use glam::dvec2;

use super::{PatternField, PatternPrimitive, Synthesize};
use crate::geometry::Segment;

/// Full-length horizontal and vertical rules, one per lattice column and row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphGrid;

impl Synthesize for GraphGrid {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let (origin, far) = (field.origin(), field.origin() + field.size());
        let mut out = Vec::new();
        for x in field.columns() {
            field.push_clipped(Segment::new(dvec2(x, origin.y), dvec2(x, far.y)), &mut out);
        }
        for y in field.rows() {
            field.push_clipped(Segment::new(dvec2(origin.x, y), dvec2(far.x, y)), &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{PatternSpec, assert_in_frame};
    use crate::types::{Mm, Scaler};

    fn field() -> PatternField {
        let spec = PatternSpec::new(GraphGrid.into(), Mm(100.0), Mm(100.0))
            .with_margin(Mm(20.0))
            .with_spacing(Mm(10.0));
        PatternField::new(&spec, &Scaler::default())
    }

    #[test]
    fn rules_in_the_side_strips_are_one_stroke() {
        let field = field();
        let out = GraphGrid.synthesize(&field);
        assert_eq!(out[0], PatternPrimitive::Line(Segment::from_coords(15.0, 0.0, 15.0, 300.0)));
    }

    #[test]
    fn rules_across_the_interior_split() {
        let field = field();
        let out = GraphGrid.synthesize(&field);
        // Per axis: 4 rules inside a side strip, 6 crossing the interior in two pieces.
        assert_eq!(out.len(), 2 * (4 + 6 * 2));
        assert_in_frame(field.frame(), &out);
        assert!(out.contains(&PatternPrimitive::Line(Segment::from_coords(75.0, 0.0, 75.0, 60.0))));
        assert!(out.contains(&PatternPrimitive::Line(Segment::from_coords(75.0, 240.0, 75.0, 300.0))));
    }
}
