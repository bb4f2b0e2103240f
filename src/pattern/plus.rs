use glam::{DVec2, dvec2};

use super::{PatternField, PatternPrimitive, Synthesize};
use crate::defaults;
use crate::errors::SpecError;
use crate::geometry::Segment;
use crate::types::Mm;

/// A plus sign at every lattice cell whose center is in the frame.
///
/// `arm` is the half-length of each stroke. Arms are clipped, so a plus
/// straddling the inner border loses the part over the page interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlusGrid {
    pub arm: Mm,
}

impl Default for PlusGrid {
    fn default() -> Self {
        Self { arm: defaults::PLUS_ARM }
    }
}

impl Synthesize for PlusGrid {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let arm = field.px(self.arm);
        if arm.is_nan() || arm <= 0.0 {
            return Vec::new();
        }
        let (dx, dy) = (dvec2(arm, 0.0), dvec2(0.0, arm));

        let mut out = Vec::new();
        let centers = field.lattice().map(|(_, _, c)| c).filter(|&c| field.frame().contains_point(c));
        for c in centers.collect::<Vec<DVec2>>() {
            field.push_clipped(Segment::new(c - dx, c + dx), &mut out);
            field.push_clipped(Segment::new(c - dy, c + dy), &mut out);
        }
        out
    }

    fn validate_params(&self) -> Result<(), SpecError> {
        SpecError::check_positive("plus arm", self.arm.raw())
    }
}
