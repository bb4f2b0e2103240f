use std::f64::consts::SQRT_2;

use glam::dvec2;

use super::{PatternField, PatternPrimitive, Synthesize};
use crate::geometry::Segment;

/// Parallel 45° lines ("/"), `spacing` apart measured perpendicular to the stripes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagonalStripe;

impl Synthesize for DiagonalStripe {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let (origin, size) = (field.origin(), field.size());
        // Each stripe is the line x' + y' = u in field-local coordinates.
        let step = field.spacing() * SQRT_2;
        let reach = size.x + size.y;

        let mut out = Vec::new();
        let mut k = 0usize;
        loop {
            let u = (k as f64 + 0.5) * step;
            if u >= reach {
                break;
            }
            let x0 = (u - size.y).max(0.0);
            let x1 = u.min(size.x);
            let stripe = Segment::new(origin + dvec2(x0, u - x0), origin + dvec2(x1, u - x1));
            field.push_clipped(stripe, &mut out);
            k += 1;
        }
        out
    }
}
