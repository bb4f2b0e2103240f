use glam::DVec2;

use super::{PatternField, PatternPrimitive, Synthesize};

/// Squares on alternate lattice cells, kept whole when their center is in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Checkerboard;

impl Synthesize for Checkerboard {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let size = field.spacing();
        let half = DVec2::splat(size / 2.0);
        field
            .lattice()
            .filter(|&(col, row, center)| (col + row) % 2 == 0 && field.frame().contains_point(center))
            .map(|(_, _, center)| PatternPrimitive::Square { origin: center - half, size })
            .collect()
    }
}
