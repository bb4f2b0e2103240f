use glam::{DVec2, dvec2};

use super::{PatternField, PatternPrimitive, Synthesize};
use crate::defaults;
use crate::errors::SpecError;
use crate::geometry::Segment;
use crate::types::Mm;

/// Rows of "V" zigzags, one row per `spacing`, each V `spacing` wide and
/// half as deep.
///
/// A non-zero `gap` holds both arms back from the bottom vertex, leaving a
/// `gap`-wide break at the point of every V.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chevron {
    pub gap: Mm,
}

impl Default for Chevron {
    fn default() -> Self {
        Self { gap: defaults::CHEVRON_GAP }
    }
}

impl Chevron {
    /// Zigzag vertices for the row whose upper points sit at `top`.
    fn row(field: &PatternField, top: f64) -> Vec<DVec2> {
        let half = field.spacing() / 2.0;
        let depth = field.spacing() / 2.0;
        let (origin, size) = (field.origin(), field.size());
        let count = (size.x / half).ceil() as usize;
        (0..=count)
            .map(|i| {
                let y = if i % 2 == 0 { top } else { top + depth };
                dvec2(origin.x + i as f64 * half, y)
            })
            .collect()
    }
}

impl Synthesize for Chevron {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let withheld = field.px(self.gap).max(0.0) / 2.0;
        let quarter = field.spacing() / 4.0;

        let mut out = Vec::new();
        for band in field.rows() {
            let points = Self::row(field, band - quarter);
            for (i, pair) in points.windows(2).enumerate() {
                let arm = Segment::new(pair[0], pair[1]);
                // Even arms descend into a vertex, odd arms climb out of one.
                let trimmed = if i % 2 == 0 { arm.trim_end(withheld) } else { arm.trim_start(withheld) };
                if let Some(arm) = trimmed {
                    field.push_clipped(arm, &mut out);
                }
            }
        }
        out
    }

    fn validate_params(&self) -> Result<(), SpecError> {
        SpecError::check_non_negative("chevron gap", self.gap.raw())
    }
}
