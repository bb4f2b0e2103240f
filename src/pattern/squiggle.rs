use std::f64::consts::TAU;

use glam::dvec2;

use super::{PatternField, PatternPrimitive, Synthesize};
use crate::defaults;
use crate::errors::SpecError;
use crate::geometry::Segment;
use crate::types::Mm;

/// One sine wave per row, one period per `spacing`, drawn as short chords
/// `step` apart. Each chord is clipped on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Squiggle {
    pub amplitude: Mm,
    pub step: Mm,
}

impl Default for Squiggle {
    fn default() -> Self {
        Self { amplitude: defaults::SQUIGGLE_AMPLITUDE, step: defaults::SQUIGGLE_STEP }
    }
}

impl Synthesize for Squiggle {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let Some(xs) = field.sweep_x(field.px(self.step)) else {
            crate::log::warn!(step = self.step.raw(), "squiggle step unusable, emitting nothing");
            return Vec::new();
        };
        let amplitude = field.px(self.amplitude);
        let (left, period) = (field.origin().x, field.spacing());
        let wave = |x: f64, base: f64| dvec2(x, base + amplitude * (TAU * (x - left) / period).sin());

        let mut out = Vec::new();
        for base in field.rows() {
            for pair in xs.windows(2) {
                let chord = Segment::new(wave(pair[0], base), wave(pair[1], base));
                field.push_clipped(chord, &mut out);
            }
        }
        out
    }

    fn validate_params(&self) -> Result<(), SpecError> {
        SpecError::check_non_negative("squiggle amplitude", self.amplitude.raw())?;
        SpecError::check_positive("squiggle step", self.step.raw())
    }
}
