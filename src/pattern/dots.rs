use super::{PatternField, PatternPrimitive, Synthesize};
use crate::defaults;
use crate::errors::SpecError;
use crate::types::Mm;

/// A circle at every lattice cell whose center falls in the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGrid {
    pub radius: Mm,
}

impl Default for DotGrid {
    fn default() -> Self {
        Self { radius: defaults::DOT_RADIUS }
    }
}

impl Synthesize for DotGrid {
    fn synthesize(&self, field: &PatternField) -> Vec<PatternPrimitive> {
        let radius = field.px(self.radius).max(0.0);
        field
            .lattice()
            .filter(|&(_, _, center)| field.frame().contains_point(center))
            .map(|(_, _, center)| PatternPrimitive::Dot { center, radius })
            .collect()
    }

    fn validate_params(&self) -> Result<(), SpecError> {
        SpecError::check_non_negative("dot radius", self.radius.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{PatternSpec, assert_in_frame};
    use crate::types::Scaler;
    use glam::dvec2;

    #[test]
    fn dots_only_land_in_the_frame() {
        let spec = PatternSpec::new(DotGrid::default().into(), Mm(100.0), Mm(100.0))
            .with_margin(Mm(20.0))
            .with_spacing(Mm(10.0));
        let field = PatternField::new(&spec, &Scaler::default());
        let dots = DotGrid::default().synthesize(&field);

        // 10x10 lattice; the inner 6x6 (centers 75..225 px) is page interior.
        assert_eq!(dots.len(), 100 - 36);
        assert_in_frame(field.frame(), &dots);
        assert_eq!(dots[0], PatternPrimitive::Dot { center: dvec2(15.0, 15.0), radius: 1.5 });
    }

    #[test]
    fn negative_radius_fails_validation() {
        let dots = DotGrid { radius: Mm(-0.1) };
        assert!(dots.validate_params().is_err());
    }
}
