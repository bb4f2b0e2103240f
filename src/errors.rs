//! Error types with diagnostics using miette
//!
//! The geometry itself never fails: degenerate input yields empty output.
//! These errors exist for callers that want to reject bad settings before
//! they reach the engine (property panels, settings files).

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors reported when validating a pattern spec or snap configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(code(penframe::spec::invalid_number))]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("spacing must be positive, got {value}")]
    #[diagnostic(
        code(penframe::spec::non_positive_spacing),
        help("a pattern needs a spacing above zero to lay out its lattice")
    )]
    NonPositiveSpacing { value: f64 },

    #[error("unknown pattern family: {name}")]
    #[diagnostic(
        code(penframe::spec::unknown_family),
        help("expected one of: dots, diagonal, chevron, checkerboard, graph, plus, squiggle")
    )]
    UnknownFamily { name: String },

    #[error("release threshold {release} is tighter than entry threshold {entry}")]
    #[diagnostic(
        code(penframe::snap::inverted_thresholds),
        help("the release distance must be at least the entry distance or guides will flicker")
    )]
    InvertedThresholds { entry: f64, release: f64 },
}

impl SpecError {
    pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), SpecError> {
        crate::types::Mm::try_new(value)
            .map(|_| ())
            .map_err(|source| SpecError::InvalidNumber { field, source })
    }

    pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), SpecError> {
        crate::types::Mm::try_non_negative(value)
            .map(|_| ())
            .map_err(|source| SpecError::InvalidNumber { field, source })
    }

    pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), SpecError> {
        Self::check_non_negative(field, value)?;
        if value == 0.0 {
            return Err(SpecError::InvalidNumber { field, source: NumericError::Zero });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_positive_reports_field_and_cause() {
        assert_eq!(
            SpecError::check_positive("entry threshold", 0.0),
            Err(SpecError::InvalidNumber { field: "entry threshold", source: NumericError::Zero })
        );
        assert!(SpecError::check_positive("entry threshold", 8.0).is_ok());
    }

    #[test]
    fn display_names_the_field() {
        let err = SpecError::InvalidNumber { field: "margin", source: NumericError::Negative };
        assert_eq!(err.to_string(), "invalid margin: value is negative");
    }
}
