//! Live alignment guides for dragged objects.
//!
//! Runs once per pointer-move, synchronously, and must stay well inside
//! one animation frame: cost is linear in the number of scene objects.

mod anchor;
mod guide;
mod scene;
mod session;
mod solver;

pub use anchor::{AnchorMode, HorizontalAnchor, VerticalAnchor};
pub use guide::{DashPattern, Guide, GuideAxis, GuideKind, GuideStyle};
pub use scene::{ObjectId, Scene, SceneObject, SceneObjects};
pub use session::DragSession;
pub use solver::{AxisLock, DragFrame, SnapOutcome, SnapState, solve};

use crate::defaults;
use crate::errors::SpecError;

/// Snap tuning and toggles.
///
/// The entry/release thresholds are UX tuning, not correctness
/// requirements; only `release >= entry` is enforced by [`SnapConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapConfig {
    /// Distance (px) at which an unsnapped axis engages a guide.
    pub entry_threshold: f64,
    /// Distance (px) beyond which a snapped axis releases its page guide.
    pub release_threshold: f64,
    /// Apply the corrected position. Guides are reported either way.
    pub snap_enabled: bool,
    pub page_guides: bool,
    pub object_guides: bool,
    pub page_style: GuideStyle,
    pub object_style: GuideStyle,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            entry_threshold: defaults::ENTRY_THRESHOLD_PX,
            release_threshold: defaults::RELEASE_THRESHOLD_PX,
            snap_enabled: true,
            page_guides: true,
            object_guides: true,
            page_style: GuideStyle::page(),
            object_style: GuideStyle::object(),
        }
    }
}

impl SnapConfig {
    pub fn validate(&self) -> Result<(), SpecError> {
        SpecError::check_positive("entry threshold", self.entry_threshold)?;
        SpecError::check_positive("release threshold", self.release_threshold)?;
        if self.release_threshold < self.entry_threshold {
            return Err(SpecError::InvertedThresholds {
                entry: self.entry_threshold,
                release: self.release_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SnapConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let config = SnapConfig { entry_threshold: 12.0, release_threshold: 8.0, ..SnapConfig::default() };
        assert_eq!(
            config.validate(),
            Err(SpecError::InvertedThresholds { entry: 12.0, release: 8.0 })
        );
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let config = SnapConfig { entry_threshold: f64::NAN, ..SnapConfig::default() };
        assert_eq!(
            config.validate(),
            Err(SpecError::InvalidNumber { field: "entry threshold", source: NumericError::NaN })
        );
    }
}
