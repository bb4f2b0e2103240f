//! Anchor resolution: which point of the dragged box snaps.

use glam::DVec2;

use crate::types::BoundingBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    Top,
    #[default]
    Center,
    Bottom,
}

/// The reference point on a bounding box used for alignment.
///
/// Chosen once when a drag starts and held for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorMode {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

/// Position along an axis split into thirds: 0 = first, 1 = middle, 2 = last.
fn band(pos: f64, start: f64, length: f64) -> u8 {
    let rel = (pos - start) / length;
    if rel < 1.0 / 3.0 {
        0
    } else if rel < 2.0 / 3.0 {
        1
    } else {
        2
    }
}

impl AnchorMode {
    pub fn new(horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Self {
        Self { horizontal, vertical }
    }

    /// Pick the anchor from where the pointer went down inside `bounds`.
    ///
    /// A box with no area (a point or a bare rule) always resolves to center/center.
    pub fn from_pointer(pointer: DVec2, bounds: &BoundingBox) -> Self {
        if bounds.is_zero_size() {
            return Self::default();
        }
        let horizontal = match band(pointer.x, bounds.left, bounds.width) {
            0 => HorizontalAnchor::Left,
            1 => HorizontalAnchor::Center,
            _ => HorizontalAnchor::Right,
        };
        let vertical = match band(pointer.y, bounds.top, bounds.height) {
            0 => VerticalAnchor::Top,
            1 => VerticalAnchor::Center,
            _ => VerticalAnchor::Bottom,
        };
        Self { horizontal, vertical }
    }

    /// Fraction of the width from the left edge to the horizontal anchor.
    pub fn x_fraction(self) -> f64 {
        match self.horizontal {
            HorizontalAnchor::Left => 0.0,
            HorizontalAnchor::Center => 0.5,
            HorizontalAnchor::Right => 1.0,
        }
    }

    /// Fraction of the height from the top edge to the vertical anchor.
    pub fn y_fraction(self) -> f64 {
        match self.vertical {
            VerticalAnchor::Top => 0.0,
            VerticalAnchor::Center => 0.5,
            VerticalAnchor::Bottom => 1.0,
        }
    }

    /// The anchor point of `bounds` under this mode.
    pub fn point(self, bounds: &BoundingBox) -> DVec2 {
        DVec2::new(
            bounds.left + bounds.width * self.x_fraction(),
            bounds.top + bounds.height * self.y_fraction(),
        )
    }
}
