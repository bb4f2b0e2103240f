//! Property edits on a generated pattern.

use super::{PatternFamily, PatternGroup};
use crate::types::{Angle, Color, Mm};

/// One edit to a pattern's spec.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternUpdate {
    Spacing(Mm),
    Margin(Mm),
    Rotation(Angle),
    Family(PatternFamily),
    CanvasSize { width: Mm, height: Mm },
    StrokeWidth(Mm),
    StrokeColor(Color),
}

/// How an edit reaches the primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Only presentation changes; primitives are kept as they are.
    Patch,
    /// Geometry depends on the edit; primitives are rebuilt from the spec.
    Regenerate,
}

impl PatternUpdate {
    pub fn refresh(&self) -> Refresh {
        match self {
            PatternUpdate::StrokeWidth(_) | PatternUpdate::StrokeColor(_) => Refresh::Patch,
            _ => Refresh::Regenerate,
        }
    }
}

impl PatternGroup {
    /// Apply `update` to the spec, regenerating primitives if the edit needs it.
    pub fn apply(&mut self, update: PatternUpdate) -> Refresh {
        let refresh = update.refresh();
        let spec = &mut self.spec;
        match update {
            PatternUpdate::Spacing(spacing) => spec.spacing = spacing,
            PatternUpdate::Margin(margin) => spec.border_margin = margin,
            PatternUpdate::Rotation(rotation) => spec.rotation = rotation,
            PatternUpdate::Family(family) => spec.family = family,
            PatternUpdate::CanvasSize { width, height } => {
                spec.canvas_width = width;
                spec.canvas_height = height;
            }
            PatternUpdate::StrokeWidth(width) => spec.stroke_width = width,
            PatternUpdate::StrokeColor(color) => spec.stroke_color = color,
        }
        if refresh == Refresh::Regenerate {
            *self = self.spec.generate_with(&self.scaler);
        }
        refresh
    }
}
