//! Transient alignment guides handed back to the host for drawing.

use std::fmt;

use crate::defaults;
use crate::types::Color;

/// Orientation of a guide line.
///
/// A vertical guide marks an x coordinate; a horizontal guide marks a y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAxis {
    Vertical,
    Horizontal,
}

/// What a guide aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideKind {
    /// Page edge, third or center.
    Page,
    /// Another object's matching anchor.
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

impl DashPattern {
    pub fn new(dash: f64, gap: f64) -> Self {
        Self { dash, gap }
    }

    /// SVG/canvas `stroke-dasharray` form.
    pub fn to_dasharray(self) -> [f64; 2] {
        [self.dash, self.gap]
    }
}

/// Color and dash for one kind of guide.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideStyle {
    pub color: Color,
    pub dash: DashPattern,
}

impl GuideStyle {
    pub fn page() -> Self {
        let (r, g, b) = defaults::PAGE_GUIDE_RGB;
        let (dash, gap) = defaults::PAGE_GUIDE_DASH;
        Self { color: Color::Rgb(r, g, b), dash: DashPattern::new(dash, gap) }
    }

    pub fn object() -> Self {
        let (r, g, b) = defaults::OBJECT_GUIDE_RGB;
        let (dash, gap) = defaults::OBJECT_GUIDE_DASH;
        Self { color: Color::Rgb(r, g, b), dash: DashPattern::new(dash, gap) }
    }
}

/// A guide line at a canvas position. Recomputed on every move, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub axis: GuideAxis,
    pub position: f64,
    pub label: Option<&'static str>,
    pub kind: GuideKind,
    pub color: Color,
    pub dash: DashPattern,
}

impl Guide {
    pub fn new(axis: GuideAxis, position: f64, kind: GuideKind, style: &GuideStyle) -> Self {
        Self {
            axis,
            position,
            label: None,
            kind,
            color: style.color.clone(),
            dash: style.dash,
        }
    }

    pub fn with_label(mut self, label: Option<&'static str>) -> Self {
        self.label = label;
        self
    }
}

impl fmt::Display for Guide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            GuideAxis::Vertical => "vertical",
            GuideAxis::Horizontal => "horizontal",
        };
        let kind = match self.kind {
            GuideKind::Page => "page",
            GuideKind::Object => "object",
        };
        write!(f, "{axis} {kind} guide at {:.1}", self.position)?;
        if let Some(label) = self.label {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}
