//! Paper sizes and the plottable safe area.

use crate::defaults;
use crate::geometry::Rect;
use crate::types::{Mm, Scaler};

/// Supported paper sizes (portrait dimensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    BusinessCard,
    A6,
    A5,
    A4,
    A3,
    Envelope(EnvelopeSize),
}

/// Standard envelope sizes, in their printing orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeSize {
    C7,
    C7_6,
    Dl,
    C6,
    C5,
    C4,
}

impl PaperSize {
    /// Width and height in millimetres.
    pub fn dimensions(self) -> (Mm, Mm) {
        let (w, h) = match self {
            PaperSize::BusinessCard => (85.0, 55.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::Envelope(env) => match env {
                EnvelopeSize::C7 => (81.0, 114.0),
                EnvelopeSize::C7_6 => (81.0, 162.0),
                EnvelopeSize::Dl => (220.0, 110.0),
                EnvelopeSize::C6 => (162.0, 114.0),
                EnvelopeSize::C5 => (229.0, 162.0),
                EnvelopeSize::C4 => (324.0, 229.0),
            },
        };
        (Mm(w), Mm(h))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: Mm,
    pub height: Mm,
}

impl Default for PageSize {
    fn default() -> Self {
        Self::from_paper(PaperSize::A4, Orientation::Portrait)
    }
}

impl PageSize {
    pub fn custom(width: Mm, height: Mm) -> Self {
        Self { width, height }
    }

    /// Landscape swaps the paper's width and height.
    pub fn from_paper(paper: PaperSize, orientation: Orientation) -> Self {
        let (w, h) = paper.dimensions();
        match orientation {
            Orientation::Portrait => Self { width: w, height: h },
            Orientation::Landscape => Self { width: h, height: w },
        }
    }

    pub fn to_canvas(self, scaler: &Scaler) -> CanvasSize {
        CanvasSize { width: scaler.px(self.width), height: scaler.px(self.height) }
    }

    /// The region the pen may touch: the page inset by `margin` on all sides, in px.
    pub fn safe_area(self, margin: Mm, scaler: &Scaler) -> Rect {
        let canvas = self.to_canvas(scaler);
        Rect::from_xywh(0.0, 0.0, canvas.width.max(0.0), canvas.height.max(0.0))
            .inset(scaler.px(margin.max(Mm::ZERO)))
    }

    /// Safe area with the default safety margin.
    pub fn default_safe_area(self, scaler: &Scaler) -> Rect {
        self.safe_area(defaults::SAFETY_MARGIN, scaler)
    }
}

/// Canvas dimensions in pixels, as seen by the snap solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn landscape_swaps_dimensions() {
        let page = PageSize::from_paper(PaperSize::A5, Orientation::Landscape);
        assert_eq!(page, PageSize::custom(Mm(210.0), Mm(148.0)));
    }

    #[test]
    fn a4_canvas_at_default_scale() {
        let canvas = PageSize::default().to_canvas(&Scaler::default());
        assert_eq!(canvas, CanvasSize::new(630.0, 891.0));
    }

    #[test]
    fn dl_envelope_is_landscape_by_default() {
        let (w, h) = PaperSize::Envelope(EnvelopeSize::Dl).dimensions();
        assert!(w > h);
    }

    #[test]
    fn safe_area_insets_by_margin() {
        let page = PageSize::custom(Mm(100.0), Mm(50.0));
        let area = page.default_safe_area(&Scaler::default());
        assert_eq!(area.min, dvec2(9.0, 9.0));
        assert_eq!(area.max, dvec2(291.0, 141.0));
    }
}
