//! Default sizes and tuned constants.
//!
//! Lengths are in millimetres unless the name says `_PX`.

use crate::types::Mm;

/// Editor canvas scale.
pub const PX_PER_MM: f64 = 3.0;

/// Distance (px) at which an unsnapped axis engages a guide.
pub const ENTRY_THRESHOLD_PX: f64 = 8.0;
/// Distance (px) beyond which a snapped axis lets go of its guide.
pub const RELEASE_THRESHOLD_PX: f64 = 12.0;

pub const PAGE_GUIDE_RGB: (u8, u8, u8) = (255, 64, 129);
pub const OBJECT_GUIDE_RGB: (u8, u8, u8) = (0, 188, 212);
pub const PAGE_GUIDE_DASH: (f64, f64) = (5.0, 5.0);
pub const OBJECT_GUIDE_DASH: (f64, f64) = (3.0, 3.0);

pub const SPACING: Mm = Mm::mm(5.0);
pub const FRAME_MARGIN: Mm = Mm::mm(20.0);
pub const STROKE_WIDTH: Mm = Mm::mm(0.3);
pub const DOT_RADIUS: Mm = Mm::mm(0.5);
pub const PLUS_ARM: Mm = Mm::mm(1.0);
pub const CHEVRON_GAP: Mm = Mm::mm(0.0);
pub const SQUIGGLE_AMPLITUDE: Mm = Mm::mm(1.0);
pub const SQUIGGLE_STEP: Mm = Mm::mm(0.5);

/// Keeps the pen off the paper edge when plotting.
pub const SAFETY_MARGIN: Mm = Mm::mm(3.0);

/// Segments shorter than this (px) are dropped after clipping.
pub const MIN_SEGMENT_PX: f64 = 1e-6;
