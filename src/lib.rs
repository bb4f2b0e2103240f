//! Layout and fill-pattern engine for a pen-plotter page editor.
//!
//! Two independent parts share one geometry layer:
//!
//! - [`snap`]: alignment guides for an object being dragged, with
//!   entry/release hysteresis so a snapped object does not flicker.
//! - [`pattern`]: frame-fill patterns (dots, stripes, chevrons, ...) clipped
//!   to the border between the page edge and an inner margin, so every
//!   primitive is something a pen can draw without touching the interior.
//!
//! Everything is synchronous and allocation-light. Nothing here touches
//! storage, rendering or hardware.

pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod page;
pub mod pattern;
pub mod snap;
pub mod types;

pub use errors::SpecError;
pub use geometry::{BorderRegion, Rect, Segment, clip_segment, coverage_size};
pub use page::{CanvasSize, Orientation, PageSize, PaperSize};
pub use pattern::{PatternFamily, PatternGroup, PatternPrimitive, PatternSpec, PatternUpdate, Refresh};
pub use snap::{AnchorMode, DragSession, Guide, ObjectId, Scene, SnapConfig, SnapOutcome, SnapState};
pub use types::{Angle, BoundingBox, Color, Mm, Scaler};
