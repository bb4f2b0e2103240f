//! The per-move snap solver.
//!
//! A pure function of (scene, dragged object, snap state): every call
//! recomputes guides from scratch and hands back the next [`SnapState`]
//! for the caller to pass in on the following pointer-move.
//!
//! Each axis is solved independently:
//! 1. scan the five page guides (edges, thirds, center), using the tight
//!    entry threshold when unsnapped and the looser release threshold when
//!    already locked to a page guide; a locked axis only considers its own
//!    guide so a nearer one cannot steal the snap mid-drag;
//! 2. scan every other alignment target in the scene at the entry
//!    threshold; a strictly closer match replaces the page candidate.

use glam::DVec2;

use super::SnapConfig;
use super::anchor::AnchorMode;
use super::guide::{Guide, GuideAxis, GuideKind};
use super::scene::{ObjectId, Scene};
use crate::page::CanvasSize;
use crate::types::BoundingBox;

/// Per-axis snap lock. "Snapped" always carries the guide position it is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisLock {
    #[default]
    Unsnapped,
    Snapped(f64),
}

impl AxisLock {
    pub fn is_snapped(self) -> bool {
        matches!(self, AxisLock::Snapped(_))
    }

    pub fn position(self) -> Option<f64> {
        match self {
            AxisLock::Snapped(pos) => Some(pos),
            AxisLock::Unsnapped => None,
        }
    }
}

/// Snap state threaded between consecutive solver calls of one drag.
///
/// `vertical` locks the x coordinate (a vertical guide line), `horizontal`
/// locks the y coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapState {
    pub vertical: AxisLock,
    pub horizontal: AxisLock,
}

impl SnapState {
    pub fn is_snapped_vertical(&self) -> bool {
        self.vertical.is_snapped()
    }

    pub fn is_snapped_horizontal(&self) -> bool {
        self.horizontal.is_snapped()
    }

    pub fn current_vertical_snap_pos(&self) -> Option<f64> {
        self.vertical.position()
    }

    pub fn current_horizontal_snap_pos(&self) -> Option<f64> {
        self.horizontal.position()
    }
}

/// Everything the solver needs to know about the current pointer-move.
pub struct DragFrame<'a, S: Scene + ?Sized> {
    pub scene: &'a S,
    pub dragged: ObjectId,
    /// Bounds of the dragged object at the raw (unsnapped) pointer position.
    pub bounds: BoundingBox,
    pub canvas: CanvasSize,
    pub anchor: AnchorMode,
}

/// Result of one solver call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapOutcome {
    /// At most one guide per axis.
    pub guides: Vec<Guide>,
    /// Suggested top-left for the dragged object; `None` when no axis
    /// snapped or snapping is disabled.
    pub corrected: Option<DVec2>,
    pub state: SnapState,
}

impl SnapOutcome {
    /// No guides, nothing to correct, both axes unsnapped.
    pub fn cleared() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

const X_LABELS: [&str; 5] = ["Left edge", "Left third", "Center", "Right third", "Right edge"];
const Y_LABELS: [&str; 5] = ["Top edge", "Top third", "Middle", "Bottom third", "Bottom edge"];

impl Axis {
    fn guide_axis(self) -> GuideAxis {
        match self {
            Axis::X => GuideAxis::Vertical,
            Axis::Y => GuideAxis::Horizontal,
        }
    }

    fn anchor_coord(self, bounds: &BoundingBox, anchor: AnchorMode) -> f64 {
        match self {
            Axis::X => bounds.left + bounds.width * anchor.x_fraction(),
            Axis::Y => bounds.top + bounds.height * anchor.y_fraction(),
        }
    }

    /// Offset from the box origin to the anchor along this axis.
    fn anchor_offset(self, bounds: &BoundingBox, anchor: AnchorMode) -> f64 {
        match self {
            Axis::X => bounds.width * anchor.x_fraction(),
            Axis::Y => bounds.height * anchor.y_fraction(),
        }
    }

    fn page_guides(self, canvas: CanvasSize) -> [(f64, &'static str); 5] {
        let (length, labels) = match self {
            Axis::X => (canvas.width, X_LABELS),
            Axis::Y => (canvas.height, Y_LABELS),
        };
        let positions = [0.0, length / 3.0, length / 2.0, length * 2.0 / 3.0, length];
        std::array::from_fn(|i| (positions[i], labels[i]))
    }

    fn lock(self, state: &SnapState) -> AxisLock {
        match self {
            Axis::X => state.vertical,
            Axis::Y => state.horizontal,
        }
    }

    fn set_lock(self, state: &mut SnapState, lock: AxisLock) {
        match self {
            Axis::X => state.vertical = lock,
            Axis::Y => state.horizontal = lock,
        }
    }

    fn set_origin(self, origin: &mut DVec2, value: f64) {
        match self {
            Axis::X => origin.x = value,
            Axis::Y => origin.y = value,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Hit {
    position: f64,
    distance: f64,
    label: Option<&'static str>,
    kind: GuideKind,
}

fn scan_page(axis: Axis, coord: f64, canvas: CanvasSize, lock: AxisLock, config: &SnapConfig) -> Option<Hit> {
    let guides = axis.page_guides(canvas);

    // Only a lock on one of this axis's page guides is sticky. A lock left
    // over from an object match (or a resized canvas) scans afresh.
    let locked = lock.position().and_then(|pos| guides.iter().find(|(g, _)| *g == pos));
    let (threshold, pool) = match locked {
        Some(guide) => (config.release_threshold, std::slice::from_ref(guide)),
        None => (config.entry_threshold, &guides[..]),
    };

    pool.iter()
        .map(|&(position, label)| Hit {
            position,
            distance: (coord - position).abs(),
            label: Some(label),
            kind: GuideKind::Page,
        })
        .filter(|hit| hit.distance < threshold)
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

fn scan_objects<S: Scene + ?Sized>(
    axis: Axis,
    frame: &DragFrame<'_, S>,
    coord: f64,
    page_hit: Option<Hit>,
    config: &SnapConfig,
) -> Option<Hit> {
    let mut best = page_hit;
    for id in frame.scene.visible_selectable_objects(frame.dragged) {
        if id == frame.dragged {
            continue;
        }
        let Some(bounds) = frame.scene.bounding_box(id) else {
            continue;
        };
        let target = axis.anchor_coord(&bounds, frame.anchor);
        let distance = (coord - target).abs();
        if distance >= config.entry_threshold {
            continue;
        }
        if best.is_some_and(|b| distance >= b.distance) {
            continue;
        }
        best = Some(Hit { position: target, distance, label: None, kind: GuideKind::Object });
    }
    best
}

/// Compute guides, the corrected position and the next snap state for one pointer-move.
pub fn solve<S: Scene + ?Sized>(frame: &DragFrame<'_, S>, state: SnapState, config: &SnapConfig) -> SnapOutcome {
    let mut guides = Vec::with_capacity(2);
    let mut next = SnapState::default();
    let mut origin = frame.bounds.origin();
    let mut snapped_any = false;

    for axis in [Axis::X, Axis::Y] {
        let coord = axis.anchor_coord(&frame.bounds, frame.anchor);
        let lock = axis.lock(&state);

        let page_hit = if config.page_guides {
            scan_page(axis, coord, frame.canvas, lock, config)
        } else {
            None
        };
        let hit = if config.object_guides {
            scan_objects(axis, frame, coord, page_hit, config)
        } else {
            page_hit
        };

        let Some(hit) = hit else {
            if lock.is_snapped() {
                crate::log::debug!(?axis, coord, "guide released");
            }
            continue;
        };

        if lock.position() != Some(hit.position) {
            crate::log::debug!(
                ?axis,
                position = hit.position,
                distance = hit.distance,
                kind = ?hit.kind,
                "guide engaged"
            );
        }

        axis.set_lock(&mut next, AxisLock::Snapped(hit.position));
        let style = match hit.kind {
            GuideKind::Page => &config.page_style,
            GuideKind::Object => &config.object_style,
        };
        guides.push(Guide::new(axis.guide_axis(), hit.position, hit.kind, style).with_label(hit.label));
        axis.set_origin(&mut origin, hit.position - axis.anchor_offset(&frame.bounds, frame.anchor));
        snapped_any = true;
    }

    SnapOutcome {
        guides,
        corrected: (config.snap_enabled && snapped_any).then_some(origin),
        state: next,
    }
}
