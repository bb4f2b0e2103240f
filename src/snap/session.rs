//! One drag gesture, from pointer-down to pointer-up.
//!
//! The session owns the anchor chosen at pointer-down and threads the
//! [`SnapState`] between solver calls; it is the only writer of that state.

use glam::DVec2;

use super::SnapConfig;
use super::anchor::AnchorMode;
use super::scene::{ObjectId, Scene};
use super::solver::{DragFrame, SnapOutcome, SnapState, solve};
use crate::page::CanvasSize;
use crate::types::BoundingBox;

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    dragged: ObjectId,
    anchor: AnchorMode,
    state: SnapState,
}

impl DragSession {
    /// Start dragging `dragged`; the anchor is resolved from the pointer-down position.
    pub fn begin(dragged: ObjectId, pointer: DVec2, bounds: &BoundingBox) -> Self {
        let anchor = AnchorMode::from_pointer(pointer, bounds);
        crate::log::debug!(id = dragged.0, ?anchor, "drag started");
        Self { dragged, anchor, state: SnapState::default() }
    }

    pub fn dragged(&self) -> ObjectId {
        self.dragged
    }

    pub fn anchor(&self) -> AnchorMode {
        self.anchor
    }

    pub fn state(&self) -> SnapState {
        self.state
    }

    /// Solve for the object's raw `bounds` at the current pointer position.
    pub fn update<S: Scene + ?Sized>(
        &mut self,
        scene: &S,
        bounds: BoundingBox,
        canvas: CanvasSize,
        config: &SnapConfig,
    ) -> SnapOutcome {
        let frame = DragFrame {
            scene,
            dragged: self.dragged,
            bounds,
            canvas,
            anchor: self.anchor,
        };
        let outcome = solve(&frame, self.state, config);
        self.state = outcome.state;
        outcome
    }

    /// Like [`DragSession::update`], reading the dragged object's bounds from the scene.
    ///
    /// Returns `None` if the object is no longer in the scene.
    pub fn update_from_scene<S: Scene + ?Sized>(
        &mut self,
        scene: &S,
        canvas: CanvasSize,
        config: &SnapConfig,
    ) -> Option<SnapOutcome> {
        let bounds = scene.bounding_box(self.dragged)?;
        Some(self.update(scene, bounds, canvas, config))
    }

    /// Pointer-up: both axes unsnapped, every guide removed.
    pub fn end(self) -> SnapOutcome {
        crate::log::debug!(id = self.dragged.0, "drag ended");
        SnapOutcome::cleared()
    }
}
