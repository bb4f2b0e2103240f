//! The scene as the snap solver sees it: ids and bounding boxes.
//!
//! The solver never mutates the scene; it only asks where things are.

use crate::types::BoundingBox;

/// Opaque handle for an object on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Read-only scene queries consumed by the snap solver.
pub trait Scene {
    /// Axis-aligned bounds of `id` in canvas pixels, if it exists.
    fn bounding_box(&self, id: ObjectId) -> Option<BoundingBox>;

    /// Objects that may serve as alignment targets: visible, selectable,
    /// not an editor overlay, and not `excluding`.
    fn visible_selectable_objects(&self, excluding: ObjectId) -> Vec<ObjectId>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub bounds: BoundingBox,
    pub visible: bool,
    pub selectable: bool,
    /// Editor furniture such as guide lines or the page frame.
    pub overlay: bool,
}

impl SceneObject {
    pub fn new(id: ObjectId, bounds: BoundingBox) -> Self {
        Self { id, bounds, visible: true, selectable: true, overlay: false }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn locked(mut self) -> Self {
        self.selectable = false;
        self
    }

    pub fn overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    fn is_alignment_target(&self) -> bool {
        self.visible && self.selectable && !self.overlay
    }
}

/// A simple in-memory scene.
#[derive(Debug, Clone, Default)]
pub struct SceneObjects {
    objects: Vec<SceneObject>,
}

impl SceneObjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Update the bounds of an existing object. Returns false if `id` is unknown.
    pub fn set_bounds(&mut self, id: ObjectId, bounds: BoundingBox) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<SceneObject> for SceneObjects {
    fn from_iter<I: IntoIterator<Item = SceneObject>>(iter: I) -> Self {
        Self { objects: iter.into_iter().collect() }
    }
}

impl Scene for SceneObjects {
    fn bounding_box(&self, id: ObjectId) -> Option<BoundingBox> {
        self.objects.iter().find(|o| o.id == id).map(|o| o.bounds)
    }

    fn visible_selectable_objects(&self, excluding: ObjectId) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.id != excluding && o.is_alignment_target())
            .map(|o| o.id)
            .collect()
    }
}
