//! Retained store of drawn primitives.
//!
//! egui paints immediate-mode, so the canvas keeps its own list of live line
//! primitives and repaints them every frame. Each primitive is reachable through
//! a [`RenderHandle`] that dies with the primitive; handles are never reused.

use egui::{Color32, Pos2, Rect};
use uuid::Uuid;

use crate::geometry;

/// Opaque reference to a live primitive in the [`SceneStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(Uuid);

impl RenderHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RenderHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RenderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rendered round-capped polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    handle: RenderHandle,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Primitive {
    pub fn handle(&self) -> RenderHandle {
        self.handle
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Area covered when drawn, including half the line width on every side
    pub fn bounds(&self) -> Rect {
        geometry::calculate_bounds(&self.points, self.width / 2.0)
    }
}

#[derive(Debug, Clone)]
pub struct SceneStore {
    // Paint order, oldest first
    primitives: Vec<Primitive>,
    background: Color32,
}

impl SceneStore {
    pub fn new(background: Color32) -> Self {
        Self {
            primitives: Vec::new(),
            background,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Render a new primitive on top of the scene and return its handle.
    pub fn add_segment(&mut self, points: Vec<Pos2>, color: Color32, width: f32) -> RenderHandle {
        let handle = RenderHandle::new();
        self.primitives.push(Primitive {
            handle,
            points,
            color,
            width,
        });
        handle
    }

    /// Delete a primitive. Unknown handles are ignored; returns whether anything was removed.
    pub fn remove_segment(&mut self, handle: RenderHandle) -> bool {
        match self.primitives.iter().position(|p| p.handle == handle) {
            Some(index) => {
                self.primitives.remove(index);
                true
            }
            None => {
                log::trace!("Ignoring removal of stale handle {}", handle);
                false
            }
        }
    }

    pub fn contains(&self, handle: RenderHandle) -> bool {
        self.primitives.iter().any(|p| p.handle == handle)
    }

    /// Live coordinates of a primitive, or `None` if the handle is stale
    pub fn coords(&self, handle: RenderHandle) -> Option<&[Pos2]> {
        self.primitives
            .iter()
            .find(|p| p.handle == handle)
            .map(|p| p.points.as_slice())
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Bounding box of everything drawn, `Rect::NOTHING` when empty.
    ///
    /// Always scans the live primitives; nothing is cached across transforms.
    pub fn recompute_extents(&self) -> Rect {
        self.primitives
            .iter()
            .fold(Rect::NOTHING, |acc, p| acc.union(p.bounds()))
    }

    /// Scale every live primitive about `pivot`, keeping handles and widths.
    pub fn scale_all(&mut self, pivot: Pos2, factor: f32) {
        for primitive in &mut self.primitives {
            geometry::scale_points(&mut primitive.points, pivot, factor);
        }
    }

    /// Delete every live primitive, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.primitives.len();
        self.primitives.clear();
        count
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}
