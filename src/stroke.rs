use egui::{Color32, Pos2};

use crate::geometry;
use crate::scene::RenderHandle;

/// One drawn chord between two consecutive pointer samples.
///
/// The handle only locates the live primitive in the [`SceneStore`](crate::SceneStore).
/// The geometry, color and width are the durable record used to redraw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    handle: RenderHandle,
    geometry: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Segment {
    pub fn new(handle: RenderHandle, geometry: Vec<Pos2>, color: Color32, width: f32) -> Self {
        Self {
            handle,
            geometry,
            color,
            width,
        }
    }

    /// Handle of the primitive this segment was drawn as. Stale once undone.
    pub fn handle(&self) -> RenderHandle {
        self.handle
    }

    pub fn geometry(&self) -> &[Pos2] {
        &self.geometry
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub(crate) fn scale_about(&mut self, pivot: Pos2, factor: f32) {
        geometry::scale_points(&mut self.geometry, pivot, factor);
    }
}

// Committed stroke, never empty
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    segments: Vec<Segment>,
}

impl Stroke {
    /// Build a stroke from its segments. Returns `None` for an empty gesture.
    pub fn new(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn scale_about(&mut self, pivot: Pos2, factor: f32) {
        for segment in &mut self.segments {
            segment.scale_about(pivot, factor);
        }
    }
}

// In-progress stroke for the gesture being recorded
#[derive(Debug, Clone, Default)]
pub struct MutableStroke {
    segments: Vec<Segment>,
}

impl MutableStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    // Convert to an immutable Stroke, or None if nothing was drawn
    pub fn into_stroke(self) -> Option<Stroke> {
        Stroke::new(self.segments)
    }

    pub(crate) fn scale_about(&mut self, pivot: Pos2, factor: f32) {
        for segment in &mut self.segments {
            segment.scale_about(pivot, factor);
        }
    }
}
