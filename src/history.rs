use egui::Pos2;

use crate::scene::SceneStore;
use crate::stroke::{Segment, Stroke};

/// Undo/redo over committed strokes.
///
/// Strokes on the undo stack always hold handles that are live in the scene.
/// Strokes on the redo stack hold stale handles; only their geometry, color and
/// width are read, to redraw them with fresh handles.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Visible strokes, newest last
    undo_stack: Vec<Stroke>,
    /// Undone strokes, newest last
    redo_stack: Vec<Stroke>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly drawn stroke. Any redo branch is discarded.
    pub fn commit(&mut self, stroke: Stroke) {
        if !self.redo_stack.is_empty() {
            log::debug!("New stroke discards {} redoable strokes", self.redo_stack.len());
        }
        self.undo_stack.push(stroke);
        self.redo_stack.clear();
    }

    /// Remove the newest stroke from the scene. Returns false if there was nothing to undo.
    pub fn undo(&mut self, scene: &mut SceneStore) -> bool {
        let Some(stroke) = self.undo_stack.pop() else {
            return false;
        };

        for segment in stroke.segments() {
            scene.remove_segment(segment.handle());
        }
        log::info!("Undo stroke of {} segments", stroke.len());

        self.redo_stack.push(stroke);
        true
    }

    /// Redraw the most recently undone stroke. Returns false if there was nothing to redo.
    pub fn redo(&mut self, scene: &mut SceneStore) -> bool {
        let Some(stroke) = self.redo_stack.pop() else {
            return false;
        };

        let segments = stroke
            .segments()
            .iter()
            .map(|old| {
                let handle = scene.add_segment(old.geometry().to_vec(), old.color(), old.width());
                Segment::new(handle, old.geometry().to_vec(), old.color(), old.width())
            })
            .collect();
        log::info!("Redo stroke of {} segments", stroke.len());

        // Strokes on the redo stack are never empty
        if let Some(redrawn) = Stroke::new(segments) {
            self.undo_stack.push(redrawn);
        }
        true
    }

    /// Drop both stacks. The caller deletes the live primitives first.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Apply a zoom to the stored geometry of every stroke, undone ones included.
    pub fn scale_geometry(&mut self, pivot: Pos2, factor: f32) {
        for stroke in self.undo_stack.iter_mut().chain(self.redo_stack.iter_mut()) {
            stroke.scale_about(pivot, factor);
        }
    }

    /// Returns true if there are strokes that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are strokes that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Stroke] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }
}
