//! Pivot-anchored uniform zoom.
//!
//! A zoom rewrites every coordinate the canvas holds: live primitives, the
//! gesture in progress and the geometry stored in history. Line widths are left
//! untouched, so strokes keep their pixel thickness at every zoom level.

use egui::{Pos2, Rect};

use crate::history::History;
use crate::recorder::StrokeRecorder;
use crate::scene::SceneStore;

/// Zoom factor for one wheel notch: `step` when scrolling up, `1 / step` when
/// scrolling down, `None` for a zero delta.
pub fn wheel_factor(delta: f32, step: f32) -> Option<f32> {
    if delta > 0.0 {
        Some(step)
    } else if delta < 0.0 {
        Some(1.0 / step)
    } else {
        None
    }
}

/// Cumulative zoom bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    /// Product of every factor applied so far
    pub level: f32,
    /// Factor applied per wheel notch
    pub step: f32,
}

impl ZoomState {
    pub fn new(step: f32) -> Self {
        Self { level: 1.0, step }
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(1.1)
    }
}

/// Everything a zoom has to keep consistent
pub struct ZoomTarget<'a> {
    pub scene: &'a mut SceneStore,
    pub recorder: &'a mut StrokeRecorder,
    pub history: &'a mut History,
    pub zoom: &'a mut ZoomState,
}

impl ZoomTarget<'_> {
    /// Scale everything about `pivot` by `factor` and return the recomputed
    /// scene extents (`Rect::NOTHING` for an empty scene).
    pub fn zoom_at(&mut self, pivot: Pos2, factor: f32) -> Rect {
        if !(factor.is_finite() && factor > 0.0) {
            log::warn!("Ignoring invalid zoom factor {}", factor);
            return self.scene.recompute_extents();
        }

        self.scene.scale_all(pivot, factor);
        self.recorder.scale_about(pivot, factor);
        self.history.scale_geometry(pivot, factor);
        self.zoom.level *= factor;

        let extents = self.scene.recompute_extents();
        log::debug!(
            "Zoomed by {} about {:?}, level {}, extents {:?}",
            factor,
            pivot,
            self.zoom.level,
            extents
        );
        extents
    }
}
