//! Turns pointer gestures into strokes.
//!
//! ```text
//!            begin(point)
//!   ┌──────┐ ───────────► ┌───────────┐ ─┐
//!   │ Idle │              │ Recording │  │ extend(point)
//!   └──────┘ ◄─────────── └───────────┘ ◄┘
//!               end()
//! ```
//!
//! Every `extend` draws one short chord from the previous sample to the new one
//! straight into the [`SceneStore`], so painting keeps up with the pointer and
//! undo can later remove the stroke chord by chord.

use egui::Pos2;

use crate::geometry;
use crate::scene::{RenderHandle, SceneStore};
use crate::stroke::{MutableStroke, Segment, Stroke};
use crate::tool::ToolState;

#[derive(Debug, Clone, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording {
        /// Last sampled point, start of the next chord
        anchor: Pos2,
        stroke: MutableStroke,
    },
}

#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    state: RecorderState,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    pub fn anchor(&self) -> Option<Pos2> {
        match &self.state {
            RecorderState::Recording { anchor, .. } => Some(*anchor),
            RecorderState::Idle => None,
        }
    }

    /// Segments drawn so far by the gesture in progress
    pub fn in_progress(&self) -> &[Segment] {
        match &self.state {
            RecorderState::Recording { stroke, .. } => stroke.segments(),
            RecorderState::Idle => &[],
        }
    }

    /// Start a gesture at `point`, dropping any unfinished buffer.
    pub fn begin(&mut self, point: Pos2) {
        if let RecorderState::Recording { stroke, .. } = &self.state {
            log::warn!(
                "Gesture started while recording, discarding {} buffered segments",
                stroke.len()
            );
        }
        log::debug!("Stroke started at {:?}", point);
        self.state = RecorderState::Recording {
            anchor: point,
            stroke: MutableStroke::new(),
        };
    }

    /// Draw a chord from the anchor to `point` with the active tool.
    ///
    /// Does nothing while idle: motion keeps arriving between gestures.
    pub fn extend(
        &mut self,
        point: Pos2,
        tools: &ToolState,
        scene: &mut SceneStore,
    ) -> Option<RenderHandle> {
        let RecorderState::Recording { anchor, stroke } = &mut self.state else {
            return None;
        };

        let geometry = vec![*anchor, point];
        let color = tools.current_color(scene.background());
        let width = tools.current_width();

        let handle = scene.add_segment(geometry.clone(), color, width);
        log::trace!("Segment {} from {:?} to {:?}", handle, anchor, point);

        stroke.push(Segment::new(handle, geometry, color, width));
        *anchor = point;
        Some(handle)
    }

    /// Finish the gesture. Returns the stroke to commit, or `None` for a click
    /// without movement.
    pub fn end(&mut self) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            RecorderState::Recording { stroke, .. } => {
                let committed = stroke.into_stroke();
                match &committed {
                    Some(stroke) => log::debug!("Stroke finished with {} segments", stroke.len()),
                    None => log::debug!("Discarding empty stroke"),
                }
                committed
            }
            RecorderState::Idle => None,
        }
    }

    /// Drop the gesture in progress without committing it.
    ///
    /// Segments already drawn stay in the scene; the caller removes them if needed.
    pub fn discard(&mut self) -> Vec<Segment> {
        match std::mem::take(&mut self.state) {
            RecorderState::Recording { stroke, .. } => stroke.segments().to_vec(),
            RecorderState::Idle => Vec::new(),
        }
    }

    /// Apply a zoom to the anchor and buffered geometry of the gesture in progress.
    pub fn scale_about(&mut self, pivot: Pos2, factor: f32) {
        if let RecorderState::Recording { anchor, stroke } = &mut self.state {
            *anchor = geometry::scale_about(*anchor, pivot, factor);
            stroke.scale_about(pivot, factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ActiveTool;
    use egui::{Color32, pos2};

    #[test]
    fn test_extend_while_idle_is_ignored() {
        let mut recorder = StrokeRecorder::new();
        let mut scene = SceneStore::default();
        let tools = ToolState::default();

        assert!(recorder.extend(pos2(5.0, 5.0), &tools, &mut scene).is_none());
        assert!(scene.is_empty());
        assert!(recorder.end().is_none());
    }

    #[test]
    fn test_segments_chain_through_anchor() {
        let mut recorder = StrokeRecorder::new();
        let mut scene = SceneStore::default();
        let tools = ToolState::default();

        recorder.begin(pos2(0.0, 0.0));
        recorder.extend(pos2(10.0, 0.0), &tools, &mut scene);
        recorder.extend(pos2(10.0, 10.0), &tools, &mut scene);
        assert_eq!(recorder.anchor(), Some(pos2(10.0, 10.0)));

        let stroke = recorder.end().unwrap();
        assert!(!recorder.is_recording());
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.segments()[0].geometry(), &[pos2(0.0, 0.0), pos2(10.0, 0.0)]);
        assert_eq!(stroke.segments()[1].geometry(), &[pos2(10.0, 0.0), pos2(10.0, 10.0)]);
        assert_eq!(scene.len(), 2);
        for segment in stroke.segments() {
            assert_eq!(scene.coords(segment.handle()), Some(segment.geometry()));
        }
    }

    #[test]
    fn test_click_without_motion_commits_nothing() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(pos2(3.0, 3.0));
        assert!(recorder.end().is_none());
        assert!(!recorder.is_recording());
    }

    #[test]
    fn test_eraser_paints_background() {
        let mut recorder = StrokeRecorder::new();
        let mut scene = SceneStore::new(Color32::from_gray(240));
        let mut tools = ToolState::default();
        tools.set_active_tool(ActiveTool::Eraser);

        recorder.begin(pos2(0.0, 0.0));
        recorder.extend(pos2(4.0, 4.0), &tools, &mut scene);
        let stroke = recorder.end().unwrap();

        let segment = &stroke.segments()[0];
        assert_eq!(segment.color(), Color32::from_gray(240));
        assert_eq!(segment.width(), 10.0);
    }

    #[test]
    fn test_scale_about_moves_anchor() {
        let mut recorder = StrokeRecorder::new();
        let mut scene = SceneStore::default();
        let tools = ToolState::default();

        recorder.begin(pos2(0.0, 0.0));
        recorder.extend(pos2(10.0, 0.0), &tools, &mut scene);
        recorder.scale_about(pos2(0.0, 0.0), 2.0);

        assert_eq!(recorder.anchor(), Some(pos2(20.0, 0.0)));
        assert_eq!(recorder.in_progress()[0].geometry(), &[pos2(0.0, 0.0), pos2(20.0, 0.0)]);
    }

    #[test]
    fn test_discard_returns_drawn_segments() {
        let mut recorder = StrokeRecorder::new();
        let mut scene = SceneStore::default();
        let tools = ToolState::default();

        recorder.begin(pos2(0.0, 0.0));
        recorder.extend(pos2(1.0, 0.0), &tools, &mut scene);
        let dropped = recorder.discard();

        assert_eq!(dropped.len(), 1);
        assert!(!recorder.is_recording());
        assert!(recorder.end().is_none());
    }
}
