//! The drawing surface: scene, recorder, history, tools and view state in one
//! owned context that UI event handlers borrow mutably.

use std::path::Path;

use egui::{Color32, Pos2, Rect};

use crate::config::CanvasConfig;
use crate::error::{ExportError, ExportResult, ToolInputError};
use crate::export::{ExportFormat, SceneExporter};
use crate::history::History;
use crate::input::InputEvent;
use crate::recorder::StrokeRecorder;
use crate::scene::SceneStore;
use crate::tool::{ActiveTool, ToolState, parse_tool_width};
use crate::transform::{ZoomState, ZoomTarget, wheel_factor};

/// Outline shown under the pointer, sized to the active tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPreview {
    pub center: Pos2,
    pub radius: f32,
}

#[derive(Debug)]
pub struct DrawingCanvas {
    config: CanvasConfig,
    scene: SceneStore,
    recorder: StrokeRecorder,
    history: History,
    tools: ToolState,
    zoom: ZoomState,
    scroll_region: Rect,
    cursor: Option<CursorPreview>,
}

impl Default for DrawingCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DrawingCanvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            scene: SceneStore::new(config.background),
            recorder: StrokeRecorder::new(),
            history: History::new(),
            tools: ToolState::from_config(&config),
            zoom: ZoomState::new(config.zoom_step),
            scroll_region: config.scroll_region,
            cursor: None,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn scroll_region(&self) -> Rect {
        self.scroll_region
    }

    pub fn cursor(&self) -> Option<CursorPreview> {
        self.cursor
    }

    /// Dispatch one input event. Returns whether the event was consumed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { position } => {
                self.pointer_down(position);
                true
            }
            InputEvent::PointerMove {
                position,
                button_down,
            } => {
                self.pointer_move(position, button_down);
                true
            }
            InputEvent::PointerUp { position } => {
                self.pointer_up(position);
                true
            }
            InputEvent::Wheel {
                delta,
                modifier_held,
                pivot,
            } => self.wheel(delta, modifier_held, pivot),
        }
    }

    pub fn pointer_down(&mut self, point: Pos2) {
        self.recorder.begin(point);
        self.update_cursor(point);
    }

    /// Motion always moves the cursor preview; it only draws while the button is held.
    pub fn pointer_move(&mut self, point: Pos2, button_down: bool) {
        if button_down {
            self.recorder.extend(point, &self.tools, &mut self.scene);
        }
        self.update_cursor(point);
    }

    pub fn pointer_up(&mut self, _point: Pos2) {
        if let Some(stroke) = self.recorder.end() {
            self.history.commit(stroke);
        }
    }

    /// Zoom about `pivot` when the modifier is held. Unmodified wheel events are
    /// left for scrolling and reported as not consumed.
    pub fn wheel(&mut self, delta: f32, modifier_held: bool, pivot: Pos2) -> bool {
        if !modifier_held {
            return false;
        }
        match wheel_factor(delta, self.zoom.step) {
            Some(factor) => {
                self.zoom_at(pivot, factor);
                true
            }
            None => false,
        }
    }

    /// Scale the whole canvas about `pivot` and resize the scroll region to fit.
    pub fn zoom_at(&mut self, pivot: Pos2, factor: f32) {
        let extents = ZoomTarget {
            scene: &mut self.scene,
            recorder: &mut self.recorder,
            history: &mut self.history,
            zoom: &mut self.zoom,
        }
        .zoom_at(pivot, factor);

        if extents.is_positive() {
            self.scroll_region = extents;
        }
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.scene)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.scene)
    }

    /// Erase everything, history included. A gesture in progress is dropped.
    pub fn clear(&mut self) {
        let dropped = self.recorder.discard();
        let removed = self.scene.clear();
        self.history.clear();
        log::info!(
            "Cleared canvas: {} primitives removed, {} in-progress segments dropped",
            removed,
            dropped.len()
        );
    }

    /// Result of the color chooser; `None` means the dialog was cancelled.
    pub fn pick_color(&mut self, color: Option<Color32>) {
        if let Some(color) = color {
            log::info!("Brush color set to {:?}", color);
            self.tools.set_color(color);
        }
    }

    pub fn use_eraser(&mut self) {
        self.tools.set_active_tool(ActiveTool::Eraser);
    }

    pub fn use_brush(&mut self) {
        self.tools.set_active_tool(ActiveTool::Brush);
    }

    /// Apply raw brush slider input. Invalid text leaves the width unchanged.
    pub fn set_brush_width_input(&mut self, raw: &str) -> Result<u32, ToolInputError> {
        let width = parse_tool_width(raw, self.config.brush_range)?;
        self.tools.set_brush_width(width);
        Ok(width)
    }

    /// Apply raw eraser slider input. Invalid text leaves the width unchanged.
    pub fn set_eraser_width_input(&mut self, raw: &str) -> Result<u32, ToolInputError> {
        let width = parse_tool_width(raw, self.config.eraser_range)?;
        self.tools.set_eraser_width(width);
        Ok(width)
    }

    /// Export the canvas to `path`; `None` means no path was chosen.
    pub fn save(&self, path: Option<&Path>) -> ExportResult<ExportFormat> {
        let path = path.ok_or(ExportError::NoPath)?;
        let exporter = SceneExporter::new(self.scene.background(), self.config.max_export_dimension);
        let bounds = SceneExporter::export_bounds(&self.scene, self.scroll_region);
        exporter.export_to_path(&self.scene, bounds, path)
    }

    fn update_cursor(&mut self, point: Pos2) {
        self.cursor = Some(CursorPreview {
            center: point,
            radius: self.tools.current_width() / 2.0,
        });
    }
}
