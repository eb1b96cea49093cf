use std::path::PathBuf;

use egui::{Color32, Rect};

use crate::canvas::DrawingCanvas;
use crate::config::CanvasConfig;
use crate::input::InputHandler;
use crate::panels;

/// The DrawPad window: toolbar, scrollable canvas and the two modal choosers.
pub struct PaintApp {
    canvas: DrawingCanvas,
    input: InputHandler,
    /// Color being edited while the color chooser is open
    pending_color: Option<Color32>,
    /// Path being typed while the save chooser is open
    pending_save_path: Option<String>,
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let canvas_rect = Rect::from_min_size(egui::Pos2::ZERO, config.canvas_size);
        Self {
            canvas: DrawingCanvas::new(config),
            input: InputHandler::new(canvas_rect),
            pending_color: None,
            pending_save_path: None,
            status: None,
        }
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut DrawingCanvas {
        &mut self.canvas
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn open_color_dialog(&mut self) {
        self.pending_color = Some(self.canvas.tools().color());
    }

    pub fn pending_color(&self) -> Option<Color32> {
        self.pending_color
    }

    pub fn set_pending_color(&mut self, color: Color32) {
        self.pending_color = Some(color);
    }

    /// `None` means the chooser was cancelled.
    pub fn close_color_dialog(&mut self, picked: Option<Color32>) {
        self.pending_color = None;
        self.canvas.pick_color(picked);
    }

    pub fn open_save_dialog(&mut self) {
        self.pending_save_path = Some("drawing.png".to_owned());
    }

    pub fn pending_save_path(&self) -> Option<String> {
        self.pending_save_path.clone()
    }

    pub fn set_pending_save_path(&mut self, path: String) {
        self.pending_save_path = Some(path);
    }

    /// `None` means no path was chosen.
    pub fn close_save_dialog(&mut self, path: Option<PathBuf>) {
        self.pending_save_path = None;
        let Some(path) = path else {
            return;
        };

        match self.canvas.save(Some(&path)) {
            Ok(format) => {
                log::info!("Saved canvas to {}", path.display());
                self.status = Some(format!("Saved {} ({:?})", path.display(), format));
            }
            Err(err) => {
                log::error!("Failed to save canvas: {}", err);
                self.status = Some(format!("Save failed: {}", err));
            }
        }
    }

    pub fn apply_brush_width(&mut self, raw: &str) {
        if let Err(err) = self.canvas.set_brush_width_input(raw) {
            log::warn!("Ignoring brush size input: {}", err);
        }
    }

    pub fn apply_eraser_width(&mut self, raw: &str) {
        if let Err(err) = self.canvas.set_eraser_width_input(raw) {
            log::warn!("Ignoring eraser size input: {}", err);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::canvas_panel(self, ctx);
        panels::color_dialog(self, ctx);
        panels::save_dialog(self, ctx);
    }
}
