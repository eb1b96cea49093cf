mod width;

pub use width::parse_tool_width;

use egui::Color32;

use crate::config::CanvasConfig;

/// The mutually exclusive drawing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTool {
    #[default]
    Brush,
    Eraser,
}

/// Current tool configuration.
///
/// Written by UI controls, read by the stroke recorder when a segment is drawn.
/// Widths are validated by the caller (see [`parse_tool_width`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    color: Color32,
    brush_width: u32,
    eraser_width: u32,
    active_tool: ActiveTool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            brush_width: 5,
            eraser_width: 10,
            active_tool: ActiveTool::Brush,
        }
    }
}

impl ToolState {
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            color: config.brush_color,
            brush_width: config.brush_width.max(1),
            eraser_width: config.eraser_width.max(1),
            active_tool: ActiveTool::Brush,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn eraser_width(&self) -> u32 {
        self.eraser_width
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active_tool
    }

    /// Picking a color only makes sense for drawing, so it also selects the brush.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.active_tool = ActiveTool::Brush;
    }

    pub fn set_brush_width(&mut self, width: u32) {
        debug_assert!(width > 0, "brush width must be positive");
        self.brush_width = width.max(1);
    }

    pub fn set_eraser_width(&mut self, width: u32) {
        debug_assert!(width > 0, "eraser width must be positive");
        self.eraser_width = width.max(1);
    }

    pub fn set_active_tool(&mut self, tool: ActiveTool) {
        self.active_tool = tool;
    }

    /// Line width of the active tool
    pub fn current_width(&self) -> f32 {
        match self.active_tool {
            ActiveTool::Brush => self.brush_width as f32,
            ActiveTool::Eraser => self.eraser_width as f32,
        }
    }

    /// Paint color of the active tool. The eraser covers with the background.
    pub fn current_color(&self, background: Color32) -> Color32 {
        match self.active_tool {
            ActiveTool::Brush => self.color,
            ActiveTool::Eraser => background,
        }
    }
}
