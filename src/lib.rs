#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod recorder;
pub mod renderer;
pub mod scene;
pub mod stroke;
pub mod tool;
pub mod transform;

pub use app::PaintApp;
pub use canvas::{CursorPreview, DrawingCanvas};
pub use config::CanvasConfig;
pub use error::{ConfigError, ExportError, ToolInputError};
pub use export::{ExportFormat, SceneExporter};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use recorder::StrokeRecorder;
pub use renderer::Renderer;
pub use scene::{RenderHandle, SceneStore};
pub use stroke::{Segment, Stroke};
pub use tool::{ActiveTool, ToolState};
