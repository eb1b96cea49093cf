mod canvas_panel;
mod dialogs;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use dialogs::{color_dialog, save_dialog};
pub use toolbar::toolbar;
