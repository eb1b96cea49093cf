use std::path::PathBuf;

use egui::color_picker::{Alpha, color_picker_color32};

use crate::PaintApp;

pub fn color_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(mut color) = app.pending_color() else {
        return;
    };

    let mut choice = None;
    egui::Window::new("Choose Color")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            color_picker_color32(ui, &mut color, Alpha::Opaque);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    choice = Some(Some(color));
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(None);
                }
            });
        });

    match choice {
        Some(picked) => app.close_color_dialog(picked),
        None => app.set_pending_color(color),
    }
}

pub fn save_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(mut path) = app.pending_save_path() else {
        return;
    };

    let mut choice = None;
    egui::Window::new("Save Canvas")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("File name (.png, .jpg, .bmp, .svg, .ps):");
            ui.text_edit_singleline(&mut path);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    let trimmed = path.trim();
                    choice = Some((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)));
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(None);
                }
            });
        });

    match choice {
        Some(picked) => app.close_save_dialog(picked),
        None => app.set_pending_save_path(path),
    }
}
