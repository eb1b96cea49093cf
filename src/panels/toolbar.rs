use egui::{Button, Slider};

use crate::PaintApp;
use crate::tool::ActiveTool;

const BUTTON_WIDTH: f32 = 80.0;

fn button(label: &str) -> Button<'static> {
    Button::new(label).min_size(egui::vec2(BUTTON_WIDTH, 0.0))
}

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("toolbar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.add(button("Color")).clicked() {
                    app.open_color_dialog();
                }
                let erasing = app.canvas().tools().active_tool() == ActiveTool::Eraser;
                if ui.add(button("Brush").selected(!erasing)).clicked() {
                    app.canvas_mut().use_brush();
                }
                if ui.add(button("Eraser").selected(erasing)).clicked() {
                    log::info!("Eraser selected");
                    app.canvas_mut().use_eraser();
                }
                if ui.add_enabled(app.canvas().history().can_undo(), button("Undo")).clicked() {
                    app.canvas_mut().undo();
                }
                if ui.add_enabled(app.canvas().history().can_redo(), button("Redo")).clicked() {
                    app.canvas_mut().redo();
                }
                if ui.add(button("Clear")).clicked() {
                    app.canvas_mut().clear();
                }
                if ui.add(button("Save")).clicked() {
                    app.open_save_dialog();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        let brush = app.canvas().config().brush_range;
                        let eraser = app.canvas().config().eraser_range;

                        ui.label("Brush Size");
                        let mut value = app.canvas().tools().brush_width() as f32;
                        if ui.add(Slider::new(&mut value, brush.min as f32..=brush.max as f32)).changed() {
                            app.apply_brush_width(&value.to_string());
                        }

                        ui.label("Eraser Size");
                        let mut value = app.canvas().tools().eraser_width() as f32;
                        if ui.add(Slider::new(&mut value, eraser.min as f32..=eraser.max as f32)).changed() {
                            app.apply_eraser_width(&value.to_string());
                        }
                    });
                });
            });

            if let Some(status) = app.status() {
                ui.label(status);
            }
            ui.add_space(6.0);
        });
}
