use crate::PaintApp;
use crate::renderer::Renderer;

pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let region = app.canvas().scroll_region();
                let size = region.size().max(ui.available_size());
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());

                let visible = ui.clip_rect();
                app.input_handler_mut()
                    .set_viewport(response.rect, visible, region.min);
                for event in app.input_handler_mut().process_input(ctx) {
                    app.canvas_mut().handle_event(event);
                }

                Renderer::new(response.rect.min, region.min).render(&painter, app.canvas(), response.rect);
            });
    });
}
