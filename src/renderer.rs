use egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::canvas::DrawingCanvas;
use crate::scene::Primitive;

const CURSOR_OUTLINE: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);

/// Paints a [`DrawingCanvas`] into an egui painter.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Screen position of the scene point `origin`
    screen_min: Pos2,
    origin: Pos2,
}

impl Renderer {
    /// Creates a renderer mapping scene point `origin` to screen position `screen_min`
    pub fn new(screen_min: Pos2, origin: Pos2) -> Self {
        Self { screen_min, origin }
    }

    pub fn to_screen(&self, scene: Pos2) -> Pos2 {
        self.screen_min + (scene - self.origin)
    }

    /// Renders the background, every live primitive and the cursor preview
    pub fn render(&self, painter: &Painter, canvas: &DrawingCanvas, rect: Rect) {
        painter.rect_filled(rect, 0.0, canvas.scene().background());

        for primitive in canvas.scene().primitives() {
            self.paint_primitive(painter, primitive);
        }

        if let Some(cursor) = canvas.cursor() {
            painter.circle_stroke(
                self.to_screen(cursor.center),
                cursor.radius,
                Stroke::new(1.0, CURSOR_OUTLINE),
            );
        }
    }

    fn paint_primitive(&self, painter: &Painter, primitive: &Primitive) {
        let points: Vec<Pos2> = primitive.points().iter().map(|p| self.to_screen(*p)).collect();
        let radius = primitive.width() / 2.0;

        // egui lines have butt ends, so cap every vertex with a disc
        for point in &points {
            painter.circle_filled(*point, radius, primitive.color());
        }
        if points.len() >= 2 {
            painter.add(egui::Shape::line(
                points,
                Stroke::new(primitive.width(), primitive.color()),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_to_screen_offsets_origin() {
        let renderer = Renderer::new(pos2(100.0, 50.0), pos2(-20.0, 10.0));
        assert_eq!(renderer.to_screen(pos2(-20.0, 10.0)), pos2(100.0, 50.0));
        assert_eq!(renderer.to_screen(pos2(0.0, 0.0)), pos2(120.0, 40.0));
    }

    #[test]
    fn test_render_basics() {
        let mut canvas = DrawingCanvas::default();
        canvas.pointer_down(pos2(0.0, 0.0));
        canvas.pointer_move(pos2(10.0, 10.0), true);
        canvas.pointer_up(pos2(10.0, 10.0));

        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, rect);

        Renderer::new(rect.min, Pos2::ZERO).render(&painter, &canvas, rect);
    }
}
