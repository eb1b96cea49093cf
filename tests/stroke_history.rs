use drawpad::{ActiveTool, DrawingCanvas};
use egui::{Color32, Pos2, pos2};

// Draw a gesture through `points`, one extend per point after the first
fn draw(canvas: &mut DrawingCanvas, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    canvas.pointer_down(*first);
    for point in rest {
        canvas.pointer_move(*point, true);
    }
    canvas.pointer_up(*points.last().unwrap());
}

fn scene_snapshot(canvas: &DrawingCanvas) -> Vec<(Vec<Pos2>, Color32, f32)> {
    canvas
        .scene()
        .primitives()
        .map(|p| (p.points().to_vec(), p.color(), p.width()))
        .collect()
}

#[test]
fn test_committed_strokes_match_gestures() {
    let mut canvas = DrawingCanvas::default();

    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    // Click without movement
    draw(&mut canvas, &[pos2(5.0, 5.0)]);
    draw(&mut canvas, &[pos2(10.0, 0.0), pos2(10.0, 4.0)]);

    let strokes = canvas.history().undo_stack();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].len(), 2);
    assert_eq!(strokes[1].len(), 1);
    assert_eq!(canvas.scene().len(), 3);
}

#[test]
fn test_undo_redo_scenario() {
    let mut canvas = DrawingCanvas::default();
    draw(
        &mut canvas,
        &[pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0), pos2(0.0, 10.0)],
    );
    canvas.pick_color(Some(Color32::RED));
    draw(&mut canvas, &[pos2(50.0, 50.0), pos2(60.0, 55.0), pos2(70.0, 50.0)]);
    assert_eq!(canvas.scene().len(), 5);

    let first_b = canvas.history().undo_stack()[1].clone();

    assert!(canvas.undo());
    assert_eq!(canvas.scene().len(), 3);
    assert!(canvas.scene().primitives().all(|p| p.color() == Color32::BLACK));

    assert!(canvas.redo());
    assert_eq!(canvas.scene().len(), 5);

    let redone_b = &canvas.history().undo_stack()[1];
    assert_eq!(redone_b.len(), first_b.len());
    for (old, new) in first_b.segments().iter().zip(redone_b.segments()) {
        assert_ne!(old.handle(), new.handle());
        assert_eq!(old.geometry(), new.geometry());
        assert_eq!(old.color(), new.color());
        assert_eq!(old.width(), new.width());
    }
}

#[test]
fn test_undo_then_redo_restores_scene() {
    let mut canvas = DrawingCanvas::default();
    draw(&mut canvas, &[pos2(1.5, 2.25), pos2(3.125, 4.0), pos2(7.0, 7.75)]);
    draw(&mut canvas, &[pos2(-4.0, 9.0), pos2(0.1, 0.2)]);
    let before = scene_snapshot(&canvas);

    canvas.undo();
    canvas.redo();

    assert_eq!(scene_snapshot(&canvas), before);
}

#[test]
fn test_new_stroke_after_undo_loses_redo() {
    let mut canvas = DrawingCanvas::default();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(1.0, 0.0)]);
    draw(&mut canvas, &[pos2(0.0, 5.0), pos2(1.0, 5.0)]);

    canvas.undo();
    assert!(canvas.history().can_redo());

    draw(&mut canvas, &[pos2(0.0, 9.0), pos2(1.0, 9.0)]);
    assert!(!canvas.redo());
    assert!(canvas.history().redo_stack().is_empty());
    assert_eq!(canvas.history().undo_stack().len(), 2);
    assert!(canvas.scene().primitives().all(|p| p.points()[0].y != 5.0));
}

#[test]
fn test_empty_gesture_keeps_redo_branch() {
    let mut canvas = DrawingCanvas::default();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(1.0, 0.0)]);
    canvas.undo();

    draw(&mut canvas, &[pos2(3.0, 3.0)]);
    assert!(canvas.redo());
}

#[test]
fn test_undo_with_empty_history() {
    let mut canvas = DrawingCanvas::default();
    assert!(!canvas.undo());
    assert!(canvas.scene().is_empty());
    assert!(canvas.history().redo_stack().is_empty());

    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(1.0, 0.0)]);
    canvas.undo();
    let redo_len = canvas.history().redo_stack().len();
    assert!(!canvas.undo());
    assert_eq!(canvas.history().redo_stack().len(), redo_len);
}

#[test]
fn test_clear_after_two_strokes() {
    let mut canvas = DrawingCanvas::default();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(2.0, 0.0)]);
    draw(&mut canvas, &[pos2(0.0, 5.0), pos2(1.0, 5.0)]);
    canvas.undo();

    canvas.clear();
    assert!(canvas.scene().is_empty());
    assert!(canvas.history().undo_stack().is_empty());
    assert!(canvas.history().redo_stack().is_empty());
    assert!(!canvas.undo());
    assert!(!canvas.redo());
    assert!(canvas.scene().is_empty());
}

#[test]
fn test_clear_mid_gesture_drops_it() {
    let mut canvas = DrawingCanvas::default();
    canvas.pointer_down(pos2(0.0, 0.0));
    canvas.pointer_move(pos2(4.0, 0.0), true);
    canvas.clear();

    canvas.pointer_move(pos2(8.0, 0.0), true);
    canvas.pointer_up(pos2(8.0, 0.0));
    assert!(canvas.scene().is_empty());
    assert!(!canvas.history().can_undo());
}

#[test]
fn test_undoing_eraser_restores_drawing() {
    let mut canvas = DrawingCanvas::default();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(20.0, 0.0), pos2(40.0, 0.0)]);
    let drawing = scene_snapshot(&canvas);

    canvas.use_eraser();
    assert_eq!(canvas.tools().active_tool(), ActiveTool::Eraser);
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(40.0, 0.0)]);

    let cover = canvas.scene().primitives().last().unwrap();
    assert_eq!(cover.color(), canvas.scene().background());
    assert_eq!(cover.width(), 10.0);
    assert_eq!(canvas.scene().len(), 3);

    canvas.undo();
    assert_eq!(scene_snapshot(&canvas), drawing);
}

#[test]
fn test_width_change_mid_session_applies_to_new_segments() {
    let mut canvas = DrawingCanvas::default();
    canvas.set_brush_width_input("2").unwrap();
    draw(&mut canvas, &[pos2(0.0, 0.0), pos2(1.0, 0.0)]);
    canvas.set_brush_width_input("17.9").unwrap();
    draw(&mut canvas, &[pos2(0.0, 5.0), pos2(1.0, 5.0)]);

    let widths: Vec<f32> = canvas.scene().primitives().map(|p| p.width()).collect();
    assert_eq!(widths, vec![2.0, 17.0]);
}
