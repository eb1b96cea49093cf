use drawpad::{DrawingCanvas, ExportError, ExportFormat};
use egui::pos2;

fn sample_canvas() -> DrawingCanvas {
    let mut canvas = DrawingCanvas::default();
    canvas.pick_color(Some(egui::Color32::from_rgb(200, 30, 30)));
    canvas.pointer_down(pos2(10.0, 10.0));
    canvas.pointer_move(pos2(60.0, 40.0), true);
    canvas.pointer_move(pos2(120.0, 10.0), true);
    canvas.pointer_up(pos2(120.0, 10.0));
    canvas
}

#[test]
fn test_png_export_matches_scroll_region() {
    let canvas = sample_canvas();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");

    assert_eq!(canvas.save(Some(&path)).unwrap(), ExportFormat::Png);

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (1000, 700));
    assert_eq!(image.get_pixel(10, 10).0, [200, 30, 30, 255]);
    assert_eq!(image.get_pixel(900, 600).0, [255, 255, 255, 255]);
}

#[test]
fn test_jpeg_export_decodes() {
    let canvas = sample_canvas();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.jpg");

    assert_eq!(canvas.save(Some(&path)).unwrap(), ExportFormat::Jpeg);
    let image = image::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (1000, 700));
}

#[test]
fn test_vector_exports() {
    let canvas = sample_canvas();
    let dir = tempfile::tempdir().unwrap();

    let svg_path = dir.path().join("canvas.svg");
    assert_eq!(canvas.save(Some(&svg_path)).unwrap(), ExportFormat::Svg);
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert_eq!(svg.matches("<polyline").count(), 2);

    let ps_path = dir.path().join("canvas.ps");
    assert_eq!(canvas.save(Some(&ps_path)).unwrap(), ExportFormat::PostScript);
    let ps = std::fs::read_to_string(&ps_path).unwrap();
    assert_eq!(ps.matches(" stroke\n").count(), 2);
}

#[test]
fn test_export_failures_are_reported() {
    let canvas = sample_canvas();
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(canvas.save(None), Err(ExportError::NoPath)));
    assert!(matches!(
        canvas.save(Some(&dir.path().join("canvas.tiff2"))),
        Err(ExportError::UnsupportedFormat(_))
    ));

    let missing_dir = dir.path().join("no-such-dir");
    assert!(matches!(
        canvas.save(Some(&missing_dir.join("canvas.svg"))),
        Err(ExportError::Write { .. })
    ));
    assert!(matches!(
        canvas.save(Some(&missing_dir.join("canvas.png"))),
        Err(ExportError::Write { .. })
    ));
}
