use egui::{Pos2, Rect};

/// Map `point` through a uniform scale of `factor` about `pivot`.
#[inline]
pub fn scale_about(point: Pos2, pivot: Pos2, factor: f32) -> Pos2 {
    Pos2::new(
        pivot.x + (point.x - pivot.x) * factor,
        pivot.y + (point.y - pivot.y) * factor,
    )
}

/// Scale every point in place about `pivot`.
pub fn scale_points(points: &mut [Pos2], pivot: Pos2, factor: f32) {
    for point in points {
        *point = scale_about(*point, pivot, factor);
    }
}

/// Bounding box of `points`, grown by `padding` on every side.
/// No points means [`Rect::NOTHING`].
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        Rect::NOTHING
    } else {
        Rect::from_points(points).expand(padding)
    }
}
