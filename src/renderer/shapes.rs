//! Shape generation for 2D primitives

use glam::Vec2;

/// Triangles filling the area between a polyline and a horizontal floor
///
/// Each segment becomes a quad split into two triangles, so the terrain can be
/// drawn as a filled polygon.
pub fn fill_below(points: &[Vec2], floor_y: f32) -> Vec<[Vec2; 3]> {
    let mut triangles = Vec::with_capacity(points.len().saturating_sub(1) * 2);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let f0 = Vec2::new(p0.x, floor_y);
        let f1 = Vec2::new(p1.x, floor_y);
        triangles.push([p0, p1, f1]);
        triangles.push([p0, f1, f0]);
    }
    triangles
}

/// Format seconds-left as `mm:ss`
pub fn clock_text(minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}
