//! Reine Geometrie-Funktionen für Bézier-Pfade und Polylines.
//!
//! Layer-neutral: wird von `core` (Evaluator, Offset, Mesh-Builder) und
//! `app` (Generatoren, Flame-Trail) gleichermaßen verwendet.

use glam::Vec3;

/// Welt-Hochachse (Y-up).
pub const WORLD_UP: Vec3 = Vec3::Y;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Kumulierte Bogenlänge pro Punkt (erster Eintrag immer 0).
///
/// Treibt die V-Koordinate der UVs aller Strip-Meshes.
pub fn accumulated_distances(points: &[Vec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(points.len());
    let mut total = 0.0f32;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance(*point);
        }
        result.push(total);
    }
    result
}

/// Seitliche Richtung ("rechts") zu einer Vorwärtsrichtung: `normalize(forward × up)`.
///
/// Liefert `Vec3::ZERO` wenn `forward` null oder parallel zur Hochachse ist.
pub fn lateral_right(forward: Vec3) -> Vec3 {
    forward.cross(WORLD_UP).normalize_or_zero()
}

/// Dreht einen Vektor um die Hochachse (Winkel in Grad).
pub fn rotate_about_up(v: Vec3, degrees: f32) -> Vec3 {
    glam::Quat::from_rotation_y(degrees.to_radians()) * v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(3.0, 0.0, 10.0);
        let p2 = Vec3::new(7.0, 0.0, 10.0);
        let p3 = Vec3::new(10.0, 0.0, 0.0);

        assert!((cubic_bezier(p0, p1, p2, p3, 0.0) - p0).length() < 0.001);
        assert!((cubic_bezier(p0, p1, p2, p3, 1.0) - p3).length() < 0.001);
    }

    #[test]
    fn test_cubic_bezier_symmetry() {
        // B(0.5) = 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        let mid = cubic_bezier(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            0.5,
        );
        assert!((mid - Vec3::new(5.0, 0.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn test_accumulated_distances() {
        let pts = [Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 4.0)];
        let dist = accumulated_distances(&pts);
        assert_eq!(dist, vec![0.0, 3.0, 7.0]);
        assert!((polyline_length(&pts) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_lateral_right_of_x_is_z() {
        let right = lateral_right(Vec3::X);
        assert!((right - Vec3::Z).length() < 1e-6);
        assert_eq!(lateral_right(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(lateral_right(Vec3::Y), Vec3::ZERO);
    }

    #[test]
    fn test_rotate_about_up_keeps_length() {
        let v = Vec3::new(2.0, 0.0, 0.0);
        let r = rotate_about_up(v, 30.0);
        assert!((r.length() - 2.0).abs() < 1e-5);
        assert!(r.y.abs() < 1e-6);
    }
}
