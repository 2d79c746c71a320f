//! Tangenten-Schätzung und Parallel-Pfade (Offset) entlang einer Polyline.
//!
//! Tangente an Punkt `i`: Vorwärts-Differenz am Anfang, Rückwärts-Differenz
//! am Ende, zentrale Differenz `next - prev` im Inneren. Dieselbe Schätzung
//! wird von allen Strip-Mesh-Buildern für die Querschnitts-Basis benutzt.

use super::error::GeometryError;
use crate::shared::spline_geometry::lateral_right;
use glam::Vec3;

/// Normierte Richtung von `from` nach `to`.
///
/// `index` wird nur für die Fehlermeldung verwendet.
pub fn segment_direction(from: Vec3, to: Vec3, index: usize) -> Result<Vec3, GeometryError> {
    (to - from)
        .try_normalize()
        .ok_or(GeometryError::DegenerateGeometry { index })
}

/// Tangente an Punkt `index` (ein-/zweiseitige Differenz).
pub fn tangent_at(points: &[Vec3], index: usize) -> Result<Vec3, GeometryError> {
    let count = points.len();
    if count < 2 {
        return Err(GeometryError::TooFewPoints { count });
    }
    if index == 0 {
        segment_direction(points[0], points[1], index)
    } else if index >= count - 1 {
        segment_direction(points[count - 2], points[count - 1], index)
    } else {
        segment_direction(points[index - 1], points[index + 1], index)
    }
}

/// Tangenten für alle Punkte, ohne NaN.
///
/// Degenerierte Stellen übernehmen die vorherige gültige Tangente; fehlt eine
/// solche (Anfang), die nächste gültige; gibt es gar keine, `Vec3::ZERO`.
pub fn tangents(points: &[Vec3]) -> Vec<Vec3> {
    if points.len() < 2 {
        return vec![Vec3::ZERO; points.len()];
    }

    let raw: Vec<Option<Vec3>> = (0..points.len())
        .map(|i| match tangent_at(points, i) {
            Ok(t) => Some(t),
            Err(e) => {
                log::debug!("Tangente ersetzt: {}", e);
                None
            }
        })
        .collect();

    let first_valid = raw.iter().flatten().next().copied().unwrap_or(Vec3::ZERO);
    let mut last = first_valid;
    raw.into_iter()
        .map(|t| {
            if let Some(t) = t {
                last = t;
            }
            last
        })
        .collect()
}

/// Parallel-Pfad im seitlichen Abstand `distance`.
///
/// Positiver Abstand = rechte Seite (`tangent × up`), negativer = linke Seite.
/// Scharfe Knicke werden nicht geglättet; Offset-Punkte können sich an der
/// Innenseite überschneiden.
pub fn offset_polyline(points: &[Vec3], distance: f32) -> Vec<Vec3> {
    if points.len() < 2 {
        return points.to_vec();
    }

    points
        .iter()
        .zip(tangents(points))
        .map(|(p, t)| *p + lateral_right(t) * distance)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Vec<Vec3> {
        vec![
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 10.0),
        ]
    }

    #[test]
    fn test_tangent_at_uses_central_difference() {
        let pts = l_shape();
        let t = tangent_at(&pts, 2).expect("gültige Tangente");
        let expected = (pts[3] - pts[1]).normalize();
        assert!((t - expected).length() < 1e-6);
    }

    #[test]
    fn test_tangent_at_reports_degenerate_geometry() {
        let pts = vec![Vec3::ONE, Vec3::ONE];
        assert_eq!(
            tangent_at(&pts, 0),
            Err(GeometryError::DegenerateGeometry { index: 0 })
        );
        assert_eq!(
            tangent_at(&pts[..1], 0),
            Err(GeometryError::TooFewPoints { count: 1 })
        );
    }

    #[test]
    fn test_tangents_fall_back_to_previous() {
        let pts = vec![
            Vec3::ZERO,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
        ];
        let t = tangents(&pts);
        // Index 2 und 3 sind degeneriert → Tangente von Index 1
        assert!(t.iter().all(|v| (*v - Vec3::X).length() < 1e-6));
    }

    #[test]
    fn test_tangents_all_degenerate_is_zero() {
        let pts = vec![Vec3::ONE; 3];
        assert!(tangents(&pts).iter().all(|t| *t == Vec3::ZERO));
    }

    #[test]
    fn test_offset_keeps_point_count_and_side() {
        let pts = l_shape();
        let right = offset_polyline(&pts, 2.0);
        let left = offset_polyline(&pts, -2.0);
        assert_eq!(right.len(), pts.len());
        // Fahrtrichtung +X → rechts ist +Z
        assert!((right[0] - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
        assert!((left[0] - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-6);
    }

    #[test]
    fn test_offset_round_trip_on_straight_line() {
        let pts: Vec<Vec3> = (0..6).map(|i| Vec3::new(i as f32 * 3.0, 0.0, 0.0)).collect();
        let back = offset_polyline(&offset_polyline(&pts, 1.5), -1.5);
        for (a, b) in pts.iter().zip(&back) {
            assert!(a.distance(*b) < 1e-5);
        }
    }

    #[test]
    fn test_offset_below_two_points_is_identity() {
        let pts = vec![Vec3::new(1.0, 2.0, 3.0)];
        assert_eq!(offset_polyline(&pts, 5.0), pts);
    }
}
