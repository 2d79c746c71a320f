//! Integrationstests für Evaluator, Glättung, Offset-Pfade und Bearbeitungs-Modell:
//! - Randfälle der Auswertung (0/1 Punkte, Auflösung 1, geschlossene Schleife)
//! - Offset hin und zurück
//! - AddPoint/DeleteAt im Zusammenspiel mit dem Strip-Builder

use approx::assert_abs_diff_eq;
use glam::Vec3;
use road_ribbon_editor::core::{
    build_strip, offset_polyline, StripColumns, StripParams, StripTiling,
};
use road_ribbon_editor::{BezierPath, ControlPoint, EditOutcome};

fn road_params(width: f32, tiling: StripTiling) -> StripParams {
    StripParams {
        width,
        height_offset: 0.0,
        tiling,
        flip_normals: false,
        columns: StripColumns::Three,
    }
}

fn max_turn_degrees(points: &[Vec3]) -> f32 {
    points
        .windows(3)
        .filter_map(|w| {
            let a = (w[1] - w[0]).try_normalize()?;
            let b = (w[2] - w[1]).try_normalize()?;
            Some(a.dot(b).clamp(-1.0, 1.0).acos().to_degrees())
        })
        .fold(0.0, f32::max)
}

#[test]
fn test_evaluate_fewer_than_two_points_returns_anchors() {
    let empty = BezierPath::new();
    assert!(empty.evaluate(10).is_empty());

    let single = BezierPath::from_points(vec![ControlPoint::new(Vec3::ZERO)], false);
    assert_eq!(single.evaluate(10), vec![Vec3::ZERO]);

    let single_closed = BezierPath::from_points(vec![ControlPoint::new(Vec3::ZERO)], true);
    assert_eq!(single_closed.evaluate(10), vec![Vec3::ZERO]);
}

#[test]
fn test_evaluate_resolution_one_samples_only_anchors() {
    let path = BezierPath::from_points(
        vec![
            ControlPoint::new(Vec3::ZERO),
            ControlPoint::new(Vec3::new(10.0, 0.0, 0.0)),
        ],
        false,
    );
    assert_eq!(path.evaluate(1), vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
}

#[test]
fn test_straight_path_stays_on_anchor_line() {
    let path = BezierPath::from_points(
        vec![
            ControlPoint::new(Vec3::ZERO),
            ControlPoint::new(Vec3::new(10.0, 0.0, 0.0)),
            ControlPoint::new(Vec3::new(25.0, 0.0, 0.0)),
        ],
        false,
    );
    for resolution in [1, 3, 10, 64] {
        for p in path.evaluate(resolution) {
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-5);
            assert!(p.x >= -1e-5 && p.x <= 25.0 + 1e-5);
        }
    }
}

#[test]
fn test_closed_path_returns_to_first_anchor() {
    let mut path = BezierPath::from_points(
        vec![
            ControlPoint::new(Vec3::ZERO),
            ControlPoint::new(Vec3::new(10.0, 0.0, 0.0)),
            ControlPoint::new(Vec3::new(5.0, 0.0, 8.0)),
        ],
        true,
    );
    path.smooth_handles(0.4);

    for resolution in [1, 4, 10] {
        let polyline = path.evaluate(resolution);
        assert_eq!(polyline.len(), 1 + 3 * resolution);
        let first = polyline[0];
        let last = polyline[polyline.len() - 1];
        assert_abs_diff_eq!(first.distance(last), 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_smoothing_keeps_anchors() {
    let anchors = vec![
        Vec3::ZERO,
        Vec3::new(8.0, 1.0, 3.0),
        Vec3::new(15.0, 0.0, -4.0),
        Vec3::new(30.0, 2.0, 0.0),
    ];
    let mut path = BezierPath::from_points(
        anchors.iter().copied().map(ControlPoint::new).collect(),
        false,
    );
    path.smooth_handles(0.3);
    assert_eq!(path.anchor_positions(), anchors);
}

#[test]
fn test_offset_there_and_back_is_approximately_identity() {
    // Sanfter Bogen (Radius 50), weit weg von scharfen Knicken
    let original: Vec<Vec3> = (0..=18)
        .map(|i| {
            let angle = (i as f32 * 5.0).to_radians();
            Vec3::new(angle.cos() * 50.0, 0.0, angle.sin() * 50.0)
        })
        .collect();

    let there = offset_polyline(&original, 1.5);
    let back = offset_polyline(&there, -1.5);

    assert_eq!(back.len(), original.len());
    for (a, b) in original.iter().zip(&back) {
        assert_abs_diff_eq!(a.distance(*b), 0.0, epsilon = 0.05);
    }
}

#[test]
fn test_strip_bounds_match_width_and_length_for_any_tiling() {
    let polyline = vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)];

    for tiling in [
        StripTiling::default(),
        StripTiling {
            density: 3.0,
            width_scale: 0.25,
        },
    ] {
        let mesh = build_strip(&polyline, &road_params(4.0, tiling));
        let (min, max) = mesh.bounds().expect("Mesh nicht leer");
        assert_abs_diff_eq!(max.x - min.x, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(max.z - min.z, 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(max.y - min.y, 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_three_added_points_are_smoother_than_the_raw_corner() {
    let mut path = BezierPath::new();
    for p in [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 0.0)] {
        path.add_point(p, false, 0.4);
    }
    assert_eq!(path.len(), 3);

    let raw_corner = max_turn_degrees(&path.anchor_positions());
    assert_abs_diff_eq!(raw_corner, 90.0, epsilon = 1e-3);

    let turn = max_turn_degrees(&path.evaluate(10));
    assert!(turn < raw_corner, "maximaler Knick {turn}°");
}

#[test]
fn test_delete_to_single_point_clears_mesh() {
    let mut path = BezierPath::new();
    path.add_point(Vec3::ZERO, false, 0.4);
    path.add_point(Vec3::new(10.0, 0.0, 0.0), false, 0.4);
    let params = road_params(4.0, StripTiling::default());
    assert_eq!(build_strip(&path.evaluate(10), &params).vertex_count(), 33);

    assert_eq!(path.delete_at(1, 0.4), EditOutcome::ClearGeometry);
    assert_eq!(path.len(), 1);
    assert_eq!(build_strip(&path.evaluate(10), &params).vertex_count(), 0);
}
