//! Eigenschaften aller Mesh-Builder auf einer gekrümmten Polyline:
//! gültige Indizes, endliche Werte, Normalenrichtung.

use glam::Vec3;
use road_ribbon_editor::core::{
    build_railing_planes, build_railing_walls, build_shoulder, build_strip, offset_polyline,
    ShoulderParams, StripColumns, StripParams, StripTiling,
};
use road_ribbon_editor::{BezierPath, ControlPoint, Side, StripMesh};

fn curvy_polyline() -> Vec<Vec3> {
    let mut path = BezierPath::from_points(
        vec![
            ControlPoint::new(Vec3::ZERO),
            ControlPoint::new(Vec3::new(20.0, 0.5, 5.0)),
            ControlPoint::new(Vec3::new(35.0, 1.0, -10.0)),
            ControlPoint::new(Vec3::new(60.0, 0.0, 0.0)),
        ],
        false,
    );
    path.smooth_handles(0.4);
    path.evaluate(12)
}

fn assert_well_formed(mesh: &StripMesh) {
    assert_eq!(mesh.triangles.len() % 3, 0);
    assert_eq!(mesh.uvs.len(), mesh.vertices.len());
    assert!(mesh
        .triangles
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
    assert!(mesh.vertices.iter().all(|v| v.is_finite()));
    assert!(mesh.uvs.iter().all(|uv| uv.is_finite()));
}

fn triangle_normals(mesh: &StripMesh) -> Vec<(Vec3, Vec3)> {
    mesh.triangles
        .chunks_exact(3)
        .map(|t| {
            let a = mesh.vertices[t[0] as usize];
            let b = mesh.vertices[t[1] as usize];
            let c = mesh.vertices[t[2] as usize];
            ((b - a).cross(c - a), (a + b + c) / 3.0)
        })
        .collect()
}

#[test]
fn test_road_strip_faces_up_and_down_when_flipped() {
    let polyline = curvy_polyline();
    let mut params = StripParams {
        width: 4.0,
        height_offset: 0.0,
        tiling: StripTiling::default(),
        flip_normals: false,
        columns: StripColumns::Three,
    };

    let mesh = build_strip(&polyline, &params);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertex_count(), polyline.len() * 3);
    assert_eq!(mesh.triangles.len(), (polyline.len() - 1) * 12);
    assert!(triangle_normals(&mesh).iter().all(|(n, _)| n.y > 0.0));

    params.flip_normals = true;
    let flipped = build_strip(&polyline, &params);
    assert!(triangle_normals(&flipped).iter().all(|(n, _)| n.y < 0.0));
}

#[test]
fn test_shoulders_are_well_formed_on_both_sides() {
    let polyline = curvy_polyline();
    let params = ShoulderParams {
        road_width: 4.0,
        size: 2.0,
        height_offset: 0.0,
        outer_height_offset: -0.8,
        uv_horizontal_tile: 1.0,
        uv_density: 0.5,
    };
    for side in [Side::Left, Side::Right] {
        let mesh = build_shoulder(&polyline, &params, side);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), polyline.len() * 2);
        assert!(triangle_normals(&mesh).iter().all(|(n, _)| n.y > 0.0));
    }
}

#[test]
fn test_railing_planes_face_away_from_road() {
    let polyline = curvy_polyline();
    for side in [Side::Left, Side::Right] {
        let path = offset_polyline(&polyline, side.sign() * 3.0);
        let mesh = build_railing_planes(&path, side, 1.0, 2.0);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), (path.len() - 1) * 4);

        for (normal, center) in triangle_normals(&mesh) {
            // Nächster Fahrbahnpunkt als Referenz für "außen"
            let nearest = polyline
                .iter()
                .copied()
                .min_by(|a, b| {
                    a.distance_squared(center)
                        .total_cmp(&b.distance_squared(center))
                })
                .expect("Polyline nicht leer");
            let outward = Vec3::new(center.x - nearest.x, 0.0, center.z - nearest.z);
            assert!(normal.dot(outward) > 0.0, "{side:?}: Normale zeigt zur Fahrbahn");
        }
    }
}

#[test]
fn test_railing_walls_are_well_formed() {
    let polyline = offset_polyline(&curvy_polyline(), 3.0);
    let mesh = build_railing_walls(&polyline, 1.0, 2.0);
    assert_well_formed(&mesh);
    assert!(triangle_normals(&mesh).iter().all(|(n, _)| n.length() > 0.0));
}

#[test]
fn test_interleaved_buffer_matches_vertex_count() {
    let polyline = curvy_polyline();
    let params = StripParams {
        width: 4.0,
        height_offset: 0.0,
        tiling: StripTiling::default(),
        flip_normals: false,
        columns: StripColumns::Two,
    };
    let mesh = build_strip(&polyline, &params);
    let vertices = mesh.interleaved();
    assert_eq!(vertices.len(), mesh.vertex_count());
    assert_eq!(vertices[0].position, mesh.vertices[0].to_array());
    assert_eq!(mesh.index_bytes().len(), mesh.triangles.len() * 4);
}
