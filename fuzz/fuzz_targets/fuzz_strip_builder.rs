#![no_main]

use libfuzzer_sys::fuzz_target;
use road_ribbon_editor::core::{build_strip, StripColumns, StripParams, StripTiling};
use road_ribbon_editor::glam::Vec3;

fuzz_target!(|data: &[u8]| {
    let points: Vec<Vec3> = data
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0] as f32 - 128.0, c[1] as f32 * 0.1, c[2] as f32 - 128.0))
        .collect();

    let params = StripParams {
        width: 4.0,
        height_offset: 0.0,
        tiling: StripTiling::default(),
        flip_normals: data.first().is_some_and(|b| b % 2 == 1),
        columns: StripColumns::Three,
    };
    let mesh = build_strip(&points, &params);

    if points.len() >= 2 {
        assert_eq!(mesh.vertex_count(), points.len() * 3);
    }
    assert!(mesh.vertices.iter().all(|v| v.is_finite()));
});
