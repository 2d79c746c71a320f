#![no_main]

use libfuzzer_sys::fuzz_target;
use road_ribbon_editor::{EditorController, EditorState, RoadDocument};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = RoadDocument::from_json(text) else {
        return;
    };

    let mut state = EditorState::new();
    let mut controller = EditorController::new();
    document.apply_to(&mut state);
    controller.init(&mut state);

    let scene = controller.render(&state);
    for mesh in &scene.meshes {
        assert!(mesh.mesh.triangles.len() % 3 == 0);
        assert!(mesh
            .mesh
            .triangles
            .iter()
            .all(|&i| (i as usize) < mesh.mesh.vertices.len()));
    }
});
