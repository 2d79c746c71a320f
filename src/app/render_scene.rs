//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::core::{Side, StripMesh};
use crate::shared::{MaterialHandle, MeshKind, RenderScene, SceneMesh};
use std::sync::Arc;

fn push_mesh(
    meshes: &mut Vec<SceneMesh>,
    kind: MeshKind,
    mesh: &Arc<StripMesh>,
    material: Option<MaterialHandle>,
    collider: bool,
) {
    if mesh.is_empty() {
        return;
    }
    meshes.push(SceneMesh {
        kind,
        mesh: Arc::clone(mesh),
        material,
        collider,
    });
}

/// Baut eine RenderScene aus dem aktuellen EditorState.
///
/// Leere Meshes werden ausgelassen; alle Meshes sind geteilte `Arc`s.
pub fn build(state: &EditorState) -> RenderScene {
    let mut meshes = Vec::new();

    let road = state.road.settings();
    push_mesh(
        &mut meshes,
        MeshKind::Road,
        state.road.road_mesh(),
        road.road_material,
        true,
    );
    for side in [Side::Left, Side::Right] {
        push_mesh(
            &mut meshes,
            MeshKind::Terrain(side),
            state.road.terrain_mesh(side),
            road.terrain_material,
            false,
        );
    }
    for side in [Side::Left, Side::Right] {
        let railing = state.railing(side);
        push_mesh(
            &mut meshes,
            MeshKind::Railing(side),
            railing.mesh(),
            railing.settings().material,
            railing.settings().add_colliders,
        );
    }
    for (id, generator) in state.traffic_lines.iter() {
        push_mesh(
            &mut meshes,
            MeshKind::TrafficLine(id.0),
            generator.mesh(),
            generator.line().material,
            false,
        );
    }
    push_mesh(
        &mut meshes,
        MeshKind::FlameTrail,
        state.flame_trail.mesh(),
        None,
        false,
    );

    RenderScene {
        curve: Arc::clone(&state.polyline),
        is_closed: state.path.is_closed,
        control_points: state.path.points.clone(),
        selected_index: state.selection.selected_index,
        selected_handle: state.selection.selected_handle,
        meshes,
        arrows: state.traffic_lines.arrows(),
    }
}
