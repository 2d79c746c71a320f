//! Handler für die Flammenspur.

use crate::app::flame_trail::GroundProbe;
use crate::app::EditorState;
use glam::Vec3;

/// Startet einen Boost am übergebenen Ort.
pub fn start_boost(state: &mut EditorState, ground: &dyn GroundProbe, position: Vec3) {
    state.trail_object_position = Some(position);
    state.flame_trail.start_boost(position, ground);
}

/// Beendet den Boost, die Spur bleibt stehen.
pub fn stop_boost(state: &mut EditorState) {
    state.flame_trail.stop_boost();
}

/// Aktualisiert die Position des Spur-Objekts (ausgewertet im nächsten `tick`).
pub fn move_trail_object(state: &mut EditorState, position: Vec3) {
    state.trail_object_position = Some(position);
}

/// Schaltet die Flammenspur um `dt` Sekunden weiter.
pub fn tick(state: &mut EditorState, ground: &dyn GroundProbe, dt: f32) {
    let Some(position) = state.trail_object_position else {
        return;
    };
    state.flame_trail.tick(dt, position, ground);
}
