//! Handler für das Bearbeiten von Kontrollpunkten und Pfad-Parametern.

use crate::app::history::Snapshot;
use crate::app::EditorState;
use crate::core::{EditOutcome, HandleKind};
use crate::shared::{clamp_resolution, clamp_tension};
use glam::Vec3;

/// Legt den vorher erstellten Snapshot nur ab, wenn sich der Pfad geändert hat,
/// und baut danach die Meshes neu.
fn finish_edit(state: &mut EditorState, before: Snapshot, outcome: EditOutcome) {
    if outcome.is_changed() {
        state.history.record_snapshot(before);
    }
    state.apply_edit_outcome(outcome);
}

/// Fügt einen Punkt am Ende (bzw. Anfang) hinzu und selektiert ihn.
pub fn add_point(state: &mut EditorState, position: Vec3, at_start: bool) {
    let before = Snapshot::from_state(state);
    let tension = state.tension();
    let outcome = state.path.add_point(position, at_start, tension);

    let index = if at_start { 0 } else { state.path.len() - 1 };
    state.selection.select(index, HandleKind::Anchor);
    log::info!(
        "Punkt {} hinzugefügt bei ({:.2}, {:.2}, {:.2})",
        index,
        position.x,
        position.y,
        position.z
    );
    finish_edit(state, before, outcome);
}

/// Merkt den Zustand vor einer Drag-Verschiebung für Undo.
pub fn begin_drag(state: &mut EditorState) {
    state.record_undo_snapshot();
}

/// Verschiebt einen Punkt starr. Kein eigener Undo-Snapshot (siehe `begin_drag`).
pub fn move_point(state: &mut EditorState, index: usize, position: Vec3) {
    let outcome = state.path.update_point_position(index, position);
    state.apply_edit_outcome(outcome);
}

/// Verschiebt einen einzelnen Handle. Kein eigener Undo-Snapshot (siehe `begin_drag`).
pub fn move_handle(state: &mut EditorState, index: usize, handle: HandleKind, position: Vec3) {
    let outcome = state.path.update_control_handle(index, handle, position);
    state.apply_edit_outcome(outcome);
}

/// Löscht einen Punkt und passt die Selektion an.
pub fn delete_point(state: &mut EditorState, index: usize) {
    let before = Snapshot::from_state(state);
    let tension = state.tension();
    let outcome = state.path.delete_at(index, tension);
    if !outcome.is_changed() {
        return;
    }

    match state.selection.selected_index {
        Some(selected) if selected == index => state.selection.clear(),
        Some(selected) if selected > index => state.selection.selected_index = Some(selected - 1),
        _ => {}
    }
    log::info!("Punkt {} gelöscht, {} verbleibend", index, state.path.len());
    finish_edit(state, before, outcome);
}

/// Entfernt alle Punkte.
pub fn clear_points(state: &mut EditorState) {
    let before = Snapshot::from_state(state);
    let outcome = state.path.clear();
    state.selection.clear();
    finish_edit(state, before, outcome);
}

/// Schließt bzw. öffnet den Pfad.
pub fn set_closed(state: &mut EditorState, closed: bool) {
    if state.path.is_closed == closed {
        return;
    }
    let before = Snapshot::from_state(state);
    state.path.is_closed = closed;
    log::info!("Pfad geschlossen: {}", closed);
    finish_edit(state, before, EditOutcome::for_point_count(state.path.len()));
}

/// Glättet alle Handles mit der aktuellen Spannung neu.
pub fn recalculate_handles(state: &mut EditorState) {
    if state.path.len() < 2 {
        log::debug!("Neu-Glättung übersprungen: weniger als 2 Punkte");
        return;
    }
    let before = Snapshot::from_state(state);
    let tension = state.tension();
    state.path.smooth_handles(tension);
    finish_edit(state, before, EditOutcome::Rebuild);
}

/// Setzt die Spannung für künftige Glättungen (ohne bestehende Handles zu ändern).
pub fn set_tension(state: &mut EditorState, tension: f32) {
    state.options.curve_tension = clamp_tension(tension);
}

/// Setzt die Samples pro Segment und baut neu.
pub fn set_resolution(state: &mut EditorState, resolution: usize) {
    let requested = resolution;
    let resolution = clamp_resolution(requested);
    if resolution != requested {
        log::warn!("Auflösung {} ist ungültig, verwende {}", requested, resolution);
    }
    if state.options.curve_resolution == resolution {
        return;
    }
    state.options.curve_resolution = resolution;
    state.apply_edit_outcome(EditOutcome::for_point_count(state.path.len()));
}
