//! Handler für Generator-Einstellungen, Fahrbahnlinien und Optionen.

use crate::app::generators::{RailingSettings, RoadMeshSettings, TrafficLine, TrafficLineId};
use crate::app::{EditorState, RoadSettings};
use crate::core::Side;
use crate::shared::EditorOptions;

/// Setzt die Fahrbahn-Einstellungen und baut neu.
pub fn set_road_settings(state: &mut EditorState, settings: RoadMeshSettings) {
    state.road.set_settings(settings);
    state.regenerate_geometry();
}

/// Setzt die Leitplanken-Einstellungen einer Seite und baut neu.
pub fn set_railing_settings(state: &mut EditorState, side: Side, settings: RailingSettings) {
    state.railing_mut(side).set_settings(settings);
    state.regenerate_geometry();
}

/// Übernimmt kopierte Einstellungen vollständig.
pub fn apply_settings(state: &mut EditorState, settings: &RoadSettings) {
    settings.apply_to(state);
}

/// Legt eine neue Fahrbahnlinie an (Versatz = letzte + 1).
pub fn add_traffic_line(state: &mut EditorState) {
    let template = state.traffic_line_template();
    let id = state.traffic_lines.add_line(template);
    log::info!("Fahrbahnlinie {:?} angelegt", id);
    state.regenerate_geometry();
}

/// Entfernt eine Fahrbahnlinie.
pub fn remove_traffic_line(state: &mut EditorState, id: TrafficLineId) {
    if state.traffic_lines.remove(id).is_none() {
        log::warn!("Fahrbahnlinie {:?} existiert nicht", id);
        return;
    }
    log::info!("Fahrbahnlinie {:?} entfernt", id);
}

/// Ersetzt die Einstellungen einer Fahrbahnlinie und baut neu.
pub fn update_traffic_line(state: &mut EditorState, id: TrafficLineId, line: TrafficLine) {
    let Some(generator) = state.traffic_lines.get_mut(id) else {
        log::warn!("Fahrbahnlinie {:?} existiert nicht", id);
        return;
    };
    *generator.line_mut() = line;
    state.regenerate_geometry();
}

/// Blendet alle Fahrbahnlinien ein oder aus.
pub fn set_traffic_lines_visible(state: &mut EditorState, visible: bool) {
    state.traffic_lines.set_show_lines(visible);
    state.regenerate_geometry();
}

/// Übernimmt neue Optionen (Auflösung, Spannung, Standardwerte neuer Objekte).
pub fn apply_options(state: &mut EditorState, options: EditorOptions) {
    let options = options.sanitized();
    let resolution_changed = state.options.curve_resolution != options.curve_resolution;
    state.options = options;
    if resolution_changed {
        state.regenerate_geometry();
    }
}

/// Baut alle Meshes unbedingt neu.
pub fn regenerate(state: &mut EditorState) {
    state.regenerate_geometry();
    log::info!("Meshes neu gebaut ({} Polyline-Punkte)", state.polyline.len());
}
