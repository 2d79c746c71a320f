//! Übertragbare Straßen-Einstellungen (Kopieren/Einfügen zwischen Editoren).
//!
//! Reiner Wert: der Aufrufer hält die Kopie selbst, es gibt keine globale
//! Zwischenablage.

use super::generators::{RailingSettings, RoadMeshSettings, TrafficLine};
use super::EditorState;
use serde::{Deserialize, Serialize};

/// Alle Generator-Einstellungen eines Editors, ohne Kontrollpunkte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSettings {
    /// Fahrbahn und Bankette
    pub road: RoadMeshSettings,
    /// Leitplanke links
    pub left_railing: RailingSettings,
    /// Leitplanke rechts
    pub right_railing: RailingSettings,
    /// Fahrbahnlinien sichtbar
    #[serde(default = "default_show_traffic_lines")]
    pub show_traffic_lines: bool,
    /// Fahrbahnlinien in Reihenfolge
    #[serde(default)]
    pub traffic_lines: Vec<TrafficLine>,
}

fn default_show_traffic_lines() -> bool {
    true
}

impl Default for RoadSettings {
    fn default() -> Self {
        Self {
            road: RoadMeshSettings::default(),
            left_railing: RailingSettings::default(),
            right_railing: RailingSettings::default(),
            show_traffic_lines: true,
            traffic_lines: vec![TrafficLine::default()],
        }
    }
}

impl RoadSettings {
    /// Liest die aktuellen Einstellungen aus einem Editor.
    pub fn capture(state: &EditorState) -> Self {
        Self {
            road: state.road.settings().clone(),
            left_railing: state.left_railing.settings().clone(),
            right_railing: state.right_railing.settings().clone(),
            show_traffic_lines: state.traffic_lines.show_lines(),
            traffic_lines: state.traffic_lines.lines(),
        }
    }

    /// Überträgt die Einstellungen auf einen Editor und baut alle Meshes neu.
    ///
    /// Die Fahrbahnlinien werden komplett ersetzt und erhalten neue IDs.
    pub fn apply_to(&self, state: &mut EditorState) {
        state.road.set_settings(self.road.clone());
        state.left_railing.set_settings(self.left_railing.clone());
        state.right_railing.set_settings(self.right_railing.clone());
        state.traffic_lines.set_show_lines(self.show_traffic_lines);
        state.traffic_lines.replace_all(self.traffic_lines.clone());
        state.regenerate_geometry();
        log::info!(
            "Einstellungen übernommen ({} Fahrbahnlinien)",
            self.traffic_lines.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::generators::RailingKind;
    use crate::core::{ControlPoint, Side};
    use glam::Vec3;

    fn editor_with_road() -> EditorState {
        let mut state = EditorState::new();
        state.path.points = vec![
            ControlPoint::new(Vec3::ZERO),
            ControlPoint::new(Vec3::new(20.0, 0.0, 0.0)),
        ];
        state.path.smooth_handles(0.4);
        state
    }

    #[test]
    fn test_transfer_between_two_editors() {
        let mut source = editor_with_road();
        let mut road = source.road.settings().clone();
        road.width = 7.5;
        road.flip_normals = true;
        source.road.set_settings(road);
        let mut railing = source.left_railing.settings().clone();
        railing.kind = RailingKind::Wall;
        source.left_railing.set_settings(railing);
        source.traffic_lines.add_line(TrafficLine::default());
        source.traffic_lines.add_line(TrafficLine::default());
        source.traffic_lines.set_show_lines(false);

        let copied = RoadSettings::capture(&source);

        let mut target = editor_with_road();
        copied.apply_to(&mut target);

        assert_eq!(RoadSettings::capture(&target), copied);
        assert_eq!(target.road.settings().width, 7.5);
        assert_eq!(target.railing(Side::Left).settings().kind, RailingKind::Wall);
        assert!(!target.railing(Side::Left).mesh().is_empty());
        assert!(target.railing(Side::Right).mesh().is_empty());
        assert_eq!(target.traffic_lines.len(), 2);
        // Anwenden baut die Meshes sofort
        assert!(!target.road.road_mesh().is_empty());
    }

    #[test]
    fn test_serde_defaults_for_missing_lines() {
        let settings = RoadSettings::default();
        let mut json = serde_json::to_value(&settings).expect("serialisierbar");
        if let Some(map) = json.as_object_mut() {
            map.remove("traffic_lines");
            map.remove("show_traffic_lines");
        }
        let parsed: RoadSettings = serde_json::from_value(json).expect("parsebar");
        assert!(parsed.show_traffic_lines);
        assert!(parsed.traffic_lines.is_empty());
    }
}
