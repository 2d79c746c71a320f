//! Zentrale Datenhaltung des Editors.

use super::flame_trail::{FlameTrail, FlameTrailSettings};
use super::generators::{
    RailingGenerator, RailingSettings, RoadGenerator, RoadMeshSettings, TrafficLine,
    TrafficLineRegistry,
};
use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{BezierPath, EditOutcome, HandleKind, Side};
use crate::shared::{clamp_tension, EditorOptions};
use glam::Vec3;
use std::sync::Arc;

/// Auswahlbezogener Zustand (reiner UI-Zustand, nicht Teil der Geometrie)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Index des selektierten Kontrollpunkts
    pub selected_index: Option<usize>,
    /// Selektierter Teil des Kontrollpunkts
    pub selected_handle: HandleKind,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektiert einen Punkt bzw. Handle.
    pub fn select(&mut self, index: usize, handle: HandleKind) {
        self.selected_index = Some(index);
        self.selected_handle = handle;
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_index = None;
        self.selected_handle = HandleKind::None;
    }
}

/// Hauptzustand des Editors
pub struct EditorState {
    /// Bézier-Pfad (Kontrollpunkte + geschlossen)
    pub path: BezierPath,
    /// Zuletzt ausgewertete Polyline
    pub polyline: Arc<Vec<Vec3>>,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufzeit-Optionen (Auflösung, Spannung, Standardwerte)
    pub options: EditorOptions,
    /// Fahrbahn und Bankette
    pub road: RoadGenerator,
    /// Leitplanke links
    pub left_railing: RailingGenerator,
    /// Leitplanke rechts
    pub right_railing: RailingGenerator,
    /// Fahrbahnlinien
    pub traffic_lines: TrafficLineRegistry,
    /// Flammenspur
    pub flame_trail: FlameTrail,
    /// Aktuelle Position des Objekts, das die Flammenspur zieht
    pub trail_object_position: Option<Vec3>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// `init()` wurde bereits ausgeführt
    pub initialized: bool,
}

impl EditorState {
    /// Erstellt einen neuen, leeren Editor-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Editor-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let railing = RailingSettings::from_options(&options);
        Self {
            path: BezierPath::new(),
            polyline: Arc::default(),
            selection: SelectionState::new(),
            road: RoadGenerator::new(RoadMeshSettings::from_options(&options)),
            left_railing: RailingGenerator::new(Side::Left, railing.clone()),
            right_railing: RailingGenerator::new(Side::Right, railing),
            traffic_lines: TrafficLineRegistry::new(),
            flame_trail: FlameTrail::new(FlameTrailSettings::from_options(&options)),
            trail_object_position: None,
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
            options,
            initialized: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück
    pub fn point_count(&self) -> usize {
        self.path.len()
    }

    /// Spannung für Glättungen, auf den gültigen Bereich begrenzt
    pub fn tension(&self) -> f32 {
        clamp_tension(self.options.curve_tension)
    }

    /// Samples pro Bézier-Segment
    pub fn resolution(&self) -> usize {
        self.options.curve_resolution
    }

    /// Vorlage für neue Fahrbahnlinien
    pub fn traffic_line_template(&self) -> TrafficLine {
        TrafficLine::from_options(&self.options)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Wertet den Pfad aus und baut alle Generatoren neu.
    pub fn regenerate_geometry(&mut self) {
        let polyline = self.path.evaluate(self.resolution());
        if polyline.len() < 2 {
            self.clear_geometry();
            // Leere Polyline als gebaut markieren
            self.road.regenerate(&polyline);
            self.polyline = Arc::new(polyline);
            return;
        }

        self.road.regenerate(&polyline);
        self.left_railing.regenerate(&polyline);
        self.right_railing.regenerate(&polyline);
        self.traffic_lines.regenerate_all(&polyline);
        self.polyline = Arc::new(polyline);
    }

    /// Baut nur neu, wenn sich die ausgewertete Polyline geändert hat.
    ///
    /// Gibt zurück, ob neu gebaut wurde.
    pub fn sync_geometry(&mut self) -> bool {
        let polyline = self.path.evaluate(self.resolution());
        if !self.road.needs_rebuild(&polyline) {
            return false;
        }
        self.regenerate_geometry();
        true
    }

    /// Leert alle generierten Meshes.
    pub fn clear_geometry(&mut self) {
        self.road.clear();
        self.left_railing.clear();
        self.right_railing.clear();
        self.traffic_lines.clear_all();
        self.polyline = Arc::default();
    }

    /// Setzt das Ergebnis einer Bearbeitung in Mesh-Neubau bzw. Leeren um.
    pub fn apply_edit_outcome(&mut self, outcome: EditOutcome) {
        match outcome {
            EditOutcome::Unchanged => {}
            EditOutcome::Rebuild => self.regenerate_geometry(),
            EditOutcome::ClearGeometry => {
                let polyline = self.path.evaluate(self.resolution());
                self.clear_geometry();
                // Kurze Polyline als gebaut markieren
                self.road.regenerate(&polyline);
                self.polyline = Arc::new(polyline);
            }
        }
    }

    /// Generator einer Leitplanken-Seite
    pub fn railing(&self, side: Side) -> &RailingGenerator {
        match side {
            Side::Left => &self.left_railing,
            Side::Right => &self.right_railing,
        }
    }

    /// Veränderbarer Generator einer Leitplanken-Seite
    pub fn railing_mut(&mut self, side: Side) -> &mut RailingGenerator {
        match side {
            Side::Left => &mut self.left_railing,
            Side::Right => &mut self.right_railing,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
