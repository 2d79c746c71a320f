use crate::app::generators::{RailingSettings, RoadMeshSettings, TrafficLine, TrafficLineId};
use crate::app::RoadSettings;
use crate::core::{HandleKind, Side};
use crate::shared::EditorOptions;
use glam::Vec3;
use std::path::PathBuf;

/// Editor-Intents sind Eingaben des Hosts ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Neuen Punkt an Weltposition setzen (Ende oder Anfang laut Optionen)
    PointAddRequested { position: Vec3 },
    /// Anker oder Handle in der Nähe einer Weltposition anwählen
    PickRequested { position: Vec3, max_distance: f32 },
    /// Anker oder Handle direkt anwählen
    HandlePicked { index: usize, handle: HandleKind },
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Drag-Lifecycle Start: Undo-Snapshot für die folgende Verschiebung
    DragStarted,
    /// Drag-Lifecycle Update: Selektierten Anker bzw. Handle an Position ziehen
    SelectionDragged { position: Vec3 },

    /// Selektierten Punkt löschen
    DeleteSelectedRequested,
    /// Punkt per Index löschen
    DeletePointRequested { index: usize },
    /// Alle Punkte entfernen
    ClearPointsRequested,
    /// Pfad schließen/öffnen
    ClosedToggled { closed: bool },
    /// Alle Handles neu glätten
    RecalculateHandlesRequested,
    /// Glättungs-Spannung geändert
    TensionChanged { tension: f32 },
    /// Samples pro Segment geändert
    ResolutionChanged { resolution: usize },

    /// Fahrbahn-Einstellungen geändert
    RoadSettingsChanged { settings: RoadMeshSettings },
    /// Leitplanken-Einstellungen einer Seite geändert
    RailingSettingsChanged { side: Side, settings: RailingSettings },
    /// Übertragene Einstellungen einfügen
    SettingsPasted { settings: RoadSettings },
    /// Neue Fahrbahnlinie anlegen
    AddTrafficLineRequested,
    /// Fahrbahnlinie entfernen
    RemoveTrafficLineRequested { id: TrafficLineId },
    /// Fahrbahnlinie bearbeitet
    TrafficLineChanged { id: TrafficLineId, line: TrafficLine },
    /// Fahrbahnlinien ein-/ausblenden
    TrafficLinesToggled { visible: bool },
    /// Optionen wurden im Host geändert
    OptionsChanged { options: EditorOptions },

    /// Boost gestartet, Objekt steht an `position`
    BoostStarted { position: Vec3 },
    /// Boost vorzeitig beendet
    BoostStopped,
    /// Objekt der Flammenspur hat sich bewegt
    TrailObjectMoved { position: Vec3 },

    /// Dokument wurde zum Öffnen ausgewählt
    DocumentOpenRequested { path: PathBuf },
    /// Speicherpfad wurde ausgewählt
    DocumentSaveRequested { path: PathBuf },
    /// Undo-Schritt
    UndoRequested,
    /// Redo-Schritt
    RedoRequested,
    /// Meshes komplett neu bauen
    RegenerateRequested,
}
