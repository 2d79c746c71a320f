use crate::app::generators::{RailingSettings, RoadMeshSettings, TrafficLine, TrafficLineId};
use crate::app::RoadSettings;
use crate::core::{HandleKind, Side};
use crate::shared::EditorOptions;
use glam::Vec3;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Punkt anhängen (`at_start` = am Anfang einfügen)
    AddPoint { position: Vec3, at_start: bool },
    /// Punkt starr verschieben
    MovePoint { index: usize, position: Vec3 },
    /// Einzelnen Handle verschieben
    MoveHandle {
        index: usize,
        handle: HandleKind,
        position: Vec3,
    },
    /// Anker bzw. Handle selektieren
    SelectHandle { index: usize, handle: HandleKind },
    /// Selektion aufheben
    ClearSelection,
    /// Undo-Snapshot vor einer Drag-Verschiebung
    BeginDrag,
    /// Punkt löschen
    DeletePoint { index: usize },
    /// Alle Punkte entfernen
    ClearPoints,
    /// Geschlossen-Flag setzen
    SetClosed { closed: bool },
    /// Alle Handles neu glätten
    RecalculateHandles,
    /// Glättungs-Spannung setzen
    SetTension { tension: f32 },
    /// Samples pro Segment setzen
    SetResolution { resolution: usize },
    /// Fahrbahn-Einstellungen setzen
    SetRoadSettings { settings: RoadMeshSettings },
    /// Leitplanken-Einstellungen einer Seite setzen
    SetRailingSettings { side: Side, settings: RailingSettings },
    /// Übertragene Einstellungen vollständig anwenden
    ApplySettings { settings: RoadSettings },
    /// Fahrbahnlinie anlegen
    AddTrafficLine,
    /// Fahrbahnlinie entfernen
    RemoveTrafficLine { id: TrafficLineId },
    /// Fahrbahnlinie ersetzen
    UpdateTrafficLine { id: TrafficLineId, line: TrafficLine },
    /// Fahrbahnlinien ein-/ausblenden
    SetTrafficLinesVisible { visible: bool },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Flammenspur starten
    StartBoost { position: Vec3 },
    /// Flammenspur anhalten
    StopBoost,
    /// Position des Spur-Objekts aktualisieren
    MoveTrailObject { position: Vec3 },
    /// Dokument laden und Editor ersetzen
    LoadDocument { path: PathBuf },
    /// Aktuellen Stand als Dokument speichern
    SaveDocument { path: PathBuf },
    /// Undo-Schritt
    Undo,
    /// Redo-Schritt
    Redo,
    /// Meshes komplett neu bauen
    Regenerate,
}
