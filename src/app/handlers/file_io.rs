//! Handler für Laden und Speichern von Straßen-Dokumenten.

use crate::app::{EditorState, RoadDocument};
use std::path::Path;

/// Lädt ein Dokument und ersetzt Pfad und Einstellungen.
///
/// Bei Fehlern bleibt der Editor unverändert.
pub fn load(state: &mut EditorState, path: &Path) -> anyhow::Result<()> {
    let document = RoadDocument::load_from_file(path)?;
    document.apply_to(state);
    Ok(())
}

/// Speichert den aktuellen Stand als Dokument.
pub fn save(state: &EditorState, path: &Path) -> anyhow::Result<()> {
    RoadDocument::capture(state).save_to_file(path)
}
