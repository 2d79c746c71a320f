//! JSON-Dokument einer Straße (Kontrollpunkte + Einstellungen) und Mesh-Export.

use super::{EditorState, RoadSettings};
use crate::core::{BezierPath, ControlPoint, StripMesh};
use crate::shared::{ArrowMarker, MaterialHandle, MeshKind, RenderScene};
use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persistierbarer Stand eines Editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadDocument {
    /// Kontrollpunkte in Pfad-Reihenfolge
    pub points: Vec<ControlPoint>,
    /// Geschlossene Schleife
    #[serde(default)]
    pub closed: bool,
    /// Generator-Einstellungen
    #[serde(default)]
    pub settings: RoadSettings,
}

impl RoadDocument {
    /// Parst ein Dokument aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let document: Self =
            serde_json::from_str(json).context("Straßen-Dokument ist kein gültiges JSON")?;
        for (index, point) in document.points.iter().enumerate() {
            let finite = [point.position, point.handle_in, point.handle_out]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                anyhow::bail!("Kontrollpunkt {} enthält ungültige Koordinaten", index);
            }
        }
        Ok(document)
    }

    /// Serialisiert als formatiertes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Straßen-Dokument nicht serialisierbar")
    }

    /// Lädt ein Dokument aus einer Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Dokument nicht lesbar: {}", path.display()))?;
        let document = Self::from_json(&content)
            .with_context(|| format!("Dokument fehlerhaft: {}", path.display()))?;
        log::info!(
            "Dokument geladen: {} ({} Punkte)",
            path.display(),
            document.points.len()
        );
        Ok(document)
    }

    /// Speichert das Dokument in eine Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Dokument nicht schreibbar: {}", path.display()))?;
        log::info!("Dokument gespeichert: {}", path.display());
        Ok(())
    }

    /// Erfasst Pfad und Einstellungen eines Editors.
    pub fn capture(state: &EditorState) -> Self {
        Self {
            points: state.path.points.clone(),
            closed: state.path.is_closed,
            settings: RoadSettings::capture(state),
        }
    }

    /// Ersetzt Pfad und Einstellungen eines Editors; Selektion und History werden verworfen.
    pub fn apply_to(&self, state: &mut EditorState) {
        state.path = BezierPath::from_points(self.points.clone(), self.closed);
        state.selection.clear();
        state.history.clear();
        self.settings.apply_to(state);
    }
}

/// Ein exportiertes Mesh.
#[derive(Debug, Serialize)]
pub struct MeshExport<'a> {
    /// Herkunft
    pub kind: MeshKind,
    /// Material des Hosts
    pub material: Option<MaterialHandle>,
    /// Collider gewünscht
    pub collider: bool,
    /// Geometrie
    pub mesh: &'a StripMesh,
}

/// Serialisierbare Sicht auf eine `RenderScene` (für den Headless-Export).
#[derive(Debug, Serialize)]
pub struct SceneExport<'a> {
    /// Ausgewertete Kurve
    pub curve: &'a [Vec3],
    /// Alle nicht-leeren Meshes
    pub meshes: Vec<MeshExport<'a>>,
    /// Richtungspfeile
    pub arrows: &'a [ArrowMarker],
}

impl<'a> SceneExport<'a> {
    /// Erstellt die Export-Sicht, ohne Meshes zu kopieren.
    pub fn from_scene(scene: &'a RenderScene) -> Self {
        Self {
            curve: &scene.curve,
            meshes: scene
                .meshes
                .iter()
                .map(|m| MeshExport {
                    kind: m.kind,
                    material: m.material,
                    collider: m.collider,
                    mesh: &m.mesh,
                })
                .collect(),
            arrows: &scene.arrows,
        }
    }

    /// Serialisiert als formatiertes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Mesh-Export nicht serialisierbar")
    }
}
