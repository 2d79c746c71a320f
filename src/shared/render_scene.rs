//! Render-Szene als expliziter Übergabevertrag zwischen App und Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host (Engine, Viewer,
//! Headless-Export) sie nur liest.

use crate::core::{ControlPoint, HandleKind, Side, StripMesh};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaker Verweis auf ein Material des Hosts. Wird vom Core nie interpretiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub u64);

/// Herkunft eines Meshes in der Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeshKind {
    /// Fahrbahn
    Road,
    /// Bankett links bzw. rechts der Fahrbahn
    Terrain(Side),
    /// Leitplanke
    Railing(Side),
    /// Fahrbahnlinie mit Registry-ID
    TrafficLine(u64),
    /// Flammenspur
    FlameTrail,
}

/// Ein Mesh mit Material und Kollisions-Flag.
#[derive(Debug, Clone)]
pub struct SceneMesh {
    /// Herkunft
    pub kind: MeshKind,
    /// Geometrie (geteilt, read-only)
    pub mesh: Arc<StripMesh>,
    /// Material des Hosts
    pub material: Option<MaterialHandle>,
    /// Host soll einen Collider aus dem Mesh erzeugen
    pub collider: bool,
}

/// Richtungspfeil entlang einer Fahrbahnlinie (Overlay).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowMarker {
    /// Pfeilspitze (Segmentmitte)
    pub position: Vec3,
    /// Fahrtrichtung (normiert)
    pub direction: Vec3,
    /// Endpunkt des linken Flügels
    pub left_wing: Vec3,
    /// Endpunkt des rechten Flügels
    pub right_wing: Vec3,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Ausgewertete Kurve (Polyline)
    pub curve: Arc<Vec<Vec3>>,
    /// Geschlossene Schleife
    pub is_closed: bool,
    /// Kontrollpunkte für Gizmos
    pub control_points: Vec<ControlPoint>,
    /// Index des selektierten Kontrollpunkts
    pub selected_index: Option<usize>,
    /// Selektierter Teil des Kontrollpunkts
    pub selected_handle: HandleKind,
    /// Alle nicht-leeren Meshes
    pub meshes: Vec<SceneMesh>,
    /// Richtungspfeile aller sichtbaren Fahrbahnlinien
    pub arrows: Vec<ArrowMarker>,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene Geometrie enthält.
    pub fn has_geometry(&self) -> bool {
        !self.meshes.is_empty()
    }

    /// Erstes Mesh einer bestimmten Herkunft.
    pub fn mesh(&self, kind: MeshKind) -> Option<&SceneMesh> {
        self.meshes.iter().find(|m| m.kind == kind)
    }

    /// Summe aller Vertices über alle Meshes.
    pub fn total_vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.vertex_count()).sum()
    }
}
