//! Leitplanken-Generator: Wände oder Flächen seitlich versetzt zur Fahrbahn.

use crate::core::{build_railing_planes, build_railing_walls, offset_polyline, Side, StripMesh};
use crate::shared::{EditorOptions, MaterialHandle};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Bauform der Leitplanke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RailingKind {
    /// Keine Leitplanke
    #[default]
    None,
    /// Schmaler Quader pro Segment
    Wall,
    /// Einseitige vertikale Fläche pro Segment
    Plane,
}

/// Einstellungen einer Leitplanken-Seite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailingSettings {
    /// Bauform
    pub kind: RailingKind,
    /// Abstand von der Fahrbahnmitte
    pub offset: f32,
    /// Höhe der Wände
    pub wall_height: f32,
    /// Höhe der Flächen
    pub plane_height: f32,
    /// Weltlänge pro Textur-Wiederholung
    pub uv_repeat_factor: f32,
    /// Material
    #[serde(default)]
    pub material: Option<MaterialHandle>,
    /// Host soll Collider erzeugen
    #[serde(default = "default_add_colliders")]
    pub add_colliders: bool,
}

fn default_add_colliders() -> bool {
    true
}

impl RailingSettings {
    /// Startwerte aus den Editor-Optionen (Bauform `None`).
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            kind: RailingKind::None,
            offset: options.railing_offset,
            wall_height: options.railing_wall_height,
            plane_height: options.railing_plane_height,
            uv_repeat_factor: options.railing_uv_repeat_factor,
            material: None,
            add_colliders: true,
        }
    }
}

impl Default for RailingSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Generator für genau eine Seite.
#[derive(Debug, Clone)]
pub struct RailingGenerator {
    side: Side,
    settings: RailingSettings,
    mesh: Arc<StripMesh>,
}

impl RailingGenerator {
    /// Erstellt einen Generator für die angegebene Seite.
    pub fn new(side: Side, settings: RailingSettings) -> Self {
        Self {
            side,
            settings,
            mesh: Arc::default(),
        }
    }

    /// Seite relativ zur Fahrtrichtung.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Aktuelle Einstellungen.
    pub fn settings(&self) -> &RailingSettings {
        &self.settings
    }

    /// Setzt neue Einstellungen (wirksam beim nächsten `regenerate`).
    pub fn set_settings(&mut self, settings: RailingSettings) {
        self.settings = settings;
    }

    /// Baut das Mesh aus der Fahrbahn-Polyline neu.
    pub fn regenerate(&mut self, polyline: &[Vec3]) {
        if self.settings.kind == RailingKind::None || polyline.len() < 2 {
            self.clear();
            return;
        }

        let path = offset_polyline(polyline, self.settings.offset * self.side.sign());
        let mesh = match self.settings.kind {
            RailingKind::Wall => build_railing_walls(
                &path,
                self.settings.wall_height,
                self.settings.uv_repeat_factor,
            ),
            RailingKind::Plane => build_railing_planes(
                &path,
                self.side,
                self.settings.plane_height,
                self.settings.uv_repeat_factor,
            ),
            RailingKind::None => StripMesh::new(),
        };
        self.mesh = Arc::new(mesh);
    }

    /// Leert das Mesh.
    pub fn clear(&mut self) {
        self.mesh = Arc::default();
    }

    /// Aktuelles Mesh.
    pub fn mesh(&self) -> &Arc<StripMesh> {
        &self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline() -> Vec<Vec3> {
        (0..4).map(|i| Vec3::new(i as f32 * 3.0, 0.0, 0.0)).collect()
    }

    fn settings(kind: RailingKind) -> RailingSettings {
        RailingSettings {
            kind,
            offset: 2.5,
            ..RailingSettings::default()
        }
    }

    #[test]
    fn test_kind_none_is_empty() {
        let mut generator = RailingGenerator::new(Side::Left, RailingSettings::default());
        generator.regenerate(&polyline());
        assert!(generator.mesh().is_empty());
    }

    #[test]
    fn test_planes_are_offset_to_their_side() {
        let mut left = RailingGenerator::new(Side::Left, settings(RailingKind::Plane));
        let mut right = RailingGenerator::new(Side::Right, settings(RailingKind::Plane));
        left.regenerate(&polyline());
        right.regenerate(&polyline());

        assert!(left.mesh().vertices.iter().all(|v| (v.z + 2.5).abs() < 1e-5));
        assert!(right.mesh().vertices.iter().all(|v| (v.z - 2.5).abs() < 1e-5));
    }

    #[test]
    fn test_walls_use_wall_height() {
        let mut generator = RailingGenerator::new(
            Side::Right,
            RailingSettings {
                wall_height: 1.7,
                ..settings(RailingKind::Wall)
            },
        );
        generator.regenerate(&polyline());
        let (_, max) = generator.mesh().bounds().expect("Wände vorhanden");
        assert!((max.y - 1.7).abs() < 1e-5);
    }

    #[test]
    fn test_short_polyline_clears() {
        let mut generator = RailingGenerator::new(Side::Right, settings(RailingKind::Wall));
        generator.regenerate(&polyline());
        generator.regenerate(&[Vec3::ZERO]);
        assert!(generator.mesh().is_empty());
    }
}
