//! Straßen-Generator: Fahrbahn-Mesh plus Bankette links und rechts.

use crate::core::{
    build_shoulder, build_strip, ShoulderParams, Side, StripColumns, StripMesh, StripParams,
    StripTiling,
};
use crate::shared::spline_geometry::polyline_length;
use crate::shared::{EditorOptions, MaterialHandle};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parameter für Fahrbahn und Bankette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadMeshSettings {
    /// Fahrbahnbreite
    pub width: f32,
    /// Vertikaler Versatz der Fahrbahn
    #[serde(default)]
    pub height_offset: f32,
    /// UV-Dichte entlang der Fahrbahn
    pub uv_tiling_density: f32,
    /// UV-Skalierung quer zur Fahrbahn
    pub uv_tiling_width: f32,
    /// Normalen umdrehen
    #[serde(default)]
    pub flip_normals: bool,
    /// Bankette erzeugen
    pub generate_terrain: bool,
    /// Bankett-Breite je Seite
    pub terrain_size: f32,
    /// Absenkung der Bankett-Außenkante
    pub terrain_height_offset: f32,
    /// Horizontale UV-Kachelung der Bankette
    pub terrain_uv_horizontal_tile: f32,
    /// Material der Fahrbahn
    #[serde(default)]
    pub road_material: Option<MaterialHandle>,
    /// Material der Bankette
    #[serde(default)]
    pub terrain_material: Option<MaterialHandle>,
}

impl RoadMeshSettings {
    /// Startwerte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            width: options.road_width,
            height_offset: 0.0,
            uv_tiling_density: options.road_uv_tiling_density,
            uv_tiling_width: options.road_uv_tiling_width,
            flip_normals: options.road_flip_normals,
            generate_terrain: options.generate_terrain,
            terrain_size: options.terrain_size,
            terrain_height_offset: options.terrain_height_offset,
            terrain_uv_horizontal_tile: options.terrain_uv_horizontal_tile,
            road_material: None,
            terrain_material: None,
        }
    }

    fn strip_params(&self) -> StripParams {
        StripParams {
            width: self.width,
            height_offset: self.height_offset,
            tiling: StripTiling {
                density: self.uv_tiling_density,
                width_scale: self.uv_tiling_width,
            },
            flip_normals: self.flip_normals,
            columns: StripColumns::Three,
        }
    }

    fn shoulder_params(&self) -> ShoulderParams {
        ShoulderParams {
            road_width: self.width,
            size: self.terrain_size,
            height_offset: self.height_offset,
            outer_height_offset: self.terrain_height_offset,
            uv_horizontal_tile: self.terrain_uv_horizontal_tile,
            uv_density: self.uv_tiling_density,
        }
    }
}

impl Default for RoadMeshSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Besitzt Fahrbahn- und Bankett-Meshes und baut sie bei Bedarf neu.
///
/// Ein Neubau findet nur statt, wenn sich die Polyline seit dem letzten Bau
/// geändert hat oder die Einstellungen gewechselt wurden.
#[derive(Debug, Clone, Default)]
pub struct RoadGenerator {
    settings: RoadMeshSettings,
    road: Arc<StripMesh>,
    left_terrain: Arc<StripMesh>,
    right_terrain: Arc<StripMesh>,
    last_polyline: Option<Vec<Vec3>>,
}

impl RoadGenerator {
    /// Erstellt einen Generator ohne Geometrie.
    pub fn new(settings: RoadMeshSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Aktuelle Einstellungen.
    pub fn settings(&self) -> &RoadMeshSettings {
        &self.settings
    }

    /// Setzt neue Einstellungen; bei Änderung wird der nächste `update` zum Neubau.
    pub fn set_settings(&mut self, settings: RoadMeshSettings) {
        if self.settings != settings {
            self.settings = settings;
            self.last_polyline = None;
        }
    }

    /// `true` wenn sich die Polyline seit dem letzten Bau unterscheidet.
    pub fn needs_rebuild(&self, polyline: &[Vec3]) -> bool {
        self.last_polyline.as_deref() != Some(polyline)
    }

    /// Baut nur neu, wenn nötig. Gibt zurück, ob gebaut wurde.
    pub fn update(&mut self, polyline: &[Vec3]) -> bool {
        if !self.needs_rebuild(polyline) {
            return false;
        }
        self.regenerate(polyline);
        true
    }

    /// Baut alle Meshes unbedingt neu.
    pub fn regenerate(&mut self, polyline: &[Vec3]) {
        if polyline.len() < 2 {
            self.clear();
            self.last_polyline = Some(polyline.to_vec());
            return;
        }

        self.road = Arc::new(build_strip(polyline, &self.settings.strip_params()));
        if self.settings.generate_terrain {
            let shoulder = self.settings.shoulder_params();
            self.left_terrain = Arc::new(build_shoulder(polyline, &shoulder, Side::Left));
            self.right_terrain = Arc::new(build_shoulder(polyline, &shoulder, Side::Right));
        } else {
            self.left_terrain = Arc::default();
            self.right_terrain = Arc::default();
        }
        self.last_polyline = Some(polyline.to_vec());

        log::debug!(
            "Straße neu gebaut: {} Punkte, {:.1} m, {} Dreiecke",
            polyline.len(),
            polyline_length(polyline),
            self.road.triangle_count()
        );
    }

    /// Leert alle Meshes.
    pub fn clear(&mut self) {
        self.road = Arc::default();
        self.left_terrain = Arc::default();
        self.right_terrain = Arc::default();
        self.last_polyline = None;
    }

    /// Fahrbahn-Mesh.
    pub fn road_mesh(&self) -> &Arc<StripMesh> {
        &self.road
    }

    /// Bankett auf der angegebenen Seite.
    pub fn terrain_mesh(&self, side: Side) -> &Arc<StripMesh> {
        match side {
            Side::Left => &self.left_terrain,
            Side::Right => &self.right_terrain,
        }
    }

    /// Mesh für den Fahrbahn-Collider des Hosts.
    pub fn collider_mesh(&self) -> &Arc<StripMesh> {
        &self.road
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline() -> Vec<Vec3> {
        (0..5).map(|i| Vec3::new(i as f32 * 2.0, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_update_rebuilds_only_on_change() {
        let mut generator = RoadGenerator::new(RoadMeshSettings::default());
        let poly = polyline();

        assert!(generator.update(&poly));
        assert!(!generator.update(&poly));
        assert_eq!(generator.road_mesh().vertex_count(), 15);

        let mut moved = poly.clone();
        moved[2].z += 1.0;
        assert!(generator.needs_rebuild(&moved));
        assert!(generator.update(&moved));
    }

    #[test]
    fn test_settings_change_forces_rebuild() {
        let mut generator = RoadGenerator::new(RoadMeshSettings::default());
        let poly = polyline();
        generator.update(&poly);

        let mut wider = generator.settings().clone();
        wider.width = 8.0;
        generator.set_settings(wider);
        assert!(generator.update(&poly));

        let (min, max) = generator.road_mesh().bounds().expect("Fahrbahn vorhanden");
        assert!((max.z - min.z - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_terrain_follows_flag() {
        let mut settings = RoadMeshSettings::default();
        let mut generator = RoadGenerator::new(settings.clone());
        generator.update(&polyline());
        assert!(!generator.terrain_mesh(Side::Left).is_empty());
        assert!(!generator.terrain_mesh(Side::Right).is_empty());

        settings.generate_terrain = false;
        generator.set_settings(settings);
        generator.update(&polyline());
        assert!(generator.terrain_mesh(Side::Left).is_empty());
        assert!(!generator.road_mesh().is_empty());
    }

    #[test]
    fn test_short_polyline_clears_everything() {
        let mut generator = RoadGenerator::new(RoadMeshSettings::default());
        generator.update(&polyline());
        generator.update(&[Vec3::ZERO]);
        assert!(generator.road_mesh().is_empty());
        assert!(generator.terrain_mesh(Side::Right).is_empty());
        assert!(generator.collider_mesh().is_empty());
    }
}
