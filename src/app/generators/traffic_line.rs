//! Fahrbahnlinien: seitlich versetzte Bänder mit Richtungspfeilen.

use crate::core::{build_strip, offset_polyline, tangents, StripColumns, StripMesh, StripParams, StripTiling};
use crate::shared::spline_geometry::rotate_about_up;
use crate::shared::{ArrowMarker, EditorOptions, MaterialHandle};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Öffnungswinkel der Pfeil-Flügel in Grad.
const ARROW_WING_ANGLE_DEG: f32 = 30.0;

/// Einstellungen einer Fahrbahnlinie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficLine {
    /// Seitlicher Abstand zur Fahrbahnmitte (positiv = rechts)
    pub offset: f32,
    /// Linie aktiv
    pub enabled: bool,
    /// Fahrtrichtung umkehren
    #[serde(default)]
    pub reverse_direction: bool,
    /// Linienbreite in Welteinheiten
    pub line_width: f32,
    /// Abstand zwischen Richtungspfeilen (0 = keine Pfeile)
    pub arrow_spacing: f32,
    /// Länge der Pfeil-Flügel
    pub arrow_size: f32,
    /// Material
    #[serde(default)]
    pub material: Option<MaterialHandle>,
}

impl TrafficLine {
    /// Startwerte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            offset: 0.0,
            enabled: true,
            reverse_direction: false,
            line_width: options.traffic_line_width,
            arrow_spacing: options.traffic_arrow_spacing,
            arrow_size: options.traffic_arrow_size,
            material: None,
        }
    }
}

impl Default for TrafficLine {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Berechnet die Richtungspfeile entlang eines (bereits versetzten) Pfads.
///
/// Die Strecke wird aufsummiert; sobald sie `arrow_spacing` erreicht, wird
/// ein Pfeil in der Mitte des aktuellen Segments gesetzt und die Strecke um
/// ganze Vielfache des Abstands reduziert. Pro Segment höchstens ein Pfeil.
pub fn arrow_markers(points: &[Vec3], line: &TrafficLine) -> Vec<ArrowMarker> {
    if points.len() < 2 || line.arrow_spacing <= 0.0 {
        return Vec::new();
    }

    let directions = tangents(points);
    let mut markers = Vec::new();
    let mut accumulated = 0.0f32;

    for i in 1..points.len() {
        accumulated += points[i - 1].distance(points[i]);
        let arrows = accumulated / line.arrow_spacing;
        if arrows < 1.0 {
            continue;
        }
        accumulated -= arrows.floor() * line.arrow_spacing;

        let direction = if line.reverse_direction {
            -directions[i]
        } else {
            directions[i]
        };
        let position = points[i - 1].lerp(points[i], 0.5);
        let back = -direction * line.arrow_size;
        markers.push(ArrowMarker {
            position,
            direction,
            left_wing: position + rotate_about_up(back, -ARROW_WING_ANGLE_DEG),
            right_wing: position + rotate_about_up(back, ARROW_WING_ANGLE_DEG),
        });
    }

    markers
}

/// Generator für eine einzelne Fahrbahnlinie.
#[derive(Debug, Clone, Default)]
pub struct TrafficLineGenerator {
    line: TrafficLine,
    visible: bool,
    path: Vec<Vec3>,
    mesh: Arc<StripMesh>,
    arrows: Vec<ArrowMarker>,
}

impl TrafficLineGenerator {
    /// Erstellt einen Generator ohne Geometrie.
    pub fn new(line: TrafficLine) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    /// Einstellungen der Linie.
    pub fn line(&self) -> &TrafficLine {
        &self.line
    }

    /// Veränderbare Einstellungen (wirksam beim nächsten `regenerate`).
    pub fn line_mut(&mut self) -> &mut TrafficLine {
        &mut self.line
    }

    /// Baut Pfad, Band-Mesh und Pfeile aus der Fahrbahn-Polyline neu.
    ///
    /// Deaktivierte oder ausgeblendete Linien werden geleert.
    pub fn regenerate(&mut self, polyline: &[Vec3], show: bool) {
        self.visible = show && self.line.enabled;
        if !self.visible || polyline.len() < 2 {
            self.clear();
            return;
        }

        self.path = offset_polyline(polyline, self.line.offset);
        let params = StripParams {
            width: self.line.line_width,
            height_offset: 0.0,
            tiling: StripTiling {
                density: 1.0,
                width_scale: 1.0,
            },
            flip_normals: false,
            columns: StripColumns::Two,
        };
        self.mesh = Arc::new(build_strip(&self.path, &params));
        self.arrows = arrow_markers(&self.path, &self.line);
    }

    /// Leert Pfad, Mesh und Pfeile.
    pub fn clear(&mut self) {
        self.path.clear();
        self.mesh = Arc::default();
        self.arrows.clear();
    }

    /// Linie wird aktuell angezeigt.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Versetzter Pfad.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// Band-Mesh.
    pub fn mesh(&self) -> &Arc<StripMesh> {
        &self.mesh
    }

    /// Richtungspfeile.
    pub fn arrows(&self) -> &[ArrowMarker] {
        &self.arrows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(length: f32, step: f32) -> Vec<Vec3> {
        let n = (length / step) as usize;
        (0..=n).map(|i| Vec3::new(i as f32 * step, 0.0, 0.0)).collect()
    }

    fn line(spacing: f32) -> TrafficLine {
        TrafficLine {
            arrow_spacing: spacing,
            arrow_size: 2.0,
            ..TrafficLine::default()
        }
    }

    #[test]
    fn test_arrow_count_follows_spacing() {
        let pts = straight(20.0, 1.0);
        assert_eq!(arrow_markers(&pts, &line(5.0)).len(), 4);
        assert!(arrow_markers(&pts, &line(0.0)).is_empty());
    }

    #[test]
    fn test_long_segment_places_single_arrow() {
        let pts = vec![Vec3::ZERO, Vec3::new(12.0, 0.0, 0.0)];
        let arrows = arrow_markers(&pts, &line(5.0));
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].position, Vec3::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn test_arrow_wings_point_backwards() {
        let pts = straight(10.0, 5.0);
        let arrow = arrow_markers(&pts, &line(5.0))[0];
        assert!((arrow.direction - Vec3::X).length() < 1e-6);

        let left = arrow.left_wing - arrow.position;
        let right = arrow.right_wing - arrow.position;
        assert!(left.x < 0.0 && right.x < 0.0);
        // Fahrtrichtung +X → rechts ist +Z
        assert!(right.z > 0.0 && left.z < 0.0);
        assert!((left.length() - 2.0).abs() < 1e-5);
        let angle = left.normalize().dot(-Vec3::X).acos().to_degrees();
        assert!((angle - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_reverse_direction_flips_arrows() {
        let pts = straight(10.0, 5.0);
        let reversed = TrafficLine {
            reverse_direction: true,
            ..line(5.0)
        };
        let arrow = arrow_markers(&pts, &reversed)[0];
        assert!((arrow.direction + Vec3::X).length() < 1e-6);
        assert!((arrow.left_wing - arrow.position).x > 0.0);
    }

    #[test]
    fn test_generator_offsets_and_builds_ribbon() {
        let mut generator = TrafficLineGenerator::new(TrafficLine {
            offset: 1.5,
            ..line(5.0)
        });
        generator.regenerate(&straight(10.0, 1.0), true);

        assert!(generator.is_visible());
        assert!(generator.path().iter().all(|p| (p.z - 1.5).abs() < 1e-5));
        assert_eq!(generator.mesh().vertex_count(), 2 * 11);
        assert_eq!(generator.arrows().len(), 2);
    }

    #[test]
    fn test_disabled_or_hidden_line_is_empty() {
        let mut generator = TrafficLineGenerator::new(line(5.0));
        generator.regenerate(&straight(10.0, 1.0), false);
        assert!(!generator.is_visible());
        assert!(generator.mesh().is_empty());

        generator.line_mut().enabled = false;
        generator.regenerate(&straight(10.0, 1.0), true);
        assert!(generator.arrows().is_empty());
    }
}
