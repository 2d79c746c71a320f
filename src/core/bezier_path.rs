//! Bézier-Pfad aus Kontrollpunkten: Auswertung zur Polyline und Handle-Glättung.

use super::control_point::ControlPoint;
use crate::shared::clamp_resolution;
use crate::shared::spline_geometry::cubic_bezier;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Geordnete Folge von Kontrollpunkten, optional geschlossen.
///
/// Segment `i` verbindet Punkt `i` mit Punkt `(i + 1) % len`. Ein offener
/// Pfad hat `len - 1` Segmente, ein geschlossener `len`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierPath {
    /// Kontrollpunkte in Pfad-Reihenfolge
    pub points: Vec<ControlPoint>,
    /// Geschlossene Schleife (letzter Punkt verbindet zurück zum ersten)
    #[serde(default)]
    pub is_closed: bool,
}

impl BezierPath {
    /// Leerer, offener Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pfad aus vorhandenen Kontrollpunkten.
    pub fn from_points(points: Vec<ControlPoint>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der Kurvensegmente (0 bei weniger als 2 Punkten).
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.is_closed => n,
            n => n - 1,
        }
    }

    /// Anker-Positionen aller Kontrollpunkte.
    pub fn anchor_positions(&self) -> Vec<Vec3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Tastet den Pfad mit `resolution` Samples pro Segment ab.
    ///
    /// Der erste Anker wird genau einmal vorangestellt; pro Segment folgen die
    /// Samples `t = j / resolution` für `j = 1..=resolution` (inklusive Segment-Ende).
    /// Weniger als 2 Punkte liefern die vorhandenen Anker unverändert.
    pub fn evaluate(&self, resolution: usize) -> Vec<Vec3> {
        if self.points.len() < 2 {
            return self.anchor_positions();
        }

        let requested = resolution;
        let resolution = clamp_resolution(requested);
        if resolution != requested {
            log::warn!("Kurvenauflösung {} angefordert, verwende {}", requested, resolution);
        }

        let n = self.points.len();
        let segments = self.segment_count();
        let mut result = Vec::with_capacity(segments * resolution + 1);
        result.push(self.points[0].position);

        for seg in 0..segments {
            let start = &self.points[seg];
            let end = &self.points[(seg + 1) % n];
            for j in 1..=resolution {
                let t = j as f32 / resolution as f32;
                result.push(cubic_bezier(
                    start.position,
                    start.handle_out,
                    end.handle_in,
                    end.position,
                    t,
                ));
            }
        }

        result
    }

    /// Setzt alle Handles automatisch für eine glatte Kurve.
    ///
    /// Tangente an inneren Punkten: `normalize(next - prev)`, an offenen Enden
    /// einseitig. Handle-Länge = `tension` × Abstand zum jeweiligen Nachbarn.
    /// Anker bleiben unverändert; äußere Handles der Enden werden nicht angefasst,
    /// auch bei geschlossenen Pfaden.
    pub fn smooth_handles(&mut self, tension: f32) {
        let count = self.points.len();
        if count < 2 {
            return;
        }

        // Geschlossene Pfade werden wie offene behandelt
        let anchors = self.anchor_positions();

        for i in 0..count {
            let prev = i.checked_sub(1);
            let next = Some(i + 1).filter(|&n| n < count);

            let position = anchors[i];
            let tangent = match (prev, next) {
                (Some(p), Some(n)) => (anchors[n] - anchors[p]).normalize_or_zero(),
                (Some(p), None) => (position - anchors[p]).normalize_or_zero(),
                (None, Some(n)) => (anchors[n] - position).normalize_or_zero(),
                (None, None) => Vec3::ZERO,
            };

            let point = &mut self.points[i];
            if let Some(p) = prev {
                point.handle_in = position - tangent * position.distance(anchors[p]) * tension;
            }
            if let Some(n) = next {
                point.handle_out = position + tangent * position.distance(anchors[n]) * tension;
            }
        }

        // Sonderfall 2 Punkte: nur die einander zugewandten Handles ausrichten
        if count == 2 {
            let direction = (anchors[1] - anchors[0]).normalize_or_zero();
            let handle_length = anchors[0].distance(anchors[1]) * tension;
            self.points[0].handle_out = anchors[0] + direction * handle_length;
            self.points[1].handle_in = anchors[1] - direction * handle_length;
        }
    }
}
