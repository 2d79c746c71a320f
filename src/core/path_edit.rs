//! Bearbeitungs-Modell für Kontrollpunkte: Hinzufügen, Verschieben, Löschen.
//!
//! Jede Operation liefert ein `EditOutcome`, das dem Aufrufer sagt, ob
//! abhängige Meshes neu gebaut oder geleert werden müssen.

use super::bezier_path::BezierPath;
use super::control_point::{ControlPoint, HandleKind};
use glam::Vec3;

/// Ergebnis einer Bearbeitung für nachgelagerte Generatoren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nichts geändert (z.B. ungültiger Index)
    Unchanged,
    /// Pfad geändert, Meshes neu bauen
    Rebuild,
    /// Weniger als 2 Punkte übrig, generierte Geometrie leeren
    ClearGeometry,
}

impl EditOutcome {
    /// `Rebuild` ab 2 Punkten, sonst `ClearGeometry`.
    pub fn for_point_count(count: usize) -> Self {
        if count >= 2 {
            EditOutcome::Rebuild
        } else {
            EditOutcome::ClearGeometry
        }
    }

    /// `true` wenn sich der Pfad geändert hat.
    pub fn is_changed(self) -> bool {
        self != EditOutcome::Unchanged
    }
}

impl BezierPath {
    /// Fügt einen neuen Punkt am Ende (oder am Anfang) ein.
    ///
    /// Danach wird nur die Anschlussstelle lokal geglättet, nicht der ganze Pfad.
    pub fn add_point(&mut self, position: Vec3, at_start: bool, tension: f32) -> EditOutcome {
        let point = ControlPoint::new(position);
        if at_start {
            self.points.insert(0, point);
            // Gespiegelt: Reihenfolge umdrehen, In/Out tauschen, glätten, zurück
            mirror_points(&mut self.points);
            smooth_join(&mut self.points, tension);
            mirror_points(&mut self.points);
        } else {
            self.points.push(point);
            smooth_join(&mut self.points, tension);
        }

        EditOutcome::for_point_count(self.points.len())
    }

    /// Verschiebt einen Punkt starr (Anker und beide Handles um dasselbe Delta).
    pub fn update_point_position(&mut self, index: usize, position: Vec3) -> EditOutcome {
        let count = self.points.len();
        let Some(point) = self.points.get_mut(index) else {
            log::warn!("Punkt {} existiert nicht (Anzahl {})", index, count);
            return EditOutcome::Unchanged;
        };
        point.translate(position - point.position);
        EditOutcome::for_point_count(count)
    }

    /// Verschiebt nur den angegebenen Handle.
    ///
    /// `Anchor` verhält sich wie `update_point_position`, `None` ändert nichts.
    /// Die Symmetrie zwischen In- und Out-Handle wird nicht erzwungen.
    pub fn update_control_handle(
        &mut self,
        index: usize,
        kind: HandleKind,
        position: Vec3,
    ) -> EditOutcome {
        if kind == HandleKind::Anchor {
            return self.update_point_position(index, position);
        }
        let count = self.points.len();
        let Some(point) = self.points.get_mut(index) else {
            log::warn!("Handle an Punkt {} existiert nicht (Anzahl {})", index, count);
            return EditOutcome::Unchanged;
        };
        match kind {
            HandleKind::In => point.handle_in = position,
            HandleKind::Out => point.handle_out = position,
            HandleKind::None | HandleKind::Anchor => return EditOutcome::Unchanged,
        }
        EditOutcome::for_point_count(count)
    }

    /// Entfernt einen Punkt; ab 2 verbleibenden Punkten wird komplett neu geglättet.
    pub fn delete_at(&mut self, index: usize, tension: f32) -> EditOutcome {
        if index >= self.points.len() {
            log::warn!(
                "Löschen ignoriert: Punkt {} existiert nicht (Anzahl {})",
                index,
                self.points.len()
            );
            return EditOutcome::Unchanged;
        }

        self.points.remove(index);
        if self.points.len() >= 2 {
            self.smooth_handles(tension);
        }
        EditOutcome::for_point_count(self.points.len())
    }

    /// Sucht den nächstgelegenen Anker bzw. Handle innerhalb von `max_distance`.
    ///
    /// Bei gleichem Abstand gewinnt der Anker vor den Handles.
    pub fn pick_handle(&self, position: Vec3, max_distance: f32) -> Option<(usize, HandleKind)> {
        let mut best: Option<(usize, HandleKind, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let candidates = [
                (HandleKind::Anchor, point.position),
                (HandleKind::In, point.handle_in),
                (HandleKind::Out, point.handle_out),
            ];
            for (kind, candidate) in candidates {
                let distance = candidate.distance(position);
                if distance > max_distance {
                    continue;
                }
                if best.map_or(true, |(_, _, d)| distance < d) {
                    best = Some((index, kind, distance));
                }
            }
        }
        best.map(|(index, kind, _)| (index, kind))
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) -> EditOutcome {
        if self.points.is_empty() {
            return EditOutcome::Unchanged;
        }
        self.points.clear();
        EditOutcome::ClearGeometry
    }
}

/// Kehrt die Reihenfolge um und tauscht In- und Out-Handles.
fn mirror_points(points: &mut [ControlPoint]) {
    points.reverse();
    for p in points.iter_mut() {
        std::mem::swap(&mut p.handle_in, &mut p.handle_out);
    }
}

/// Lokale Glättung der letzten 2 bzw. 3 Punkte nach dem Anhängen.
fn smooth_join(points: &mut [ControlPoint], tension: f32) {
    let count = points.len();
    if count < 2 {
        return;
    }

    if count == 2 {
        let (p0, p1) = (points[0].position, points[1].position);
        let direction = (p1 - p0).normalize_or_zero();
        let handle_length = p0.distance(p1) * tension;
        points[0].handle_out = p0 + direction * handle_length;
        points[1].align_handles(direction, handle_length);
        return;
    }

    let last = count - 1;
    let before = points[last - 2].position;
    let prev = points[last - 1].position;
    let newest = points[last].position;

    let dir_last = (newest - prev).normalize_or_zero();
    let dir_prev = (prev - before).normalize_or_zero();
    let last_length = newest.distance(prev) * tension;
    let prev_length = prev.distance(before) * tension;

    // Mittelwert der Segmentrichtungen am Gelenkpunkt
    let average = ((dir_prev + dir_last) * 0.5).normalize_or_zero();

    let joint = &mut points[last - 1];
    joint.handle_in = prev - average * prev_length;
    joint.handle_out = prev + average * last_length;
    points[last].align_handles(dir_last, last_length);
}
