//! Registry aller Fahrbahnlinien mit stabilen IDs.
//!
//! Reihenfolge entspricht der Einfügereihenfolge; IDs werden nie wiederverwendet.

use super::traffic_line::{TrafficLine, TrafficLineGenerator};
use crate::shared::options::TRAFFIC_LINE_OFFSET_STEP;
use crate::shared::ArrowMarker;
use glam::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stabile ID einer Fahrbahnlinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrafficLineId(pub u64);

/// Geordnete Registry der Fahrbahnlinien-Generatoren.
#[derive(Debug, Clone)]
pub struct TrafficLineRegistry {
    lines: IndexMap<TrafficLineId, TrafficLineGenerator>,
    next_id: u64,
    show_lines: bool,
}

impl Default for TrafficLineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficLineRegistry {
    /// Erstellt eine leere Registry (Linien sichtbar).
    pub fn new() -> Self {
        Self {
            lines: IndexMap::new(),
            next_id: 0,
            show_lines: true,
        }
    }

    /// Erstellt eine neue ID (auto-increment).
    fn next_id(&mut self) -> TrafficLineId {
        let id = TrafficLineId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registriert eine Linie und gibt die vergebene ID zurück.
    pub fn insert(&mut self, line: TrafficLine) -> TrafficLineId {
        let id = self.next_id();
        self.lines.insert(id, TrafficLineGenerator::new(line));
        id
    }

    /// Fügt eine Linie hinzu, 1.0 weiter versetzt als die letzte.
    pub fn add_line(&mut self, template: TrafficLine) -> TrafficLineId {
        let offset = self
            .lines
            .last()
            .map(|(_, generator)| generator.line().offset + TRAFFIC_LINE_OFFSET_STEP)
            .unwrap_or(template.offset);
        self.insert(TrafficLine { offset, ..template })
    }

    /// Stellt sicher, dass mindestens eine Linie existiert.
    pub fn ensure_default(&mut self, template: TrafficLine) {
        if self.lines.is_empty() {
            self.insert(template);
        }
    }

    /// Entfernt eine Linie (Reihenfolge der übrigen bleibt erhalten).
    pub fn remove(&mut self, id: TrafficLineId) -> Option<TrafficLine> {
        self.lines
            .shift_remove(&id)
            .map(|generator| generator.line().clone())
    }

    /// Generator zu einer ID.
    pub fn get(&self, id: TrafficLineId) -> Option<&TrafficLineGenerator> {
        self.lines.get(&id)
    }

    /// Veränderbarer Generator zu einer ID.
    pub fn get_mut(&mut self, id: TrafficLineId) -> Option<&mut TrafficLineGenerator> {
        self.lines.get_mut(&id)
    }

    /// Anzahl der Linien.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` wenn keine Linie registriert ist.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// IDs in Einfügereihenfolge.
    pub fn ids(&self) -> Vec<TrafficLineId> {
        self.lines.keys().copied().collect()
    }

    /// Alle Generatoren in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (TrafficLineId, &TrafficLineGenerator)> {
        self.lines.iter().map(|(id, generator)| (*id, generator))
    }

    /// Einstellungen aller Linien (für die Einstellungs-Übertragung).
    pub fn lines(&self) -> Vec<TrafficLine> {
        self.lines.values().map(|g| g.line().clone()).collect()
    }

    /// Ersetzt alle Linien; vergibt neue IDs.
    pub fn replace_all(&mut self, lines: Vec<TrafficLine>) {
        self.lines.clear();
        for line in lines {
            self.insert(line);
        }
    }

    /// Linien global ein-/ausblenden.
    pub fn set_show_lines(&mut self, show: bool) {
        self.show_lines = show;
    }

    /// Linien werden angezeigt.
    pub fn show_lines(&self) -> bool {
        self.show_lines
    }

    /// Baut alle Linien aus der Fahrbahn-Polyline neu.
    pub fn regenerate_all(&mut self, polyline: &[Vec3]) {
        let show = self.show_lines;
        for generator in self.lines.values_mut() {
            generator.regenerate(polyline, show);
        }
    }

    /// Leert alle Linien-Meshes.
    pub fn clear_all(&mut self) {
        for generator in self.lines.values_mut() {
            generator.clear();
        }
    }

    /// Richtungspfeile aller sichtbaren Linien.
    pub fn arrows(&self) -> Vec<ArrowMarker> {
        self.lines
            .values()
            .flat_map(|g| g.arrows().iter().copied())
            .collect()
    }
}
