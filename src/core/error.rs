//! Typisierte Geometrie-Fehler.

use thiserror::Error;

/// Fehler der Geometrie-Kernfunktionen.
///
/// Die Bulk-Funktionen (Tangenten, Offset, Mesh-Builder) fangen diesen Fehler
/// selbst ab und fallen auf eine Ersatz-Tangente zurück; er taucht nur an den
/// Einzelpunkt-Funktionen `segment_direction` und `tangent_at` auf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Zwei aufeinanderfolgende Punkte fallen zusammen, die Richtung ist undefiniert
    #[error("degenerierte Geometrie bei Punkt {index}: aufeinanderfolgende Punkte fallen zusammen")]
    DegenerateGeometry {
        /// Index des Punkts, an dem die Richtung berechnet werden sollte
        index: usize,
    },
    /// Zu wenige Punkte für eine Richtungsberechnung
    #[error("mindestens 2 Punkte benötigt, vorhanden: {count}")]
    TooFewPoints {
        /// Anzahl vorhandener Punkte
        count: usize,
    },
}
