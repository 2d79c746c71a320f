//! Bézier-Kontrollpunkt mit Anker und zwei Handles.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Standard-Abstand der Handles vom Anker beim Anlegen (entlang lokaler X-Achse).
pub const DEFAULT_HANDLE_OFFSET: f32 = 1.0;

/// Einzelner Kontrollpunkt eines Bézier-Pfads.
///
/// Zwischen Anker und Handles gilt keine Invariante: Handles dürfen sich
/// kreuzen oder hinter dem Anker liegen (ergibt eine Spitze in der Kurve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Anker-Position (liegt auf der Kurve)
    pub position: Vec3,
    /// Eingangs-Handle (beeinflusst das Segment vom Vorgänger)
    pub handle_in: Vec3,
    /// Ausgangs-Handle (beeinflusst das Segment zum Nachfolger)
    pub handle_out: Vec3,
}

impl ControlPoint {
    /// Neuer Punkt mit Standard-Handles ±1 entlang X.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            handle_in: position - Vec3::X * DEFAULT_HANDLE_OFFSET,
            handle_out: position + Vec3::X * DEFAULT_HANDLE_OFFSET,
        }
    }

    /// Punkt mit expliziten Handles.
    pub fn with_handles(position: Vec3, handle_in: Vec3, handle_out: Vec3) -> Self {
        Self {
            position,
            handle_in,
            handle_out,
        }
    }

    /// Verschiebt Anker und beide Handles um dasselbe Delta (starre Bewegung).
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.handle_in += delta;
        self.handle_out += delta;
    }

    /// Richtet beide Handles entlang `direction` aus (symmetrisch, Länge `handle_length`).
    pub fn align_handles(&mut self, direction: Vec3, handle_length: f32) {
        self.handle_out = self.position + direction * handle_length;
        self.handle_in = self.position - direction * handle_length;
    }
}

/// Welcher Teil eines Kontrollpunkts selektiert bzw. gezogen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleKind {
    /// Nichts selektiert
    #[default]
    None,
    /// Der Anker selbst
    Anchor,
    /// Eingangs-Handle
    In,
    /// Ausgangs-Handle
    Out,
}
