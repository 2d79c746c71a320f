//! Flammenspur: flaches Band hinter einem Objekt, solange ein Boost läuft.
//!
//! Die Bodenhöhe kommt über den injizierten `GroundProbe`; die Dauer des
//! Boosts steuert ein `Timer`, den der Host per `tick(dt, ..)` weiterschaltet.

use super::timer::{Timer, TimerState};
use crate::core::{build_strip, StripColumns, StripMesh, StripParams, StripTiling};
use crate::shared::options::FLAME_GROUND_CLEARANCE;
use crate::shared::EditorOptions;
use glam::Vec3;
use std::sync::Arc;

/// Port zur Bodenabfrage des Hosts (z.B. Raycast nach unten).
pub trait GroundProbe {
    /// Bodenhöhe unter `position`, `None` wenn kein Boden getroffen wurde.
    fn ground_height(&self, position: Vec3) -> Option<f32>;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec3) -> Option<f32>,
{
    fn ground_height(&self, position: Vec3) -> Option<f32> {
        self(position)
    }
}

/// Ebener Boden auf fester Höhe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround(pub f32);

impl GroundProbe for FlatGround {
    fn ground_height(&self, _position: Vec3) -> Option<f32> {
        Some(self.0)
    }
}

/// Kollisions-Box eines Spur-Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailColliderSegment {
    /// Segmentmitte
    pub center: Vec3,
    /// Blickrichtung zum Segment-Ende (normiert)
    pub direction: Vec3,
    /// Segmentlänge
    pub length: f32,
}

/// Parameter der Flammenspur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlameTrailSettings {
    /// Mindestabstand zwischen zwei Spur-Punkten
    pub point_spacing: f32,
    /// Breite des Bands
    pub width: f32,
    /// Abstand über dem Boden
    pub ground_clearance: f32,
    /// Boost-Dauer in Sekunden
    pub boost_duration: f32,
}

impl FlameTrailSettings {
    /// Werte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            point_spacing: options.flame_point_spacing,
            width: options.flame_trail_width,
            ground_clearance: FLAME_GROUND_CLEARANCE,
            boost_duration: options.flame_boost_duration,
        }
    }
}

impl Default for FlameTrailSettings {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Generator der Flammenspur.
#[derive(Debug, Clone, Default)]
pub struct FlameTrail {
    settings: FlameTrailSettings,
    timer: Timer,
    generating: bool,
    points: Vec<Vec3>,
    colliders: Vec<TrailColliderSegment>,
    mesh: Arc<StripMesh>,
}

impl FlameTrail {
    /// Erstellt eine leere Spur.
    pub fn new(settings: FlameTrailSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Startet eine neue Spur an `position`; die vorherige wird verworfen.
    pub fn start_boost(&mut self, position: Vec3, probe: &dyn GroundProbe) {
        self.points.clear();
        self.colliders.clear();
        self.mesh = Arc::default();
        self.timer.start(self.settings.boost_duration);
        self.generating = true;
        self.add_point(position, probe);
        log::debug!("Boost gestartet ({} s)", self.settings.boost_duration);
    }

    /// Beendet die Erzeugung; die bisherige Spur bleibt erhalten.
    pub fn stop_boost(&mut self) {
        if self.generating {
            log::debug!("Boost beendet, {} Spur-Punkte", self.points.len());
        }
        self.generating = false;
        self.timer.cancel();
    }

    /// Schaltet den Boost-Timer weiter und hängt bei Bedarf einen Punkt an.
    ///
    /// Gibt zurück, ob ein Punkt hinzugefügt wurde.
    pub fn tick(&mut self, dt: f32, position: Vec3, probe: &dyn GroundProbe) -> bool {
        if !self.generating {
            return false;
        }
        if self.timer.tick(dt) == TimerState::Done {
            self.stop_boost();
            return false;
        }

        let Some(last) = self.points.last() else {
            self.add_point(position, probe);
            return true;
        };
        if position.distance(*last) >= self.settings.point_spacing {
            self.add_point(position, probe);
            return true;
        }
        false
    }

    fn add_point(&mut self, position: Vec3, probe: &dyn GroundProbe) {
        let y = probe
            .ground_height(position)
            .map_or(0.0, |ground| ground + self.settings.ground_clearance);
        let point = Vec3::new(position.x, y, position.z);

        if let Some(&last) = self.points.last() {
            self.colliders.push(TrailColliderSegment {
                center: (last + point) * 0.5,
                direction: (point - last).normalize_or_zero(),
                length: last.distance(point),
            });
        }
        self.points.push(point);

        let params = StripParams {
            width: self.settings.width,
            height_offset: 0.0,
            tiling: StripTiling {
                density: 1.0,
                width_scale: 1.0,
            },
            flip_normals: false,
            columns: StripColumns::Two,
        };
        self.mesh = Arc::new(build_strip(&self.points, &params));
    }

    /// Erzeugung läuft.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Spur-Punkte.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Kollisions-Segmente, eines pro Spur-Segment.
    pub fn colliders(&self) -> &[TrailColliderSegment] {
        &self.colliders
    }

    /// Band-Mesh.
    pub fn mesh(&self) -> &Arc<StripMesh> {
        &self.mesh
    }

    /// Boost-Timer.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> FlameTrail {
        FlameTrail::new(FlameTrailSettings {
            point_spacing: 1.0,
            width: 1.0,
            ground_clearance: 0.05,
            boost_duration: 3.0,
        })
    }

    #[test]
    fn test_points_added_at_spacing() {
        let ground = FlatGround(2.0);
        let mut trail = trail();
        trail.start_boost(Vec3::new(0.0, 5.0, 0.0), &ground);
        assert_eq!(trail.points().len(), 1);
        assert!((trail.points()[0].y - 2.05).abs() < 1e-6);

        assert!(!trail.tick(0.1, Vec3::new(0.5, 2.0, 0.0), &ground));
        assert!(trail.tick(0.1, Vec3::new(1.2, 2.0, 0.0), &ground));
        assert!(trail.tick(0.1, Vec3::new(2.4, 2.0, 0.0), &ground));

        assert_eq!(trail.points().len(), 3);
        assert_eq!(trail.colliders().len(), 2);
        assert_eq!(trail.mesh().vertex_count(), 6);

        let segment = trail.colliders()[0];
        assert!((segment.length - 1.2).abs() < 1e-5);
        assert!((segment.direction - Vec3::X).length() < 1e-5);
        assert!((segment.center - Vec3::new(0.6, 2.05, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_missing_ground_snaps_to_zero() {
        let nothing = |_: Vec3| -> Option<f32> { None };
        let mut trail = trail();
        trail.start_boost(Vec3::new(3.0, 4.0, 1.0), &nothing);
        assert_eq!(trail.points()[0], Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_boost_expires() {
        let ground = FlatGround(0.0);
        let mut trail = trail();
        trail.start_boost(Vec3::ZERO, &ground);
        assert!(trail.tick(1.0, Vec3::new(2.0, 0.0, 0.0), &ground));
        assert!(!trail.tick(2.5, Vec3::new(4.0, 0.0, 0.0), &ground));
        assert!(!trail.is_generating());
        assert!(!trail.tick(0.1, Vec3::new(6.0, 0.0, 0.0), &ground));
        assert_eq!(trail.points().len(), 2);
    }

    #[test]
    fn test_stop_keeps_existing_trail() {
        let ground = FlatGround(0.0);
        let mut trail = trail();
        trail.start_boost(Vec3::ZERO, &ground);
        trail.tick(0.1, Vec3::new(1.0, 0.0, 0.0), &ground);
        trail.stop_boost();
        assert!(!trail.is_generating());
        assert_eq!(trail.points().len(), 2);
        assert_eq!(trail.timer().state(), TimerState::Idle);
    }
}
