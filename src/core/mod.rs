//! Core-Geometrie: Kontrollpunkte, Bézier-Pfad, Offset-Pfade, Strip-Meshes.

pub mod bezier_path;
pub mod control_point;
pub mod error;
pub mod offset;
/// Bearbeitungs-Operationen auf `BezierPath`
///
/// Hinzufügen mit lokaler Anschluss-Glättung, starres Verschieben,
/// einzelne Handles, Löschen mit vollständiger Neu-Glättung.
pub mod path_edit;
pub mod strip_mesh;

pub use bezier_path::BezierPath;
pub use control_point::{ControlPoint, HandleKind, DEFAULT_HANDLE_OFFSET};
pub use error::GeometryError;
pub use offset::{offset_polyline, segment_direction, tangent_at, tangents};
pub use path_edit::EditOutcome;
pub use strip_mesh::{
    build_railing_planes, build_railing_walls, build_shoulder, build_strip, MeshVertex,
    ShoulderParams, Side, StripColumns, StripMesh, StripParams, StripTiling, WALL_THICKNESS,
};
