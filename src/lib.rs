//! Road Ribbon Editor Library.
//! Bézier-Pfade, Strip-Meshes und Editor-Logik als Library für Hosts, Tests und Benches.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditorCommand, EditorController, EditorIntent, EditorState, RoadDocument, RoadSettings,
    SceneExport, SelectionState,
};
pub use core::{BezierPath, ControlPoint, EditOutcome, HandleKind, Side, StripMesh};
pub use shared::{EditorOptions, RenderScene};

pub use glam;
