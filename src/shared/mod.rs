//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use options::{clamp_resolution, clamp_tension, EditorOptions};
pub use render_scene::{ArrowMarker, MaterialHandle, MeshKind, RenderScene, SceneMesh};
