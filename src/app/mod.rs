//! Application-Layer: Controller, State, Events, Generatoren und Handler.

pub mod command_log;
pub mod controller;
pub mod document;
pub mod events;
pub mod flame_trail;
pub mod generators;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
pub mod settings;
/// Editor State
///
/// Pfad, Selektion, Optionen und alle Generatoren samt ihrer Meshes.
pub mod state;
pub mod timer;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use document::{RoadDocument, SceneExport};
pub use events::{EditorCommand, EditorIntent};
pub use flame_trail::{FlameTrail, FlameTrailSettings, FlatGround, GroundProbe};
pub use generators::{
    RailingKind, RailingSettings, RoadMeshSettings, TrafficLine, TrafficLineId,
    TrafficLineRegistry,
};
pub use render_scene::build as build_render_scene;
pub use settings::RoadSettings;
pub use state::{EditorState, SelectionState};
pub use timer::{Timer, TimerState};
