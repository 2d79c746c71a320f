//! Mesh-Generatoren: Straße mit Banketten, Leitplanken, Fahrbahnlinien.
//!
//! Jeder Generator besitzt genau seine Meshes und überschreibt sie bei jedem
//! Neubau komplett.

pub mod railing;
pub mod registry;
pub mod road;
pub mod traffic_line;

pub use railing::{RailingGenerator, RailingKind, RailingSettings};
pub use registry::{TrafficLineId, TrafficLineRegistry};
pub use road::{RoadGenerator, RoadMeshSettings};
pub use traffic_line::{arrow_markers, TrafficLine, TrafficLineGenerator};
