//! Mapping von Host-Intents auf mutierende Editor-Commands.

use super::{EditorCommand, EditorIntent, EditorState};
use crate::core::HandleKind;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointAddRequested { position } => vec![EditorCommand::AddPoint {
            position,
            at_start: state.options.add_points_to_start,
        }],
        EditorIntent::PickRequested {
            position,
            max_distance,
        } => match state.path.pick_handle(position, max_distance) {
            Some((index, handle)) => vec![EditorCommand::SelectHandle { index, handle }],
            None => vec![EditorCommand::ClearSelection],
        },
        EditorIntent::HandlePicked { index, handle } => {
            vec![EditorCommand::SelectHandle { index, handle }]
        }
        EditorIntent::ClearSelectionRequested => vec![EditorCommand::ClearSelection],

        EditorIntent::DragStarted => {
            if state.selection.selected_index.is_some() {
                vec![EditorCommand::BeginDrag]
            } else {
                Vec::new()
            }
        }
        EditorIntent::SelectionDragged { position } => {
            let Some(index) = state.selection.selected_index else {
                return Vec::new();
            };
            match state.selection.selected_handle {
                HandleKind::Anchor => vec![EditorCommand::MovePoint { index, position }],
                HandleKind::In | HandleKind::Out => vec![EditorCommand::MoveHandle {
                    index,
                    handle: state.selection.selected_handle,
                    position,
                }],
                HandleKind::None => Vec::new(),
            }
        }

        EditorIntent::DeleteSelectedRequested => match state.selection.selected_index {
            Some(index) => vec![EditorCommand::DeletePoint { index }],
            None => Vec::new(),
        },
        EditorIntent::DeletePointRequested { index } => {
            vec![EditorCommand::DeletePoint { index }]
        }
        EditorIntent::ClearPointsRequested => vec![EditorCommand::ClearPoints],
        EditorIntent::ClosedToggled { closed } => vec![EditorCommand::SetClosed { closed }],
        EditorIntent::RecalculateHandlesRequested => vec![EditorCommand::RecalculateHandles],
        EditorIntent::TensionChanged { tension } => vec![EditorCommand::SetTension { tension }],
        EditorIntent::ResolutionChanged { resolution } => {
            vec![EditorCommand::SetResolution { resolution }]
        }

        EditorIntent::RoadSettingsChanged { settings } => {
            vec![EditorCommand::SetRoadSettings { settings }]
        }
        EditorIntent::RailingSettingsChanged { side, settings } => {
            vec![EditorCommand::SetRailingSettings { side, settings }]
        }
        EditorIntent::SettingsPasted { settings } => {
            vec![EditorCommand::ApplySettings { settings }]
        }
        EditorIntent::AddTrafficLineRequested => vec![EditorCommand::AddTrafficLine],
        EditorIntent::RemoveTrafficLineRequested { id } => {
            vec![EditorCommand::RemoveTrafficLine { id }]
        }
        EditorIntent::TrafficLineChanged { id, line } => {
            vec![EditorCommand::UpdateTrafficLine { id, line }]
        }
        EditorIntent::TrafficLinesToggled { visible } => {
            vec![EditorCommand::SetTrafficLinesVisible { visible }]
        }
        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],

        EditorIntent::BoostStarted { position } => vec![EditorCommand::StartBoost { position }],
        EditorIntent::BoostStopped => vec![EditorCommand::StopBoost],
        EditorIntent::TrailObjectMoved { position } => {
            vec![EditorCommand::MoveTrailObject { position }]
        }

        EditorIntent::DocumentOpenRequested { path } => {
            vec![EditorCommand::LoadDocument { path }]
        }
        EditorIntent::DocumentSaveRequested { path } => {
            vec![EditorCommand::SaveDocument { path }]
        }

        EditorIntent::UndoRequested => vec![EditorCommand::Undo],
        EditorIntent::RedoRequested => vec![EditorCommand::Redo],
        EditorIntent::RegenerateRequested => vec![EditorCommand::Regenerate],
    }
}
