//! Editor Controller für zentrale Event-Verarbeitung und Host-Lebenszyklus.

use super::flame_trail::{FlatGround, GroundProbe};
use super::render_scene;
use super::{EditorCommand, EditorIntent, EditorState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Handler auf dem EditorState.
///
/// Der Host ruft `init` einmal, `tick` pro Frame und `render`, wann immer er
/// zeichnen will. Die Bodenabfrage der Flammenspur wird im Konstruktor injiziert.
pub struct EditorController {
    ground: Box<dyn GroundProbe>,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorController {
    /// Erstellt einen Controller mit ebenem Boden auf Höhe 0.
    pub fn new() -> Self {
        Self::with_ground_probe(Box::new(FlatGround(0.0)))
    }

    /// Erstellt einen Controller mit eigener Bodenabfrage.
    pub fn with_ground_probe(ground: Box<dyn GroundProbe>) -> Self {
        Self { ground }
    }

    /// Einmalige Initialisierung: Standard-Fahrbahnlinie anlegen und Meshes bauen.
    pub fn init(&mut self, state: &mut EditorState) {
        if state.initialized {
            log::debug!("init: bereits initialisiert");
            return;
        }
        let template = state.traffic_line_template();
        state.traffic_lines.ensure_default(template);
        state.regenerate_geometry();
        state.initialized = true;
        log::info!(
            "Editor initialisiert: {} Punkte, {} Fahrbahnlinien",
            state.point_count(),
            state.traffic_lines.len()
        );
    }

    /// Frame-Update: Flammenspur weiterschalten und Meshes bei geänderter Kurve neu bauen.
    ///
    /// Gibt zurück, ob die Straße neu gebaut wurde.
    pub fn tick(&mut self, state: &mut EditorState, dt: f32) -> bool {
        super::handlers::flame::tick(state, self.ground.as_ref(), dt);
        state.sync_geometry()
    }

    /// Baut die Render-Szene aus dem aktuellen EditorState.
    pub fn render(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            EditorCommand::AddPoint { position, at_start } => {
                handlers::editing::add_point(state, position, at_start)
            }
            EditorCommand::MovePoint { index, position } => {
                handlers::editing::move_point(state, index, position)
            }
            EditorCommand::MoveHandle {
                index,
                handle,
                position,
            } => handlers::editing::move_handle(state, index, handle, position),
            EditorCommand::BeginDrag => handlers::editing::begin_drag(state),
            EditorCommand::DeletePoint { index } => handlers::editing::delete_point(state, index),
            EditorCommand::ClearPoints => handlers::editing::clear_points(state),
            EditorCommand::SetClosed { closed } => handlers::editing::set_closed(state, closed),
            EditorCommand::RecalculateHandles => handlers::editing::recalculate_handles(state),
            EditorCommand::SetTension { tension } => handlers::editing::set_tension(state, tension),
            EditorCommand::SetResolution { resolution } => {
                handlers::editing::set_resolution(state, resolution)
            }

            // === Selektion ===
            EditorCommand::SelectHandle { index, handle } => {
                handlers::selection::select_handle(state, index, handle)
            }
            EditorCommand::ClearSelection => handlers::selection::clear(state),

            // === Einstellungen & Fahrbahnlinien ===
            EditorCommand::SetRoadSettings { settings } => {
                handlers::settings::set_road_settings(state, settings)
            }
            EditorCommand::SetRailingSettings { side, settings } => {
                handlers::settings::set_railing_settings(state, side, settings)
            }
            EditorCommand::ApplySettings { settings } => {
                handlers::settings::apply_settings(state, &settings)
            }
            EditorCommand::AddTrafficLine => handlers::settings::add_traffic_line(state),
            EditorCommand::RemoveTrafficLine { id } => {
                handlers::settings::remove_traffic_line(state, id)
            }
            EditorCommand::UpdateTrafficLine { id, line } => {
                handlers::settings::update_traffic_line(state, id, line)
            }
            EditorCommand::SetTrafficLinesVisible { visible } => {
                handlers::settings::set_traffic_lines_visible(state, visible)
            }
            EditorCommand::ApplyOptions { options } => {
                handlers::settings::apply_options(state, options)
            }
            EditorCommand::Regenerate => handlers::settings::regenerate(state),

            // === Flammenspur ===
            EditorCommand::StartBoost { position } => {
                handlers::flame::start_boost(state, self.ground.as_ref(), position)
            }
            EditorCommand::StopBoost => handlers::flame::stop_boost(state),
            EditorCommand::MoveTrailObject { position } => {
                handlers::flame::move_trail_object(state, position)
            }

            // === Datei-I/O ===
            EditorCommand::LoadDocument { path } => handlers::file_io::load(state, &path)?,
            EditorCommand::SaveDocument { path } => handlers::file_io::save(state, &path)?,

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
