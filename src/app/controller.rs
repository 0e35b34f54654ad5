//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenfläche ===
            AppCommand::CanvasPress { world_pos } => handlers::canvas::press(state, world_pos)?,
            AppCommand::CanvasDrag { world_pos } => handlers::canvas::drag(state, world_pos)?,
            AppCommand::CanvasRelease { world_pos } => {
                handlers::canvas::release(state, world_pos)?
            }
            AppCommand::ClearSelection => handlers::canvas::clear_selection(state),

            // === Werkzeuge ===
            AppCommand::SetTool { tool } => handlers::tools::set_tool(state, tool),
            AppCommand::SetToolOption { option } => handlers::tools::set_option(state, option),
            AppCommand::SetToolById { id } => handlers::tools::set_tool_by_id(state, &id)?,

            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::CancelSaveDialog => handlers::file_io::cancel_save(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestDestructiveAction { action } => {
                handlers::dialog::request_action(state, action)?
            }
            AppCommand::AnswerSaveConfirm { choice } => {
                handlers::dialog::answer_save_confirm(state, choice)?
            }
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
