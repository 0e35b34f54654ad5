//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::PendingAction;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Tool;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => vec![AppCommand::CanvasPress { world_pos }],
        AppIntent::PointerDragged { world_pos } => vec![AppCommand::CanvasDrag { world_pos }],
        AppIntent::PointerReleased { world_pos } => {
            vec![AppCommand::CanvasRelease { world_pos }]
        }
        AppIntent::ToolSelected { tool } => vec![AppCommand::SetTool { tool }],
        AppIntent::RoomPresetSelected { sides } => room_commands(sides),
        AppIntent::ToolbarButtonClicked { id } => match state.options.room_preset(&id) {
            Some(preset) => room_commands(preset.sides),
            None => vec![AppCommand::SetToolById { id }],
        },
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::NewMapRequested => vec![AppCommand::RequestDestructiveAction {
            action: PendingAction::NewMap,
        }],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestDestructiveAction {
            action: PendingAction::OpenFile,
        }],
        AppIntent::ExitRequested => vec![AppCommand::RequestDestructiveAction {
            action: PendingAction::Exit,
        }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::SaveDialogCancelled => vec![AppCommand::CancelSaveDialog],
        AppIntent::SaveConfirmAnswered { choice } => {
            vec![AppCommand::AnswerSaveConfirm { choice }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Raum-Werkzeug wählen, danach die Seitenanzahl setzen (Wechsel setzt sie zurück).
fn room_commands(sides: usize) -> Vec<AppCommand> {
    vec![
        AppCommand::SetTool { tool: Tool::Room },
        AppCommand::SetToolOption { option: sides },
    ]
}
