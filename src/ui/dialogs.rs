//! Datei-Dialoge und modale Rückfragen.

use crate::app::{AppIntent, SaveChoice, UiState};
use crate::shared::EditorOptions;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Vorschlag für den Dateinamen im Save-Dialog.
pub fn map_file_name(ui_state: &UiState, extension: &str) -> String {
    ui_state
        .current_file_path
        .as_ref()
        .and_then(|p| std::path::Path::new(p).file_name())
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("unbenannt.{extension}"))
}

/// Verarbeitet ausstehende Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, options: &EditorOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let extension = options.file_extension.as_str();

    // Speichern-Rückfrage vor verwerfenden Aktionen
    if let Some(action) = ui_state.confirm_save {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(format!("{action}"))
            .set_description("Ungespeicherte Änderungen speichern?")
            .set_buttons(rfd::MessageButtons::YesNoCancel)
            .show();

        let choice = match result {
            rfd::MessageDialogResult::Yes => SaveChoice::Yes,
            rfd::MessageDialogResult::No => SaveChoice::No,
            _ => SaveChoice::Cancel,
        };
        events.push(AppIntent::SaveConfirmAnswered { choice });
    }

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Karte", &[extension])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name = map_file_name(ui_state, extension);
        match rfd::FileDialog::new()
            .add_filter("Karte", &[extension])
            .set_file_name(&default_name)
            .save_file()
        {
            Some(path) => events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            }),
            None => events.push(AppIntent::SaveDialogCancelled),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_file_name_uses_current_file() {
        let mut ui = UiState::new();
        assert_eq!(map_file_name(&ui, "map"), "unbenannt.map");

        ui.current_file_path = Some("/tmp/karten/keller.map".into());
        assert_eq!(map_file_name(&ui, "map"), "keller.map");
    }
}
