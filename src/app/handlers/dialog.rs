//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::state::{PendingAction, SaveChoice};
use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Führt eine verwerfende Aktion aus oder fragt vorher nach dem Speichern.
pub fn request_action(state: &mut AppState, action: PendingAction) -> anyhow::Result<()> {
    use_cases::file_io::request_destructive_action(state, action)
}

/// Verarbeitet die Antwort des Speichern-Bestätigungsdialogs.
pub fn answer_save_confirm(state: &mut AppState, choice: SaveChoice) -> anyhow::Result<()> {
    use_cases::file_io::answer_save_confirm(state, choice)
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.set_options(options);
    state.options.save_to_file(&state.config_path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}
