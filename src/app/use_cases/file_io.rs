//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::{PendingAction, SaveChoice};
use crate::app::AppState;
use anyhow::Context;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Führt eine verwerfende Aktion aus.
///
/// Bei ungespeicherten Änderungen wird stattdessen der
/// Speichern-Bestätigungsdialog angefordert.
pub fn request_destructive_action(
    state: &mut AppState,
    action: PendingAction,
) -> anyhow::Result<()> {
    if state.is_dirty() {
        log::debug!("{}: ungespeicherte Änderungen, frage nach", action);
        state.ui.confirm_save = Some(action);
        return Ok(());
    }
    perform_action(state, action);
    Ok(())
}

/// Verarbeitet die Antwort auf „Änderungen speichern?".
pub fn answer_save_confirm(state: &mut AppState, choice: SaveChoice) -> anyhow::Result<()> {
    let Some(action) = state.ui.confirm_save.take() else {
        log::warn!("Speichern-Antwort ohne offene Rückfrage ignoriert");
        return Ok(());
    };

    match choice {
        SaveChoice::Cancel => {
            log::info!("{} abgebrochen", action);
        }
        SaveChoice::No => perform_action(state, action),
        SaveChoice::Yes => {
            // Folgeaktion läuft erst nach erfolgreichem Schreiben
            state.ui.after_save = Some(action);
            save_current_file(state)?;
        }
    }
    Ok(())
}

fn perform_action(state: &mut AppState, action: PendingAction) {
    match action {
        PendingAction::NewMap => new_map(state),
        PendingAction::OpenFile => request_open_file(state),
        PendingAction::Exit => {
            log::info!("Beenden angefordert");
            state.should_exit = true;
        }
    }
}

/// Leert die Zeichenfläche und vergisst den Dateipfad.
pub fn new_map(state: &mut AppState) {
    state.map.clear();
    state.ui.current_file_path = None;
    state.mark_saved();
    log::info!("Neue Karte begonnen");
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        save_file_as(state, path)
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
        Ok(())
    }
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    if let Err(err) = write_map_to_file(state, &path) {
        state.ui.after_save = None;
        return Err(err);
    }
    log::info!("Datei gespeichert: {} ({} Formen)", path, state.shape_count());
    state.ui.current_file_path = Some(path);
    state.mark_saved();

    if let Some(action) = state.ui.after_save.take() {
        perform_action(state, action);
    }
    Ok(())
}

/// Verwirft die an den Speichern-Dialog gekoppelte Folgeaktion.
pub fn cancel_save_dialog(state: &mut AppState) {
    if let Some(action) = state.ui.after_save.take() {
        log::info!("Speichern abgebrochen, {} entfällt", action);
    }
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Schlägt das Parsen fehl, bleibt die bisherige Karte unverändert.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei {} konnte nicht gelesen werden", path))?;
    let lines: Vec<&str> = content.lines().collect();
    state
        .map
        .load_map_lines(&lines)
        .with_context(|| format!("Datei {} ist keine gültige Karte", path))?;

    log::info!(
        "Karte geladen: {} ({} Formen)",
        path,
        state.map.shape_count()
    );
    state.ui.current_file_path = Some(path);
    state.mark_saved();
    Ok(())
}

/// Schreibt die Karte im Textformat in eine Datei.
fn write_map_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let text = state.map.to_map_text();
    std::fs::write(path, text)
        .with_context(|| format!("Datei {} konnte nicht geschrieben werden", path))
}
