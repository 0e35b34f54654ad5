use crate::app::CommandLog;
use crate::core::{MapArea, ToolState};
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::UiState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichenfläche mit allen Formen
    pub map: MapArea,
    /// Aktives Werkzeug und Option
    pub tools: ToolState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Breiten, Vorlagen)
    pub options: EditorOptions,
    /// Ziel für persistierte Optionen
    pub config_path: PathBuf,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let mut map = MapArea::new();
        map.set_default_style(options.shape_style());

        Self {
            map,
            tools: ToolState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            config_path: EditorOptions::config_path(),
            should_exit: false,
        }
    }

    /// Übernimmt Optionen und die daraus folgende Standard-Darstellung.
    pub fn set_options(&mut self, options: EditorOptions) {
        self.map.set_default_style(options.shape_style());
        self.options = options;
    }

    /// Gibt die Anzahl der Formen zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.map.shape_count()
    }

    /// Ob seit dem letzten Laden/Speichern etwas geändert wurde
    pub fn is_dirty(&self) -> bool {
        self.map.revision() != self.ui.saved_revision
    }

    /// Merkt den aktuellen Kartenstand als gespeichert.
    pub fn mark_saved(&mut self) {
        self.ui.saved_revision = self.map.revision();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
