use std::fmt;

/// Aktion, die ungespeicherte Änderungen verwerfen würde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Leere Karte beginnen
    NewMap,
    /// Andere Datei öffnen
    OpenFile,
    /// Anwendung beenden
    Exit,
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PendingAction::NewMap => "Neue Karte",
            PendingAction::OpenFile => "Datei öffnen",
            PendingAction::Exit => "Beenden",
        })
    }
}

/// Antwort auf die Frage „Änderungen speichern?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    /// Erst speichern, dann fortfahren
    Yes,
    /// Ohne Speichern fortfahren
    No,
    /// Aktion abbrechen
    Cancel,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Aktion, für die der Speichern-Bestätigungsdialog offen ist
    pub confirm_save: Option<PendingAction>,
    /// Aktion, die nach erfolgreichem Speichern ausgeführt wird
    pub after_save: Option<PendingAction>,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Revision der Karte beim letzten Laden/Speichern
    pub saved_revision: u64,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
