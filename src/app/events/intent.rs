use crate::app::state::SaveChoice;
use crate::core::Tool;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger auf der Zeichenfläche gedrückt
    PointerPressed { world_pos: DVec2 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { world_pos: DVec2 },
    /// Zeiger losgelassen
    PointerReleased { world_pos: DVec2 },
    /// Werkzeug direkt gewählt
    ToolSelected { tool: Tool },
    /// Raum-Werkzeug mit Seitenanzahl gewählt
    RoomPresetSelected { sides: usize },
    /// Toolbar-Button per ID geklickt (Werkzeugname oder Raum-Vorlage)
    ToolbarButtonClicked { id: String },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Neue leere Karte
    NewMapRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei im Open-Dialog gewählt
    FileSelected { path: String },
    /// Zielpfad im Save-Dialog gewählt
    SaveFilePathSelected { path: String },
    /// Save-Dialog abgebrochen
    SaveDialogCancelled,
    /// Antwort auf „Änderungen speichern?"
    SaveConfirmAnswered { choice: SaveChoice },
    /// Optionen geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
