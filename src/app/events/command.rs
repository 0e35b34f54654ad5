use crate::app::state::{PendingAction, SaveChoice};
use crate::core::Tool;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Press an die Zeichenfläche weiterreichen
    CanvasPress { world_pos: DVec2 },
    /// Drag an die Zeichenfläche weiterreichen
    CanvasDrag { world_pos: DVec2 },
    /// Release an die Zeichenfläche weiterreichen
    CanvasRelease { world_pos: DVec2 },
    /// Werkzeug wechseln (setzt Option zurück)
    SetTool { tool: Tool },
    /// Werkzeug-Option setzen (Seitenanzahl für Räume)
    SetToolOption { option: usize },
    /// Werkzeug über Toolbar-ID wechseln
    SetToolById { id: String },
    /// Selektion aufheben
    ClearSelection,
    /// Verwerfende Aktion anfordern (fragt bei ungespeicherten Änderungen nach)
    RequestDestructiveAction { action: PendingAction },
    /// Antwort des Bestätigungsdialogs verarbeiten
    AnswerSaveConfirm { choice: SaveChoice },
    /// Datei-Öffnen-Dialog anzeigen
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anzeigen
    RequestSaveFileDialog,
    /// Karte aus Datei laden
    LoadFile { path: String },
    /// Karte speichern (`None` = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    /// Save-Dialog wurde abgebrochen
    CancelSaveDialog,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
}
