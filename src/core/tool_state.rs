//! Aktives Werkzeug und dessen Zusatzoption.

use super::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Werkzeuge der Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Kontrollpunkte per Rahmen selektieren
    Select,
    /// Selektion oder Element unter dem Zeiger verschieben
    Move,
    /// Regelmäßiges Polygon zeichnen (Option = Seitenanzahl)
    #[default]
    Room,
    /// Pfad zwischen zwei Elementen ziehen
    Path,
    /// Form unter dem Zeiger löschen
    Erase,
    /// Platzhalter ohne Wirkung
    Door,
}

impl Tool {
    /// Alle Werkzeuge in Toolbar-Reihenfolge
    pub const ALL: [Tool; 6] = [
        Tool::Select,
        Tool::Move,
        Tool::Room,
        Tool::Path,
        Tool::Erase,
        Tool::Door,
    ];

    /// Anzeigename, gleichzeitig Toolbar-ID
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Move => "Move",
            Tool::Room => "Room",
            Tool::Path => "Path",
            Tool::Erase => "Erase",
            Tool::Door => "Door",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Toolbar-IDs ohne Beachtung der Groß-/Kleinschreibung
impl FromStr for Tool {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::Unsupported(format!("Werkzeug '{s}'")))
    }
}

/// Werkzeug-Zustand, der vom Host an die Zeichenfläche gereicht wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    tool: Tool,
    option: usize,
}

impl ToolState {
    /// Startzustand: Raum-Werkzeug ohne Seitenanzahl.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn option(&self) -> usize {
        self.option
    }

    /// Wechselt das Werkzeug und setzt die Option auf 0 zurück.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.option = 0;
    }

    pub fn set_option(&mut self, option: usize) {
        self.option = option;
    }
}
