//! Zentrale Konfiguration für den Map Maker.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Color, ShapeStyle};
use serde::{Deserialize, Serialize};

// ── Formen ──────────────────────────────────────────────────────────

/// Standard-Füllfarbe neuer Formen
pub const SHAPE_FILL: Color = Color::LIGHT_GREEN;
/// Standard-Randfarbe neuer Formen
pub const SHAPE_STROKE: Color = Color::GREY;
/// Standard-Randbreite neuer Formen in Welteinheiten
pub const SHAPE_STROKE_WIDTH: f64 = 3.0;

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Farbe unselektierter Kontrollpunkte
pub const CONTROL_POINT_COLOR: Color = Color::GREY;
/// Farbe selektierter Kontrollpunkte
pub const CONTROL_POINT_SELECTED_COLOR: Color = Color::BLACK;

// ── Auswahlrechteck ─────────────────────────────────────────────────

/// Füllfarbe des Auswahlrechtecks
pub const SELECTION_FILL: Color = Color::LIGHT_GREY;
/// Randfarbe des Auswahlrechtecks
pub const SELECTION_STROKE: Color = Color::GREY;
/// Randbreite des Auswahlrechtecks
pub const SELECTION_STROKE_WIDTH: f64 = 2.0;
/// Deckkraft des gesamten Auswahlrechtecks
pub const SELECTION_OPACITY: f64 = 0.4;

// ── Dateien ─────────────────────────────────────────────────────────

/// Dateiendung für Kartendateien
pub const MAP_FILE_EXTENSION: &str = "map";

/// Raum-Vorlage der Werkzeugleiste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPreset {
    /// Anzeigename und Toolbar-ID
    pub name: String,
    /// Seitenanzahl des Raums
    pub sides: usize,
}

impl RoomPreset {
    fn new(name: &str, sides: usize) -> Self {
        Self {
            name: name.to_string(),
            sides,
        }
    }
}

/// Alle zur Laufzeit änderbaren Editor-Optionen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Randbreite neuer Formen
    pub shape_stroke_width: f64,
    /// Randbreite des Auswahlrechtecks
    pub selection_stroke_width: f64,
    /// Deckkraft des Auswahlrechtecks
    pub selection_opacity: f64,
    /// Dateiendung für Öffnen/Speichern-Dialoge
    pub file_extension: String,
    /// Füllfarbe neuer Formen
    pub shape_fill: Color,
    /// Randfarbe neuer Formen
    pub shape_stroke: Color,
    /// Farbe unselektierter Kontrollpunkte
    pub control_point_color: Color,
    /// Farbe selektierter Kontrollpunkte
    pub control_point_selected_color: Color,
    /// Füllfarbe des Auswahlrechtecks
    pub selection_fill: Color,
    /// Randfarbe des Auswahlrechtecks
    pub selection_stroke: Color,
    /// Raum-Vorlagen in Toolbar-Reihenfolge
    pub room_presets: Vec<RoomPreset>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            shape_fill: SHAPE_FILL,
            shape_stroke: SHAPE_STROKE,
            shape_stroke_width: SHAPE_STROKE_WIDTH,
            control_point_color: CONTROL_POINT_COLOR,
            control_point_selected_color: CONTROL_POINT_SELECTED_COLOR,
            selection_fill: SELECTION_FILL,
            selection_stroke: SELECTION_STROKE,
            selection_stroke_width: SELECTION_STROKE_WIDTH,
            selection_opacity: SELECTION_OPACITY,
            room_presets: vec![
                RoomPreset::new("Line", 2),
                RoomPreset::new("Triangle", 3),
                RoomPreset::new("Rectangle", 4),
                RoomPreset::new("Pentagon", 5),
                RoomPreset::new("Hexagon", 6),
            ],
            file_extension: MAP_FILE_EXTENSION.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map-maker"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_maker.toml")
    }

    /// Darstellung für neu gezeichnete Formen.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.shape_fill,
            stroke: self.shape_stroke,
            stroke_width: self.shape_stroke_width,
        }
    }

    /// Sucht eine Raum-Vorlage nach Name (ohne Groß-/Kleinschreibung).
    pub fn room_preset(&self, name: &str) -> Option<&RoomPreset> {
        self.room_presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }
}
