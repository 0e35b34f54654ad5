//! Fehlertypen des Editor-Kerns und des Kartenformats.

use super::{ShapeId, ShapeState};
use thiserror::Error;

/// Vertragsverletzungen im Editor-Kern.
///
/// Jede Variante ist für die auslösende Geste fatal; der Host entscheidet,
/// ob er loggt oder abbricht.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Operation im aktuellen Lebenszyklus-Zustand der Form nicht erlaubt
    #[error("Operation '{operation}' im Zustand {state:?} nicht erlaubt")]
    InvalidState {
        operation: &'static str,
        state: ShapeState,
    },

    /// Unbekanntes Werkzeug oder nicht unterstützte Eingabe
    #[error("Nicht unterstützt: {0}")]
    Unsupported(String),

    /// Seitenanzahl außerhalb von `2..=MAX_SIDES`
    #[error("Ungültige Seitenanzahl: {0} (erlaubt 2 bis 65536)")]
    InvalidSides(usize),

    /// Form hat beim Finalisieren nicht die erwartete Geometrie
    #[error("Form ohne Geometrie: {found} statt {expected} Koordinaten")]
    MissingGeometry { expected: usize, found: usize },

    /// Referenz auf eine Form, die nicht (mehr) auf der Zeichenfläche liegt
    #[error("Unbekannte Form-ID: {0}")]
    UnknownShape(ShapeId),

    /// Zeichengeste erwartet eine aktive Form, es wurde aber keine gestartet
    #[error("Keine aktive Form für {0}")]
    NoActiveShape(&'static str),

    /// Fehler beim Einlesen einer Kartendatei
    #[error(transparent)]
    MapFile(#[from] MapFileError),
}

/// Formatfehler beim Lesen einer Kartendatei.
///
/// Zeilennummern sind 1-basiert und beziehen sich auf die gesamte Datei.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapFileError {
    /// Zeile beginnt mit einem unbekannten Schlüsselwort
    #[error("Zeile {line}: Eigenschaft '{token}' wird nicht unterstützt")]
    UnsupportedProperty { line: usize, token: String },

    /// Bekanntes Schlüsselwort an der falschen Position im Block
    #[error("Zeile {line}: '{expected}' erwartet, '{found}' gefunden")]
    UnexpectedField {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// Schlüsselwort ohne (vollständigen) Wert
    #[error("Zeile {line}: Wert für '{field}' fehlt")]
    MissingValue { line: usize, field: &'static str },

    /// Überzählige Werte nach dem letzten erwarteten Feld
    #[error("Zeile {line}: überzähliger Wert '{token}'")]
    TrailingValue { line: usize, token: String },

    /// Zahl nicht lesbar
    #[error("Zeile {line}: ungültige Zahl '{value}'")]
    InvalidNumber { line: usize, value: String },

    /// Farbe nicht im Format `#RRGGBB`
    #[error("Zeile {line}: ungültige Farbe '{value}'")]
    InvalidColor { line: usize, value: String },

    /// Seitenanzahl außerhalb von `2..=MAX_SIDES`
    #[error("Zeile {line}: ungültige Seitenanzahl {sides}")]
    InvalidSides { line: usize, sides: usize },

    /// Anzahl der Koordinaten passt nicht zur Seitenanzahl
    #[error("Zeile {line}: {found} Koordinaten für {sides} Seiten, erwartet {expected}")]
    PointCountMismatch {
        line: usize,
        sides: usize,
        expected: usize,
        found: usize,
    },

    /// Zeilenanzahl ist kein Vielfaches der Blockgröße
    #[error("Unvollständiger Block: {lines} Zeilen sind kein Vielfaches von 5")]
    IncompleteBlock { lines: usize },
}

/// Ergebnis-Alias für Kern-Operationen.
pub type EditorResult<T> = Result<T, EditorError>;
