//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Oberfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie nur liest.

use crate::core::{Color, ControlPointId, ShapeId, ShapeKind, ShapeStyle, Tool};
use glam::DVec2;

/// Eine Form, wie sie gezeichnet werden soll
#[derive(Debug, Clone, PartialEq)]
pub struct RenderShape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Eckpunkte in Zeichenreihenfolge
    pub vertices: Vec<DVec2>,
    pub style: ShapeStyle,
    /// `false`, solange die Form noch gezogen wird
    pub finalized: bool,
}

/// Ein Kontrollpunkt-Kreis
#[derive(Debug, Clone, PartialEq)]
pub struct RenderControlPoint {
    pub id: ControlPointId,
    pub position: DVec2,
    pub radius: f64,
    /// Bereits nach Selektionszustand eingefärbt
    pub color: Color,
}

/// Das Auswahlrechteck während einer Rahmen-Selektion
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSelectionRect {
    pub origin: DVec2,
    pub size: DVec2,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub opacity: f64,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Formen in Zeichenreihenfolge (unten zuerst)
    pub shapes: Vec<RenderShape>,
    /// Kontrollpunkte, über allen Formen zu zeichnen
    pub control_points: Vec<RenderControlPoint>,
    /// Auswahlrechteck, falls gerade aufgezogen
    pub selection_rect: Option<RenderSelectionRect>,
    /// Aktives Werkzeug (für Cursor/Toolbar-Hervorhebung)
    pub active_tool: Tool,
    /// Pfad der geöffneten Datei
    pub file_path: Option<String>,
    /// Ungespeicherte Änderungen vorhanden
    pub dirty: bool,
}

impl RenderScene {
    /// Gibt zurück, ob es etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.shapes.is_empty() || self.selection_rect.is_some()
    }
}
