//! Ziehbarer Kontrollpunkt mit Callback-Bindung an einen Vertex.

use super::{EditorResult, Movable};
use glam::DVec2;
use std::fmt;

/// Radius eines Kontrollpunkts in Welteinheiten
pub const CONTROL_POINT_RADIUS: f64 = 5.0;

/// Callback, der bei Änderung einer Koordinate mit dem neuen Wert aufgerufen wird
pub type AxisListener = Box<dyn FnMut(f64)>;

/// Griff an einem Eckpunkt einer finalisierten Form.
///
/// Die Bindung ist einseitig: Positionsänderungen rufen die registrierten
/// Callbacks synchron auf, der Vertex-Buffer wirkt nie zurück.
pub struct ControlPoint {
    position: DVec2,
    radius: f64,
    selected: bool,
    listeners: Vec<(AxisListener, AxisListener)>,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt ohne Bindungen.
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            radius: CONTROL_POINT_RADIUS,
            selected: false,
            listeners: Vec::new(),
        }
    }

    /// Aktuelle Position
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Radius für Treffertest und Auswahl-Bounds
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Registriert ein Callback-Paar für X- und Y-Änderungen.
    pub fn bind(&mut self, on_x: impl FnMut(f64) + 'static, on_y: impl FnMut(f64) + 'static) {
        self.listeners.push((Box::new(on_x), Box::new(on_y)));
    }

    /// Anzahl registrierter Callback-Paare
    pub fn binding_count(&self) -> usize {
        self.listeners.len()
    }

    /// Setzt die Position; nur geänderte Achsen lösen ihre Callbacks aus.
    pub fn set_position(&mut self, position: DVec2) {
        let old = self.position;
        self.position = position;
        if old.x != position.x {
            for (on_x, _) in self.listeners.iter_mut() {
                on_x(position.x);
            }
        }
        if old.y != position.y {
            for (_, on_y) in self.listeners.iter_mut() {
                on_y(position.y);
            }
        }
    }

    /// Ob der Punkt aktuell selektiert ist
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Setzt die Selektionsmarkierung.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Bounds des Kreises als `(min, max)`
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let r = DVec2::splat(self.radius);
        (self.position - r, self.position + r)
    }

    /// Ob `point` innerhalb des Kreises liegt.
    pub fn hit(&self, point: DVec2) -> bool {
        self.position.distance(point) <= self.radius
    }
}

impl Movable for ControlPoint {
    fn translate(&mut self, delta: DVec2) -> EditorResult<()> {
        self.set_position(self.position + delta);
        Ok(())
    }
}

impl fmt::Debug for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPoint")
            .field("position", &self.position)
            .field("radius", &self.radius)
            .field("selected", &self.selected)
            .field("bindings", &self.listeners.len())
            .finish()
    }
}
