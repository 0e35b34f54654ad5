//! Polygon-Form mit Lebenszyklus, Vertex-Buffer, Kontrollpunkten und Lock-Menge.

use super::geometry::{bounds_of, buffer_to_points, compute_regular_polygon};
use super::geometry::{distance_to_segment, point_in_polygon};
use super::{Color, ControlPoint, EditorError, EditorResult, Movable, MovableId};
use glam::DVec2;
use indexmap::IndexSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Obergrenze der Seitenanzahl; hält Vertex-Buffer und Polygonberechnung endlich
pub const MAX_SIDES: usize = 1 << 16;

/// Vertex-Buffer, den Form und Kontrollpunkt-Callbacks gemeinsam halten
pub type SharedVertices = Rc<RefCell<Vec<f64>>>;

/// Lebenszyklus einer Form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeState {
    /// Angelegt, noch nicht gestartet
    Unstarted,
    /// Wird gezogen; Geometrie wird bei jedem Drag neu berechnet
    Drawing,
    /// Kontrollpunkte existieren und treiben den Vertex-Buffer
    Finalized,
    /// Von der Zeichenfläche entfernt
    Erased,
}

/// Art der Form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Regelmäßiges Polygon
    Room,
    /// Zweipunkt-Verbindung zwischen zwei verschiebbaren Elementen
    Path,
}

/// Füll- und Randdarstellung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Color::LIGHT_GREEN,
            stroke: Color::GREY,
            stroke_width: 3.0,
        }
    }
}

/// Ein n-seitiges Polygon auf der Zeichenfläche
#[derive(Debug)]
pub struct PolyShape {
    kind: ShapeKind,
    sides: usize,
    state: ShapeState,
    vertices: SharedVertices,
    style: ShapeStyle,
    control_points: Vec<ControlPoint>,
    locks: IndexSet<MovableId>,
}

impl PolyShape {
    /// Erstellt einen Raum mit `sides` Seiten im Zustand `Unstarted`.
    pub fn new(sides: usize) -> EditorResult<Self> {
        Self::with_kind(ShapeKind::Room, sides)
    }

    pub(crate) fn with_kind(kind: ShapeKind, sides: usize) -> EditorResult<Self> {
        if !(2..=MAX_SIDES).contains(&sides) {
            return Err(EditorError::InvalidSides(sides));
        }
        Ok(Self {
            kind,
            sides,
            state: ShapeState::Unstarted,
            vertices: Rc::new(RefCell::new(Vec::new())),
            style: ShapeStyle::default(),
            control_points: Vec::new(),
            locks: IndexSet::new(),
        })
    }

    /// Baut eine finalisierte Form aus gespeicherten Vertex-Daten.
    pub fn from_vertices(
        kind: ShapeKind,
        sides: usize,
        style: ShapeStyle,
        vertices: Vec<f64>,
    ) -> EditorResult<Self> {
        let mut shape = Self::with_kind(kind, sides)?;
        shape.style = style;
        shape.start()?;
        *shape.vertices.borrow_mut() = vertices;
        shape.finalize()?;
        Ok(shape)
    }

    /// Unstarted → Drawing mit leerem Vertex-Buffer.
    pub fn start(&mut self) -> EditorResult<()> {
        self.expect_state("start", ShapeState::Unstarted)?;
        self.vertices.borrow_mut().clear();
        self.state = ShapeState::Drawing;
        Ok(())
    }

    /// Ersetzt den Vertex-Buffer vollständig durch das Polygon für `start`–`end`.
    pub fn redraw(&mut self, start: DVec2, end: DVec2, symmetrical: bool) -> EditorResult<()> {
        self.expect_state("redraw", ShapeState::Drawing)?;
        *self.vertices.borrow_mut() = compute_regular_polygon(start, end, self.sides, symmetrical);
        Ok(())
    }

    /// Drawing → Finalized: legt je Vertex einen Kontrollpunkt an und bindet ihn.
    ///
    /// Passt die Geometrie nicht zur Seitenanzahl, bleibt die Form in `Drawing`.
    pub fn finalize(&mut self) -> EditorResult<()> {
        self.expect_state("finalize", ShapeState::Drawing)?;

        let expected = self.sides * 2;
        let found = self.vertices.borrow().len();
        if found != expected {
            return Err(EditorError::MissingGeometry { expected, found });
        }

        let points = buffer_to_points(&self.vertices.borrow());
        self.control_points = points
            .into_iter()
            .enumerate()
            .map(|(index, position)| {
                let mut cp = ControlPoint::new(position);
                let (x_slot, y_slot) = (self.vertices.clone(), self.vertices.clone());
                cp.bind(
                    move |x| x_slot.borrow_mut()[index * 2] = x,
                    move |y| y_slot.borrow_mut()[index * 2 + 1] = y,
                );
                cp
            })
            .collect();
        self.state = ShapeState::Finalized;
        Ok(())
    }

    /// Finalized → Erased: Kontrollpunkte und Locks werden verworfen.
    pub fn erase(&mut self) -> EditorResult<()> {
        self.expect_state("erase", ShapeState::Finalized)?;
        self.control_points.clear();
        self.locks.clear();
        self.state = ShapeState::Erased;
        Ok(())
    }

    /// Fügt ein Lock-Ziel hinzu. Gibt `false` zurück, wenn es schon vorhanden war.
    pub fn add_lock(&mut self, movable: MovableId) -> bool {
        self.locks.insert(movable)
    }

    /// Entfernt alle Lock-Ziele, für die `keep` `false` liefert.
    pub fn retain_locks(&mut self, keep: impl FnMut(&MovableId) -> bool) {
        self.locks.retain(keep);
    }

    /// Lock-Ziele in Einfügereihenfolge
    pub fn locks(&self) -> &IndexSet<MovableId> {
        &self.locks
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn state(&self) -> ShapeState {
        self.state
    }

    pub fn style(&self) -> ShapeStyle {
        self.style
    }

    /// Setzt die Darstellung (nur vor dem Start sinnvoll, wird aber nicht erzwungen).
    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    /// Kopie des aktuellen Vertex-Buffers
    pub fn vertices(&self) -> Vec<f64> {
        self.vertices.borrow().clone()
    }

    /// Eckpunkte als Punktliste
    pub fn vertex_points(&self) -> Vec<DVec2> {
        buffer_to_points(&self.vertices.borrow())
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    pub fn control_point_mut(&mut self, index: usize) -> Option<&mut ControlPoint> {
        self.control_points.get_mut(index)
    }

    /// Bounding-Box inklusive halber Randbreite
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let (min, max) = bounds_of(&self.vertex_points())?;
        let half = DVec2::splat(self.style.stroke_width / 2.0);
        Some((min - half, max + half))
    }

    /// Ob `point` in der Bounding-Box liegt (Ränder eingeschlossen).
    pub fn bounds_contain(&self, point: DVec2) -> bool {
        self.bounds()
            .is_some_and(|(min, max)| point.cmpge(min).all() && point.cmple(max).all())
    }

    /// Geometrischer Treffertest: Innenfläche oder Randlinie.
    pub fn hit(&self, point: DVec2) -> bool {
        let points = self.vertex_points();
        if points.is_empty() {
            return false;
        }
        if self.kind == ShapeKind::Room && point_in_polygon(point, &points) {
            return true;
        }

        let tolerance = self.style.stroke_width / 2.0;
        let edge_count = match self.kind {
            ShapeKind::Path => points.len() - 1,
            ShapeKind::Room => points.len(),
        };
        (0..edge_count).any(|i| {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            distance_to_segment(point, a, b) <= tolerance
        })
    }

    /// Verschiebt die Kontrollpunkte, deren Index `filter` zulässt.
    ///
    /// Gibt die Anzahl bewegter Punkte zurück; bei Pfaden immer 0.
    pub fn translate_where(
        &mut self,
        delta: DVec2,
        mut filter: impl FnMut(usize) -> bool,
    ) -> EditorResult<usize> {
        self.expect_state("translate", ShapeState::Finalized)?;
        if self.kind == ShapeKind::Path {
            return Ok(0);
        }
        let mut moved = 0;
        for (index, cp) in self.control_points.iter_mut().enumerate() {
            if filter(index) {
                cp.translate(delta)?;
                moved += 1;
            }
        }
        Ok(moved)
    }

    fn expect_state(&self, operation: &'static str, expected: ShapeState) -> EditorResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EditorError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}

/// Verschiebt die eigenen Kontrollpunkte. Pfade haben keine Eigenbewegung,
/// ihre Wirkung entsteht ausschließlich über die Lock-Kaskade.
impl Movable for PolyShape {
    fn translate(&mut self, delta: DVec2) -> EditorResult<()> {
        self.translate_where(delta, |_| true).map(|_| ())
    }
}
