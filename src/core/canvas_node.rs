//! Read-only Sicht auf die Elemente der Zeichenfläche.

use super::{ControlPoint, ControlPointId, MovableId, PolyShape, ShapeId};

/// Ein Element der Zeichenfläche, wie es Treffertests und Auswahl sehen
#[derive(Debug, Clone, Copy)]
pub enum CanvasNode<'a> {
    Shape(ShapeId, &'a PolyShape),
    ControlPoint(ControlPointId, &'a ControlPoint),
}

impl CanvasNode<'_> {
    /// ID für Lock- und Verschiebe-Operationen
    pub fn movable_id(&self) -> MovableId {
        match self {
            CanvasNode::Shape(id, _) => MovableId::Shape(*id),
            CanvasNode::ControlPoint(id, _) => MovableId::ControlPoint(*id),
        }
    }
}
