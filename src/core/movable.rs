//! Verschiebbarkeit als Fähigkeit und stabile IDs für Lock-Beziehungen.

use super::EditorResult;
use glam::DVec2;

/// Stabile ID einer Form auf der Zeichenfläche
pub type ShapeId = u64;

/// Adressiert einen Kontrollpunkt über Besitzer-Form und Vertex-Index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlPointId {
    /// Form, zu der der Kontrollpunkt gehört
    pub shape: ShapeId,
    /// Index des gebundenen Vertex-Paars
    pub index: usize,
}

impl ControlPointId {
    /// Erstellt eine Kontrollpunkt-ID.
    pub fn new(shape: ShapeId, index: usize) -> Self {
        Self { shape, index }
    }
}

/// Alles, was verschoben werden kann und damit Ziel eines Locks sein darf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovableId {
    /// Ganze Form (Raum oder Pfad)
    Shape(ShapeId),
    /// Einzelner Kontrollpunkt
    ControlPoint(ControlPointId),
}

impl MovableId {
    /// Form, der dieses Element gehört (bei Formen die Form selbst).
    pub fn owner_shape(&self) -> ShapeId {
        match self {
            MovableId::Shape(id) => *id,
            MovableId::ControlPoint(cp) => cp.shape,
        }
    }
}

impl From<ControlPointId> for MovableId {
    fn from(id: ControlPointId) -> Self {
        MovableId::ControlPoint(id)
    }
}

/// Fähigkeit, um ein Delta verschoben zu werden.
///
/// Die Weitergabe an gelockte Elemente übernimmt die Zeichenfläche,
/// da nur sie alle Beteiligten kennt.
pub trait Movable {
    /// Verschiebt das Element um `delta`.
    fn translate(&mut self, delta: DVec2) -> EditorResult<()>;
}
