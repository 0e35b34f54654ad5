//! Pfad: zweiseitige Form, die zwei verschiebbare Elemente verbindet.

use super::{ControlPointId, EditorResult, MovableId, PolyShape, ShapeId, ShapeKind};

/// Seitenanzahl eines Pfads
pub const PATH_SIDES: usize = 2;
/// Kontrollpunkt am Loslass-Ende (erster Vertex)
pub const PATH_END_POINT: usize = 0;
/// Kontrollpunkt am Drück-Ende (zweiter Vertex)
pub const PATH_START_POINT: usize = 1;

impl PolyShape {
    /// Erstellt einen Pfad im Zustand `Unstarted`.
    pub fn new_path() -> EditorResult<Self> {
        Self::with_kind(ShapeKind::Path, PATH_SIDES)
    }

    pub fn is_path(&self) -> bool {
        self.kind() == ShapeKind::Path
    }
}

/// Lock-Verdrahtung eines frisch finalisierten Pfads.
///
/// `target` ist das Element unter dem Drück-Punkt, `release_shape` die erste
/// Form, deren Bounds den Loslass-Punkt enthalten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathWiring {
    pub path: ShapeId,
    pub target: MovableId,
    pub release_shape: Option<ShapeId>,
}

impl PathWiring {
    /// Liefert die Kanten `(Besitzer, Lock-Ziel)` in Anlagereihenfolge.
    ///
    /// Locks hängen immer an Formen; zielt der Pfad auf einen Kontrollpunkt,
    /// übernimmt dessen Form die Rückkante zum Pfad.
    pub fn lock_edges(&self) -> Vec<(ShapeId, MovableId)> {
        let start_point = MovableId::ControlPoint(ControlPointId::new(self.path, PATH_START_POINT));
        let end_point = MovableId::ControlPoint(ControlPointId::new(self.path, PATH_END_POINT));

        let mut edges = vec![(self.path, self.target)];
        if let Some(shape) = self.release_shape {
            edges.push((self.path, MovableId::Shape(shape)));
        }
        edges.push((self.target.owner_shape(), start_point));
        if let Some(shape) = self.release_shape {
            edges.push((shape, end_point));
        }
        edges
    }
}
