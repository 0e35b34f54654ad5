//! Zeichenfläche: Formen in Zeichenreihenfolge, Selektion, Lock-Kaskade.

mod dispatch;

use super::{CanvasNode, ControlPoint, ControlPointId, EditorError, EditorResult, Movable};
use super::{MovableId, PolyShape, SelectionArea, ShapeId, ShapeState, ShapeStyle};
use glam::DVec2;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

/// Laufende Zeigergeste zwischen Press und Release
#[derive(Debug, Clone, Copy)]
struct Gesture {
    /// Position beim Drücken
    press: DVec2,
    /// Position des letzten Drag-Events (für Frame-Deltas)
    last: DVec2,
    /// Element unter dem Drück-Punkt; bleibt Ziel bis zum Loslassen
    target: Option<MovableId>,
    /// Form, die in dieser Geste gezeichnet wird
    drawing: Option<ShapeId>,
}

/// Besitzt alle Formen der Karte und verarbeitet Zeigergesten.
#[derive(Debug, Default)]
pub struct MapArea {
    shapes: IndexMap<ShapeId, PolyShape>,
    next_id: ShapeId,
    default_style: ShapeStyle,
    selection: IndexSet<ControlPointId>,
    selection_area: SelectionArea,
    selecting: bool,
    gesture: Option<Gesture>,
    revision: u64,
}

impl MapArea {
    /// Erstellt eine leere Zeichenfläche.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Darstellung für neu gezeichnete Formen
    pub fn default_style(&self) -> ShapeStyle {
        self.default_style
    }

    pub fn set_default_style(&mut self, style: ShapeStyle) {
        self.default_style = style;
    }

    /// Änderungszähler; steigt bei jeder inhaltlichen Änderung.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Anzahl der Pfade unter den Formen
    pub fn path_count(&self) -> usize {
        self.shapes.values().filter(|s| s.is_path()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Alle Formen in Zeichenreihenfolge
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &PolyShape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// Nur finalisierte Formen in Zeichenreihenfolge
    pub fn finalized_shapes(&self) -> impl Iterator<Item = (ShapeId, &PolyShape)> {
        self.shapes()
            .filter(|(_, shape)| shape.state() == ShapeState::Finalized)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&PolyShape> {
        self.shapes.get(&id)
    }

    pub fn control_point(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.shapes.get(&id.shape)?.control_points().get(id.index)
    }

    /// Ob gerade eine Form gezogen wird
    pub fn is_drawing(&self) -> bool {
        self.shapes
            .values()
            .any(|s| s.state() == ShapeState::Drawing)
    }

    /// Fügt eine bereits finalisierte Form oben in der Zeichenreihenfolge ein.
    pub fn add_shape(&mut self, shape: PolyShape) -> EditorResult<ShapeId> {
        if shape.state() != ShapeState::Finalized {
            return Err(EditorError::InvalidState {
                operation: "add_shape",
                state: shape.state(),
            });
        }
        let id = self.insert_shape(shape);
        self.revision += 1;
        Ok(id)
    }

    fn insert_shape(&mut self, shape: PolyShape) -> ShapeId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.shapes.insert(id, shape);
        id
    }

    /// Elemente in Zeichenreihenfolge: je Form erst die Form, dann ihre Kontrollpunkte.
    pub fn nodes(&self) -> Vec<CanvasNode<'_>> {
        let mut nodes = Vec::new();
        for (id, shape) in self.shapes() {
            nodes.push(CanvasNode::Shape(id, shape));
            for (index, cp) in shape.control_points().iter().enumerate() {
                nodes.push(CanvasNode::ControlPoint(ControlPointId::new(id, index), cp));
            }
        }
        nodes
    }

    /// Oberstes Element unter `point`.
    pub fn pick(&self, point: DVec2) -> Option<MovableId> {
        self.nodes()
            .into_iter()
            .rev()
            .find(|node| match node {
                CanvasNode::Shape(_, shape) => shape.hit(point),
                CanvasNode::ControlPoint(_, cp) => cp.hit(point),
            })
            .map(|node| node.movable_id())
    }

    /// Erste finalisierte Form (Zeichenreihenfolge), deren Bounds `point` enthalten.
    pub fn shape_at(&self, point: DVec2, exclude: Option<ShapeId>) -> Option<ShapeId> {
        self.finalized_shapes()
            .find(|(id, shape)| Some(*id) != exclude && shape.bounds_contain(point))
            .map(|(id, _)| id)
    }

    /// Hängt `target` an die Lock-Menge von `owner`.
    pub fn add_lock(&mut self, owner: ShapeId, target: MovableId) -> EditorResult<bool> {
        let shape = self
            .shapes
            .get_mut(&owner)
            .ok_or(EditorError::UnknownShape(owner))?;
        let added = shape.add_lock(target);
        if added {
            self.revision += 1;
        }
        Ok(added)
    }

    /// Verschiebt `target` samt aller direkt und indirekt gelockten Elemente.
    ///
    /// Jedes Element bewegt sich pro Aufruf höchstens einmal, auch bei Zyklen
    /// im Lock-Graphen. Gibt die Anzahl bewegter Elemente zurück.
    pub fn translate(&mut self, target: MovableId, delta: DVec2) -> EditorResult<usize> {
        self.ensure_movable(target)?;
        if delta == DVec2::ZERO {
            return Ok(0);
        }

        let mut visited: HashSet<MovableId> = HashSet::new();
        let mut pending = vec![target];
        let mut moved = 0;

        while let Some(id) = pending.pop() {
            if !visited.insert(id) {
                continue;
            }
            match id {
                MovableId::Shape(shape_id) => {
                    let Some(shape) = self.shapes.get_mut(&shape_id) else {
                        log::warn!("Lock auf entfernte Form {} übersprungen", shape_id);
                        continue;
                    };
                    if shape.state() != ShapeState::Finalized {
                        log::warn!(
                            "Form {} im Zustand {:?} nicht verschiebbar",
                            shape_id,
                            shape.state()
                        );
                        continue;
                    }
                    moved += shape.translate_where(delta, |index| {
                        visited.insert(MovableId::ControlPoint(ControlPointId::new(shape_id, index)))
                    })?;
                    pending.extend(shape.locks().iter().rev().copied());
                }
                MovableId::ControlPoint(cp_id) => {
                    let Some(cp) = self
                        .shapes
                        .get_mut(&cp_id.shape)
                        .and_then(|s| s.control_point_mut(cp_id.index))
                    else {
                        log::warn!("Lock auf unbekannten Kontrollpunkt {:?} übersprungen", cp_id);
                        continue;
                    };
                    cp.translate(delta)?;
                    moved += 1;
                }
            }
        }

        self.revision += 1;
        Ok(moved)
    }

    fn ensure_movable(&self, target: MovableId) -> EditorResult<()> {
        let shape = self
            .shapes
            .get(&target.owner_shape())
            .ok_or(EditorError::UnknownShape(target.owner_shape()))?;
        if shape.state() != ShapeState::Finalized {
            return Err(EditorError::InvalidState {
                operation: "translate",
                state: shape.state(),
            });
        }
        if let MovableId::ControlPoint(cp) = target {
            if shape.control_points().get(cp.index).is_none() {
                return Err(EditorError::UnknownShape(cp.shape));
            }
        }
        Ok(())
    }

    /// Entfernt eine finalisierte Form samt Kontrollpunkten.
    ///
    /// Locks anderer Formen auf die Form oder ihre Punkte werden mit entfernt.
    pub fn erase(&mut self, id: ShapeId) -> EditorResult<()> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(EditorError::UnknownShape(id))?;
        shape.erase()?;
        self.shapes.shift_remove(&id);

        for other in self.shapes.values_mut() {
            other.retain_locks(|m| m.owner_shape() != id);
        }
        self.selection.retain(|cp| cp.shape != id);
        self.revision += 1;
        log::debug!("Form {} gelöscht", id);
        Ok(())
    }

    /// Aktuell selektierte Kontrollpunkte in Auswahlreihenfolge
    pub fn selection(&self) -> &IndexSet<ControlPointId> {
        &self.selection
    }

    /// Markiert einen Kontrollpunkt als selektiert.
    pub fn select(&mut self, id: ControlPointId) -> bool {
        let Some(cp) = self
            .shapes
            .get_mut(&id.shape)
            .and_then(|s| s.control_point_mut(id.index))
        else {
            return false;
        };
        cp.set_selected(true);
        self.selection.insert(id)
    }

    /// Hebt die Selektion auf und setzt die Markierung der Punkte zurück.
    pub fn clear_selection(&mut self) {
        for id in std::mem::take(&mut self.selection) {
            if let Some(cp) = self
                .shapes
                .get_mut(&id.shape)
                .and_then(|s| s.control_point_mut(id.index))
            {
                cp.set_selected(false);
            }
        }
    }

    /// Auswahlrechteck, solange eine Rahmen-Selektion läuft
    pub fn selection_area(&self) -> Option<&SelectionArea> {
        self.selecting.then_some(&self.selection_area)
    }

    /// Verwirft alle Formen, Selektion und laufende Gesten.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selection.clear();
        self.selection_area.clear();
        self.selecting = false;
        self.gesture = None;
        self.revision += 1;
    }

    /// Kartendatei-Text aller finalisierten Formen in Zeichenreihenfolge.
    pub fn to_map_text(&self) -> String {
        crate::map_file::write_map(self.finalized_shapes().map(|(_, shape)| shape))
    }

    /// Ersetzt den Inhalt durch die Formen aus den Zeilen einer Kartendatei.
    ///
    /// Der bisherige Inhalt bleibt unverändert, wenn das Parsen fehlschlägt.
    pub fn load_map_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> EditorResult<usize> {
        let shapes = crate::map_file::parse_map_lines(lines)?;
        self.clear();
        let count = shapes.len();
        for shape in shapes {
            self.insert_shape(shape);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests;
