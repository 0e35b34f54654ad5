//! Verteilung der Zeigerphasen Press/Drag/Release auf die Werkzeug-Protokolle.

use super::{Gesture, MapArea};
use crate::core::{CanvasNode, EditorError, EditorResult, MovableId, PathWiring, PolyShape};
use crate::core::{ShapeId, ShapeState, Tool, ToolState};
use glam::DVec2;

impl MapArea {
    /// Zeiger gedrückt: Geste beginnen.
    ///
    /// Das Element unter dem Zeiger wird hier einmalig bestimmt und bleibt
    /// Ziel für Drag und Release dieser Geste.
    pub fn press(&mut self, tools: &ToolState, point: DVec2) -> EditorResult<()> {
        self.discard_unfinished();
        let target = self.pick(point);
        let mut gesture = Gesture {
            press: point,
            last: point,
            target,
            drawing: None,
        };

        match tools.tool() {
            Tool::Select => {
                self.clear_selection();
                self.selection_area.start(point);
                self.selecting = true;
            }
            Tool::Room => {
                let shape = PolyShape::new(tools.option()).inspect_err(|err| {
                    log::warn!("Raum-Werkzeug ohne gültige Seitenanzahl: {}", err)
                })?;
                gesture.drawing = Some(self.start_shape(shape)?);
            }
            Tool::Path => {
                let shape = PolyShape::new_path()?;
                gesture.drawing = Some(self.start_shape(shape)?);
            }
            Tool::Erase => {
                if let Some(MovableId::Shape(id)) = target {
                    self.erase(id)?;
                }
            }
            Tool::Move | Tool::Door => {}
        }

        self.gesture = Some(gesture);
        Ok(())
    }

    /// Zeiger gezogen.
    pub fn drag(&mut self, tools: &ToolState, point: DVec2) -> EditorResult<()> {
        let Some(gesture) = self.gesture.as_mut() else {
            log::debug!("Drag ohne vorheriges Press ignoriert");
            return Ok(());
        };
        let delta = point - gesture.last;
        gesture.last = point;
        let gesture = *gesture;

        match tools.tool() {
            Tool::Select => {
                if self.selecting {
                    self.selection_area.update(point);
                }
            }
            Tool::Move => {
                // Ohne gegriffenes Element bewegt sich nichts, auch keine Selektion
                let Some(target) = gesture.target else {
                    return Ok(());
                };
                if self.selection.is_empty() {
                    self.translate(target, delta)?;
                } else {
                    let selected: Vec<_> = self.selection.iter().copied().collect();
                    for id in selected {
                        self.translate(MovableId::ControlPoint(id), delta)?;
                    }
                }
            }
            Tool::Room | Tool::Path => {
                let id = gesture
                    .drawing
                    .ok_or(EditorError::NoActiveShape("redraw"))?;
                let shape = self
                    .shapes
                    .get_mut(&id)
                    .ok_or(EditorError::UnknownShape(id))?;
                shape.redraw(gesture.press, point, true)?;
            }
            Tool::Erase | Tool::Door => {}
        }
        Ok(())
    }

    /// Zeiger losgelassen: Geste abschließen.
    pub fn release(&mut self, tools: &ToolState, point: DVec2) -> EditorResult<()> {
        let gesture = self.gesture.take();

        match tools.tool() {
            Tool::Select => self.finish_selection(),
            Tool::Room => {
                self.finish_drawing(gesture)?;
            }
            Tool::Path => {
                let path = self.finish_drawing(gesture)?;
                if let Some(target) = gesture.and_then(|g| g.target) {
                    self.wire_path(path, target, point)?;
                }
            }
            Tool::Move | Tool::Erase | Tool::Door => {}
        }

        self.discard_unfinished();
        Ok(())
    }

    fn start_shape(&mut self, mut shape: PolyShape) -> EditorResult<ShapeId> {
        shape.set_style(self.default_style);
        shape.start()?;
        Ok(self.insert_shape(shape))
    }

    fn finish_drawing(&mut self, gesture: Option<Gesture>) -> EditorResult<ShapeId> {
        let id = gesture
            .and_then(|g| g.drawing)
            .ok_or(EditorError::NoActiveShape("finalize"))?;
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(EditorError::UnknownShape(id))?;

        if let Err(err) = shape.finalize() {
            self.shapes.shift_remove(&id);
            log::warn!("Form {} verworfen: {}", id, err);
            return Err(err);
        }

        self.revision += 1;
        log::debug!("Form {} finalisiert ({} Seiten)", id, shape.sides());
        Ok(id)
    }

    fn finish_selection(&mut self) {
        if !self.selecting {
            return;
        }
        let area = self.selection_area;
        let mut hits = Vec::new();
        area.select_all(self.nodes(), |node| {
            if let CanvasNode::ControlPoint(id, _) = node {
                hits.push(id);
            }
        });
        for id in hits {
            self.select(id);
        }
        self.selection_area.clear();
        self.selecting = false;
    }

    fn wire_path(&mut self, path: ShapeId, target: MovableId, point: DVec2) -> EditorResult<()> {
        let wiring = PathWiring {
            path,
            target,
            release_shape: self.shape_at(point, Some(path)),
        };
        for (owner, locked) in wiring.lock_edges() {
            self.add_lock(owner, locked)?;
        }
        log::debug!(
            "Pfad {} verbunden: Ziel {:?}, Form am Ende {:?}",
            path,
            target,
            wiring.release_shape
        );
        Ok(())
    }

    /// Entfernt Formen, deren Zeichengeste nicht abgeschlossen wurde.
    fn discard_unfinished(&mut self) {
        let before = self.shapes.len();
        self.shapes
            .retain(|_, shape| shape.state() == ShapeState::Finalized);
        let dropped = before - self.shapes.len();
        if dropped > 0 {
            log::warn!("{} unvollständige Form(en) verworfen", dropped);
        }
    }
}
