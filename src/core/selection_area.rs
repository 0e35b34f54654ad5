//! Auswahlrechteck für die Rahmen-Selektion von Kontrollpunkten.

use super::CanvasNode;
use glam::DVec2;

/// Rechteck vom Ankerpunkt bis zur aktuellen Zeigerposition
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionArea {
    anchor: DVec2,
    origin: DVec2,
    size: DVec2,
}

impl SelectionArea {
    /// Setzt den Ankerpunkt und ein leeres Rechteck dort.
    pub fn start(&mut self, point: DVec2) {
        self.anchor = point;
        self.origin = point;
        self.size = DVec2::ZERO;
    }

    /// Spannt das Rechteck vom Anker bis `point` auf, unabhängig von der Zugrichtung.
    pub fn update(&mut self, point: DVec2) {
        self.origin = self.anchor.min(point);
        self.size = (point - self.anchor).abs();
    }

    /// Setzt auf ein leeres Rechteck im Ursprung zurück.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Rechteck ohne Fläche enthält nichts.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Nur Kontrollpunkte, deren Kreis-Bounds vollständig im Rechteck liegen.
    pub fn contains(&self, node: &CanvasNode<'_>) -> bool {
        let CanvasNode::ControlPoint(_, cp) = node else {
            return false;
        };
        if self.is_empty() {
            return false;
        }
        let (min, max) = cp.bounds();
        let rect_max = self.origin + self.size;
        min.cmpge(self.origin).all() && max.cmple(rect_max).all()
    }

    /// Ruft `on_match` für jedes enthaltene Element auf.
    pub fn select_all<'a>(
        &self,
        nodes: impl IntoIterator<Item = CanvasNode<'a>>,
        mut on_match: impl FnMut(CanvasNode<'a>),
    ) {
        for node in nodes {
            if self.contains(&node) {
                on_match(node);
            }
        }
    }
}
