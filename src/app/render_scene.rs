//! Baut die read-only Render-Szene aus dem AppState.

use super::AppState;
use crate::core::ShapeState;
use crate::shared::{RenderControlPoint, RenderScene, RenderSelectionRect, RenderShape};

/// Erzeugt eine `RenderScene` für den aktuellen Frame.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let mut shapes = Vec::with_capacity(state.map.shape_count());
    let mut control_points = Vec::new();

    for (id, shape) in state.map.shapes() {
        shapes.push(RenderShape {
            id,
            kind: shape.kind(),
            vertices: shape.vertex_points(),
            style: shape.style(),
            finalized: shape.state() == ShapeState::Finalized,
        });
        for (index, cp) in shape.control_points().iter().enumerate() {
            control_points.push(RenderControlPoint {
                id: crate::core::ControlPointId::new(id, index),
                position: cp.position(),
                radius: cp.radius(),
                color: if cp.is_selected() {
                    options.control_point_selected_color
                } else {
                    options.control_point_color
                },
            });
        }
    }

    let selection_rect = state.map.selection_area().map(|area| RenderSelectionRect {
        origin: area.origin(),
        size: area.size(),
        fill: options.selection_fill,
        stroke: options.selection_stroke,
        stroke_width: options.selection_stroke_width,
        opacity: options.selection_opacity,
    });

    RenderScene {
        shapes,
        control_points,
        selection_rect,
        active_tool: state.tools.tool(),
        file_path: state.ui.current_file_path.clone(),
        dirty: state.is_dirty(),
    }
}
