//! Editor-Kern: Geometrie, Formen, Kontrollpunkte, Lock-Kaskade, Zeichenfläche.

pub mod canvas_node;
pub mod color;
pub mod control_point;
pub mod error;
pub mod geometry;
pub mod map_area;
pub mod movable;
pub mod path;
pub mod selection_area;
pub mod shape;
pub mod tool_state;

pub use canvas_node::CanvasNode;
pub use color::Color;
pub use control_point::{AxisListener, ControlPoint, CONTROL_POINT_RADIUS};
pub use error::{EditorError, EditorResult, MapFileError};
pub use geometry::compute_regular_polygon;
pub use map_area::MapArea;
pub use movable::{ControlPointId, Movable, MovableId, ShapeId};
pub use path::{PathWiring, PATH_END_POINT, PATH_SIDES, PATH_START_POINT};
pub use selection_area::SelectionArea;
pub use shape::{PolyShape, SharedVertices, ShapeKind, ShapeState, ShapeStyle, MAX_SIDES};
pub use tool_state::{Tool, ToolState};
