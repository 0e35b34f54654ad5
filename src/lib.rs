//! Map Maker Library.
//! Editor-Kern und Kartenformat als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map_file;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PendingAction, SaveChoice, UiState};
pub use core::{
    compute_regular_polygon, Color, ControlPoint, ControlPointId, EditorError, EditorResult,
    MapArea, MapFileError, Movable, MovableId, PolyShape, SelectionArea, ShapeId, ShapeKind,
    ShapeState, ShapeStyle, Tool, ToolState,
};
pub use map_file::{parse_map, parse_map_lines, write_map};
pub use shared::{EditorOptions, RenderScene};
