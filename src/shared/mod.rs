//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der Host-Oberfläche geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.
pub mod options;
mod render_scene;

pub use options::{EditorOptions, RoomPreset, MAP_FILE_EXTENSION};
pub use render_scene::{RenderControlPoint, RenderScene, RenderSelectionRect, RenderShape};
