//! Handler für Zeigergesten auf der Zeichenfläche.

use crate::app::AppState;
use anyhow::Context;
use glam::DVec2;

/// Reicht ein Press mit dem aktuellen Werkzeug an die Zeichenfläche weiter.
pub fn press(state: &mut AppState, world_pos: DVec2) -> anyhow::Result<()> {
    let tool = state.tools.tool();
    state
        .map
        .press(&state.tools, world_pos)
        .with_context(|| format!("{tool}: Press bei {world_pos} fehlgeschlagen"))
}

/// Reicht ein Drag an die Zeichenfläche weiter.
pub fn drag(state: &mut AppState, world_pos: DVec2) -> anyhow::Result<()> {
    let tool = state.tools.tool();
    state
        .map
        .drag(&state.tools, world_pos)
        .with_context(|| format!("{tool}: Drag bei {world_pos} fehlgeschlagen"))
}

/// Reicht ein Release an die Zeichenfläche weiter.
pub fn release(state: &mut AppState, world_pos: DVec2) -> anyhow::Result<()> {
    let tool = state.tools.tool();
    state
        .map
        .release(&state.tools, world_pos)
        .with_context(|| format!("{tool}: Release bei {world_pos} fehlgeschlagen"))
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.map.clear_selection();
}
