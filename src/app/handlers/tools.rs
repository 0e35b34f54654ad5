//! Handler für Werkzeugwahl.

use crate::app::AppState;
use crate::core::Tool;

/// Wechselt das Werkzeug; die Option wird dabei zurückgesetzt.
pub fn set_tool(state: &mut AppState, tool: Tool) {
    state.tools.set_tool(tool);
    log::debug!("Werkzeug: {}", tool);
}

/// Setzt die Werkzeug-Option.
pub fn set_option(state: &mut AppState, option: usize) {
    state.tools.set_option(option);
}

/// Wechselt das Werkzeug über seine Toolbar-ID.
pub fn set_tool_by_id(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let tool: Tool = id.parse()?;
    set_tool(state, tool);
    Ok(())
}
