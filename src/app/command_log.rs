//! Verlauf der ausgeführten Commands.
//!
//! Der Host zeigt daraus die letzten Schritte an; Tests prüfen damit,
//! welche Commands ein Intent ausgelöst hat.

use super::AppCommand;

/// Begrenzter Verlauf in Ausführungsreihenfolge (ältester zuerst).
#[derive(Debug)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    /// Standardgröße des Verlaufs
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Verlauf mit eigener Obergrenze (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Hängt einen Command an.
    ///
    /// Ist der Verlauf voll, fällt die ältere Hälfte weg, damit nicht bei
    /// jedem weiteren Command umkopiert wird.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= self.capacity {
            let dropped = self.capacity.div_ceil(2);
            self.entries.drain(..dropped);
            log::debug!("Command-Verlauf gekürzt um {} Einträge", dropped);
        }
        log::trace!("Command: {:?}", command);
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gesamter Verlauf
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Die letzten `count` Commands, ältester zuerst.
    pub fn recent(&self, count: usize) -> &[AppCommand] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Kurzfassung der letzten Commands für Statusausgaben, z.B. `SetTool, CanvasPress`.
    pub fn summary(&self, count: usize) -> String {
        self.recent(count)
            .iter()
            .map(command_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Variantenname eines Commands ohne Felder.
fn command_name(command: &AppCommand) -> &'static str {
    match command {
        AppCommand::CanvasPress { .. } => "CanvasPress",
        AppCommand::CanvasDrag { .. } => "CanvasDrag",
        AppCommand::CanvasRelease { .. } => "CanvasRelease",
        AppCommand::SetTool { .. } => "SetTool",
        AppCommand::SetToolOption { .. } => "SetToolOption",
        AppCommand::SetToolById { .. } => "SetToolById",
        AppCommand::ClearSelection => "ClearSelection",
        AppCommand::RequestDestructiveAction { .. } => "RequestDestructiveAction",
        AppCommand::AnswerSaveConfirm { .. } => "AnswerSaveConfirm",
        AppCommand::RequestOpenFileDialog => "RequestOpenFileDialog",
        AppCommand::RequestSaveFileDialog => "RequestSaveFileDialog",
        AppCommand::LoadFile { .. } => "LoadFile",
        AppCommand::SaveFile { .. } => "SaveFile",
        AppCommand::CancelSaveDialog => "CancelSaveDialog",
        AppCommand::ApplyOptions { .. } => "ApplyOptions",
        AppCommand::ResetOptions => "ResetOptions",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tool;

    #[test]
    fn test_full_log_drops_older_half() {
        let mut log = CommandLog::with_capacity(4);
        for option in 0..4 {
            log.record(&AppCommand::SetToolOption { option });
        }
        assert_eq!(log.len(), 4);

        log.record(&AppCommand::ClearSelection);
        assert_eq!(log.len(), 3);
        assert!(matches!(
            log.entries(),
            [
                AppCommand::SetToolOption { option: 2 },
                AppCommand::SetToolOption { option: 3 },
                AppCommand::ClearSelection
            ]
        ));
    }

    #[test]
    fn test_recent_and_summary() {
        let mut log = CommandLog::new();
        assert!(log.recent(3).is_empty());
        assert_eq!(log.summary(3), "");

        log.record(&AppCommand::SetTool { tool: Tool::Room });
        log.record(&AppCommand::SetToolOption { option: 4 });
        log.record(&AppCommand::SaveFile { path: None });

        assert_eq!(log.recent(2).len(), 2);
        assert_eq!(log.recent(10).len(), 3);
        assert_eq!(log.summary(2), "SetToolOption, SaveFile");
    }

    #[test]
    fn test_zero_capacity_keeps_last_command() {
        let mut log = CommandLog::with_capacity(0);
        log.record(&AppCommand::ClearSelection);
        log.record(&AppCommand::ResetOptions);
        assert!(matches!(log.entries(), [AppCommand::ResetOptions]));
    }
}
