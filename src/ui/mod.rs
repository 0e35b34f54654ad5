//! UI-Anbindung: native Datei- und Bestätigungsdialoge.

pub mod dialogs;

pub use dialogs::{handle_file_dialogs, map_file_name};
