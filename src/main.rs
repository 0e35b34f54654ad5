//! Map Maker.
//!
//! Editor für Grundriss-Karten aus regelmäßigen Polygon-Räumen und Pfaden.
//! Der Host lädt Optionen und eine Karte, pumpt Dialoge und gibt eine Übersicht aus.

use map_maker::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Anzahl der Commands in der Abschluss-Übersicht
const SUMMARY_COMMANDS: usize = 5;

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Maker v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut app = EditorApp::new();
        let first = match std::env::args().nth(1) {
            Some(path) => AppIntent::FileSelected { path },
            None => AppIntent::OpenFileRequested,
        };
        app.dispatch(vec![first]);
        app.pump_dialogs();
        app.log_summary();

        app.dispatch(vec![AppIntent::ExitRequested]);
        while !app.state.should_exit {
            if !app.pump_dialogs() {
                // Keine Rückfrage mehr offen, die das Beenden aufhalten könnte
                break;
            }
        }

        log::info!("Map Maker beendet");
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.set_options(editor_options);
        state.config_path = config_path;

        Self {
            state,
            controller: AppController::new(),
        }
    }

    fn dispatch(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    /// Zeigt ausstehende Dialoge; `false`, wenn keiner ausstand.
    fn pump_dialogs(&mut self) -> bool {
        let mut pumped = false;
        loop {
            let events = ui::handle_file_dialogs(&mut self.state.ui, &self.state.options);
            if events.is_empty() {
                return pumped;
            }
            pumped = true;
            self.dispatch(events);
        }
    }

    fn log_summary(&self) {
        let scene = self.controller.build_render_scene(&self.state);
        log::info!(
            "{}: {} Formen ({} Pfade), {} Kontrollpunkte, Werkzeug {}",
            scene.file_path.as_deref().unwrap_or("ohne Datei"),
            scene.shapes.len(),
            self.state.map.path_count(),
            scene.control_points.len(),
            scene.active_tool
        );
        if !self.state.command_log.is_empty() {
            log::info!(
                "Letzte Commands: {}",
                self.state.command_log.summary(SUMMARY_COMMANDS)
            );
        }
    }
}
