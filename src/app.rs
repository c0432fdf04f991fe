use crate::config::Config;
use crate::lookup::recommend::RecommendationClient;
use crate::lookup::worker::LookupExecutor;
use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::{Command, KeyBindings};
use crate::runtime::reducer::Reducer;
use crate::state::app_state::AppState;
use crate::storage::{Snapshot, Store};
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::pipeline::RenderPipeline;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use crate::view;
use anyhow::Context;
use chrono::Utc;
use std::time::{Duration, Instant};
use tracing::warn;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Wires the state, the key bindings, the lookup executor and the store
/// together, and executes the effects the reducer asks for.
pub struct App {
    state: AppState,
    theme: Theme,
    bindings: KeyBindings,
    executor: LookupExecutor,
    store: Store,
    spinner: Spinner,
    last_spinner_tick: Instant,
    pub pipeline: RenderPipeline,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = Store::new(config.state_path());
        let snapshot = store
            .load()
            .with_context(|| format!("loading state from {}", store.path().display()))?;

        let language = config.language.unwrap_or(snapshot.language);
        let mut state = AppState::new(
            language,
            config.suggestions.empty_query,
            config.suggestions.max_rows,
        );
        state.plants = snapshot.plants;

        let client = RecommendationClient::new(config.api_key.clone(), config.request_timeout());
        Ok(Self {
            state,
            theme: Theme::default_theme(),
            bindings: KeyBindings::new(),
            executor: LookupExecutor::new(client),
            store,
            spinner: Spinner::default(),
            last_spinner_tick: Instant::now(),
            pipeline: RenderPipeline::new(),
        })
    }

    /// Resolves a key event through the global bindings, falling through to
    /// the focused component, and runs the resulting effects. Returns true
    /// when a redraw is needed.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let intent = match self.bindings.resolve(event) {
            Some(Command::Exit) => Intent::Exit,
            Some(Command::Cancel) => Intent::Cancel,
            Some(Command::NextFocus) => Intent::NextFocus,
            Some(Command::PrevFocus) => Intent::PrevFocus,
            Some(Command::ToggleLanguage) => Intent::ToggleLanguage,
            None => Intent::InputKey(event),
        };
        self.dispatch(intent)
    }

    /// Drains finished lookups and advances the spinner. Returns true when a
    /// redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut dirty = false;
        for completion in self.executor.drain_ready() {
            dirty |= self.dispatch(Intent::LookupDone(completion));
        }
        if self.state.pending_add.is_some() && self.last_spinner_tick.elapsed() >= SPINNER_INTERVAL
        {
            self.spinner.tick();
            self.last_spinner_tick = Instant::now();
            dirty = true;
        }
        dirty
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> std::io::Result<()> {
        let frame = view::build(&self.state, &self.theme, &self.spinner, Utc::now());
        self.pipeline.render(terminal, &frame)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit()
    }

    fn dispatch(&mut self, intent: Intent) -> bool {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut dirty = false;
        for effect in effects {
            match effect {
                Effect::RequestRender => dirty = true,
                Effect::SaveSnapshot => {
                    let snapshot = Snapshot {
                        plants: self.state.plants.clone(),
                        language: self.state.language,
                    };
                    // A failed save must not take the session down.
                    if let Err(err) = self.store.save(&snapshot) {
                        warn!(error = %err, "failed to persist state");
                    }
                }
                Effect::SpawnLookup(request) => self.executor.spawn(request),
            }
        }
        dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::KeyCode;

    fn app_in(dir: &std::path::Path) -> App {
        let config = Config {
            state_path: Some(dir.join("state.json")),
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    #[test]
    fn adding_a_plant_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = app_in(dir.path());
            for ch in "My Cactus".chars() {
                app.handle_key(KeyEvent::key(KeyCode::Char(ch)));
            }
            app.handle_key(KeyEvent::key(KeyCode::Enter));

            // The lookup resolves offline through the fallback.
            let deadline = Instant::now() + Duration::from_secs(5);
            while app.state.pending_add.is_some() {
                app.tick();
                assert!(Instant::now() < deadline, "lookup never completed");
                std::thread::sleep(Duration::from_millis(10));
            }
            assert_eq!(app.state.plants.len(), 1);
        }

        let app = app_in(dir.path());
        assert_eq!(app.state.plants.len(), 1);
        assert_eq!(app.state.plants[0].name, "My Cactus");
    }

    #[test]
    fn language_preference_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = app_in(dir.path());
            app.handle_key(KeyEvent::ctrl(KeyCode::Char('l')));
        }
        let app = app_in(dir.path());
        assert_eq!(app.state.language, crate::i18n::Language::Zh);
    }

    #[test]
    fn ctrl_c_requests_exit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.handle_key(KeyEvent::ctrl(KeyCode::Char('c')));
        assert!(app.should_exit());
    }
}
