use crate::domain::plant::Plant;
use crate::input::KeyResult;
use crate::lookup::worker::{LookupCompletion, LookupRequest};
use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app_state::{AppState, Focus};
use crate::state::suggest::SuggestCursor;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use chrono::Utc;
use tracing::debug;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::Cancel => {
                // Esc closes the suggestion panel without touching the text.
                if state.suggest.is_open() {
                    state.suggest.close();
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Intent::NextFocus | Intent::PrevFocus => {
                let next = match state.focus {
                    Focus::Query => Focus::Plants,
                    Focus::Plants => Focus::Query,
                };
                state.set_focus(next);
                vec![Effect::RequestRender]
            }
            Intent::ToggleLanguage => {
                state.toggle_language();
                vec![Effect::SaveSnapshot, Effect::RequestRender]
            }
            Intent::InputKey(key) => match state.focus {
                Focus::Query => reduce_query_key(state, key),
                Focus::Plants => reduce_list_key(state, key),
            },
            Intent::LookupDone(completion) => reduce_lookup_done(state, completion),
            Intent::Noop => vec![],
        }
    }
}

fn reduce_query_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    if key.modifiers == KeyModifiers::NONE {
        match key.code {
            KeyCode::Down | KeyCode::Up => {
                let len = state.suggestions().len();
                if len == 0 {
                    return vec![];
                }
                if !state.suggest.is_open() {
                    state.suggest = SuggestCursor::open();
                }
                if key.code == KeyCode::Down {
                    state.suggest.move_down(len);
                } else {
                    state.suggest.move_up(len);
                }
                return vec![Effect::RequestRender];
            }
            KeyCode::Enter => return commit_add(state),
            _ => {}
        }
    }

    let before = state.query.value().to_string();
    match state.query.handle_key(key.code, key.modifiers) {
        KeyResult::Handled => {
            if state.query.value() != before {
                state.refresh_suggestions();
            }
            vec![Effect::RequestRender]
        }
        KeyResult::Submit => commit_add(state),
        KeyResult::NotHandled => vec![],
    }
}

/// Enter commits the selected suggestion, or the raw text when nothing is
/// selected. Whitespace-only input never adds.
fn commit_add(state: &mut AppState) -> Vec<Effect> {
    let suggestions = state.suggestions();
    let name = match state.suggest.selected() {
        Some(index) => suggestions.get(index).map(|name| (*name).to_string()),
        None => {
            let raw = state.query.value().trim();
            if raw.is_empty() {
                None
            } else {
                Some(raw.to_string())
            }
        }
    };
    let Some(name) = name else {
        return vec![];
    };

    if state.pending_add.is_some() {
        // The add control is disabled while a lookup is in flight.
        return vec![Effect::RequestRender];
    }

    state.query.clear();
    state.suggest.close();
    state.pending_add = Some(name.clone());
    vec![
        Effect::SpawnLookup(LookupRequest {
            plant_name: name,
            language: state.language,
        }),
        Effect::RequestRender,
    ]
}

fn reduce_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    if key.modifiers != KeyModifiers::NONE {
        return vec![];
    }

    let len = state.plants.len();
    match key.code {
        KeyCode::Up if len > 0 => {
            state.list_cursor = (state.list_cursor + len - 1) % len;
            vec![Effect::RequestRender]
        }
        KeyCode::Down if len > 0 => {
            state.list_cursor = (state.list_cursor + 1) % len;
            vec![Effect::RequestRender]
        }
        KeyCode::Char('w') => {
            if state.water_at(state.list_cursor, Utc::now()) {
                vec![Effect::SaveSnapshot, Effect::RequestRender]
            } else {
                vec![]
            }
        }
        KeyCode::Char('r') | KeyCode::Delete => {
            if state.remove_at(state.list_cursor).is_some() {
                vec![Effect::SaveSnapshot, Effect::RequestRender]
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

fn reduce_lookup_done(state: &mut AppState, completion: LookupCompletion) -> Vec<Effect> {
    let LookupCompletion {
        plant_name,
        recommendation,
    } = completion;

    if state.pending_add.as_deref() == Some(plant_name.as_str()) {
        state.pending_add = None;
    }
    if recommendation.is_fallback() {
        debug!(plant = %plant_name, "recommendation used fallback");
    }

    state.add_plant(Plant::new(plant_name).with_watering(recommendation.into_info()));
    vec![Effect::SaveSnapshot, Effect::RequestRender]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plant::WateringInfo;
    use crate::i18n::Language;
    use crate::lookup::recommend::Recommendation;
    use crate::search::EmptyQuery;

    fn state() -> AppState {
        AppState::new(Language::En, EmptyQuery::None, 8)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Effect> {
        Reducer::reduce(state, Intent::InputKey(KeyEvent::key(code)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    fn complete_lookup(state: &mut AppState, name: &str, frequency_days: u32) -> Vec<Effect> {
        Reducer::reduce(
            state,
            Intent::LookupDone(LookupCompletion {
                plant_name: name.to_string(),
                recommendation: Recommendation::Fetched(WateringInfo {
                    frequency_days,
                    description: "Weekly.".to_string(),
                }),
            }),
        )
    }

    #[test]
    fn typing_opens_the_panel_with_matching_suggestions() {
        let mut state = state();
        type_text(&mut state, "monstera");
        assert!(state.suggest.is_open());
        let suggestions = state.suggestions();
        assert!(!suggestions.is_empty());
        for name in suggestions {
            assert!(name.to_lowercase().contains("monstera"));
        }
    }

    #[test]
    fn typing_garbage_keeps_the_panel_closed() {
        let mut state = state();
        type_text(&mut state, "nonexistentplant");
        assert!(!state.suggest.is_open());
    }

    #[test]
    fn arrow_down_then_enter_adds_the_first_suggestion() {
        let mut state = state();
        type_text(&mut state, "monstera");
        press(&mut state, KeyCode::Down);
        let effects = press(&mut state, KeyCode::Enter);

        assert!(effects.contains(&Effect::SpawnLookup(LookupRequest {
            plant_name: "Monstera Deliciosa".to_string(),
            language: Language::En,
        })));
        assert_eq!(state.pending_add.as_deref(), Some("Monstera Deliciosa"));
        assert!(state.query.is_empty());
        assert!(!state.suggest.is_open());
    }

    #[test]
    fn enter_without_selection_adds_the_raw_text() {
        let mut state = state();
        type_text(&mut state, "My Weird Cactus");
        let effects = press(&mut state, KeyCode::Enter);
        assert!(effects.contains(&Effect::SpawnLookup(LookupRequest {
            plant_name: "My Weird Cactus".to_string(),
            language: Language::En,
        })));
    }

    #[test]
    fn enter_with_empty_input_does_nothing() {
        let mut state = state();
        let effects = press(&mut state, KeyCode::Enter);
        assert!(effects.is_empty());
        assert!(state.pending_add.is_none());
    }

    #[test]
    fn enter_with_whitespace_only_does_nothing() {
        let mut state = state();
        type_text(&mut state, "   ");
        let effects = press(&mut state, KeyCode::Enter);
        assert!(!effects.iter().any(|e| matches!(e, Effect::SpawnLookup(_))));
        assert!(state.pending_add.is_none());
    }

    #[test]
    fn escape_closes_the_panel_and_keeps_the_text() {
        let mut state = state();
        type_text(&mut state, "monstera");
        assert!(state.suggest.is_open());

        Reducer::reduce(&mut state, Intent::Cancel);
        assert!(!state.suggest.is_open());
        assert_eq!(state.query.value(), "monstera");
    }

    #[test]
    fn second_add_is_blocked_while_a_lookup_is_pending() {
        let mut state = state();
        type_text(&mut state, "monstera");
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);

        type_text(&mut state, "Snake Plant");
        let effects = press(&mut state, KeyCode::Enter);
        assert!(!effects.iter().any(|e| matches!(e, Effect::SpawnLookup(_))));
        assert_eq!(state.pending_add.as_deref(), Some("Monstera Deliciosa"));
    }

    #[test]
    fn lookup_completion_appends_the_plant_and_saves() {
        let mut state = state();
        type_text(&mut state, "Peace Lily");
        press(&mut state, KeyCode::Enter);

        let effects = complete_lookup(&mut state, "Peace Lily", 7);
        assert!(effects.contains(&Effect::SaveSnapshot));
        assert!(state.pending_add.is_none());
        assert_eq!(state.plants.len(), 1);
        assert_eq!(state.plants[0].name, "Peace Lily");
        assert_eq!(state.plants[0].frequency_days(), Some(7));
        assert!(state.plants[0].last_watered.is_none());
    }

    #[test]
    fn add_then_remove_restores_the_collection() {
        let mut state = state();
        complete_lookup(&mut state, "Fittonia", 7);
        let before = state.plants.clone();

        type_text(&mut state, "Snake Plant");
        press(&mut state, KeyCode::Enter);
        complete_lookup(&mut state, "Snake Plant", 14);
        assert_eq!(state.plants.len(), 2);

        Reducer::reduce(&mut state, Intent::NextFocus);
        press(&mut state, KeyCode::Down);
        let effects = press(&mut state, KeyCode::Char('r'));
        assert!(effects.contains(&Effect::SaveSnapshot));
        assert_eq!(state.plants, before);
    }

    #[test]
    fn watering_stamps_the_current_time() {
        let mut state = state();
        complete_lookup(&mut state, "Fittonia", 7);
        Reducer::reduce(&mut state, Intent::NextFocus);

        let before = Utc::now();
        let effects = press(&mut state, KeyCode::Char('w'));
        let after = Utc::now();

        assert!(effects.contains(&Effect::SaveSnapshot));
        let watered = state.plants[0].last_watered.expect("plant was watered");
        assert!(watered >= before && watered <= after);
    }

    #[test]
    fn watering_again_replaces_but_never_clears() {
        let mut state = state();
        complete_lookup(&mut state, "Fittonia", 7);
        Reducer::reduce(&mut state, Intent::NextFocus);

        press(&mut state, KeyCode::Char('w'));
        let first = state.plants[0].last_watered.expect("watered once");
        press(&mut state, KeyCode::Char('w'));
        let second = state.plants[0].last_watered.expect("watered twice");
        assert!(second >= first);
    }

    #[test]
    fn focus_change_closes_the_panel() {
        let mut state = state();
        type_text(&mut state, "fern");
        assert!(state.suggest.is_open());
        Reducer::reduce(&mut state, Intent::NextFocus);
        assert!(!state.suggest.is_open());
        assert_eq!(state.focus, Focus::Plants);
    }

    #[test]
    fn language_toggle_persists_the_preference() {
        let mut state = state();
        let effects = Reducer::reduce(&mut state, Intent::ToggleLanguage);
        assert_eq!(state.language, Language::Zh);
        assert!(effects.contains(&Effect::SaveSnapshot));
    }

    #[test]
    fn selection_wraps_over_the_filtered_list() {
        let mut state = state();
        type_text(&mut state, "monstera");
        let len = state.suggestions().len();
        assert!(len >= 2);

        for _ in 0..len {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.suggest.selected(), Some(0));

        press(&mut state, KeyCode::Up);
        assert_eq!(state.suggest.selected(), Some(len - 1));
    }
}
