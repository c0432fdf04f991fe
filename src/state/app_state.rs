use crate::domain::plant::Plant;
use crate::i18n::{Language, text};
use crate::input::TextInput;
use crate::search::{self, EmptyQuery};
use crate::state::suggest::SuggestCursor;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    Plants,
}

/// The whole mutable application state, owned by the event loop and passed
/// explicitly through the update and render cycle.
pub struct AppState {
    pub plants: Vec<Plant>,
    pub language: Language,
    pub query: TextInput,
    pub suggest: SuggestCursor,
    pub focus: Focus,
    pub list_cursor: usize,
    /// Name of the plant whose recommendation lookup is in flight. While set,
    /// further adds are blocked and the add control renders as busy.
    pub pending_add: Option<String>,
    pub empty_query: EmptyQuery,
    pub max_suggestions: usize,
    should_exit: bool,
}

impl AppState {
    pub fn new(language: Language, empty_query: EmptyQuery, max_suggestions: usize) -> Self {
        let query = TextInput::new().with_placeholder(text(language).search_placeholder);
        Self {
            plants: Vec::new(),
            language,
            query,
            suggest: SuggestCursor::Closed,
            focus: Focus::Query,
            list_cursor: 0,
            pending_add: None,
            empty_query,
            max_suggestions,
            should_exit: false,
        }
    }

    /// Candidates matching the current query, locale-selected, capped to the
    /// panel height.
    pub fn suggestions(&self) -> Vec<&'static str> {
        let mut matches = search::filter(
            self.query.value(),
            self.language.houseplants(),
            self.empty_query,
        );
        matches.truncate(self.max_suggestions);
        matches
    }

    /// Reconciles the panel with the query after an edit: reopen when there
    /// is anything to show, drop the stale selection either way.
    pub fn refresh_suggestions(&mut self) {
        if self.suggestions().is_empty() {
            self.suggest.close();
        } else {
            self.suggest = SuggestCursor::open();
        }
    }

    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    pub fn water_at(&mut self, index: usize, now: DateTime<Utc>) -> bool {
        match self.plants.get_mut(index) {
            Some(plant) => {
                plant.water(now);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Plant> {
        if index >= self.plants.len() {
            return None;
        }
        let removed = self.plants.remove(index);
        if self.list_cursor >= self.plants.len() && self.list_cursor > 0 {
            self.list_cursor -= 1;
        }
        Some(removed)
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.query
            .set_placeholder(text(self.language).search_placeholder);
        // The candidate list changed under the filter.
        if self.suggest.is_open() {
            self.refresh_suggestions();
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            self.focus = focus;
            // Focus loss closes the panel without touching the text field.
            self.suggest.close();
        }
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Language::En, EmptyQuery::None, 8)
    }

    #[test]
    fn suggestions_are_capped_to_the_panel_height() {
        let mut state = state();
        state.query.set_value("a");
        assert!(state.suggestions().len() <= 8);
    }

    #[test]
    fn focus_change_closes_the_panel_but_keeps_the_query() {
        let mut state = state();
        state.query.set_value("monstera");
        state.refresh_suggestions();
        assert!(state.suggest.is_open());

        state.set_focus(Focus::Plants);
        assert!(!state.suggest.is_open());
        assert_eq!(state.query.value(), "monstera");
    }

    #[test]
    fn language_toggle_swaps_candidates_and_placeholder() {
        let mut state = state();
        assert!(state.suggestions().is_empty());
        state.toggle_language();
        assert_eq!(state.language, Language::Zh);
        assert_eq!(state.query.placeholder(), "搜索植物...");
        state.query.set_value("龟背竹");
        assert_eq!(state.suggestions(), vec!["龟背竹"]);
    }

    #[test]
    fn removing_the_last_plant_pulls_the_cursor_back() {
        let mut state = state();
        state.add_plant(Plant::new("A"));
        state.add_plant(Plant::new("B"));
        state.list_cursor = 1;
        state.remove_at(1);
        assert_eq!(state.list_cursor, 0);
    }
}
