//! The explorer's single source of truth
//!
//! `ViewStore` owns the one `ViewState` of a session. Only the selection
//! controller holds a mutable handle to it; everything else reads snapshots
//! through [`ViewStore::current`].

use crate::catalog::{Episode, EpisodeId, ShowId};
use crate::filter::filter;

/// Which kind of records the display surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the whole show catalog
    Shows,
    /// Browsing the episodes of one show
    Episodes,
}

/// Selection of the episode dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeSelection {
    /// The "all episodes" sentinel
    All,
    /// A single episode picked from the dropdown
    Single(EpisodeId),
}

/// Snapshot of what the explorer currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Active mode
    pub mode: Mode,
    /// Show whose episodes are loaded, `None` in shows mode
    pub selected_show_id: Option<ShowId>,
    /// Full, unfiltered episode set of the selected show
    pub episodes: Vec<Episode>,
    /// Active search text
    pub search_text: String,
    /// Denominator of the status line for the loaded episode set
    pub total_for_counter: usize,
    /// Current value of the episode dropdown
    pub episode_selection: EpisodeSelection,
}

/// Owner of the session's `ViewState`.
#[derive(Debug)]
pub struct ViewStore {
    state: ViewState,
}

impl ViewStore {
    /// Creates the store in shows mode with nothing loaded.
    pub fn new() -> Self {
        Self {
            state: ViewState {
                mode: Mode::Shows,
                selected_show_id: None,
                episodes: Vec::new(),
                search_text: String::new(),
                total_for_counter: 0,
                episode_selection: EpisodeSelection::All,
            },
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.state
    }

    /// Switches to shows mode, dropping the loaded episode set.
    ///
    /// The search text is left as it is.
    pub fn enter_shows_mode(&mut self) {
        self.state.mode = Mode::Shows;
        self.state.selected_show_id = None;
        self.state.episodes = Vec::new();
        self.state.total_for_counter = 0;
        self.state.episode_selection = EpisodeSelection::All;
    }

    /// Switches to episodes mode with a freshly loaded episode set.
    ///
    /// Replaces any previous set wholesale and resets the search text, so a
    /// filter typed for one show never hides episodes of the next.
    pub fn enter_episodes_mode(&mut self, show_id: ShowId, episodes: Vec<Episode>) {
        self.state.mode = Mode::Episodes;
        self.state.selected_show_id = Some(show_id);
        self.state.total_for_counter = episodes.len();
        self.state.episodes = episodes;
        self.state.search_text = String::new();
        self.state.episode_selection = EpisodeSelection::All;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    /// Clears the search text and resets the episode dropdown to "all".
    pub fn clear_search(&mut self) {
        self.state.search_text.clear();
        self.state.episode_selection = EpisodeSelection::All;
    }

    /// Narrows the displayed subset to one episode.
    ///
    /// The stored episode set and the counter's denominator stay untouched.
    pub fn select_single_episode(&mut self, episode_id: EpisodeId) {
        self.state.episode_selection = EpisodeSelection::Single(episode_id);
    }

    /// Resets the episode dropdown to the "all episodes" sentinel.
    pub fn select_all_episodes(&mut self) {
        self.state.episode_selection = EpisodeSelection::All;
    }

    /// The episodes that should currently be on screen.
    ///
    /// A single selected episode is shown regardless of the search text;
    /// otherwise the loaded set is filtered by it.
    pub fn displayed_episodes(&self) -> Vec<&Episode> {
        match self.state.episode_selection {
            EpisodeSelection::Single(id) => self
                .state
                .episodes
                .iter()
                .filter(|episode| episode.id == id)
                .collect(),
            EpisodeSelection::All => filter(&self.state.episodes, &self.state.search_text),
        }
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episodes(count: u32) -> Vec<Episode> {
        (1..=count)
            .map(|n| Episode {
                id: 100 + n,
                season: 1,
                number: n,
                name: format!("Episode {}", n),
                summary: None,
                image_url: None,
                url: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_starts_in_shows_mode() {
        let store = ViewStore::new();
        assert_eq!(store.current().mode, Mode::Shows);
        assert_eq!(store.current().selected_show_id, None);
        assert!(store.current().episodes.is_empty());
    }

    #[test]
    fn test_enter_episodes_mode_resets_search() {
        let mut store = ViewStore::new();
        store.set_search_text("stale");
        store.enter_episodes_mode(7, episodes(4));

        let state = store.current();
        assert_eq!(state.mode, Mode::Episodes);
        assert_eq!(state.selected_show_id, Some(7));
        assert_eq!(state.search_text, "");
        assert_eq!(state.total_for_counter, 4);
    }

    #[test]
    fn test_enter_episodes_mode_replaces_previous_set() {
        let mut store = ViewStore::new();
        store.enter_episodes_mode(1, episodes(5));
        store.enter_episodes_mode(2, episodes(2));
        assert_eq!(store.current().episodes.len(), 2);
        assert_eq!(store.current().total_for_counter, 2);
    }

    #[test]
    fn test_enter_shows_mode_keeps_search_text() {
        let mut store = ViewStore::new();
        store.enter_episodes_mode(1, episodes(3));
        store.set_search_text("pilot");
        store.enter_shows_mode();

        let state = store.current();
        assert_eq!(state.mode, Mode::Shows);
        assert_eq!(state.selected_show_id, None);
        assert!(state.episodes.is_empty());
        assert_eq!(state.search_text, "pilot");
    }

    #[test]
    fn test_single_episode_keeps_denominator() {
        let mut store = ViewStore::new();
        store.enter_episodes_mode(1, episodes(3));
        store.select_single_episode(102);

        let displayed = store.displayed_episodes();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id, 102);
        assert_eq!(store.current().episodes.len(), 3);
        assert_eq!(store.current().total_for_counter, 3);
    }

    #[test]
    fn test_single_episode_ignores_search() {
        let mut store = ViewStore::new();
        store.enter_episodes_mode(1, episodes(3));
        store.set_search_text("Episode 3");
        store.select_single_episode(101);
        assert_eq!(store.displayed_episodes()[0].id, 101);
    }

    #[test]
    fn test_clear_search_restores_all() {
        let mut store = ViewStore::new();
        store.enter_episodes_mode(1, episodes(3));
        store.set_search_text("Episode 2");
        assert_eq!(store.displayed_episodes().len(), 1);

        store.select_single_episode(103);
        store.clear_search();
        assert_eq!(store.current().episode_selection, EpisodeSelection::All);
        assert_eq!(store.displayed_episodes().len(), 3);
    }
}
