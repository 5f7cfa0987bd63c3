//! Selection controller
//!
//! The controller is the only writer of the session's view state. It turns
//! user intents and catalog results into view state mutations and re-renders
//! the display surface after each of them.
//!
//! Episode fetches are not executed here. [`SelectionController::select_show`]
//! hands back a [`FetchRequest`] for the caller to run; the result comes back
//! through [`SelectionController::episodes_loaded`] together with the
//! request's token. Only the most recently issued token is ever applied, so
//! a slow response for an older selection can never overwrite a newer one.

use crate::catalog::{Episode, EpisodeId, FetchError, Show, ShowId};
use crate::presentation::{FrameContext, SHOWS_FAILED_BANNER, StatusIndicator, compose_frame};
use crate::renderer::{RenderError, ViewRenderer};
use crate::view_state::{Mode, ViewState, ViewStore};
use tracing::{debug, info, warn};

/// Identifies one episode fetch.
///
/// Tokens are assigned in increasing order; a response is only applied when
/// it carries the most recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(u64);

/// An episode fetch the caller has to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: FetchToken,
    pub show_id: ShowId,
}

/// Coarse state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Browsing the show catalog
    Shows,
    /// Waiting for the show list or an episode list
    LoadingEpisodes,
    /// Browsing one show's episodes
    Episodes,
}

/// Value picked in the episode dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeChoice {
    All,
    Single(EpisodeId),
}

/// What happened to an episode fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The episodes were loaded and displayed
    Applied,
    /// The fetch failed and the error is displayed
    Failed,
    /// The result belonged to a superseded request and was dropped
    Discarded,
}

/// Reconciles user intents and asynchronous catalog results.
pub struct SelectionController<R: ViewRenderer> {
    store: ViewStore,
    /// Show list, loaded once at startup
    catalog: Vec<Show>,
    catalog_loaded: bool,
    state: ControllerState,
    next_token: u64,
    /// Most recently issued episode fetch that has not resolved yet
    in_flight: Option<FetchRequest>,
    indicator: Option<StatusIndicator>,
    banner: Option<&'static str>,
    renderer: R,
}

impl<R: ViewRenderer> SelectionController<R> {
    /// Creates a controller waiting for the show list.
    pub fn new(renderer: R) -> Self {
        Self {
            store: ViewStore::new(),
            catalog: Vec::new(),
            catalog_loaded: false,
            state: ControllerState::LoadingEpisodes,
            next_token: 0,
            in_flight: None,
            indicator: None,
            banner: None,
            renderer,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn view(&self) -> &ViewState {
        self.store.current()
    }

    /// The episodes currently on screen.
    pub fn displayed_episodes(&self) -> Vec<&Episode> {
        self.store.displayed_episodes()
    }

    pub fn catalog(&self) -> &[Show] {
        &self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Passes usage text to the renderer; the view is left alone.
    pub fn show_help(&mut self, text: &str) -> Result<(), RenderError> {
        self.renderer.show_help(text)
    }

    /// Stores the show list and settles into shows mode.
    ///
    /// A failed load leaves the catalog empty and shows a banner. The show
    /// list is loaded once; later calls are ignored.
    pub fn shows_loaded(&mut self, result: Result<Vec<Show>, FetchError>) -> Result<(), RenderError> {
        if self.catalog_loaded {
            warn!("show list already loaded, ignoring repeated result");
            return Ok(());
        }
        self.catalog_loaded = true;

        match result {
            Ok(shows) => {
                info!(count = shows.len(), "show list loaded");
                self.catalog = shows;
            }
            Err(e) => {
                warn!(error = %e, "failed to load show list");
                self.banner = Some(SHOWS_FAILED_BANNER);
            }
        }

        self.store.enter_shows_mode();
        self.state = ControllerState::Shows;
        self.render()
    }

    /// Requests the episodes of a show.
    ///
    /// Supersedes any outstanding request. Returns the fetch the caller must
    /// run, or `None` when the id is not part of the catalog.
    pub fn select_show(&mut self, show_id: ShowId) -> Result<Option<FetchRequest>, RenderError> {
        if !self.catalog.iter().any(|show| show.id == show_id) {
            warn!(show_id, "ignoring selection of unknown show");
            return Ok(None);
        }

        self.next_token += 1;
        let request = FetchRequest {
            token: FetchToken(self.next_token),
            show_id,
        };
        if let Some(previous) = self.in_flight.replace(request) {
            debug!(
                token = ?previous.token,
                show_id = previous.show_id,
                "superseding outstanding episode fetch"
            );
        }

        info!(show_id, token = ?request.token, "fetching episodes");
        self.state = ControllerState::LoadingEpisodes;
        self.indicator = Some(StatusIndicator::Loading);
        self.render()?;

        Ok(Some(request))
    }

    /// Applies the result of an episode fetch if it is still current.
    pub fn episodes_loaded(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Episode>, FetchError>,
    ) -> Result<Resolution, RenderError> {
        let request = match self.in_flight {
            Some(request) if request.token == token => request,
            _ => {
                debug!(?token, ok = result.is_ok(), "discarding stale episode response");
                return Ok(Resolution::Discarded);
            }
        };
        self.in_flight = None;

        let resolution = match result {
            Ok(episodes) => {
                info!(show_id = request.show_id, count = episodes.len(), "episodes loaded");
                self.store.enter_episodes_mode(request.show_id, episodes);
                self.indicator = None;
                Resolution::Applied
            }
            Err(e) => {
                warn!(show_id = request.show_id, error = %e, "failed to load episodes");
                self.indicator = Some(StatusIndicator::Failed);
                Resolution::Failed
            }
        };

        self.state = self.settled_state();
        self.render()?;
        Ok(resolution)
    }

    /// Goes back to the show catalog.
    ///
    /// Drops the loaded episodes and the search text. An outstanding episode
    /// fetch is abandoned; its response will be discarded.
    pub fn return_to_shows(&mut self) -> Result<(), RenderError> {
        if let Some(abandoned) = self.in_flight.take() {
            debug!(token = ?abandoned.token, "abandoning outstanding episode fetch");
        }
        self.store.enter_shows_mode();
        self.store.set_search_text("");
        self.indicator = None;
        self.state = ControllerState::Shows;
        self.render()
    }

    /// Applies a choice from the episode dropdown.
    ///
    /// Only meaningful once episodes are loaded. A single episode is shown
    /// regardless of the search text.
    pub fn select_episode(&mut self, choice: EpisodeChoice) -> Result<(), RenderError> {
        if self.store.current().mode != Mode::Episodes {
            debug!(?choice, "no episodes loaded, ignoring episode selection");
            return Ok(());
        }

        match choice {
            EpisodeChoice::All => self.store.select_all_episodes(),
            EpisodeChoice::Single(id) => {
                if !self.store.current().episodes.iter().any(|e| e.id == id) {
                    warn!(episode_id = id, "ignoring selection of unknown episode");
                    return Ok(());
                }
                self.store.select_single_episode(id);
            }
        }
        self.render()
    }

    /// Updates the search text.
    ///
    /// In shows mode the text is only stored. With episodes loaded the
    /// display is re-filtered and the episode dropdown goes back to "all";
    /// an empty text shows the full set again.
    pub fn search(&mut self, text: &str) -> Result<(), RenderError> {
        if text.is_empty() {
            self.store.clear_search();
        } else {
            self.store.set_search_text(text);
            self.store.select_all_episodes();
        }

        if self.store.current().mode != Mode::Episodes {
            return Ok(());
        }
        self.render()
    }

    /// The state to fall back to once nothing is in flight.
    fn settled_state(&self) -> ControllerState {
        match self.store.current().mode {
            Mode::Shows => ControllerState::Shows,
            Mode::Episodes => ControllerState::Episodes,
        }
    }

    /// Composes a frame from the current state and hands it to the renderer.
    fn render(&mut self) -> Result<(), RenderError> {
        let displayed = self.store.displayed_episodes();
        let frame = compose_frame(FrameContext {
            state: self.store.current(),
            displayed_episodes: &displayed,
            catalog: &self.catalog,
            pending_show: self.in_flight.map(|request| request.show_id),
            indicator: self.indicator,
            banner: self.banner,
        });
        self.renderer.render(&frame)
    }
}
