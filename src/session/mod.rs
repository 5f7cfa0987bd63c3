//! Session runtime
//!
//! A session is a single-threaded event loop around one
//! [`SelectionController`]. User intents and catalog results arrive as
//! [`SessionEvent`]s on one channel and are handled strictly one after the
//! other, so the controller never observes a half-applied update. Catalog
//! calls run as spawned tasks that post their result back to the channel.

mod command;

pub use command::{CommandParseError, HELP, UserIntent, parse_command};

use crate::catalog::{CatalogProvider, Episode, FetchError, Show};
use crate::controller::{FetchRequest, FetchToken, SelectionController};
use crate::renderer::{RenderError, ViewRenderer};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// All inputs into the session loop.
#[derive(Debug)]
pub enum SessionEvent {
    /// Something the user asked for
    Input(UserIntent),
    /// The input surface went away (end of stdin)
    InputClosed,
    /// Result of the startup show list fetch
    ShowsLoaded(Result<Vec<Show>, FetchError>),
    /// Result of an episode fetch, tagged with its request token
    EpisodesLoaded {
        token: FetchToken,
        result: Result<Vec<Episode>, FetchError>,
    },
}

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One browsing session.
pub struct Session<C: CatalogProvider, R: ViewRenderer> {
    catalog: Arc<C>,
    controller: SelectionController<R>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    /// Catalog calls whose result has not been handled yet
    outstanding: usize,
    input_closed: bool,
}

impl<C: CatalogProvider, R: ViewRenderer> Session<C, R> {
    pub fn new(catalog: C, renderer: R) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            catalog: Arc::new(catalog),
            controller: SelectionController::new(renderer),
            events_tx,
            events_rx,
            outstanding: 0,
            input_closed: false,
        }
    }

    /// Handle for feeding events (usually user input) into the session.
    pub fn sender(&self) -> mpsc::UnboundedSender<SessionEvent> {
        self.events_tx.clone()
    }

    pub fn controller(&self) -> &SelectionController<R> {
        &self.controller
    }

    /// Starts loading the show list.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.events_tx.clone();
        self.outstanding += 1;
        tokio::spawn(async move {
            let result = catalog.list_shows().await;
            // The session may already be gone; nothing left to update then.
            let _ = tx.send(SessionEvent::ShowsLoaded(result));
        });
    }

    /// Waits for the next event and handles it.
    pub async fn step(&mut self) -> Result<Flow, RenderError> {
        // The session holds a sender itself, so the channel never closes.
        let Some(event) = self.events_rx.recv().await else {
            return Ok(Flow::Stop);
        };
        self.handle(event)
    }

    /// Runs the session until the user quits, or until input is closed and
    /// every outstanding catalog call has been handled.
    pub async fn run(mut self) -> Result<SelectionController<R>, RenderError> {
        self.start();
        while self.step().await? == Flow::Continue {}
        Ok(self.controller)
    }

    fn handle(&mut self, event: SessionEvent) -> Result<Flow, RenderError> {
        match event {
            SessionEvent::Input(intent) => return self.handle_intent(intent),
            SessionEvent::InputClosed => {
                debug!(outstanding = self.outstanding, "input closed");
                self.input_closed = true;
            }
            SessionEvent::ShowsLoaded(result) => {
                self.outstanding = self.outstanding.saturating_sub(1);
                self.controller.shows_loaded(result)?;
            }
            SessionEvent::EpisodesLoaded { token, result } => {
                self.outstanding = self.outstanding.saturating_sub(1);
                self.controller.episodes_loaded(token, result)?;
            }
        }

        if self.input_closed && self.outstanding == 0 {
            return Ok(Flow::Stop);
        }
        Ok(Flow::Continue)
    }

    fn handle_intent(&mut self, intent: UserIntent) -> Result<Flow, RenderError> {
        match intent {
            UserIntent::SelectShow(show_id) => {
                if let Some(request) = self.controller.select_show(show_id)? {
                    self.spawn_episode_fetch(request);
                }
            }
            UserIntent::ReturnToShows => self.controller.return_to_shows()?,
            UserIntent::SelectEpisode(choice) => self.controller.select_episode(choice)?,
            UserIntent::Search(text) => self.controller.search(&text)?,
            UserIntent::Help => self.controller.show_help(HELP)?,
            UserIntent::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// Runs an episode fetch in the background.
    ///
    /// Superseded fetches are left running; the controller drops their
    /// result when it arrives.
    fn spawn_episode_fetch(&mut self, request: FetchRequest) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.events_tx.clone();
        self.outstanding += 1;
        tokio::spawn(async move {
            let result = catalog.list_episodes(request.show_id).await;
            let _ = tx.send(SessionEvent::EpisodesLoaded {
                token: request.token,
                result,
            });
        });
    }
}

/// Reads commands line by line and forwards them to a session.
///
/// Unparseable lines are reported on stderr together with the usage text.
/// Sends [`SessionEvent::InputClosed`] once the reader is exhausted.
pub async fn forward_commands<B>(reader: B, events: mpsc::UnboundedSender<SessionEvent>)
where
    B: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                break;
            }
        };

        match parse_command(&line) {
            Ok(intent) => {
                let quit = intent == UserIntent::Quit;
                if events.send(SessionEvent::Input(intent)).is_err() || quit {
                    return;
                }
            }
            Err(CommandParseError::Empty) => {}
            Err(e) => {
                warn!(input = %line, "unrecognized input");
                eprintln!("{}\n{}", e, HELP);
            }
        }
    }

    let _ = events.send(SessionEvent::InputClosed);
}
