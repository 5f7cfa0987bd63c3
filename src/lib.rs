//! Episode Explorer - Browse a TV show catalog from the terminal
//!
//! This library provides the core functionality for browsing shows, drilling
//! into a show's episodes and filtering them, while keeping the display
//! consistent with whichever catalog response is current.

mod catalog;
mod config;
mod controller;
mod filter;
mod presentation;
mod renderer;
mod session;
mod view_state;

pub use catalog::{
    CatalogProvider, DEFAULT_BASE_URL, Episode, EpisodeId, FetchError, Show, ShowId,
    TvMazeCatalog, sort_shows_by_name,
};
pub use config::{DEFAULT_SUMMARY_WIDTH, ExplorerConfig};
pub use controller::{
    ControllerState, EpisodeChoice, FetchRequest, FetchToken, Resolution, SelectionController,
};
pub use filter::{Searchable, filter};
pub use presentation::{
    Body, CardDescriptor, Dropdown, DropdownOption, Frame, OptionKey, StatusIndicator, ToCard,
    format_code, status_line,
};
pub use renderer::{RenderError, TerminalRenderer, ViewRenderer};
pub use session::{
    CommandParseError, Flow, HELP, Session, SessionEvent, UserIntent, forward_commands,
    parse_command,
};
pub use view_state::{EpisodeSelection, Mode, ViewState};

use std::io;
use thiserror::Error;

/// Top-level error type for Episode Explorer operations
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Error while rendering a frame
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Runs an interactive explorer session on the terminal
///
/// Loads the show list from the configured catalog, renders every frame to
/// stdout and reads commands from stdin until the user quits or stdin is
/// closed.
///
/// Must be called from within a tokio runtime. A current-thread runtime is
/// enough; all state lives on the calling task.
///
/// # Examples
///
/// ```no_run
/// use episode_explorer::{explore, ExplorerConfig};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     explore(ExplorerConfig::default()).await.unwrap();
/// }
/// ```
pub async fn explore(config: ExplorerConfig) -> Result<(), ExplorerError> {
    let catalog = TvMazeCatalog::with_base_url(config.base_url);
    let renderer = TerminalRenderer::new(io::stdout(), config.summary_width);
    let session = Session::new(catalog, renderer);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let events = session.sender();
    // The session owns the receiving end, so queueing cannot fail here.
    let _ = events.send(SessionEvent::Input(UserIntent::Help));
    tokio::spawn(forward_commands(input, events));

    session.run().await?;
    Ok(())
}
