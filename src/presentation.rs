//! Presentation adapter
//!
//! Maps view state to a renderer-agnostic [`Frame`]: the status line, one card
//! descriptor per displayed record, both dropdowns and the transient status
//! messages. Nothing in here touches an output device.

use crate::catalog::{Episode, Show, ShowId};
use crate::view_state::{EpisodeSelection, Mode, ViewState};

/// Image shown on cards whose record has none
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/250x140?text=No+Image";
const PLACEHOLDER_IMAGE_ALT: &str = "No image available";
const NO_SUMMARY: &str = "No summary available.";
const SHOW_CODE: &str = "TV Show";
const EMPTY_LINK: &str = "#";

pub const ALL_SHOWS_LABEL: &str = "Show All Shows";
pub const ALL_EPISODES_LABEL: &str = "Show All Episodes";

pub const NO_EPISODES_MESSAGE: &str = "No episodes match your search.";
pub const NO_SHOWS_MESSAGE: &str = "No shows available.";

/// Formats season and episode numbers as `S01E05`.
pub fn format_code(season: u32, number: u32) -> String {
    format!("S{:02}E{:02}", season, number)
}

/// Formats the counter shown above the cards.
pub fn status_line(shown: usize, total: usize) -> String {
    format!("Displaying {}/{} episode(s)", shown, total)
}

/// Everything needed to instantiate one visual card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor {
    /// Id of the record behind the card (show id or episode id)
    pub key: u32,
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    /// `SxxEyy` for episodes, a fixed label for shows
    pub code: String,
    /// Summary markup, or a fallback text
    pub summary_html: String,
    pub link_url: String,
}

/// Records that can be turned into a card.
pub trait ToCard {
    fn to_card(&self) -> CardDescriptor;
}

impl ToCard for Show {
    fn to_card(&self) -> CardDescriptor {
        let (image_url, image_alt) = image_or_placeholder(self.image_url.as_deref(), &self.name);
        CardDescriptor {
            key: self.id,
            image_url,
            image_alt,
            title: self.name.clone(),
            code: SHOW_CODE.to_string(),
            summary_html: summary_or_fallback(self.summary.as_deref()),
            link_url: if self.url.is_empty() {
                EMPTY_LINK.to_string()
            } else {
                self.url.clone()
            },
        }
    }
}

impl ToCard for Episode {
    fn to_card(&self) -> CardDescriptor {
        let (image_url, image_alt) = image_or_placeholder(self.image_url.as_deref(), &self.name);
        CardDescriptor {
            key: self.id,
            image_url,
            image_alt,
            title: self.name.clone(),
            code: format_code(self.season, self.number),
            summary_html: summary_or_fallback(self.summary.as_deref()),
            link_url: self.url.clone(),
        }
    }
}

impl<T: ToCard + ?Sized> ToCard for &T {
    fn to_card(&self) -> CardDescriptor {
        (**self).to_card()
    }
}

fn image_or_placeholder(image_url: Option<&str>, name: &str) -> (String, String) {
    match image_url {
        Some(url) if !url.is_empty() => (url.to_string(), name.to_string()),
        _ => (
            PLACEHOLDER_IMAGE_URL.to_string(),
            PLACEHOLDER_IMAGE_ALT.to_string(),
        ),
    }
}

fn summary_or_fallback(summary: Option<&str>) -> String {
    match summary {
        Some(summary) if !summary.is_empty() => summary.to_string(),
        _ => NO_SUMMARY.to_string(),
    }
}

/// The main content area: cards, or a single message when there are none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Cards(Vec<CardDescriptor>),
    Placeholder(&'static str),
}

/// Builds the content area for the given records.
pub fn body_for<T: ToCard>(mode: Mode, records: &[T]) -> Body {
    if records.is_empty() {
        return Body::Placeholder(match mode {
            Mode::Shows => NO_SHOWS_MESSAGE,
            Mode::Episodes => NO_EPISODES_MESSAGE,
        });
    }
    Body::Cards(records.iter().map(|record| record.to_card()).collect())
}

/// Key of a dropdown option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    /// The "all shows" / "all episodes" entry
    Sentinel,
    Id(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub key: OptionKey,
    pub label: String,
}

/// Option list of a selection control together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub options: Vec<DropdownOption>,
    pub selected: OptionKey,
}

impl Dropdown {
    /// Label of the selected option, falling back to the sentinel's label.
    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|option| option.key == self.selected)
            .or_else(|| self.options.first())
            .map(|option| option.label.as_str())
            .unwrap_or_default()
    }
}

/// Builds the show dropdown in catalog order.
pub fn show_dropdown(catalog: &[Show], selected: Option<ShowId>) -> Dropdown {
    let options = std::iter::once(DropdownOption {
        key: OptionKey::Sentinel,
        label: ALL_SHOWS_LABEL.to_string(),
    })
    .chain(catalog.iter().map(|show| DropdownOption {
        key: OptionKey::Id(show.id),
        label: show.name.clone(),
    }))
    .collect();

    Dropdown {
        options,
        selected: selected.map_or(OptionKey::Sentinel, OptionKey::Id),
    }
}

/// Builds the episode dropdown for the loaded episode set.
pub fn episode_dropdown(episodes: &[Episode], selection: EpisodeSelection) -> Dropdown {
    let options = std::iter::once(DropdownOption {
        key: OptionKey::Sentinel,
        label: ALL_EPISODES_LABEL.to_string(),
    })
    .chain(episodes.iter().map(|episode| DropdownOption {
        key: OptionKey::Id(episode.id),
        label: format!(
            "{} - {}",
            format_code(episode.season, episode.number),
            episode.name
        ),
    }))
    .collect();

    Dropdown {
        options,
        selected: match selection {
            EpisodeSelection::All => OptionKey::Sentinel,
            EpisodeSelection::Single(id) => OptionKey::Id(id),
        },
    }
}

/// Transient message shown above the content while an episode fetch is
/// outstanding or after it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    Loading,
    Failed,
}

impl StatusIndicator {
    pub fn message(&self) -> &'static str {
        match self {
            StatusIndicator::Loading => "Loading episodes...",
            StatusIndicator::Failed => "⚠️ Failed to load episodes. Please try again later.",
        }
    }
}

/// Standalone banner shown when the show list could not be loaded.
pub const SHOWS_FAILED_BANNER: &str = "⚠️ Error loading shows. Please try again later.";

/// One complete rendering of the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub banner: Option<&'static str>,
    pub indicator: Option<StatusIndicator>,
    pub status_line: String,
    pub body: Body,
    pub show_dropdown: Dropdown,
    pub episode_dropdown: Dropdown,
}

/// Inputs the adapter needs beyond the view state itself.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub state: &'a ViewState,
    /// Episodes currently on screen (already filtered or narrowed)
    pub displayed_episodes: &'a [&'a Episode],
    pub catalog: &'a [Show],
    /// Show requested by an outstanding fetch, shown in the show dropdown
    pub pending_show: Option<ShowId>,
    pub indicator: Option<StatusIndicator>,
    pub banner: Option<&'static str>,
}

/// Composes the frame for the current state.
pub fn compose_frame(ctx: FrameContext<'_>) -> Frame {
    let state = ctx.state;
    let (status, body) = match state.mode {
        Mode::Shows => (
            status_line(ctx.catalog.len(), ctx.catalog.len()),
            body_for(Mode::Shows, ctx.catalog),
        ),
        Mode::Episodes => (
            status_line(ctx.displayed_episodes.len(), state.total_for_counter),
            body_for(Mode::Episodes, ctx.displayed_episodes),
        ),
    };

    Frame {
        banner: ctx.banner,
        indicator: ctx.indicator,
        status_line: status,
        body,
        show_dropdown: show_dropdown(ctx.catalog, ctx.pending_show.or(state.selected_show_id)),
        episode_dropdown: episode_dropdown(&state.episodes, state.episode_selection),
    }
}
