/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Only the fields the explorer displays are declared; everything else in
/// the payload is ignored.
use serde::Deserialize;

/// A show entry from the `/shows` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u32,
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    pub image: Option<TvMazeImage>,
    /// Page on tvmaze.com (may be missing for some entries)
    #[serde(default)]
    pub url: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u32,
    /// Season number (may be null for unnumbered specials)
    pub season: Option<u32>,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
    pub image: Option<TvMazeImage>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Image links attached to shows and episodes.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
}
