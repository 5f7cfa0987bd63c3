/// TVMaze catalog provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeShow};
use super::{CatalogProvider, Episode, FetchError, Show, ShowId, sort_shows_by_name};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default base URL of the public TVMaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Catalog provider for the TVMaze API.
///
/// This provider fetches the show index from `/shows` and a show's episode
/// list from `/shows/{id}/episodes`.
pub struct TvMazeCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a new TVMaze catalog talking to the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a TVMaze catalog talking to the given base URL.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Performs a single GET and decodes the JSON body.
    ///
    /// Transport failures and non-success statuses map to `Unreachable`,
    /// undecodable bodies to `MalformedResponse`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "requesting catalog resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Unreachable(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }

    /// Converts a TVMaze show to our internal Show structure.
    fn convert_show(tvmaze_show: TvMazeShow) -> Show {
        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show.summary,
            image_url: tvmaze_show.image.and_then(|image| image.medium),
            url: tvmaze_show.url.unwrap_or_default(),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    ///
    /// Returns `None` for unnumbered specials, which have no episode code.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Option<Episode> {
        let (Some(season), Some(number)) = (tvmaze_episode.season, tvmaze_episode.number) else {
            debug!(id = tvmaze_episode.id, "skipping unnumbered episode");
            return None;
        };

        Some(Episode {
            id: tvmaze_episode.id,
            season,
            number,
            name: tvmaze_episode.name.unwrap_or_else(|| "Unknown".to_string()),
            summary: tvmaze_episode.summary,
            image_url: tvmaze_episode.image.and_then(|image| image.medium),
            url: tvmaze_episode.url.unwrap_or_default(),
        })
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for TvMazeCatalog {
    async fn list_shows(&self) -> Result<Vec<Show>, FetchError> {
        let tvmaze_shows: Vec<TvMazeShow> = self.get_json("/shows").await?;

        let mut shows: Vec<Show> = tvmaze_shows.into_iter().map(Self::convert_show).collect();
        sort_shows_by_name(&mut shows);

        Ok(shows)
    }

    async fn list_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>, FetchError> {
        let tvmaze_episodes: Vec<TvMazeEpisode> = self
            .get_json(&format!("/shows/{}/episodes", show_id))
            .await?;

        Ok(tvmaze_episodes
            .into_iter()
            .filter_map(Self::convert_episode)
            .collect())
    }
}
