/// Data structures and traits for TV catalog retrieval.
///
/// This module provides the show and episode records the explorer works with,
/// the error taxonomy for failed fetches, and the trait catalog providers
/// implement.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{DEFAULT_BASE_URL, TvMazeCatalog};

use std::cmp::Ordering;
use std::future::Future;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Identifier of a show in the catalog.
pub type ShowId = u32;

/// Identifier of an episode, unique within its show.
pub type EpisodeId = u32;

/// Errors that can occur while talking to the catalog service.
///
/// Both kinds are surfaced to the user with the same message; the distinction
/// only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service could not be reached or answered with a non-success status
    #[error("Catalog service unreachable: {0}")]
    Unreachable(String),

    /// The response body did not have the expected shape
    #[error("Malformed catalog response: {0}")]
    MalformedResponse(String),
}

/// A TV show as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Stable, unique show id
    pub id: ShowId,
    /// The show title
    pub name: String,
    /// Summary in HTML format, if the catalog has one
    pub summary: Option<String>,
    /// Medium sized poster image
    pub image_url: Option<String>,
    /// Link to the show's page on the catalog site
    pub url: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Episode id, unique within its show
    pub id: EpisodeId,
    /// The season number (starting at 1)
    pub season: u32,
    /// The episode number within the season (starting at 1)
    pub number: u32,
    /// The episode title
    pub name: String,
    /// Summary in HTML format, if the catalog has one
    pub summary: Option<String>,
    /// Medium sized still image
    pub image_url: Option<String>,
    /// Link to the episode's page on the catalog site
    pub url: String,
}

/// Trait for providers that can list shows and their episodes.
///
/// Every call is a single attempt. Retrying is left to the caller.
pub trait CatalogProvider: Send + Sync + 'static {
    /// Lists all shows, sorted by name (see [`sort_shows_by_name`]).
    fn list_shows(&self) -> impl Future<Output = Result<Vec<Show>, FetchError>> + Send;

    /// Lists all episodes of the given show in airing order.
    fn list_episodes(
        &self,
        show_id: ShowId,
    ) -> impl Future<Output = Result<Vec<Episode>, FetchError>> + Send;
}

/// Sorts shows ascending by name, ignoring case.
///
/// The sort is stable, so shows whose names only differ in case keep the
/// order the catalog delivered them in.
pub fn sort_shows_by_name(shows: &mut [Show]) {
    shows.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Compares names on their base letters only: case and accents are ignored,
/// so "Élite" sorts next to "Elite" rather than after "Zoo".
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(collation_key(b))
}

fn collation_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: ShowId, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: None,
            image_url: None,
            url: String::new(),
        }
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut shows = vec![show(1, "beta"), show(2, "Alpha"), show(3, "Gamma")];
        sort_shows_by_name(&mut shows);
        let names: Vec<_> = shows.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut shows = vec![show(1, "lost"), show(2, "Lost"), show(3, "LOST")];
        sort_shows_by_name(&mut shows);
        let ids: Vec<_> = shows.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_sort_ignores_accents() {
        let mut shows = vec![
            show(1, "Zoo"),
            show(2, "Élite"),
            show(3, "Fargo"),
            show(4, "Elementary"),
            show(5, "elite"),
        ];
        sort_shows_by_name(&mut shows);
        let names: Vec<_> = shows.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Elementary", "Élite", "elite", "Fargo", "Zoo"]);
    }
}
