//! Text filtering of catalog records
//!
//! Records match a search text when it is a case-insensitive substring of
//! their name or their summary. The summary is matched as delivered by the
//! catalog, markup included.

use crate::catalog::{Episode, Show};

/// A record that can be matched against a search text.
pub trait Searchable {
    /// The record's display name
    fn name(&self) -> &str;

    /// The record's summary, if it has one
    fn summary(&self) -> Option<&str>;
}

impl Searchable for Show {
    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

impl Searchable for Episode {
    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn summary(&self) -> Option<&str> {
        (**self).summary()
    }
}

/// Returns the records matching `search_text`, in their original order.
///
/// An empty search text matches every record.
pub fn filter<'a, T: Searchable>(records: &'a [T], search_text: &str) -> Vec<&'a T> {
    if search_text.is_empty() {
        return records.iter().collect();
    }

    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
    record.name().to_lowercase().contains(needle)
        || record
            .summary()
            .unwrap_or_default()
            .to_lowercase()
            .contains(needle)
}
