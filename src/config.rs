//! Runtime configuration of an explorer session

use crate::catalog::DEFAULT_BASE_URL;

/// Default wrap width for card summaries
pub const DEFAULT_SUMMARY_WIDTH: usize = 100;

/// Settings the binary passes into [`crate::explore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Base URL of the TVMaze compatible catalog service
    pub base_url: String,
    /// Column width summaries are wrapped to
    pub summary_width: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            summary_width: DEFAULT_SUMMARY_WIDTH,
        }
    }
}
