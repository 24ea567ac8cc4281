//! Configuration for classification jobs and paper downloads.

use std::path::PathBuf;
use std::time::Duration;

/// Default remote archive that hosts the individual paper PDFs.
pub const DEFAULT_BASE_URL: &str = "https://bestexamhelp.com/exam/cambridge-international-a-level";

/// Classification job configuration.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Directory the topical PDFs are written to.
    pub output_dir: PathBuf,

    /// Report classification progress every N pages.
    pub progress_interval: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl JobConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("topical"),
            progress_interval: 50,
        }
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the progress interval (clamped to at least one page).
    pub fn with_progress_interval(mut self, pages: usize) -> Self {
        self.progress_interval = pages.max(1);
        self
    }
}

/// Download configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Archive base URL, without trailing slash.
    pub base_url: String,

    /// Timeout for a single paper download.
    pub timeout: Duration,

    /// Root directory; each task gets its own subdirectory.
    pub workspace_root: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            workspace_root: std::env::temp_dir().join("past_paper_generator"),
        }
    }

    /// Set the archive base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-download timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the workspace root.
    pub fn with_workspace_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace_root = dir.into();
        self
    }
}
