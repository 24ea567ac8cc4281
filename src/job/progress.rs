//! Progress reporting.
//!
//! Progress events are observational only: a sink never influences the
//! result of the work that reports to it.

use std::fmt;

use serde::Serialize;

/// Stage a progress event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Downloading individual papers.
    Downloading,
    /// Merging downloaded papers.
    Merging,
    /// Scanning pages for keywords.
    Classifying,
    /// Writing topical documents.
    Building,
}

impl Phase {
    /// Lower-case name of the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Downloading => "downloading",
            Phase::Merging => "merging",
            Phase::Classifying => "classifying",
            Phase::Building => "building",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives progress events.
pub trait ProgressSink {
    /// Called with the phase, a completion percentage in `0..=100`, and detail.
    fn on_progress(&mut self, phase: Phase, percent: u8, detail: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(Phase, u8, &str),
{
    fn on_progress(&mut self, phase: Phase, percent: u8, detail: &str) {
        self(phase, percent, detail)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _phase: Phase, _percent: u8, _detail: &str) {}
}

/// Forwards events to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&mut self, phase: Phase, percent: u8, detail: &str) {
        log::info!("[{} {:>3}%] {}", phase, percent, detail);
    }
}

/// Integer percentage of `done` out of `total`, clamped to 100.
pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done.min(total) * 100) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 10), 0);
        assert_eq!(percent(5, 10), 50);
        assert_eq!(percent(10, 10), 100);
        assert_eq!(percent(12, 10), 100);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn test_closure_sink() {
        let mut events = Vec::new();
        {
            let mut sink = |phase: Phase, pct: u8, detail: &str| {
                events.push((phase, pct, detail.to_string()));
            };
            sink.on_progress(Phase::Building, 40, "Vectors");
        }
        assert_eq!(events, vec![(Phase::Building, 40, "Vectors".to_string())]);
    }
}
