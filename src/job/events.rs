//! Non-fatal and fatal anomalies recorded during a job.

use std::fmt;

use serde::Serialize;

/// How serious a recorded anomaly is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational; nothing went wrong but the caller should know.
    Info,
    /// Skip-and-continue.
    Warning,
    /// Aborts the remaining work.
    Fatal,
}

/// Category of a recorded anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobErrorKind {
    /// No keyword table is registered for the subject.
    ConfigurationMissing,
    /// The document to classify cannot be located or opened.
    InputUnavailable,
    /// One page's text could not be read.
    PageExtractionFailure,
    /// An index outside the document was met while building a topic.
    InvalidPageIndex,
    /// A valid page could not be copied by the backend.
    PageCopyFailure,
    /// A topic had indices but no page survived.
    EmptyTopicOutput,
    /// Writing a topic's document failed.
    OutputWriteFailure,
    /// No topic matched any page.
    NoMatches,
    /// A paper could not be downloaded.
    DownloadFailure,
    /// A downloaded paper could not be merged, or the merge failed.
    MergeFailure,
    /// No paper of a kind was available to merge.
    NothingToMerge,
    /// Topical generation was requested but had no input.
    TopicalSkipped,
    /// A task's working directory could not be created.
    WorkspaceUnavailable,
}

impl JobErrorKind {
    /// Severity attached to every anomaly of this kind.
    pub fn severity(self) -> Severity {
        match self {
            JobErrorKind::ConfigurationMissing
            | JobErrorKind::InputUnavailable
            | JobErrorKind::WorkspaceUnavailable => Severity::Fatal,
            JobErrorKind::EmptyTopicOutput
            | JobErrorKind::NoMatches
            | JobErrorKind::TopicalSkipped => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

/// A recorded anomaly: kind, severity and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobError {
    /// Category.
    pub kind: JobErrorKind,
    /// Severity, derived from the kind.
    pub severity: Severity,
    /// Description of what happened.
    pub message: String,
}

impl JobError {
    /// Record of `kind` with its default severity.
    pub fn new(kind: JobErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }

    /// True for anomalies that abort a job.
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Fatal => "fatal",
        };
        write!(f, "[{}] {}", label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_by_kind() {
        assert_eq!(JobErrorKind::ConfigurationMissing.severity(), Severity::Fatal);
        assert_eq!(JobErrorKind::InputUnavailable.severity(), Severity::Fatal);
        assert_eq!(JobErrorKind::PageExtractionFailure.severity(), Severity::Warning);
        assert_eq!(JobErrorKind::InvalidPageIndex.severity(), Severity::Warning);
        assert_eq!(JobErrorKind::OutputWriteFailure.severity(), Severity::Warning);
        assert_eq!(JobErrorKind::EmptyTopicOutput.severity(), Severity::Info);
        assert_eq!(JobErrorKind::NoMatches.severity(), Severity::Info);
        assert_eq!(JobErrorKind::PageCopyFailure.severity(), Severity::Warning);
        assert_eq!(JobErrorKind::WorkspaceUnavailable.severity(), Severity::Fatal);
    }

    #[test]
    fn test_display() {
        let err = JobError::new(JobErrorKind::PageExtractionFailure, "page 3 unreadable");
        assert_eq!(err.to_string(), "[warning] page 3 unreadable");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_serializes_lowercase() {
        let err = JobError::new(JobErrorKind::NoMatches, "nothing");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"kind":"no_matches","severity":"info","message":"nothing"}"#);
    }
}
