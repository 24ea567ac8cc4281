//! Classification job orchestration.
//!
//! A [`ClassificationJob`] runs the whole topical pass over one document:
//!
//! ```text
//! Pending ──▶ Classifying ──▶ Building ──▶ Done
//!    │
//!    └──▶ Failed   (no keyword table, or input unavailable)
//! ```
//!
//! Only the two fatal conditions end in [`JobState::Failed`]. Everything
//! else is appended to the job's error list and the job still ends
//! [`JobState::Done`], possibly with zero outputs.
//!
//! ## Example
//!
//! ```no_run
//! use pastpaper::config::JobConfig;
//! use pastpaper::job::{ClassificationJob, LogProgress};
//! use pastpaper::keywords::KeywordRegistry;
//!
//! let registry = KeywordRegistry::builtin();
//! let job = ClassificationJob::new(&registry, JobConfig::new().with_output_dir("topical"));
//! let result = job.run_file("9231_qp_merged.pdf", "9231", &mut LogProgress);
//! for output in &result.outputs {
//!     println!("{} ({} pages)", output.filename, output.page_count);
//! }
//! ```

mod events;
pub mod progress;

pub use events::{JobError, JobErrorKind, Severity};
pub use progress::{LogProgress, NoProgress, Phase, ProgressSink};

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::builder::{TopicalDocumentBuilder, TopicalOutput};
use crate::classifier::TopicClassifier;
use crate::config::JobConfig;
use crate::document::{DocumentPageAccess, DocumentWriter, PageTextSource, PdfDocument};
use crate::keywords::KeywordRegistry;

/// Lifecycle state of a classification job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    /// Not started.
    Pending,
    /// Scanning pages.
    Classifying,
    /// Writing topical documents.
    Building,
    /// Finished; outputs and non-fatal errors are final.
    Done,
    /// Aborted by a fatal error before classification.
    Failed,
}

impl JobState {
    /// True when `next` is a legal successor of this state.
    pub fn can_transition_to(self, next: JobState) -> bool {
        matches!(
            (self, next),
            (JobState::Pending, JobState::Classifying)
                | (JobState::Pending, JobState::Failed)
                | (JobState::Classifying, JobState::Building)
                | (JobState::Building, JobState::Done)
        )
    }

    /// True for `Done` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Done | JobState::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobState::Pending => "pending",
            JobState::Classifying => "classifying",
            JobState::Building => "building",
            JobState::Done => "done",
            JobState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of [`ClassificationJob::run`].
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    /// Subject the job classified for.
    pub subject_code: String,
    /// Terminal state.
    pub state: JobState,
    /// Pages in the input document (0 if it was never opened).
    pub page_count: usize,
    /// Written topical documents, in topic order.
    pub outputs: Vec<TopicalOutput>,
    /// Every anomaly, in occurrence order.
    pub errors: Vec<JobError>,
}

impl JobResult {
    fn new(subject_code: &str) -> Self {
        Self {
            subject_code: subject_code.to_string(),
            state: JobState::Pending,
            page_count: 0,
            outputs: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn advance(&mut self, next: JobState) {
        debug_assert!(self.state.can_transition_to(next), "{} -> {}", self.state, next);
        log::debug!("Topical job for {}: {} -> {}", self.subject_code, self.state, next);
        self.state = next;
    }

    fn fail(mut self, error: JobError) -> Self {
        log::error!("{}", error.message);
        self.errors.push(error);
        self.advance(JobState::Failed);
        self
    }

    /// True when the job reached `Done`.
    pub fn is_done(&self) -> bool {
        self.state == JobState::Done
    }

    /// Recorded anomalies of a given severity.
    pub fn errors_with(&self, severity: Severity) -> impl Iterator<Item = &JobError> {
        self.errors.iter().filter(move |e| e.severity == severity)
    }

    /// Recorded anomalies of a given kind.
    pub fn errors_of(&self, kind: JobErrorKind) -> impl Iterator<Item = &JobError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }
}

/// Runs classification and topical assembly for one document.
///
/// The job owns nothing shared: each run builds its own keyword index and
/// classification, so independent runs never interfere.
#[derive(Debug, Clone)]
pub struct ClassificationJob<'r> {
    registry: &'r KeywordRegistry,
    config: JobConfig,
}

impl<'r> ClassificationJob<'r> {
    /// Job drawing keyword tables from `registry`.
    pub fn new(registry: &'r KeywordRegistry, config: JobConfig) -> Self {
        Self { registry, config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Open the PDF at `path` and run the job on it.
    ///
    /// A missing keyword table or an unreadable input ends the job `Failed`.
    pub fn run_file(
        &self,
        path: impl AsRef<Path>,
        subject_code: &str,
        progress: &mut dyn ProgressSink,
    ) -> JobResult {
        let path = path.as_ref();
        let result = JobResult::new(subject_code);

        if !self.registry.contains(subject_code) {
            return result.fail(missing_map(subject_code));
        }

        let document = match PdfDocument::open(path) {
            Ok(document) => document,
            Err(e) => {
                return result.fail(JobError::new(
                    JobErrorKind::InputUnavailable,
                    format!("Input PDF not available for topical generation: {}", e),
                ));
            },
        };

        let mut writer = document.subset_writer();
        self.run(&document, &mut writer, subject_code, progress)
    }

    /// Run the job on an open document, writing through `writer`.
    pub fn run<D, W>(
        &self,
        document: &D,
        writer: &mut W,
        subject_code: &str,
        progress: &mut dyn ProgressSink,
    ) -> JobResult
    where
        D: PageTextSource + DocumentPageAccess + ?Sized,
        W: DocumentWriter<D::Page> + ?Sized,
    {
        let mut result = JobResult::new(subject_code);

        let index = match self.registry.build(subject_code) {
            Ok(index) => index,
            Err(_) => return result.fail(missing_map(subject_code)),
        };

        result.page_count = document.page_count();
        result.advance(JobState::Classifying);
        let (classification, errors) = TopicClassifier::new(&index)
            .with_progress_interval(self.config.progress_interval)
            .classify(document, progress);
        result.errors.extend(errors);

        result.advance(JobState::Building);
        if classification.is_empty() {
            let message = format!(
                "No keywords from the map for {} were matched in the document. No topical files generated.",
                subject_code
            );
            log::info!("{}", message);
            result.errors.push(JobError::new(JobErrorKind::NoMatches, message));
        }

        let builder = TopicalDocumentBuilder::new(subject_code, &self.config.output_dir);
        let (outputs, errors) = builder.build(document, &classification, writer, progress);
        result.outputs = outputs;
        result.errors.extend(errors);

        result.advance(JobState::Done);
        log::info!(
            "Topical generation finished for {}: {} files, {} issues",
            subject_code,
            result.outputs.len(),
            result.errors.len()
        );
        result
    }
}

fn missing_map(subject_code: &str) -> JobError {
    JobError::new(
        JobErrorKind::ConfigurationMissing,
        format!(
            "No keyword map available for subject {}. Skipping topical generation.",
            subject_code
        ),
    )
}
