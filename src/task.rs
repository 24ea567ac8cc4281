//! End-to-end paper tasks.
//!
//! A [`Task`] takes one validated [`PaperRequest`] through download, merge
//! and, when asked for, topical generation over the merged question paper.
//! Each task works in its own directory `<workspace_root>/<task id>`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::PaperRequest;
use crate::config::{FetchConfig, JobConfig};
use crate::error::Result;
use crate::fetch::{DocumentMerger, PaperAssembler, PaperSource};
use crate::job::{ClassificationJob, JobError, JobErrorKind, ProgressSink};
use crate::keywords::KeywordRegistry;

/// Name of the topical subdirectory inside a task directory.
pub const TOPICAL_DIR: &str = "topical";

/// Final status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The task ran to the end; see the error list for partial failures.
    Completed,
    /// The task could not start.
    Failed,
}

/// Files a task produced, by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFiles {
    /// Merged question paper.
    pub qp: Option<String>,
    /// Merged mark scheme.
    pub ms: Option<String>,
    /// Topical documents, relative to the task directory.
    pub topical: Vec<String>,
}

/// What a task did.
#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    /// Task id.
    pub id: String,
    /// Final status.
    pub status: TaskStatus,
    /// Directory holding every produced file.
    pub directory: PathBuf,
    /// Produced files.
    pub files: TaskFiles,
    /// Every problem met, in occurrence order.
    pub errors: Vec<JobError>,
}

impl TaskReport {
    /// Report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One download-merge-classify run.
#[derive(Debug, Clone)]
pub struct Task {
    id: Uuid,
    request: PaperRequest,
}

impl Task {
    /// Task for `request`; rejected if the request does not validate.
    pub fn new(request: PaperRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            request,
        })
    }

    /// Task id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The request being served.
    pub fn request(&self) -> &PaperRequest {
        &self.request
    }

    /// Directory this task writes into under `workspace_root`.
    pub fn directory(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(self.id.to_string())
    }

    /// Run the task to completion.
    pub fn run<S, M>(
        &self,
        assembler: &PaperAssembler<S, M>,
        registry: &KeywordRegistry,
        config: &FetchConfig,
        progress: &mut dyn ProgressSink,
    ) -> TaskReport
    where
        S: PaperSource,
        M: DocumentMerger,
    {
        let directory = self.directory(&config.workspace_root);
        let mut report = TaskReport {
            id: self.id.to_string(),
            status: TaskStatus::Completed,
            directory: directory.clone(),
            files: TaskFiles::default(),
            errors: Vec::new(),
        };

        log::info!("Starting task {} for subject {}", self.id, self.request.subject_code);

        if let Err(e) = fs::create_dir_all(&directory) {
            log::error!("Task {}: cannot create {}: {}", self.id, directory.display(), e);
            report.status = TaskStatus::Failed;
            report.errors.push(JobError::new(
                JobErrorKind::WorkspaceUnavailable,
                format!("Could not create task directory {}: {}", directory.display(), e),
            ));
            return report;
        }

        let assembly = assembler.assemble(&self.request, &directory, progress);
        report.errors.extend(assembly.errors);
        report.files.ms = assembly.mark_scheme.map(|m| m.filename);

        if let Some(qp) = &assembly.question_paper {
            report.files.qp = Some(qp.filename.clone());
        }

        if self.request.generate_topical {
            match &assembly.question_paper {
                Some(qp) => {
                    let job_config = JobConfig::new().with_output_dir(directory.join(TOPICAL_DIR));
                    let job = ClassificationJob::new(registry, job_config);
                    let result = job.run_file(&qp.path, &self.request.subject_code, progress);

                    report.files.topical = result
                        .outputs
                        .iter()
                        .map(|o| format!("{}/{}", TOPICAL_DIR, o.filename))
                        .collect();
                    report.errors.extend(result.errors);
                },
                None => {
                    report.errors.push(JobError::new(
                        JobErrorKind::TopicalSkipped,
                        "Topical PDFs not generated because merged QP PDF was not created.",
                    ));
                },
            }
        }

        log::info!(
            "Task {} completed: qp={:?} ms={:?} topical={} issues={}",
            self.id,
            report.files.qp,
            report.files.ms,
            report.files.topical.len(),
            report.errors.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PaperRef, Session};
    use crate::document::tests::sample_pdf;
    use crate::error::Error;
    use crate::fetch::PdfMerger;
    use crate::job::NoProgress;

    /// Serves the same single-page paper for every request.
    struct FixedSource(Vec<u8>);

    impl PaperSource for FixedSource {
        fn fetch(&self, _: &PaperRef) -> Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    struct EmptySource;

    impl PaperSource for EmptySource {
        fn fetch(&self, paper: &PaperRef) -> Result<Vec<u8>> {
            Err(Error::Http {
                status: 404,
                url: paper.filename(),
            })
        }
    }

    fn paper_bytes(text: &str) -> Vec<u8> {
        let mut buffer = Vec::new();
        sample_pdf(&[text]).save_to(&mut buffer).unwrap();
        buffer
    }

    fn request() -> PaperRequest {
        PaperRequest::new("9231", 1, 2019, 2019, vec![Session::FebMarch])
    }

    #[test]
    fn test_invalid_request_rejected() {
        let bad = PaperRequest::new("9231", 0, 2019, 2019, vec![Session::Summer]);
        assert!(matches!(Task::new(bad), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_task_with_topical_output() {
        let root = tempfile::tempdir().unwrap();
        let config = FetchConfig::new().with_workspace_root(root.path());
        let registry = KeywordRegistry::builtin();
        let assembler = PaperAssembler::new(FixedSource(paper_bytes("find the vector")), PdfMerger::new());

        let task = Task::new(request().with_mark_scheme(true).with_topical(true)).unwrap();
        let report = task.run(&assembler, &registry, &config, &mut NoProgress);

        assert_eq!(report.status, TaskStatus::Completed);
        assert_eq!(report.directory, root.path().join(task.id().to_string()));
        assert_eq!(report.files.qp.as_deref(), Some("9231_1_2019-2019_m_qp_merged.pdf"));
        assert_eq!(report.files.ms.as_deref(), Some("9231_1_2019-2019_m_ms_merged.pdf"));
        assert!(!report.files.topical.is_empty());
        for name in &report.files.topical {
            assert!(report.directory.join(name).exists(), "{} missing", name);
        }
    }

    #[test]
    fn test_topical_skipped_without_question_paper() {
        let root = tempfile::tempdir().unwrap();
        let config = FetchConfig::new().with_workspace_root(root.path());
        let registry = KeywordRegistry::builtin();
        let assembler = PaperAssembler::new(EmptySource, PdfMerger::new());

        let task = Task::new(request().with_topical(true)).unwrap();
        let report = task.run(&assembler, &registry, &config, &mut NoProgress);

        assert_eq!(report.status, TaskStatus::Completed);
        assert!(report.files.qp.is_none());
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == JobErrorKind::TopicalSkipped));
    }

    #[test]
    fn test_missing_keyword_map_is_carried() {
        let root = tempfile::tempdir().unwrap();
        let config = FetchConfig::new().with_workspace_root(root.path());
        let registry = KeywordRegistry::new();
        let assembler = PaperAssembler::new(FixedSource(paper_bytes("anything")), PdfMerger::new());

        let task = Task::new(request().with_topical(true)).unwrap();
        let report = task.run(&assembler, &registry, &config, &mut NoProgress);

        assert_eq!(report.status, TaskStatus::Completed);
        assert!(report.files.qp.is_some());
        assert!(report.files.topical.is_empty());
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == JobErrorKind::ConfigurationMissing));
    }

    #[test]
    fn test_unwritable_workspace_fails_fatally() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not_a_dir");
        fs::write(&blocker, b"file").unwrap();
        let config = FetchConfig::new().with_workspace_root(&blocker);
        let assembler = PaperAssembler::new(EmptySource, PdfMerger::new());

        let task = Task::new(request()).unwrap();
        let report = task.run(&assembler, &KeywordRegistry::new(), &config, &mut NoProgress);

        assert_eq!(report.status, TaskStatus::Failed);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, JobErrorKind::WorkspaceUnavailable);
        assert!(report.errors[0].is_fatal());
    }

    #[test]
    fn test_report_json() {
        let root = tempfile::tempdir().unwrap();
        let config = FetchConfig::new().with_workspace_root(root.path());
        let assembler = PaperAssembler::new(EmptySource, PdfMerger::new());
        let task = Task::new(request()).unwrap();
        let report = task.run(&assembler, &KeywordRegistry::new(), &config, &mut NoProgress);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["id"], task.id().to_string());
        assert!(json["files"]["qp"].is_null());
        assert_eq!(json["errors"][0]["kind"], "download_failure");
    }
}
