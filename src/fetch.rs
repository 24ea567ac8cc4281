//! Downloading papers and merging them into one document per kind.
//!
//! [`PaperAssembler`] walks the papers of a [`PaperRequest`], saves each one
//! a [`PaperSource`] can deliver into the task directory, and hands the
//! saved files to a [`DocumentMerger`]. Missing papers are normal (not every
//! variant exists every session), so download and merge problems are
//! recorded as warnings and never abort the assembly.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object, ObjectId};
use serde::Serialize;

use crate::catalog::{PaperKind, PaperRef, PaperRequest};
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::job::progress::percent;
use crate::job::{JobError, JobErrorKind, Phase, ProgressSink};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Deepest page tree walked when resolving inherited attributes.
const MAX_TREE_DEPTH: usize = 64;

/// Delivers the raw bytes of a paper.
pub trait PaperSource {
    /// Fetch one paper.
    fn fetch(&self, paper: &PaperRef) -> Result<Vec<u8>>;
}

/// Fetches papers from the remote archive over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPaperSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpPaperSource {
    /// Source using the configured base URL and timeout.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

impl PaperSource for HttpPaperSource {
    fn fetch(&self, paper: &PaperRef) -> Result<Vec<u8>> {
        let url = paper
            .url(&self.base_url)
            .ok_or_else(|| Error::UnknownSubject(paper.subject_code.clone()))?;
        log::debug!("Attempting download: {}", url);

        let network = |e: reqwest::Error| Error::Network {
            url: url.clone(),
            reason: e.to_string(),
        };

        let response = self.client.get(&url).send().map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().map_err(network)?;
        Ok(bytes.to_vec())
    }
}

/// What a merge produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Pages in the merged document; zero means nothing was written.
    pub page_count: usize,
    /// Inputs left out, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Concatenates whole documents.
pub trait DocumentMerger {
    /// Merge `inputs` in order into `destination`.
    ///
    /// Inputs that cannot be read are skipped and listed in the report.
    /// Nothing is written when no page survives.
    fn merge(&self, inputs: &[PathBuf], destination: &Path) -> Result<MergeReport>;
}

/// [`DocumentMerger`] backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfMerger;

impl PdfMerger {
    /// Create a merger.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentMerger for PdfMerger {
    fn merge(&self, inputs: &[PathBuf], destination: &Path) -> Result<MergeReport> {
        let mut report = MergeReport::default();
        let mut merged = Document::with_version("1.5");
        let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
        let mut page_ids: Vec<ObjectId> = Vec::new();
        let mut next_id = 1;

        for input in inputs {
            let mut doc = match Document::load(input) {
                Ok(doc) => doc,
                Err(e) => {
                    log::warn!("Could not append {}: {}", input.display(), e);
                    report.skipped.push((input.clone(), e.to_string()));
                    continue;
                },
            };

            doc.renumber_objects_with(next_id);
            next_id = doc.max_id + 1;

            let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
            for &page_id in &pages {
                let inherited = inherited_attributes(&doc, page_id);
                if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
                    for (key, value) in inherited {
                        page.set(key, value);
                    }
                }
            }

            log::debug!("Appending {} pages from {}", pages.len(), input.display());
            page_ids.extend(pages);
            objects.extend(doc.objects);
        }

        report.page_count = page_ids.len();
        if page_ids.is_empty() {
            return Ok(report);
        }

        let pages_id = (next_id, 0);
        let catalog_id = (next_id + 1, 0);

        for page_id in &page_ids {
            if let Some(Object::Dictionary(page)) = objects.get_mut(page_id) {
                page.set("Parent", pages_id);
            }
        }

        merged.objects = objects;
        merged.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => page_ids.len() as i64,
                "Kids" => page_ids.iter().map(|&id| Object::Reference(id)).collect::<Vec<_>>(),
            }),
        );
        merged.objects.insert(
            catalog_id,
            Object::Dictionary(dictionary! {
                "Type" => "Catalog",
                "Pages" => pages_id,
            }),
        );
        merged.trailer.set("Root", catalog_id);
        merged.max_id = catalog_id.0;

        merged.prune_objects();
        merged.renumber_objects();
        merged.compress();

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        merged.save(destination)?;

        Ok(report)
    }
}

/// Attributes `page_id` inherits from its ancestors and does not set itself.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let mut found: Vec<(Vec<u8>, Object)> = Vec::new();
    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut parent = page.get(b"Parent").and_then(|p| p.as_reference()).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if depth >= MAX_TREE_DEPTH {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        for key in INHERITABLE {
            if page.has(key) || found.iter().any(|(k, _)| k.as_slice() == key) {
                continue;
            }
            if let Ok(value) = node.get(key) {
                found.push((key.to_vec(), value.clone()));
            }
        }

        parent = node.get(b"Parent").and_then(|p| p.as_reference()).ok();
        depth += 1;
    }

    found
}

/// A merged document of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedPaper {
    /// Question paper or mark scheme.
    pub kind: PaperKind,
    /// Full path of the merged document.
    pub path: PathBuf,
    /// File name of the merged document.
    pub filename: String,
    /// Papers that went into the merge.
    pub source_count: usize,
    /// Pages in the merged document.
    pub page_count: usize,
}

/// Outcome of [`PaperAssembler::assemble`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssemblyResult {
    /// Merged question papers, if any paper was available.
    pub question_paper: Option<MergedPaper>,
    /// Merged mark schemes, if requested and available.
    pub mark_scheme: Option<MergedPaper>,
    /// Download and merge problems, in occurrence order.
    pub errors: Vec<JobError>,
}

/// Downloads and merges the papers of a request.
#[derive(Debug, Clone)]
pub struct PaperAssembler<S, M> {
    source: S,
    merger: M,
}

impl<S: PaperSource, M: DocumentMerger> PaperAssembler<S, M> {
    /// Assembler using `source` for downloads and `merger` for merging.
    pub fn new(source: S, merger: M) -> Self {
        Self { source, merger }
    }

    /// Download every paper of `request` into `workspace` and merge per kind.
    pub fn assemble(
        &self,
        request: &PaperRequest,
        workspace: &Path,
        progress: &mut dyn ProgressSink,
    ) -> AssemblyResult {
        let mut result = AssemblyResult::default();
        let kinds = request.kinds();
        let total: usize = kinds.iter().map(|&k| request.papers(k).len()).sum();
        let mut attempted = 0;

        for kind in kinds {
            log::info!("Processing {}", kind.code().to_uppercase());
            let mut downloaded = Vec::new();

            for paper in request.papers(kind) {
                attempted += 1;
                let filename = paper.filename();
                progress.on_progress(
                    Phase::Downloading,
                    percent(attempted, total),
                    &format!("Downloading {}", filename),
                );

                let saved = self.source.fetch(&paper).and_then(|bytes| {
                    let path = workspace.join(&filename);
                    fs::write(&path, bytes)?;
                    Ok(path)
                });

                match saved {
                    Ok(path) => {
                        log::debug!("Downloaded {}", filename);
                        downloaded.push(path);
                    },
                    Err(e) => {
                        log::warn!("Download failed for {}: {}", filename, e);
                        result.errors.push(JobError::new(
                            JobErrorKind::DownloadFailure,
                            format!("Download failed for {}: {}", filename, e),
                        ));
                    },
                }
            }

            let merged = self.merge_kind(request, kind, &downloaded, workspace, progress, &mut result.errors);
            match kind {
                PaperKind::Qp => result.question_paper = merged,
                PaperKind::Ms => result.mark_scheme = merged,
            }
        }

        result
    }

    fn merge_kind(
        &self,
        request: &PaperRequest,
        kind: PaperKind,
        downloaded: &[PathBuf],
        workspace: &Path,
        progress: &mut dyn ProgressSink,
        errors: &mut Vec<JobError>,
    ) -> Option<MergedPaper> {
        let label = kind.code().to_uppercase();

        if downloaded.is_empty() {
            errors.push(JobError::new(
                JobErrorKind::NothingToMerge,
                format!("No {} files were successfully downloaded/found to merge.", label),
            ));
            return None;
        }

        progress.on_progress(
            Phase::Merging,
            0,
            &format!("Merging {} {} files", downloaded.len(), label),
        );

        let filename = request.merged_filename(kind);
        let path = workspace.join(&filename);

        let report = match self.merger.merge(downloaded, &path) {
            Ok(report) => report,
            Err(e) => {
                errors.push(JobError::new(
                    JobErrorKind::MergeFailure,
                    format!("Error during merging process for {} PDF files: {}", label, e),
                ));
                return None;
            },
        };

        for (input, reason) in &report.skipped {
            let name = input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            errors.push(JobError::new(
                JobErrorKind::MergeFailure,
                format!("Could not append file {} to {} merge: {}. Skipping.", name, label, reason),
            ));
        }

        progress.on_progress(Phase::Merging, 100, &format!("Merged {}", filename));

        if report.page_count == 0 {
            errors.push(JobError::new(
                JobErrorKind::NothingToMerge,
                format!("No valid pages found/appended to merge for {}.", label),
            ));
            return None;
        }

        log::info!("Merged {} {} files into {}", downloaded.len() - report.skipped.len(), label, filename);
        Some(MergedPaper {
            kind,
            path,
            filename,
            source_count: downloaded.len() - report.skipped.len(),
            page_count: report.page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Session;
    use crate::document::tests::sample_pdf;
    use crate::document::{DocumentPageAccess, PageTextSource, PdfDocument};
    use crate::job::NoProgress;
    use std::collections::HashMap;

    fn pdf_bytes(texts: &[&str]) -> Vec<u8> {
        let mut doc = sample_pdf(texts);
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    /// Serves papers from a map keyed by file name.
    struct MapSource(HashMap<String, Vec<u8>>);

    impl PaperSource for MapSource {
        fn fetch(&self, paper: &PaperRef) -> Result<Vec<u8>> {
            self.0.get(&paper.filename()).cloned().ok_or(Error::Http {
                status: 404,
                url: paper.filename(),
            })
        }
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        fs::write(&a, pdf_bytes(&["first", "second"])).unwrap();
        fs::write(&b, pdf_bytes(&["third"])).unwrap();
        let out = dir.path().join("merged.pdf");

        let report = PdfMerger::new().merge(&[a, b], &out).unwrap();
        assert_eq!(report.page_count, 3);
        assert!(report.skipped.is_empty());

        let merged = PdfDocument::open(&out).unwrap();
        assert_eq!(merged.page_count(), 3);
        assert!(merged.extract_text(0).unwrap().contains("first"));
        assert!(merged.extract_text(2).unwrap().contains("third"));
    }

    #[test]
    fn test_merge_skips_corrupt_input() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.pdf");
        let bad = dir.path().join("bad.pdf");
        fs::write(&good, pdf_bytes(&["only"])).unwrap();
        fs::write(&bad, b"not a pdf").unwrap();
        let out = dir.path().join("merged.pdf");

        let report = PdfMerger::new().merge(&[bad.clone(), good], &out).unwrap();
        assert_eq!(report.page_count, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, bad);
    }

    #[test]
    fn test_merge_nothing_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("merged.pdf");
        let report = PdfMerger::new().merge(&[], &out).unwrap();
        assert_eq!(report.page_count, 0);
        assert!(!out.exists());
    }

    #[test]
    fn test_assemble_records_missing_papers() {
        let dir = tempfile::tempdir().unwrap();
        let mut papers = HashMap::new();
        papers.insert("9231_s19_qp_11.pdf".to_string(), pdf_bytes(&["vector"]));
        papers.insert("9231_s19_qp_13.pdf".to_string(), pdf_bytes(&["matrix"]));

        let request = PaperRequest::new("9231", 1, 2019, 2019, vec![Session::Summer]);
        let assembler = PaperAssembler::new(MapSource(papers), PdfMerger::new());
        let result = assembler.assemble(&request, dir.path(), &mut NoProgress);

        let qp = result.question_paper.expect("merged question paper");
        assert_eq!(qp.filename, "9231_1_2019-2019_s_qp_merged.pdf");
        assert_eq!(qp.source_count, 2);
        assert_eq!(qp.page_count, 2);
        assert!(qp.path.exists());
        assert!(result.mark_scheme.is_none());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, JobErrorKind::DownloadFailure);
        assert!(result.errors[0].message.contains("9231_s19_qp_12.pdf"));
    }

    #[test]
    fn test_assemble_nothing_downloaded() {
        let dir = tempfile::tempdir().unwrap();
        let request =
            PaperRequest::new("9231", 1, 2019, 2019, vec![Session::FebMarch]).with_mark_scheme(true);
        let assembler = PaperAssembler::new(MapSource(HashMap::new()), PdfMerger::new());
        let result = assembler.assemble(&request, dir.path(), &mut NoProgress);

        assert!(result.question_paper.is_none());
        assert!(result.mark_scheme.is_none());
        let kinds: Vec<_> = result.errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                JobErrorKind::DownloadFailure,
                JobErrorKind::NothingToMerge,
                JobErrorKind::DownloadFailure,
                JobErrorKind::NothingToMerge,
            ]
        );
    }
}
