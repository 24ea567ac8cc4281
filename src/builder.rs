//! Topical document assembly.
//!
//! For each topic of a [`PageClassification`] (lexicographic order), the
//! topic's pages are copied in ascending source order into a new document
//! named `Topical_{subject}_{topic}.pdf`. Invalid indices, copy failures and
//! write failures are recorded and skipped; a failing topic never stops the
//! topics after it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::classifier::PageClassification;
use crate::document::{DocumentPageAccess, DocumentWriter};
use crate::job::progress::percent;
use crate::job::{JobError, JobErrorKind, Phase, ProgressSink};

lazy_static! {
    static ref UNDERSCORE_RUN: Regex = Regex::new(r"_{2,}").unwrap();
}

/// Used when a name sanitizes to nothing.
const FALLBACK_NAME: &str = "Untitled";

/// A topical document that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicalOutput {
    /// Topic name as found in the keyword table.
    pub topic: String,
    /// File name of the written document.
    pub filename: String,
    /// Full path of the written document.
    pub path: PathBuf,
    /// Source page indices, ascending, in written order.
    pub pages: Vec<usize>,
    /// Pages in the written document.
    pub page_count: usize,
    /// Size of the written document in bytes.
    pub bytes: u64,
}

/// Make a topic name safe for use in a file name.
///
/// Characters other than alphanumerics, space, `_` and `-` become `_`; the
/// result is trimmed, spaces become `_` and runs of `_` collapse to one.
/// Never returns an empty string.
pub fn sanitize_topic_name(topic: &str) -> String {
    let replaced: String = topic
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let spaced = replaced.trim().replace(' ', "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&spaced, "_");

    if collapsed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        collapsed.into_owned()
    }
}

/// `Topical_{subject}_{topic}.pdf` with the topic sanitized.
///
/// The subject code is used as given; registered codes are plain digits.
pub fn topical_filename(subject_code: &str, topic: &str) -> String {
    format!("Topical_{}_{}.pdf", subject_code, sanitize_topic_name(topic))
}

/// Writes one document per classified topic.
#[derive(Debug, Clone, Copy)]
pub struct TopicalDocumentBuilder<'a> {
    subject_code: &'a str,
    output_dir: &'a Path,
}

impl<'a> TopicalDocumentBuilder<'a> {
    /// Builder writing `Topical_{subject_code}_*.pdf` files into `output_dir`.
    pub fn new(subject_code: &'a str, output_dir: &'a Path) -> Self {
        Self {
            subject_code,
            output_dir,
        }
    }

    /// Build every topic with at least one page.
    ///
    /// Returns the written outputs in topic order and the anomalies met on
    /// the way, in occurrence order.
    pub fn build<D, W>(
        &self,
        document: &D,
        classification: &PageClassification,
        writer: &mut W,
        progress: &mut dyn ProgressSink,
    ) -> (Vec<TopicalOutput>, Vec<JobError>)
    where
        D: DocumentPageAccess + ?Sized,
        W: DocumentWriter<D::Page> + ?Sized,
    {
        let page_count = document.page_count();
        let total = classification.topic_count();
        let reserved: HashSet<String> = classification
            .iter()
            .map(|(topic, _)| topical_filename(self.subject_code, topic))
            .collect();
        let mut claimed = HashSet::new();
        let mut outputs = Vec::new();
        let mut errors = Vec::new();

        for (done, (topic, indices)) in classification.iter().enumerate() {
            progress.on_progress(
                Phase::Building,
                percent(done, total),
                &format!("Creating PDF for topic: {}", topic),
            );
            log::debug!("Creating PDF for '{}' with {} pages", topic, indices.len());

            let mut pages = Vec::with_capacity(indices.len());
            let mut written = Vec::with_capacity(indices.len());

            for &index in indices {
                if index >= page_count {
                    log::warn!("Invalid page index {} for topic '{}'", index + 1, topic);
                    errors.push(JobError::new(
                        JobErrorKind::InvalidPageIndex,
                        format!(
                            "Invalid page index {} encountered for topic '{}'. Skipping.",
                            index + 1,
                            topic
                        ),
                    ));
                    continue;
                }

                match document.copy_page(index) {
                    Ok(page) => {
                        pages.push(page);
                        written.push(index);
                    },
                    Err(e) => {
                        log::warn!("Error adding page {} to topic '{}': {}", index + 1, topic, e);
                        errors.push(JobError::new(
                            JobErrorKind::PageCopyFailure,
                            format!("Error adding page {} to topic '{}': {}", index + 1, topic, e),
                        ));
                    },
                }
            }

            if pages.is_empty() {
                errors.push(JobError::new(
                    JobErrorKind::EmptyTopicOutput,
                    format!(
                        "No valid pages could be added for topic '{}' for subject {}. PDF not created.",
                        topic, self.subject_code
                    ),
                ));
                continue;
            }

            let filename = unique_filename(topical_filename(self.subject_code, topic), &reserved, &mut claimed);
            let path = self.output_dir.join(&filename);

            match writer.write(&pages, &path) {
                Ok(summary) => {
                    log::info!("Created topical PDF: {}", filename);
                    outputs.push(TopicalOutput {
                        topic: topic.to_string(),
                        filename,
                        path,
                        pages: written,
                        page_count: summary.page_count,
                        bytes: summary.bytes,
                    });
                },
                Err(e) => {
                    log::warn!("Error writing PDF file for topic '{}': {}", topic, e);
                    errors.push(JobError::new(
                        JobErrorKind::OutputWriteFailure,
                        format!("Error writing PDF file for topic '{}': {}", topic, e),
                    ));
                },
            }
        }

        progress.on_progress(
            Phase::Building,
            100,
            &format!("Topical generation finished. {} files created", outputs.len()),
        );

        (outputs, errors)
    }
}

/// Claim `filename`, or `stem_2.pdf`, `stem_3.pdf`, ... if already claimed.
///
/// Suffixed names never take a name in `reserved`, which holds the plain
/// name of every topic in the job.
fn unique_filename(
    filename: String,
    reserved: &HashSet<String>,
    claimed: &mut HashSet<String>,
) -> String {
    if claimed.insert(filename.clone()) {
        return filename;
    }

    let stem = filename.strip_suffix(".pdf").unwrap_or(&filename).to_string();
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}.pdf", stem, n);
        if !reserved.contains(&candidate) && claimed.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
