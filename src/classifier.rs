//! Page → topic classification.
//!
//! Every page of a document is scanned once, in ascending order. Its text is
//! lower-cased and matched against a [`KeywordIndex`]; the page index is
//! added to the page set of every topic whose keyword occurs. Classification
//! is multi-label: one page can land in any number of topics.
//!
//! Pages that fail extraction, or yield no text at all, are recorded as
//! warnings and contribute nothing. They never abort the pass.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::document::{DocumentPageAccess, PageTextSource};
use crate::job::progress::percent;
use crate::job::{JobError, JobErrorKind, Phase, ProgressSink};
use crate::keywords::KeywordIndex;

/// Topic → page indices found by one classification pass.
///
/// Topics iterate in lexicographic order and page sets in ascending order,
/// so anything derived from a classification is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageClassification {
    topics: BTreeMap<String, BTreeSet<usize>>,
}

impl PageClassification {
    /// Empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `page_index` matched `topic`. Returns false if it was already recorded.
    pub fn insert(&mut self, topic: impl Into<String>, page_index: usize) -> bool {
        self.topics.entry(topic.into()).or_default().insert(page_index)
    }

    /// Pages recorded for a topic.
    pub fn pages(&self, topic: &str) -> Option<&BTreeSet<usize>> {
        self.topics.get(topic)
    }

    /// Topics with at least one page, with their page sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> {
        self.topics
            .iter()
            .filter(|(_, pages)| !pages.is_empty())
            .map(|(topic, pages)| (topic.as_str(), pages))
    }

    /// Number of topics with at least one page.
    pub fn topic_count(&self) -> usize {
        self.iter().count()
    }

    /// True when no topic has a page.
    pub fn is_empty(&self) -> bool {
        self.topic_count() == 0
    }

    /// Union of all page sets.
    pub fn matched_pages(&self) -> BTreeSet<usize> {
        self.topics.values().flatten().copied().collect()
    }
}

/// Scans a document's pages against a keyword index.
#[derive(Debug, Clone, Copy)]
pub struct TopicClassifier<'a> {
    index: &'a KeywordIndex,
    progress_interval: usize,
}

impl<'a> TopicClassifier<'a> {
    /// Classifier reporting progress every 50 pages.
    pub fn new(index: &'a KeywordIndex) -> Self {
        Self {
            index,
            progress_interval: 50,
        }
    }

    /// Report progress every `pages` pages.
    pub fn with_progress_interval(mut self, pages: usize) -> Self {
        self.progress_interval = pages.max(1);
        self
    }

    /// Classify every page of `document`.
    ///
    /// Returns the classification and the anomalies met on the way, in
    /// page order.
    pub fn classify<D>(
        &self,
        document: &D,
        progress: &mut dyn ProgressSink,
    ) -> (PageClassification, Vec<JobError>)
    where
        D: PageTextSource + DocumentPageAccess + ?Sized,
    {
        let page_count = document.page_count();
        let mut classification = PageClassification::new();
        let mut errors = Vec::new();

        log::info!(
            "Analyzing {} pages against {} keywords for subject {}",
            page_count,
            self.index.len(),
            self.index.subject_code()
        );
        progress.on_progress(
            Phase::Classifying,
            0,
            &format!("Analyzing {} pages for topics", page_count),
        );

        for page_index in 0..page_count {
            match document.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => {
                    let text = text.to_lowercase();
                    for topic in self.index.topics_matching_lowercase(&text) {
                        classification.insert(topic, page_index);
                    }
                },
                Ok(_) => {
                    log::warn!("Page {} has no extractable text", page_index + 1);
                    errors.push(JobError::new(
                        JobErrorKind::PageExtractionFailure,
                        format!("Page {} has no extractable text.", page_index + 1),
                    ));
                },
                Err(e) => {
                    log::warn!("Error extracting text from page {}: {}", page_index + 1, e);
                    errors.push(JobError::new(
                        JobErrorKind::PageExtractionFailure,
                        format!("Error extracting text from page {}: {}.", page_index + 1, e),
                    ));
                },
            }

            let done = page_index + 1;
            if done % self.progress_interval == 0 && done < page_count {
                progress.on_progress(
                    Phase::Classifying,
                    percent(done, page_count),
                    &format!("Analyzed {} of {} pages", done, page_count),
                );
            }
        }

        let found = classification.topic_count();
        log::info!("Page analysis complete: {} topics with matches", found);
        progress.on_progress(
            Phase::Classifying,
            100,
            &format!("Page analysis complete. Found matches for {} topics", found),
        );

        (classification, errors)
    }
}
