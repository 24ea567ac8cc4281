//! Error types for the past-paper library.
//!
//! This module defines the errors returned by fallible operations at the
//! crate's boundaries (PDF backend, downloads, merging, request validation).
//! Recoverable per-page and per-topic failures inside a classification job
//! are not raised as errors; they are recorded as [`crate::job::JobError`]s.

use std::path::PathBuf;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching, merging, or classifying papers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF backend rejected a document or operation
    #[error("PDF error: {0}")]
    Pdf(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No keyword table is registered for the subject
    #[error("No keyword map registered for subject {0}")]
    KeywordMapNotFound(String),

    /// Subject code is not part of the catalog
    #[error("Unknown subject code: {0}")]
    UnknownSubject(String),

    /// Input document cannot be located or opened
    #[error("Input document unavailable at '{path}': {reason}")]
    InputUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Reason the document could not be opened
        reason: String,
    },

    /// Page index outside `[0, page_count)`
    #[error("Page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Zero-based index that was requested
        index: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Text could not be extracted from a page
    #[error("Text extraction failed on page {page}: {reason}")]
    TextExtraction {
        /// One-based page number
        page: usize,
        /// Backend failure description
        reason: String,
    },

    /// A document could not be written to its destination
    #[error("Failed to write '{path}': {reason}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Reason for the failure
        reason: String,
    },

    /// Remote archive answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Request never completed (DNS, TLS, timeout, ...)
    #[error("Network error for {url}: {reason}")]
    Network {
        /// Requested URL
        url: String,
        /// Underlying transport error
        reason: String,
    },

    /// A paper request failed validation
    #[error("Invalid request: {}", .0.join("; "))]
    InvalidRequest(Vec<String>),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Pdf(err.to_string())
    }
}
