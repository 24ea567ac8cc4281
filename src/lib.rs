// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]

//! # pastpaper
//!
//! Topical past-paper generation: download examination papers, merge them,
//! and split the merged question paper into one PDF per syllabus topic.
//!
//! ## Core Features
//!
//! - **Keyword classification**: every page is matched against a per-subject
//!   keyword table; a page can belong to any number of topics
//! - **Topical assembly**: one `Topical_{subject}_{topic}.pdf` per topic, pages
//!   in source order
//! - **Best-effort jobs**: bad pages, invalid indices and write failures are
//!   recorded, never fatal
//! - **Paper fetching**: download and merge question papers and mark schemes
//!   for a year range and set of sessions
//!
//! ## Architecture
//! - [`keywords`]: immutable keyword indexes built from a [`KeywordRegistry`]
//! - [`document`]: the document capabilities a job needs, with a `lopdf` backend
//! - [`classifier`] and [`builder`]: the two phases of a topical job
//! - [`job`]: lifecycle, error records and progress reporting
//! - [`catalog`], [`fetch`] and [`task`]: paper download and merge
//!
//! ## Quick Start
//!
//! ```no_run
//! use pastpaper::{ClassificationJob, JobConfig, KeywordRegistry, LogProgress};
//!
//! let registry = KeywordRegistry::builtin();
//! let job = ClassificationJob::new(&registry, JobConfig::new().with_output_dir("out"));
//! let result = job.run_file("9231_1_2018-2023_sw_qp_merged.pdf", "9231", &mut LogProgress);
//!
//! println!("{} -> {} files", result.state, result.outputs.len());
//! for error in &result.errors {
//!     println!("{}", error);
//! }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Keyword tables
pub mod keywords;

// Document backends
pub mod document;
pub mod memory;

// Topical generation
pub mod builder;
pub mod classifier;
pub mod job;

// Paper download and merge
pub mod catalog;
pub mod fetch;
pub mod task;

// Re-exports
pub use builder::{sanitize_topic_name, topical_filename, TopicalDocumentBuilder, TopicalOutput};
pub use catalog::{PaperKind, PaperRef, PaperRequest, Session};
pub use classifier::{PageClassification, TopicClassifier};
pub use config::{FetchConfig, JobConfig};
pub use document::{DocumentPageAccess, DocumentWriter, PageTextSource, PdfDocument};
pub use error::{Error, Result};
pub use fetch::{DocumentMerger, HttpPaperSource, PaperAssembler, PaperSource, PdfMerger};
pub use job::{
    ClassificationJob, JobError, JobErrorKind, JobResult, JobState, LogProgress, NoProgress, Phase,
    ProgressSink, Severity,
};
pub use keywords::{KeywordIndex, KeywordRegistry};
pub use task::{Task, TaskReport, TaskStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
