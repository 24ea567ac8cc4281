//! Document access for the classification core.
//!
//! The classifier and the topical builder only see three capabilities:
//!
//! - [`PageTextSource`]: plain text of one page
//! - [`DocumentPageAccess`]: page count and page handles
//! - [`DocumentWriter`]: write an ordered run of page handles to a new file
//!
//! [`PdfDocument`] and [`PdfSubsetWriter`] implement them on top of `lopdf`.
//! [`crate::memory`] provides an in-memory implementation.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Extracts plain text from a single page.
pub trait PageTextSource {
    /// Text of the page at `page_index` (zero-based).
    ///
    /// Pages without a text layer (scanned images) return an empty string;
    /// an error means the page itself could not be read.
    fn extract_text(&self, page_index: usize) -> Result<String>;
}

/// Page count and page handles of a document.
pub trait DocumentPageAccess {
    /// Backend handle for a single page.
    type Page;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Handle to the page at `page_index` (zero-based).
    fn copy_page(&self, page_index: usize) -> Result<Self::Page>;
}

/// Writes an ordered sequence of pages to a destination.
pub trait DocumentWriter<P> {
    /// Write `pages` in order to `destination`.
    fn write(&mut self, pages: &[P], destination: &Path) -> Result<WriteSummary>;
}

/// What a [`DocumentWriter`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    /// Pages in the written document.
    pub page_count: usize,
    /// Size of the written file in bytes.
    pub bytes: u64,
}

/// PDF document backed by `lopdf`.
///
/// # Example
///
/// ```no_run
/// use pastpaper::document::{DocumentPageAccess, PageTextSource, PdfDocument};
///
/// let doc = PdfDocument::open("9231_11_2018-2023_sw_qp_merged.pdf")?;
/// println!("Page count: {}", doc.page_count());
/// println!("{}", doc.extract_text(0)?);
/// # Ok::<(), pastpaper::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PdfDocument {
    inner: lopdf::Document,
    /// lopdf page numbers (1-based) in document order
    page_numbers: Vec<u32>,
    path: Option<PathBuf>,
}

/// Handle to one page of a [`PdfDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PdfPageRef {
    number: u32,
}

impl PdfPageRef {
    /// 1-based page number in the source document.
    pub fn number(&self) -> u32 {
        self.number
    }
}

impl PdfDocument {
    /// Open a PDF file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = lopdf::Document::load(path).map_err(|e| Error::InputUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut doc = Self::from_document(inner);
        doc.path = Some(path.to_path_buf());
        log::debug!("Opened {} ({} pages)", path.display(), doc.page_numbers.len());
        Ok(doc)
    }

    /// Parse a PDF held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = lopdf::Document::load_mem(bytes)?;
        Ok(Self::from_document(inner))
    }

    /// Wrap an already loaded `lopdf` document.
    pub fn from_document(inner: lopdf::Document) -> Self {
        let page_numbers = inner.get_pages().into_keys().collect();
        Self {
            inner,
            page_numbers,
            path: None,
        }
    }

    /// Path the document was opened from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Underlying `lopdf` document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }

    /// Writer that emits subsets of this document's pages.
    pub fn subset_writer(&self) -> PdfSubsetWriter<'_> {
        PdfSubsetWriter { source: &self.inner }
    }

    fn page_number(&self, page_index: usize) -> Result<u32> {
        self.page_numbers
            .get(page_index)
            .copied()
            .ok_or(Error::PageOutOfRange {
                index: page_index,
                page_count: self.page_numbers.len(),
            })
    }
}

impl PageTextSource for PdfDocument {
    fn extract_text(&self, page_index: usize) -> Result<String> {
        let number = self.page_number(page_index)?;
        self.inner
            .extract_text(&[number])
            .map_err(|e| Error::TextExtraction {
                page: page_index + 1,
                reason: e.to_string(),
            })
    }
}

impl DocumentPageAccess for PdfDocument {
    type Page = PdfPageRef;

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn copy_page(&self, page_index: usize) -> Result<PdfPageRef> {
        let number = self.page_number(page_index)?;
        Ok(PdfPageRef { number })
    }
}

/// Writes a subset of a source PDF's pages to a new file.
///
/// Pages keep their original order, so the handles passed to
/// [`DocumentWriter::write`] must be strictly ascending.
#[derive(Debug, Clone, Copy)]
pub struct PdfSubsetWriter<'a> {
    source: &'a lopdf::Document,
}

impl<'a> PdfSubsetWriter<'a> {
    /// Writer over a `lopdf` document.
    pub fn new(source: &'a lopdf::Document) -> Self {
        Self { source }
    }

    fn render(&self, pages: &[PdfPageRef]) -> Result<Vec<u8>> {
        if !pages.windows(2).all(|w| w[0].number < w[1].number) {
            return Err(Error::Pdf(
                "pages must be given in strictly ascending document order".to_string(),
            ));
        }

        let keep: BTreeSet<u32> = pages.iter().map(|p| p.number).collect();
        let mut doc = self.source.clone();
        let drop: Vec<u32> = doc
            .get_pages()
            .into_keys()
            .filter(|n| !keep.contains(n))
            .collect();

        doc.delete_pages(&drop);
        doc.prune_objects();
        doc.renumber_objects();
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

impl DocumentWriter<PdfPageRef> for PdfSubsetWriter<'_> {
    fn write(&mut self, pages: &[PdfPageRef], destination: &Path) -> Result<WriteSummary> {
        let write_error = |reason: String| Error::Write {
            path: destination.to_path_buf(),
            reason,
        };

        let bytes = self.render(pages).map_err(|e| write_error(e.to_string()))?;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        fs::write(destination, &bytes).map_err(|e| write_error(e.to_string()))?;

        Ok(WriteSummary {
            page_count: pages.len(),
            bytes: bytes.len() as u64,
        })
    }
}
