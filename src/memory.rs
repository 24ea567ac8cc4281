//! In-memory documents.
//!
//! [`MemoryDocument`] holds the text of each page directly and
//! [`MemoryWriter`] records what would have been written. Both support
//! failure injection, which makes them suitable for exercising the
//! classification job without touching the filesystem.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::document::{DocumentPageAccess, DocumentWriter, PageTextSource, WriteSummary};
use crate::error::{Error, Result};

/// A document whose pages are plain strings.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    /// `None` marks a page whose text extraction fails.
    pages: Vec<Option<String>>,
    /// Pages whose copy fails even though the index is valid.
    uncopyable: BTreeSet<usize>,
}

impl MemoryDocument {
    /// Document with one page per text.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: texts.into_iter().map(|t| Some(t.into())).collect(),
            uncopyable: BTreeSet::new(),
        }
    }

    /// Append a page.
    pub fn push_page(&mut self, text: impl Into<String>) {
        self.pages.push(Some(text.into()));
    }

    /// Append a page whose text extraction fails.
    pub fn push_unreadable_page(&mut self) {
        self.pages.push(None);
    }

    /// Builder form of [`push_unreadable_page`](Self::push_unreadable_page).
    pub fn with_unreadable_page(mut self) -> Self {
        self.push_unreadable_page();
        self
    }

    /// Make [`copy_page`](DocumentPageAccess::copy_page) fail for `page_index`.
    pub fn with_uncopyable_page(mut self, page_index: usize) -> Self {
        self.uncopyable.insert(page_index);
        self
    }
}

impl PageTextSource for MemoryDocument {
    fn extract_text(&self, page_index: usize) -> Result<String> {
        match self.pages.get(page_index) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(Error::TextExtraction {
                page: page_index + 1,
                reason: "page content is corrupt".to_string(),
            }),
            None => Err(Error::PageOutOfRange {
                index: page_index,
                page_count: self.pages.len(),
            }),
        }
    }
}

impl DocumentPageAccess for MemoryDocument {
    type Page = usize;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn copy_page(&self, page_index: usize) -> Result<usize> {
        if page_index >= self.pages.len() {
            return Err(Error::PageOutOfRange {
                index: page_index,
                page_count: self.pages.len(),
            });
        }
        if self.uncopyable.contains(&page_index) {
            return Err(Error::Pdf(format!("page {} could not be copied", page_index + 1)));
        }
        Ok(page_index)
    }
}

/// A document recorded by [`MemoryWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDocument {
    /// Destination the document was written to.
    pub destination: PathBuf,
    /// Page indices in write order.
    pub pages: Vec<usize>,
}

/// Records writes instead of producing files.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    written: Vec<RecordedDocument>,
    failing: HashSet<String>,
}

impl MemoryWriter {
    /// Writer that accepts every destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every write whose destination file name equals `file_name`.
    pub fn fail_on(mut self, file_name: impl Into<String>) -> Self {
        self.failing.insert(file_name.into());
        self
    }

    /// Documents written so far, in order.
    pub fn written(&self) -> &[RecordedDocument] {
        &self.written
    }
}

impl DocumentWriter<usize> for MemoryWriter {
    fn write(&mut self, pages: &[usize], destination: &Path) -> Result<WriteSummary> {
        let file_name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.failing.contains(&file_name) {
            return Err(Error::Write {
                path: destination.to_path_buf(),
                reason: "destination rejected".to_string(),
            });
        }

        self.written.push(RecordedDocument {
            destination: destination.to_path_buf(),
            pages: pages.to_vec(),
        });

        Ok(WriteSummary {
            page_count: pages.len(),
            bytes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_page_fails_extraction() {
        let doc = MemoryDocument::from_texts(["first"]).with_unreadable_page();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.extract_text(0).unwrap(), "first");
        assert!(matches!(doc.extract_text(1), Err(Error::TextExtraction { page: 2, .. })));
    }

    #[test]
    fn test_copy_page_bounds() {
        let doc = MemoryDocument::from_texts(["a", "b"]);
        assert_eq!(doc.copy_page(1).unwrap(), 1);
        assert!(doc.copy_page(2).is_err());
    }

    #[test]
    fn test_uncopyable_page() {
        let doc = MemoryDocument::from_texts(["a", "b"]).with_uncopyable_page(1);
        assert_eq!(doc.copy_page(0).unwrap(), 0);
        assert!(matches!(doc.copy_page(1), Err(Error::Pdf(_))));
        assert_eq!(doc.extract_text(1).unwrap(), "b");
    }

    #[test]
    fn test_writer_records_and_fails() {
        let mut writer = MemoryWriter::new().fail_on("bad.pdf");
        let ok = writer.write(&[0, 2], Path::new("out/good.pdf")).unwrap();
        assert_eq!(ok.page_count, 2);
        assert!(writer.write(&[1], Path::new("out/bad.pdf")).is_err());
        assert_eq!(writer.written().len(), 1);
        assert_eq!(writer.written()[0].pages, vec![0, 2]);
    }
}
