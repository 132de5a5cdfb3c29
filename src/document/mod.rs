// src/document/mod.rs
use crate::utils::error::DocumentError;
use std::path::Path;

/// Number of leading pages scanned by the standard-body classifier and
/// the emission-type extractor. Registry identity often appears after
/// the cover page, so the first page alone is not enough.
pub const CLASSIFIER_PAGE_WINDOW: usize = 6;

/// Ordered page texts rendered from a single methodology document.
///
/// Immutable once constructed. The derived views (first page, leading
/// window, full text) are the only shapes the extractors consume, so a
/// test can build one from raw strings without touching a PDF.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pages: Vec<String>,
}

impl DocumentText {
    /// Wraps pre-rendered page texts. Errors when there are no pages,
    /// since every extraction window would be empty.
    pub fn new(pages: Vec<String>) -> Result<Self, DocumentError> {
        if pages.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(Self { pages })
    }

    /// Renders every page of a PDF to plain text.
    ///
    /// Pages that fail individual text extraction are rendered as empty
    /// rather than failing the document: a methodology PDF routinely
    /// carries image-only pages (maps, diagrams) with no text stream.
    pub fn from_pdf<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        tracing::info!("Rendering document text from: {}", path.display());

        let doc = lopdf::Document::load(path).map_err(|e| DocumentError::Open(e.to_string()))?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        if page_numbers.is_empty() {
            return Err(DocumentError::Empty);
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_num in page_numbers {
            match doc.extract_text(&[page_num]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    tracing::warn!("No text extracted from page {}: {}", page_num, e);
                    pages.push(String::new());
                }
            }
        }

        tracing::debug!("Rendered {} pages of text", pages.len());
        Self::new(pages)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of the cover page, where name/version/date/code live.
    pub fn first_page(&self) -> &str {
        &self.pages[0]
    }

    /// Concatenation of the first `n` pages (clamped to the page count),
    /// joined with newlines so matches cannot bridge a page boundary
    /// into a false token.
    pub fn first_pages(&self, n: usize) -> String {
        let end = n.min(self.pages.len());
        self.pages[..end].join("\n")
    }

    /// The whole document as one string, for full-text keyword scans
    /// and the enrichment prompt.
    pub fn full_text(&self) -> String {
        self.pages.join("\n")
    }
}
