//! Document text extraction
//!
//! PDF extraction is delegated to `pdf-extract`; plain text files are read
//! as-is. Callers depend on the `TextExtractor` trait so tests can feed
//! fixed text through the pipeline.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Mutex;

/// Serializes panic hook swaps around `pdf-extract` calls
static PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Produces the raw text of one document
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extracts text from PDF files
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read PDF file: {}", path.display()))?;

        let text = extract_pdf_text(&bytes)
            .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?;

        log::debug!("extracted {} bytes of text from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Run `pdf-extract`, turning its panics on malformed documents into errors.
/// The default panic hook is muted for the call so nothing leaks to stderr.
fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let _guard = PANIC_HOOK_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));
    panic::set_hook(hook);

    match outcome {
        Ok(result) => Ok(result?),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(anyhow!("pdf-extract panicked: {}", message))
        }
    }
}

/// Reads plain text files, replacing invalid UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                log::warn!("{} is not valid UTF-8, using lossy conversion", path.display());
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}

/// Picks an extractor from the file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor {
    pdf: PdfExtractor,
    plain: PlainTextExtractor,
}

/// Extensions `DocumentExtractor` understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt"];

impl TextExtractor for DocumentExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("pdf") => self.pdf.extract(path),
            Some("txt") => self.plain.extract(path),
            _ => bail!("Unsupported document type: {}", path.display()),
        }
    }
}
