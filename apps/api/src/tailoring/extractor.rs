//! Text Extractor — turns a staged PDF into plain resume text.
//!
//! Pages are read in document order. Every page that yields text contributes
//! that text followed by exactly one newline; pages without text contribute
//! nothing. Whether the result is usable is decided by the caller.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Pdf(#[from] pdf_extract::OutputError),

    /// The PDF parser panicked on malformed input.
    #[error("PDF parser failed: {0}")]
    Panicked(String),

    #[error("extraction task did not complete: {0}")]
    Aborted(String),
}

/// Concatenated page text of one uploaded resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no page produced anything but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Reads per-page text from the PDF at `path`.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    Ok(pdf_extract::extract_text_by_pages(path)?)
}

pub fn join_pages<I, S>(pages: I) -> ExtractedText
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    ExtractedText(text)
}

/// Extracts and joins the resume text on the blocking pool.
///
/// A panic inside the parser is reported as `ExtractError::Panicked` rather
/// than tearing down the request task.
pub async fn extract_resume_text(path: PathBuf) -> Result<ExtractedText, ExtractError> {
    let pages = tokio::task::spawn_blocking(move || extract_pages(&path))
        .await
        .map_err(|e| {
            if e.is_panic() {
                ExtractError::Panicked(panic_message(e.into_panic()))
            } else {
                ExtractError::Aborted(e.to_string())
            }
        })??;

    debug!("Extracted {} page(s) from resume", pages.len());
    Ok(join_pages(pages))
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
