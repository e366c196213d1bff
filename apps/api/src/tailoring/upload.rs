//! Multipart parsing and per-request staging of the uploaded resume.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;

pub const FILE_FIELD: &str = "file";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// An uploaded file with its declared name.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content: Bytes,
}

impl UploadedDocument {
    /// Suffix for the staged copy, taken from the declared filename
    /// (`"cv.pdf"` → `".pdf"`, no extension → `""`).
    pub fn staging_suffix(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Parsed fields of `POST /tailor-resume`.
#[derive(Debug)]
pub struct TailorForm {
    pub document: UploadedDocument,
    pub job_description: String,
}

/// Reads the multipart body. A `file` part with a non-empty filename is
/// required; `job_description` defaults to an empty string.
pub async fn parse_tailor_form(mut multipart: Multipart) -> Result<TailorForm, AppError> {
    let mut document: Option<UploadedDocument> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            FILE_FIELD => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content = field.bytes().await?;
                document = Some(UploadedDocument { filename, content });
            }
            JOB_DESCRIPTION_FIELD => {
                job_description = field.text().await?;
            }
            _ => {
                // Ignore unknown fields
                field.bytes().await?;
            }
        }
    }

    let document = document
        .filter(|d| !d.filename.is_empty())
        .ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    Ok(TailorForm {
        document,
        job_description,
    })
}

/// Writes the upload to a private temporary file inside `dir`.
///
/// The returned guard deletes the file when dropped, on every exit path of
/// the request.
pub async fn stage_upload(document: &UploadedDocument, dir: &Path) -> Result<NamedTempFile, AppError> {
    let suffix = document.staging_suffix();
    let content = document.content.clone();
    let dir: PathBuf = dir.to_path_buf();

    let staged = tokio::task::spawn_blocking(move || -> anyhow::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile_in(&dir)
            .with_context(|| format!("Failed to create staging file in {}", dir.display()))?;
        file.write_all(&content)
            .context("Failed to write uploaded resume")?;
        file.flush().context("Failed to write uploaded resume")?;
        Ok(file)
    })
    .await
    .context("Staging task failed")??;

    Ok(staged)
}
