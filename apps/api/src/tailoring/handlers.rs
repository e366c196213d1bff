//! Axum route handlers for the Tailoring API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::extractor::extract_resume_text;
use crate::tailoring::model::run_tailoring;
use crate::tailoring::request::TailoringPrompt;
use crate::tailoring::upload::{parse_tailor_form, stage_upload};

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub success: bool,
    pub analysis: String,
}

/// POST /tailor-resume
///
/// Multipart upload of a PDF resume (`file`) and an optional
/// `job_description`. Extraction problems are errors; a failing model is
/// reported inside a successful response.
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let form = parse_tailor_form(multipart).await?;

    info!(
        "Tailoring request for '{}' ({} bytes)",
        form.document.filename,
        form.document.content.len()
    );

    // Deleted when `staged` drops, whichever way this handler returns.
    let staged = stage_upload(&form.document, &state.upload_dir).await?;

    let resume_text = extract_resume_text(staged.path().to_path_buf()).await?;
    debug!("Extracted {} chars of resume text", resume_text.as_str().len());

    if resume_text.is_blank() {
        return Err(AppError::BadRequest(
            "Could not extract text from the resume".to_string(),
        ));
    }

    let prompt = TailoringPrompt::build(resume_text.as_str(), &form.job_description);
    debug!("Using {} prompt", prompt.kind());

    let outcome = run_tailoring(state.model.as_ref(), &prompt).await;
    info!("Tailoring finished (degraded: {})", outcome.is_degraded());

    Ok(Json(TailorResponse {
        success: true,
        analysis: outcome.into_analysis(),
    }))
}
