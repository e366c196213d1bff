use std::path::PathBuf;
use std::sync::Arc;

use crate::tailoring::model::TailoringModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable tailoring model. Default: the Anthropic-backed `LlmClient`.
    pub model: Arc<dyn TailoringModel>,
    /// Directory where each request stages its upload.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}
