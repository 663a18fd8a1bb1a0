use std::sync::Arc;

use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless pipeline; safe to share across concurrent requests.
    pub parser: Arc<ResumeParser>,
}
