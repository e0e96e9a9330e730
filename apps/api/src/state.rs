use std::sync::Arc;

use crate::auth::JwtVerifier;
use crate::config::Config;
use crate::generation::ContentGenerator;
use crate::render::TemplateRegistry;
use crate::storage::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Pluggable content generator. Default: `LlmContentGenerator` over the chat-completions client.
    pub generator: Arc<dyn ContentGenerator>,
    pub templates: Arc<TemplateRegistry>,
    pub auth: JwtVerifier,
    pub config: Config,
}
