//! Axum route handlers for the document renderer.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::render::TemplateInfo;
use crate::state::AppState;
use crate::storage::get_owned_resume;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    pub template_id: Option<String>,
}

/// POST /api/resumes/:id/generate-pdf
///
/// Renders the stored résumé with the requested template (or its own) and
/// returns the document as an attachment named after the résumé title.
/// The body is optional; when present it must be a valid request object.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = parse_pdf_request(&body)?;
    let resume = get_owned_resume(state.store.as_ref(), &resume_id, &auth.user_id).await?;

    let template_id = request
        .template_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| resume.template_id.clone());
    // Fail fast on an unknown template before handing work to the blocking pool.
    state.templates.get(&template_id)?;

    let templates = state.templates.clone();
    let content = resume.content.0;
    let render_template = template_id.clone();
    let pdf = tokio::task::spawn_blocking(move || templates.render(&content, &render_template))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    info!(
        "Rendered résumé {} with template '{}' ({} bytes)",
        resume.id,
        template_id,
        pdf.len()
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&resume.title)),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// An empty (or `null`) body means "use the stored template".
fn parse_pdf_request(body: &[u8]) -> Result<GeneratePdfRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GeneratePdfRequest::default());
    }
    serde_json::from_slice::<Option<GeneratePdfRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

/// GET /api/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateInfo>> {
    Json(state.templates.list())
}

/// `attachment` disposition for `{title}.pdf`.
///
/// Header values must be visible ASCII, so the plain `filename` carries an
/// ASCII fallback and `filename*` carries the UTF-8 title percent-encoded.
pub fn content_disposition(title: &str) -> String {
    let title = title.trim();
    let title = if title.is_empty() { "curriculo" } else { title };

    let fallback: String = title
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();

    let mut encoded = String::new();
    for byte in format!("{title}.pdf").bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    format!("attachment; filename=\"{fallback}.pdf\"; filename*=UTF-8''{encoded}")
}
