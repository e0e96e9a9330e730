use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Resume, ResumeUpdate};
use crate::render::RenderError;
use crate::state::AppState;
use crate::storage::get_owned_resume;

/// GET /api/resumes
///
/// The caller's résumés, most recent first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.store.list_resumes_by_user(&auth.user_id).await?))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let resume = get_owned_resume(state.store.as_ref(), &resume_id, &auth.user_id).await?;
    Ok(Json(resume))
}

/// PATCH /api/resumes/:id
///
/// Renames a résumé or switches its template. Content is never edited here.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
    payload: Result<Json<ResumeUpdate>, JsonRejection>,
) -> Result<Json<Resume>, AppError> {
    let Json(mut update) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    get_owned_resume(state.store.as_ref(), &resume_id, &auth.user_id).await?;

    if let Some(title) = update.title.as_mut() {
        *title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("Título não pode ser vazio".to_string()));
        }
    }
    if let Some(template_id) = update.template_id.as_deref() {
        if !state.templates.contains(template_id) {
            return Err(RenderError::UnknownTemplate(template_id.to_string()).into());
        }
    }

    let resume = state
        .store
        .update_resume(&resume_id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    get_owned_resume(state.store.as_ref(), &resume_id, &auth.user_id).await?;

    if !state.store.delete_resume(&resume_id).await? {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }

    info!("Deleted résumé {resume_id} for user {}", auth.user_id);
    Ok(Json(json!({ "message": "Currículo excluído com sucesso" })))
}
