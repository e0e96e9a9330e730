use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{User, UserProfile};
use crate::state::AppState;

/// GET /api/auth/user
pub async fn handle_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .get_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.user_id)))?;
    Ok(Json(user))
}

/// GET /api/profile
///
/// `null` until the user completes onboarding.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Option<UserProfile>>, AppError> {
    Ok(Json(state.store.get_profile(&auth.user_id).await?))
}
