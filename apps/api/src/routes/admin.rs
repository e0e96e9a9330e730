use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::models::User;
use crate::state::AppState;

/// Users returned alongside the counts.
const RECENT_USERS_LIMIT: i64 = 50;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub user_count: i64,
    pub resume_count: i64,
    pub users: Vec<User>,
}

/// GET /api/admin/stats
pub async fn handle_admin_stats(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<AdminStats>, AppError> {
    let user_count = state.store.count_users().await?;
    let resume_count = state.store.count_resumes().await?;
    let users = state.store.list_users(RECENT_USERS_LIMIT).await?;

    info!("Admin stats requested by {}", admin.user.id);
    Ok(Json(AdminStats {
        user_count,
        resume_count,
        users,
    }))
}
