//! Persistence layer for users, profiles and résumés.
//!
//! Handlers only see `Arc<dyn Store>`. `PgStore` is the production backend;
//! tests use the in-memory `MemoryStore`. Ids are opaque strings: user ids come
//! from the identity provider, résumé and profile ids are generated here.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{NewProfile, NewResume, Resume, ResumeUpdate, UpsertUser, User, UserProfile};

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    // ── users ────────────────────────────────────────────────────────────────

    async fn get_user(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Inserts the user or updates it in place. Absent fields keep their stored value.
    async fn upsert_user(&self, user: UpsertUser) -> Result<User, AppError>;

    /// Most recent first.
    async fn list_users(&self, limit: i64) -> Result<Vec<User>, AppError>;

    async fn count_users(&self) -> Result<i64, AppError>;

    // ── résumés ──────────────────────────────────────────────────────────────

    async fn create_resume(&self, resume: NewResume) -> Result<Resume, AppError>;

    async fn get_resume(&self, id: &str) -> Result<Option<Resume>, AppError>;

    /// Most recent first.
    async fn list_resumes_by_user(&self, user_id: &str) -> Result<Vec<Resume>, AppError>;

    async fn update_resume(
        &self,
        id: &str,
        update: ResumeUpdate,
    ) -> Result<Option<Resume>, AppError>;

    /// Returns whether a row was deleted.
    async fn delete_resume(&self, id: &str) -> Result<bool, AppError>;

    async fn count_resumes(&self) -> Result<i64, AppError>;

    // ── profiles ─────────────────────────────────────────────────────────────

    async fn create_profile(&self, profile: NewProfile) -> Result<UserProfile, AppError>;

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, AppError>;

    async fn update_profile(&self, profile: NewProfile) -> Result<Option<UserProfile>, AppError>;

    // ── onboarding ───────────────────────────────────────────────────────────

    /// Upserts the user, creates or replaces the profile and stores the
    /// general résumé as one unit: either every write lands or none does.
    async fn complete_onboarding(
        &self,
        user: UpsertUser,
        profile: NewProfile,
        resume: NewResume,
    ) -> Result<(UserProfile, Resume), AppError>;
}

/// Fetches a résumé owned by `user_id`. A résumé owned by someone else is
/// reported exactly like a missing one.
pub async fn get_owned_resume(
    store: &dyn Store,
    id: &str,
    user_id: &str,
) -> Result<Resume, AppError> {
    store
        .get_resume(id)
        .await?
        .filter(|resume| resume.user_id == user_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
