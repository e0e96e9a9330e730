use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record. `id` is the identity provider's subject claim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub university: Option<String>,
    pub course: Option<String>,
    pub skills: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert-or-update payload. `is_admin` is never set from the request path.
#[derive(Debug, Clone, Default)]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub university: Option<String>,
    pub course: Option<String>,
    pub skills: Option<String>,
}

impl UpsertUser {
    /// Splits a full name into first name and the remaining words.
    pub fn split_full_name(full_name: &str) -> (Option<String>, Option<String>) {
        let mut parts = full_name.split_whitespace();
        let first = parts.next().map(str::to_string);
        let rest = parts.collect::<Vec<_>>().join(" ");
        let last = if rest.is_empty() { None } else { Some(rest) };
        (first, last)
    }
}
