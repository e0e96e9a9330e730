use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Onboarding answers kept per user, one JSONB blob per sub-section.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub personal_info: Option<Value>,
    pub education: Option<Value>,
    pub experience: Option<Value>,
    pub projects: Option<Value>,
    pub skills: Option<Value>,
    pub languages: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub user_id: String,
    pub personal_info: Option<Value>,
    pub education: Option<Value>,
    pub experience: Option<Value>,
    pub projects: Option<Value>,
    pub skills: Option<Value>,
    pub languages: Option<Value>,
}
