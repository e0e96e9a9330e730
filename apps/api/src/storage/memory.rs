//! In-memory `Store` used by router and handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;

use crate::errors::AppError;
use crate::models::{NewProfile, NewResume, Resume, ResumeUpdate, UpsertUser, User, UserProfile};
use crate::storage::Store;

#[derive(Default, Clone)]
struct Tables {
    // Insertion order; "most recent first" iterates in reverse.
    users: Vec<User>,
    resumes: Vec<Resume>,
    profiles: Vec<UserProfile>,
    next_id: u64,
    reject_resumes: bool,
}

impl Tables {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn upsert_user(&mut self, user: UpsertUser) -> User {
        let now = Utc::now();

        if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
            existing.email = user.email.or(existing.email.take());
            existing.first_name = user.first_name.or(existing.first_name.take());
            existing.last_name = user.last_name.or(existing.last_name.take());
            existing.university = user.university.or(existing.university.take());
            existing.course = user.course.or(existing.course.take());
            existing.skills = user.skills.or(existing.skills.take());
            existing.updated_at = now;
            return existing.clone();
        }

        let row = User {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_image_url: None,
            university: user.university,
            course: user.course,
            skills: user.skills,
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        self.users.push(row.clone());
        row
    }

    fn insert_resume(&mut self, resume: NewResume) -> Result<Resume, AppError> {
        if self.reject_resumes {
            return Err(AppError::Internal(anyhow::anyhow!("resume insert rejected")));
        }
        let now = Utc::now();
        let row = Resume {
            id: self.next_id("resume"),
            user_id: resume.user_id,
            title: resume.title,
            content: Json(resume.content),
            template_id: resume.template_id,
            is_job_specific: resume.is_job_specific,
            job_description: resume.job_description,
            pdf_url: None,
            created_at: now,
            updated_at: now,
        };
        self.resumes.push(row.clone());
        Ok(row)
    }

    fn insert_profile(&mut self, profile: NewProfile) -> UserProfile {
        let now = Utc::now();
        let row = UserProfile {
            id: self.next_id("profile"),
            user_id: profile.user_id,
            personal_info: profile.personal_info,
            education: profile.education,
            experience: profile.experience,
            projects: profile.projects,
            skills: profile.skills,
            languages: profile.languages,
            created_at: now,
            updated_at: now,
        };
        self.profiles.push(row.clone());
        row
    }

    fn update_profile(&mut self, profile: NewProfile) -> Option<UserProfile> {
        self.profiles
            .iter_mut()
            .find(|p| p.user_id == profile.user_id)
            .map(|p| {
                p.personal_info = profile.personal_info;
                p.education = profile.education;
                p.experience = profile.experience;
                p.projects = profile.projects;
                p.skills = profile.skills;
                p.languages = profile.languages;
                p.updated_at = Utc::now();
                p.clone()
            })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_admin(&self, user_id: &str) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == user_id) {
            user.is_admin = true;
        }
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn resume_count(&self) -> usize {
        self.tables.lock().unwrap().resumes.len()
    }

    pub fn profile_count(&self) -> usize {
        self.tables.lock().unwrap().profiles.len()
    }

    /// Makes every later résumé insert fail, to exercise rollback paths.
    pub fn reject_resume_inserts(&self) {
        self.tables.lock().unwrap().reject_resumes = true;
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn upsert_user(&self, user: UpsertUser) -> Result<User, AppError> {
        Ok(self.tables.lock().unwrap().upsert_user(user))
    }

    async fn list_users(&self, limit: i64) -> Result<Vec<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(tables.users.iter().rev().take(limit).cloned().collect())
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().users.len() as i64)
    }

    async fn create_resume(&self, resume: NewResume) -> Result<Resume, AppError> {
        self.tables.lock().unwrap().insert_resume(resume)
    }

    async fn get_resume(&self, id: &str) -> Result<Option<Resume>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_resumes_by_user(&self, user_id: &str) -> Result<Vec<Resume>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .resumes
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_resume(
        &self,
        id: &str,
        update: ResumeUpdate,
    ) -> Result<Option<Resume>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.resumes.iter_mut().find(|r| r.id == id).map(|r| {
            if let Some(title) = update.title {
                r.title = title;
            }
            if let Some(template_id) = update.template_id {
                r.template_id = template_id;
            }
            r.updated_at = Utc::now();
            r.clone()
        }))
    }

    async fn delete_resume(&self, id: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.resumes.len();
        tables.resumes.retain(|r| r.id != id);
        Ok(tables.resumes.len() < before)
    }

    async fn count_resumes(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().resumes.len() as i64)
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<UserProfile, AppError> {
        Ok(self.tables.lock().unwrap().insert_profile(profile))
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn update_profile(&self, profile: NewProfile) -> Result<Option<UserProfile>, AppError> {
        Ok(self.tables.lock().unwrap().update_profile(profile))
    }

    async fn complete_onboarding(
        &self,
        user: UpsertUser,
        profile: NewProfile,
        resume: NewResume,
    ) -> Result<(UserProfile, Resume), AppError> {
        let mut tables = self.tables.lock().unwrap();
        // Work on a copy and swap it in only once every write succeeded.
        let mut staged = tables.clone();

        staged.upsert_user(user);
        let profile = match staged.update_profile(profile.clone()) {
            Some(updated) => updated,
            None => staged.insert_profile(profile),
        };
        let resume = staged.insert_resume(resume)?;

        *tables = staged;
        Ok((profile, resume))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::minimal_resume;
    use crate::storage::get_owned_resume;

    fn new_resume(user_id: &str, title: &str) -> NewResume {
        NewResume {
            user_id: user_id.to_string(),
            title: title.to_string(),
            content: minimal_resume(),
            template_id: "modern".to_string(),
            is_job_specific: false,
            job_description: None,
        }
    }

    #[tokio::test]
    async fn test_resumes_listed_most_recent_first() {
        let store = MemoryStore::new();
        store.create_resume(new_resume("u1", "Primeiro")).await.unwrap();
        store.create_resume(new_resume("u2", "Outro")).await.unwrap();
        store.create_resume(new_resume("u1", "Segundo")).await.unwrap();

        let titles: Vec<_> = store
            .list_resumes_by_user("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Segundo", "Primeiro"]);
    }

    #[tokio::test]
    async fn test_upsert_keeps_fields_not_supplied() {
        let store = MemoryStore::new();
        store
            .upsert_user(UpsertUser {
                id: "u1".to_string(),
                email: Some("ana@x.com".to_string()),
                university: Some("USP".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let user = store
            .upsert_user(UpsertUser {
                id: "u1".to_string(),
                course: Some("Computação".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(user.email.as_deref(), Some("ana@x.com"));
        assert_eq!(user.university.as_deref(), Some("USP"));
        assert_eq!(user.course.as_deref(), Some("Computação"));
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_owned_resume_hides_other_users_rows() {
        let store = MemoryStore::new();
        let resume = store.create_resume(new_resume("u1", "Meu")).await.unwrap();

        assert!(get_owned_resume(&store, &resume.id, "u1").await.is_ok());
        assert!(matches!(
            get_owned_resume(&store, &resume.id, "u2").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            get_owned_resume(&store, "missing", "u1").await,
            Err(AppError::NotFound(_))
        ));
    }

    fn onboarding_user(user_id: &str) -> UpsertUser {
        UpsertUser {
            id: user_id.to_string(),
            email: Some("ana@x.com".to_string()),
            ..Default::default()
        }
    }

    fn onboarding_profile(user_id: &str, course: &str) -> NewProfile {
        NewProfile {
            user_id: user_id.to_string(),
            education: Some(serde_json::json!([{ "field": course }])),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_complete_onboarding_replaces_profile() {
        let store = MemoryStore::new();
        store
            .complete_onboarding(
                onboarding_user("u1"),
                onboarding_profile("u1", "Computação"),
                new_resume("u1", "Currículo Geral"),
            )
            .await
            .unwrap();
        let (profile, resume) = store
            .complete_onboarding(
                onboarding_user("u1"),
                onboarding_profile("u1", "Engenharia"),
                new_resume("u1", "Currículo Geral"),
            )
            .await
            .unwrap();

        assert_eq!(profile.education.unwrap()[0]["field"], "Engenharia");
        assert_eq!(resume.user_id, "u1");
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.profile_count(), 1);
        assert_eq!(store.resume_count(), 2);
    }

    #[tokio::test]
    async fn test_complete_onboarding_is_all_or_nothing() {
        let store = MemoryStore::new();
        store.reject_resume_inserts();

        let result = store
            .complete_onboarding(
                onboarding_user("u1"),
                onboarding_profile("u1", "Computação"),
                new_resume("u1", "Currículo Geral"),
            )
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(store.user_count(), 0);
        assert_eq!(store.profile_count(), 0);
        assert_eq!(store.resume_count(), 0);
    }

    #[tokio::test]
    async fn test_update_and_delete_resume() {
        let store = MemoryStore::new();
        let resume = store.create_resume(new_resume("u1", "Antigo")).await.unwrap();

        let updated = store
            .update_resume(
                &resume.id,
                ResumeUpdate {
                    title: Some("Novo".to_string()),
                    template_id: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Novo");
        assert_eq!(updated.template_id, "modern");

        assert!(store.delete_resume(&resume.id).await.unwrap());
        assert!(!store.delete_resume(&resume.id).await.unwrap());
        assert_eq!(store.resume_count(), 0);
    }
}
