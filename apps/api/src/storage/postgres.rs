use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{NewProfile, NewResume, Resume, ResumeUpdate, UpsertUser, User, UserProfile};
use crate::storage::Store;

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn upsert_user(&self, user: UpsertUser) -> Result<User, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(upsert_user_on(&mut conn, &user).await?)
    }

    async fn list_users(&self, limit: i64) -> Result<Vec<User>, AppError> {
        let users =
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create_resume(&self, resume: NewResume) -> Result<Resume, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(insert_resume_on(&mut conn, &resume).await?)
    }

    async fn get_resume(&self, id: &str) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(resume)
    }

    async fn list_resumes_by_user(&self, user_id: &str) -> Result<Vec<Resume>, AppError> {
        let resumes = sqlx::query_as::<_, Resume>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(resumes)
    }

    async fn update_resume(
        &self,
        id: &str,
        update: ResumeUpdate,
    ) -> Result<Option<Resume>, AppError> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            UPDATE resumes SET
                title       = COALESCE($2, title),
                template_id = COALESCE($3, template_id),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.template_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resume)
    }

    async fn delete_resume(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_resumes(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<UserProfile, AppError> {
        let row = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles
                (id, user_id, personal_info, education, experience, projects, skills, languages)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&profile.user_id)
        .bind(&profile.personal_info)
        .bind(&profile.education)
        .bind(&profile.experience)
        .bind(&profile.projects)
        .bind(&profile.skills)
        .bind(&profile.languages)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, AppError> {
        let profile =
            sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    async fn update_profile(&self, profile: NewProfile) -> Result<Option<UserProfile>, AppError> {
        let row = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE user_profiles SET
                personal_info = $2,
                education     = $3,
                experience    = $4,
                projects      = $5,
                skills        = $6,
                languages     = $7,
                updated_at    = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.personal_info)
        .bind(&profile.education)
        .bind(&profile.experience)
        .bind(&profile.projects)
        .bind(&profile.skills)
        .bind(&profile.languages)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn complete_onboarding(
        &self,
        user: UpsertUser,
        profile: NewProfile,
        resume: NewResume,
    ) -> Result<(UserProfile, Resume), AppError> {
        let mut tx = self.pool.begin().await?;

        upsert_user_on(&mut tx, &user).await?;
        let profile = upsert_profile_on(&mut tx, &profile).await?;
        let resume = insert_resume_on(&mut tx, &resume).await?;

        tx.commit().await?;
        Ok((profile, resume))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Statements shared by single writes and the onboarding transaction
// ────────────────────────────────────────────────────────────────────────────

async fn upsert_user_on(conn: &mut PgConnection, user: &UpsertUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, first_name, last_name, university, course, skills)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (id) DO UPDATE SET
            email      = COALESCE(EXCLUDED.email, users.email),
            first_name = COALESCE(EXCLUDED.first_name, users.first_name),
            last_name  = COALESCE(EXCLUDED.last_name, users.last_name),
            university = COALESCE(EXCLUDED.university, users.university),
            course     = COALESCE(EXCLUDED.course, users.course),
            skills     = COALESCE(EXCLUDED.skills, users.skills),
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.university)
    .bind(&user.course)
    .bind(&user.skills)
    .fetch_one(&mut *conn)
    .await
}

async fn insert_resume_on(
    conn: &mut PgConnection,
    resume: &NewResume,
) -> Result<Resume, sqlx::Error> {
    sqlx::query_as::<_, Resume>(
        r#"
        INSERT INTO resumes (id, user_id, title, content, template_id, is_job_specific, job_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&resume.user_id)
    .bind(&resume.title)
    .bind(Json(&resume.content))
    .bind(&resume.template_id)
    .bind(resume.is_job_specific)
    .bind(&resume.job_description)
    .fetch_one(&mut *conn)
    .await
}

/// One profile per user: a second onboarding replaces the stored snapshot.
async fn upsert_profile_on(
    conn: &mut PgConnection,
    profile: &NewProfile,
) -> Result<UserProfile, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        r#"
        INSERT INTO user_profiles
            (id, user_id, personal_info, education, experience, projects, skills, languages)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            personal_info = EXCLUDED.personal_info,
            education     = EXCLUDED.education,
            experience    = EXCLUDED.experience,
            projects      = EXCLUDED.projects,
            skills        = EXCLUDED.skills,
            languages     = EXCLUDED.languages,
            updated_at    = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&profile.user_id)
    .bind(&profile.personal_info)
    .bind(&profile.education)
    .bind(&profile.experience)
    .bind(&profile.projects)
    .bind(&profile.skills)
    .bind(&profile.languages)
    .fetch_one(&mut *conn)
    .await
}
