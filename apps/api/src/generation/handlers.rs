//! Axum route handlers for onboarding, job-specific résumés and suggestions.

use axum::{
    extract::{multipart::Field, rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::generation::validation::{JobSpecificRequest, OnboardingForm};
use crate::generation::OnboardingInput;
use crate::models::{NewProfile, NewResume, Resume, UpsertUser, UserProfile};
use crate::state::AppState;

pub const GENERAL_RESUME_TITLE: &str = "Currículo Geral";
pub const DEFAULT_TEMPLATE_ID: &str = "modern";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub message: String,
    pub profile: UserProfile,
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/onboarding
///
/// Validates the questionnaire, generates the general résumé, then persists
/// user, profile and résumé in one store transaction. Generation runs before
/// any write, so a failed generation leaves the store untouched.
pub async fn handle_onboarding(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Json<OnboardingResponse>, AppError> {
    let form = read_onboarding_form(multipart).await?;
    let has_existing_resume = form.has_existing_resume;
    let input = form.validate()?;

    let content = state.generator.generate(&input, None).await?;

    let (first_name, last_name) = UpsertUser::split_full_name(&input.full_name);
    let user = UpsertUser {
        id: auth.user_id.clone(),
        email: Some(input.email.clone()),
        first_name,
        last_name,
        university: Some(input.university.clone()),
        course: Some(input.course.clone()),
        skills: Some(input.skills.clone()),
    };
    let resume = NewResume {
        user_id: auth.user_id.clone(),
        title: GENERAL_RESUME_TITLE.to_string(),
        content,
        template_id: DEFAULT_TEMPLATE_ID.to_string(),
        is_job_specific: false,
        job_description: None,
    };

    let (profile, resume) = state
        .store
        .complete_onboarding(user, profile_from_input(&auth.user_id, &input), resume)
        .await?;

    info!(
        "Onboarding completed for user {} (résumé {}, existing upload: {})",
        auth.user_id, resume.id, has_existing_resume
    );

    Ok(Json(OnboardingResponse {
        message: "Currículo gerado com sucesso".to_string(),
        profile,
        resume,
    }))
}

/// POST /api/resumes/job-specific
///
/// Tailors the most recent general résumé to a job and stores the result as
/// a new record. The base résumé is left untouched.
pub async fn handle_job_specific(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<JobSpecificRequest>, JsonRejection>,
) -> Result<Json<Resume>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    request.validate()?;

    let base = state
        .store
        .list_resumes_by_user(&auth.user_id)
        .await?
        .into_iter()
        .find(|r| !r.is_job_specific)
        .ok_or_else(|| {
            AppError::Validation(
                "Nenhum currículo base encontrado. Complete o onboarding primeiro.".to_string(),
            )
        })?;

    let job_description = request.tailoring_context();
    let content = state
        .generator
        .tailor(&base.content.0, &job_description)
        .await?;

    let resume = state
        .store
        .create_resume(NewResume {
            user_id: auth.user_id.clone(),
            title: format!("Vaga - {}", request.job_title.trim()),
            content,
            template_id: base.template_id.clone(),
            is_job_specific: true,
            job_description: Some(request.job_description.trim().to_string()),
        })
        .await?;

    info!(
        "Created job-specific résumé {} from base {} for user {}",
        resume.id, base.id, auth.user_id
    );
    Ok(Json(resume))
}

/// GET /api/improvement-suggestions
pub async fn handle_improvement_suggestions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let profile = state
        .store
        .get_profile(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Perfil não encontrado".to_string()))?;

    let suggestions = state.generator.suggest_improvements(&profile).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_onboarding_form(mut multipart: Multipart) -> Result<OnboardingForm, AppError> {
    let mut form = OnboardingForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "existingResume" {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;
            info!("Received existing résumé upload ({} bytes)", bytes.len());
            continue;
        }

        let value = field_text(field).await?;
        match name.as_str() {
            "fullName" => form.full_name = value,
            "email" => form.email = value,
            "phone" => form.phone = Some(value),
            "university" => form.university = value,
            "course" => form.course = value,
            "skills" => form.skills = value,
            "relevantProject" => form.relevant_project = value,
            "hasExistingResume" => form.has_existing_resume = value.trim() == "true",
            _ => {}
        }
    }

    Ok(form)
}

async fn field_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form field: {e}")))
}

/// Profile snapshot of the onboarding answers.
fn profile_from_input(user_id: &str, input: &OnboardingInput) -> NewProfile {
    let technical: Vec<&str> = input
        .skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    NewProfile {
        user_id: user_id.to_string(),
        personal_info: Some(json!({
            "fullName": input.full_name,
            "email": input.email,
            "phone": input.phone,
        })),
        education: Some(json!([{
            "institution": input.university,
            "degree": "Graduação",
            "field": input.course,
        }])),
        experience: Some(Value::Array(vec![])),
        projects: Some(json!([{
            "name": "Projeto Relevante",
            "description": input.relevant_project,
            "technologies": technical,
        }])),
        skills: Some(json!({ "technical": technical })),
        languages: None,
    }
}
