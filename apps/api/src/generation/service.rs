//! Content generation — produces and revises `ResumeData` through an LLM.
//!
//! `AppState` holds an `Arc<dyn ContentGenerator>`; the production backend is
//! `LlmContentGenerator` over any `TextCompletion`. Every operation makes a
//! single model call. A response that is empty, not JSON, or missing one of
//! `personalInfo`, `summary`, `skills` is a `GenerationError`, never a
//! partially-filled résumé.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::generation::prompts::{
    CAREER_ADVISOR_ROLE, GENERATE_PROMPT_TEMPLATE, JOB_SECTION_TEMPLATE, RESUME_JSON_SHAPE,
    RESUME_WRITER_ROLE, SUGGESTIONS_PROMPT_TEMPLATE, TAILOR_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{system_prompt, FACTUALITY_INSTRUCTION};
use crate::llm_client::{strip_json_fences, LlmError, TextCompletion};
use crate::models::{ResumeData, UserProfile};

const GENERATE_TEMPERATURE: f32 = 0.7;
const TAILOR_TEMPERATURE: f32 = 0.5;
const SUGGEST_TEMPERATURE: f32 = 0.8;

/// Top-level keys a résumé response must carry.
const REQUIRED_KEYS: [&str; 3] = ["personalInfo", "summary", "skills"];

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM returned an empty response")]
    EmptyResponse,

    #[error("LLM response is not valid résumé JSON: {0}")]
    Malformed(String),

    #[error("LLM response is missing required field '{0}'")]
    Incomplete(String),
}

/// Validated onboarding answers handed to `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingInput {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub university: String,
    pub course: String,
    pub skills: String,
    pub relevant_project: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Builds a full résumé from onboarding answers, optionally aimed at a job.
    async fn generate(
        &self,
        input: &OnboardingInput,
        job_description: Option<&str>,
    ) -> Result<ResumeData, GenerationError>;

    /// Derives a job-tailored résumé. Personal information is always the existing one's.
    async fn tailor(
        &self,
        existing: &ResumeData,
        job_description: &str,
    ) -> Result<ResumeData, GenerationError>;

    async fn suggest_improvements(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<String>, GenerationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmContentGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmContentGenerator {
    llm: Arc<dyn TextCompletion>,
}

impl LlmContentGenerator {
    pub fn new(llm: Arc<dyn TextCompletion>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(
        &self,
        input: &OnboardingInput,
        job_description: Option<&str>,
    ) -> Result<ResumeData, GenerationError> {
        let prompt = build_generate_prompt(input, job_description);
        let text = self
            .llm
            .complete_json(
                &system_prompt(RESUME_WRITER_ROLE),
                &prompt,
                GENERATE_TEMPERATURE,
            )
            .await?;

        let mut data = parse_resume(&text)?;
        backfill_identity(&mut data, input);
        ensure_identity(&data)?;
        debug!(
            "Generated résumé: {} education, {} projects",
            data.education.len(),
            data.projects.len()
        );
        Ok(data)
    }

    async fn tailor(
        &self,
        existing: &ResumeData,
        job_description: &str,
    ) -> Result<ResumeData, GenerationError> {
        let resume_json = serde_json::to_string_pretty(existing)
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;
        let prompt = fill_template(
            TAILOR_PROMPT_TEMPLATE,
            &[
                ("resume_json", &resume_json),
                ("job_description", job_description),
                ("factuality", FACTUALITY_INSTRUCTION),
                ("shape", RESUME_JSON_SHAPE),
            ],
        );

        let text = self
            .llm
            .complete_json(&system_prompt(RESUME_WRITER_ROLE), &prompt, TAILOR_TEMPERATURE)
            .await?;

        let mut tailored = parse_resume(&text)?;
        if tailored.personal_info != existing.personal_info {
            warn!("Tailored résumé altered personal info; restoring the original");
        }
        tailored.personal_info = existing.personal_info.clone();
        Ok(tailored)
    }

    async fn suggest_improvements(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<String>, GenerationError> {
        let profile_json = serde_json::to_string_pretty(&serde_json::json!({
            "personalInfo": profile.personal_info,
            "education": profile.education,
            "experience": profile.experience,
            "projects": profile.projects,
            "skills": profile.skills,
            "languages": profile.languages,
        }))
        .map_err(|e| GenerationError::Malformed(e.to_string()))?;
        let prompt = fill_template(SUGGESTIONS_PROMPT_TEMPLATE, &[("profile_json", &profile_json)]);

        let text = self
            .llm
            .complete_json(
                &system_prompt(CAREER_ADVISOR_ROLE),
                &prompt,
                SUGGEST_TEMPERATURE,
            )
            .await?;

        parse_suggestions(&text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt building and response parsing
// ────────────────────────────────────────────────────────────────────────────

fn build_generate_prompt(input: &OnboardingInput, job_description: Option<&str>) -> String {
    let job_section = job_description
        .map(|jd| fill_template(JOB_SECTION_TEMPLATE, &[("job_description", jd)]))
        .unwrap_or_default();

    fill_template(
        GENERATE_PROMPT_TEMPLATE,
        &[
            ("full_name", &input.full_name),
            ("email", &input.email),
            ("phone", input.phone.as_deref().unwrap_or("Não informado")),
            ("university", &input.university),
            ("course", &input.course),
            ("skills", &input.skills),
            ("relevant_project", &input.relevant_project),
            ("job_section", &job_section),
            ("factuality", FACTUALITY_INSTRUCTION),
            ("shape", RESUME_JSON_SHAPE),
        ],
    )
}

/// Substitutes `{key}` placeholders in a single pass.
///
/// Inserted values are never rescanned, so braces typed by the user come
/// through literally. Unknown `{...}` runs are left as they are.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });
        match hit {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parses a model reply into `ResumeData`, rejecting anything incomplete.
pub fn parse_resume(text: &str) -> Result<ResumeData, GenerationError> {
    let body = strip_json_fences(text);
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| GenerationError::Malformed("expected a JSON object".to_string()))?;

    for key in REQUIRED_KEYS {
        if object.get(key).map_or(true, Value::is_null) {
            return Err(GenerationError::Incomplete(key.to_string()));
        }
    }

    let data: ResumeData =
        serde_json::from_value(value).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    if data.summary.trim().is_empty() {
        return Err(GenerationError::Incomplete("summary".to_string()));
    }
    Ok(data)
}

/// Models occasionally drop the fields they were handed verbatim.
fn backfill_identity(data: &mut ResumeData, input: &OnboardingInput) {
    let info = &mut data.personal_info;
    if info.name.trim().is_empty() {
        info.name = input.full_name.clone();
    }
    if info.email.trim().is_empty() {
        info.email = input.email.clone();
    }
    if info.phone.as_deref().map_or(true, |p| p.trim().is_empty()) {
        info.phone = input.phone.clone();
    }
}

fn ensure_identity(data: &ResumeData) -> Result<(), GenerationError> {
    if data.personal_info.name.trim().is_empty() {
        return Err(GenerationError::Incomplete("personalInfo.name".to_string()));
    }
    if data.personal_info.email.trim().is_empty() {
        return Err(GenerationError::Incomplete("personalInfo.email".to_string()));
    }
    Ok(())
}

/// Accepts `{"suggestions": [...]}` or a bare array; anything else yields no suggestions.
pub fn parse_suggestions(text: &str) -> Result<Vec<String>, GenerationError> {
    let body = strip_json_fences(text);
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    let items = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("suggestions")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    };

    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}
