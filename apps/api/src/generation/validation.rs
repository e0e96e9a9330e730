//! Field-level validation of the onboarding form and the job customization request.
//!
//! Every rule is checked so the client receives all failures at once.

use email_address::EmailAddress;
use serde::Deserialize;

use crate::errors::{AppError, FieldError};
use crate::generation::OnboardingInput;

/// Raw onboarding answers as collected from the multipart form.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub university: String,
    pub course: String,
    pub skills: String,
    pub relevant_project: String,
    pub has_existing_resume: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSpecificRequest {
    pub job_title: String,
    pub job_description: String,
    pub company_name: Option<String>,
}

/// Minimum lengths, counted in characters after trimming.
struct MinLength {
    field: &'static str,
    min: usize,
    message: &'static str,
}

const ONBOARDING_RULES: [MinLength; 5] = [
    MinLength {
        field: "fullName",
        min: 2,
        message: "Nome deve ter pelo menos 2 caracteres",
    },
    MinLength {
        field: "university",
        min: 2,
        message: "Universidade é obrigatória",
    },
    MinLength {
        field: "course",
        min: 2,
        message: "Curso é obrigatório",
    },
    MinLength {
        field: "skills",
        min: 10,
        message: "Descreva suas habilidades com pelo menos 10 caracteres",
    },
    MinLength {
        field: "relevantProject",
        min: 20,
        message: "Descreva seu projeto com pelo menos 20 caracteres",
    },
];

fn check_min(rule: &MinLength, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().chars().count() < rule.min {
        errors.push(FieldError::new(rule.field, rule.message));
    }
}

impl OnboardingForm {
    pub fn validate(self) -> Result<OnboardingInput, AppError> {
        let mut errors = Vec::new();

        let values = [
            &self.full_name,
            &self.university,
            &self.course,
            &self.skills,
            &self.relevant_project,
        ];
        for (rule, value) in ONBOARDING_RULES.iter().zip(values) {
            check_min(rule, value, &mut errors);
        }
        if !EmailAddress::is_valid(self.email.trim()) {
            errors.push(FieldError::new("email", "Email inválido"));
        }

        if !errors.is_empty() {
            return Err(AppError::InvalidFields(errors));
        }

        Ok(OnboardingInput {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            university: self.university.trim().to_string(),
            course: self.course.trim().to_string(),
            skills: self.skills.trim().to_string(),
            relevant_project: self.relevant_project.trim().to_string(),
        })
    }
}

impl JobSpecificRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        check_min(
            &MinLength {
                field: "jobDescription",
                min: 50,
                message: "Descrição da vaga deve ter pelo menos 50 caracteres",
            },
            &self.job_description,
            &mut errors,
        );
        check_min(
            &MinLength {
                field: "jobTitle",
                min: 2,
                message: "Título da vaga é obrigatório",
            },
            &self.job_title,
            &mut errors,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }

    /// Text handed to the generator: the description, prefixed by the company when known.
    pub fn tailoring_context(&self) -> String {
        match self.company_name.as_deref().map(str::trim) {
            Some(company) if !company.is_empty() => {
                format!("Empresa: {company}\n{}", self.job_description.trim())
            }
            _ => self.job_description.trim().to_string(),
        }
    }
}
