// Résumé content generation: onboarding answers → ResumeData, job tailoring,
// improvement suggestions. All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;
pub mod validation;

pub use service::{ContentGenerator, GenerationError, LlmContentGenerator, OnboardingInput};
