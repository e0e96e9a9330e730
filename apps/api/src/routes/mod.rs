pub mod account;
pub mod admin;
pub mod health;
pub mod resumes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/templates", get(render::handle_list_templates))
        // Account
        .route("/api/auth/user", get(account::handle_current_user))
        .route("/api/profile", get(account::handle_get_profile))
        // Generation
        .route("/api/onboarding", post(generation::handle_onboarding))
        .route(
            "/api/improvement-suggestions",
            get(generation::handle_improvement_suggestions),
        )
        .route(
            "/api/resumes/job-specific",
            post(generation::handle_job_specific),
        )
        // Résumés
        .route("/api/resumes", get(resumes::handle_list_resumes))
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get_resume)
                .patch(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/resumes/:id/generate-pdf",
            post(render::handle_generate_pdf),
        )
        // Admin
        .route("/api/admin/stats", get(admin::handle_admin_stats))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::testing::{issue_token, TEST_SECRET};
    use crate::auth::JwtVerifier;
    use crate::config::Config;
    use crate::generation::{ContentGenerator, GenerationError, OnboardingInput};
    use crate::models::resume::fixtures::full_resume;
    use crate::models::resume::{Education, PersonalInfo, Skills};
    use crate::models::{NewProfile, NewResume, Resume, ResumeData, UpsertUser, UserProfile};
    use crate::render::TemplateRegistry;
    use crate::storage::memory::MemoryStore;
    use crate::storage::Store;

    // ────────────────────────────────────────────────────────────────────────
    // Harness
    // ────────────────────────────────────────────────────────────────────────

    /// Deterministic generator that echoes the onboarding answers.
    struct FakeGenerator {
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn check(&self) -> Result<(), GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(GenerationError::EmptyResponse)
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for FakeGenerator {
        async fn generate(
            &self,
            input: &OnboardingInput,
            _job_description: Option<&str>,
        ) -> Result<ResumeData, GenerationError> {
            self.check()?;
            Ok(ResumeData {
                personal_info: PersonalInfo {
                    name: input.full_name.clone(),
                    email: input.email.clone(),
                    phone: input.phone.clone(),
                    ..Default::default()
                },
                summary: format!("Estudante de {}.", input.course),
                education: vec![Education {
                    institution: input.university.clone(),
                    degree: "Bacharelado".to_string(),
                    field: input.course.clone(),
                    graduation_year: None,
                    gpa: None,
                }],
                experience: vec![],
                projects: vec![],
                skills: Skills {
                    technical: input.skills.split(',').map(|s| s.trim().to_string()).collect(),
                    ..Default::default()
                },
            })
        }

        async fn tailor(
            &self,
            existing: &ResumeData,
            job_description: &str,
        ) -> Result<ResumeData, GenerationError> {
            self.check()?;
            let mut tailored = existing.clone();
            tailored.summary = format!("Perfil voltado para: {job_description}");
            Ok(tailored)
        }

        async fn suggest_improvements(
            &self,
            _profile: &UserProfile,
        ) -> Result<Vec<String>, GenerationError> {
            self.check()?;
            Ok(vec!["Publicar seus projetos no GitHub".to_string()])
        }
    }

    struct Harness {
        app: Router,
        store: Arc<MemoryStore>,
        generator: Arc<FakeGenerator>,
    }

    fn harness_with(fail: bool) -> Harness {
        let store = Arc::new(MemoryStore::new());
        let generator = Arc::new(FakeGenerator {
            fail,
            calls: AtomicUsize::new(0),
        });
        let state = AppState {
            store: store.clone(),
            generator: generator.clone(),
            templates: Arc::new(TemplateRegistry::with_builtin_templates()),
            auth: JwtVerifier::new(TEST_SECRET),
            config: Config::for_tests(TEST_SECRET),
        };
        Harness {
            app: build_router(state),
            store,
            generator,
        }
    }

    fn harness() -> Harness {
        harness_with(false)
    }

    fn bearer(user_id: &str) -> String {
        format!("Bearer {}", issue_token(TEST_SECRET, user_id, 3600))
    }

    impl Harness {
        async fn send(&self, request: Request<Body>) -> Response {
            self.app.clone().oneshot(request).await.unwrap()
        }

        async fn get(&self, uri: &str, user_id: Option<&str>) -> Response {
            let mut builder = Request::builder().method("GET").uri(uri);
            if let Some(user_id) = user_id {
                builder = builder.header(header::AUTHORIZATION, bearer(user_id));
            }
            self.send(builder.body(Body::empty()).unwrap()).await
        }

        async fn send_json(&self, method: &str, uri: &str, user_id: &str, body: Value) -> Response {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::AUTHORIZATION, bearer(user_id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();
            self.send(request).await
        }

        async fn delete(&self, uri: &str, user_id: &str) -> Response {
            let request = Request::builder()
                .method("DELETE")
                .uri(uri)
                .header(header::AUTHORIZATION, bearer(user_id))
                .body(Body::empty())
                .unwrap();
            self.send(request).await
        }

        async fn onboard(&self, user_id: &str, fields: &[(&str, &str)]) -> Response {
            let boundary = "curriculo-test-boundary";
            let mut body = String::new();
            for (name, value) in fields {
                body.push_str(&format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                ));
            }
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"existingResume\"; \
                 filename=\"antigo.pdf\"\r\nContent-Type: application/pdf\r\n\r\n%PDF-1.4 fake\r\n"
            ));
            body.push_str(&format!("--{boundary}--\r\n"));

            let request = Request::builder()
                .method("POST")
                .uri("/api/onboarding")
                .header(header::AUTHORIZATION, bearer(user_id))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap();
            self.send(request).await
        }

        async fn seed_resume(&self, user_id: &str, title: &str, is_job_specific: bool) -> Resume {
            self.store
                .create_resume(NewResume {
                    user_id: user_id.to_string(),
                    title: title.to_string(),
                    content: full_resume(),
                    template_id: "professional".to_string(),
                    is_job_specific,
                    job_description: None,
                })
                .await
                .unwrap()
        }
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    const VALID_ONBOARDING: [(&str, &str); 8] = [
        ("fullName", "Ana Maria Silva"),
        ("email", "ana@x.com"),
        ("phone", "+55 11 98888-7777"),
        ("university", "USP"),
        ("course", "Computação"),
        ("skills", "Python, SQL, Git"),
        ("relevantProject", "Sistema de recomendação de livros para a biblioteca"),
        ("hasExistingResume", "true"),
    ];

    const JOB_DESCRIPTION: &str =
        "Estágio em análise de dados com Python e SQL, construção de dashboards e relatórios.";

    // ────────────────────────────────────────────────────────────────────────
    // Public routes and authentication
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health_is_public() {
        let h = harness();
        let response = h.get("/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_templates_listed_without_auth() {
        let h = harness();
        let response = h.get("/api/templates", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["modern", "clean", "professional"]);
        assert!(body[0]["name"].is_string());
        assert!(body[0]["description"].is_string());
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let h = harness();
        let response = h.get("/api/resumes", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"]["code"], "UNAUTHORIZED");

        let request = Request::builder()
            .uri("/api/resumes")
            .header(header::AUTHORIZATION, "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap();
        assert_eq!(h.send(request).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_current_user_and_profile_before_onboarding() {
        let h = harness();
        assert_eq!(
            h.get("/api/auth/user", Some("u1")).await.status(),
            StatusCode::NOT_FOUND
        );

        let response = h.get("/api/profile", Some("u1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await.is_null());
    }

    // ────────────────────────────────────────────────────────────────────────
    // Onboarding
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_onboarding_creates_user_profile_and_general_resume() {
        let h = harness();
        let response = h.onboard("u1", &VALID_ONBOARDING).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["resume"]["title"], "Currículo Geral");
        assert_eq!(body["resume"]["templateId"], "modern");
        assert_eq!(body["resume"]["isJobSpecific"], false);
        assert_eq!(body["resume"]["content"]["personalInfo"]["email"], "ana@x.com");
        assert_eq!(
            body["profile"]["skills"]["technical"],
            json!(["Python", "SQL", "Git"])
        );
        assert_eq!(h.generator.calls(), 1);

        let user = body_json(h.get("/api/auth/user", Some("u1")).await).await;
        assert_eq!(user["firstName"], "Ana");
        assert_eq!(user["lastName"], "Maria Silva");
        assert_eq!(user["university"], "USP");
    }

    #[tokio::test]
    async fn test_repeated_onboarding_updates_profile_and_adds_resume() {
        let h = harness();
        assert_eq!(h.onboard("u1", &VALID_ONBOARDING).await.status(), StatusCode::OK);
        assert_eq!(h.onboard("u1", &VALID_ONBOARDING).await.status(), StatusCode::OK);

        assert_eq!(h.store.user_count(), 1);
        assert_eq!(h.store.profile_count(), 1);
        assert_eq!(h.store.resume_count(), 2);
    }

    #[tokio::test]
    async fn test_onboarding_validation_failure_persists_nothing() {
        let h = harness();
        let mut fields = VALID_ONBOARDING;
        fields[1] = ("email", "ana-sem-arroba");
        fields[5] = ("skills", "Python");

        let response = h.onboard("u1", &fields).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let invalid: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(invalid, vec!["skills", "email"]);

        assert_eq!(h.generator.calls(), 0);
        assert_eq!(h.store.user_count(), 0);
        assert_eq!(h.store.resume_count(), 0);
    }

    #[tokio::test]
    async fn test_onboarding_generation_failure_persists_nothing() {
        let h = harness_with(true);
        let response = h.onboard("u1", &VALID_ONBOARDING).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "GENERATION_ERROR");

        assert_eq!(h.generator.calls(), 1);
        assert_eq!(h.store.user_count(), 0);
        assert_eq!(h.store.profile_count(), 0);
        assert_eq!(h.store.resume_count(), 0);
    }

    #[tokio::test]
    async fn test_onboarding_store_failure_rolls_back_every_write() {
        let h = harness();
        h.store.reject_resume_inserts();

        let response = h.onboard("u1", &VALID_ONBOARDING).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(h.generator.calls(), 1);
        assert_eq!(h.store.user_count(), 0);
        assert_eq!(h.store.profile_count(), 0);
        assert_eq!(h.store.resume_count(), 0);
    }

    #[tokio::test]
    async fn test_onboarding_profile_uses_resume_field_names() {
        let h = harness();
        let body = body_json(h.onboard("u1", &VALID_ONBOARDING).await).await;

        assert_eq!(body["profile"]["education"][0]["field"], "Computação");
        assert_eq!(
            body["profile"]["projects"][0]["technologies"],
            json!(["Python", "SQL", "Git"])
        );
    }

    // ────────────────────────────────────────────────────────────────────────
    // Résumé CRUD
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_resumes_returns_only_own_most_recent_first() {
        let h = harness();
        h.seed_resume("u1", "Primeiro", false).await;
        h.seed_resume("u2", "Alheio", false).await;
        h.seed_resume("u1", "Segundo", true).await;

        let body = body_json(h.get("/api/resumes", Some("u1")).await).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Segundo", "Primeiro"]);
    }

    #[tokio::test]
    async fn test_get_resume_of_another_user_is_not_found() {
        let h = harness();
        let resume = h.seed_resume("u1", "Meu", false).await;
        let uri = format!("/api/resumes/{}", resume.id);

        assert_eq!(h.get(&uri, Some("u1")).await.status(), StatusCode::OK);
        assert_eq!(h.get(&uri, Some("u2")).await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_resume_owner_only() {
        let h = harness();
        let resume = h.seed_resume("u1", "Meu", false).await;
        let uri = format!("/api/resumes/{}", resume.id);

        assert_eq!(h.delete(&uri, "u2").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(h.store.resume_count(), 1);

        let response = h.delete(&uri, "u1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["message"].is_string());
        assert_eq!(h.get(&uri, Some("u1")).await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patch_resume_title_and_template() {
        let h = harness();
        let resume = h.seed_resume("u1", "Antigo", false).await;
        let uri = format!("/api/resumes/{}", resume.id);

        let response = h
            .send_json("PATCH", &uri, "u1", json!({ "title": " Novo ", "templateId": "clean" }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Novo");
        assert_eq!(body["templateId"], "clean");

        let response = h
            .send_json("PATCH", &uri, "u1", json!({ "templateId": "nonexistent" }))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "UNKNOWN_TEMPLATE");

        let response = h.send_json("PATCH", &uri, "u1", json!({ "title": "  " })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = h.send_json("PATCH", &uri, "u2", json!({ "title": "X" })).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ────────────────────────────────────────────────────────────────────────
    // PDF download
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_generate_pdf_returns_attachment() {
        let h = harness();
        let resume = h.seed_resume("u1", "Currículo Geral", false).await;
        let uri = format!("/api/resumes/{}/generate-pdf", resume.id);

        let response = h
            .send_json("POST", &uri, "u1", json!({ "templateId": "clean" }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment;"));
        assert!(disposition.contains("Curr%C3%ADculo%20Geral.pdf"));

        let pdf = body_bytes(response).await;
        assert!(pdf.starts_with(b"%PDF"));
        let text = pdf_extract::extract_text_from_mem(&pdf).unwrap();
        assert!(text.contains("BRUNO COSTA"));
    }

    #[tokio::test]
    async fn test_generate_pdf_without_body_uses_stored_template() {
        let h = harness();
        let resume = h.seed_resume("u1", "Meu", false).await;
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/resumes/{}/generate-pdf", resume.id))
            .header(header::AUTHORIZATION, bearer("u1"))
            .body(Body::empty())
            .unwrap();

        let response = h.send(request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let expected = TemplateRegistry::with_builtin_templates()
            .render(&resume.content.0, "professional")
            .unwrap();
        assert_eq!(body_bytes(response).await, expected);
    }

    #[tokio::test]
    async fn test_generate_pdf_rejects_malformed_body() {
        let h = harness();
        let resume = h.seed_resume("u1", "Meu", false).await;
        let uri = format!("/api/resumes/{}/generate-pdf", resume.id);

        let response = h.send_json("POST", &uri, "u1", json!({ "templateId": 5 })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");

        let request = Request::builder()
            .method("POST")
            .uri(&uri)
            .header(header::AUTHORIZATION, bearer("u1"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ \"templateId\": "))
            .unwrap();
        assert_eq!(h.send(request).await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_pdf_failures() {
        let h = harness();
        let resume = h.seed_resume("u1", "Meu", false).await;
        let uri = format!("/api/resumes/{}/generate-pdf", resume.id);

        let response = h.send_json("POST", &uri, "u2", json!({})).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = h
            .send_json("POST", &uri, "u1", json!({ "templateId": "nonexistent" }))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "UNKNOWN_TEMPLATE");
    }

    // ────────────────────────────────────────────────────────────────────────
    // Job-specific résumés
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_job_specific_requires_general_base() {
        let h = harness();
        let request = json!({ "jobTitle": "Analista de Dados", "jobDescription": JOB_DESCRIPTION });

        let response = h
            .send_json("POST", "/api/resumes/job-specific", "u1", request.clone())
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // A job-specific résumé never serves as a base.
        h.seed_resume("u1", "Vaga - Outra", true).await;
        let response = h
            .send_json("POST", "/api/resumes/job-specific", "u1", request)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(h.generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_job_specific_creates_new_tailored_resume() {
        let h = harness();
        let base = h.seed_resume("u1", "Currículo Geral", false).await;

        let response = h
            .send_json(
                "POST",
                "/api/resumes/job-specific",
                "u1",
                json!({
                    "jobTitle": "Analista de Dados",
                    "jobDescription": JOB_DESCRIPTION,
                    "companyName": "Acme"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Vaga - Analista de Dados");
        assert_eq!(body["isJobSpecific"], true);
        assert_eq!(body["templateId"], "professional");
        assert_eq!(body["jobDescription"], JOB_DESCRIPTION);
        assert_eq!(
            body["content"]["personalInfo"]["email"],
            base.content.0.personal_info.email
        );
        assert!(body["content"]["summary"]
            .as_str()
            .unwrap()
            .contains("Empresa: Acme"));
        assert_ne!(body["id"], json!(base.id));

        let stored_base = h.store.get_resume(&base.id).await.unwrap().unwrap();
        assert_eq!(stored_base.content.0, base.content.0);
        assert_eq!(h.store.resume_count(), 2);
    }

    #[tokio::test]
    async fn test_job_specific_validation() {
        let h = harness();
        h.seed_resume("u1", "Currículo Geral", false).await;

        let response = h
            .send_json(
                "POST",
                "/api/resumes/job-specific",
                "u1",
                json!({ "jobTitle": "D", "jobDescription": "curta" }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let fields = body_json(response).await["error"]["fields"].clone();
        assert_eq!(fields.as_array().unwrap().len(), 2);
        assert_eq!(h.generator.calls(), 0);
    }

    // ────────────────────────────────────────────────────────────────────────
    // Suggestions and admin
    // ────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_improvement_suggestions_need_profile() {
        let h = harness();
        assert_eq!(
            h.get("/api/improvement-suggestions", Some("u1")).await.status(),
            StatusCode::NOT_FOUND
        );

        h.store
            .create_profile(NewProfile {
                user_id: "u1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let response = h.get("/api/improvement-suggestions", Some("u1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["suggestions"],
            json!(["Publicar seus projetos no GitHub"])
        );
    }

    #[tokio::test]
    async fn test_admin_stats_require_admin_flag() {
        let h = harness();
        for id in ["u1", "admin"] {
            h.store
                .upsert_user(UpsertUser {
                    id: id.to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        h.seed_resume("u1", "Meu", false).await;

        assert_eq!(
            h.get("/api/admin/stats", Some("u1")).await.status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            h.get("/api/admin/stats", Some("ghost")).await.status(),
            StatusCode::FORBIDDEN
        );

        h.store.set_admin("admin");
        let response = h.get("/api/admin/stats", Some("admin")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["userCount"], 2);
        assert_eq!(body["resumeCount"], 1);
        assert_eq!(body["users"][0]["id"], "admin");
    }
}
