//! Router assembly and the HTTP server loop.

use std::sync::Arc;

use axum::Json;
use axum::routing::{delete, get, post};
use craneboard_config::{AppConfig, PaginationConfig};
use craneboard_core::api::HealthResponse;
use craneboard_core::build_info;
use craneboard_store::Store;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::info;

use crate::routes::{companies, jobs, skills, technologies};

/// Broadcast payload asking the server to shut down.
#[derive(Debug, Clone)]
pub struct ShutdownSignal;

/// Shared state accessible to all route handlers.
pub struct ApiState {
    pub store: Store,
    pub pagination: PaginationConfig,
}

impl ApiState {
    pub fn new(store: Store, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }
}

/// Build the axum router with all API routes.
pub fn router(state: Arc<ApiState>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(handle_health))
        .route("/api/jobs", post(jobs::create))
        .route("/api/jobs/latest", get(jobs::latest))
        .route(
            "/api/jobs/{id}",
            get(jobs::detail).put(jobs::update).delete(jobs::remove),
        )
        .route(
            "/api/technologies",
            get(technologies::list).post(technologies::create),
        )
        .route("/api/technologies/all", get(technologies::all))
        .route("/api/technologies/{id}", delete(technologies::remove))
        .route("/api/company", get(companies::show).put(companies::upsert))
        .route("/api/company/jobs", get(jobs::company_jobs))
        .route("/api/skills", get(skills::list).put(skills::upsert))
        .route("/api/skills/{technology_id}", delete(skills::remove))
        .with_state(state)
}

/// Start the API server on the configured address.
///
/// Runs until the shutdown signal is received.
pub async fn serve(
    config: &AppConfig,
    store: Store,
    mut shutdown_rx: broadcast::Receiver<ShutdownSignal>,
) -> Result<(), std::io::Error> {
    let state = Arc::new(ApiState::new(store, config.pagination.clone()));
    let addr = format!(
        "{}:{}",
        config.server.listen_addr, config.server.listen_port
    );

    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "API server listening");

    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("API server shutting down");
        })
        .await?;

    Ok(())
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: build_info::VERSION.to_string(),
        git_hash: build_info::GIT_HASH.to_string(),
        build_profile: build_info::BUILD_PROFILE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use craneboard_core::api::{
        CreateTechnologyRequest, UpsertCompanyRequest, UpsertJobRequest, UpsertSkillRequest,
    };
    use craneboard_core::model::{CompanySize, JobLevel};
    use craneboard_test_utils::app::TestApp;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn company_req(name: &str) -> UpsertCompanyRequest {
        UpsertCompanyRequest {
            name: name.to_string(),
            size: CompanySize::Small,
            location: "Lisbon".to_string(),
            about: "We build cranes.".to_string(),
        }
    }

    fn job_req(technologies: Vec<String>) -> UpsertJobRequest {
        UpsertJobRequest {
            title: "Rust Engineer".to_string(),
            location: "Remote, EU".to_string(),
            salary: 9_500_000,
            description: "Own the backend.".to_string(),
            requirements: "Rust, SQL.".to_string(),
            remote: true,
            level: JobLevel::Senior,
            technologies,
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = TestApp::new().await;
        let (status, body) = app.get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_protected_routes_require_identity() {
        let app = TestApp::new().await;
        for path in ["/api/company", "/api/company/jobs", "/api/skills"] {
            let (status, body) = app.get(path).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
            assert!(body["error"].is_string(), "{path}");
        }
    }

    #[tokio::test]
    async fn test_company_upsert_and_fetch() {
        let app = TestApp::new().await;

        let (status, _) = app.get_as("u1", "/api/company").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, created) = app
            .send_json(Method::PUT, Some("u1"), "/api/company", &company_req("Crane Systems"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], "Crane Systems");
        assert_eq!(created["size"], "SMALL");

        let (status, fetched) = app.get_as("u1", "/api/company").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_company_upsert_rejects_blank_name() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send_json(Method::PUT, Some("u1"), "/api/company", &company_req("   "))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_technology_catalog_paging_includes_window() {
        let app = TestApp::new().await;
        for i in 0..25 {
            app.seed_technology(&format!("Tech {i}")).await;
        }

        let (status, body) = app.get("/api/technologies?page=2&limit=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 25);
        assert_eq!(body["pages"], 3);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
        assert_eq!(body["data"][0]["title"], "Tech 10");

        let window = &body["window"];
        assert_eq!(window["current"], 2);
        assert_eq!(window["prev"], 1);
        assert_eq!(window["next"], 3);
        assert_eq!(window["items"], json!([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_stale_page_yields_no_window() {
        let app = TestApp::new().await;
        app.seed_technology("Rust").await;

        let (status, body) = app.get("/api/technologies?page=7&limit=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pages"], 1);
        assert!(body["data"].as_array().unwrap().is_empty());
        assert!(body["window"].is_null());
    }

    #[tokio::test]
    async fn test_technology_create_generates_positional_slug() {
        let app = TestApp::new().await;
        let req = CreateTechnologyRequest {
            title: "Rust".to_string(),
        };
        let (status, body) = app
            .send_json(Method::POST, Some("u1"), "/api/technologies", &req)
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["slug"], "1-rust");

        let req = CreateTechnologyRequest {
            title: "Rust".to_string(),
        };
        let (_, second) = app
            .send_json(Method::POST, Some("u1"), "/api/technologies", &req)
            .await;
        assert_eq!(second["slug"], "2-rust");
    }

    #[tokio::test]
    async fn test_technologies_all_returns_catalog() {
        let app = TestApp::new().await;
        for title in ["Rust", "SQL", "Go"] {
            app.seed_technology(title).await;
        }

        let (status, body) = app.get("/api/technologies/all").await;
        assert_eq!(status, StatusCode::OK);
        let catalog = body.as_array().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0]["title"], "Rust");
        assert_eq!(catalog[2]["slug"], "3-go");
    }

    #[tokio::test]
    async fn test_latest_jobs_limit_defaults_and_clamps() {
        let app = TestApp::new().await;
        let company = app.seed_company("u1", "Crane Systems").await;
        let tech = app.seed_technology("Rust").await;
        for i in 0..5 {
            app.seed_job(&company.id, &format!("Job {i}"), std::slice::from_ref(&tech.id))
                .await;
        }

        // No limit param: the configured latest_jobs_limit applies
        let (status, body) = app.get("/api/jobs/latest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (_, body) = app.get("/api/jobs/latest?limit=2").await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        // Zero is clamped up to one result
        let (status, body) = app.get("/api/jobs/latest?limit=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_job_create_requires_company() {
        let app = TestApp::new().await;
        let tech = app.seed_technology("Rust").await;

        let (status, body) = app
            .send_json(Method::POST, Some("u1"), "/api/jobs", &job_req(vec![tech.id]))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("company"));
    }

    #[tokio::test]
    async fn test_job_create_rejects_unknown_technology() {
        let app = TestApp::new().await;
        app.seed_company("u1", "Crane Systems").await;

        let (status, body) = app
            .send_json(
                Method::POST,
                Some("u1"),
                "/api/jobs",
                &job_req(vec!["missing".to_string()]),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("technologies"));
    }

    #[tokio::test]
    async fn test_job_lifecycle() {
        let app = TestApp::new().await;
        app.seed_company("u1", "Crane Systems").await;
        let tech = app.seed_technology("Rust").await;

        // Create
        let (status, created) = app
            .send_json(
                Method::POST,
                Some("u1"),
                "/api/jobs",
                &job_req(vec![tech.id.clone()]),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["salary"], 9_500_000);
        let job_id = created["id"].as_str().unwrap().to_string();

        // Public detail page
        let (status, detail) = app.get(&format!("/api/jobs/{job_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["company"]["name"], "Crane Systems");
        assert_eq!(detail["technologies"][0]["title"], "Rust");

        // Latest jobs card
        let (status, latest) = app.get("/api/jobs/latest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(latest[0]["company"]["size"], "SMALL");

        // Dashboard list
        let (status, listed) = app.get_as("u1", "/api/company/jobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["count"], 1);
        assert_eq!(listed["data"][0]["technologies"][0]["id"], tech.id);

        // Update
        let mut updated_req = job_req(vec![tech.id.clone()]);
        updated_req.title = "Staff Rust Engineer".to_string();
        let (status, updated) = app
            .send_json(
                Method::PUT,
                Some("u1"),
                &format!("/api/jobs/{job_id}"),
                &updated_req,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Staff Rust Engineer");

        // Delete
        let (status, ack) = app
            .send_json(
                Method::DELETE,
                Some("u1"),
                &format!("/api/jobs/{job_id}"),
                &json!({}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["acknowledged"], true);

        let (status, _) = app.get(&format!("/api/jobs/{job_id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_list_pages_newest_first() {
        let app = TestApp::new().await;
        let company = app.seed_company("u1", "Crane Systems").await;
        let tech = app.seed_technology("Rust").await;
        for i in 0..12 {
            app.seed_job(&company.id, &format!("Job {i}"), std::slice::from_ref(&tech.id))
                .await;
        }

        let (status, body) = app.get_as("u1", "/api/company/jobs?page=2&limit=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 12);
        assert_eq!(body["pages"], 3);
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
        // Newest first, so page 2 starts at the 6th most recent posting.
        assert_eq!(body["data"][0]["title"], "Job 6");
        assert_eq!(body["window"]["current"], 2);
    }

    #[tokio::test]
    async fn test_job_edit_by_other_company_is_forbidden() {
        let app = TestApp::new().await;
        app.seed_company("u1", "Crane Systems").await;
        app.seed_company("u2", "Rival Corp").await;
        let tech = app.seed_technology("Rust").await;

        let (_, created) = app
            .send_json(
                Method::POST,
                Some("u1"),
                "/api/jobs",
                &job_req(vec![tech.id.clone()]),
            )
            .await;
        let job_id = created["id"].as_str().unwrap();

        let (status, _) = app
            .send_json(
                Method::PUT,
                Some("u2"),
                &format!("/api/jobs/{job_id}"),
                &job_req(vec![tech.id.clone()]),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app
            .send_json(
                Method::DELETE,
                Some("u2"),
                &format!("/api/jobs/{job_id}"),
                &json!({}),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_job_detail_is_404() {
        let app = TestApp::new().await;
        let (status, _) = app.get("/api/jobs/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_skill_registration_flow() {
        let app = TestApp::new().await;
        let tech = app.seed_technology("Rust").await;

        let req = UpsertSkillRequest {
            technology_id: tech.id.clone(),
            years: 3,
        };
        let (status, skill) = app
            .send_json(Method::PUT, Some("u1"), "/api/skills", &req)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(skill["years"], 3);

        let (status, skills) = app.get_as("u1", "/api/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(skills.as_array().unwrap().len(), 1);
        assert_eq!(skills[0]["technology"]["title"], "Rust");

        let (status, ack) = app
            .send_json(
                Method::DELETE,
                Some("u1"),
                &format!("/api/skills/{}", tech.id),
                &json!({}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["acknowledged"], true);

        let (_, skills) = app.get_as("u1", "/api/skills").await;
        assert!(skills.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_skill_rejects_unknown_technology() {
        let app = TestApp::new().await;
        let req = UpsertSkillRequest {
            technology_id: "missing".to_string(),
            years: 3,
        };
        let (status, _) = app
            .send_json(Method::PUT, Some("u1"), "/api/skills", &req)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
