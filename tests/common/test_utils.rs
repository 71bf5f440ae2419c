#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use placement_manager::{
    auth::jwt::JwtService,
    entities::token::AuthResponse,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment, LogFormat},
    AppState,
};
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::{net::TcpListener, sync::Arc, time::Duration};
use uuid::Uuid;

use super::memory_repos::MemoryStore;

pub const PASSWORD: &str = "secret";

pub struct TestApp {
    pub state: Arc<AppState>,
    pub store: MemoryStore,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(test_config()).await
    }

    /// Real HTTP server on an ephemeral port, backed by in-memory tables.
    pub async fn spawn_with_config(config: AppConfig) -> Self {
        let store = MemoryStore::new();
        let state = Arc::new(AppState::from_repositories(
            store.repositories(),
            Arc::new(JwtService::new(&config)),
        ));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state_clone = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(AuthMiddleware)
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        actix_rt::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/health", address)).send().await.is_err() {
            actix_rt::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            store,
            address,
            client,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET")
    }

    pub async fn get_authed(&self, path: &str, token: &str) -> Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to send GET")
    }

    pub async fn patch_json(&self, path: &str, body: &Value, token: Option<&str>) -> Response {
        let mut request = self.client.patch(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to send PATCH")
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.client.delete(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to send DELETE")
    }

    /// Registers a student with a unique email and returns the created JSON.
    pub async fn create_student(&self, full_name: &str) -> Value {
        let body = json!({
            "full_name": full_name,
            "email": format!("{}@konoha.com", Uuid::new_v4()),
            "major": "Ninjutsu",
            "password": PASSWORD,
        });
        let response = self.post_json("/api/students", &body).await;
        assert_eq!(response.status(), 201, "student creation failed");
        response.json().await.unwrap()
    }

    pub async fn create_employer(&self, name: &str) -> Value {
        let response = self
            .post_json("/api/employers", &json!({ "name": name, "industry": "Technology" }))
            .await;
        assert_eq!(response.status(), 201, "employer creation failed");
        response.json().await.unwrap()
    }

    pub async fn create_mentor(&self, full_name: &str) -> Value {
        let body = json!({
            "full_name": full_name,
            "email": format!("{}@konoha.com", Uuid::new_v4()),
            "field": "Ninjutsu",
        });
        let response = self.post_json("/api/mentors", &body).await;
        assert_eq!(response.status(), 201, "mentor creation failed");
        response.json().await.unwrap()
    }

    pub async fn create_placement(&self, student_id: i64, employer_id: i64, mentor_id: i64) -> Value {
        let response = self
            .post_json("/api/placements", &placement_body(student_id, employer_id, mentor_id))
            .await;
        assert_eq!(response.status(), 201, "placement creation failed");
        response.json().await.unwrap()
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthResponse {
        let response = self
            .post_json("/api/auth/login", &json!({ "email": email, "password": password }))
            .await;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            panic!("Login failed: ({}): {}", status, body);
        }

        response.json().await.expect("Failed to parse login response")
    }

    /// Creates a student and logs them in; returns (student id, access token).
    pub async fn logged_in_student(&self, full_name: &str) -> (i64, String) {
        let student = self.create_student(full_name).await;
        let email = student["email"].as_str().unwrap().to_string();
        let auth = self.login(&email, PASSWORD).await;
        (student["id"].as_i64().unwrap(), auth.access_token)
    }
}

pub fn placement_body(student_id: i64, employer_id: i64, mentor_id: i64) -> Value {
    json!({
        "student_id": student_id,
        "employer_id": employer_id,
        "mentor_id": mentor_id,
        "job_title": "Summer Internship",
        "start_date": "2024-06-01",
        "end_date": "2024-08-31",
    })
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Placement API Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://localhost/placements_test".into(),
        db_max_connections: 1,
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".into(),
        jwt_expiration_minutes: 5,
        seed_sample_data: false,
        log_format: LogFormat::Pretty,
    }
}
