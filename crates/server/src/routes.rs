use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::employee::{repository::EmployeeRepository, EmployeeService};

use crate::openapi::ApiDoc;

pub mod employees;

/// Shared handler state. The caller picks the store; handlers only see the service.
#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<EmployeeService<dyn EmployeeRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API document and employee routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes (health + API document)
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Employee CRUD, backed by the service in state
    let api = Router::new()
        .route(
            "/api/empleados",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/api/empleados/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .with_state(state);

    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每个请求一个 span，记录方法与路径
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求进入时记录
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应时记录状态码和耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx 以 ERROR 级别记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
