#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::employee::repository::memory::InMemoryEmployeeRepository;

pub fn cors() -> CorsLayer { CorsLayer::very_permissive() }

/// Router over a fresh in-memory store; the store is returned for inspection.
pub fn memory_app() -> (Arc<InMemoryEmployeeRepository>, Router) {
    let repo = Arc::new(InMemoryEmployeeRepository::default());
    let app = routes::build_router(ServerState::new(repo.clone()), cors());
    (repo, app)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<Response<Body>> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    Ok(app.clone().oneshot(req).await?)
}

pub async fn json_body(resp: Response<Body>) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub struct TestApp {
    pub base_url: String,
}

/// Serve `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}
