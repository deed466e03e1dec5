//! HTTP boundary adapter. Maps requests to commands/queries and errors to
//! status codes.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /health` - `{ "ok": true, "commands": [...], "queries": [...] }`.
//! - `GET /classes` - every class, in store order.
//! - `GET /classes/:id` - one class.
//! - `POST /classes` - body `{ "name": "..." }`, answers 201 with `Location`.
//! - `POST /users` - body `{ "name": "...", "email": "..." }`.
//!
//! Failures answer `{ "error": "<message>" }` with
//! [`ClazzError::status_code`]. Bodies and path segments that fail to
//! deserialize are `InvalidArgument` (400).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::app::App;
use crate::error::ClazzError;
use crate::handlers::{CreateClazz, GetAllClazzes, GetClazzById};
use crate::user::RegisterUser;

#[derive(Debug, Deserialize)]
pub struct CreateClazzRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
}

/// Build an axum `Router` backed by the given app.
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/classes", get(list_classes).post(create_class))
        .route("/classes/:id", get(get_class))
        .route("/users", post(register_user))
        .with_state(app)
}

/// Serve the app over HTTP until ctrl-c.
pub async fn serve(app: Arc<App>, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

impl IntoResponse for ClazzError {
    fn into_response(self) -> Response {
        if !self.is_recoverable() {
            error!(error = %self, "request failed");
        }
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ClazzError {
    fn from(rejection: JsonRejection) -> Self {
        ClazzError::invalid(rejection.body_text())
    }
}

impl From<PathRejection> for ClazzError {
    fn from(rejection: PathRejection) -> Self {
        ClazzError::invalid(rejection.body_text())
    }
}

async fn health_handler(State(app): State<Arc<App>>) -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "commands": app.commands().commands(),
        "queries": app.queries().queries(),
    }))
}

async fn list_classes(State(app): State<Arc<App>>) -> Result<Response, ClazzError> {
    let views = app.dispatch_query(GetAllClazzes)?;
    Ok(Json(views).into_response())
}

async fn get_class(
    State(app): State<Arc<App>>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Response, ClazzError> {
    let Path(id) = id?;
    let view = app.dispatch_query(GetClazzById::new(id))?;
    Ok(Json(view).into_response())
}

async fn create_class(
    State(app): State<Arc<App>>,
    request: Result<Json<CreateClazzRequest>, JsonRejection>,
) -> Result<Response, ClazzError> {
    let Json(request) = request?;
    let created = app.dispatch_command(CreateClazz { name: request.name })?;
    let location = format!("/classes/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

async fn register_user(
    State(app): State<Arc<App>>,
    request: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Response, ClazzError> {
    let Json(request) = request?;
    let registered = app.dispatch_command(RegisterUser::new(request.name, request.email))?;
    Ok(Json(registered).into_response())
}
