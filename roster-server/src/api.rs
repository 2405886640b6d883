use crate::{errors::ServerError, AppState, ServerResult};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, OriginalUri, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use roster_core::{create_user as create_user_record, User};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub users: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// GET / - service name, version and available endpoints
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "API de Gestión de Usuarios",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints { users: "/users" },
    })
}

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.store.list().await)
}

/// POST /users
///
/// The body is parsed leniently: anything that is not valid JSON is treated
/// as an empty object and rejected by validation. Bodies over the size limit
/// get a JSON 413.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<impl IntoResponse> {
    let body = parse_body(&body?);
    let user = create_user_record(&state.store, &body).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Catch-all for unknown paths and unsupported methods on known paths.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ServerError {
    let path = uri
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_else(|| uri.path());

    ServerError::not_found(method, path)
}

fn parse_body(bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => value,
        Err(e) => {
            if !bytes.is_empty() {
                tracing::debug!(%e, "Ignoring malformed request body");
            }
            Value::Object(Map::new())
        }
    }
}
