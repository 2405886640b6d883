pub mod api;
pub mod config;
pub mod errors;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use roster_core::UserStore;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use errors::{ServerError, ServerResult};

#[derive(Clone, Default)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: UserStore) -> Self {
        Self { store }
    }
}

/// Builds the full application router.
///
/// Unsupported methods on known paths fall through to the 404 handler
/// instead of axum's default 405.
pub fn router(state: Arc<AppState>) -> Router {
    router_with(state, Router::new())
}

/// Same as [`router`], with `extra` routes mounted inside the tracing and
/// panic layers.
pub fn router_with(state: Arc<AppState>, extra: Router<Arc<AppState>>) -> Router {
    routes()
        .merge(extra)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .with_state(state)
}

fn routes() -> Router<Arc<AppState>> {
    let users = with_not_found(get(api::list_users).post(api::create_user));

    Router::new()
        .route("/", with_not_found(get(api::root)))
        .route("/users", users.clone())
        .route("/users/", users)
        .fallback(api::not_found)
}

fn with_not_found(route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    route.fallback(api::not_found)
}
