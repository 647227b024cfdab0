pub mod error;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::RosterStore;
use routes::{activities, health};

/// Shared request state. The roster is the only mutable state in the process.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
}

impl AppState {
    pub fn new(roster: RosterStore) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity/participants",
            delete(activities::remove_participant_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
