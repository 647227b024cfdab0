use axum::{extract::State, Json};
use serde_json::Value;

use crate::web::AppState;

pub fn build_id() -> &'static str {
    option_env!("ROSTER_BUILD_ID").unwrap_or("dev")
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "build_id": build_id(),
        "activities": state.roster.len(),
    }))
}
