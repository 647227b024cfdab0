use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::models::ActivityView;
use crate::services::roster_service::{self, RosterReceipt};
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    fn required(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
        let Query(query) = query.map_err(|e| {
            warn!(error = %e, "email_query_rejected");
            ApiError::InvalidQuery
        })?;
        match query.email {
            Some(email) if !email.trim().is_empty() => Ok(email),
            _ => Err(ApiError::MissingEmail),
        }
    }
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, ActivityView>> {
    Json(roster_service::list_activities(&state.roster))
}

pub async fn signup_handler(
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<RosterReceipt>, ApiError> {
    let email = EmailQuery::required(query)?;
    let receipt = roster_service::signup(&state.roster, &activity, &email)?;
    Ok(Json(receipt))
}

pub async fn remove_participant_handler(
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<RosterReceipt>, ApiError> {
    let email = EmailQuery::required(query)?;
    let receipt = roster_service::remove_participant(&state.roster, &activity, &email)?;
    Ok(Json(receipt))
}
