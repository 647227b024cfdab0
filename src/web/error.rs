use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::database::RosterError;

pub const DETAIL_ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const DETAIL_ALREADY_SIGNED_UP: &str = "Student already signed up for this activity";
pub const DETAIL_PARTICIPANT_NOT_FOUND: &str = "Participant not found for this activity";
pub const DETAIL_MISSING_EMAIL: &str = "Missing email query parameter";
pub const DETAIL_INVALID_QUERY: &str = "Invalid query string";

#[derive(Debug)]
pub enum ApiError {
    Roster(RosterError),
    MissingEmail,
    InvalidQuery,
}

impl ApiError {
    pub fn status_and_detail(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Roster(RosterError::ActivityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, DETAIL_ACTIVITY_NOT_FOUND)
            }
            ApiError::Roster(RosterError::ParticipantAlreadyExists { .. }) => {
                (StatusCode::BAD_REQUEST, DETAIL_ALREADY_SIGNED_UP)
            }
            ApiError::Roster(RosterError::ParticipantNotFound { .. }) => {
                (StatusCode::NOT_FOUND, DETAIL_PARTICIPANT_NOT_FOUND)
            }
            ApiError::MissingEmail => (StatusCode::UNPROCESSABLE_ENTITY, DETAIL_MISSING_EMAIL),
            ApiError::InvalidQuery => (StatusCode::UNPROCESSABLE_ENTITY, DETAIL_INVALID_QUERY),
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError::Roster(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_status_and_detail() {
        let cases = [
            (
                RosterError::ActivityNotFound {
                    activity: "X".into(),
                },
                StatusCode::NOT_FOUND,
                DETAIL_ACTIVITY_NOT_FOUND,
            ),
            (
                RosterError::ParticipantAlreadyExists {
                    activity: "X".into(),
                    email: "e".into(),
                },
                StatusCode::BAD_REQUEST,
                DETAIL_ALREADY_SIGNED_UP,
            ),
            (
                RosterError::ParticipantNotFound {
                    activity: "X".into(),
                    email: "e".into(),
                },
                StatusCode::NOT_FOUND,
                DETAIL_PARTICIPANT_NOT_FOUND,
            ),
        ];
        for (err, status, detail) in cases {
            assert_eq!(ApiError::from(err).status_and_detail(), (status, detail));
        }
    }

    #[test]
    fn query_errors_are_unprocessable() {
        assert_eq!(
            ApiError::MissingEmail.status_and_detail(),
            (StatusCode::UNPROCESSABLE_ENTITY, DETAIL_MISSING_EMAIL)
        );
        assert_eq!(
            ApiError::InvalidQuery.status_and_detail(),
            (StatusCode::UNPROCESSABLE_ENTITY, DETAIL_INVALID_QUERY)
        );
    }
}
