use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::{domain::ScheduleError, repositories::RepositoryError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                Self::internal(err.to_string())
            }
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            RepositoryError::Conflict(_) => Self::conflict(err.to_string()),
            RepositoryError::OutOfRange(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl From<ScheduleError> for ApiError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::UnitNotFound(_)
            | ScheduleError::ScheduleNotFound { .. }
            | ScheduleError::UnknownShiftCode(_) => Self::not_found(err.to_string()),
            ScheduleError::EmployeeNotInUnit { .. }
            | ScheduleError::InvalidMonth(_)
            | ScheduleError::InvalidDay { .. }
            | ScheduleError::InvalidYear(_) => Self::bad_request(err.to_string()),
            ScheduleError::Repository(repo_err) => repo_err.into(),
            ScheduleError::Aggregation(ref e) => {
                tracing::error!("Aggregation error: {:?}", e);
                Self::internal(err.to_string())
            }
        }
    }
}
