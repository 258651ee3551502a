use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Errors surfaced by the store, ingestion and workbook import.
///
/// Grade tokens and elective groups that cannot be resolved are not errors; the
/// engine recovers from those locally.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("session {0} not found")]
    SessionNotFound(i64),

    #[error("no curriculum found for student_id_number {0}")]
    CurriculumNotFound(i64),

    #[error("group {group_id} is not an elective group of curriculum {curriculum_id}")]
    InvalidGroup { group_id: i64, curriculum_id: i64 },

    /// Incomplete catalog setup, e.g. no FREE_ELECTIVE fallback course.
    #[error("catalog misconfigured: {0}")]
    Misconfiguration(String),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("malformed workbook: {0}")]
    MalformedWorkbook(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("blocking task failed: {0}")]
    Blocking(String),
}

impl ResponseError for AdvisorError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdvisorError::SessionNotFound(_) | AdvisorError::CurriculumNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AdvisorError::InvalidGroup { .. }
            | AdvisorError::Workbook(_)
            | AdvisorError::MalformedWorkbook(_) => StatusCode::BAD_REQUEST,
            AdvisorError::Misconfiguration(_)
            | AdvisorError::Storage(_)
            | AdvisorError::Config(_)
            | AdvisorError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
