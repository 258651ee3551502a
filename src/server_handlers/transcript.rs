use actix_web::{HttpResponse, web};
use rusqlite::Connection;
use serde::Serialize;
use serde_json::json;

use crate::algorithm::ingest_transcript;
use crate::error::{AdvisorError, AdvisorResult};
use crate::excel;
use crate::models::TranscriptRow;
use crate::server::AppState;
use crate::server_handlers::with_connection;
use crate::storage::{self, snapshot};

#[derive(Debug, Serialize)]
pub struct TranscriptStored {
    pub session_id: i64,
    pub rows_inserted: usize,
    pub total_earned_credits: u32,
    pub fallback_codes: Vec<String>,
}

/// Ingests rows against the session's curriculum and replaces its stored transcript.
pub fn store_transcript(
    conn: &mut Connection,
    session_id: i64,
    rows: &[TranscriptRow],
    specialized_category_id: i64,
) -> AdvisorResult<TranscriptStored> {
    let session = snapshot::load_session(conn, session_id)?;
    let curriculum =
        snapshot::load_curriculum(conn, session.curriculum_id, specialized_category_id)?;
    let catalog = snapshot::load_catalog(conn)?;

    let outcome = ingest_transcript(rows, &catalog, &curriculum)?;
    storage::replace_transcript(conn, session_id, &outcome)?;

    Ok(TranscriptStored {
        session_id,
        rows_inserted: outcome.attempts.len(),
        total_earned_credits: outcome.total_earned,
        fallback_codes: outcome.fallback_codes,
    })
}

/// POST /advising-session/{id}/transcript
pub async fn upload_transcript(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Vec<TranscriptRow>>,
) -> Result<HttpResponse, AdvisorError> {
    let session_id = path.into_inner();
    let rows = body.into_inner();
    let specialized = state.specialized_category_id;
    let stored = with_connection(&state, move |conn| {
        store_transcript(conn, session_id, &rows, specialized)
    })
    .await?;
    Ok(HttpResponse::Ok().json(stored))
}

/// POST /advising-session/{id}/transcript/workbook (raw xlsx body)
pub async fn upload_transcript_workbook(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse, AdvisorError> {
    let session_id = path.into_inner();
    let bytes = body.to_vec();
    let specialized = state.specialized_category_id;
    let stored = with_connection(&state, move |conn| {
        let rows = excel::read_transcript_workbook_from_bytes(bytes)?;
        store_transcript(conn, session_id, &rows, specialized)
    })
    .await?;
    Ok(HttpResponse::Ok().json(stored))
}

/// POST /offered-courses/workbook (raw xlsx body)
pub async fn upload_offered_workbook(body: web::Bytes) -> Result<HttpResponse, AdvisorError> {
    let bytes = body.to_vec();
    let codes = web::block(move || excel::read_offered_courses_from_bytes(bytes))
        .await
        .map_err(|e| AdvisorError::Blocking(e.to_string()))??;
    Ok(HttpResponse::Ok().json(json!({"offered_courses": codes})))
}
