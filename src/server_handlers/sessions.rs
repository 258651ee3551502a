use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::error::AdvisorError;
use crate::models::GroupId;
use crate::server::AppState;
use crate::server_handlers::with_connection;
use crate::storage;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub student_id_number: i64,
}

#[derive(Debug, Deserialize)]
pub struct ConcentrationRequest {
    pub group_id: GroupId,
}

/// POST /advising-session
pub async fn create_session(
    state: web::Data<AppState>,
    body: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, AdvisorError> {
    let student_id_number = body.student_id_number;
    let (session_id, curriculum_id) = with_connection(&state, move |conn| {
        storage::open_session(conn, student_id_number)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({
        "session_id": session_id,
        "curriculum_id": curriculum_id,
    })))
}

/// POST /advising-session/{id}/concentration
pub async fn select_concentration(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ConcentrationRequest>,
) -> Result<HttpResponse, AdvisorError> {
    let session_id = path.into_inner();
    let group_id = body.group_id;
    with_connection(&state, move |conn| {
        storage::select_concentration(conn, session_id, group_id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({
        "session_id": session_id,
        "group_id": group_id,
    })))
}
