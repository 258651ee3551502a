use actix_web::{HttpResponse, web};

use crate::algorithm::run_graduation_audit;
use crate::error::AdvisorError;
use crate::server::AppState;
use crate::server_handlers::with_connection;
use crate::storage;

/// GET /advising-session/{id}/graduation-audit
pub async fn graduation_audit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AdvisorError> {
    let session_id = path.into_inner();
    let specialized = state.specialized_category_id;
    let audit = with_connection(&state, move |conn| {
        let ctx = storage::load_context(conn, session_id, specialized)?;
        Ok(run_graduation_audit(&ctx))
    })
    .await?;
    Ok(HttpResponse::Ok().json(audit))
}
