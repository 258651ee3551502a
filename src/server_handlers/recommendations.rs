use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::algorithm::build_recommendations;
use crate::error::AdvisorError;
use crate::server::AppState;
use crate::server_handlers::with_connection;
use crate::storage;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub max_credits: Option<u32>,
    /// Empty or absent means no offered-course filter.
    #[serde(default)]
    pub offered_courses: Option<Vec<String>>,
}

/// POST /advising-session/{id}/recommendations
pub async fn recommendations(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, AdvisorError> {
    let session_id = path.into_inner();
    let request = body.into_inner();
    let max_credits = request.max_credits.unwrap_or(state.default_max_credits);
    let specialized = state.specialized_category_id;

    let response = with_connection(&state, move |conn| {
        let ctx = storage::load_context(conn, session_id, specialized)?;
        Ok(build_recommendations(
            &ctx,
            max_credits,
            request.offered_courses.as_deref(),
        ))
    })
    .await?;
    Ok(HttpResponse::Ok().json(response))
}
