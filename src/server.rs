use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use std::path::PathBuf;
use tracing::info;

use crate::config::AdvisorConfig;
use crate::server_handlers::{
    create_session, graduation_audit, health, recommendations, select_concentration,
    upload_offered_workbook, upload_transcript, upload_transcript_workbook,
};

/// Largest accepted workbook upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const MAX_JSON_BYTES: usize = 2 * 1024 * 1024;

/// Shared, read-only handler state. Each request opens its own SQLite connection.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db_path: PathBuf,
    pub default_max_credits: u32,
    pub specialized_category_id: i64,
}

impl AppState {
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self {
            db_path: config.db_path.clone(),
            default_max_credits: config.default_max_credits,
            specialized_category_id: config.specialized_category_id,
        }
    }
}

/// Route table, shared by the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
        .app_data(web::JsonConfig::default().limit(MAX_JSON_BYTES))
        .route("/health", web::get().to(health))
        .route("/advising-session", web::post().to(create_session))
        .route(
            "/advising-session/{id}/transcript",
            web::post().to(upload_transcript),
        )
        .route(
            "/advising-session/{id}/transcript/workbook",
            web::post().to(upload_transcript_workbook),
        )
        .route(
            "/advising-session/{id}/concentration",
            web::post().to(select_concentration),
        )
        .route(
            "/advising-session/{id}/recommendations",
            web::post().to(recommendations),
        )
        .route(
            "/advising-session/{id}/graduation-audit",
            web::get().to(graduation_audit),
        )
        .route(
            "/offered-courses/workbook",
            web::post().to(upload_offered_workbook),
        );
}

pub async fn run_server(config: AdvisorConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));
    let origin = config.allowed_origin.clone();

    info!(bind = %config.bind_addr, db = %config.db_path.display(), "starting advisor API");

    HttpServer::new(move || {
        let cors = if origin == "*" {
            Cors::default().allow_any_origin()
        } else {
            Cors::default().allowed_origin(&origin)
        };
        let cors = cors
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
