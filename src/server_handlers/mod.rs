pub mod audit;
pub mod health;
pub mod recommendations;
pub mod sessions;
pub mod transcript;

pub use audit::*;
pub use health::*;
pub use recommendations::*;
pub use sessions::*;
pub use transcript::*;

use actix_web::web;
use rusqlite::Connection;

use crate::error::{AdvisorError, AdvisorResult};
use crate::server::AppState;
use crate::storage::open_connection;

/// Runs store work plus the engine call on the blocking pool with a fresh connection.
pub(crate) async fn with_connection<T, F>(state: &web::Data<AppState>, work: F) -> AdvisorResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Connection) -> AdvisorResult<T> + Send + 'static,
{
    let db_path = state.db_path.clone();
    web::block(move || {
        let mut conn = open_connection(&db_path)?;
        work(&mut conn)
    })
    .await
    .map_err(|e| AdvisorError::Blocking(e.to_string()))?
}
