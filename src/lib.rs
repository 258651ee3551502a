// Biblioteca raíz del crate `curriculum_advisor`.
// Motor de asesoría académica (recomendaciones y auditoría de graduación) más
// su almacenamiento SQLite, importación de planillas y la API HTTP.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod excel;
pub mod logging;
pub mod models;
pub mod server;
pub mod server_handlers;
pub mod storage;

pub use config::AdvisorConfig;
pub use error::{AdvisorError, AdvisorResult};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
