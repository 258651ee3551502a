pub mod db;
pub mod sessions;
pub mod snapshot;

pub use db::{init_db, init_schema, open_connection};
pub use sessions::{curriculum_for_student, open_session, replace_transcript, select_concentration};
pub use snapshot::load_context;
