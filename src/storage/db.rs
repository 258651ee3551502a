use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{AdvisorError, AdvisorResult};

/// Catalog, curriculum and advising-session tables.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS curriculums (
        curriculum_id INTEGER PRIMARY KEY,
        name TEXT,
        total_required_credits INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS curriculum_id_ranges (
        curriculum_id INTEGER NOT NULL,
        id_start INTEGER NOT NULL,
        id_end INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS main_categories (
        main_category_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS curriculum_main_categories (
        curriculum_id INTEGER NOT NULL,
        main_category_id INTEGER NOT NULL,
        required_credits INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (curriculum_id, main_category_id)
    );

    CREATE TABLE IF NOT EXISTS curriculum_subcategories (
        subcategory_id INTEGER PRIMARY KEY,
        curriculum_id INTEGER NOT NULL,
        main_category_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        display_order INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS courses (
        course_id INTEGER PRIMARY KEY,
        course_name TEXT NOT NULL,
        credits INTEGER NOT NULL DEFAULT 0,
        is_ethics_seminar INTEGER NOT NULL DEFAULT 0,
        is_active INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS course_codes (
        course_code_id INTEGER PRIMARY KEY,
        course_id INTEGER NOT NULL,
        course_code TEXT NOT NULL UNIQUE,
        is_active INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS subcategory_course_codes (
        subcategory_id INTEGER NOT NULL,
        course_code_id INTEGER NOT NULL,
        PRIMARY KEY (subcategory_id, course_code_id)
    );

    CREATE TABLE IF NOT EXISTS course_prerequisites (
        course_id INTEGER NOT NULL,
        prerequisite_course_id INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS curriculum_course_min_grades (
        curriculum_id INTEGER NOT NULL,
        course_id INTEGER NOT NULL,
        min_required_grade TEXT NOT NULL,
        PRIMARY KEY (curriculum_id, course_id)
    );

    CREATE TABLE IF NOT EXISTS curriculum_course_credit_requirements (
        curriculum_id INTEGER NOT NULL,
        course_id INTEGER NOT NULL,
        min_earned_credits INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (curriculum_id, course_id)
    );

    CREATE TABLE IF NOT EXISTS major_elective_rules (
        curriculum_id INTEGER PRIMARY KEY,
        min_from_chosen_group INTEGER NOT NULL DEFAULT 0,
        min_from_all_groups INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS major_elective_groups (
        group_id INTEGER PRIMARY KEY,
        curriculum_id INTEGER NOT NULL,
        name TEXT
    );

    CREATE TABLE IF NOT EXISTS major_elective_group_course_codes (
        group_id INTEGER NOT NULL,
        course_code_id INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS course_code_ranges (
        range_id INTEGER PRIMARY KEY AUTOINCREMENT,
        subcategory_id INTEGER NOT NULL,
        prefix TEXT NOT NULL,
        number_start INTEGER NOT NULL,
        number_end INTEGER NOT NULL,
        group_id INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS advising_sessions (
        session_id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        student_id_number INTEGER NOT NULL,
        curriculum_id INTEGER NOT NULL,
        earned_credits INTEGER NOT NULL DEFAULT 0,
        notes TEXT
    );

    CREATE TABLE IF NOT EXISTS session_course_attempts (
        attempt_id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id INTEGER NOT NULL,
        course_code_id INTEGER NOT NULL,
        grade TEXT NOT NULL,
        credits_earned INTEGER NOT NULL DEFAULT 0,
        term TEXT,
        created_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_attempts_session ON session_course_attempts (session_id);

    CREATE TABLE IF NOT EXISTS session_concentration_selection (
        session_id INTEGER PRIMARY KEY,
        group_id INTEGER NOT NULL,
        selected_at TEXT NOT NULL
    );
";

/// Opens the SQLite file, creating its parent directory when needed.
pub fn open_connection(db_path: &Path) -> AdvisorResult<Connection> {
    if let Some(dir) = db_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                AdvisorError::Config(format!(
                    "cannot create database directory {}: {e}",
                    dir.display()
                ))
            })?;
        }
    }
    Ok(Connection::open(db_path)?)
}

/// Creates every table if missing.
pub fn init_schema(conn: &Connection) -> AdvisorResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Opens the database file and makes sure the schema exists.
pub fn init_db(db_path: &Path) -> AdvisorResult<()> {
    let conn = open_connection(db_path)?;
    init_schema(&conn)?;
    info!(path = %db_path.display(), "advisor database ready");
    Ok(())
}
