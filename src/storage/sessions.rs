//! Advising session writes: opening, transcript replacement and concentration.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::info;

use crate::algorithm::IngestOutcome;
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::GroupId;

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn ensure_session(conn: &Connection, session_id: i64) -> AdvisorResult<i64> {
    conn.query_row(
        "SELECT curriculum_id FROM advising_sessions WHERE session_id = ?1",
        params![session_id],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(AdvisorError::SessionNotFound(session_id))
}

/// Curriculum whose student-id range contains `student_id_number`.
pub fn curriculum_for_student(conn: &Connection, student_id_number: i64) -> AdvisorResult<i64> {
    conn.query_row(
        "SELECT curriculum_id FROM curriculum_id_ranges
         WHERE ?1 BETWEEN id_start AND id_end
         ORDER BY curriculum_id LIMIT 1",
        params![student_id_number],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(AdvisorError::CurriculumNotFound(student_id_number))
}

/// Creates a session for the student and returns `(session_id, curriculum_id)`.
pub fn open_session(conn: &Connection, student_id_number: i64) -> AdvisorResult<(i64, i64)> {
    let curriculum_id = curriculum_for_student(conn, student_id_number)?;
    conn.execute(
        "INSERT INTO advising_sessions (created_at, student_id_number, curriculum_id, earned_credits)
         VALUES (?1, ?2, ?3, 0)",
        params![now(), student_id_number, curriculum_id],
    )?;
    let session_id = conn.last_insert_rowid();
    info!(session_id, student_id_number, curriculum_id, "opened advising session");
    Ok((session_id, curriculum_id))
}

/// Replaces every stored attempt of the session and its earned-credit total atomically.
pub fn replace_transcript(
    conn: &mut Connection,
    session_id: i64,
    outcome: &IngestOutcome,
) -> AdvisorResult<()> {
    ensure_session(conn, session_id)?;

    let tx = conn.transaction()?;
    tx.execute(
        "DELETE FROM session_course_attempts WHERE session_id = ?1",
        params![session_id],
    )?;
    {
        let mut insert = tx.prepare(
            "INSERT INTO session_course_attempts
                (session_id, course_code_id, grade, credits_earned, term, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        let created_at = now();
        for attempt in &outcome.attempts {
            insert.execute(params![
                session_id,
                attempt.course_code_id,
                attempt.grade,
                attempt.credits_earned,
                attempt.term,
                created_at,
            ])?;
        }
    }
    tx.execute(
        "UPDATE advising_sessions SET earned_credits = ?1 WHERE session_id = ?2",
        params![outcome.total_earned, session_id],
    )?;
    tx.commit()?;

    info!(
        session_id,
        attempts = outcome.attempts.len(),
        earned = outcome.total_earned,
        "transcript stored"
    );
    Ok(())
}

/// Records the chosen concentration; the group must belong to the session's curriculum.
pub fn select_concentration(
    conn: &Connection,
    session_id: i64,
    group_id: GroupId,
) -> AdvisorResult<()> {
    let curriculum_id = ensure_session(conn, session_id)?;

    let known: Option<i64> = conn
        .query_row(
            "SELECT group_id FROM major_elective_groups
             WHERE group_id = ?1 AND curriculum_id = ?2",
            params![group_id, curriculum_id],
            |row| row.get(0),
        )
        .optional()?;
    if known.is_none() {
        return Err(AdvisorError::InvalidGroup {
            group_id,
            curriculum_id,
        });
    }

    conn.execute(
        "INSERT INTO session_concentration_selection (session_id, group_id, selected_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(session_id) DO UPDATE SET group_id = excluded.group_id,
                                               selected_at = excluded.selected_at",
        params![session_id, group_id, now()],
    )?;
    info!(session_id, group_id, "concentration selected");
    Ok(())
}
