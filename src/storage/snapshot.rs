//! Loads the request-scoped [`AdvisingContext`] snapshot in one pass over the store.

use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{
    AdvisingContext, AdvisingSession, Attempt, Catalog, CodeRange, Course, CourseCode, Curriculum,
    ElectiveRule, MainCategory, Subcategory,
};

/// Subcategory name fragment identifying the Major Electives subcategory.
pub const ELECTIVE_SUBCATEGORY_MARKER: &str = "major elective";

pub fn load_session(conn: &Connection, session_id: i64) -> AdvisorResult<AdvisingSession> {
    let row = conn
        .query_row(
            "SELECT session_id, student_id_number, curriculum_id, earned_credits
             FROM advising_sessions WHERE session_id = ?1",
            params![session_id],
            |row| {
                Ok(AdvisingSession {
                    session_id: row.get(0)?,
                    student_id_number: row.get(1)?,
                    curriculum_id: row.get(2)?,
                    earned_credits: row.get(3)?,
                    chosen_group_id: None,
                })
            },
        )
        .optional()?;
    let mut session = row.ok_or(AdvisorError::SessionNotFound(session_id))?;

    session.chosen_group_id = conn
        .query_row(
            "SELECT group_id FROM session_concentration_selection WHERE session_id = ?1",
            params![session_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(session)
}

pub fn load_curriculum(
    conn: &Connection,
    curriculum_id: i64,
    specialized_category_id: i64,
) -> AdvisorResult<Curriculum> {
    let total_required_credits: u32 = conn
        .query_row(
            "SELECT total_required_credits FROM curriculums WHERE curriculum_id = ?1",
            params![curriculum_id],
            |row| row.get(0),
        )
        .optional()?
        .ok_or_else(|| {
            AdvisorError::Misconfiguration(format!("curriculum {curriculum_id} is not defined"))
        })?;

    let mut stmt = conn.prepare(
        "SELECT mc.main_category_id, mc.name, cmc.required_credits
         FROM curriculum_main_categories cmc
         JOIN main_categories mc ON mc.main_category_id = cmc.main_category_id
         WHERE cmc.curriculum_id = ?1
         ORDER BY mc.main_category_id",
    )?;
    let main_categories = stmt
        .query_map(params![curriculum_id], |row| {
            Ok(MainCategory {
                main_category_id: row.get(0)?,
                name: row.get(1)?,
                required_credits: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT subcategory_id, main_category_id, name, display_order
         FROM curriculum_subcategories
         WHERE curriculum_id = ?1
         ORDER BY display_order, subcategory_id",
    )?;
    let mut subcategories = stmt
        .query_map(params![curriculum_id], |row| {
            Ok(Subcategory {
                subcategory_id: row.get(0)?,
                main_category_id: row.get(1)?,
                name: row.get(2)?,
                display_order: row.get(3)?,
                course_code_ids: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT sc.subcategory_id, sc.course_code_id
         FROM subcategory_course_codes sc
         JOIN curriculum_subcategories sub ON sub.subcategory_id = sc.subcategory_id
         WHERE sub.curriculum_id = ?1
         ORDER BY sc.subcategory_id, sc.course_code_id",
    )?;
    let memberships = stmt
        .query_map(params![curriculum_id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    for (subcategory_id, code_id) in memberships {
        if let Some(sub) = subcategories
            .iter_mut()
            .find(|s| s.subcategory_id == subcategory_id)
        {
            sub.course_code_ids.push(code_id);
        }
    }

    let elective_subcategory_id = subcategories
        .iter()
        .find(|s| s.name.to_lowercase().contains(ELECTIVE_SUBCATEGORY_MARKER))
        .map(|s| s.subcategory_id);

    let elective_rule = conn
        .query_row(
            "SELECT min_from_chosen_group, min_from_all_groups
             FROM major_elective_rules WHERE curriculum_id = ?1",
            params![curriculum_id],
            |row| {
                Ok(ElectiveRule {
                    min_from_chosen_group: row.get(0)?,
                    min_from_all_groups: row.get(1)?,
                })
            },
        )
        .optional()?;

    let mut stmt = conn.prepare(
        "SELECT course_id, min_required_grade
         FROM curriculum_course_min_grades WHERE curriculum_id = ?1",
    )?;
    let min_grades = stmt
        .query_map(params![curriculum_id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT course_id, min_earned_credits
         FROM curriculum_course_credit_requirements WHERE curriculum_id = ?1",
    )?;
    let credit_gates = stmt
        .query_map(params![curriculum_id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, u32>(1)?))
        })?
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(Curriculum {
        curriculum_id,
        total_required_credits,
        main_categories,
        subcategories,
        elective_subcategory_id,
        elective_rule,
        specialized_category_id,
        min_grades,
        credit_gates,
    })
}

pub fn load_catalog(conn: &Connection) -> AdvisorResult<Catalog> {
    let mut catalog = Catalog::default();

    let mut stmt = conn.prepare(
        "SELECT course_id, course_name, credits, is_ethics_seminar, is_active FROM courses",
    )?;
    for course in stmt.query_map([], |row| {
        Ok(Course {
            course_id: row.get(0)?,
            course_name: row.get(1)?,
            credits: row.get(2)?,
            is_ethics_seminar: row.get(3)?,
            is_active: row.get(4)?,
        })
    })? {
        let course = course?;
        catalog.courses.insert(course.course_id, course);
    }

    let mut stmt = conn.prepare(
        "SELECT course_code_id, course_id, course_code, is_active FROM course_codes",
    )?;
    for code in stmt.query_map([], |row| {
        Ok(CourseCode {
            course_code_id: row.get(0)?,
            course_id: row.get(1)?,
            course_code: row.get(2)?,
            is_active: row.get(3)?,
        })
    })? {
        let code = code?;
        catalog.codes.insert(code.course_code_id, code);
    }

    let mut stmt = conn.prepare(
        "SELECT course_id, prerequisite_course_id FROM course_prerequisites
         ORDER BY course_id, prerequisite_course_id",
    )?;
    for edge in stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))? {
        let (course_id, prereq_id) = edge?;
        catalog.prerequisites.entry(course_id).or_default().push(prereq_id);
    }

    // first mapping wins when a code is listed under several groups
    let mut stmt = conn.prepare(
        "SELECT course_code_id, group_id FROM major_elective_group_course_codes
         ORDER BY course_code_id, group_id",
    )?;
    for mapping in stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))? {
        let (code_id, group_id) = mapping?;
        catalog.group_overrides.entry(code_id).or_insert(group_id);
    }

    let mut stmt = conn.prepare(
        "SELECT subcategory_id, prefix, number_start, number_end, group_id
         FROM course_code_ranges ORDER BY range_id",
    )?;
    catalog.code_ranges = stmt
        .query_map([], |row| {
            Ok(CodeRange {
                subcategory_id: row.get(0)?,
                prefix: row.get(1)?,
                number_start: row.get(2)?,
                number_end: row.get(3)?,
                group_id: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(catalog)
}

pub fn load_attempts(conn: &Connection, session_id: i64) -> AdvisorResult<Vec<Attempt>> {
    let mut stmt = conn.prepare(
        "SELECT attempt_id, course_code_id, grade, credits_earned, term
         FROM session_course_attempts
         WHERE session_id = ?1
         ORDER BY attempt_id",
    )?;
    let attempts = stmt
        .query_map(params![session_id], |row| {
            Ok(Attempt {
                attempt_id: row.get(0)?,
                course_code_id: row.get(1)?,
                grade: row.get(2)?,
                credits_earned: row.get(3)?,
                term: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(attempts)
}

/// Everything one recommendation or audit request needs, read up front.
pub fn load_context(
    conn: &Connection,
    session_id: i64,
    specialized_category_id: i64,
) -> AdvisorResult<AdvisingContext> {
    let session = load_session(conn, session_id)?;
    let curriculum = load_curriculum(conn, session.curriculum_id, specialized_category_id)?;
    let catalog = load_catalog(conn)?;
    let attempts = load_attempts(conn, session_id)?;

    debug!(
        session_id,
        curriculum_id = curriculum.curriculum_id,
        courses = catalog.courses.len(),
        attempts = attempts.len(),
        "loaded advising snapshot"
    );

    Ok(AdvisingContext {
        session,
        curriculum,
        catalog,
        attempts,
    })
}
