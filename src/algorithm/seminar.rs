//! Mandatory zero-credit professional ethics seminars.

use std::collections::HashSet;

use crate::algorithm::grading::normalize_grade;
use crate::models::{AdvisingContext, Catalog, CourseCode, CourseId, PlanEntry, PlanSource};

/// Active seminar codes of active seminar courses, ordered by code.
pub fn active_seminar_codes(catalog: &Catalog) -> Vec<&CourseCode> {
    let mut codes: Vec<&CourseCode> = catalog
        .codes
        .values()
        .filter(|cc| cc.is_active)
        .filter(|cc| {
            catalog
                .course(cc.course_id)
                .is_some_and(|c| c.is_ethics_seminar && c.is_active)
        })
        .collect();
    codes.sort_by(|a, b| a.course_code.cmp(&b.course_code));
    codes
}

/// Seminar courses with an attempt graded in `grades`.
fn seminar_courses_graded(ctx: &AdvisingContext, grades: &[&str]) -> HashSet<CourseId> {
    ctx.attempts
        .iter()
        .filter(|a| grades.contains(&normalize_grade(&a.grade).as_str()))
        .filter_map(|a| ctx.catalog.course_of_code(a.course_code_id))
        .filter(|c| c.is_ethics_seminar)
        .map(|c| c.course_id)
        .collect()
}

/// First seminar with no `S` or `IP` attempt. In-progress needs no new recommendation.
pub fn next_ethics_seminar(ctx: &AdvisingContext) -> Option<PlanEntry> {
    let satisfied = seminar_courses_graded(ctx, &["S", "IP"]);

    active_seminar_codes(&ctx.catalog)
        .into_iter()
        .find(|cc| !satisfied.contains(&cc.course_id))
        .and_then(|cc| {
            let course = ctx.catalog.course(cc.course_id)?;
            Some(PlanEntry {
                course_code: cc.course_code.clone(),
                course_name: course.course_name.clone(),
                credits: course.credits,
                source: PlanSource::EthicsSeminar,
            })
        })
}

/// Distinct seminar courses completed with `S`; `IP` does not count here.
pub fn completed_seminar_courses(ctx: &AdvisingContext) -> HashSet<CourseId> {
    seminar_courses_graded(ctx, &["S"])
}

/// Number of active seminar courses.
pub fn required_seminar_count(catalog: &Catalog) -> u32 {
    catalog
        .courses
        .values()
        .filter(|c| c.is_ethics_seminar && c.is_active)
        .count() as u32
}
