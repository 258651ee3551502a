//! Graduation audit.
//!
//! Independent of the planner: earned credits are re-derived from canonical course
//! credits under the current grading rules instead of the stored `credits_earned`.

use std::collections::HashSet;

use tracing::info;

use crate::algorithm::grading::is_passing;
use crate::algorithm::seminar::{completed_seminar_courses, required_seminar_count};
use crate::models::{
    AdvisingContext, Attempt, AuditStatus, CategoryAudit, CourseCodeId, CreditAudit,
    GraduationAudit, GraduationStatus, SeminarAudit,
};

/// Canonical credits an attempt contributes: zero for seminars and non-passing grades.
fn audited_credits(ctx: &AdvisingContext, attempt: &Attempt) -> u32 {
    let Some(code) = ctx.catalog.code(attempt.course_code_id) else {
        return 0;
    };
    let Some(course) = ctx.catalog.course(code.course_id) else {
        return 0;
    };
    if course.is_ethics_seminar {
        return 0;
    }
    if is_passing(&attempt.grade, ctx.curriculum.required_grade(course.course_id)) {
        course.credits
    } else {
        0
    }
}

pub fn percentage(earned: u32, required: u32) -> f64 {
    if required == 0 {
        return 0.0;
    }
    let pct = f64::from(earned) / f64::from(required) * 100.0;
    (pct * 100.0).round() / 100.0
}

pub fn credit_audit(ctx: &AdvisingContext) -> CreditAudit {
    let earned: u32 = ctx.attempts.iter().map(|a| audited_credits(ctx, a)).sum();
    let required = ctx.curriculum.total_required_credits;
    let remaining = required.saturating_sub(earned);
    CreditAudit {
        earned_credits: earned,
        required_credits: required,
        remaining_credits: remaining,
        percentage_completed: percentage(earned, required),
        status: AuditStatus::from_remaining(remaining),
    }
}

pub fn category_audit(ctx: &AdvisingContext) -> Vec<CategoryAudit> {
    ctx.curriculum
        .main_categories
        .iter()
        .map(|mc| {
            let codes: HashSet<CourseCodeId> = ctx
                .curriculum
                .subcategories
                .iter()
                .filter(|s| s.main_category_id == mc.main_category_id)
                .flat_map(|s| s.course_code_ids.iter().copied())
                .collect();
            let earned: u32 = ctx
                .attempts
                .iter()
                .filter(|a| codes.contains(&a.course_code_id))
                .map(|a| audited_credits(ctx, a))
                .sum();
            let remaining = mc.required_credits.saturating_sub(earned);
            CategoryAudit {
                main_category: mc.name.clone(),
                required_credits: mc.required_credits,
                earned_credits: earned,
                remaining_credits: remaining,
                status: AuditStatus::from_remaining(remaining),
            }
        })
        .collect()
}

pub fn seminar_audit(ctx: &AdvisingContext) -> SeminarAudit {
    let required = required_seminar_count(&ctx.catalog);
    let completed = completed_seminar_courses(ctx).len() as u32;
    let remaining = required.saturating_sub(completed);
    SeminarAudit {
        required_total: required,
        completed,
        remaining,
        status: AuditStatus::from_remaining(remaining),
    }
}

/// Binary verdict: every check must be complete.
pub fn graduation_verdict(
    credits: &CreditAudit,
    categories: &[CategoryAudit],
    seminars: &SeminarAudit,
) -> GraduationStatus {
    let complete = credits.remaining_credits == 0
        && categories.iter().all(|c| c.status == AuditStatus::Completed)
        && seminars.status == AuditStatus::Completed;
    if complete {
        GraduationStatus::EligibleForGraduation
    } else {
        GraduationStatus::NotEligible
    }
}

pub fn run_graduation_audit(ctx: &AdvisingContext) -> GraduationAudit {
    let credits = credit_audit(ctx);
    let categories = category_audit(ctx);
    let seminars = seminar_audit(ctx);
    let status = graduation_verdict(&credits, &categories, &seminars);

    info!(
        session_id = ctx.session.session_id,
        earned = credits.earned_credits,
        required = credits.required_credits,
        ?status,
        "graduation audit"
    );

    GraduationAudit {
        session_id: ctx.session.session_id,
        curriculum_id: ctx.curriculum.curriculum_id,
        credit_audit: credits,
        main_category_audit: categories,
        seminar_audit: seminars,
        graduation_status: status,
    }
}
