//! Recommendation pipeline: transcript → eligibility → progress → plan.

use tracing::info;

use crate::algorithm::eligibility::{classify_and_group, filter_offered};
use crate::algorithm::plan::{append_requirements, build_plan};
use crate::algorithm::progress::{
    category_progress, elective_progress, free_electives_remaining, general_education_remaining,
    priority_state,
};
use crate::algorithm::seminar::next_ethics_seminar;
use crate::algorithm::transcript::TranscriptState;
use crate::models::{AdvisingContext, RecommendationResponse};

/// Pure over the snapshot: identical input yields identical output.
pub fn build_recommendations(
    ctx: &AdvisingContext,
    max_credits: u32,
    offered_courses: Option<&[String]>,
) -> RecommendationResponse {
    let state = TranscriptState::from_context(ctx);
    let categories = category_progress(ctx);
    let electives = elective_progress(ctx, &state);
    let priority = priority_state(electives.as_ref());

    let mut breakdown = classify_and_group(ctx, &state);
    if let Some(offered) = offered_courses {
        filter_offered(&mut breakdown, offered);
    }

    let mut plan = build_plan(&breakdown, priority, max_credits);
    append_requirements(
        &mut plan,
        next_ethics_seminar(ctx),
        general_education_remaining(&categories),
        free_electives_remaining(&categories),
    );

    info!(
        session_id = ctx.session.session_id,
        earned = state.earned_credits,
        planned = plan.total_credits,
        max_credits,
        ?priority,
        "built recommendations"
    );

    RecommendationResponse {
        session_id: ctx.session.session_id,
        curriculum_id: ctx.curriculum.curriculum_id,
        earned_credits: state.earned_credits,
        passed_course_codes: state.passed_codes.into_iter().collect(),
        failed_course_codes: state.failed_codes.into_iter().collect(),
        category_progress: categories,
        elective_progress: electives,
        elective_priority: priority,
        eligible_specialized_by_subcategory: breakdown,
        next_semester_plan: plan,
    }
}
