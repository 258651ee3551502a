//! Transcript state derived from the attempts: passed, in progress, failed.

use std::collections::{BTreeSet, HashSet};

use crate::algorithm::grading::{is_passing, normalize_grade};
use crate::models::{AdvisingContext, CourseCodeId, CourseId};

#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    /// Pass state is tracked per course, so code aliases share it.
    pub passed_course_ids: HashSet<CourseId>,
    pub passed_course_code_ids: HashSet<CourseCodeId>,
    pub in_progress_course_ids: HashSet<CourseId>,
    pub passed_codes: BTreeSet<String>,
    pub failed_codes: BTreeSet<String>,
    /// Sum of the stored `credits_earned` over attempts that earned any.
    pub earned_credits: u32,
}

impl TranscriptState {
    pub fn from_context(ctx: &AdvisingContext) -> Self {
        let mut state = TranscriptState::default();

        for attempt in &ctx.attempts {
            if attempt.credits_earned > 0 {
                state.earned_credits += attempt.credits_earned;
            }

            let Some(code) = ctx.catalog.code(attempt.course_code_id) else {
                continue;
            };

            if normalize_grade(&attempt.grade) == "IP" {
                state.in_progress_course_ids.insert(code.course_id);
                continue;
            }

            let required = ctx.curriculum.required_grade(code.course_id);
            if is_passing(&attempt.grade, required) {
                state.passed_course_ids.insert(code.course_id);
                state.passed_course_code_ids.insert(code.course_code_id);
                state.passed_codes.insert(code.course_code.clone());
            } else {
                state.failed_codes.insert(code.course_code.clone());
            }
        }

        state
    }

    /// Completed for eligibility purposes: passed or currently in progress.
    pub fn is_completed(&self, course_id: CourseId) -> bool {
        self.passed_course_ids.contains(&course_id)
            || self.in_progress_course_ids.contains(&course_id)
    }
}
