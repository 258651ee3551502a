//! Next-semester plan: greedy, order-sensitive, credit-bounded selection (no backtracking).
//!
//! Order: other specialized courses, then Major Electives buckets in the order the
//! priority state asks for. Seminar and category placeholders are appended afterwards.

use std::collections::HashSet;

use crate::models::{
    BucketSet, CourseItem, EligibilityBreakdown, MajorElectives, PlanEntry, PlanSource,
    PriorityState, SemesterPlan,
};

/// Largest placeholder suggested for one category in one semester.
pub const PLACEHOLDER_MAX_CREDITS: u32 = 3;

struct PlanBuilder {
    max_credits: u32,
    total_credits: u32,
    entries: Vec<PlanEntry>,
    picked: HashSet<String>,
    notes: Vec<String>,
}

impl PlanBuilder {
    fn new(max_credits: u32) -> Self {
        Self {
            max_credits,
            total_credits: 0,
            entries: Vec::new(),
            picked: HashSet::new(),
            notes: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.total_credits >= self.max_credits
    }

    fn add_from(&mut self, items: &[CourseItem], source: PlanSource) {
        for item in items {
            let key = item.course_code.trim().to_uppercase();
            if key.is_empty() || self.picked.contains(&key) {
                continue;
            }
            if self.total_credits + item.credits > self.max_credits {
                continue;
            }

            self.entries.push(PlanEntry {
                course_code: item.course_code.clone(),
                course_name: item.course_name.clone(),
                credits: item.credits,
                source,
            });
            self.picked.insert(key);
            self.total_credits += item.credits;

            if self.is_full() {
                break;
            }
        }
    }

    fn finish(self) -> SemesterPlan {
        SemesterPlan {
            max_credits: self.max_credits,
            total_credits: self.total_credits,
            recommended_courses: self.entries,
            notes: self.notes,
        }
    }
}

/// Elective bucket order for a priority state. Anything but `FREE_CHOICE` falls back to
/// chosen track first.
pub fn elective_order(priority: Option<PriorityState>) -> [PlanSource; 3] {
    match priority {
        Some(PriorityState::FreeChoice) => [
            PlanSource::OpenPool,
            PlanSource::ChosenTrack,
            PlanSource::OtherTracks,
        ],
        _ => [
            PlanSource::ChosenTrack,
            PlanSource::OpenPool,
            PlanSource::OtherTracks,
        ],
    }
}

pub fn build_plan(
    breakdown: &EligibilityBreakdown,
    priority: Option<PriorityState>,
    max_credits: u32,
) -> SemesterPlan {
    let mut builder = PlanBuilder::new(max_credits);

    if let Some(spec) = &breakdown.other_specialized_courses {
        builder.add_from(&spec.eligible, PlanSource::OtherSpecialized);
    }
    if builder.is_full() {
        return builder.finish();
    }

    match &breakdown.major_electives {
        MajorElectives::Absent => {}
        MajorElectives::NotSelected { message, open_pool } => {
            builder.notes.push(message.clone());
            builder.add_from(&open_pool.eligible, PlanSource::OpenPool);
        }
        MajorElectives::Selected {
            chosen_track,
            other_tracks,
            open_pool,
        } => {
            for source in elective_order(priority) {
                let bucket: &BucketSet = match source {
                    PlanSource::ChosenTrack => chosen_track,
                    PlanSource::OtherTracks => other_tracks,
                    _ => open_pool,
                };
                builder.add_from(&bucket.eligible, source);
            }
        }
    }

    if builder.total_credits < builder.max_credits {
        let note = format!(
            "Plan underfilled: {}/{} credits (not enough eligible courses yet).",
            builder.total_credits, builder.max_credits
        );
        builder.notes.push(note);
    }

    builder.finish()
}

/// Appends the next seminar (always, zero credit) and the General Education / Free
/// Elective placeholders while those categories are outstanding.
///
/// Placeholders count against `max_credits`; one that does not fit is left out with a note.
pub fn append_requirements(
    plan: &mut SemesterPlan,
    seminar: Option<PlanEntry>,
    ge_remaining: u32,
    fe_remaining: u32,
) {
    if let Some(seminar) = seminar {
        plan.recommended_courses.push(seminar);
    }

    let mut used = plan.total_credits;
    let placeholders = [
        (
            ge_remaining,
            "GE",
            "General Education (Select 1 Course)",
            PlanSource::GeneralEducation,
        ),
        (
            fe_remaining,
            "FE",
            "Free Elective (Select 1 Course)",
            PlanSource::FreeElective,
        ),
    ];

    for (remaining, code, name, source) in placeholders {
        if remaining == 0 {
            continue;
        }
        let credits = remaining.min(PLACEHOLDER_MAX_CREDITS);
        if used + credits > plan.max_credits {
            plan.notes.push(format!(
                "{name} placeholder deferred: {credits} credits do not fit in {}/{}.",
                used, plan.max_credits
            ));
            continue;
        }
        used += credits;
        plan.recommended_courses.push(PlanEntry {
            course_code: code.to_string(),
            course_name: name.to_string(),
            credits,
            source,
        });
    }
}
