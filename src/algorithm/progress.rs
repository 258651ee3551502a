//! Progress per main category and against the major-elective rule (chosen track and all groups).

use std::collections::{BTreeSet, HashSet};

use crate::algorithm::groups::GroupResolver;
use crate::algorithm::transcript::TranscriptState;
use crate::models::{
    AdvisingContext, CategoryProgress, CourseCodeId, ElectiveProgress, FREE_ELECTIVES,
    GENERAL_EDUCATION, MainCategoryId, PriorityState, TrackStatus,
};

/// Course codes mapped into any subcategory of `main_category_id`.
fn codes_in_category(ctx: &AdvisingContext, main_category_id: MainCategoryId) -> HashSet<CourseCodeId> {
    ctx.curriculum
        .subcategories
        .iter()
        .filter(|s| s.main_category_id == main_category_id)
        .flat_map(|s| s.course_code_ids.iter().copied())
        .collect()
}

/// Required minus stored earned credits per main category, floored at zero.
pub fn category_progress(ctx: &AdvisingContext) -> Vec<CategoryProgress> {
    ctx.curriculum
        .main_categories
        .iter()
        .map(|mc| {
            let codes = codes_in_category(ctx, mc.main_category_id);
            let earned: u32 = ctx
                .attempts
                .iter()
                .filter(|a| a.credits_earned > 0 && codes.contains(&a.course_code_id))
                .map(|a| a.credits_earned)
                .sum();
            CategoryProgress {
                main_category: mc.name.clone(),
                required_credits: mc.required_credits,
                earned_credits: earned,
                remaining_credits: mc.required_credits.saturating_sub(earned),
            }
        })
        .collect()
}

pub fn remaining_for(progress: &[CategoryProgress], name: &str) -> u32 {
    progress
        .iter()
        .find(|p| p.main_category == name)
        .map(|p| p.remaining_credits)
        .unwrap_or(0)
}

pub fn general_education_remaining(progress: &[CategoryProgress]) -> u32 {
    remaining_for(progress, GENERAL_EDUCATION)
}

pub fn free_electives_remaining(progress: &[CategoryProgress]) -> u32 {
    remaining_for(progress, FREE_ELECTIVES)
}

/// Counts distinct passed elective codes against the curriculum's elective rule.
///
/// `None` when the curriculum has no elective subcategory or no rule. Passed codes
/// whose group cannot be resolved count toward nothing.
pub fn elective_progress(ctx: &AdvisingContext, state: &TranscriptState) -> Option<ElectiveProgress> {
    let rule = ctx.curriculum.elective_rule?;
    let subcategory_id = ctx.curriculum.elective_subcategory_id?;
    let subcategory = ctx.curriculum.subcategory(subcategory_id)?;
    let elective_codes: HashSet<CourseCodeId> = subcategory.course_code_ids.iter().copied().collect();
    let chosen_group = ctx.session.chosen_group_id;
    let resolver = GroupResolver::new(&ctx.catalog, Some(subcategory_id));

    let attempted: BTreeSet<CourseCodeId> = ctx
        .attempts
        .iter()
        .map(|a| a.course_code_id)
        .filter(|id| elective_codes.contains(id))
        .collect();

    let mut chosen_done = 0u32;
    let mut any_done = 0u32;

    for code_id in attempted {
        if !state.passed_course_code_ids.contains(&code_id) {
            continue;
        }
        let Some(code) = ctx.catalog.code(code_id) else {
            continue;
        };
        let Some(group) = resolver.resolve(code_id, &code.course_code) else {
            continue;
        };
        any_done += 1;
        if chosen_group == Some(group) {
            chosen_done += 1;
        }
    }

    Some(ElectiveProgress {
        track_status: if chosen_group.is_some() {
            TrackStatus::Selected
        } else {
            TrackStatus::NotSelected
        },
        chosen_group_id: chosen_group,
        min_from_chosen_group: rule.min_from_chosen_group,
        min_from_all_groups: rule.min_from_all_groups,
        chosen_group_completed: chosen_done,
        all_groups_completed: any_done,
        chosen_group_remaining: rule.min_from_chosen_group.saturating_sub(chosen_done),
        all_groups_remaining: rule.min_from_all_groups.saturating_sub(any_done),
    })
}

/// Fixed decision order: no track, then overall completion, then chosen-track deficit.
///
/// The all-groups count alone never completes the requirement while the chosen track
/// is still short.
pub fn priority_state(progress: Option<&ElectiveProgress>) -> Option<PriorityState> {
    let progress = progress?;
    let state = if progress.chosen_group_id.is_none() {
        PriorityState::SelectConcentrationFirst
    } else if progress.all_groups_remaining == 0 && progress.chosen_group_remaining == 0 {
        PriorityState::ElectiveRequirementCompleted
    } else if progress.chosen_group_remaining > 0 {
        PriorityState::FocusOnChosenTrack
    } else {
        PriorityState::FreeChoice
    };
    Some(state)
}
