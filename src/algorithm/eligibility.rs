//! Eligibility classification of the specialized-category candidates.
//!
//! Runs as a fold producing one immutable [`Classification`] per candidate, followed by a
//! pure grouping step into [`EligibilityBreakdown`]. Standing precedence is
//! completed > credit gate > prerequisites > eligible.

use std::collections::HashSet;

use tracing::debug;

use crate::algorithm::groups::GroupResolver;
use crate::algorithm::transcript::TranscriptState;
use crate::models::{
    AdvisingContext, BucketSet, CourseCodeId, CourseId, CourseItem, EligibilityBreakdown, GroupId,
    MajorElectives, OPEN_POOL_GROUP, SubcategoryId,
};

pub const SELECT_CONCENTRATION_MESSAGE: &str =
    "Please select a concentration to see track-specific recommendations.";

/// A course code offered by one of the specialized subcategories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub course_code_id: CourseCodeId,
    pub course_code: String,
    pub course_id: CourseId,
    pub course_name: String,
    pub credits: u32,
    pub subcategory_id: SubcategoryId,
    pub min_credits_required: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Completed,
    CreditBlocked,
    PrerequisiteBlocked,
    Eligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    ChosenTrack,
    OtherTracks,
    OpenPool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Specialized,
    Elective(Track),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub item: CourseItem,
    pub standing: Standing,
    pub placement: Placement,
}

/// Candidates ordered by subcategory display order, then course code.
pub fn specialized_candidates(ctx: &AdvisingContext) -> Vec<Candidate> {
    let curriculum = &ctx.curriculum;
    let mut keyed: Vec<(i64, Candidate)> = Vec::new();

    for sub in curriculum
        .subcategories
        .iter()
        .filter(|s| s.main_category_id == curriculum.specialized_category_id)
    {
        for code_id in &sub.course_code_ids {
            let Some(code) = ctx.catalog.code(*code_id) else {
                continue;
            };
            let Some(course) = ctx.catalog.course(code.course_id) else {
                continue;
            };
            keyed.push((
                sub.display_order,
                Candidate {
                    course_code_id: code.course_code_id,
                    course_code: code.course_code.clone(),
                    course_id: course.course_id,
                    course_name: course.course_name.clone(),
                    credits: course.credits,
                    subcategory_id: sub.subcategory_id,
                    min_credits_required: curriculum.credit_gate(course.course_id),
                },
            ));
        }
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.course_code.cmp(&b.1.course_code)));
    keyed.into_iter().map(|(_, c)| c).collect()
}

pub fn standing_of(candidate: &Candidate, ctx: &AdvisingContext, state: &TranscriptState) -> Standing {
    if state.is_completed(candidate.course_id) {
        return Standing::Completed;
    }
    if state.earned_credits < candidate.min_credits_required {
        return Standing::CreditBlocked;
    }
    let unmet = ctx
        .catalog
        .prerequisites
        .get(&candidate.course_id)
        .is_some_and(|reqs| reqs.iter().any(|r| !state.passed_course_ids.contains(r)));
    if unmet {
        Standing::PrerequisiteBlocked
    } else {
        Standing::Eligible
    }
}

/// Routes an elective into a track bucket. Unresolved groups land in other tracks.
pub fn track_of(group: Option<GroupId>, chosen_group: Option<GroupId>) -> Track {
    match (group, chosen_group) {
        (Some(OPEN_POOL_GROUP), _) => Track::OpenPool,
        (Some(g), Some(chosen)) if g == chosen => Track::ChosenTrack,
        _ => Track::OtherTracks,
    }
}

pub fn classify(ctx: &AdvisingContext, state: &TranscriptState) -> Vec<Classification> {
    let elective_subcategory = ctx.curriculum.elective_subcategory_id;
    let chosen_group = ctx.session.chosen_group_id;
    let resolver = GroupResolver::new(&ctx.catalog, elective_subcategory);

    specialized_candidates(ctx)
        .into_iter()
        .map(|candidate| {
            let standing = standing_of(&candidate, ctx, state);
            let placement = if Some(candidate.subcategory_id) == elective_subcategory {
                let group = resolver.resolve(candidate.course_code_id, &candidate.course_code);
                Placement::Elective(track_of(group, chosen_group))
            } else {
                Placement::Specialized
            };
            Classification {
                item: CourseItem {
                    course_code: candidate.course_code,
                    course_name: candidate.course_name,
                    credits: candidate.credits,
                },
                standing,
                placement,
            }
        })
        .collect()
}

fn push(bucket: &mut BucketSet, standing: Standing, item: CourseItem) {
    match standing {
        Standing::Eligible => bucket.eligible.push(item),
        Standing::PrerequisiteBlocked => bucket.blocked_by_prerequisite.push(item),
        Standing::CreditBlocked => bucket.blocked_by_credit_requirement.push(item),
        Standing::Completed => bucket.already_completed.push(item),
    }
}

/// Groups classifications into the output shape.
///
/// With the elective subcategory present but no chosen track, only the open pool is
/// reported.
pub fn group(
    classifications: Vec<Classification>,
    has_elective_subcategory: bool,
    chosen_group: Option<GroupId>,
) -> EligibilityBreakdown {
    let mut specialized = BucketSet::default();
    let mut chosen = BucketSet::default();
    let mut other = BucketSet::default();
    let mut open_pool = BucketSet::default();

    for c in classifications {
        let bucket = match c.placement {
            Placement::Specialized => &mut specialized,
            Placement::Elective(Track::ChosenTrack) => &mut chosen,
            Placement::Elective(Track::OtherTracks) => &mut other,
            Placement::Elective(Track::OpenPool) => &mut open_pool,
        };
        push(bucket, c.standing, c.item);
    }

    let major_electives = match (has_elective_subcategory, chosen_group) {
        (false, _) => MajorElectives::Absent,
        (true, None) => MajorElectives::NotSelected {
            message: SELECT_CONCENTRATION_MESSAGE.to_string(),
            open_pool,
        },
        (true, Some(_)) => MajorElectives::Selected {
            chosen_track: chosen,
            other_tracks: other,
            open_pool,
        },
    };

    EligibilityBreakdown {
        other_specialized_courses: (!specialized.is_empty()).then_some(specialized),
        major_electives,
    }
}

pub fn classify_and_group(ctx: &AdvisingContext, state: &TranscriptState) -> EligibilityBreakdown {
    let classifications = classify(ctx, state);
    debug!(
        session_id = ctx.session.session_id,
        candidates = classifications.len(),
        eligible = classifications
            .iter()
            .filter(|c| c.standing == Standing::Eligible)
            .count(),
        "classified specialized candidates"
    );
    group(
        classifications,
        ctx.curriculum.elective_subcategory_id.is_some(),
        ctx.session.chosen_group_id,
    )
}

/// Restricts every bucket to the offered codes (case-insensitive). An empty list means no filter.
pub fn filter_offered(breakdown: &mut EligibilityBreakdown, offered: &[String]) {
    if offered.is_empty() {
        return;
    }
    let offered: HashSet<String> = offered.iter().map(|c| c.trim().to_uppercase()).collect();
    let keep = |c: &CourseItem| offered.contains(&c.course_code.to_uppercase());

    if let Some(spec) = breakdown.other_specialized_courses.as_mut() {
        spec.retain(keep);
    }
    match &mut breakdown.major_electives {
        MajorElectives::Absent => {}
        MajorElectives::NotSelected { open_pool, .. } => open_pool.retain(keep),
        MajorElectives::Selected {
            chosen_track,
            other_tracks,
            open_pool,
        } => {
            chosen_track.retain(keep);
            other_tracks.retain(keep);
            open_pool.retain(keep);
        }
    }
}
