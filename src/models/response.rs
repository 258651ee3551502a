//! Structured engine output: eligibility breakdown, elective progress, semester plan
//! and graduation audit. Serialized as-is by the HTTP layer.

use serde::{Deserialize, Serialize};

use super::GroupId;

/// One catalog course code as shown in eligibility buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
}

/// The four mutually exclusive eligibility buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSet {
    pub eligible: Vec<CourseItem>,
    pub blocked_by_prerequisite: Vec<CourseItem>,
    pub blocked_by_credit_requirement: Vec<CourseItem>,
    pub already_completed: Vec<CourseItem>,
}

impl BucketSet {
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
            && self.blocked_by_prerequisite.is_empty()
            && self.blocked_by_credit_requirement.is_empty()
            && self.already_completed.is_empty()
    }

    /// Keeps only items for which `keep` holds, in every bucket.
    pub fn retain<F: Fn(&CourseItem) -> bool>(&mut self, keep: F) {
        self.eligible.retain(|c| keep(c));
        self.blocked_by_prerequisite.retain(|c| keep(c));
        self.blocked_by_credit_requirement.retain(|c| keep(c));
        self.already_completed.retain(|c| keep(c));
    }
}

/// Major Electives section, shaped by whether the subcategory exists and a track is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "track_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorElectives {
    Absent,
    NotSelected {
        message: String,
        open_pool: BucketSet,
    },
    Selected {
        chosen_track: BucketSet,
        other_tracks: BucketSet,
        open_pool: BucketSet,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityBreakdown {
    /// Non-elective specialized candidates; absent when every bucket is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_specialized_courses: Option<BucketSet>,
    pub major_electives: MajorElectives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackStatus {
    Selected,
    NotSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveProgress {
    pub track_status: TrackStatus,
    pub chosen_group_id: Option<GroupId>,
    pub min_from_chosen_group: u32,
    pub min_from_all_groups: u32,
    pub chosen_group_completed: u32,
    pub all_groups_completed: u32,
    pub chosen_group_remaining: u32,
    pub all_groups_remaining: u32,
}

/// Ordering hint for the plan builder; never gates eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityState {
    SelectConcentrationFirst,
    ElectiveRequirementCompleted,
    FocusOnChosenTrack,
    FreeChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub main_category: String,
    pub required_credits: u32,
    pub earned_credits: u32,
    pub remaining_credits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanSource {
    #[serde(rename = "Other Specialized Courses")]
    OtherSpecialized,
    #[serde(rename = "Major Electives (Chosen Track)")]
    ChosenTrack,
    #[serde(rename = "Major Electives (Open Pool)")]
    OpenPool,
    #[serde(rename = "Major Electives (Other Tracks)")]
    OtherTracks,
    #[serde(rename = "Professional Ethics Seminar (Required)")]
    EthicsSeminar,
    #[serde(rename = "General Education")]
    GeneralEducation,
    #[serde(rename = "Free Elective")]
    FreeElective,
}

impl PlanSource {
    /// Entries exempt from the duplicate-code and credit-bound rules of the core plan.
    pub fn is_appended(self) -> bool {
        matches!(
            self,
            PlanSource::EthicsSeminar | PlanSource::GeneralEducation | PlanSource::FreeElective
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    pub source: PlanSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterPlan {
    pub max_credits: u32,
    /// Credits of the bounded core selection; appended entries are not included.
    pub total_credits: u32,
    pub recommended_courses: Vec<PlanEntry>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub session_id: i64,
    pub curriculum_id: i64,
    pub earned_credits: u32,
    pub passed_course_codes: Vec<String>,
    pub failed_course_codes: Vec<String>,
    pub category_progress: Vec<CategoryProgress>,
    pub elective_progress: Option<ElectiveProgress>,
    pub elective_priority: Option<PriorityState>,
    pub eligible_specialized_by_subcategory: EligibilityBreakdown,
    pub next_semester_plan: SemesterPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Completed,
    Incomplete,
}

impl AuditStatus {
    pub fn from_remaining(remaining: u32) -> Self {
        if remaining == 0 {
            AuditStatus::Completed
        } else {
            AuditStatus::Incomplete
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraduationStatus {
    EligibleForGraduation,
    NotEligible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditAudit {
    pub earned_credits: u32,
    pub required_credits: u32,
    pub remaining_credits: u32,
    pub percentage_completed: f64,
    pub status: AuditStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAudit {
    pub main_category: String,
    pub required_credits: u32,
    pub earned_credits: u32,
    pub remaining_credits: u32,
    pub status: AuditStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeminarAudit {
    pub required_total: u32,
    pub completed: u32,
    pub remaining: u32,
    pub status: AuditStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationAudit {
    pub session_id: i64,
    pub curriculum_id: i64,
    pub credit_audit: CreditAudit,
    pub main_category_audit: Vec<CategoryAudit>,
    pub seminar_audit: SeminarAudit,
    pub graduation_status: GraduationStatus,
}
