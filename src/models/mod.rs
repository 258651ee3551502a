// Core data: catalog, curriculum, session and transcript.
//
// Course identity and course-code identity are kept apart on purpose: pass/fail
// and credit state track `CourseId`, catalog lookups and offered-course filtering
// track the code string / `CourseCodeId`.

pub mod response;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use response::*;

pub type CourseId = i64;
pub type CourseCodeId = i64;
pub type SubcategoryId = i64;
pub type MainCategoryId = i64;
pub type GroupId = i64;

/// Group reserved as the open pool, available regardless of the chosen track.
pub const OPEN_POOL_GROUP: GroupId = 3;

/// Catalog code used when a transcript row names an unknown course.
pub const FREE_ELECTIVE_CODE: &str = "FREE_ELECTIVE";

pub const GENERAL_EDUCATION: &str = "General Education";
pub const FREE_ELECTIVES: &str = "Free Electives";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    pub credits: u32,
    pub is_ethics_seminar: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCode {
    pub course_code_id: CourseCodeId,
    pub course_id: CourseId,
    pub course_code: String,
    pub is_active: bool,
}

/// Numeric range rule mapping `<prefix><number>` codes of a subcategory to an elective group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeRange {
    pub subcategory_id: SubcategoryId,
    pub prefix: String,
    pub number_start: u32,
    pub number_end: u32,
    pub group_id: GroupId,
}

/// Global catalog: courses, their code aliases, prerequisite edges and elective group mappings.
///
/// `BTreeMap`s keep every iteration order deterministic so repeated runs over the same
/// snapshot serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: BTreeMap<CourseId, Course>,
    pub codes: BTreeMap<CourseCodeId, CourseCode>,
    /// Direct prerequisites only; no transitive closure is computed.
    pub prerequisites: BTreeMap<CourseId, Vec<CourseId>>,
    pub group_overrides: BTreeMap<CourseCodeId, GroupId>,
    pub code_ranges: Vec<CodeRange>,
}

impl Catalog {
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    pub fn code(&self, id: CourseCodeId) -> Option<&CourseCode> {
        self.codes.get(&id)
    }

    /// Course behind a code alias.
    pub fn course_of_code(&self, id: CourseCodeId) -> Option<&Course> {
        self.codes.get(&id).and_then(|cc| self.courses.get(&cc.course_id))
    }

    /// Case-insensitive lookup of a code string.
    pub fn find_code(&self, code: &str) -> Option<&CourseCode> {
        let wanted = code.trim();
        self.codes
            .values()
            .find(|cc| cc.course_code.eq_ignore_ascii_case(wanted))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainCategory {
    pub main_category_id: MainCategoryId,
    pub name: String,
    pub required_credits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub subcategory_id: SubcategoryId,
    pub main_category_id: MainCategoryId,
    pub name: String,
    pub display_order: i64,
    pub course_code_ids: Vec<CourseCodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveRule {
    pub min_from_chosen_group: u32,
    pub min_from_all_groups: u32,
}

/// Degree program reference data. Never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    pub curriculum_id: i64,
    pub total_required_credits: u32,
    pub main_categories: Vec<MainCategory>,
    /// Ordered by display order.
    pub subcategories: Vec<Subcategory>,
    /// The "Major Electives" subcategory, when the program has one.
    pub elective_subcategory_id: Option<SubcategoryId>,
    pub elective_rule: Option<ElectiveRule>,
    /// Main category whose subcategories supply plan candidates.
    pub specialized_category_id: MainCategoryId,
    pub min_grades: BTreeMap<CourseId, String>,
    /// Credit gates: minimum cumulative earned credits before a course opens.
    pub credit_gates: BTreeMap<CourseId, u32>,
}

impl Curriculum {
    /// Minimum grade for a course, `D` when none is configured.
    pub fn required_grade(&self, course_id: CourseId) -> &str {
        self.min_grades
            .get(&course_id)
            .map(String::as_str)
            .unwrap_or("D")
    }

    pub fn credit_gate(&self, course_id: CourseId) -> u32 {
        self.credit_gates.get(&course_id).copied().unwrap_or(0)
    }

    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.subcategory_id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisingSession {
    pub session_id: i64,
    pub student_id_number: i64,
    pub curriculum_id: i64,
    /// Cached total, recomputed on every transcript upload.
    pub earned_credits: u32,
    pub chosen_group_id: Option<GroupId>,
}

/// One stored transcript row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub attempt_id: i64,
    pub course_code_id: CourseCodeId,
    /// Uppercased at ingestion.
    pub grade: String,
    /// Precomputed at ingestion, never recomputed by the recommendation engine.
    pub credits_earned: u32,
    pub term: Option<String>,
}

/// Request-scoped read-only snapshot every engine operation runs over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisingContext {
    pub session: AdvisingSession,
    pub curriculum: Curriculum,
    pub catalog: Catalog,
    /// Ordered by `attempt_id`.
    pub attempts: Vec<Attempt>,
}

/// Transcript row as supplied by the caller. Credits are always computed at
/// ingestion; a client-sent `credits_earned` is not part of the row and is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRow {
    pub course_code: String,
    pub grade: String,
    #[serde(default)]
    pub term: Option<String>,
}
