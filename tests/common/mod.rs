#![allow(dead_code)]
//! Advising context builder shared by the integration tests.

use std::collections::BTreeMap;

use curriculum_advisor::algorithm::ingest::earned_for_course;
use curriculum_advisor::models::{
    AdvisingContext, AdvisingSession, Attempt, Catalog, CodeRange, Course, CourseCode, Curriculum,
    ElectiveRule, FREE_ELECTIVE_CODE, FREE_ELECTIVES, GENERAL_EDUCATION, MainCategory,
    Subcategory,
};

pub const GE_CATEGORY: i64 = 1;
pub const SPECIALIZED_CATEGORY: i64 = 2;
pub const FE_CATEGORY: i64 = 3;

pub const GE_SUB: i64 = 10;
pub const CORE_SUB: i64 = 20;
pub const ELECTIVE_SUB: i64 = 21;
pub const FE_SUB: i64 = 30;

/// Curriculum 1 with General Education (30), Specialized (84) and Free Electives (6);
/// 120 credits in total. Course ids equal the code id they were created with.
pub struct Fixture {
    pub ctx: AdvisingContext,
    next_id: i64,
    next_attempt: i64,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        let sub = |id, main, name: &str, order| Subcategory {
            subcategory_id: id,
            main_category_id: main,
            name: name.to_string(),
            display_order: order,
            course_code_ids: Vec::new(),
        };
        let curriculum = Curriculum {
            curriculum_id: 1,
            total_required_credits: 120,
            main_categories: vec![
                MainCategory {
                    main_category_id: GE_CATEGORY,
                    name: GENERAL_EDUCATION.to_string(),
                    required_credits: 30,
                },
                MainCategory {
                    main_category_id: SPECIALIZED_CATEGORY,
                    name: "Specialized Courses".to_string(),
                    required_credits: 84,
                },
                MainCategory {
                    main_category_id: FE_CATEGORY,
                    name: FREE_ELECTIVES.to_string(),
                    required_credits: 6,
                },
            ],
            subcategories: vec![
                sub(GE_SUB, GE_CATEGORY, "Language Courses", 1),
                sub(CORE_SUB, SPECIALIZED_CATEGORY, "Core Courses", 2),
                sub(ELECTIVE_SUB, SPECIALIZED_CATEGORY, "Major Electives", 3),
                sub(FE_SUB, FE_CATEGORY, "Free Elective Courses", 4),
            ],
            elective_subcategory_id: Some(ELECTIVE_SUB),
            elective_rule: None,
            specialized_category_id: SPECIALIZED_CATEGORY,
            min_grades: BTreeMap::new(),
            credit_gates: BTreeMap::new(),
        };

        Self {
            ctx: AdvisingContext {
                session: AdvisingSession {
                    session_id: 1,
                    student_id_number: 6_512_345,
                    curriculum_id: 1,
                    earned_credits: 0,
                    chosen_group_id: None,
                },
                curriculum,
                catalog: Catalog::default(),
                attempts: Vec::new(),
            },
            next_id: 100,
            next_attempt: 1,
        }
    }

    fn insert(&mut self, code: &str, credits: u32, seminar: bool, sub: Option<i64>) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ctx.catalog.courses.insert(
            id,
            Course {
                course_id: id,
                course_name: format!("{code} course"),
                credits,
                is_ethics_seminar: seminar,
                is_active: true,
            },
        );
        self.ctx.catalog.codes.insert(
            id,
            CourseCode {
                course_code_id: id,
                course_id: id,
                course_code: code.to_string(),
                is_active: true,
            },
        );
        if let Some(sub) = sub {
            self.place(id, sub);
        }
        id
    }

    /// Adds a course with a single code; returns the code id (== course id).
    pub fn course(&mut self, code: &str, credits: u32, sub: i64) -> i64 {
        self.insert(code, credits, false, Some(sub))
    }

    /// Course known to the catalog but not mapped into any subcategory.
    pub fn unmapped_course(&mut self, code: &str, credits: u32) -> i64 {
        self.insert(code, credits, false, None)
    }

    pub fn seminar(&mut self, code: &str) -> i64 {
        self.insert(code, 0, true, None)
    }

    pub fn free_elective(&mut self) -> i64 {
        self.insert(FREE_ELECTIVE_CODE, 3, false, Some(FE_SUB))
    }

    /// Second code for an existing course.
    pub fn alias(&mut self, course_id: i64, code: &str, sub: i64) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ctx.catalog.codes.insert(
            id,
            CourseCode {
                course_code_id: id,
                course_id,
                course_code: code.to_string(),
                is_active: true,
            },
        );
        self.place(id, sub);
        id
    }

    pub fn place(&mut self, code_id: i64, sub: i64) {
        if let Some(s) = self
            .ctx
            .curriculum
            .subcategories
            .iter_mut()
            .find(|s| s.subcategory_id == sub)
        {
            s.course_code_ids.push(code_id);
        }
    }

    pub fn prerequisite(&mut self, course_id: i64, prereq_id: i64) {
        self.ctx
            .catalog
            .prerequisites
            .entry(course_id)
            .or_default()
            .push(prereq_id);
    }

    pub fn credit_gate(&mut self, course_id: i64, credits: u32) {
        self.ctx.curriculum.credit_gates.insert(course_id, credits);
    }

    pub fn min_grade(&mut self, course_id: i64, grade: &str) {
        self.ctx
            .curriculum
            .min_grades
            .insert(course_id, grade.to_string());
    }

    pub fn group_range(&mut self, prefix: &str, start: u32, end: u32, group_id: i64) {
        self.ctx.catalog.code_ranges.push(CodeRange {
            subcategory_id: ELECTIVE_SUB,
            prefix: prefix.to_string(),
            number_start: start,
            number_end: end,
            group_id,
        });
    }

    pub fn group_override(&mut self, code_id: i64, group_id: i64) {
        self.ctx.catalog.group_overrides.insert(code_id, group_id);
    }

    pub fn elective_rule(&mut self, chosen: u32, all: u32) {
        self.ctx.curriculum.elective_rule = Some(ElectiveRule {
            min_from_chosen_group: chosen,
            min_from_all_groups: all,
        });
    }

    pub fn choose(&mut self, group_id: i64) {
        self.ctx.session.chosen_group_id = Some(group_id);
    }

    /// Records an attempt with `credits_earned` computed the way ingestion does.
    pub fn take(&mut self, code_id: i64, grade: &str) {
        let (credits, seminar, course_id) = {
            let code = &self.ctx.catalog.codes[&code_id];
            let course = &self.ctx.catalog.courses[&code.course_id];
            (course.credits, course.is_ethics_seminar, course.course_id)
        };
        let required = self.ctx.curriculum.required_grade(course_id).to_string();
        let earned = earned_for_course(grade, credits, seminar, &required);
        self.take_with_credits(code_id, grade, earned);
    }

    pub fn take_with_credits(&mut self, code_id: i64, grade: &str, credits_earned: u32) {
        self.ctx.attempts.push(Attempt {
            attempt_id: self.next_attempt,
            course_code_id: code_id,
            grade: grade.trim().to_uppercase(),
            credits_earned,
            term: None,
        });
        self.next_attempt += 1;
        self.ctx.session.earned_credits += credits_earned;
    }

    pub fn build(&self) -> AdvisingContext {
        self.ctx.clone()
    }
}
