//! Grade evaluation: pass/fail for a (student grade, required grade) pair.

/// Letter grade ranks, A=10 down to F=0.
const GRADE_RANK: [(&str, u8); 11] = [
    ("A", 10),
    ("A-", 9),
    ("B+", 8),
    ("B", 7),
    ("B-", 6),
    ("C+", 5),
    ("C", 4),
    ("C-", 3),
    ("D+", 2),
    ("D", 1),
    ("F", 0),
];

/// Always passing: seminar pass and transfer credit.
const SPECIAL_PASS: [&str; 2] = ["S", "TR"];
/// Never passing: withdrawn and in-progress.
const SPECIAL_FAIL: [&str; 2] = ["W", "IP"];

/// Trim + uppercase.
pub fn normalize_grade(grade: &str) -> String {
    grade.trim().to_uppercase()
}

pub fn grade_rank(grade: &str) -> Option<u8> {
    GRADE_RANK
        .iter()
        .find(|(g, _)| *g == grade)
        .map(|(_, rank)| *rank)
}

/// Total over any pair of strings; unknown student grades fail, unknown required
/// grades fall back to `D`.
pub fn is_passing(student_grade: &str, required_grade: &str) -> bool {
    let sg = normalize_grade(student_grade);
    let rg = normalize_grade(required_grade);

    if SPECIAL_PASS.contains(&sg.as_str()) {
        return true;
    }
    if SPECIAL_FAIL.contains(&sg.as_str()) {
        return false;
    }

    let Some(student_rank) = grade_rank(&sg) else {
        return false;
    };
    let required_rank = grade_rank(&rg).unwrap_or(1);

    student_rank >= required_rank
}

/// Classification of a normalized grade token used by transcript ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeToken {
    SeminarPass,
    Transfer,
    Withdrawn,
    InProgress,
    Letter(u8),
    Unknown,
}

impl GradeToken {
    pub fn parse(grade: &str) -> Self {
        let g = normalize_grade(grade);
        match g.as_str() {
            "S" => GradeToken::SeminarPass,
            "TR" => GradeToken::Transfer,
            "W" => GradeToken::Withdrawn,
            "IP" => GradeToken::InProgress,
            other => grade_rank(other)
                .map(GradeToken::Letter)
                .unwrap_or(GradeToken::Unknown),
        }
    }

    /// F, W and IP never earn credit, whatever the course.
    pub fn never_earns(self) -> bool {
        matches!(
            self,
            GradeToken::Letter(0) | GradeToken::Withdrawn | GradeToken::InProgress
        )
    }
}
