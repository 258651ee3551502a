//! Transcript ingestion: computes `credits_earned` per row before it is stored.

use tracing::warn;

use crate::algorithm::grading::{GradeToken, is_passing, normalize_grade};
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{Catalog, CourseCodeId, Curriculum, FREE_ELECTIVE_CODE, TranscriptRow};

/// Attempt ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttempt {
    pub course_code_id: CourseCodeId,
    pub grade: String,
    pub credits_earned: u32,
    pub term: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    pub attempts: Vec<NewAttempt>,
    pub total_earned: u32,
    /// Codes not found in the catalog, recorded against FREE_ELECTIVE.
    pub fallback_codes: Vec<String>,
}

/// Credits a known course earns for a grade under the curriculum's minimum-grade rule.
pub fn earned_for_course(
    grade: &str,
    credits: u32,
    is_seminar: bool,
    required_grade: &str,
) -> u32 {
    if is_seminar {
        return 0;
    }
    match GradeToken::parse(grade) {
        GradeToken::Transfer => credits,
        token if token.never_earns() => 0,
        _ if is_passing(grade, required_grade) => credits,
        _ => 0,
    }
}

/// Converts uploaded rows to attempts. Fails only when an unknown code needs the
/// FREE_ELECTIVE fallback and the catalog does not define it.
pub fn ingest_transcript(
    rows: &[TranscriptRow],
    catalog: &Catalog,
    curriculum: &Curriculum,
) -> AdvisorResult<IngestOutcome> {
    let mut outcome = IngestOutcome::default();

    for row in rows {
        let grade = normalize_grade(&row.grade);

        let (course_code_id, earned) = match catalog.find_code(&row.course_code) {
            Some(code) => {
                let Some(course) = catalog.course(code.course_id) else {
                    return Err(AdvisorError::Misconfiguration(format!(
                        "course code {} points at missing course {}",
                        code.course_code, code.course_id
                    )));
                };
                let earned = earned_for_course(
                    &grade,
                    course.credits,
                    course.is_ethics_seminar,
                    curriculum.required_grade(course.course_id),
                );
                (code.course_code_id, earned)
            }
            None => {
                let fallback = catalog
                    .find_code(FREE_ELECTIVE_CODE)
                    .and_then(|cc| catalog.course(cc.course_id).map(|c| (cc, c)));
                let Some((code, course)) = fallback else {
                    return Err(AdvisorError::Misconfiguration(
                        "FREE_ELECTIVE not configured".to_string(),
                    ));
                };
                warn!(
                    course_code = %row.course_code,
                    "unknown course code, recording as {FREE_ELECTIVE_CODE}"
                );
                outcome.fallback_codes.push(row.course_code.trim().to_string());
                let earned = if GradeToken::parse(&grade).never_earns() {
                    0
                } else {
                    course.credits
                };
                (code.course_code_id, earned)
            }
        };

        outcome.total_earned += earned;
        outcome.attempts.push(NewAttempt {
            course_code_id,
            grade,
            credits_earned: earned,
            term: row.term.clone(),
        });
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_credit_rules() {
        assert_eq!(earned_for_course("S", 0, true, "D"), 0);
        assert_eq!(earned_for_course("A", 3, true, "D"), 0);
        assert_eq!(earned_for_course("TR", 3, false, "A"), 3);
        assert_eq!(earned_for_course("IP", 3, false, "D"), 0);
        assert_eq!(earned_for_course("W", 3, false, "D"), 0);
        assert_eq!(earned_for_course("F", 3, false, "F"), 0);
        assert_eq!(earned_for_course("C", 3, false, "B"), 0);
        assert_eq!(earned_for_course("B", 3, false, "B"), 3);
        assert_eq!(earned_for_course("??", 3, false, "D"), 0);
    }
}
