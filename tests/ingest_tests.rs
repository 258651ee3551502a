mod common;

use common::{CORE_SUB, Fixture};
use curriculum_advisor::AdvisorError;
use curriculum_advisor::algorithm::ingest_transcript;
use curriculum_advisor::models::TranscriptRow;

fn row(code: &str, grade: &str) -> TranscriptRow {
    TranscriptRow {
        course_code: code.to_string(),
        grade: grade.to_string(),
        term: Some("1/2024".to_string()),
    }
}

#[test]
fn known_codes_earn_by_grade_rules() {
    let mut fx = Fixture::new();
    let core = fx.course("CSX3001", 3, CORE_SUB);
    fx.course("CSX3002", 3, CORE_SUB);
    fx.course("CSX3003", 4, CORE_SUB);
    fx.seminar("ETH1001");
    fx.min_grade(core, "C");

    let rows = vec![
        row(" csx3001 ", "c-"),
        row("CSX3002", "tr"),
        row("CSX3003", "IP"),
        row("ETH1001", "S"),
    ];
    let outcome = ingest_transcript(&rows, &fx.ctx.catalog, &fx.ctx.curriculum).unwrap();

    let earned: Vec<u32> = outcome.attempts.iter().map(|a| a.credits_earned).collect();
    assert_eq!(earned, vec![0, 3, 0, 0]);
    assert_eq!(outcome.total_earned, 3);
    assert_eq!(outcome.attempts[0].grade, "C-");
    assert_eq!(outcome.attempts[0].course_code_id, core);
    assert_eq!(outcome.attempts[0].term.as_deref(), Some("1/2024"));
    assert!(outcome.fallback_codes.is_empty());
}

#[test]
fn unknown_code_falls_back_to_free_elective() {
    let mut fx = Fixture::new();
    let fe = fx.free_elective();

    let rows = vec![row("XYZ999", "B"), row("ABC100", "F"), row("ABC200", "W")];
    let outcome = ingest_transcript(&rows, &fx.ctx.catalog, &fx.ctx.curriculum).unwrap();

    assert!(outcome.attempts.iter().all(|a| a.course_code_id == fe));
    let earned: Vec<u32> = outcome.attempts.iter().map(|a| a.credits_earned).collect();
    assert_eq!(earned, vec![3, 0, 0]);
    assert_eq!(outcome.total_earned, 3);
    assert_eq!(outcome.fallback_codes, vec!["XYZ999", "ABC100", "ABC200"]);
}

#[test]
fn missing_free_elective_is_misconfiguration_only_when_needed() {
    let mut fx = Fixture::new();
    fx.course("CSX3001", 3, CORE_SUB);

    let ok = ingest_transcript(&[row("CSX3001", "A")], &fx.ctx.catalog, &fx.ctx.curriculum);
    assert_eq!(ok.unwrap().total_earned, 3);

    let err = ingest_transcript(
        &[row("CSX3001", "A"), row("XYZ999", "B")],
        &fx.ctx.catalog,
        &fx.ctx.curriculum,
    )
    .unwrap_err();
    assert!(matches!(err, AdvisorError::Misconfiguration(_)));
}
