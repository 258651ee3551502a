//! Lectura del transcript exportado por el registro académico.

use calamine::{Data, Range};
use tracing::warn;

use crate::error::{AdvisorError, AdvisorResult};
use crate::excel::io::{cell_at, find_column, read_sheet_from_bytes};
use crate::models::TranscriptRow;

/// El export del registro trae los ramos en la segunda hoja.
const TRANSCRIPT_SHEET: usize = 1;

/// Parsea la hoja del transcript: encabezados `Course_Code` y `Grade`, más
/// `Semester` / `Year` opcionales. Se omiten filas sin código o sin nota.
pub fn parse_transcript_range(range: &Range<Data>) -> AdvisorResult<Vec<TranscriptRow>> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| AdvisorError::MalformedWorkbook("transcript sheet is empty".to_string()))?;

    let code_col = find_column(header, &["course_code", "coursecode"]).ok_or_else(|| {
        AdvisorError::MalformedWorkbook("transcript sheet has no Course_Code column".to_string())
    })?;
    let grade_col = find_column(header, &["grade"]).ok_or_else(|| {
        AdvisorError::MalformedWorkbook("transcript sheet has no Grade column".to_string())
    })?;
    let semester_col = find_column(header, &["semester"]);
    let year_col = find_column(header, &["year"]);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let course_code = cell_at(row, code_col);
        let grade = cell_at(row, grade_col);
        if course_code.is_empty() || grade.is_empty() {
            skipped += 1;
            continue;
        }

        let semester = semester_col.map(|c| cell_at(row, c)).unwrap_or_default();
        let year = year_col.map(|c| cell_at(row, c)).unwrap_or_default();
        let term = match (semester.is_empty(), year.is_empty()) {
            (false, false) => Some(format!("{semester}/{year}")),
            (false, true) => Some(semester),
            (true, false) => Some(year),
            (true, true) => None,
        };

        out.push(TranscriptRow {
            course_code,
            grade,
            term,
        });
    }

    if skipped > 0 {
        warn!(skipped, "transcript rows without code or grade were skipped");
    }
    Ok(out)
}

pub fn read_transcript_workbook_from_bytes(bytes: Vec<u8>) -> AdvisorResult<Vec<TranscriptRow>> {
    parse_transcript_range(&read_sheet_from_bytes(bytes, TRANSCRIPT_SHEET)?)
}
