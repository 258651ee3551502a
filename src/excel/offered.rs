//! Lectura de la oferta del próximo semestre (una columna de códigos).

use calamine::{Data, Range};
use std::collections::BTreeSet;

use crate::error::{AdvisorError, AdvisorResult};
use crate::excel::io::{cell_at, find_column, read_sheet_from_bytes};

/// Códigos de la columna `course_code` de la primera hoja, en mayúsculas, en el
/// orden de la hoja y sin duplicados.
pub fn parse_offered_range(range: &Range<Data>) -> AdvisorResult<Vec<String>> {
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        AdvisorError::MalformedWorkbook("offered-courses sheet is empty".to_string())
    })?;
    let col = find_column(header, &["course_code", "coursecode"]).ok_or_else(|| {
        AdvisorError::MalformedWorkbook(
            "offered-courses sheet has no course_code column".to_string(),
        )
    })?;

    let mut seen = BTreeSet::new();
    let mut codes = Vec::new();
    for row in rows {
        let code = cell_at(row, col).to_uppercase();
        if !code.is_empty() && seen.insert(code.clone()) {
            codes.push(code);
        }
    }
    Ok(codes)
}

pub fn read_offered_courses_from_bytes(bytes: Vec<u8>) -> AdvisorResult<Vec<String>> {
    parse_offered_range(&read_sheet_from_bytes(bytes, 0)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_unique_uppercase_codes() {
        let mut range = Range::new((0, 0), (4, 0));
        range.set_value((0, 0), Data::String("course_code".into()));
        range.set_value((1, 0), Data::String("csx3003".into()));
        range.set_value((2, 0), Data::String("CSX3003".into()));
        range.set_value((3, 0), Data::Empty);
        range.set_value((4, 0), Data::String("ELE2000".into()));
        assert_eq!(
            parse_offered_range(&range).unwrap(),
            vec!["CSX3003".to_string(), "ELE2000".to_string()]
        );
    }
}
