use calamine::{Data, Range, Reader, Sheets, open_workbook_auto_from_rs};
use std::io::{Cursor, Read, Seek};

use crate::error::{AdvisorError, AdvisorResult};

/// Convierte una celda de calamine a String; los floats enteros pierden el ".0".
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty | Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Índice de la primera columna cuyo encabezado coincide con alguno de `names`.
pub fn find_column(header: &[Data], names: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let h = normalize_header(&cell_to_string(cell));
        names.iter().any(|n| normalize_header(n) == h)
    })
}

/// Texto de la celda `idx` sin espacios; vacío si la fila es más corta.
pub fn cell_at(row: &[Data], idx: usize) -> String {
    row.get(idx).map(cell_to_string).unwrap_or_default()
}

fn sheet_at<RS: Read + Seek>(workbook: &mut Sheets<RS>, index: usize) -> AdvisorResult<Range<Data>> {
    match workbook.worksheet_range_at(index) {
        Some(range) => Ok(range?),
        None => Err(AdvisorError::MalformedWorkbook(format!(
            "workbook has no sheet at position {}",
            index + 1
        ))),
    }
}

fn preferred_sheet<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    preferred: usize,
) -> AdvisorResult<Range<Data>> {
    let count = workbook.sheet_names().len();
    if count == 0 {
        return Err(AdvisorError::MalformedWorkbook(
            "workbook has no sheets".to_string(),
        ));
    }
    sheet_at(workbook, preferred.min(count - 1))
}

/// Lee la hoja `preferred` (base 0) de una planilla subida, o la última si hay
/// menos hojas.
pub fn read_sheet_from_bytes(bytes: Vec<u8>, preferred: usize) -> AdvisorResult<Range<Data>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    preferred_sheet(&mut workbook, preferred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_without_fraction_print_as_integers() {
        assert_eq!(cell_to_string(&Data::Float(2024.0)), "2024");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::String("  CSX3003 ".into())), "CSX3003");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn headers_match_ignoring_case_and_spaces() {
        let header = vec![
            Data::String("Course_Code".into()),
            Data::String(" grade ".into()),
        ];
        assert_eq!(find_column(&header, &["course_code"]), Some(0));
        assert_eq!(find_column(&header, &["Grade"]), Some(1));
        assert_eq!(find_column(&header, &["Year"]), None);
    }
}
