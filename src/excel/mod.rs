//! Importación de planillas (xlsx/xls/ods) con calamine.
//!
//! Submódulos:
//! - `io`: helpers de celdas, encabezados y apertura de hojas
//! - `transcript`: transcript del estudiante (segunda hoja)
//! - `offered`: códigos ofrecidos el próximo semestre (primera hoja)

mod io;

pub mod offered;
pub mod transcript;

pub use io::{cell_to_string, normalize_header};
pub use offered::{parse_offered_range, read_offered_courses_from_bytes};
pub use transcript::{parse_transcript_range, read_transcript_workbook_from_bytes};
