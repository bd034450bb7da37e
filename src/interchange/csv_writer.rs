//! CSV serialization of tables and the saved-row export.

use crate::models::{SAVED_ROW_HEADER, SavedRow};

use super::BYTE_ORDER_MARK;

/// Suggested file name for the saved-row export.
pub const EXPORT_FILE_NAME: &str = "출장비_계산_테이블.csv";

/// Content type of the saved-row export.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// Escapes one CSV cell.
///
/// `None` becomes an empty cell. A value containing a double quote, a
/// comma, or a line terminator is wrapped in double quotes with internal
/// quotes doubled; anything else is written as is.
///
/// # Examples
///
/// ```
/// use trip_expense::interchange::csv_escape_cell;
///
/// assert_eq!(csv_escape_cell(None), "");
/// assert_eq!(csv_escape_cell(Some("광주-서울")), "광주-서울");
/// assert_eq!(csv_escape_cell(Some("쉼표,포함")), "\"쉼표,포함\"");
/// assert_eq!(csv_escape_cell(Some("say \"hi\"")), "\"say \"\"hi\"\"\"");
/// ```
pub fn csv_escape_cell(value: Option<&str>) -> String {
    let value = value.unwrap_or_default();
    if value.contains(&['"', ',', '\r', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serializes rows of cells to CSV text.
///
/// Cells are joined with `,` and rows with `\n`. There is no trailing
/// newline and no byte order mark.
///
/// # Examples
///
/// ```
/// use trip_expense::interchange::to_csv;
///
/// let text = to_csv(&[["No", "메모"], ["1", "줄\n바꿈"]]);
/// assert_eq!(text, "No,메모\n1,\"줄\n바꿈\"");
/// ```
pub fn to_csv<R, C>(rows: &[R]) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| csv_escape_cell(Some(cell.as_ref())))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders saved rows as the downloadable export.
///
/// The text starts with a byte order mark, followed by the fixed header
/// and one line per row with amounts formatted as currency.
///
/// # Examples
///
/// ```
/// use trip_expense::interchange::export_saved_rows;
///
/// let text = export_saved_rows(&[]);
/// assert_eq!(text, "\u{FEFF}No,일자,일비(순액),식비(순액),교통비,숙박비,총 감액,지급예상금액");
/// ```
pub fn export_saved_rows(rows: &[SavedRow]) -> String {
    let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    table.push(SAVED_ROW_HEADER.iter().map(|h| h.to_string()).collect());
    table.extend(rows.iter().map(SavedRow::export_cells));

    let mut text = String::new();
    text.push(BYTE_ORDER_MARK);
    text.push_str(&to_csv(&table));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(sequence_number: u32) -> SavedRow {
        SavedRow {
            sequence_number,
            period_label: "2025-09-10~2025-09-11 (2일)".to_string(),
            per_diem_net: 50_000,
            meal_net: 41_670,
            transport_total: 90_000,
            lodging_total: 60_000,
            total_deduction: 8_330,
            grand_total: 241_670,
        }
    }

    #[test]
    fn test_plain_cells_untouched() {
        assert_eq!(csv_escape_cell(Some("")), "");
        assert_eq!(csv_escape_cell(Some("45000")), "45000");
        assert_eq!(csv_escape_cell(Some("a b;c")), "a b;c");
    }

    #[test]
    fn test_quotes_for_each_special_character() {
        assert_eq!(csv_escape_cell(Some("a,b")), "\"a,b\"");
        assert_eq!(csv_escape_cell(Some("a\nb")), "\"a\nb\"");
        assert_eq!(csv_escape_cell(Some("a\rb")), "\"a\rb\"");
        assert_eq!(csv_escape_cell(Some("\"")), "\"\"\"\"");
    }

    #[test]
    fn test_to_csv_has_no_trailing_newline() {
        let text = to_csv(&[vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(text, "a,b\nc,d");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_to_csv_quotes_newline_and_comma_cells() {
        let text = to_csv(&[
            vec!["No".to_string(), "메모".to_string()],
            vec!["1".to_string(), "줄\n바꿈".to_string()],
            vec!["2".to_string(), "쉼표,포함".to_string()],
        ]);
        assert!(text.contains("\"줄\n바꿈\""));
        assert!(text.contains("\"쉼표,포함\""));
    }

    #[test]
    fn test_to_csv_empty_table() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(to_csv(&rows), "");
    }

    #[test]
    fn test_export_starts_with_bom() {
        let text = export_saved_rows(&[sample_row(1)]);
        assert_eq!(text.chars().next(), Some('\u{FEFF}'));
    }

    #[test]
    fn test_export_quotes_formatted_amounts() {
        let text = export_saved_rows(&[sample_row(1), sample_row(2)]);
        let lines: Vec<&str> = text.trim_start_matches('\u{FEFF}').split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1,2025-09-10~2025-09-11 (2일),\"50,000원\",\"41,670원\",\"90,000원\",\"60,000원\",\"8,330원\",\"241,670원\""
        );
        assert!(lines[2].starts_with("2,"));
    }
}
