//! Delimited-text catalogs with a header row.
//!
//! Quoting follows RFC 4180: a quoted cell may contain commas, doubled
//! quotes and line breaks. Cells are stored as strings; array columns are
//! decoded later by the record accessors.

use etchant_core::Record;
use log::warn;
use serde_json::Value;

/// Split `text` into rows of cells.
///
/// Line endings may be `\n` or `\r\n`. Blank lines outside quotes are
/// dropped. An unterminated quote runs to the end of the input.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => quoted = false,
                other => cell.push(other),
            }
            continue;
        }
        match ch {
            '"' if cell.is_empty() => quoted = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            other => cell.push(other),
        }
    }
    if quoted {
        warn!("unterminated quoted cell at end of CSV input");
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        push_row(&mut rows, row);
    }
    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = matches!(row.as_slice(), [only] if only.trim().is_empty());
    if !blank {
        rows.push(row);
    }
}

/// Parse CSV text into records keyed by the header row.
///
/// Rows whose cell count differs from the header are skipped with a
/// warning naming their position.
///
/// # Examples
/// ```
/// use etchant_data::csv::parse_records;
///
/// let text = "id,name,tags\n1,\"Nital, 2%\",\"[\"\"steel\"\"]\"\n";
/// let records = parse_records(text);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].text("name"), "Nital, 2%");
/// assert_eq!(records[0].sequence("tags"), vec!["steel"]);
/// ```
#[must_use]
pub fn parse_records(text: &str) -> Vec<Record> {
    let body = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = split_rows(body).into_iter();
    let Some(header_cells) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header_cells
        .into_iter()
        .map(|name| name.trim().to_owned())
        .collect();

    rows.enumerate()
        .filter_map(|(index, cells)| {
            if cells.len() != header.len() {
                warn!(
                    "skipping CSV row {}: expected {} cells, found {}",
                    index + 1,
                    header.len(),
                    cells.len()
                );
                return None;
            }
            Some(
                header
                    .iter()
                    .cloned()
                    .zip(cells.into_iter().map(Value::String))
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn quoted_cells_keep_commas_quotes_and_newlines() {
        let text = "id,name,notes\r\n7,\"Keller's, modified\",\"line one\nsaid \"\"hi\"\"\"\r\n";
        let rows = split_rows(text);
        assert_eq!(
            rows,
            [
                vec!["id", "name", "notes"],
                vec!["7", "Keller's, modified", "line one\nsaid \"hi\""],
            ]
        );
    }

    #[rstest]
    fn trailing_row_without_newline_is_kept() {
        assert_eq!(split_rows("a,b\n1,2"), [vec!["a", "b"], vec!["1", "2"]]);
    }

    #[rstest]
    fn empty_trailing_cell_is_preserved() {
        assert_eq!(split_rows("a,b\n1,\n"), [vec!["a", "b"], vec!["1", ""]]);
    }

    #[rstest]
    fn ragged_rows_are_skipped() {
        let records = parse_records("id,name\n1,Nital\n2\n3,Picral,extra\n4,Kroll\n");
        let ids: Vec<_> = records.iter().map(|record| record.text("id")).collect();
        assert_eq!(ids, ["1", "4"]);
    }

    #[rstest]
    fn blank_lines_and_byte_order_mark_are_ignored() {
        let records = parse_records("\u{feff}id,name\n\n1,Nital\n\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records.first().map(|r| r.text("id")), Some("1".to_owned()));
    }

    #[rstest]
    fn header_only_input_has_no_records() {
        assert!(parse_records("id,name\n").is_empty());
        assert!(parse_records("").is_empty());
    }
}
