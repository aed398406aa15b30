//! Delimited-text dataset parser.
//!
//! The upstream dataset is plain comma-separated text with a header row and
//! no quoting, so parsing is a positional split: the header fields define the
//! column names and each later line aligns its values to them by index.
//! Quoted fields, escaped delimiters, and embedded newlines are not handled;
//! on such input the alignment is silently wrong. That matches the upstream
//! dataset contract and is deliberate.

use crate::model::Record;

const DELIMITER: char = ',';

/// Parse raw delimited text into ordered records.
///
/// The first line is the header row, each name trimmed of surrounding
/// whitespace. Every following non-empty line becomes one [`Record`]; cell
/// values are trimmed the same way. A row with fewer fields than headers
/// leaves the missing columns absent rather than erroring, and fields beyond
/// the last header are dropped. Fully-empty lines (including the
/// trailing-newline artifact) are skipped.
pub fn parse_table(text: &str) -> Vec<Record> {
    let mut lines = text.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(DELIMITER).map(str::trim).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            headers
                .iter()
                .zip(line.split(DELIMITER))
                .map(|(header, value)| (header.to_string(), value.trim().to_string()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_rows_two_columns() {
        let records = parse_table("a,b\n1,2\n3,4");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("a"), Some("1"));
        assert_eq!(records[0].get("b"), Some("2"));
        assert_eq!(records[1].get("a"), Some("3"));
        assert_eq!(records[1].get("b"), Some("4"));
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn short_row_leaves_missing_columns_absent() {
        let records = parse_table("a,b,c\n1,2");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("a"), Some("1"));
        assert_eq!(records[0].get("b"), Some("2"));
        assert_eq!(records[0].get("c"), None);
    }

    #[test]
    fn extra_fields_beyond_headers_are_dropped() {
        let records = parse_table("a,b\n1,2,3,4");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("b"), Some("2"));
    }

    #[test]
    fn trailing_newline_yields_no_extra_record() {
        let records = parse_table("a,b\n1,2\n3,4\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn interior_blank_lines_are_skipped() {
        let records = parse_table("a,b\n1,2\n\n   \n3,4");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn headers_and_values_are_trimmed() {
        let records = parse_table(" Entity , Year \n World , 2023 ");
        assert_eq!(records[0].get("Entity"), Some("World"));
        assert_eq!(records[0].get("Year"), Some("2023"));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_table("").is_empty());
    }

    #[test]
    fn header_only_input_yields_no_records() {
        assert!(parse_table("a,b,c\n").is_empty());
    }

    #[test]
    fn quoted_field_splits_positionally() {
        // Known fragility, preserved: quoting is not interpreted, so a quoted
        // delimiter shifts every later column.
        let records = parse_table("a,b\n\"1,5\",2");
        assert_eq!(records[0].get("a"), Some("\"1"));
        assert_eq!(records[0].get("b"), Some("5\""));
    }
}
