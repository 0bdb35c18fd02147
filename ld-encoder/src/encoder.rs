//! Fixed-rate sample encoding
//!
//! Converts one raw input row into one fixed-length vector of storage
//! values. The encoder is a pass-through: values are parsed and stored
//! unmodified - no unit conversion, scaling or rounding. Missing, empty,
//! sentinel or unparsable fields become `0.0`; a single corrupt field
//! must not abort a multi-hour session, so encoding never fails.

use crate::types::EncodedRow;

/// Sentinel written by the logger when a sensor had no reading.
const NONE_SENTINEL: &str = "None";

/// Encode one raw row against the table's accepted source columns.
///
/// Returns the encoded row (always exactly `accepted_columns.len()`
/// values, in table order) and the number of fields that were defaulted
/// to `0.0`. Pure function of its inputs.
pub fn encode_row(row: &[String], accepted_columns: &[usize]) -> (EncodedRow, usize) {
    let mut values = Vec::with_capacity(accepted_columns.len());
    let mut defaulted = 0;

    for &column in accepted_columns {
        match parse_field(row.get(column).map(String::as_str)) {
            Some(value) => values.push(value),
            None => {
                values.push(0.0);
                defaulted += 1;
            }
        }
    }

    (values, defaulted)
}

/// Parse one raw field at storage precision. `None` means "default it".
fn parse_field(raw: Option<&str>) -> Option<f32> {
    let text = raw?.trim();
    if text.is_empty() || text == NONE_SENTINEL {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_well_formed_row_is_passed_through() {
        let row = row(&["0", "0.002", "100.5", "-3.25"]);
        let (encoded, defaulted) = encode_row(&row, &[1, 2, 3]);

        assert_eq!(encoded, vec![0.002, 100.5, -3.25]);
        assert_eq!(defaulted, 0);
    }

    #[test]
    fn test_output_length_matches_accepted_columns() {
        let row = row(&["0", "1.0"]);
        let (encoded, _) = encode_row(&row, &[1, 5, 9]);
        assert_eq!(encoded.len(), 3);
    }

    #[test]
    fn test_empty_field_defaults_to_zero() {
        let row = row(&["0", "", "2.5"]);
        let (encoded, defaulted) = encode_row(&row, &[1, 2]);

        assert_eq!(encoded, vec![0.0, 2.5]);
        assert_eq!(defaulted, 1);
    }

    #[test]
    fn test_none_sentinel_defaults_to_zero() {
        let row = row(&["0", "None", "2.5"]);
        let (encoded, defaulted) = encode_row(&row, &[1, 2]);

        assert_eq!(encoded, vec![0.0, 2.5]);
        assert_eq!(defaulted, 1);
    }

    #[test]
    fn test_unparsable_field_defaults_to_zero() {
        let row = row(&["0", "12.3.4", "nope"]);
        let (encoded, defaulted) = encode_row(&row, &[1, 2]);

        assert_eq!(encoded, vec![0.0, 0.0]);
        assert_eq!(defaulted, 2);
    }

    #[test]
    fn test_short_row_defaults_missing_trailing_columns() {
        // Row ends at column 2; columns 3 and 4 lie past its end
        let row = row(&["0", "1.5", "2.5"]);
        let (encoded, defaulted) = encode_row(&row, &[1, 2, 3, 4]);

        assert_eq!(encoded, vec![1.5, 2.5, 0.0, 0.0]);
        assert_eq!(defaulted, 2);
    }

    #[test]
    fn test_whitespace_padded_value_parses() {
        let row = row(&["0", " 42.0 "]);
        let (encoded, defaulted) = encode_row(&row, &[1]);

        assert_eq!(encoded, vec![42.0]);
        assert_eq!(defaulted, 0);
    }

    #[test]
    fn test_never_fails_on_fully_malformed_row() {
        let row = row(&["x", "y", "z"]);
        let (encoded, defaulted) = encode_row(&row, &[0, 1, 2]);

        assert_eq!(encoded, vec![0.0, 0.0, 0.0]);
        assert_eq!(defaulted, 3);
    }
}
