//! Due date parsing for the lesson screen's date field.

use std::fmt;

use chrono::NaiveDate;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
/// `YYYY-MM-DD`
pub const DUE_DATE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDateError;

impl fmt::Display for DueDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date format. Use YYYY-MM-DD")
    }
}

impl std::error::Error for DueDateError {}

/// Parses a strict `YYYY-MM-DD` calendar date. `2024-2-5` and `2024-02-30` are both rejected.
pub fn parse_due_date(input: &str) -> Result<NaiveDate, DueDateError> {
    if input.len() != DUE_DATE_LEN {
        return Err(DueDateError);
    }
    let date = NaiveDate::parse_from_str(input, DUE_DATE_FORMAT).map_err(|_| DueDateError)?;
    // chrono accepts unpadded fields; insist on the canonical spelling.
    if date.format(DUE_DATE_FORMAT).to_string() != input {
        return Err(DueDateError);
    }
    Ok(date)
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = parse_due_date("2024-02-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(format_due_date(date), "2024-02-15");
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(parse_due_date("2024-02-30"), Err(DueDateError));
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_due_date("2024-02-29").is_ok());
        assert!(parse_due_date("2023-02-29").is_err());
    }

    #[test]
    fn test_rejects_other_shapes() {
        for input in ["", "2024-2-15", "2024/02/15", "15-02-2024", "2024-02-15x", "tomorrow"] {
            assert!(parse_due_date(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            DueDateError.to_string(),
            "invalid date format. Use YYYY-MM-DD"
        );
    }
}
