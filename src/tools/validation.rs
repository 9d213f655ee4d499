//! Input validation for tool arguments

use chrono::{Datelike, NaiveDate};

use super::ToolError;

/// Accept only `YYYY-MM-DD` strings that name a real calendar day
pub fn validate_date(date: &str) -> Result<NaiveDate, ToolError> {
    let bytes = date.as_bytes();
    // chrono alone would also accept unpadded fields and signed years
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ToolError::Validation(
            "Date must be in YYYY-MM-DD format".to_string(),
        ));
    }

    // Year 0 does not exist in the Gregorian calendar the upstream uses
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .filter(|parsed| parsed.year() >= 1)
        .ok_or_else(|| {
            ToolError::Validation(format!(
                "Date must be a valid calendar date in YYYY-MM-DD format, got '{}'",
                date
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_dates() {
        assert_eq!(
            validate_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(validate_date("2024-02-29").is_ok());
        assert!(validate_date("2023-12-31").is_ok());
        assert!(validate_date("0001-01-01").is_ok());
    }

    #[test]
    fn test_rejects_wrong_format() {
        for bad in [
            "15-01-2024",
            "2024/01/15",
            "2024-1-15",
            "2024-01-5",
            "20240115",
            "2024-01-15T00:00:00",
            " 2024-01-15",
            "+2024-01-15",
            "",
            "yyyy-mm-dd",
        ] {
            assert!(
                matches!(validate_date(bad), Err(ToolError::Validation(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_impossible_calendar_dates() {
        for bad in ["0000-01-01", "0000-02-29", "2024-02-30", "2023-02-29", "2024-04-31", "2024-13-01", "2024-00-10", "2024-01-00"] {
            assert!(
                matches!(validate_date(bad), Err(ToolError::Validation(_))),
                "accepted {:?}",
                bad
            );
        }
    }
}
