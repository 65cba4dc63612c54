//! Field rules for a candidate student record.
//!
//! Rules run in a fixed order and the first failure wins: full name, date
//! format, date not in the future, GPA range.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::ValidationError;
use crate::types::StudentDraft;

/// Letters and whitespace only, at least one character.
static FULL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// `YYYY-MM-DD`, ASCII digits only.
static DOB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

const GPA_MIN: f64 = 0.0;
const GPA_MAX: f64 = 4.0;

/// Validate against today's local date.
pub fn validate(full_name: &str, dob: &str, gpa: &str) -> Result<(), ValidationError> {
    validate_on(Local::now().date_naive(), full_name, dob, gpa)
}

/// Validate with an explicit "today", so results do not depend on the clock.
pub fn validate_on(
    today: NaiveDate,
    full_name: &str,
    dob: &str,
    gpa: &str,
) -> Result<(), ValidationError> {
    if !FULL_NAME_RE.is_match(full_name) {
        return Err(ValidationError::FullName);
    }

    if !DOB_RE.is_match(dob) {
        return Err(ValidationError::DobFormat);
    }
    // Shape is right but the date may still not exist (2001-02-30).
    let date =
        NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|_| ValidationError::DobFormat)?;
    if date > today {
        return Err(ValidationError::DobInFuture);
    }

    match gpa.parse::<f64>() {
        Ok(value) if (GPA_MIN..=GPA_MAX).contains(&value) => Ok(()),
        _ => Err(ValidationError::Gpa),
    }
}

impl StudentDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.full_name, &self.dob, &self.gpa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn check(full_name: &str, dob: &str, gpa: &str) -> Result<(), ValidationError> {
        validate_on(today(), full_name, dob, gpa)
    }

    #[test]
    fn accepts_a_well_formed_record() {
        assert_eq!(validate("Jane Doe", "2000-01-01", "3.5"), Ok(()));
    }

    #[test]
    fn rejects_names_with_digits_or_symbols() {
        for name in ["John2", "O'Brien", "Anne-Marie", "Jane_Doe", "J.Doe", "Zoë", ""] {
            assert_eq!(
                check(name, "2000-01-01", "3.5"),
                Err(ValidationError::FullName),
                "{name:?}"
            );
        }
    }

    #[test]
    fn accepts_names_with_inner_whitespace() {
        assert_eq!(check("Mary  Ann\tSmith", "2000-01-01", "3.5"), Ok(()));
    }

    #[test]
    fn rejects_malformed_dates() {
        for dob in ["2000-1-01", "01-01-2000", "2000/01/01", "20000-01-01", "", "2000-01-01 "] {
            assert_eq!(
                check("Jane Doe", dob, "3.5"),
                Err(ValidationError::DobFormat),
                "{dob:?}"
            );
        }
    }

    #[test]
    fn rejects_non_ascii_digits_in_date() {
        assert_eq!(
            check("Jane Doe", "２０００-01-01", "3.5"),
            Err(ValidationError::DobFormat)
        );
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert_eq!(
            check("Jane Doe", "2001-02-30", "3.5"),
            Err(ValidationError::DobFormat)
        );
        assert_eq!(
            check("Jane Doe", "2001-13-01", "3.5"),
            Err(ValidationError::DobFormat)
        );
    }

    #[test]
    fn rejects_future_dates() {
        assert_eq!(
            check("Jane Doe", "2024-06-16", "3.5"),
            Err(ValidationError::DobInFuture)
        );
        assert_eq!(
            check("Jane Doe", "2999-01-01", "3.5"),
            Err(ValidationError::DobInFuture)
        );
    }

    #[test]
    fn accepts_today() {
        assert_eq!(check("Jane Doe", "2024-06-15", "3.5"), Ok(()));
    }

    #[test]
    fn rejects_tomorrow_against_the_real_clock() {
        let tomorrow = Local::now().date_naive().succ_opt().unwrap();
        let dob = tomorrow.format("%Y-%m-%d").to_string();
        assert_eq!(
            validate("Jane Doe", &dob, "3.5"),
            Err(ValidationError::DobInFuture)
        );
    }

    #[test]
    fn gpa_bounds_are_inclusive() {
        for gpa in ["0", "0.0", "4", "4.0", "2.75"] {
            assert_eq!(check("Jane Doe", "2000-01-01", gpa), Ok(()), "{gpa:?}");
        }
    }

    #[test]
    fn rejects_out_of_range_or_non_numeric_gpa() {
        for gpa in ["-0.1", "4.01", "10", "abc", "", "3.5abc", "NaN", "inf"] {
            assert_eq!(
                check("Jane Doe", "2000-01-01", gpa),
                Err(ValidationError::Gpa),
                "{gpa:?}"
            );
        }
    }

    #[test]
    fn first_failing_rule_wins() {
        assert_eq!(
            check("John2", "not a date", "9"),
            Err(ValidationError::FullName)
        );
        assert_eq!(
            check("John", "2999-01-01", "9"),
            Err(ValidationError::DobInFuture)
        );
    }

    #[test]
    fn messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::FullName.to_string(),
            "Full name should contain only letters and spaces."
        );
        assert_eq!(
            ValidationError::DobFormat.to_string(),
            "Date of Birth must be in YYYY-MM-DD format."
        );
        assert_eq!(
            ValidationError::DobInFuture.to_string(),
            "Date of Birth cannot be a future date."
        );
        assert_eq!(
            ValidationError::Gpa.to_string(),
            "GPA must be a number between 0.0 and 4.0."
        );
    }
}
