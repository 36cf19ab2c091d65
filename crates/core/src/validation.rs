//! Request-body validation helpers built on the `validator` crate.
//!
//! DTOs derive [`validator::Validate`]; handlers call [`validate_input`] to
//! turn field errors into a single [`CoreError::Validation`] message.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Run `input.validate()` and flatten any errors into a readable message,
/// e.g. `"name: Name is required; phone: Phone is required"`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(flatten_errors(&errors)))
}

/// Field-level validator rejecting empty or whitespace-only strings.
///
/// Use with `#[validate(custom(function = "apnaghar_core::validation::not_blank"))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Money columns are `NUMERIC(12,2)`: ten integer digits at most.
pub const MAX_AMOUNT_EXCLUSIVE: i64 = 10_000_000_000;

/// Field-level validator for prices and costs: `0 <= value < 10^10`.
pub fn money_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative"));
    }
    if *value >= Decimal::from(MAX_AMOUNT_EXCLUSIVE) {
        return Err(ValidationError::new("too_large"));
    }
    Ok(())
}

pub fn latitude(value: &Decimal) -> Result<(), ValidationError> {
    coordinate(value, 90)
}

pub fn longitude(value: &Decimal) -> Result<(), ValidationError> {
    coordinate(value, 180)
}

fn coordinate(value: &Decimal, bound: i64) -> Result<(), ValidationError> {
    if value.abs() > Decimal::from(bound) {
        return Err(ValidationError::new("out_of_range"));
    }
    Ok(())
}

/// Deserialize a required text field, reading JSON `null` as `""` so the
/// `not_blank` check reports it like any other blank value.
///
/// Pair with `#[serde(default)]` to cover an absent key as well.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalize an optional free-text field: trim it and treat blank as absent.
pub fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid ({})", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(custom(function = "not_blank", message = "Name is required"))]
        name: String,
        #[validate(length(min = 6))]
        password: String,
    }

    #[test]
    fn valid_input_passes() {
        let input = Sample {
            name: "Asha".into(),
            password: "secret1".into(),
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn errors_are_flattened_and_sorted() {
        let input = Sample {
            name: "   ".into(),
            password: "abc".into(),
        };
        let err = validate_input(&input).unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg)
                if msg == "name: Name is required; password: invalid (length)"
        );
    }

    #[test]
    fn amounts_must_fit_the_money_column() {
        assert!(money_amount(&Decimal::ZERO).is_ok());
        assert!(money_amount(&Decimal::new(250_000_000, 2)).is_ok());
        assert!(money_amount(&Decimal::new(999_999_999_999, 2)).is_ok());
        assert!(money_amount(&Decimal::new(-1, 0)).is_err());
        assert!(money_amount(&Decimal::from(MAX_AMOUNT_EXCLUSIVE)).is_err());
        assert!(money_amount(&Decimal::from(100_000_000_000i64)).is_err());
    }

    #[test]
    fn coordinates_are_range_checked() {
        assert!(latitude(&Decimal::new(2691, 2)).is_ok());
        assert!(latitude(&Decimal::from(-90)).is_ok());
        assert!(latitude(&Decimal::new(9001, 2)).is_err());
        assert!(longitude(&Decimal::new(7578, 2)).is_ok());
        assert!(longitude(&Decimal::from(181)).is_err());
    }

    #[derive(Debug, serde::Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "null_as_empty")]
        name: String,
    }

    #[test]
    fn null_and_missing_text_read_as_empty() {
        let form: Form = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(form.name, "");
        let form: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(form.name, "");
        let form: Form = serde_json::from_str(r#"{"name": "Asha"}"#).unwrap();
        assert_eq!(form.name, "Asha");
    }

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(blank_to_none(Some("  ")), None);
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some(" +91 98 ")), Some("+91 98".to_string()));
    }
}
