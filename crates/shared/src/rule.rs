//! Field rules shared by every form. `required` plugs into
//! `#[validate(custom(function = ...))]`; rules that parse return the parsed value.

use std::borrow::Cow;

use serde::Serializer;
use time::{Date, macros::format_description};
use validator::ValidationError;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_DATE_MESSAGE: &str = "Not a valid date value.";
pub const INVALID_CHOICE_MESSAGE: &str = "Not a valid choice.";

pub fn required_error() -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED_MESSAGE))
}

pub fn choice_error() -> ValidationError {
    ValidationError::new("choice").with_message(Cow::Borrowed(INVALID_CHOICE_MESSAGE))
}

/// Rejects empty and whitespace-only values.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required_error());
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date, ignoring surrounding whitespace.
pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
}

/// A required calendar date: blank is "required", anything unparseable is "not a valid date".
pub fn date(value: &str) -> Result<Date, ValidationError> {
    required(value)?;

    parse_date(value).map_err(|_| {
        ValidationError::new("date").with_message(Cow::Borrowed(INVALID_DATE_MESSAGE))
    })
}

/// `serialize_with` helper writing a date as `YYYY-MM-DD`.
pub fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}
