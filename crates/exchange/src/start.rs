use mxchange_shared::required;
use serde::Serialize;
use time::Date;
use validator::{Validate, ValidationErrors};

use crate::{Meal, meal_choice};

/// Raw "start exchange" submission. Absent fields are empty strings.
#[derive(Debug, Default, Clone, Validate)]
pub struct StartExchangeForm {
    #[validate(custom(function = "required"))]
    pub guest: String,
    pub date: String,
    pub meal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeStartRequest {
    pub guest: String,
    #[serde(serialize_with = "mxchange_shared::serialize_date")]
    pub date: Date,
    pub meal: Meal,
}

impl StartExchangeForm {
    /// Checks every field once, keeping the parsed values.
    fn parsed(&self) -> Result<ExchangeStartRequest, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_default();

        let date = mxchange_shared::date(&self.date)
            .map_err(|e| errors.add("date", e))
            .ok();
        let meal = meal_choice(&self.meal)
            .map_err(|e| errors.add("meal", e))
            .ok();

        match (date, meal) {
            (Some(date), Some(meal)) if errors.is_empty() => Ok(ExchangeStartRequest {
                guest: self.guest.trim().to_owned(),
                date,
                meal,
            }),
            _ => Err(errors),
        }
    }
}

/// Builds the form from submitted `(field, value)` pairs. The first value of a
/// repeated field wins and unknown fields are ignored.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StartExchangeForm {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let (mut guest, mut date, mut meal) = (None, None, None);

        for (field, value) in iter {
            let slot = match field.as_ref() {
                "guest" => &mut guest,
                "date" => &mut date,
                "meal" => &mut meal,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into());
        }

        Self {
            guest: guest.unwrap_or_default(),
            date: date.unwrap_or_default(),
            meal: meal.unwrap_or_default(),
        }
    }
}

/// Validates every field of the form and returns the typed request, or all
/// field errors at once.
pub fn validate_start(form: &StartExchangeForm) -> mxchange_shared::Result<ExchangeStartRequest> {
    Ok(form.parsed()?)
}

impl TryFrom<StartExchangeForm> for ExchangeStartRequest {
    type Error = mxchange_shared::Error;

    fn try_from(value: StartExchangeForm) -> Result<Self, Self::Error> {
        validate_start(&value)
    }
}
