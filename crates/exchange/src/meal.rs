use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr, VariantArray};
use validator::ValidationError;

#[derive(
    EnumString,
    Display,
    IntoStaticStr,
    VariantArray,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }

    /// `(value, label)` pairs in display order.
    pub fn choices() -> impl Iterator<Item = (&'static str, &'static str)> {
        Meal::VARIANTS.iter().map(|meal| (meal.value(), meal.label()))
    }

    /// Submitted form value.
    pub fn value(&self) -> &'static str {
        self.into()
    }
}

/// Accepts exactly one of the submitted meal values, case-sensitive.
pub fn meal_choice(value: &str) -> Result<Meal, ValidationError> {
    Meal::from_str(value).map_err(|_| mxchange_shared::choice_error())
}
