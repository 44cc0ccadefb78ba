use serde::Serialize;
use time::Date;
use validator::ValidationErrors;

/// Raw "end exchange" submission.
#[derive(Debug, Default, Clone)]
pub struct EndExchangeForm {
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeEndRequest {
    #[serde(serialize_with = "mxchange_shared::serialize_date")]
    pub date: Date,
}

impl EndExchangeForm {
    fn parsed(&self) -> Result<ExchangeEndRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match mxchange_shared::date(&self.date) {
            Ok(date) => Ok(ExchangeEndRequest { date }),
            Err(e) => {
                errors.add("date", e);
                Err(errors)
            }
        }
    }
}

/// Builds the form from submitted `(field, value)` pairs; the first `date` wins.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EndExchangeForm {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let date = iter
            .into_iter()
            .find(|(field, _)| field.as_ref() == "date")
            .map(|(_, value)| value.into());

        Self {
            date: date.unwrap_or_default(),
        }
    }
}

pub fn validate_end(form: &EndExchangeForm) -> mxchange_shared::Result<ExchangeEndRequest> {
    Ok(form.parsed()?)
}

impl TryFrom<EndExchangeForm> for ExchangeEndRequest {
    type Error = mxchange_shared::Error;

    fn try_from(value: EndExchangeForm) -> Result<Self, Self::Error> {
        validate_end(&value)
    }
}
