use axum::{
    Json,
    extract::{Form, rejection::FormRejection},
};
use mxchange_exchange::{
    EndExchangeForm, ExchangeEndRequest, ExchangeStartRequest, Meal, StartExchangeForm,
};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct MealChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// GET /exchanges/meals - Choices offered by the start form
pub async fn meals() -> Json<Vec<MealChoice>> {
    Json(
        Meal::choices()
            .map(|(value, label)| MealChoice { value, label })
            .collect(),
    )
}

/// POST /exchanges/start
///
/// # Returns
/// - 200 OK: the validated request
/// - 422 Unprocessable Entity: field errors for every rejected field
/// - 415 / 422: JSON error when the body is not a readable form
#[tracing::instrument(skip_all)]
pub async fn start(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<ExchangeStartRequest>, AppError> {
    let Form(pairs) = form?;
    let input: StartExchangeForm = pairs.into_iter().collect();
    let request = mxchange_exchange::validate_start(&input)?;

    tracing::info!(
        guest = %request.guest,
        date = %request.date,
        meal = %request.meal,
        "Exchange start accepted"
    );

    Ok(Json(request))
}

/// POST /exchanges/end
#[tracing::instrument(skip_all)]
pub async fn end(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<ExchangeEndRequest>, AppError> {
    let Form(pairs) = form?;
    let input: EndExchangeForm = pairs.into_iter().collect();
    let request = mxchange_exchange::validate_end(&input)?;

    tracing::info!(date = %request.date, "Exchange end accepted");

    Ok(Json(request))
}
