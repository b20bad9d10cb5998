//! Prediction handler

use crate::{ApiResult, PredictRequest, PredictResponse};
use crate::state::AppState;

use sp_core::{Prediction, forecast};
use sp_db::PredictionRepository;

use axum::{Json, extract::State};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// POST /api/v1/predict
///
/// Forecast sales and profit for the year after the requested one,
/// persist the run, and return the rounded figures.
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let forecast = forecast::forecast(req.units_sold, req.sale_price, req.cogs);

    let prediction = Prediction::new(
        req.year + 1,
        req.month,
        req.units_sold,
        req.sale_price,
        req.cogs,
        forecast.sales,
        forecast.profit,
        req.user_id,
    );

    let repo = PredictionRepository::new(state.pool.clone());
    let stored = repo.create(&prediction).await?;

    log::info!(
        "Stored prediction {} for user {} ({}-{:02})",
        stored.id,
        stored.user_id,
        stored.year,
        stored.month
    );

    Ok(Json(PredictResponse {
        message: "Prediction successful".to_string(),
        predicted_sales: round2(forecast.sales),
        predicted_profit: round2(forecast.profit),
    }))
}
