use serde::Serialize;

/// Forecast figures, rounded to 2 decimal places.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub message: String,
    pub predicted_sales: f64,
    pub predicted_profit: f64,
}
