use serde::Deserialize;

/// Body of POST /api/v1/predict.
///
/// `user_id` is taken at face value; predictions for ids the users table
/// has never seen are accepted.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub year: i32,
    pub month: i32,
    pub units_sold: f64,
    pub sale_price: f64,
    pub cogs: f64,
    pub user_id: i64,
}
