use sp_core::Prediction;

use serde::Serialize;

/// Stored prediction for JSON serialization
#[derive(Debug, Serialize)]
pub struct PredictionDto {
    pub id: i64,
    pub year: i32,
    pub month: i32,
    pub units_sold: f64,
    pub sale_price: f64,
    pub cogs: f64,
    pub predicted_sales: f64,
    pub predicted_profit: f64,
    pub created_at: i64,
    pub user_id: i64,
}

impl From<Prediction> for PredictionDto {
    fn from(p: Prediction) -> Self {
        Self {
            id: p.id,
            year: p.year,
            month: p.month,
            units_sold: p.units_sold,
            sale_price: p.sale_price,
            cogs: p.cogs,
            predicted_sales: p.predicted_sales,
            predicted_profit: p.predicted_profit,
            created_at: p.created_at.timestamp(),
            user_id: p.user_id,
        }
    }
}
