//! Stored sales/profit prediction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One forecast run, persisted with its inputs so past predictions can be
/// listed per user or across the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    pub year: i32,
    pub month: i32,
    pub units_sold: f64,
    pub sale_price: f64,
    pub cogs: f64,
    pub predicted_sales: f64,
    pub predicted_profit: f64,
    pub created_at: DateTime<Utc>,
    /// Caller-supplied owner; not referentially checked
    pub user_id: i64,
}

impl Prediction {
    /// Build an unsaved prediction (id is assigned on insert).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: i32,
        units_sold: f64,
        sale_price: f64,
        cogs: f64,
        predicted_sales: f64,
        predicted_profit: f64,
        user_id: i64,
    ) -> Self {
        Self {
            id: 0,
            year,
            month,
            units_sold,
            sale_price,
            cogs,
            predicted_sales,
            predicted_profit,
            created_at: Utc::now(),
            user_id,
        }
    }
}
