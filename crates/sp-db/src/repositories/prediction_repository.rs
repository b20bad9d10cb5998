//! Prediction repository.

use crate::{DbError, Result as DbErrorResult};

use sp_core::Prediction;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct PredictionRepository {
    pool: SqlitePool,
}

fn map_prediction(row: &SqliteRow) -> DbErrorResult<Prediction> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Prediction {
        id: row.try_get("id")?,
        year: row.try_get("year")?,
        month: row.try_get("month")?,
        units_sold: row.try_get("units_sold")?,
        sale_price: row.try_get("sale_price")?,
        cogs: row.try_get("cogs")?,
        predicted_sales: row.try_get("predicted_sales")?,
        predicted_profit: row.try_get("predicted_profit")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in prediction.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        user_id: row.try_get("user_id")?,
    })
}

impl PredictionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert `prediction` and return it with its assigned id.
    pub async fn create(&self, prediction: &Prediction) -> DbErrorResult<Prediction> {
        let created_at = prediction.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO predictions (
                    year, month, units_sold, sale_price, cogs,
                    predicted_sales, predicted_profit, created_at, user_id
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(prediction.year)
        .bind(prediction.month)
        .bind(prediction.units_sold)
        .bind(prediction.sale_price)
        .bind(prediction.cogs)
        .bind(prediction.predicted_sales)
        .bind(prediction.predicted_profit)
        .bind(created_at)
        .bind(prediction.user_id)
        .execute(&self.pool)
        .await?;

        Ok(Prediction {
            id: result.last_insert_rowid(),
            ..prediction.clone()
        })
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Prediction>> {
        let rows = sqlx::query(
            r#"
                SELECT id, year, month, units_sold, sale_price, cogs,
                    predicted_sales, predicted_profit, created_at, user_id
                FROM predictions
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_prediction).collect()
    }

    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Vec<Prediction>> {
        let rows = sqlx::query(
            r#"
                SELECT id, year, month, units_sold, sale_price, cogs,
                    predicted_sales, predicted_profit, created_at, user_id
                FROM predictions
                WHERE user_id = ?
                ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_prediction).collect()
    }
}
