//! Sales and profit forecast rule.
//!
//! The financial sample data this system is built around satisfies two
//! accounting identities: sales equal units sold times sale price, and
//! profit equals sales minus cost of goods sold. The forecast applies
//! them directly to the requested figures.

/// Result of a forecast run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub sales: f64,
    pub profit: f64,
}

/// Forecast sales and profit from the planned unit volume, price point,
/// and cost of goods sold.
pub fn forecast(units_sold: f64, sale_price: f64, cogs: f64) -> Forecast {
    let sales = units_sold * sale_price;
    Forecast {
        sales,
        profit: sales - cogs,
    }
}
