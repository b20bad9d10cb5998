use serde::Serialize;

/// Acknowledgement for DELETE endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: i64,
}
