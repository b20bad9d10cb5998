use crate::PredictionDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictionListResponse {
    pub predictions: Vec<PredictionDto>,
}
