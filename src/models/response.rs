//! API response bodies

use serde::{Deserialize, Serialize};

use super::session::SessionRecord;
use crate::predictor::Prediction;

/// Service tag carried in every response
pub const SERVICE_ID: &str = "@cskhtoollxk";

pub const EXPLANATION: &str = "Dự đoán dựa trên phân tích thống kê Tần suất, EMA và Markov";

pub const FALLBACK_ERROR: &str = "Lỗi hệ thống hoặc không thể lấy dữ liệu";
pub const FALLBACK_PREDICTION: &str = "Không thể dự đoán";
pub const FALLBACK_CONFIDENCE: &str = "0%";
pub const FALLBACK_EXPLANATION: &str = "Đang chờ dữ liệu lịch sử";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub id: String,
    pub phien_truoc: i64,
    pub xuc_xac: [i64; 3],
    pub tong_xuc_xac: i64,
    pub ket_qua: String,
    pub phien_sau: i64,
    pub du_doan: String,
    pub do_tin_cay: String,
    pub giai_thich: String,
}

impl PredictionResponse {
    pub fn new(current: &SessionRecord, next_session_id: i64, prediction: &Prediction) -> Self {
        Self {
            id: SERVICE_ID.to_string(),
            phien_truoc: current.session_id,
            xuc_xac: current.dice(),
            tong_xuc_xac: current.total,
            ket_qua: current.result.clone(),
            phien_sau: next_session_id,
            du_doan: prediction.outcome.label().to_string(),
            do_tin_cay: prediction.confidence_label(),
            giai_thich: EXPLANATION.to_string(),
        }
    }
}

/// Body returned with HTTP 500 whenever a prediction cannot be made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackResponse {
    pub id: String,
    pub error: String,
    pub du_doan: String,
    pub do_tin_cay: String,
    pub giai_thich: String,
}

impl Default for FallbackResponse {
    fn default() -> Self {
        Self {
            id: SERVICE_ID.to_string(),
            error: FALLBACK_ERROR.to_string(),
            du_doan: FALLBACK_PREDICTION.to_string(),
            do_tin_cay: FALLBACK_CONFIDENCE.to_string(),
            giai_thich: FALLBACK_EXPLANATION.to_string(),
        }
    }
}
