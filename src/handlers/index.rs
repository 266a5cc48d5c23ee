//! Root informational handler

pub const WELCOME: &str = "Chào mừng đến API dự đoán Tài Xỉu! Truy cập /api/2k15 để xem dự đoán.";

pub async fn welcome() -> &'static str {
    WELCOME
}
