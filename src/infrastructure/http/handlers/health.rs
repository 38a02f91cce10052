//! Health Handlers

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DemoModeResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub api_response: &'static str,
}

/// 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "AI Storyteller API is running",
    })
}

/// 演示模式自检（不需要任何 API Key）
pub async fn test_openai() -> Json<DemoModeResponse> {
    Json(DemoModeResponse {
        status: "success",
        message: "Demo mode is working correctly - no API key required",
        api_response: "Demo mode active - using pre-generated content",
    })
}
