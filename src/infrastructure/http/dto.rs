//! Data Transfer Objects

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::story::Story;

// ============================================================================
// JSON 提取器
// ============================================================================

/// JSON 请求/响应包装，请求体解析失败时返回 400 `{"error": ...}`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

// ============================================================================
// Story payload
// ============================================================================

/// 分享 / 导出请求：`{"story": {...}}`
#[derive(Debug, Deserialize)]
pub struct StoryPayloadRequest {
    pub story: Option<serde_json::Value>,
}

impl StoryPayloadRequest {
    /// 缺失、null 或空对象视为未提供；结构不合法返回 400
    pub fn into_story(self) -> Result<Story, ApiError> {
        let value = match self.story {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Object(map)) if map.is_empty() => None,
            Some(value) => Some(value),
        };
        let value = value.ok_or_else(|| ApiError::BadRequest("Story data is required".into()))?;

        Story::from_json(value).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}
