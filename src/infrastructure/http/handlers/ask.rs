//! Ask HTTP Handlers

use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{AskQuestion, AskResponse};
use crate::infrastructure::http::dto::ApiJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: Option<String>,
}

/// 回答关于故事的问题并附配图
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AskRequest>,
) -> Result<ApiJson<AskResponse>, ApiError> {
    let command = AskQuestion {
        question: req.question.unwrap_or_default(),
    };

    let response = state
        .ask_question_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from(e).with_summary("Failed to generate response"))?;

    Ok(ApiJson(response))
}
