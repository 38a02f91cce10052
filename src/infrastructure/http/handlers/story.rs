//! Story HTTP Handlers

use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::GenerateStory;
use crate::domain::story::Story;
use crate::infrastructure::http::dto::ApiJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateStoryRequest {
    pub idea: Option<String>,
    pub genre: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub art_style: Option<String>,
}

/// 根据创意生成带配图的故事
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateStoryRequest>,
) -> Result<ApiJson<Story>, ApiError> {
    let command = GenerateStory {
        idea: req.idea.unwrap_or_default(),
        genre: req.genre,
        tone: req.tone,
        audience: req.audience,
        art_style: req.art_style,
    };

    let story = state.generate_story_handler.handle(command).await?;
    Ok(ApiJson(story))
}
