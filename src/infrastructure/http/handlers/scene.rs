//! Scene HTTP Handlers

use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{RegenerateScene, RegeneratedScene};
use crate::domain::story::{RegenerateMode, DEFAULT_ART_STYLE};
use crate::infrastructure::http::dto::ApiJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegenerateSceneRequest {
    pub scene_text: Option<String>,
    pub image_prompt: Option<String>,
    pub art_style: Option<String>,
    /// text | image | both；缺省为 both，显式 null 不做任何修改
    #[serde(rename = "type", default = "default_mode")]
    pub mode: Option<String>,
}

fn default_mode() -> Option<String> {
    Some(RegenerateMode::default().as_str().to_string())
}

/// 重写场景文字和/或重新配图
pub async fn regenerate_scene(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegenerateSceneRequest>,
) -> Result<ApiJson<RegeneratedScene>, ApiError> {
    let command = RegenerateScene {
        scene_text: req.scene_text.unwrap_or_default(),
        image_prompt: req.image_prompt.unwrap_or_default(),
        art_style: req.art_style.unwrap_or_else(|| DEFAULT_ART_STYLE.to_string()),
        mode: req.mode.unwrap_or_default(),
    };

    let result = state
        .regenerate_scene_handler
        .handle(command)
        .await
        .map_err(|e| {
            ApiError::from(e).with_summary("Failed to regenerate scene. Using fallback options.")
        })?;

    Ok(ApiJson(result))
}
