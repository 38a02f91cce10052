//! Share HTTP Handlers

use axum::extract::{Path, State};
use http::{header, HeaderMap};
use std::sync::Arc;

use crate::application::{GetSharedStory, ShareStory, ShareStoryResponse};
use crate::domain::story::Story;
use crate::infrastructure::http::dto::{ApiJson, StoryPayloadRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 分享故事，返回可访问的链接
pub async fn share_story(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<StoryPayloadRequest>,
) -> Result<ApiJson<ShareStoryResponse>, ApiError> {
    let story = req.into_story()?;
    let base_url = share_base_url(&state, &headers);

    let response = state
        .share_story_handler
        .handle(ShareStory { story, base_url })
        .await?;

    Ok(ApiJson(response))
}

/// 查看已分享的故事
pub async fn view_shared_story(
    State(state): State<Arc<AppState>>,
    Path(story_id): Path<String>,
) -> Result<ApiJson<Story>, ApiError> {
    let story = state
        .get_shared_story_handler
        .handle(GetSharedStory { story_id })
        .await?;

    Ok(ApiJson(story))
}

/// 配置的 Base URL 优先，其次请求的 Host 头，最后是监听地址
fn share_base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.public_base_url {
        return base.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(|host| format!("http://{}", host))
        .unwrap_or_else(|| state.listen_base_url.clone())
}
