//! Export HTTP Handlers

use axum::{body::Body, extract::State, response::Response};
use http::{header, HeaderValue, StatusCode};
use std::sync::Arc;

use crate::application::ExportStoryPdf;
use crate::infrastructure::http::dto::{ApiJson, StoryPayloadRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 导出故事为 PDF 附件
pub async fn export_pdf(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<StoryPayloadRequest>,
) -> Result<Response, ApiError> {
    let story = req.into_story()?;
    let exported = state
        .export_pdf_handler
        .handle(ExportStoryPdf { story })
        .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        header_safe_file_name(&exported.file_name)
    ))
    .map_err(|e| ApiError::internal(format!("Invalid file name header: {}", e)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, exported.data.len())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(exported.data))
        .map_err(|e| ApiError::internal(format!("Failed to build response: {}", e)))
}

/// 头部只允许可见 ASCII，引号和反斜杠也替换掉
fn header_safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect()
}
