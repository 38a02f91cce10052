//! Story Aggregate - 故事聚合根

use serde::{Deserialize, Serialize};

use super::{Scene, StoryError};

/// 故事聚合
///
/// 一个 Story 由若干按顺序排列的 Scene 组成。
/// 分享后的快照不会再被修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub theme: String,
    pub scenes: Vec<Scene>,
}

impl Story {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        theme: impl Into<String>,
        scenes: Vec<Scene>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            theme: theme.into(),
            scenes,
        }
    }

    /// 从任意 JSON 解析故事（分享 / 导出入口使用）
    pub fn from_json(value: serde_json::Value) -> Result<Self, StoryError> {
        serde_json::from_value(value).map_err(|e| StoryError::InvalidStory(e.to_string()))
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// 导出 PDF 时的下载文件名
    pub fn pdf_file_name(&self) -> String {
        format!("{}.pdf", self.title.replace(' ', "_"))
    }

    /// 封面显示的题材（首字母大写）
    pub fn display_genre(&self) -> Option<String> {
        if self.genre.trim().is_empty() {
            return None;
        }
        Some(title_case(&self.genre))
    }
}

/// 按单词首字母大写，其余小写
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
