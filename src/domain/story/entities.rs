//! Story Context - Entities

use serde::{Deserialize, Serialize};

/// 场景 - 故事的最小叙事单位
///
/// 不变量:
/// - scene_number 从 1 开始，在 Story 内连续递增
/// - image_url 缺失时序列化为 null
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 场景序号（1-based）
    pub scene_number: u32,
    /// 场景标题
    pub title: String,
    /// 场景正文
    pub text: String,
    /// 配图提示词
    pub image_prompt: String,
    /// 配图地址（选图失败时为空）
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Scene {
    pub fn new(
        scene_number: u32,
        title: impl Into<String>,
        text: impl Into<String>,
        image_prompt: impl Into<String>,
    ) -> Self {
        Self {
            scene_number,
            title: title.into(),
            text: text.into(),
            image_prompt: image_prompt.into(),
            image_url: None,
        }
    }

    /// PDF 标题行
    pub fn header(&self) -> String {
        format!("Scene {}: {}", self.scene_number, self.title)
    }

    /// 按空行拆分正文段落，忽略空段
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let scene = Scene::new(3, "The Challenge", "text", "prompt");
        assert_eq!(scene.header(), "Scene 3: The Challenge");
    }

    #[test]
    fn test_paragraphs_skip_blank() {
        let scene = Scene::new(1, "t", "First.\n\n  \n\nSecond.  ", "p");
        let paragraphs: Vec<&str> = scene.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First.", "Second."]);
    }

    #[test]
    fn test_missing_image_url_serializes_null() {
        let scene = Scene::new(1, "t", "x", "p");
        let json = serde_json::to_value(&scene).unwrap();
        assert!(json["image_url"].is_null());
    }
}
