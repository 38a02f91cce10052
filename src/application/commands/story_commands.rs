//! Story Commands

/// 生成故事命令
///
/// 除 idea 外的字段缺省时使用默认风格
#[derive(Debug, Clone, Default)]
pub struct GenerateStory {
    pub idea: String,
    pub genre: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub art_style: Option<String>,
}

/// 重新生成场景命令
#[derive(Debug, Clone)]
pub struct RegenerateScene {
    pub scene_text: String,
    pub image_prompt: String,
    pub art_style: String,
    /// "text" | "image" | "both"
    pub mode: String,
}
