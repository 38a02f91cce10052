//! Story Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::StoryError;

/// 分享故事唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(Uuid);

impl StoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 故事创意（去除首尾空白后不能为空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryIdea(String);

impl StoryIdea {
    pub fn new(idea: impl AsRef<str>) -> Result<Self, StoryError> {
        let idea = idea.as_ref().trim();
        if idea.is_empty() {
            return Err(StoryError::MissingIdea);
        }
        Ok(Self(idea.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryIdea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成故事的风格参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryStyle {
    pub genre: String,
    pub tone: String,
    pub audience: String,
    pub art_style: String,
}

pub const DEFAULT_GENRE: &str = "fantasy";
pub const DEFAULT_TONE: &str = "adventurous";
pub const DEFAULT_AUDIENCE: &str = "general";
pub const DEFAULT_ART_STYLE: &str = "realistic";

impl Default for StoryStyle {
    fn default() -> Self {
        Self {
            genre: DEFAULT_GENRE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            art_style: DEFAULT_ART_STYLE.to_string(),
        }
    }
}

impl StoryStyle {
    /// 用请求参数覆盖默认值，未提供的字段保持默认
    pub fn from_parts(
        genre: Option<String>,
        tone: Option<String>,
        audience: Option<String>,
        art_style: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            genre: genre.unwrap_or(defaults.genre),
            tone: tone.unwrap_or(defaults.tone),
            audience: audience.unwrap_or(defaults.audience),
            art_style: art_style.unwrap_or(defaults.art_style),
        }
    }
}

/// 场景重新生成范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateMode {
    Text,
    Image,
    Both,
}

impl RegenerateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegenerateMode::Text => "text",
            RegenerateMode::Image => "image",
            RegenerateMode::Both => "both",
        }
    }

    pub fn includes_text(&self) -> bool {
        matches!(self, RegenerateMode::Text | RegenerateMode::Both)
    }

    pub fn includes_image(&self) -> bool {
        matches!(self, RegenerateMode::Image | RegenerateMode::Both)
    }
}

impl Default for RegenerateMode {
    fn default() -> Self {
        RegenerateMode::Both
    }
}

impl FromStr for RegenerateMode {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(RegenerateMode::Text),
            "image" => Ok(RegenerateMode::Image),
            "both" => Ok(RegenerateMode::Both),
            other => Err(StoryError::UnknownRegenerateMode(other.to_string())),
        }
    }
}

/// 故事模板
///
/// Primary 为五幕结构；Fallback 为三幕精简版，只能通过配置启用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryTemplate {
    #[default]
    Primary,
    Fallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_is_trimmed() {
        let idea = StoryIdea::new("  a lost key \n").unwrap();
        assert_eq!(idea.as_str(), "a lost key");
    }

    #[test]
    fn test_blank_idea_rejected() {
        assert!(matches!(StoryIdea::new("   "), Err(StoryError::MissingIdea)));
    }

    #[test]
    fn test_style_defaults() {
        let style = StoryStyle::from_parts(Some("horror".into()), None, None, None);
        assert_eq!(style.genre, "horror");
        assert_eq!(style.tone, "adventurous");
        assert_eq!(style.audience, "general");
        assert_eq!(style.art_style, "realistic");
    }

    #[test]
    fn test_regenerate_mode() {
        assert_eq!("both".parse::<RegenerateMode>().unwrap(), RegenerateMode::Both);
        assert!(matches!(
            "none".parse::<RegenerateMode>(),
            Err(StoryError::UnknownRegenerateMode(mode)) if mode == "none"
        ));
        assert!(RegenerateMode::Text.includes_text());
        assert!(!RegenerateMode::Text.includes_image());
        assert!(RegenerateMode::Both.includes_image());
    }
}
