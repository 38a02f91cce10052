//! Image Category - 图库分类及关键词匹配

use serde::Serialize;

/// 图库分类
///
/// 声明顺序即关键词匹配优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Robot,
    Door,
    Adventure,
    Scifi,
    Mystery,
    Romance,
    Horror,
    Nature,
    Default,
}

/// 提示词关键词表（按优先级排列）
const PROMPT_KEYWORDS: &[(ImageCategory, &[&str])] = &[
    (ImageCategory::Robot, &["robot", "android", "machine", "cyborg"]),
    (ImageCategory::Door, &["door", "gate", "entrance", "portal"]),
    (ImageCategory::Adventure, &["adventure", "journey", "quest", "explore"]),
    (ImageCategory::Scifi, &["space", "alien", "future", "technology"]),
    (ImageCategory::Mystery, &["mystery", "secret", "hidden", "clue"]),
    (ImageCategory::Romance, &["love", "romance", "heart", "relationship"]),
    (ImageCategory::Horror, &["scary", "horror", "fear", "dark"]),
];

/// 题材关键词表（按优先级排列）
const GENRE_KEYWORDS: &[(ImageCategory, &[&str])] = &[
    (ImageCategory::Robot, &["sci", "robot"]),
    (ImageCategory::Mystery, &["mystery", "thriller"]),
    (ImageCategory::Adventure, &["adventure", "fantasy"]),
    (ImageCategory::Romance, &["romance"]),
    (ImageCategory::Horror, &["horror"]),
];

impl ImageCategory {
    pub const ALL: [ImageCategory; 9] = [
        ImageCategory::Robot,
        ImageCategory::Door,
        ImageCategory::Adventure,
        ImageCategory::Scifi,
        ImageCategory::Mystery,
        ImageCategory::Romance,
        ImageCategory::Horror,
        ImageCategory::Nature,
        ImageCategory::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::Robot => "robot",
            ImageCategory::Door => "door",
            ImageCategory::Adventure => "adventure",
            ImageCategory::Scifi => "scifi",
            ImageCategory::Mystery => "mystery",
            ImageCategory::Romance => "romance",
            ImageCategory::Horror => "horror",
            ImageCategory::Nature => "nature",
            ImageCategory::Default => "default",
        }
    }

    /// 提取提示词命中的所有分类（保持优先级顺序）
    pub fn matches_in_prompt(prompt: &str) -> Vec<ImageCategory> {
        let lowered = prompt.to_lowercase();
        PROMPT_KEYWORDS
            .iter()
            .filter(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(category, _)| *category)
            .collect()
    }

    /// 按题材推断分类
    pub fn from_genre(genre: &str) -> Option<ImageCategory> {
        let lowered = genre.to_lowercase();
        GENRE_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(category, _)| *category)
    }

    /// 决定最终分类：提示词 > 题材 > default
    pub fn resolve(prompt: &str, genre: Option<&str>) -> ImageCategory {
        if let Some(first) = Self::matches_in_prompt(prompt).first() {
            return *first;
        }
        genre
            .and_then(Self::from_genre)
            .unwrap_or(ImageCategory::Default)
    }
}

impl std::fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
