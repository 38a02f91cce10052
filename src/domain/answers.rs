//! Canned Answers - 问答的固定回答
//!
//! 按关键词（robot > door > story）选择回答和配图提示词

/// 问题的回答及配图提示词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedAnswer {
    pub answer: String,
    pub image_prompt: String,
}

pub fn answer_question(question: &str) -> CannedAnswer {
    let lowered = question.to_lowercase();

    let (answer, image_prompt) = if lowered.contains("robot") {
        (
            "Robots are fascinating mechanical beings that can perform various tasks. They represent the intersection of technology and intelligence, often serving as helpers, companions, or even protagonists in stories.".to_string(),
            "A friendly robot in a futuristic setting".to_string(),
        )
    } else if lowered.contains("door") {
        (
            "Doors are portals to new possibilities. They can lead to adventure, mystery, or discovery. In stories, doors often symbolize transitions and new beginnings.".to_string(),
            "A mysterious door in an ancient setting".to_string(),
        )
    } else if lowered.contains("story") {
        (
            "Stories are powerful tools for imagination and learning. They transport us to different worlds, teach us lessons, and help us understand complex ideas through narrative.".to_string(),
            "A magical storybook opening with light".to_string(),
        )
    } else {
        (
            format!("That's an interesting question about '{question}'. While I'm running in demo mode, I can tell you that this topic is worth exploring further through research and creative thinking."),
            format!("A creative illustration related to {question}"),
        )
    };

    CannedAnswer {
        answer,
        image_prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_takes_priority_over_door() {
        let answer = answer_question("Can a ROBOT open a door?");
        assert!(answer.answer.starts_with("Robots are fascinating"));
        assert_eq!(answer.image_prompt, "A friendly robot in a futuristic setting");
    }

    #[test]
    fn test_story_answer() {
        let answer = answer_question("Tell me a story about tea");
        assert!(answer.answer.starts_with("Stories are powerful"));
        assert_eq!(answer.image_prompt, "A magical storybook opening with light");
    }

    #[test]
    fn test_plural_stories_is_generic() {
        // "stories" 不包含子串 "story"
        let answer = answer_question("Why do we tell stories?");
        assert!(answer.answer.starts_with("That's an interesting question about"));
    }

    #[test]
    fn test_generic_answer_quotes_question() {
        let answer = answer_question("What is tea?");
        assert!(answer.answer.contains("'What is tea?'"));
        assert_eq!(answer.image_prompt, "A creative illustration related to What is tea?");
    }
}
