//! Story Templates - 固定叙事模板
//!
//! 纯字符串格式化，不涉及随机性，也没有失败路径

use super::{Scene, Story, StoryIdea, StoryStyle, StoryTemplate};

/// 按模板生成故事（不含配图）
pub fn compose_story(template: StoryTemplate, idea: &StoryIdea, style: &StoryStyle) -> Story {
    match template {
        StoryTemplate::Primary => primary_story(idea, style),
        StoryTemplate::Fallback => fallback_story(idea, style),
    }
}

/// 五幕主模板
pub fn primary_story(idea: &StoryIdea, style: &StoryStyle) -> Story {
    let StoryStyle {
        genre,
        tone,
        audience,
        art_style,
    } = style;
    let idea = idea.as_str();

    let scenes = vec![
        Scene::new(
            1,
            "The Beginning",
            format!(
                "In a {genre} world, our story begins with {idea}. The atmosphere was filled with {tone} energy as the adventure was about to unfold. The {audience} audience would soon discover an incredible tale."
            ),
            format!("A {art_style} scene showing {idea} in a {genre} setting"),
        ),
        Scene::new(
            2,
            "The Discovery",
            format!(
                "As the story progressed, new elements of {idea} came to light. Each moment brought fresh surprises and unexpected turns. The {tone} nature of the tale kept everyone engaged."
            ),
            format!("A {art_style} illustration of the discovery moment related to {idea}"),
        ),
        Scene::new(
            3,
            "The Challenge",
            format!(
                "Suddenly, a great challenge appeared. The world of {idea} faced its greatest test yet. The {tone} atmosphere intensified as the stakes grew higher."
            ),
            format!("A dramatic {art_style} scene showing the challenge in {idea}"),
        ),
        Scene::new(
            4,
            "The Climax",
            format!(
                "Everything came to a head in an explosive moment. The true nature of {idea} was revealed. The {audience} watched in amazement as events unfolded."
            ),
            format!("An intense {art_style} illustration of the climactic moment in {idea}"),
        ),
        Scene::new(
            5,
            "The Resolution",
            format!(
                "Finally, everything came together. The story of {idea} reached its natural conclusion. The {tone} journey had transformed everyone involved."
            ),
            format!("A satisfying {art_style} conclusion scene for {idea}"),
        ),
    ];

    Story::new(
        format!("The Tale of {idea}"),
        genre.clone(),
        format!("An {tone} story about {idea}"),
        scenes,
    )
}

/// 三幕精简模板
pub fn fallback_story(idea: &StoryIdea, style: &StoryStyle) -> Story {
    let StoryStyle {
        genre,
        tone,
        art_style,
        ..
    } = style;
    let idea = idea.as_str();

    let scenes = vec![
        Scene::new(
            1,
            "Once Upon a Time",
            format!("In a world of {genre}, there was {idea}. The story begins to unfold."),
            format!("A simple {art_style} scene of {idea}"),
        ),
        Scene::new(
            2,
            "And Then...",
            format!("Something interesting happened with {idea}, leading to new discoveries."),
            format!("A {art_style} illustration of {idea} in action"),
        ),
        Scene::new(
            3,
            "The Plot Thickens",
            format!("The situation with {idea} became more complex and intriguing."),
            format!("A detailed {art_style} scene focused on {idea}"),
        ),
    ];

    Story::new(
        format!("A Simple Tale of {idea}"),
        genre.clone(),
        format!("A {tone} story"),
        scenes,
    )
}
