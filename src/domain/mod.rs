//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Story Context: 故事与场景
//! - Imagery Context: 图库选图

pub mod imagery;
pub mod story;

// 问答的固定回答
mod answers;

pub use answers::{answer_question, CannedAnswer};
