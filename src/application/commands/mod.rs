//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：生成、重写、分享、导出

mod ask_commands;
mod export_commands;
mod share_commands;
mod story_commands;

pub mod handlers;

pub use ask_commands::*;
pub use export_commands::*;
pub use share_commands::*;
pub use story_commands::*;
