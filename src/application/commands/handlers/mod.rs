//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod ask_handlers;
mod export_handlers;
mod share_handlers;
mod story_handlers;

pub use ask_handlers::*;
pub use export_handlers::*;
pub use share_handlers::*;
pub use story_handlers::*;
