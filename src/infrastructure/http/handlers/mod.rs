//! HTTP Handlers

mod ask;
mod export;
mod health;
mod scene;
mod share;
mod story;

pub use ask::*;
pub use export::*;
pub use health::*;
pub use scene::*;
pub use share::*;
pub use story::*;
