pub mod reply;

// Re-export use cases
pub use reply::{LegacyBridge, ParseAReplyUseCase, ReplyBuilder};
