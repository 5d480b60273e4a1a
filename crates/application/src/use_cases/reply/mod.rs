mod build_reply;
mod legacy_bridge;
mod parse_a_reply;

pub use build_reply::ReplyBuilder;
pub use legacy_bridge::LegacyBridge;
pub use parse_a_reply::ParseAReplyUseCase;
