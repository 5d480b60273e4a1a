mod alloc_policy;
mod message_decoder;

pub use alloc_policy::{AllocPolicy, AllocRefused, SystemAllocPolicy};
pub use message_decoder::MessageDecoder;

// Re-export for convenience
pub use a_reply_domain::{DecodeError, DecodedAnswer};
