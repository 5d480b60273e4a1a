//! A-Reply Infrastructure Layer
//!
//! Wire decoding on top of `hickory-proto`, logging setup, and the
//! [`AReplyParser`] facade that wires both into the application use case.
pub mod dns;
pub mod logging;
pub mod parser;

pub use dns::HickoryMessageDecoder;
pub use parser::{parse_a_reply, parse_a_reply_legacy, AReplyParser};
