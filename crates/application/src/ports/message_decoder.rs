use a_reply_domain::{DecodeError, DecodedAnswer};

/// Turns a raw DNS message into the question name plus the ordered CNAME links and
/// address nodes of its answer chain.
///
/// Implementations own all wire-level validation: truncation, record data lengths,
/// question count and owner-name consistency. Errors are passed through to callers
/// unchanged.
pub trait MessageDecoder: Send + Sync {
    fn decode(&self, message: &[u8]) -> Result<DecodedAnswer, DecodeError>;
}
