use a_reply_application::ports::MessageDecoder;
use a_reply_domain::{DecodeError, DecodedAnswer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// Decoder that ignores its input and replays a preset outcome.
pub struct MockMessageDecoder {
    outcome: RwLock<Result<DecodedAnswer, DecodeError>>,
    calls: AtomicUsize,
}

impl MockMessageDecoder {
    pub fn returning(answer: DecodedAnswer) -> Self {
        Self {
            outcome: RwLock::new(Ok(answer)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DecodeError) -> Self {
        Self {
            outcome: RwLock::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_outcome(&self, outcome: Result<DecodedAnswer, DecodeError>) {
        *self.outcome.write().unwrap() = outcome;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MessageDecoder for MockMessageDecoder {
    fn decode(&self, _message: &[u8]) -> Result<DecodedAnswer, DecodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.read().unwrap().clone()
    }
}
