use thiserror::Error;

/// Failure classification shared by every error surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    MalformedMessage,
    NoData,
    OutOfMemory,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::MalformedMessage => "MALFORMED_MESSAGE",
            ErrorKind::NoData => "NO_DATA",
            ErrorKind::OutOfMemory => "OUT_OF_MEMORY",
        }
    }
}

/// Errors reported by a message decoder before any reply is assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed DNS message: {0}")]
    Malformed(String),

    #[error("Expected exactly one question, found {0}")]
    QuestionCount(usize),

    #[error("Answer owner {owner} does not match question {question}")]
    NameMismatch { question: String, owner: String },

    #[error("Message is not a response")]
    NotAResponse,

    #[error("Response carries error code {0}")]
    ResponseCode(String),

    #[error("No matching record type in answer section")]
    NoMatchingRecords,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Malformed(_)
            | DecodeError::QuestionCount(_)
            | DecodeError::NameMismatch { .. }
            | DecodeError::NotAResponse => ErrorKind::MalformedMessage,
            DecodeError::ResponseCode(_) | DecodeError::NoMatchingRecords => ErrorKind::NoData,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Answer section holds neither addresses nor aliases")]
    NoData,

    #[error("Out of memory while assembling reply")]
    OutOfMemory,
}

impl ReplyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReplyError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ReplyError::Decode(e) => e.kind(),
            ReplyError::NoData => ErrorKind::NoData,
            ReplyError::OutOfMemory => ErrorKind::OutOfMemory,
        }
    }
}

impl From<std::collections::TryReserveError> for ReplyError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ReplyError::OutOfMemory
    }
}
