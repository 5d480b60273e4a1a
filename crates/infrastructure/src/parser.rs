use crate::dns::HickoryMessageDecoder;
use a_reply_application::ports::{AllocPolicy, SystemAllocPolicy};
use a_reply_application::use_cases::ParseAReplyUseCase;
use a_reply_domain::{AddrTtl, Config, DecoderConfig, HostEntry, Reply, ReplyError};
use std::sync::Arc;
use tracing::info;

/// Ready-to-use A reply parser: the hickory decoder plus an allocation policy.
///
/// Carries no per-call state and can be shared across threads.
pub struct AReplyParser {
    use_case: ParseAReplyUseCase,
}

impl AReplyParser {
    pub fn new(decoder: DecoderConfig) -> Self {
        Self::with_policy(decoder, Arc::new(SystemAllocPolicy))
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            reject_non_response = config.decoder.reject_non_response,
            reject_error_rcode = config.decoder.reject_error_rcode,
            "A reply parser configured"
        );
        Self::new(config.decoder)
    }

    pub fn with_policy(decoder: DecoderConfig, policy: Arc<dyn AllocPolicy>) -> Self {
        Self {
            use_case: ParseAReplyUseCase::new(
                Arc::new(HickoryMessageDecoder::new(decoder)),
                policy,
            ),
        }
    }

    pub fn parse(&self, message: &[u8]) -> Result<Reply, ReplyError> {
        self.use_case.parse(message)
    }

    pub fn parse_legacy(
        &self,
        message: &[u8],
        host: Option<&mut Option<HostEntry>>,
        addrttls: &mut [AddrTtl],
        naddrttls: &mut usize,
    ) -> Result<(), ReplyError> {
        self.use_case.parse_legacy(message, host, addrttls, naddrttls)
    }
}

impl Default for AReplyParser {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

/// Parses `message` with the default decoder settings.
pub fn parse_a_reply(message: &[u8]) -> Result<Reply, ReplyError> {
    AReplyParser::default().parse(message)
}

/// Legacy form of [`parse_a_reply`]; see [`ParseAReplyUseCase::parse_legacy`].
pub fn parse_a_reply_legacy(
    message: &[u8],
    host: Option<&mut Option<HostEntry>>,
    addrttls: &mut [AddrTtl],
    naddrttls: &mut usize,
) -> Result<(), ReplyError> {
    AReplyParser::default().parse_legacy(message, host, addrttls, naddrttls)
}
