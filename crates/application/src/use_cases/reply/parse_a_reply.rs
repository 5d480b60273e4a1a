use super::{LegacyBridge, ReplyBuilder};
use crate::ports::{AllocPolicy, MessageDecoder};
use a_reply_domain::{release_host_entry, release_reply, AddrTtl, HostEntry, Reply, ReplyError};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Parses a DNS A response into either the extensible [`Reply`] or the legacy
/// host-entry + `(address, ttl)` array shape.
///
/// Holds no per-call state; one instance can serve concurrent callers.
pub struct ParseAReplyUseCase {
    decoder: Arc<dyn MessageDecoder>,
    builder: ReplyBuilder,
    bridge: LegacyBridge,
}

impl ParseAReplyUseCase {
    pub fn new(decoder: Arc<dyn MessageDecoder>, policy: Arc<dyn AllocPolicy>) -> Self {
        Self {
            decoder,
            builder: ReplyBuilder::new(policy.clone()),
            bridge: LegacyBridge::new(policy),
        }
    }

    #[instrument(skip(self, message), fields(len = message.len()))]
    pub fn parse(&self, message: &[u8]) -> Result<Reply, ReplyError> {
        let decoded = self.decoder.decode(message).map_err(|e| {
            debug!(error = %e, kind = e.kind().as_str(), "Decoder rejected message");
            ReplyError::from(e)
        })?;

        self.builder.build(&decoded)
    }

    /// Legacy entry point.
    ///
    /// `naddrttls` holds the usable capacity of `addrttls` on entry and the number of
    /// entries written on success; it is left untouched on error. When `host` is `None`
    /// the host entry is still built and then released.
    #[instrument(skip_all, fields(len = message.len(), capacity = *naddrttls))]
    pub fn parse_legacy(
        &self,
        message: &[u8],
        host: Option<&mut Option<HostEntry>>,
        addrttls: &mut [AddrTtl],
        naddrttls: &mut usize,
    ) -> Result<(), ReplyError> {
        let capacity = *naddrttls;
        if capacity > addrttls.len() {
            return Err(ReplyError::InvalidArgument(
                "addrttl capacity exceeds the supplied buffer",
            ));
        }

        let reply = self.parse(message)?;
        let entry = self.bridge.to_host_entry(&reply)?;

        match host {
            Some(slot) => *slot = Some(entry),
            None => release_host_entry(Some(entry)),
        }

        let written = LegacyBridge::fill_ttl_array(&reply, &mut addrttls[..capacity]);
        release_reply(Some(reply));

        *naddrttls = written;
        Ok(())
    }
}
