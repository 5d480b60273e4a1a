use crate::ports::AllocPolicy;
use crate::services::FallibleAlloc;
use a_reply_domain::{AddrTtl, HostEntry, Reply, ReplyError};
use std::sync::Arc;
use tracing::debug;

/// Projects a [`Reply`] onto the legacy host-entry and `(address, ttl)` array shapes.
pub struct LegacyBridge {
    alloc: FallibleAlloc,
}

impl LegacyBridge {
    pub fn new(policy: Arc<dyn AllocPolicy>) -> Self {
        Self {
            alloc: FallibleAlloc::new(policy),
        }
    }

    /// Copies the reply into a freshly allocated [`HostEntry`].
    ///
    /// All addresses are packed into a single block of
    /// `address_count * address_length` bytes.
    pub fn to_host_entry(&self, reply: &Reply) -> Result<HostEntry, ReplyError> {
        let name = self.alloc.copy_str(reply.name())?;

        let mut aliases = self.alloc.vec_with_capacity(reply.alias_count())?;
        for alias in reply.aliases() {
            aliases.push(self.alloc.copy_str(alias)?);
        }

        let block_len = reply
            .address_count()
            .checked_mul(reply.address_length())
            .ok_or(ReplyError::OutOfMemory)?;
        let mut block = self.alloc.vec_with_capacity::<u8>(block_len)?;
        for address in reply.addresses() {
            block.extend_from_slice(&address.octets);
        }

        debug!(
            name = %name,
            aliases = aliases.len(),
            addresses = reply.address_count(),
            h_addrtype = reply.address_family().as_raw(),
            "Host entry built"
        );

        Ok(HostEntry::new(name, aliases, reply.address_family(), block))
    }

    /// Writes up to `addrttls.len()` entries in reply order and returns how many were
    /// written. Never fails; extra addresses are dropped.
    pub fn fill_ttl_array(reply: &Reply, addrttls: &mut [AddrTtl]) -> usize {
        let mut written = 0;
        for (slot, address) in addrttls.iter_mut().zip(reply.addresses()) {
            *slot = AddrTtl::new(address.ip(), address.ttl);
            written += 1;
        }
        written
    }
}
