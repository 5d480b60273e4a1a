use crate::ports::AllocPolicy;
use crate::services::FallibleAlloc;
use a_reply_domain::{AddressFamily, DecodedAnswer, Reply, ReplyAddress, ReplyError};
use std::sync::Arc;
use tracing::debug;

/// Assembles a [`Reply`] from decoder output.
///
/// The canonical name is the target of the first CNAME link, or the question name
/// when there is no chain. Every address TTL is capped by the smallest TTL seen on
/// the CNAME chain.
pub struct ReplyBuilder {
    alloc: FallibleAlloc,
}

impl ReplyBuilder {
    pub fn new(policy: Arc<dyn AllocPolicy>) -> Self {
        Self {
            alloc: FallibleAlloc::new(policy),
        }
    }

    pub fn build(&self, decoded: &DecodedAnswer) -> Result<Reply, ReplyError> {
        let family = AddressFamily::Inet;
        let address_count = decoded
            .address_nodes
            .iter()
            .filter(|node| node.family == family)
            .count();

        if decoded.cname_links.is_empty() && address_count == 0 {
            debug!(question = %decoded.question_name, "Answer has no addresses and no aliases");
            return Err(ReplyError::NoData);
        }

        // First link, not the end of the chain.
        let canonical = decoded
            .cname_links
            .first()
            .map_or(decoded.question_name.as_str(), |link| link.target.as_str());
        let name = self.alloc.copy_str(canonical)?;

        let mut aliases = self.alloc.vec_with_capacity(decoded.cname_links.len())?;
        let mut min_cname_ttl = i32::MAX;
        for link in &decoded.cname_links {
            aliases.push(self.alloc.copy_str(&link.alias)?);
            min_cname_ttl = min_cname_ttl.min(link.ttl);
        }

        let mut addresses = self.alloc.vec_with_capacity(address_count)?;
        for node in decoded
            .address_nodes
            .iter()
            .filter(|node| node.family == family)
        {
            addresses.push(ReplyAddress::new(node.address, node.ttl.min(min_cname_ttl)));
        }

        debug!(
            name = %name,
            aliases = aliases.len(),
            addresses = addresses.len(),
            min_cname_ttl = min_cname_ttl,
            "Reply assembled"
        );

        Ok(Reply::new(name, aliases, family, addresses))
    }
}
