use a_reply_domain::ReplyError;
use std::alloc::Layout;

/// Returned by an [`AllocPolicy`] that refuses an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocRefused;

impl From<AllocRefused> for ReplyError {
    fn from(_: AllocRefused) -> Self {
        ReplyError::OutOfMemory
    }
}

/// Admits or refuses each heap allocation made while assembling a reply or a host entry.
///
/// Every allocation in the reply builder and the legacy bridge asks the policy first,
/// then reserves memory fallibly. Wrapping a policy lets tests fail a chosen allocation
/// without touching production code paths.
pub trait AllocPolicy: Send + Sync {
    fn admit(&self, layout: Layout) -> Result<(), AllocRefused>;
}

/// Admits everything; actual exhaustion still surfaces through `try_reserve`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocPolicy;

impl AllocPolicy for SystemAllocPolicy {
    fn admit(&self, _layout: Layout) -> Result<(), AllocRefused> {
        Ok(())
    }
}
