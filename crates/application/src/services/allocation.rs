use crate::ports::AllocPolicy;
use a_reply_domain::ReplyError;
use std::alloc::Layout;
use std::sync::Arc;
use tracing::warn;

/// Fallible allocation helpers gated by an [`AllocPolicy`].
///
/// Nothing here aborts on exhaustion: a refusal from the policy or a failed
/// `try_reserve_exact` both become [`ReplyError::OutOfMemory`], and whatever the
/// caller built so far is released by ownership as the error propagates.
/// Zero-length requests never allocate and are not shown to the policy.
#[derive(Clone)]
pub struct FallibleAlloc {
    policy: Arc<dyn AllocPolicy>,
}

impl FallibleAlloc {
    pub fn new(policy: Arc<dyn AllocPolicy>) -> Self {
        Self { policy }
    }

    pub fn copy_str(&self, source: &str) -> Result<String, ReplyError> {
        let mut out = String::new();
        if source.is_empty() {
            return Ok(out);
        }

        self.admit(Layout::array::<u8>(source.len()))?;
        out.try_reserve_exact(source.len()).inspect_err(|_| {
            warn!(bytes = source.len(), "String reservation failed");
        })?;
        out.push_str(source);
        Ok(out)
    }

    pub fn vec_with_capacity<T>(&self, capacity: usize) -> Result<Vec<T>, ReplyError> {
        let mut out = Vec::new();
        if capacity == 0 {
            return Ok(out);
        }

        self.admit(Layout::array::<T>(capacity))?;
        out.try_reserve_exact(capacity).inspect_err(|_| {
            warn!(capacity, "Vector reservation failed");
        })?;
        Ok(out)
    }

    fn admit(&self, layout: Result<Layout, std::alloc::LayoutError>) -> Result<(), ReplyError> {
        let layout = layout.map_err(|_| ReplyError::OutOfMemory)?;
        self.policy.admit(layout).map_err(|refused| {
            warn!(bytes = layout.size(), "Allocation refused by policy");
            ReplyError::from(refused)
        })
    }
}
