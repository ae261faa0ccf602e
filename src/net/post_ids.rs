//! Global post-id allocation.
//!
//! Every post in the network gets a unique, monotonically increasing id
//! from a single shared allocator, no matter which user publishes it.
//! Ids are assigned in publish order and are immutable for the lifetime
//! of the process; deleting a post never frees its id for reuse.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::error::{Result, SocialError};
use crate::model::PostId;

/// Allocator for process-wide unique post ids.
///
/// Ids start at 1 and increase monotonically in allocation order; id 0 is
/// reserved as "invalid". The allocator is safe to share across threads.
#[derive(Debug)]
pub struct PostIdAllocator {
    next: AtomicU64,
}

impl PostIdAllocator {
    /// Creates an allocator whose first allocated id is 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Creates an allocator that resumes from a specific next id.
    ///
    /// # Errors
    /// Returns an error if `next` is 0 (reserved value).
    pub fn with_next(next: PostId) -> Result<Self> {
        if next == 0 {
            return Err(SocialError::InvalidArgument(
                "post id 0 is reserved".into(),
            ));
        }

        Ok(Self {
            next: AtomicU64::new(next),
        })
    }

    /// Allocates the next post id.
    pub fn allocate(&self) -> PostId {
        let id = self.next.fetch_add(1, Ordering::AcqRel);
        trace!(post_id = id, "Allocated post id");
        id
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> PostId {
        self.next.load(Ordering::Acquire)
    }
}

impl Default for PostIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
